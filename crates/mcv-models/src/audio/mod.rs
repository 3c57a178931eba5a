//! Audio output descriptions.

mod eac3;

pub use eac3::*;

use crate::language::LanguageCode;

string_enum! {
    /// Audio codec of an output. Selects which member of `AudioCodecSettings` applies.
    pub enum AudioCodec {
        Aac => "AAC",
        Mp2 => "MP2",
        Mp3 => "MP3",
        Wav => "WAV",
        Aiff => "AIFF",
        Ac3 => "AC3",
        Eac3 => "EAC3",
        Eac3Atmos => "EAC3_ATMOS",
        Vorbis => "VORBIS",
        Opus => "OPUS",
        Passthrough => "PASSTHROUGH",
    }
}

string_enum! {
    /// Whether `audio_type` is taken from the input or from the description.
    pub enum AudioTypeControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

string_enum! {
    pub enum AudioLanguageCodeControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

string_enum! {
    /// Loudness measurement algorithm.
    pub enum AudioNormalizationAlgorithm {
        ItuBs17701 => "ITU_BS_1770_1",
        ItuBs17702 => "ITU_BS_1770_2",
        ItuBs17703 => "ITU_BS_1770_3",
        ItuBs17704 => "ITU_BS_1770_4",
    }
}

string_enum! {
    pub enum AudioNormalizationAlgorithmControl {
        CorrectAudio => "CORRECT_AUDIO",
        MeasureOnly => "MEASURE_ONLY",
    }
}
record! {
    /// Codec selection plus the settings block for that codec.
    pub struct AudioCodecSettings {
        codec: AudioCodec => with_codec,
        #[validate(nested)]
        eac3_settings: Eac3Settings => with_eac3_settings,
    }
}

record! {
    /// Loudness normalization target.
    pub struct AudioNormalizationSettings {
        algorithm: AudioNormalizationAlgorithm => with_algorithm,
        algorithm_control: AudioNormalizationAlgorithmControl => with_algorithm_control,
        /// Audio below this level (LUFS) is ignored when measuring.
        #[validate(range(min = -70, max = 0))]
        correction_gate_level: i32 => with_correction_gate_level,
        /// Target loudness in LKFS.
        #[validate(range(min = -59.0, max = 0.0))]
        target_lkfs: f64 => with_target_lkfs,
    }
}

record! {
    /// Gain, in dB, applied from each input channel to one output channel.
    pub struct OutputChannelMapping {
        input_channels: Vec<i32> => with_input_channels,
    }
}

record! {
    /// One `OutputChannelMapping` per output channel.
    pub struct ChannelMapping {
        #[validate(nested)]
        output_channels: Vec<OutputChannelMapping> => with_output_channels,
    }
}

record! {
    /// Channel remixing between input and output.
    pub struct RemixSettings {
        #[validate(nested)]
        channel_mapping: ChannelMapping => with_channel_mapping,
        #[validate(range(min = 1, max = 64))]
        channels_in: i32 => with_channels_in,
        #[validate(range(min = 1, max = 64))]
        channels_out: i32 => with_channels_out,
    }
}

record! {
    /// Settings for one audio stream of an output.
    pub struct AudioDescription {
        #[validate(nested)]
        audio_normalization_settings: AudioNormalizationSettings => with_audio_normalization_settings,
        /// Name of the input audio selector to take audio from.
        audio_source_name: String => with_audio_source_name,
        #[validate(range(min = 0, max = 255))]
        audio_type: i32 => with_audio_type,
        audio_type_control: AudioTypeControl => with_audio_type_control,
        #[validate(nested)]
        codec_settings: AudioCodecSettings => with_codec_settings,
        #[validate(custom(function = "crate::validation::custom_language_code"))]
        custom_language_code: String => with_custom_language_code,
        language_code: LanguageCode => with_language_code,
        language_code_control: AudioLanguageCodeControl => with_language_code_control,
        #[validate(nested)]
        remix_settings: RemixSettings => with_remix_settings,
        #[validate(custom(function = "crate::validation::stream_name"))]
        stream_name: String => with_stream_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_string_patterns() {
        assert!(AudioDescription::new()
            .with_custom_language_code("en-GB")
            .validate()
            .is_ok());
        assert!(AudioDescription::new()
            .with_custom_language_code("english")
            .validate()
            .is_err());
        assert!(AudioDescription::new()
            .with_stream_name("Director Commentary 2")
            .validate()
            .is_ok());
        assert!(AudioDescription::new()
            .with_stream_name("bad/name")
            .validate()
            .is_err());
    }

    #[test]
    fn test_remix_validation_is_nested() {
        let description = AudioDescription::new()
            .with_remix_settings(RemixSettings::new().with_channels_in(2).with_channels_out(65));
        assert!(description.validate().is_err());
    }

    #[test]
    fn test_equality_compares_every_field() {
        let a = AudioDescription::new()
            .with_language_code(LanguageCode::Eng)
            .with_audio_type(0);
        let b = AudioDescription::new()
            .with_language_code(LanguageCode::Eng)
            .with_audio_type(0);
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_audio_type(1));
        assert_ne!(a, AudioDescription::new().with_language_code(LanguageCode::Eng));
        assert_eq!(AudioDescription::new(), AudioDescription::default());
    }

    #[test]
    fn test_channel_mapping_display() {
        let remix = RemixSettings::new()
            .with_channels_in(2)
            .with_channels_out(1)
            .with_channel_mapping(ChannelMapping::new().with_output_channels(vec![
                OutputChannelMapping::new().with_input_channels(vec![0, -6]),
            ]));
        assert_eq!(
            remix.to_string(),
            "{channel_mapping: {output_channels: [{input_channels: [0, -6]}]}, channels_in: 2, channels_out: 1}"
        );
    }
}
