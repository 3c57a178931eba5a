//! E-AC-3 (Dolby Digital Plus) codec settings.

string_enum! {
    pub enum Eac3AttenuationControl {
        Attenuate3Db => "ATTENUATE_3_DB",
        None => "NONE",
    }
}

string_enum! {
    pub enum Eac3BitstreamMode {
        CompleteMain => "COMPLETE_MAIN",
        Commentary => "COMMENTARY",
        Emergency => "EMERGENCY",
        HearingImpaired => "HEARING_IMPAIRED",
        VisuallyImpaired => "VISUALLY_IMPAIRED",
    }
}

string_enum! {
    /// Channel layout of the encoded stream.
    pub enum Eac3CodingMode {
        CodingMode10 => "CODING_MODE_1_0",
        CodingMode20 => "CODING_MODE_2_0",
        CodingMode32 => "CODING_MODE_3_2",
    }
}

string_enum! {
    pub enum Eac3DcFilter {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    /// Dynamic range compression profile for line-mode decoders.
    pub enum Eac3DynamicRangeCompressionLine {
        None => "NONE",
        FilmStandard => "FILM_STANDARD",
        FilmLight => "FILM_LIGHT",
        MusicStandard => "MUSIC_STANDARD",
        MusicLight => "MUSIC_LIGHT",
        Speech => "SPEECH",
    }
}

string_enum! {
    /// Dynamic range compression profile for RF-mode decoders.
    pub enum Eac3DynamicRangeCompressionRf {
        None => "NONE",
        FilmStandard => "FILM_STANDARD",
        FilmLight => "FILM_LIGHT",
        MusicStandard => "MUSIC_STANDARD",
        MusicLight => "MUSIC_LIGHT",
        Speech => "SPEECH",
    }
}

string_enum! {
    pub enum Eac3LfeControl {
        Lfe => "LFE",
        NoLfe => "NO_LFE",
    }
}

string_enum! {
    pub enum Eac3LfeFilter {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    pub enum Eac3MetadataControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

string_enum! {
    pub enum Eac3PassthroughControl {
        WhenPossible => "WHEN_POSSIBLE",
        NoPassthrough => "NO_PASSTHROUGH",
    }
}

string_enum! {
    pub enum Eac3PhaseControl {
        Shift90Degrees => "SHIFT_90_DEGREES",
        NoShift => "NO_SHIFT",
    }
}

string_enum! {
    /// Preferred stereo downmix signalled to the decoder.
    pub enum Eac3StereoDownmix {
        NotIndicated => "NOT_INDICATED",
        LoRo => "LO_RO",
        LtRt => "LT_RT",
        Dpl2 => "DPL2",
    }
}

string_enum! {
    pub enum Eac3SurroundExMode {
        NotIndicated => "NOT_INDICATED",
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    pub enum Eac3SurroundMode {
        NotIndicated => "NOT_INDICATED",
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}
record! {
    /// Settings for an E-AC-3 audio output. Required when the audio codec is
    /// `EAC3`.
    pub struct Eac3Settings {
        attenuation_control: Eac3AttenuationControl => with_attenuation_control,
        /// Average bitrate in bits/second.
        #[validate(range(min = 64_000, max = 640_000))]
        bitrate: i32 => with_bitrate,
        bitstream_mode: Eac3BitstreamMode => with_bitstream_mode,
        coding_mode: Eac3CodingMode => with_coding_mode,
        dc_filter: Eac3DcFilter => with_dc_filter,
        /// Dialogue level in dB below full scale, signalled as metadata.
        #[validate(range(min = 1, max = 31))]
        dialnorm: i32 => with_dialnorm,
        dynamic_range_compression_line: Eac3DynamicRangeCompressionLine => with_dynamic_range_compression_line,
        dynamic_range_compression_rf: Eac3DynamicRangeCompressionRf => with_dynamic_range_compression_rf,
        lfe_control: Eac3LfeControl => with_lfe_control,
        lfe_filter: Eac3LfeFilter => with_lfe_filter,
        lo_ro_center_mix_level: f64 => with_lo_ro_center_mix_level,
        lo_ro_surround_mix_level: f64 => with_lo_ro_surround_mix_level,
        lt_rt_center_mix_level: f64 => with_lt_rt_center_mix_level,
        lt_rt_surround_mix_level: f64 => with_lt_rt_surround_mix_level,
        metadata_control: Eac3MetadataControl => with_metadata_control,
        passthrough_control: Eac3PassthroughControl => with_passthrough_control,
        phase_control: Eac3PhaseControl => with_phase_control,
        #[validate(range(min = 48_000, max = 48_000))]
        sample_rate: i32 => with_sample_rate,
        stereo_downmix: Eac3StereoDownmix => with_stereo_downmix,
        surround_ex_mode: Eac3SurroundExMode => with_surround_ex_mode,
        surround_mode: Eac3SurroundMode => with_surround_mode,
    }
}
