//! Video output descriptions and per-codec settings.

mod h264;
mod h265;
mod mpeg2;
mod preprocessor;
mod prores;
mod vp9;

pub use h264::*;
pub use h265::*;
pub use mpeg2::*;
pub use preprocessor::*;
pub use prores::*;
pub use vp9::*;

string_enum! {
    /// Video codec of an output. Selects which member of `VideoCodecSettings` applies.
    pub enum VideoCodec {
        FrameCapture => "FRAME_CAPTURE",
        Av1 => "AV1",
        AvcIntra => "AVC_INTRA",
        H264 => "H_264",
        H265 => "H_265",
        Mpeg2 => "MPEG2",
        Prores => "PRORES",
        Vc3 => "VC3",
        Vp8 => "VP8",
        Vp9 => "VP9",
    }
}

string_enum! {
    /// Active Format Description signalling in the output.
    pub enum AfdSignaling {
        None => "NONE",
        Auto => "AUTO",
        Fixed => "FIXED",
    }
}

string_enum! {
    pub enum AntiAlias {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum ColorMetadata {
        Ignore => "IGNORE",
        Insert => "INSERT",
    }
}

string_enum! {
    pub enum DropFrameTimecode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum RespondToAfd {
        None => "NONE",
        Respond => "RESPOND",
        Passthrough => "PASSTHROUGH",
    }
}

string_enum! {
    pub enum ScalingBehavior {
        Default => "DEFAULT",
        StretchToOutput => "STRETCH_TO_OUTPUT",
    }
}

string_enum! {
    pub enum VideoTimecodeInsertion {
        Disabled => "DISABLED",
        PicTimingSei => "PIC_TIMING_SEI",
    }
}
record! {
    /// A pixel rectangle used for cropping and positioning.
    pub struct Rectangle {
        #[validate(range(min = 2))]
        height: i32 => with_height,
        #[validate(range(min = 2))]
        width: i32 => with_width,
        #[validate(range(min = 0))]
        x: i32 => with_x,
        #[validate(range(min = 0))]
        y: i32 => with_y,
    }
}

record! {
    /// Codec selection plus the settings block for that codec.
    pub struct VideoCodecSettings {
        codec: VideoCodec => with_codec,
        #[validate(nested)]
        h264_settings: H264Settings => with_h264_settings,
        #[validate(nested)]
        h265_settings: H265Settings => with_h265_settings,
        #[validate(nested)]
        mpeg2_settings: Mpeg2Settings => with_mpeg2_settings,
        #[validate(nested)]
        prores_settings: ProresSettings => with_prores_settings,
        #[validate(nested)]
        vp9_settings: Vp9Settings => with_vp9_settings,
    }
}

impl VideoCodecSettings {
    /// H.264 codec settings with `codec` already set.
    pub fn h264(settings: H264Settings) -> Self {
        Self::new().with_codec(VideoCodec::H264).with_h264_settings(settings)
    }

    /// H.265 codec settings with `codec` already set.
    pub fn h265(settings: H265Settings) -> Self {
        Self::new().with_codec(VideoCodec::H265).with_h265_settings(settings)
    }
}

record! {
    /// Settings for the video stream of one output.
    pub struct VideoDescription {
        afd_signaling: AfdSignaling => with_afd_signaling,
        anti_alias: AntiAlias => with_anti_alias,
        #[validate(nested)]
        codec_settings: VideoCodecSettings => with_codec_settings,
        color_metadata: ColorMetadata => with_color_metadata,
        /// Region of the input to keep.
        #[validate(nested)]
        crop: Rectangle => with_crop,
        drop_frame_timecode: DropFrameTimecode => with_drop_frame_timecode,
        #[validate(range(min = 0, max = 15))]
        fixed_afd: i32 => with_fixed_afd,
        #[validate(range(min = 32, max = 8192))]
        height: i32 => with_height,
        /// Placement of the video inside the output frame.
        #[validate(nested)]
        position: Rectangle => with_position,
        respond_to_afd: RespondToAfd => with_respond_to_afd,
        scaling_behavior: ScalingBehavior => with_scaling_behavior,
        #[validate(range(min = 0, max = 100))]
        sharpness: i32 => with_sharpness,
        timecode_insertion: VideoTimecodeInsertion => with_timecode_insertion,
        /// Color correction, deinterlacing, overlays and noise reduction.
        #[validate(nested)]
        video_preprocessors: VideoPreprocessor => with_video_preprocessors,
        #[validate(range(min = 32, max = 8192))]
        width: i32 => with_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_codec_tokens() {
        assert_eq!(VideoCodec::H264.as_str(), "H_264");
        assert_eq!("FRAME_CAPTURE".parse::<VideoCodec>().unwrap(), VideoCodec::FrameCapture);
        assert!("H264".parse::<VideoCodec>().is_err());
    }

    #[test]
    fn test_nested_codec_settings_wire_shape() {
        let description = VideoDescription::new()
            .with_width(1920)
            .with_height(1080)
            .with_codec_settings(VideoCodecSettings::h264(
                H264Settings::new().with_max_bitrate(6_000_000),
            ));

        let json = serde_json::to_value(&description).unwrap();
        assert_eq!(json["codecSettings"]["codec"], "H_264");
        assert_eq!(json["codecSettings"]["h264Settings"]["maxBitrate"], 6_000_000);
        assert_eq!(json["width"], 1920);
    }

    #[test]
    fn test_nested_validation_reaches_codec() {
        let description = VideoDescription::new().with_codec_settings(VideoCodecSettings::h265(
            H265Settings::new().with_bitrate(10),
        ));
        assert!(description.validate().is_err());

        let description = VideoDescription::new().with_crop(Rectangle::new().with_width(1));
        assert!(description.validate().is_err());
    }

    #[test]
    fn test_display_nests_records() {
        let description = VideoDescription::new()
            .with_crop(Rectangle::new().with_x(0).with_y(10))
            .with_sharpness(50);
        assert_eq!(description.to_string(), "{crop: {x: 0, y: 10}, sharpness: 50}");
    }
}
