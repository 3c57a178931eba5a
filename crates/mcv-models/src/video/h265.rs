//! H.265 (HEVC) codec settings.

string_enum! {
    pub enum H265AdaptiveQuantization {
        Off => "OFF",
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
        Higher => "HIGHER",
        Max => "MAX",
    }
}

string_enum! {
    /// Insert the alternate transfer function SEI message for HLG outputs.
    pub enum H265AlternateTransferFunctionSei {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H265CodecLevel {
        Auto => "AUTO",
        Level1 => "LEVEL_1",
        Level2 => "LEVEL_2",
        Level21 => "LEVEL_2_1",
        Level3 => "LEVEL_3",
        Level31 => "LEVEL_3_1",
        Level4 => "LEVEL_4",
        Level41 => "LEVEL_4_1",
        Level5 => "LEVEL_5",
        Level51 => "LEVEL_5_1",
        Level52 => "LEVEL_5_2",
        Level6 => "LEVEL_6",
        Level61 => "LEVEL_6_1",
        Level62 => "LEVEL_6_2",
    }
}

string_enum! {
    /// H.265 profile and tier, written `<profile>_<tier>`.
    pub enum H265CodecProfile {
        MainMain => "MAIN_MAIN",
        MainHigh => "MAIN_HIGH",
        Main10Main => "MAIN10_MAIN",
        Main10High => "MAIN10_HIGH",
        Main4228BitMain => "MAIN_422_8BIT_MAIN",
        Main4228BitHigh => "MAIN_422_8BIT_HIGH",
        Main42210BitMain => "MAIN_422_10BIT_MAIN",
        Main42210BitHigh => "MAIN_422_10BIT_HIGH",
    }
}

string_enum! {
    pub enum H265DynamicSubGop {
        Adaptive => "ADAPTIVE",
        Static => "STATIC",
    }
}

string_enum! {
    pub enum H265FlickerAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H265FramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

string_enum! {
    pub enum H265FramerateConversionAlgorithm {
        DuplicateDrop => "DUPLICATE_DROP",
        Interpolate => "INTERPOLATE",
    }
}

string_enum! {
    pub enum H265GopBReference {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H265GopSizeUnits {
        Frames => "FRAMES",
        Seconds => "SECONDS",
    }
}

string_enum! {
    pub enum H265InterlaceMode {
        Progressive => "PROGRESSIVE",
        TopField => "TOP_FIELD",
        BottomField => "BOTTOM_FIELD",
        FollowTopField => "FOLLOW_TOP_FIELD",
        FollowBottomField => "FOLLOW_BOTTOM_FIELD",
    }
}

string_enum! {
    pub enum H265ParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

string_enum! {
    pub enum H265QualityTuningLevel {
        SinglePass => "SINGLE_PASS",
        SinglePassHq => "SINGLE_PASS_HQ",
        MultiPassHq => "MULTI_PASS_HQ",
    }
}

string_enum! {
    /// Rate control mode. `QVBR` requires `qvbr_settings`.
    pub enum H265RateControlMode {
        Vbr => "VBR",
        Cbr => "CBR",
        Qvbr => "QVBR",
    }
}

string_enum! {
    pub enum H265SampleAdaptiveOffsetFilterMode {
        Default => "DEFAULT",
        Adaptive => "ADAPTIVE",
        Off => "OFF",
    }
}

string_enum! {
    pub enum H265SceneChangeDetect {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        TransitionDetection => "TRANSITION_DETECTION",
    }
}

string_enum! {
    pub enum H265SlowPal {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H265SpatialAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H265Telecine {
        None => "NONE",
        Soft => "SOFT",
        Hard => "HARD",
    }
}

string_enum! {
    pub enum H265TemporalAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H265TemporalIds {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    /// Enable tiled encoding for large frame sizes.
    pub enum H265Tiles {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H265UnregisteredSeiTimecode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    /// Sample entry used when muxing into MP4: `hvc1` or `hev1`.
    pub enum H265WriteMp4PackagingType {
        Hvc1 => "HVC1",
        Hev1 => "HEV1",
    }
}
record! {
    /// Quality-defined variable bitrate settings for H.265.
    pub struct H265QvbrSettings {
        #[validate(range(min = 1000, max = 1_466_400_000))]
        max_average_bitrate: i32 => with_max_average_bitrate,
        #[validate(range(min = 1, max = 10))]
        qvbr_quality_level: i32 => with_qvbr_quality_level,
        qvbr_quality_level_fine_tune: f64 => with_qvbr_quality_level_fine_tune,
    }
}

record! {
    /// Settings for an H.265 video output. Required when the video codec is
    /// `H_265`.
    pub struct H265Settings {
        adaptive_quantization: H265AdaptiveQuantization => with_adaptive_quantization,
        alternate_transfer_function_sei: H265AlternateTransferFunctionSei => with_alternate_transfer_function_sei,
        #[validate(range(min = 1000, max = 1_466_400_000))]
        bitrate: i32 => with_bitrate,
        codec_level: H265CodecLevel => with_codec_level,
        codec_profile: H265CodecProfile => with_codec_profile,
        dynamic_sub_gop: H265DynamicSubGop => with_dynamic_sub_gop,
        flicker_adaptive_quantization: H265FlickerAdaptiveQuantization => with_flicker_adaptive_quantization,
        framerate_control: H265FramerateControl => with_framerate_control,
        framerate_conversion_algorithm: H265FramerateConversionAlgorithm => with_framerate_conversion_algorithm,
        #[validate(range(min = 1))]
        framerate_denominator: i32 => with_framerate_denominator,
        #[validate(range(min = 1))]
        framerate_numerator: i32 => with_framerate_numerator,
        gop_b_reference: H265GopBReference => with_gop_b_reference,
        #[validate(range(min = 0))]
        gop_closed_cadence: i32 => with_gop_closed_cadence,
        gop_size: f64 => with_gop_size,
        gop_size_units: H265GopSizeUnits => with_gop_size_units,
        #[validate(range(min = 0, max = 100))]
        hrd_buffer_initial_fill_percentage: i32 => with_hrd_buffer_initial_fill_percentage,
        #[validate(range(min = 0, max = 1_466_400_000))]
        hrd_buffer_size: i32 => with_hrd_buffer_size,
        interlace_mode: H265InterlaceMode => with_interlace_mode,
        #[validate(range(min = 1000, max = 1_466_400_000))]
        max_bitrate: i32 => with_max_bitrate,
        #[validate(range(min = 0, max = 30))]
        min_i_interval: i32 => with_min_i_interval,
        #[validate(range(min = 0, max = 7))]
        number_b_frames_between_reference_frames: i32 => with_number_b_frames_between_reference_frames,
        #[validate(range(min = 1, max = 6))]
        number_reference_frames: i32 => with_number_reference_frames,
        par_control: H265ParControl => with_par_control,
        #[validate(range(min = 1))]
        par_denominator: i32 => with_par_denominator,
        #[validate(range(min = 1))]
        par_numerator: i32 => with_par_numerator,
        quality_tuning_level: H265QualityTuningLevel => with_quality_tuning_level,
        #[validate(nested)]
        qvbr_settings: H265QvbrSettings => with_qvbr_settings,
        rate_control_mode: H265RateControlMode => with_rate_control_mode,
        sample_adaptive_offset_filter_mode: H265SampleAdaptiveOffsetFilterMode => with_sample_adaptive_offset_filter_mode,
        scene_change_detect: H265SceneChangeDetect => with_scene_change_detect,
        #[validate(range(min = 1, max = 32))]
        slices: i32 => with_slices,
        slow_pal: H265SlowPal => with_slow_pal,
        spatial_adaptive_quantization: H265SpatialAdaptiveQuantization => with_spatial_adaptive_quantization,
        telecine: H265Telecine => with_telecine,
        temporal_adaptive_quantization: H265TemporalAdaptiveQuantization => with_temporal_adaptive_quantization,
        temporal_ids: H265TemporalIds => with_temporal_ids,
        tiles: H265Tiles => with_tiles,
        unregistered_sei_timecode: H265UnregisteredSeiTimecode => with_unregistered_sei_timecode,
        write_mp4_packaging_type: H265WriteMp4PackagingType => with_write_mp4_packaging_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_profile_tokens() {
        assert_eq!(
            "MAIN_422_10BIT_HIGH".parse::<H265CodecProfile>().unwrap(),
            H265CodecProfile::Main42210BitHigh
        );
        assert_eq!(H265CodecProfile::Main10Main.to_string(), "MAIN10_MAIN");
    }

    #[test]
    fn test_display_lists_present_fields_in_order() {
        let settings = H265Settings::new()
            .with_write_mp4_packaging_type(H265WriteMp4PackagingType::Hvc1)
            .with_bitrate(8_000_000)
            .with_codec_profile(H265CodecProfile::MainMain);

        assert_eq!(
            settings.to_string(),
            "{bitrate: 8000000, codec_profile: MAIN_MAIN, write_mp4_packaging_type: HVC1}"
        );
    }

    #[test]
    fn test_ranges() {
        assert!(H265Settings::new().with_slices(33).validate().is_err());
        assert!(H265Settings::new().with_max_bitrate(1_466_400_000).validate().is_ok());
        assert!(H265Settings::new().with_number_reference_frames(0).validate().is_err());
    }
}
