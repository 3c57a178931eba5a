//! H.264 (AVC) codec settings.

string_enum! {
    /// Strength of adaptive quantization applied across the frame.
    pub enum H264AdaptiveQuantization {
        Off => "OFF",
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
        Higher => "HIGHER",
        Max => "MAX",
    }
}

string_enum! {
    /// H.264 level. `AUTO` lets the service pick the lowest level that fits.
    pub enum H264CodecLevel {
        Auto => "AUTO",
        Level1 => "LEVEL_1",
        Level11 => "LEVEL_1_1",
        Level12 => "LEVEL_1_2",
        Level13 => "LEVEL_1_3",
        Level2 => "LEVEL_2",
        Level21 => "LEVEL_2_1",
        Level22 => "LEVEL_2_2",
        Level3 => "LEVEL_3",
        Level31 => "LEVEL_3_1",
        Level32 => "LEVEL_3_2",
        Level4 => "LEVEL_4",
        Level41 => "LEVEL_4_1",
        Level42 => "LEVEL_4_2",
        Level5 => "LEVEL_5",
        Level51 => "LEVEL_5_1",
        Level52 => "LEVEL_5_2",
    }
}

string_enum! {
    /// H.264 profile. The 4:2:2 profiles also set the chroma sampling.
    pub enum H264CodecProfile {
        Baseline => "BASELINE",
        High => "HIGH",
        High10Bit => "HIGH_10BIT",
        High422 => "HIGH_422",
        High42210Bit => "HIGH_422_10BIT",
        Main => "MAIN",
    }
}

string_enum! {
    pub enum H264DynamicSubGop {
        Adaptive => "ADAPTIVE",
        Static => "STATIC",
    }
}

string_enum! {
    /// Entropy coding mode.
    pub enum H264EntropyEncoding {
        Cabac => "CABAC",
        Cavlc => "CAVLC",
    }
}

string_enum! {
    pub enum H264FieldEncoding {
        Paff => "PAFF",
        ForceField => "FORCE_FIELD",
    }
}

string_enum! {
    pub enum H264FlickerAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    /// Whether the output frame rate follows the input or the numerator/denominator pair.
    pub enum H264FramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

string_enum! {
    pub enum H264FramerateConversionAlgorithm {
        DuplicateDrop => "DUPLICATE_DROP",
        Interpolate => "INTERPOLATE",
    }
}

string_enum! {
    pub enum H264GopBReference {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    /// Unit of `gop_size`.
    pub enum H264GopSizeUnits {
        Frames => "FRAMES",
        Seconds => "SECONDS",
    }
}

string_enum! {
    pub enum H264InterlaceMode {
        Progressive => "PROGRESSIVE",
        TopField => "TOP_FIELD",
        BottomField => "BOTTOM_FIELD",
        FollowTopField => "FOLLOW_TOP_FIELD",
        FollowBottomField => "FOLLOW_BOTTOM_FIELD",
    }
}

string_enum! {
    pub enum H264ParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

string_enum! {
    /// Encoding speed against output quality trade-off.
    pub enum H264QualityTuningLevel {
        SinglePass => "SINGLE_PASS",
        SinglePassHq => "SINGLE_PASS_HQ",
        MultiPassHq => "MULTI_PASS_HQ",
    }
}

string_enum! {
    /// Rate control mode. `QVBR` requires `qvbr_settings`.
    pub enum H264RateControlMode {
        Vbr => "VBR",
        Cbr => "CBR",
        Qvbr => "QVBR",
    }
}

string_enum! {
    pub enum H264RepeatPps {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H264SceneChangeDetect {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        TransitionDetection => "TRANSITION_DETECTION",
    }
}

string_enum! {
    pub enum H264SlowPal {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H264SpatialAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H264Syntax {
        Default => "DEFAULT",
        Rp2027 => "RP2027",
    }
}

string_enum! {
    pub enum H264Telecine {
        None => "NONE",
        Soft => "SOFT",
        Hard => "HARD",
    }
}

string_enum! {
    pub enum H264TemporalAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum H264UnregisteredSeiTimecode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

record! {
    /// Quality-defined variable bitrate settings, used when
    /// `rate_control_mode` is `QVBR`.
    pub struct H264QvbrSettings {
        /// Upper bound on the average bitrate in bits/second.
        #[validate(range(min = 1000, max = 1_152_000_000))]
        max_average_bitrate: i32 => with_max_average_bitrate,
        /// Target quality on a 1 (worst) to 10 (best) scale.
        #[validate(range(min = 1, max = 10))]
        qvbr_quality_level: i32 => with_qvbr_quality_level,
        /// Fractional adjustment added to `qvbr_quality_level`.
        qvbr_quality_level_fine_tune: f64 => with_qvbr_quality_level_fine_tune,
    }
}

record! {
    /// Settings for an H.264 video output. Required when the video codec is
    /// `H_264`.
    pub struct H264Settings {
        adaptive_quantization: H264AdaptiveQuantization => with_adaptive_quantization,
        /// Average bitrate in bits/second.
        #[validate(range(min = 1000, max = 1_152_000_000))]
        bitrate: i32 => with_bitrate,
        codec_level: H264CodecLevel => with_codec_level,
        codec_profile: H264CodecProfile => with_codec_profile,
        dynamic_sub_gop: H264DynamicSubGop => with_dynamic_sub_gop,
        entropy_encoding: H264EntropyEncoding => with_entropy_encoding,
        field_encoding: H264FieldEncoding => with_field_encoding,
        flicker_adaptive_quantization: H264FlickerAdaptiveQuantization => with_flicker_adaptive_quantization,
        framerate_control: H264FramerateControl => with_framerate_control,
        framerate_conversion_algorithm: H264FramerateConversionAlgorithm => with_framerate_conversion_algorithm,
        #[validate(range(min = 1))]
        framerate_denominator: i32 => with_framerate_denominator,
        #[validate(range(min = 1))]
        framerate_numerator: i32 => with_framerate_numerator,
        gop_b_reference: H264GopBReference => with_gop_b_reference,
        #[validate(range(min = 0))]
        gop_closed_cadence: i32 => with_gop_closed_cadence,
        /// GOP length, in the unit given by `gop_size_units`.
        gop_size: f64 => with_gop_size,
        gop_size_units: H264GopSizeUnits => with_gop_size_units,
        #[validate(range(min = 0, max = 100))]
        hrd_buffer_initial_fill_percentage: i32 => with_hrd_buffer_initial_fill_percentage,
        /// HRD buffer size in bits.
        #[validate(range(min = 0, max = 1_152_000_000))]
        hrd_buffer_size: i32 => with_hrd_buffer_size,
        interlace_mode: H264InterlaceMode => with_interlace_mode,
        #[validate(range(min = 1000, max = 1_152_000_000))]
        max_bitrate: i32 => with_max_bitrate,
        /// Minimum frames between an IDR frame and the next scene-change I-frame.
        #[validate(range(min = 0, max = 30))]
        min_i_interval: i32 => with_min_i_interval,
        #[validate(range(min = 0, max = 7))]
        number_b_frames_between_reference_frames: i32 => with_number_b_frames_between_reference_frames,
        #[validate(range(min = 1, max = 6))]
        number_reference_frames: i32 => with_number_reference_frames,
        par_control: H264ParControl => with_par_control,
        #[validate(range(min = 1))]
        par_denominator: i32 => with_par_denominator,
        #[validate(range(min = 1))]
        par_numerator: i32 => with_par_numerator,
        quality_tuning_level: H264QualityTuningLevel => with_quality_tuning_level,
        #[validate(nested)]
        qvbr_settings: H264QvbrSettings => with_qvbr_settings,
        rate_control_mode: H264RateControlMode => with_rate_control_mode,
        repeat_pps: H264RepeatPps => with_repeat_pps,
        scene_change_detect: H264SceneChangeDetect => with_scene_change_detect,
        #[validate(range(min = 1, max = 32))]
        slices: i32 => with_slices,
        slow_pal: H264SlowPal => with_slow_pal,
        #[validate(range(min = 0, max = 128))]
        softness: i32 => with_softness,
        spatial_adaptive_quantization: H264SpatialAdaptiveQuantization => with_spatial_adaptive_quantization,
        syntax: H264Syntax => with_syntax,
        telecine: H264Telecine => with_telecine,
        temporal_adaptive_quantization: H264TemporalAdaptiveQuantization => with_temporal_adaptive_quantization,
        unregistered_sei_timecode: H264UnregisteredSeiTimecode => with_unregistered_sei_timecode,
    }
}
