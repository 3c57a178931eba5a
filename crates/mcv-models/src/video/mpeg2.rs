//! MPEG-2 video codec settings.

string_enum! {
    pub enum Mpeg2AdaptiveQuantization {
        Off => "OFF",
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
}

string_enum! {
    pub enum Mpeg2CodecLevel {
        Auto => "AUTO",
        Low => "LOW",
        Main => "MAIN",
        High1440 => "HIGH1440",
        High => "HIGH",
    }
}

string_enum! {
    pub enum Mpeg2CodecProfile {
        Main => "MAIN",
        Profile422 => "PROFILE_422",
    }
}

string_enum! {
    pub enum Mpeg2DynamicSubGop {
        Adaptive => "ADAPTIVE",
        Static => "STATIC",
    }
}

string_enum! {
    pub enum Mpeg2FramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

string_enum! {
    pub enum Mpeg2FramerateConversionAlgorithm {
        DuplicateDrop => "DUPLICATE_DROP",
        Interpolate => "INTERPOLATE",
    }
}

string_enum! {
    pub enum Mpeg2GopSizeUnits {
        Frames => "FRAMES",
        Seconds => "SECONDS",
    }
}

string_enum! {
    pub enum Mpeg2InterlaceMode {
        Progressive => "PROGRESSIVE",
        TopField => "TOP_FIELD",
        BottomField => "BOTTOM_FIELD",
        FollowTopField => "FOLLOW_TOP_FIELD",
        FollowBottomField => "FOLLOW_BOTTOM_FIELD",
    }
}

string_enum! {
    /// Precision of the intra DC coefficient, in bits.
    pub enum Mpeg2IntraDcPrecision {
        Auto => "AUTO",
        IntraDcPrecision8 => "INTRA_DC_PRECISION_8",
        IntraDcPrecision9 => "INTRA_DC_PRECISION_9",
        IntraDcPrecision10 => "INTRA_DC_PRECISION_10",
        IntraDcPrecision11 => "INTRA_DC_PRECISION_11",
    }
}

string_enum! {
    pub enum Mpeg2ParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

string_enum! {
    pub enum Mpeg2QualityTuningLevel {
        SinglePass => "SINGLE_PASS",
        MultiPass => "MULTI_PASS",
    }
}

string_enum! {
    pub enum Mpeg2RateControlMode {
        Vbr => "VBR",
        Cbr => "CBR",
    }
}

string_enum! {
    pub enum Mpeg2SceneChangeDetect {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum Mpeg2SlowPal {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum Mpeg2SpatialAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    /// `D_10` produces Sony D-10 (IMX) compliant output.
    pub enum Mpeg2Syntax {
        Default => "DEFAULT",
        D10 => "D_10",
    }
}

string_enum! {
    pub enum Mpeg2Telecine {
        None => "NONE",
        Soft => "SOFT",
        Hard => "HARD",
    }
}

string_enum! {
    pub enum Mpeg2TemporalAdaptiveQuantization {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}
record! {
    /// Settings for an MPEG-2 video output. Required when the video codec is
    /// `MPEG2`.
    pub struct Mpeg2Settings {
        adaptive_quantization: Mpeg2AdaptiveQuantization => with_adaptive_quantization,
        #[validate(range(min = 1000, max = 288_000_000))]
        bitrate: i32 => with_bitrate,
        codec_level: Mpeg2CodecLevel => with_codec_level,
        codec_profile: Mpeg2CodecProfile => with_codec_profile,
        dynamic_sub_gop: Mpeg2DynamicSubGop => with_dynamic_sub_gop,
        framerate_control: Mpeg2FramerateControl => with_framerate_control,
        framerate_conversion_algorithm: Mpeg2FramerateConversionAlgorithm => with_framerate_conversion_algorithm,
        #[validate(range(min = 1, max = 1001))]
        framerate_denominator: i32 => with_framerate_denominator,
        #[validate(range(min = 24, max = 60000))]
        framerate_numerator: i32 => with_framerate_numerator,
        #[validate(range(min = 0))]
        gop_closed_cadence: i32 => with_gop_closed_cadence,
        gop_size: f64 => with_gop_size,
        gop_size_units: Mpeg2GopSizeUnits => with_gop_size_units,
        #[validate(range(min = 0, max = 100))]
        hrd_buffer_initial_fill_percentage: i32 => with_hrd_buffer_initial_fill_percentage,
        #[validate(range(min = 0, max = 47_185_920))]
        hrd_buffer_size: i32 => with_hrd_buffer_size,
        interlace_mode: Mpeg2InterlaceMode => with_interlace_mode,
        intra_dc_precision: Mpeg2IntraDcPrecision => with_intra_dc_precision,
        #[validate(range(min = 1000, max = 300_000_000))]
        max_bitrate: i32 => with_max_bitrate,
        #[validate(range(min = 0, max = 30))]
        min_i_interval: i32 => with_min_i_interval,
        #[validate(range(min = 0, max = 7))]
        number_b_frames_between_reference_frames: i32 => with_number_b_frames_between_reference_frames,
        par_control: Mpeg2ParControl => with_par_control,
        #[validate(range(min = 1))]
        par_denominator: i32 => with_par_denominator,
        #[validate(range(min = 1))]
        par_numerator: i32 => with_par_numerator,
        quality_tuning_level: Mpeg2QualityTuningLevel => with_quality_tuning_level,
        rate_control_mode: Mpeg2RateControlMode => with_rate_control_mode,
        scene_change_detect: Mpeg2SceneChangeDetect => with_scene_change_detect,
        slow_pal: Mpeg2SlowPal => with_slow_pal,
        #[validate(range(min = 0, max = 128))]
        softness: i32 => with_softness,
        spatial_adaptive_quantization: Mpeg2SpatialAdaptiveQuantization => with_spatial_adaptive_quantization,
        syntax: Mpeg2Syntax => with_syntax,
        telecine: Mpeg2Telecine => with_telecine,
        temporal_adaptive_quantization: Mpeg2TemporalAdaptiveQuantization => with_temporal_adaptive_quantization,
    }
}
