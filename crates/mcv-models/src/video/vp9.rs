//! VP9 codec settings.

string_enum! {
    pub enum Vp9FramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

string_enum! {
    pub enum Vp9FramerateConversionAlgorithm {
        DuplicateDrop => "DUPLICATE_DROP",
        Interpolate => "INTERPOLATE",
    }
}

string_enum! {
    pub enum Vp9ParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

string_enum! {
    pub enum Vp9QualityTuningLevel {
        MultiPass => "MULTI_PASS",
        MultiPassHq => "MULTI_PASS_HQ",
    }
}

string_enum! {
    /// Only variable bitrate is supported for VP9.
    pub enum Vp9RateControlMode {
        Vbr => "VBR",
    }
}
record! {
    /// Settings for a VP9 video output. Required when the video codec is
    /// `VP9`.
    pub struct Vp9Settings {
        #[validate(range(min = 1000, max = 480_000_000))]
        bitrate: i32 => with_bitrate,
        framerate_control: Vp9FramerateControl => with_framerate_control,
        framerate_conversion_algorithm: Vp9FramerateConversionAlgorithm => with_framerate_conversion_algorithm,
        #[validate(range(min = 1))]
        framerate_denominator: i32 => with_framerate_denominator,
        #[validate(range(min = 1))]
        framerate_numerator: i32 => with_framerate_numerator,
        gop_size: f64 => with_gop_size,
        #[validate(range(min = 0, max = 47_185_920))]
        hrd_buffer_size: i32 => with_hrd_buffer_size,
        #[validate(range(min = 1000, max = 480_000_000))]
        max_bitrate: i32 => with_max_bitrate,
        par_control: Vp9ParControl => with_par_control,
        #[validate(range(min = 1))]
        par_denominator: i32 => with_par_denominator,
        #[validate(range(min = 1))]
        par_numerator: i32 => with_par_numerator,
        quality_tuning_level: Vp9QualityTuningLevel => with_quality_tuning_level,
        rate_control_mode: Vp9RateControlMode => with_rate_control_mode,
    }
}
