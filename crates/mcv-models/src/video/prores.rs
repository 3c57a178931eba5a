//! Apple ProRes codec settings.

string_enum! {
    /// ProRes flavour, from proxy to HQ.
    pub enum ProresCodecProfile {
        AppleProres422 => "APPLE_PRORES_422",
        AppleProres422Hq => "APPLE_PRORES_422_HQ",
        AppleProres422Lt => "APPLE_PRORES_422_LT",
        AppleProres422Proxy => "APPLE_PRORES_422_PROXY",
    }
}

string_enum! {
    pub enum ProresFramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

string_enum! {
    pub enum ProresFramerateConversionAlgorithm {
        DuplicateDrop => "DUPLICATE_DROP",
        Interpolate => "INTERPOLATE",
    }
}

string_enum! {
    pub enum ProresInterlaceMode {
        Progressive => "PROGRESSIVE",
        TopField => "TOP_FIELD",
        BottomField => "BOTTOM_FIELD",
        FollowTopField => "FOLLOW_TOP_FIELD",
        FollowBottomField => "FOLLOW_BOTTOM_FIELD",
    }
}

string_enum! {
    pub enum ProresParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

string_enum! {
    pub enum ProresSlowPal {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum ProresTelecine {
        None => "NONE",
        Hard => "HARD",
    }
}
record! {
    /// Settings for an Apple ProRes video output. Required when the video
    /// codec is `PRORES`.
    pub struct ProresSettings {
        codec_profile: ProresCodecProfile => with_codec_profile,
        framerate_control: ProresFramerateControl => with_framerate_control,
        framerate_conversion_algorithm: ProresFramerateConversionAlgorithm => with_framerate_conversion_algorithm,
        #[validate(range(min = 1))]
        framerate_denominator: i32 => with_framerate_denominator,
        #[validate(range(min = 1))]
        framerate_numerator: i32 => with_framerate_numerator,
        interlace_mode: ProresInterlaceMode => with_interlace_mode,
        par_control: ProresParControl => with_par_control,
        #[validate(range(min = 1))]
        par_denominator: i32 => with_par_denominator,
        #[validate(range(min = 1))]
        par_numerator: i32 => with_par_numerator,
        slow_pal: ProresSlowPal => with_slow_pal,
        telecine: ProresTelecine => with_telecine,
    }
}
