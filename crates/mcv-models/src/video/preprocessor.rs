use crate::input::ImageInserter;

string_enum! {
    pub enum ColorSpaceConversion {
        None => "NONE",
        Force601 => "FORCE_601",
        Force709 => "FORCE_709",
        ForceHdr10 => "FORCE_HDR10",
        ForceHlg2020 => "FORCE_HLG_2020",
    }
}

string_enum! {
    /// Interpolation or blending for deinterlaced frames. The `_TICKER` variants
    /// favour scrolling on-screen text.
    pub enum DeinterlaceAlgorithm {
        Interpolate => "INTERPOLATE",
        InterpolateTicker => "INTERPOLATE_TICKER",
        Blend => "BLEND",
        BlendTicker => "BLEND_TICKER",
    }
}

string_enum! {
    pub enum DeinterlacerControl {
        ForceAllFrames => "FORCE_ALL_FRAMES",
        Normal => "NORMAL",
    }
}

string_enum! {
    pub enum DeinterlacerMode {
        Deinterlace => "DEINTERLACE",
        InverseTelecine => "INVERSE_TELECINE",
        Adaptive => "ADAPTIVE",
    }
}

string_enum! {
    pub enum NoiseReducerFilter {
        Bilateral => "BILATERAL",
        Mean => "MEAN",
        Gaussian => "GAUSSIAN",
        Lanczos => "LANCZOS",
        Sharpen => "SHARPEN",
        Conserve => "CONSERVE",
        Spatial => "SPATIAL",
        Temporal => "TEMPORAL",
    }
}

string_enum! {
    /// Where the burned-in timecode sits in the frame.
    pub enum TimecodeBurninPosition {
        TopCenter => "TOP_CENTER",
        TopLeft => "TOP_LEFT",
        TopRight => "TOP_RIGHT",
        MiddleLeft => "MIDDLE_LEFT",
        MiddleCenter => "MIDDLE_CENTER",
        MiddleRight => "MIDDLE_RIGHT",
        BottomLeft => "BOTTOM_LEFT",
        BottomCenter => "BOTTOM_CENTER",
        BottomRight => "BOTTOM_RIGHT",
    }
}

record! {
    /// Brightness, contrast, hue and saturation adjustments.
    pub struct ColorCorrector {
        #[validate(range(min = 1, max = 100))]
        brightness: i32 => with_brightness,
        color_space_conversion: ColorSpaceConversion => with_color_space_conversion,
        #[validate(range(min = 1, max = 100))]
        contrast: i32 => with_contrast,
        #[validate(range(min = -180, max = 180))]
        hue: i32 => with_hue,
        #[validate(range(min = 1, max = 100))]
        saturation: i32 => with_saturation,
    }
}

record! {
    pub struct Deinterlacer {
        algorithm: DeinterlaceAlgorithm => with_algorithm,
        control: DeinterlacerControl => with_control,
        mode: DeinterlacerMode => with_mode,
    }
}

record! {
    pub struct NoiseReducer {
        filter: NoiseReducerFilter => with_filter,
    }
}

record! {
    /// Burn the output timecode into the picture.
    pub struct TimecodeBurnin {
        #[validate(range(min = 10, max = 48))]
        font_size: i32 => with_font_size,
        position: TimecodeBurninPosition => with_position,
        /// Text shown before the timecode.
        prefix: String => with_prefix,
    }
}

record! {
    /// Per-output processing applied before encoding.
    pub struct VideoPreprocessor {
        #[validate(nested)]
        color_corrector: ColorCorrector => with_color_corrector,
        #[validate(nested)]
        deinterlacer: Deinterlacer => with_deinterlacer,
        #[validate(nested)]
        image_inserter: ImageInserter => with_image_inserter,
        #[validate(nested)]
        noise_reducer: NoiseReducer => with_noise_reducer,
        #[validate(nested)]
        timecode_burnin: TimecodeBurnin => with_timecode_burnin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_preprocessor_wire_shape() {
        let pre = VideoPreprocessor::new()
            .with_deinterlacer(Deinterlacer::new().with_mode(DeinterlacerMode::Adaptive))
            .with_timecode_burnin(
                TimecodeBurnin::new()
                    .with_font_size(32)
                    .with_position(TimecodeBurninPosition::BottomCenter),
            );
        let json = serde_json::to_value(&pre).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "deinterlacer": {"mode": "ADAPTIVE"},
                "timecodeBurnin": {"fontSize": 32, "position": "BOTTOM_CENTER"}
            })
        );
    }

    #[test]
    fn test_nested_ranges_are_checked() {
        let pre = VideoPreprocessor::new().with_color_corrector(ColorCorrector::new().with_hue(200));
        assert!(pre.validate().is_err());

        let pre = VideoPreprocessor::new().with_color_corrector(ColorCorrector::new().with_hue(-180));
        assert!(pre.validate().is_ok());
    }
}
