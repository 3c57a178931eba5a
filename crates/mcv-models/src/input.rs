//! Job inputs and input templates.

use crate::video::Rectangle;

string_enum! {
    pub enum InputDeblockFilter {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    pub enum InputDenoiseFilter {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    /// Whether the deblock and denoise filters run. `AUTO` applies them only to
    /// low-quality inputs.
    pub enum InputFilterEnable {
        Auto => "AUTO",
        Disable => "DISABLE",
        Force => "FORCE",
    }
}

string_enum! {
    pub enum InputPsiControl {
        IgnorePsi => "IGNORE_PSI",
        UsePsi => "USE_PSI",
    }
}

string_enum! {
    /// Where input timecodes come from. `SPECIFIEDSTART` uses `timecode_start`.
    pub enum InputTimecodeSource {
        Embedded => "EMBEDDED",
        Zerobased => "ZEROBASED",
        Specifiedstart => "SPECIFIEDSTART",
    }
}
record! {
    /// A section of the input to transcode, bounded by timecodes.
    pub struct InputClipping {
        #[validate(custom(function = "crate::validation::timecode"))]
        end_timecode: String => with_end_timecode,
        #[validate(custom(function = "crate::validation::timecode"))]
        start_timecode: String => with_start_timecode,
    }
}

record! {
    /// Selects the video track of the input.
    pub struct VideoSelector {
        #[validate(range(min = 1))]
        pid: i32 => with_pid,
        program_number: i32 => with_program_number,
    }
}

record! {
    /// A still image overlaid on the video.
    pub struct InsertableImage {
        /// Display time in milliseconds.
        #[validate(range(min = 0))]
        duration: i32 => with_duration,
        #[validate(range(min = 0))]
        fade_in: i32 => with_fade_in,
        #[validate(range(min = 0))]
        fade_out: i32 => with_fade_out,
        #[validate(range(min = 0))]
        height: i32 => with_height,
        /// Location of the image file.
        #[validate(custom(function = "crate::validation::file_input"))]
        image_inserter_input: String => with_image_inserter_input,
        #[validate(range(min = 0))]
        image_x: i32 => with_image_x,
        #[validate(range(min = 0))]
        image_y: i32 => with_image_y,
        #[validate(range(min = 0, max = 99))]
        layer: i32 => with_layer,
        #[validate(range(min = 0, max = 100))]
        opacity: i32 => with_opacity,
        #[validate(custom(function = "crate::validation::timecode"))]
        start_time: String => with_start_time,
        #[validate(range(min = 0))]
        width: i32 => with_width,
    }
}

record! {
    pub struct ImageInserter {
        #[validate(nested)]
        insertable_images: Vec<InsertableImage> => with_insertable_images,
    }
}

record! {
    /// One input file of a job.
    pub struct Input {
        #[validate(nested)]
        crop: Rectangle => with_crop,
        deblock_filter: InputDeblockFilter => with_deblock_filter,
        denoise_filter: InputDenoiseFilter => with_denoise_filter,
        /// Source file URI: S3, HTTP or HTTPS.
        #[validate(custom(function = "crate::validation::file_input"))]
        file_input: String => with_file_input,
        filter_enable: InputFilterEnable => with_filter_enable,
        #[validate(range(min = -5, max = 5))]
        filter_strength: i32 => with_filter_strength,
        #[validate(nested)]
        image_inserter: ImageInserter => with_image_inserter,
        #[validate(nested)]
        input_clippings: Vec<InputClipping> => with_input_clippings,
        #[validate(nested)]
        position: Rectangle => with_position,
        #[validate(range(min = 1))]
        program_number: i32 => with_program_number,
        psi_control: InputPsiControl => with_psi_control,
        timecode_source: InputTimecodeSource => with_timecode_source,
        #[schemars(regex(path = "crate::validation::TIMECODE"))]
        #[validate(length(equal = 11), regex(path = *crate::validation::TIMECODE))]
        timecode_start: String => with_timecode_start,
        #[validate(nested)]
        video_selector: VideoSelector => with_video_selector,
    }
}

record! {
    /// Input settings saved in a job template. Same as `Input` without the
    /// source location.
    pub struct InputTemplate {
        #[validate(nested)]
        crop: Rectangle => with_crop,
        deblock_filter: InputDeblockFilter => with_deblock_filter,
        denoise_filter: InputDenoiseFilter => with_denoise_filter,
        filter_enable: InputFilterEnable => with_filter_enable,
        #[validate(range(min = -5, max = 5))]
        filter_strength: i32 => with_filter_strength,
        #[validate(nested)]
        image_inserter: ImageInserter => with_image_inserter,
        #[validate(nested)]
        input_clippings: Vec<InputClipping> => with_input_clippings,
        #[validate(nested)]
        position: Rectangle => with_position,
        #[validate(range(min = 1))]
        program_number: i32 => with_program_number,
        psi_control: InputPsiControl => with_psi_control,
        timecode_source: InputTimecodeSource => with_timecode_source,
        #[schemars(regex(path = "crate::validation::TIMECODE"))]
        #[validate(length(equal = 11), regex(path = *crate::validation::TIMECODE))]
        timecode_start: String => with_timecode_start,
        #[validate(nested)]
        video_selector: VideoSelector => with_video_selector,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_timecode_start_format() {
        assert!(InputTemplate::new()
            .with_timecode_start("01:00:00:00")
            .validate()
            .is_ok());
        assert!(InputTemplate::new()
            .with_timecode_start("1:00:00:00")
            .validate()
            .is_err());
    }

    #[test]
    fn test_clipping_validation() {
        let input = Input::new().with_input_clippings(vec![InputClipping::new()
            .with_start_timecode("00:00:10:00")
            .with_end_timecode("00:01:00:00")]);
        assert!(input.validate().is_ok());

        let input = Input::new()
            .with_input_clippings(vec![InputClipping::new().with_start_timecode("00:00:10")]);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_filter_enable_tokens() {
        assert_eq!(InputFilterEnable::values(), vec!["AUTO", "DISABLE", "FORCE"]);
        assert_eq!("FORCE".parse::<InputFilterEnable>(), Ok(InputFilterEnable::Force));
    }

    #[test]
    fn test_filter_strength_bounds() {
        assert!(Input::new().with_filter_strength(-5).validate().is_ok());
        assert!(Input::new().with_filter_strength(6).validate().is_err());
    }

    #[test]
    fn test_file_input_scheme() {
        assert!(Input::new()
            .with_file_input("s3://media/in/source.mov")
            .validate()
            .is_ok());
        assert!(Input::new()
            .with_file_input("file:///media/source.mov")
            .validate()
            .is_err());
    }

    #[test]
    fn test_input_wire_fixture() {
        let json = r#"{
            "fileInput": "s3://media/in/source.mov",
            "timecodeSource": "ZEROBASED",
            "psiControl": "USE_PSI",
            "videoSelector": {"pid": 481}
        }"#;
        let input: Input = serde_json::from_str(json).unwrap();
        assert_eq!(input.timecode_source, Some(InputTimecodeSource::Zerobased));
        assert_eq!(input.psi_control, Some(InputPsiControl::UsePsi));
        assert_eq!(input.video_selector.and_then(|v| v.pid), Some(481));
    }
}
