//! Caption outputs: burn-in and DVB subtitle rendering settings.

use crate::language::LanguageCode;

string_enum! {
    pub enum BurninSubtitleAlignment {
        Centered => "CENTERED",
        Left => "LEFT",
    }
}

string_enum! {
    pub enum BurninSubtitleBackgroundColor {
        None => "NONE",
        Black => "BLACK",
        White => "WHITE",
    }
}

string_enum! {
    pub enum BurninSubtitleFontColor {
        White => "WHITE",
        Black => "BLACK",
        Yellow => "YELLOW",
        Red => "RED",
        Green => "GREEN",
        Blue => "BLUE",
    }
}

string_enum! {
    /// Script used to pick a font for subtitle rendering. `HANS` is simplified
    /// Chinese, `HANT` traditional.
    pub enum FontScript {
        Automatic => "AUTOMATIC",
        Hans => "HANS",
        Hant => "HANT",
    }
}

string_enum! {
    pub enum BurninSubtitleOutlineColor {
        Black => "BLACK",
        White => "WHITE",
        Yellow => "YELLOW",
        Red => "RED",
        Green => "GREEN",
        Blue => "BLUE",
    }
}

string_enum! {
    pub enum BurninSubtitleShadowColor {
        None => "NONE",
        Black => "BLACK",
        White => "WHITE",
    }
}

string_enum! {
    /// Character spacing for teletext-sourced burn-in captions.
    pub enum BurninSubtitleTeletextSpacing {
        FixedGrid => "FIXED_GRID",
        Proportional => "PROPORTIONAL",
    }
}

string_enum! {
    pub enum DvbSubtitleAlignment {
        Centered => "CENTERED",
        Left => "LEFT",
    }
}

string_enum! {
    pub enum DvbSubtitleBackgroundColor {
        None => "NONE",
        Black => "BLACK",
        White => "WHITE",
    }
}

string_enum! {
    pub enum DvbSubtitleFontColor {
        White => "WHITE",
        Black => "BLACK",
        Yellow => "YELLOW",
        Red => "RED",
        Green => "GREEN",
        Blue => "BLUE",
    }
}

string_enum! {
    pub enum DvbSubtitleOutlineColor {
        Black => "BLACK",
        White => "WHITE",
        Yellow => "YELLOW",
        Red => "RED",
        Green => "GREEN",
        Blue => "BLUE",
    }
}

string_enum! {
    pub enum DvbSubtitleShadowColor {
        None => "NONE",
        Black => "BLACK",
        White => "WHITE",
    }
}

string_enum! {
    pub enum DvbSubtitlingType {
        HearingImpaired => "HEARING_IMPAIRED",
        Standard => "STANDARD",
    }
}

string_enum! {
    pub enum DvbSubtitleTeletextSpacing {
        FixedGrid => "FIXED_GRID",
        Proportional => "PROPORTIONAL",
    }
}

string_enum! {
    /// Caption output format. Selects which member of `CaptionDestinationSettings`
    /// applies.
    pub enum CaptionDestinationType {
        BurnIn => "BURN_IN",
        DvbSub => "DVB_SUB",
        Embedded => "EMBEDDED",
        EmbeddedPlusScte20 => "EMBEDDED_PLUS_SCTE20",
        Imsc => "IMSC",
        Scte20PlusEmbedded => "SCTE20_PLUS_EMBEDDED",
        Scc => "SCC",
        Srt => "SRT",
        Smi => "SMI",
        Teletext => "TELETEXT",
        Ttml => "TTML",
        Webvtt => "WEBVTT",
    }
}
record! {
    /// Burn captions into the video frame. Required when the caption
    /// destination is `BURN_IN`.
    pub struct BurninDestinationSettings {
        alignment: BurninSubtitleAlignment => with_alignment,
        background_color: BurninSubtitleBackgroundColor => with_background_color,
        #[validate(range(min = 0, max = 255))]
        background_opacity: i32 => with_background_opacity,
        font_color: BurninSubtitleFontColor => with_font_color,
        #[validate(range(min = 0, max = 255))]
        font_opacity: i32 => with_font_opacity,
        #[validate(range(min = 96, max = 600))]
        font_resolution: i32 => with_font_resolution,
        font_script: FontScript => with_font_script,
        /// Font size in points. Zero selects automatic sizing.
        #[validate(range(min = 0, max = 96))]
        font_size: i32 => with_font_size,
        outline_color: BurninSubtitleOutlineColor => with_outline_color,
        #[validate(range(min = 0, max = 10))]
        outline_size: i32 => with_outline_size,
        shadow_color: BurninSubtitleShadowColor => with_shadow_color,
        #[validate(range(min = 0, max = 255))]
        shadow_opacity: i32 => with_shadow_opacity,
        shadow_x_offset: i32 => with_shadow_x_offset,
        shadow_y_offset: i32 => with_shadow_y_offset,
        teletext_spacing: BurninSubtitleTeletextSpacing => with_teletext_spacing,
        #[validate(range(min = 0))]
        x_position: i32 => with_x_position,
        #[validate(range(min = 0))]
        y_position: i32 => with_y_position,
    }
}

record! {
    /// DVB-Sub bitmap subtitles. Required when the caption destination is
    /// `DVB_SUB`.
    pub struct DvbSubDestinationSettings {
        alignment: DvbSubtitleAlignment => with_alignment,
        background_color: DvbSubtitleBackgroundColor => with_background_color,
        #[validate(range(min = 0, max = 255))]
        background_opacity: i32 => with_background_opacity,
        font_color: DvbSubtitleFontColor => with_font_color,
        #[validate(range(min = 0, max = 255))]
        font_opacity: i32 => with_font_opacity,
        #[validate(range(min = 96, max = 600))]
        font_resolution: i32 => with_font_resolution,
        font_script: FontScript => with_font_script,
        #[validate(range(min = 0, max = 96))]
        font_size: i32 => with_font_size,
        outline_color: DvbSubtitleOutlineColor => with_outline_color,
        #[validate(range(min = 0, max = 10))]
        outline_size: i32 => with_outline_size,
        shadow_color: DvbSubtitleShadowColor => with_shadow_color,
        #[validate(range(min = 0, max = 255))]
        shadow_opacity: i32 => with_shadow_opacity,
        shadow_x_offset: i32 => with_shadow_x_offset,
        shadow_y_offset: i32 => with_shadow_y_offset,
        subtitling_type: DvbSubtitlingType => with_subtitling_type,
        teletext_spacing: DvbSubtitleTeletextSpacing => with_teletext_spacing,
        #[validate(range(min = 0))]
        x_position: i32 => with_x_position,
        #[validate(range(min = 0))]
        y_position: i32 => with_y_position,
    }
}

record! {
    pub struct CaptionDestinationSettings {
        #[validate(nested)]
        burnin_destination_settings: BurninDestinationSettings => with_burnin_destination_settings,
        destination_type: CaptionDestinationType => with_destination_type,
        #[validate(nested)]
        dvb_sub_destination_settings: DvbSubDestinationSettings => with_dvb_sub_destination_settings,
    }
}

record! {
    /// One caption track of an output.
    pub struct CaptionDescription {
        /// Name of the input caption selector to take captions from.
        #[validate(length(min = 1))]
        caption_selector_name: String => with_caption_selector_name,
        #[validate(custom(function = "crate::validation::custom_language_code"))]
        custom_language_code: String => with_custom_language_code,
        #[validate(nested)]
        destination_settings: CaptionDestinationSettings => with_destination_settings,
        language_code: LanguageCode => with_language_code,
        language_description: String => with_language_description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_shared_font_script() {
        let burnin = BurninDestinationSettings::new().with_font_script(FontScript::Hans);
        let dvb = DvbSubDestinationSettings::new().with_font_script(FontScript::Hans);
        assert_eq!(burnin.font_script, dvb.font_script);
    }

    #[test]
    fn test_burnin_ranges() {
        assert!(BurninDestinationSettings::new()
            .with_font_resolution(95)
            .validate()
            .is_err());
        assert!(BurninDestinationSettings::new()
            .with_font_size(0)
            .with_shadow_x_offset(-2)
            .validate()
            .is_ok());
        assert!(BurninDestinationSettings::new()
            .with_x_position(-1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_caption_description_wire_shape() {
        let caption = CaptionDescription::new()
            .with_caption_selector_name("Captions Selector 1")
            .with_language_code(LanguageCode::Spa)
            .with_destination_settings(
                CaptionDestinationSettings::new()
                    .with_destination_type(CaptionDestinationType::DvbSub)
                    .with_dvb_sub_destination_settings(
                        DvbSubDestinationSettings::new()
                            .with_subtitling_type(DvbSubtitlingType::HearingImpaired),
                    ),
            );

        let json = serde_json::to_value(&caption).unwrap();
        assert_eq!(json["captionSelectorName"], "Captions Selector 1");
        assert_eq!(json["languageCode"], "SPA");
        assert_eq!(json["destinationSettings"]["destinationType"], "DVB_SUB");
        assert_eq!(
            json["destinationSettings"]["dvbSubDestinationSettings"]["subtitlingType"],
            "HEARING_IMPAIRED"
        );
        assert!(caption.validate().is_ok());
    }

    #[test]
    fn test_empty_selector_name_rejected() {
        assert!(CaptionDescription::new()
            .with_caption_selector_name("")
            .validate()
            .is_err());
    }
}
