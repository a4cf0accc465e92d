use bevis_core::ColorRamp;
use palette::Srgb;
use ratatui::style::Color;

use super::Theme;

/// The original Sikt app palette - the default light theme
pub fn sikt() -> Theme {
    Theme {
        name: "sikt".to_string(),
        display_name: "Sikt".to_string(),

        bg_color: Color::Rgb(246, 242, 253), // Pale lavender app background
        header_bg_color: Color::Rgb(243, 226, 253), // Lilac header bar
        header_border_color: Color::Rgb(134, 101, 185), // Muted purple underline

        profile_card_bg_color: Color::Rgb(244, 226, 254), // Purple profile card
        profile_card_border_color: Color::Rgb(134, 101, 185),
        validity_bg_color: Color::Rgb(198, 245, 223), // Green validity card
        validity_border_color: Color::Rgb(123, 209, 169),

        text_color: Color::Rgb(26, 26, 26),
        muted_color: Color::Rgb(90, 90, 90),
        accent_color: Color::Rgb(107, 78, 255), // Brand purple
        outline_color: Color::Rgb(201, 185, 255),
        button_text_color: Color::Rgb(255, 255, 255),

        // Validity card pulses green -> purple -> lilac and back
        kontroll_card_ramp: ColorRamp::through(
            Srgb::new(198, 245, 223),
            Srgb::new(107, 78, 255),
            Srgb::new(243, 226, 253),
        ),
        // Overlay text rises out of the card green into ink
        kontroll_text_ramp: ColorRamp::through(
            Srgb::new(198, 245, 223),
            Srgb::new(47, 109, 79),
            Srgb::new(26, 26, 26),
        ),
        // Kontroll button deepens while a run is active
        kontroll_button_ramp: ColorRamp::between(
            Srgb::new(107, 78, 255),
            Srgb::new(43, 28, 102),
        ),
    }
}

/// Dark variant of the Sikt palette
pub fn sikt_mork() -> Theme {
    Theme {
        name: "sikt-mork".to_string(),
        display_name: "Sikt Mørk".to_string(),

        bg_color: Color::Rgb(26, 22, 37),
        header_bg_color: Color::Rgb(36, 28, 54),
        header_border_color: Color::Rgb(134, 101, 185),

        profile_card_bg_color: Color::Rgb(44, 34, 66),
        profile_card_border_color: Color::Rgb(134, 101, 185),
        validity_bg_color: Color::Rgb(24, 58, 43),
        validity_border_color: Color::Rgb(59, 122, 92),

        text_color: Color::Rgb(230, 225, 240),
        muted_color: Color::Rgb(150, 145, 165),
        accent_color: Color::Rgb(139, 109, 255),
        outline_color: Color::Rgb(90, 70, 160),
        button_text_color: Color::Rgb(255, 255, 255),

        kontroll_card_ramp: ColorRamp::through(
            Srgb::new(24, 58, 43),
            Srgb::new(107, 78, 255),
            Srgb::new(60, 42, 84),
        ),
        kontroll_text_ramp: ColorRamp::through(
            Srgb::new(24, 58, 43),
            Srgb::new(140, 200, 170),
            Srgb::new(235, 255, 245),
        ),
        kontroll_button_ramp: ColorRamp::between(
            Srgb::new(139, 109, 255),
            Srgb::new(50, 36, 110),
        ),
    }
}
