//! Theme system
//!
//! The original Sikt palette plus a dark variant. A theme carries the
//! static screen colors and the three Kontroll ramps the presentation
//! samples while the sequencer runs.

use bevis_core::ColorRamp;
use once_cell::sync::Lazy;
use palette::Srgb;
use ratatui::style::Color;

pub mod definitions;

static THEMES: Lazy<Vec<Theme>> =
    Lazy::new(|| vec![definitions::sikt(), definitions::sikt_mork()]);

/// A complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    // Screen chrome
    pub bg_color: Color,
    pub header_bg_color: Color,
    pub header_border_color: Color,

    // Cards
    pub profile_card_bg_color: Color,
    pub profile_card_border_color: Color,
    pub validity_bg_color: Color,
    pub validity_border_color: Color,

    // Text & controls
    pub text_color: Color,
    pub muted_color: Color,
    pub accent_color: Color,
    pub outline_color: Color,
    pub button_text_color: Color,

    // Kontroll animation ramps
    pub kontroll_card_ramp: ColorRamp,
    pub kontroll_text_ramp: ColorRamp,
    pub kontroll_button_ramp: ColorRamp,
}

impl Theme {
    /// Look up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Theme> {
        THEMES.iter().find(|t| t.name == name).cloned()
    }

    pub fn default_theme() -> Theme {
        definitions::sikt()
    }
}

/// Ramp output to a terminal color.
pub fn to_color(c: Srgb<u8>) -> Color {
    Color::Rgb(c.red, c.green, c.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert!(Theme::by_name("sikt").is_some());
        assert!(Theme::by_name("sikt-mork").is_some());
        assert!(Theme::by_name("nope").is_none());
    }

    #[test]
    fn test_card_ramp_starts_on_validity_color() {
        // At progress zero the animated card must match its resting color
        let theme = Theme::default_theme();
        let resting = to_color(theme.kontroll_card_ramp.sample(0.0));
        assert_eq!(resting, theme.validity_bg_color);
    }
}
