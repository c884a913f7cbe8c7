//! Color tokens for the showcase page

use serde::Serialize;
use vitrine_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Surfaces
    PageBackground,
    Panel,
    Card,
    TileIndicator,

    // Text
    TextPrimary,
    TextSecondary,
    CareHeading,
    Accent,

    // Controls
    NavButton,
    NavIcon,
    ToggleBackground,
    ToggleIcon,

    Divider,
}

impl ColorToken {
    pub const ALL: [ColorToken; 13] = [
        ColorToken::PageBackground,
        ColorToken::Panel,
        ColorToken::Card,
        ColorToken::TileIndicator,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::CareHeading,
        ColorToken::Accent,
        ColorToken::NavButton,
        ColorToken::NavIcon,
        ColorToken::ToggleBackground,
        ColorToken::ToggleIcon,
        ColorToken::Divider,
    ];

    /// CSS custom property name, without the `--` prefix
    pub fn css_name(self) -> &'static str {
        match self {
            ColorToken::PageBackground => "page-bg",
            ColorToken::Panel => "panel",
            ColorToken::Card => "card",
            ColorToken::TileIndicator => "tile-indicator",
            ColorToken::TextPrimary => "text-primary",
            ColorToken::TextSecondary => "text-secondary",
            ColorToken::CareHeading => "care-heading",
            ColorToken::Accent => "accent",
            ColorToken::NavButton => "nav-button",
            ColorToken::NavIcon => "nav-icon",
            ColorToken::ToggleBackground => "toggle-bg",
            ColorToken::ToggleIcon => "toggle-icon",
            ColorToken::Divider => "divider",
        }
    }

    pub fn from_css_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.css_name() == name)
    }
}

/// Complete set of page colors for one scheme
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorTokens {
    pub page_background: Color,
    pub panel: Color,
    pub card: Color,
    pub tile_indicator: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub care_heading: Color,
    pub accent: Color,

    pub nav_button: Color,
    pub nav_icon: Color,
    pub toggle_background: Color,
    pub toggle_icon: Color,

    pub divider: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::PageBackground => self.page_background,
            ColorToken::Panel => self.panel,
            ColorToken::Card => self.card,
            ColorToken::TileIndicator => self.tile_indicator,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::CareHeading => self.care_heading,
            ColorToken::Accent => self.accent,
            ColorToken::NavButton => self.nav_button,
            ColorToken::NavIcon => self.nav_icon,
            ColorToken::ToggleBackground => self.toggle_background,
            ColorToken::ToggleIcon => self.toggle_icon,
            ColorToken::Divider => self.divider,
        }
    }

    /// Linear interpolation between two color token sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            page_background: Color::lerp(&from.page_background, &to.page_background, t),
            panel: Color::lerp(&from.panel, &to.panel, t),
            card: Color::lerp(&from.card, &to.card, t),
            tile_indicator: Color::lerp(&from.tile_indicator, &to.tile_indicator, t),
            text_primary: Color::lerp(&from.text_primary, &to.text_primary, t),
            text_secondary: Color::lerp(&from.text_secondary, &to.text_secondary, t),
            care_heading: Color::lerp(&from.care_heading, &to.care_heading, t),
            accent: Color::lerp(&from.accent, &to.accent, t),
            nav_button: Color::lerp(&from.nav_button, &to.nav_button, t),
            nav_icon: Color::lerp(&from.nav_icon, &to.nav_icon, t),
            toggle_background: Color::lerp(&from.toggle_background, &to.toggle_background, t),
            toggle_icon: Color::lerp(&from.toggle_icon, &to.toggle_icon, t),
            divider: Color::lerp(&from.divider, &to.divider, t),
        }
    }
}
