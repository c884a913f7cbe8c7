//! Themes and light/dark bundles

use crate::scheme::ColorScheme;
use crate::tokens::ColorTokens;
use vitrine_core::Color;

/// Colors for one scheme
#[derive(Clone, Debug)]
pub struct Theme {
    scheme: ColorScheme,
    colors: ColorTokens,
}

impl Theme {
    pub fn new(scheme: ColorScheme, colors: ColorTokens) -> Self {
        Self { scheme, colors }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }
}

/// A light/dark pair
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    pub name: String,
    light: Theme,
    dark: Theme,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: Theme, dark: Theme) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        showcase_bundle()
    }
}

/// Tailwind palette entries the page uses
mod tw {
    pub const GRAY_100: u32 = 0xF3F4F6;
    pub const GRAY_200: u32 = 0xE5E7EB;
    pub const GRAY_400: u32 = 0x9CA3AF;
    pub const GRAY_700: u32 = 0x374151;
    pub const GRAY_800: u32 = 0x1F2937;
    pub const GRAY_900: u32 = 0x111827;
    pub const YELLOW_500: u32 = 0xEAB308;
}

/// Apple-store inspired palette of the product page
pub fn showcase_bundle() -> ThemeBundle {
    let light = ColorTokens {
        page_background: Color::WHITE,
        panel: Color::from_hex(tw::GRAY_100),
        card: Color::WHITE,
        tile_indicator: Color::from_hex(tw::GRAY_100),
        text_primary: Color::from_hex(tw::GRAY_900),
        text_secondary: Color::from_hex(0x515154),
        care_heading: Color::from_hex(tw::GRAY_900),
        accent: Color::from_hex(0xBF4800),
        nav_button: Color::from_hex(0x0071E3),
        nav_icon: Color::WHITE,
        toggle_background: Color::from_hex(tw::GRAY_200),
        toggle_icon: Color::from_hex(tw::GRAY_700),
        divider: Color::from_hex_rgba(0xD2D2D766),
    };

    let dark = ColorTokens {
        page_background: Color::from_hex(0x1D1D1F),
        panel: Color::BLACK,
        card: Color::from_hex(0x1D1D1F),
        tile_indicator: Color::BLACK,
        text_primary: Color::WHITE,
        text_secondary: Color::from_hex(tw::GRAY_400),
        care_heading: Color::from_hex(tw::GRAY_100),
        accent: Color::from_hex(0xFF6B19),
        nav_button: Color::from_hex(0x0071E3),
        nav_icon: Color::WHITE,
        toggle_background: Color::from_hex(tw::GRAY_800),
        toggle_icon: Color::from_hex(tw::YELLOW_500),
        divider: Color::from_hex_rgba(0xD2D2D733),
    };

    ThemeBundle::new(
        "showcase",
        Theme::new(ColorScheme::Light, light),
        Theme::new(ColorScheme::Dark, dark),
    )
}
