//! Color primitive

use serde::{Serialize, Serializer};

/// Linear RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build a color from `0xRRGGBBAA` (CSS 8-digit hex order)
    pub fn from_hex_rgba(hex: u32) -> Self {
        Self::from_hex(hex >> 8).with_alpha((hex & 0xFF) as f32 / 255.0)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Parse `#rrggbb` or `#rrggbbaa`
    pub fn from_css_hex(input: &str) -> Option<Self> {
        let digits = input.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_hex(value)),
            8 => Some(Self::from_hex_rgba(value)),
            _ => None,
        }
    }

    /// Component-wise linear interpolation, `t` clamped to `0.0..=1.0`
    pub fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// CSS representation: `#rrggbb` when opaque, `rgba(..)` otherwise
    pub fn to_css(&self) -> String {
        let [r, g, b] = [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        if self.a < 1.0 {
            format!("rgba({},{},{},{:.2})", r, g, b, self.a)
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_css() {
        assert_eq!(Color::from_hex(0x0071E3).to_css(), "#0071e3");
        assert_eq!(Color::from_hex(0x1D1D1F).to_css(), "#1d1d1f");
    }

    #[test]
    fn eight_digit_hex_carries_alpha() {
        let divider = Color::from_hex_rgba(0xD2D2D766);
        assert!((divider.a - 0.4).abs() < 1e-6);
        assert_eq!(divider.to_css(), "rgba(210,210,215,0.40)");
    }

    #[test]
    fn lerp_clamps_progress() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn parses_css_hex() {
        assert_eq!(Color::from_css_hex("#0071E3"), Some(Color::from_hex(0x0071E3)));
        assert_eq!(
            Color::from_css_hex("#d2d2d766").map(|c| c.to_css()).as_deref(),
            Some("rgba(210,210,215,0.40)")
        );
        assert_eq!(Color::from_css_hex("0071e3"), None);
        assert_eq!(Color::from_css_hex("#fff"), None);
        assert_eq!(Color::from_css_hex("#+0071e"), None);
    }
}
