//! Carousel configuration (`vitrine.toml`)
//!
//! Every field has a default matching the shipped page, so an empty file
//! (or no file) configures the stock behavior.

use crate::catalog::ITEM_COUNT;
use crate::error::{CarouselError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use vitrine_animation::Easing;
use vitrine_core::Color;
use vitrine_theme::{ColorScheme, ColorToken};

/// Timing and startup settings for a carousel view
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselConfig {
    /// Index shown on load
    #[serde(default = "default_initial_index")]
    pub initial_index: usize,
    /// Duration of each image tween
    #[serde(default = "default_tween_duration_ms")]
    pub tween_duration_ms: u32,
    /// Delay before the transitioning flag clears
    #[serde(default = "default_transition_reset_ms")]
    pub transition_reset_ms: u32,
    /// Title/price fade and tile indicator transition
    #[serde(default = "default_text_transition_ms")]
    pub text_transition_ms: u32,
    /// Page color cross-fade on theme toggle
    #[serde(default = "default_theme_fade_ms")]
    pub theme_fade_ms: u32,
    #[serde(default)]
    pub initial_scheme: ColorScheme,
    /// Image tween ease, as a GSAP or CSS name
    #[serde(default = "default_ease")]
    pub ease: String,
    /// Whether a navigation may start while the previous one is still
    /// transitioning; when false such clicks are dropped
    #[serde(default = "default_true")]
    pub allow_overlap: bool,
    /// Pinned page colors (`[colors]` table), keyed by token name such as
    /// `accent` or `nav-button`, valued `#rrggbb` or `#rrggbbaa`
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

fn default_initial_index() -> usize {
    1
}

fn default_tween_duration_ms() -> u32 {
    500
}

fn default_transition_reset_ms() -> u32 {
    400
}

fn default_text_transition_ms() -> u32 {
    500
}

fn default_theme_fade_ms() -> u32 {
    300
}

fn default_ease() -> String {
    "power1.out".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            initial_index: default_initial_index(),
            tween_duration_ms: default_tween_duration_ms(),
            transition_reset_ms: default_transition_reset_ms(),
            text_transition_ms: default_text_transition_ms(),
            theme_fade_ms: default_theme_fade_ms(),
            initial_scheme: ColorScheme::default(),
            ease: default_ease(),
            allow_overlap: default_true(),
            colors: BTreeMap::new(),
        }
    }
}

impl CarouselConfig {
    /// Load and validate a config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CarouselError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: CarouselConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_index >= ITEM_COUNT {
            return Err(CarouselError::invalid(
                "initial_index",
                format!("{} is outside 0..{ITEM_COUNT}", self.initial_index),
            ));
        }
        if self.tween_duration_ms == 0 {
            return Err(CarouselError::invalid("tween_duration_ms", "must be > 0"));
        }
        if self.transition_reset_ms == 0 {
            return Err(CarouselError::invalid("transition_reset_ms", "must be > 0"));
        }
        self.easing()?;
        self.color_overrides()?;
        Ok(())
    }

    /// Resolved `[colors]` entries
    pub fn color_overrides(&self) -> Result<Vec<(ColorToken, Color)>> {
        self.colors
            .iter()
            .map(|(name, value)| {
                let token = ColorToken::from_css_name(name).ok_or_else(|| {
                    CarouselError::invalid("colors", format!("unknown color token '{name}'"))
                })?;
                let color = Color::from_css_hex(value).ok_or_else(|| {
                    CarouselError::invalid("colors", format!("'{value}' for '{name}' is not #rrggbb"))
                })?;
                Ok((token, color))
            })
            .collect()
    }

    /// Resolved image tween ease
    pub fn easing(&self) -> Result<Easing> {
        Easing::from_name(&self.ease)
            .ok_or_else(|| CarouselError::invalid("ease", format!("unknown ease '{}'", self.ease)))
    }

    /// Image tween duration in seconds, as the tween engine expects
    pub fn tween_duration_secs(&self) -> f32 {
        self.tween_duration_ms as f32 / 1000.0
    }
}
