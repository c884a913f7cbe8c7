//! Color scheme and the document root scope

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Class marker the root scope carries in dark mode
pub const DARK_CLASS: &str = "dark";

/// Light or dark presentation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }

    /// Icon shown on the toggle: it offers the scheme you are not in
    pub fn toggle_icon(self) -> ThemeIcon {
        match self {
            ColorScheme::Light => ThemeIcon::Moon,
            ColorScheme::Dark => ThemeIcon::Sun,
        }
    }
}

/// Glyph on the theme toggle button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    pub fn name(self) -> &'static str {
        match self {
            ThemeIcon::Moon => "moon",
            ThemeIcon::Sun => "sun",
        }
    }
}

/// Class list on the document root
///
/// Styles scoped under a class (`.dark .card { .. }`) apply to the whole
/// page once the root carries it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RootScope {
    classes: SmallVec<[String; 2]>,
}

impl RootScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add `class`; returns false if already present
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove `class`; returns false if absent
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Flip `class`, returning whether it is now present
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.remove(class) {
            false
        } else {
            self.add(class)
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Space-separated, as in a `class` attribute
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}
