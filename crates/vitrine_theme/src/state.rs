//! Theme state
//!
//! The scheme flag and the root scope change synchronously on a toggle;
//! only the resolved colors are eased toward the new scheme, the way a
//! `transition-colors` page repaints.

use crate::scheme::{ColorScheme, RootScope, ThemeIcon, DARK_CLASS};
use crate::theme::ThemeBundle;
use crate::tokens::{ColorToken, ColorTokens};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use vitrine_animation::{Easing, ValueTransition};
use vitrine_core::Color;

/// Default duration of the color cross-fade
pub const DEFAULT_FADE_MS: u32 = 300;

/// In-flight color cross-fade
struct ThemeTransition {
    /// 0.0 = `from`, 1.0 = `to`
    progress: ValueTransition,
    from: ColorTokens,
    to: ColorTokens,
}

/// Current theme of one page
pub struct ThemeState {
    bundle: ThemeBundle,
    scheme: ColorScheme,
    root: RootScope,

    /// Displayed colors (mid-fade while a transition runs)
    colors: ColorTokens,

    color_overrides: FxHashMap<ColorToken, Color>,
    transition: Option<ThemeTransition>,
    fade_ms: u32,
}

impl ThemeState {
    /// Showcase palette with the default fade
    pub fn new(scheme: ColorScheme) -> Self {
        Self::with_bundle(ThemeBundle::default(), scheme, DEFAULT_FADE_MS)
    }

    pub fn with_bundle(bundle: ThemeBundle, scheme: ColorScheme, fade_ms: u32) -> Self {
        let colors = bundle.for_scheme(scheme).colors().clone();
        let mut root = RootScope::new();
        if scheme.is_dark() {
            root.add(DARK_CLASS);
        }

        Self {
            bundle,
            scheme,
            root,
            colors,
            color_overrides: FxHashMap::default(),
            transition: None,
            fade_ms,
        }
    }

    // ========== Color Scheme ==========

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    pub fn root(&self) -> &RootScope {
        &self.root
    }

    pub fn toggle_icon(&self) -> ThemeIcon {
        self.scheme.toggle_icon()
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) -> ColorScheme {
        self.set_scheme(self.scheme.toggle());
        self.scheme
    }

    /// Switch scheme; the root marker flips now, colors fade
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        if self.scheme == scheme {
            return;
        }
        tracing::debug!(
            "ThemeState::set_scheme - switching from {:?} to {:?}",
            self.scheme,
            scheme
        );

        self.scheme = scheme;
        if scheme.is_dark() {
            self.root.add(DARK_CLASS);
        } else {
            self.root.remove(DARK_CLASS);
        }

        let target = self.bundle.for_scheme(scheme).colors().clone();
        if self.fade_ms == 0 {
            self.colors = target;
            self.transition = None;
        } else {
            // Restart from whatever is on screen, even mid-fade
            let mut progress = ValueTransition::new(0.0, self.fade_ms, Easing::TAILWIND_DEFAULT);
            progress.set_target(1.0);
            self.transition = Some(ThemeTransition {
                progress,
                from: self.colors.clone(),
                to: target,
            });
        }
    }

    /// Advance the color fade; returns true while more frames are needed
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        transition.progress.tick(dt_ms);
        let t = transition.progress.value();
        self.colors = ColorTokens::lerp(&transition.from, &transition.to, t);
        tracing::trace!(progress = t, "theme fade");

        if transition.progress.is_settled() {
            self.colors = transition.to.clone();
            self.transition = None;
            return false;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    // ========== Color Access ==========

    /// Displayed color for `token` (checks overrides first)
    pub fn color(&self, token: ColorToken) -> Color {
        if let Some(color) = self.color_overrides.get(&token) {
            return *color;
        }
        self.colors.get(token)
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    /// Pin `token` to `color` in both schemes
    pub fn set_color_override(&mut self, token: ColorToken, color: Color) {
        self.color_overrides.insert(token, color);
    }

    /// CSS custom properties for every token, keyed without the `--` prefix
    pub fn to_css_variable_map(&self) -> BTreeMap<String, String> {
        ColorToken::ALL
            .iter()
            .map(|token| (token.css_name().to_string(), self.color(*token).to_css()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_start_marks_the_root() {
        let theme = ThemeState::new(ColorScheme::Dark);
        assert!(theme.root().contains(DARK_CLASS));
        assert_eq!(theme.toggle_icon(), ThemeIcon::Sun);
    }

    #[test]
    fn toggle_flips_scheme_and_root_synchronously() {
        let mut theme = ThemeState::new(ColorScheme::Light);
        assert_eq!(theme.toggle(), ColorScheme::Dark);
        assert!(theme.root().contains(DARK_CLASS));

        // Colors have not moved yet
        assert_eq!(theme.color(ColorToken::PageBackground), Color::WHITE);
        assert!(theme.is_animating());
    }

    #[test]
    fn fade_lands_on_target_palette() {
        let mut theme = ThemeState::new(ColorScheme::Light);
        theme.toggle();

        assert!(theme.tick(150.0));
        let mid = theme.color(ColorToken::PageBackground);
        assert!(mid.r < 1.0 && mid.r > 0.1);

        assert!(!theme.tick(150.0));
        let dark = ThemeBundle::default();
        assert_eq!(theme.colors(), dark.for_scheme(ColorScheme::Dark).colors());
    }

    #[test]
    fn zero_fade_swaps_instantly() {
        let mut theme = ThemeState::with_bundle(ThemeBundle::default(), ColorScheme::Light, 0);
        theme.toggle();
        assert!(!theme.is_animating());
        assert_eq!(theme.color(ColorToken::TextPrimary), Color::WHITE);
    }

    #[test]
    fn overrides_survive_scheme_switches() {
        let mut theme = ThemeState::new(ColorScheme::Light);
        theme.set_color_override(ColorToken::Accent, Color::BLACK);
        assert_eq!(theme.color(ColorToken::Accent), Color::BLACK);

        theme.toggle();
        theme.tick(300.0);
        assert_eq!(theme.color(ColorToken::Accent), Color::BLACK);
        assert_eq!(theme.colors().get(ColorToken::Accent).to_css(), "#ff6b19");
    }

    #[test]
    fn css_variables_cover_every_token() {
        let theme = ThemeState::new(ColorScheme::Light);
        let vars = theme.to_css_variable_map();
        assert_eq!(vars.len(), ColorToken::ALL.len());
        assert_eq!(vars["nav-button"], "#0071e3");
    }
}
