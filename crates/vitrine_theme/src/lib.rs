//! Vitrine Theme System
//!
//! Light and dark schemes for the showcase page, and the toggle that
//! switches between them.
//!
//! # Overview
//!
//! - **Color scheme**: [`ColorScheme`] is the single boolean the user flips
//! - **Root scope**: [`RootScope`] mirrors the class list on the document
//!   root; dark mode adds the `dark` marker
//! - **Tokens**: [`ColorTokens`] resolves every page color for a scheme
//! - **State**: [`ThemeState`] owns the scheme, flips it synchronously, and
//!   cross-fades the resolved colors
//!
//! # Quick Start
//!
//! ```rust
//! use vitrine_theme::{ColorScheme, ColorToken, ThemeState};
//!
//! let mut theme = ThemeState::new(ColorScheme::Light);
//! theme.toggle();
//!
//! assert!(theme.is_dark());
//! assert!(theme.root().contains("dark"));
//!
//! // Colors fade in over the configured window
//! theme.tick(300.0);
//! let background = theme.color(ColorToken::PageBackground);
//! assert_eq!(background.to_css(), "#1d1d1f");
//! ```

pub mod scheme;
pub mod state;
pub mod theme;
pub mod tokens;

pub use scheme::{ColorScheme, RootScope, ThemeIcon, DARK_CLASS};
pub use state::ThemeState;
pub use theme::{showcase_bundle, Theme, ThemeBundle};
pub use tokens::{ColorToken, ColorTokens};
