//! Vitrine Core
//!
//! Foundational primitives shared by the Vitrine crates:
//!
//! - **Colors**: linear RGBA with hex constructors and interpolation
//! - **Style properties**: the numeric geometry a tween engine can animate
//! - **UI events**: the user actions the showcase responds to
//!
//! # Example
//!
//! ```rust
//! use vitrine_core::StyleProps;
//!
//! let from = StyleProps::geometry(250.0, 500.0, -80.0, 120.0);
//! let to = StyleProps::geometry(700.0, -20.0, 100.0, 0.0);
//!
//! let halfway = from.lerp(&to, 0.5);
//! assert_eq!(halfway.resolved_width(), 475.0);
//! ```

pub mod color;
pub mod events;
pub mod style;

pub use color::Color;
pub use events::UiEvent;
pub use style::StyleProps;
