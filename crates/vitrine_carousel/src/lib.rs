//! Vitrine Carousel
//!
//! A product showcase: three color variants, three product images that trade
//! places on every navigation, a price panel, color selector tiles, and a
//! light/dark toggle.
//!
//! # Example
//!
//! ```rust
//! use vitrine_carousel::{CarouselConfig, CarouselView};
//!
//! let mut view = CarouselView::new(&CarouselConfig::default()).unwrap();
//! assert_eq!(view.display().model, "Sky Blue");
//!
//! view.next();
//! // Text follows the index at once; the images are still moving
//! assert_eq!(view.display().price, "$564");
//! assert!(view.is_transitioning());
//!
//! for _ in 0..40 {
//!     view.tick(16.0);
//! }
//! assert!(!view.is_transitioning());
//! ```
//!
//! # Architecture
//!
//! - [`catalog`] and [`layout`]: the immutable tables (records, presets,
//!   slot permutation)
//! - [`CarouselController`]: index arithmetic and the transitioning flag
//! - [`Animator`]: issues tween requests for the image slots
//! - [`display`]: text derived from the index plus presentational transitions
//! - [`CarouselView`]: the component, generic over its
//!   [`TweenEngine`](vitrine_animation::TweenEngine)

pub mod animator;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod layout;
pub mod view;

pub use animator::Animator;
pub use catalog::{product, ProductRecord, CATALOG, ITEM_COUNT};
pub use config::CarouselConfig;
pub use controller::{step_index, CarouselController, ControllerTask, Direction};
pub use display::{DisplayText, TextStyle, TileView};
pub use error::{CarouselError, Result};
pub use layout::{slot_assignment, LayoutPreset, LAYOUT_PRESETS, PERMUTATION};
pub use view::{CarouselView, ImageSlotView, ViewSnapshot};
