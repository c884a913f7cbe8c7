//! Vitrine App
//!
//! Headless host for the showcase carousel: a deterministic frame loop,
//! JSON scenarios of clicks, waits and assertions, and machine-readable
//! reports. The `vitrine` binary wraps it for the command line.
//!
//! # Example
//!
//! ```rust
//! use vitrine_app::run_scenario;
//! use vitrine_carousel::CarouselConfig;
//!
//! let outcome = run_scenario(
//!     r#"{"steps": [
//!         {"type": "next"},
//!         {"type": "assert_text_contains", "id": "price", "value": "$564"},
//!         {"type": "wait", "ms": 400},
//!         {"type": "assert_transitioning", "value": false}
//!     ]}"#,
//!     &CarouselConfig::default(),
//! )
//! .unwrap();
//! assert!(!outcome.is_failed());
//! ```

pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;

pub use headless_assert::AssertionResult;
pub use headless_report::{HeadlessReport, ReportStatus, RunProgress};
pub use headless_runner::{run_loaded_scenario, run_scenario, settle, RunOutcome};
pub use headless_runtime::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
