//! Scenario definition for headless carousel runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use vitrine_theme::ColorScheme;

/// Sequence of headless diagnostic steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid scenario {}", path.display()))
    }
}

/// One scenario step: a user action, a span of frames, or an assertion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Next,
    Prev,
    ToggleTheme,
    Wait { ms: u64 },
    Tick { frames: u32 },
    AssertExists { id: String },
    AssertTextContains { id: String, value: String },
    AssertActiveTile { index: usize },
    AssertTransitioning { value: bool },
    AssertScheme { scheme: ColorScheme },
    /// Image slot has settled on a preset's geometry
    AssertSlot { slot: usize, preset: usize },
}

impl ScenarioStep {
    /// The step's `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            ScenarioStep::Next => "next",
            ScenarioStep::Prev => "prev",
            ScenarioStep::ToggleTheme => "toggle_theme",
            ScenarioStep::Wait { .. } => "wait",
            ScenarioStep::Tick { .. } => "tick",
            ScenarioStep::AssertExists { .. } => "assert_exists",
            ScenarioStep::AssertTextContains { .. } => "assert_text_contains",
            ScenarioStep::AssertActiveTile { .. } => "assert_active_tile",
            ScenarioStep::AssertTransitioning { .. } => "assert_transitioning",
            ScenarioStep::AssertScheme { .. } => "assert_scheme",
            ScenarioStep::AssertSlot { .. } => "assert_slot",
        }
    }

    pub fn is_assertion(&self) -> bool {
        self.kind().starts_with("assert_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_steps() {
        let scenario = HeadlessScenario::from_json(
            r#"{
                "name": "smoke",
                "steps": [
                    {"type": "next"},
                    {"type": "wait", "ms": 400},
                    {"type": "assert_scheme", "scheme": "dark"},
                    {"type": "assert_slot", "slot": 0, "preset": 1}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.name.as_deref(), Some("smoke"));
        assert_eq!(scenario.steps[0], ScenarioStep::Next);
        assert_eq!(scenario.steps[1], ScenarioStep::Wait { ms: 400 });
        assert_eq!(
            scenario.steps[2],
            ScenarioStep::AssertScheme {
                scheme: ColorScheme::Dark
            }
        );
        assert!(scenario.steps[3].is_assertion());
        assert!(!scenario.steps[1].is_assertion());
    }

    #[test]
    fn rejects_unknown_step_types() {
        assert!(HeadlessScenario::from_json(r#"{"steps":[{"type":"swipe"}]}"#).is_err());
    }
}
