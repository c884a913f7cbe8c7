//! Report output model for headless scenario runs.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};
use vitrine_theme::ColorScheme;

/// Report status for a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    /// Carousel index when the run stopped
    pub final_index: usize,
    pub final_scheme: ColorScheme,
}

/// Where the run was when it stopped
#[derive(Debug, Clone, Copy)]
pub struct RunProgress {
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub final_index: usize,
    pub final_scheme: ColorScheme,
}

impl HeadlessReport {
    pub fn passed(progress: RunProgress) -> Self {
        Self {
            status: ReportStatus::Passed,
            scenario: None,
            failed_step_index: None,
            assertion: None,
            code: None,
            message: None,
            elapsed_frames: progress.elapsed_frames,
            elapsed_ms: progress.elapsed_ms,
            final_index: progress.final_index,
            final_scheme: progress.final_scheme,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        code: String,
        message: String,
        progress: RunProgress,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            code: Some(code),
            message: Some(message),
            ..Self::passed(progress)
        }
    }

    pub fn with_scenario(mut self, name: Option<String>) -> Self {
        self.scenario = name;
        self
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        std::fs::write(path, payload)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress() -> RunProgress {
        RunProgress {
            elapsed_frames: 25,
            elapsed_ms: 400,
            final_index: 2,
            final_scheme: ColorScheme::Dark,
        }
    }

    #[test]
    fn rejects_escaping_paths() {
        let report = HeadlessReport::passed(progress());
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("../report.json")).is_err());
        assert!(report.write_to_path(Path::new("out/../../report.json")).is_err());
    }

    #[test]
    fn failed_report_serializes_step_details() {
        let report = HeadlessReport::failed(
            "assert_text_contains",
            3,
            "text_mismatch".to_string(),
            "price: expected substring '$1', got '$564'".to_string(),
            progress(),
        )
        .with_scenario(Some("smoke".to_string()));

        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["scenario"], "smoke");
        assert_eq!(json["failed_step_index"], 3);
        assert_eq!(json["final_scheme"], "dark");

        let parsed: HeadlessReport = serde_json::from_slice(&out).unwrap();
        assert!(!parsed.is_passed());
        assert_eq!(parsed.code.as_deref(), Some("text_mismatch"));
    }
}
