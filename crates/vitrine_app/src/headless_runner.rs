//! Scenario runner that drives a carousel view headless.

use crate::headless_assert::{
    evaluate_assert_active_tile, evaluate_assert_exists, evaluate_assert_scheme,
    evaluate_assert_slot, evaluate_assert_text_contains, evaluate_assert_transitioning,
    AssertionResult,
};
use crate::headless_report::{HeadlessReport, RunProgress};
use crate::headless_runtime::{HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use anyhow::{bail, Result};
use vitrine_animation::TweenEngine;
use vitrine_carousel::{CarouselConfig, CarouselView, ViewSnapshot};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn into_report(self) -> HeadlessReport {
        match self {
            RunOutcome::Passed { report } | RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a fresh view.
pub fn run_scenario(input: &str, config: &CarouselConfig) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    let mut view = CarouselView::new(config)?;
    run_loaded_scenario(&scenario, &mut view, HeadlessRunConfig::default())
}

/// Execute a pre-loaded scenario against `view`.
pub fn run_loaded_scenario<E: TweenEngine>(
    scenario: &HeadlessScenario,
    view: &mut CarouselView<E>,
    runtime_cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    runtime_cfg.validate()?;
    tracing::debug!(
        scenario = scenario.name.as_deref().unwrap_or("<unnamed>"),
        steps = scenario.steps.len(),
        "running scenario"
    );

    let mut run = ScenarioRun {
        view,
        runtime_cfg,
        elapsed_frames: 0,
        elapsed_ms: 0,
        latest_snapshot: None,
    };

    for (step_index, step) in scenario.steps.iter().enumerate() {
        match step {
            ScenarioStep::Next => run.act(|view| {
                view.next();
            }),
            ScenarioStep::Prev => run.act(|view| {
                view.prev();
            }),
            ScenarioStep::ToggleTheme => run.act(|view| {
                view.toggle_theme();
            }),
            ScenarioStep::Wait { ms } => {
                let frames = runtime_cfg.frames_for(*ms);
                let mut remaining_ms = *ms;
                run.run_sampled_frames(frames, step_index, || {
                    let step_ms = remaining_ms.min(runtime_cfg.tick_ms);
                    remaining_ms = remaining_ms.saturating_sub(step_ms);
                    step_ms
                })?;
            }
            ScenarioStep::Tick { frames } => {
                run.run_sampled_frames(*frames, step_index, || runtime_cfg.tick_ms)?;
            }
            assertion => {
                let snapshot = run.ensure_snapshot();
                if let AssertionResult::Failed { code, message } = evaluate(assertion, snapshot) {
                    tracing::debug!(step_index, %code, %message, "assertion failed");
                    let report = HeadlessReport::failed(
                        assertion.kind(),
                        step_index,
                        code,
                        message,
                        run.progress(),
                    )
                    .with_scenario(scenario.name.clone());
                    return Ok(RunOutcome::Failed { report });
                }
            }
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(run.progress()).with_scenario(scenario.name.clone()),
    })
}

/// Tick `view` until nothing animates, bounded by `max_ms`; returns the
/// logical time spent
pub fn settle<E: TweenEngine>(
    view: &mut CarouselView<E>,
    runtime_cfg: HeadlessRunConfig,
    max_ms: u64,
) -> u64 {
    let mut spent = 0;
    while view.is_animating() && spent < max_ms {
        view.tick(runtime_cfg.tick_ms as f32);
        spent += runtime_cfg.tick_ms;
    }
    spent
}

fn evaluate(step: &ScenarioStep, snapshot: &ViewSnapshot) -> AssertionResult {
    match step {
        ScenarioStep::AssertExists { id } => evaluate_assert_exists(id, snapshot),
        ScenarioStep::AssertTextContains { id, value } => {
            evaluate_assert_text_contains(id, value, snapshot)
        }
        ScenarioStep::AssertActiveTile { index } => evaluate_assert_active_tile(*index, snapshot),
        ScenarioStep::AssertTransitioning { value } => {
            evaluate_assert_transitioning(*value, snapshot)
        }
        ScenarioStep::AssertScheme { scheme } => evaluate_assert_scheme(*scheme, snapshot),
        ScenarioStep::AssertSlot { slot, preset } => evaluate_assert_slot(*slot, *preset, snapshot),
        _ => AssertionResult::Passed,
    }
}

struct ScenarioRun<'a, E: TweenEngine> {
    view: &'a mut CarouselView<E>,
    runtime_cfg: HeadlessRunConfig,
    elapsed_frames: u64,
    elapsed_ms: u64,
    latest_snapshot: Option<ViewSnapshot>,
}

impl<E: TweenEngine> ScenarioRun<'_, E> {
    fn act(&mut self, action: impl FnOnce(&mut CarouselView<E>)) {
        action(&mut *self.view);
        self.latest_snapshot = None;
    }

    fn ensure_snapshot(&mut self) -> &ViewSnapshot {
        let view = &*self.view;
        self.latest_snapshot.get_or_insert_with(|| view.snapshot())
    }

    fn progress(&self) -> RunProgress {
        RunProgress {
            elapsed_frames: self.elapsed_frames,
            elapsed_ms: self.elapsed_ms,
            final_index: self.view.current_index(),
            final_scheme: self.view.theme().scheme(),
        }
    }

    fn run_sampled_frames<A>(&mut self, frames: u32, step_index: usize, mut advance_ms: A) -> Result<()>
    where
        A: FnMut() -> u64,
    {
        if frames == 0 {
            self.latest_snapshot = Some(self.view.snapshot());
            return Ok(());
        }

        if frames > self.runtime_cfg.max_frames {
            bail!(
                "step {step_index} needs {frames} frames, over the budget of {}",
                self.runtime_cfg.max_frames
            );
        }

        let probe_every = self.runtime_cfg.probe_every_frames.max(1);
        let mut cfg = self.runtime_cfg;
        cfg.max_frames = frames;
        let mut sampled_frames = 0u32;
        HeadlessRuntime::run(cfg, |_| {
            let step_ms = advance_ms();
            self.view.tick(step_ms as f32);
            self.elapsed_frames = self.elapsed_frames.saturating_add(1);
            self.elapsed_ms = self.elapsed_ms.saturating_add(step_ms);
            sampled_frames = sampled_frames.saturating_add(1);

            if sampled_frames % probe_every == 0 || sampled_frames == frames {
                let snapshot = self.view.snapshot();
                tracing::trace!(
                    step_index,
                    elapsed_ms = self.elapsed_ms,
                    index = snapshot.index,
                    transitioning = snapshot.transitioning,
                    "probe"
                );
                self.latest_snapshot = Some(snapshot);
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_invalidate_the_cached_snapshot() {
        let outcome = run_scenario(
            r#"{"steps":[
                {"type":"assert_text_contains","id":"price","value":"$748"},
                {"type":"next"},
                {"type":"assert_text_contains","id":"price","value":"$564"}
            ]}"#,
            &CarouselConfig::default(),
        )
        .unwrap();
        assert!(!outcome.is_failed(), "{:?}", outcome.report());
    }

    #[test]
    fn wait_consumes_whole_frames() {
        let outcome = run_scenario(
            r#"{"steps":[{"type":"wait","ms":40}]}"#,
            &CarouselConfig::default(),
        )
        .unwrap();
        let report = outcome.report();
        assert_eq!(report.elapsed_frames, 3);
        assert_eq!(report.elapsed_ms, 40);
    }

    #[test]
    fn steps_over_the_frame_budget_are_rejected() {
        let scenario =
            HeadlessScenario::from_json(r#"{"steps":[{"type":"wait","ms":10000000000}]}"#).unwrap();
        let mut view = CarouselView::new(&CarouselConfig::default()).unwrap();
        let err = run_loaded_scenario(&scenario, &mut view, HeadlessRunConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("budget"), "{err}");
        assert_eq!(view.elapsed_ms(), 0.0);

        let tight = HeadlessRunConfig {
            max_frames: 10,
            ..Default::default()
        };
        let scenario = HeadlessScenario::from_json(r#"{"steps":[{"type":"tick","frames":11}]}"#)
            .unwrap();
        assert!(run_loaded_scenario(&scenario, &mut view, tight).is_err());
    }

    #[test]
    fn settle_stops_once_idle() {
        let mut view = CarouselView::new(&CarouselConfig::default()).unwrap();
        assert_eq!(settle(&mut view, HeadlessRunConfig::default(), 5_000), 0);

        view.next();
        let spent = settle(&mut view, HeadlessRunConfig::default(), 5_000);
        assert!((500..5_000).contains(&spent), "{spent}");
        assert!(!view.is_animating());
    }
}
