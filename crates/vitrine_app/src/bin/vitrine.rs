//! Vitrine command line
//!
//! ```bash
//! # Run a scenario and write its report
//! vitrine run scenarios/showcase.json --report target/showcase.json
//!
//! # Print the view after two clicks, in dark mode, once everything settled
//! vitrine snapshot --next 2 --dark --settle
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_app::headless_runtime::DEFAULT_MAX_FRAMES;
use vitrine_app::{run_loaded_scenario, settle, HeadlessRunConfig, HeadlessScenario};
use vitrine_carousel::{CarouselConfig, CarouselView};

/// Upper bound on logical time spent settling a snapshot
const SETTLE_LIMIT_MS: u64 = 10_000;

/// Vitrine - headless product showcase
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Carousel configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Logical milliseconds per frame
    #[arg(long, global = true, default_value = "16")]
    tick_ms: u64,

    /// Most frames a single scenario step may run
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_FRAMES)]
    max_frames: u32,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a JSON scenario
    Run {
        scenario: PathBuf,

        /// Write the report here (relative path) instead of stdout
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Probe the view every N frames
        #[arg(long, default_value = "4")]
        probe_every: u32,
    },
    /// Print the view state as JSON
    Snapshot {
        /// Click next this many times
        #[arg(long, default_value = "0")]
        next: u32,

        /// Then click previous this many times
        #[arg(long, default_value = "0")]
        prev: u32,

        /// Toggle to dark mode first
        #[arg(long)]
        dark: bool,

        /// Tick until every animation has finished
        #[arg(long)]
        settle: bool,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CarouselConfig> {
    match path {
        Some(path) => CarouselConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(CarouselConfig::default()),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(cli.config.as_deref())?;
    let runtime_cfg = HeadlessRunConfig {
        tick_ms: cli.tick_ms,
        max_frames: cli.max_frames,
        ..Default::default()
    };
    runtime_cfg.validate()?;

    match cli.command {
        Command::Run {
            scenario,
            report,
            probe_every,
        } => {
            let loaded = HeadlessScenario::from_path(&scenario)?;
            let mut view = CarouselView::new(&config)?;
            let runtime_cfg = HeadlessRunConfig {
                probe_every_frames: probe_every,
                ..runtime_cfg
            };
            let outcome = run_loaded_scenario(&loaded, &mut view, runtime_cfg)?;

            match report {
                Some(path) => {
                    outcome.report().write_to_path(&path)?;
                    info!("report written to {}", path.display());
                }
                None => outcome.report().write_to_writer(&mut std::io::stdout().lock())?,
            }

            if outcome.is_failed() {
                info!(
                    step = ?outcome.report().failed_step_index,
                    "scenario {} failed",
                    scenario.display()
                );
                return Ok(ExitCode::FAILURE);
            }
            info!("scenario {} passed", scenario.display());
        }
        Command::Snapshot {
            next,
            prev,
            dark,
            settle: settle_view,
        } => {
            let mut view = CarouselView::new(&config)?;
            if dark && !view.theme().is_dark() {
                view.toggle_theme();
            }
            for _ in 0..next {
                view.next();
            }
            for _ in 0..prev {
                view.prev();
            }
            if settle_view {
                let spent = settle(&mut view, runtime_cfg, SETTLE_LIMIT_MS);
                info!(spent_ms = spent, "settled");
            }

            let payload = serde_json::to_string_pretty(&view.snapshot())?;
            println!("{payload}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
