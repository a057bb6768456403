//! `lanecheck` - Runs the cross-lane oracle suite against a backend.
//!
//! Every catalog case runs under every configured write control. Each
//! case/control pair prints one line; failing pairs list their mismatching
//! lanes.
//!
//! **Usage:**
//! ```text
//! lanecheck [--config <path>] [--backend reference|dpp] [--wave 32|64]
//!           [--previous <n>] [--element u32|i32|u64|i64|f32|f64]
//!           [--exhaustive] [--json] [--log <directives>]
//! ```
//!
//! Exits non-zero if any lane mismatched.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lanecheck::config::SuiteConfig;
use lanecheck::dpp::DppUnit;
use lanecheck::suite::{catalog, Suite, SuiteReport};
use lanecheck::{ElementKind, ReferenceUnit, WaveSize};
use tracing_subscriber::EnvFilter;

/// Primitive the suite runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Software gather unit, every family.
    Reference,
    /// DPP hardware model, single-control shapes only.
    Dpp,
}

impl Backend {
    fn name(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Dpp => "dpp",
        }
    }
}

/// Run the cross-lane oracle suite.
#[derive(Parser)]
#[command(
    name = "lanecheck",
    about = "Check cross-lane primitives lane by lane against the oracle"
)]
struct Args {
    /// Suite configuration file (TOML). Defaults are used when absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend to check.
    #[arg(long, value_enum, default_value_t = Backend::Reference)]
    backend: Backend,

    /// Wavefront width in lanes (32 or 64). Overrides the config file.
    #[arg(long)]
    wave: Option<u32>,

    /// Sentinel for the destination's previous value. Overrides the config file.
    #[arg(long)]
    previous: Option<u32>,

    /// Lane element type. Overrides the config file.
    #[arg(long)]
    element: Option<ElementKind>,

    /// Run all 512 write controls.
    #[arg(long)]
    exhaustive: bool,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Tracing directives (e.g. `lanecheck=debug`). Falls back to `RUST_LOG`,
    /// then `warn`.
    #[arg(long)]
    log: Option<String>,
}

fn init_tracing(directives: Option<&str>) -> Result<()> {
    let filter = match directives {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid --log directives `{directives}`"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

fn load_config(args: &Args) -> Result<SuiteConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SuiteConfig::from_toml_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SuiteConfig::default(),
    };

    if let Some(lanes) = args.wave {
        config.wave = WaveSize::try_from(lanes).context("--wave")?;
    }
    if let Some(previous) = args.previous {
        config.previous = previous;
    }
    if let Some(element) = args.element {
        config.element = element;
    }
    if args.exhaustive {
        config.exhaustive = true;
    }
    config.validate().context("suite configuration")?;
    Ok(config)
}

fn print_text(report: &SuiteReport) {
    println!("lanecheck Report");
    println!("================");
    println!(
        "backend: {}  wave: {}  element: {}  previous: {}",
        report.backend, report.wave, report.element, report.previous
    );
    println!();

    for outcome in &report.outcomes {
        let status = if outcome.is_failure() { "FAIL" } else { "PASS" };
        println!("[{status}] {} ({})", outcome.case, outcome.control);
        for failure in &outcome.failures {
            println!(
                "       lane {}: expected {}, observed {}",
                failure.lane, failure.expected, failure.observed
            );
        }
    }
    for case in &report.skipped {
        println!("[SKIP] {case} (group wider than {})", report.wave);
    }

    println!();
    println!(
        "Summary: {} passed, {} failed, {} skipped, {} mismatched lanes",
        report.pass_count(),
        report.failure_count(),
        report.skipped.len(),
        report.mismatched_lanes()
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref())?;

    let config = load_config(&args)?;
    let backend = args.backend;
    tracing::info!(backend = backend.name(), wave = %config.wave, "starting suite");

    let report = match backend {
        Backend::Reference => Suite::new(catalog::reference(), config)
            .run(&ReferenceUnit::new(), backend.name())?,
        Backend::Dpp => Suite::new(catalog::dpp(), config).run(&DppUnit::new(), backend.name())?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }

    if !report.all_passed() {
        eprintln!(
            "lanecheck FAILED: {} case(s) mismatched on {} lane(s).",
            report.failure_count(),
            report.mismatched_lanes()
        );
        process::exit(1);
    }

    if !args.json {
        println!("lanecheck PASSED.");
    }
    Ok(())
}
