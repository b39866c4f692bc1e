// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use analysis::SpreadReport;
pub use config::ReportConfig;
pub use data::{DataLoadError, load_spread_log};
pub use domain::{Observation, SessionWindow, SpreadQuality, TradingSession};

use std::path::PathBuf;

use anyhow::{Context, Result};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tab-separated spread log (MetaTrader history export)
    #[arg(default_value = config::DEFAULT_SPREAD_LOG_PATH)]
    pub path: PathBuf,

    /// Raw spread points per pip
    #[arg(long, default_value_t = config::ANALYSIS.pip_factor)]
    pub pip_factor: f64,

    /// Base maximum spread (pips) the multipliers are applied to
    #[arg(long, default_value_t = config::ANALYSIS.base_threshold_pips)]
    pub base_threshold: f64,

    /// Candidate spread multipliers, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = config::DEFAULT_MULTIPLIERS)]
    pub multipliers: Vec<f64>,

    /// Instrument label for the report banner
    #[arg(long, default_value = config::DEFAULT_INSTRUMENT)]
    pub instrument: String,
}

impl Cli {
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            instrument: self.instrument.clone(),
            pip_factor: self.pip_factor,
            base_threshold_pips: self.base_threshold,
            multipliers: self.multipliers.clone(),
            ..ReportConfig::default()
        }
    }
}

/// Load, analyse and render. Returns the report text; printing is left to the caller.
pub fn run_report(args: &Cli) -> Result<String> {
    let config = args.report_config();
    anyhow::ensure!(
        config.pip_factor > 0.0,
        "Pip factor must be positive, got {}",
        config.pip_factor
    );

    log::info!("Loading spread log from {}", args.path.display());
    let observations = load_spread_log(&args.path, config.pip_factor)
        .with_context(|| format!("Failed to load spread data from {}", args.path.display()))?;
    log::info!("Loaded {} observations", observations.len());

    let report = SpreadReport::generate(&observations, &config)
        .context("Failed to compute spread statistics")?;

    Ok(render::render_report(&report, &args.path))
}
