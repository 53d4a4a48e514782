//! CLI command implementations

use anyhow::Result;
use tracing::{error, info};

use crate::config::Config;
use crate::pipeline;

/// Score every wallet in the configured input and write the output tables
pub fn score(config: &Config) -> Result<()> {
    info!("Starting wallet credit scoring...");

    match pipeline::run(config) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Error in scoring process ({}): {}", e.category(), e);
            Err(e.into())
        }
    }
}

/// Print which rules produced one wallet's score
pub fn explain(config: &Config, wallet: &str) -> Result<()> {
    let analysis = pipeline::load_and_analyze(config)?;

    match analysis.explain(wallet) {
        Ok(explanation) => {
            println!("{}", explanation);
            Ok(())
        }
        Err(e) => {
            error!("Cannot explain wallet {} ({}): {}", wallet, e.category(), e);
            Err(e.into())
        }
    }
}

/// Show the effective configuration
pub fn show_config(config: &Config) -> Result<()> {
    println!("{}", config.summary());
    Ok(())
}
