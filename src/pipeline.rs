//! Batch scoring pipeline
//!
//! raw entries → normalized records → feature table → score table + distribution.
//! Every run recomputes everything from the full input.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::features::{compute_wallet_features, WalletFeatures};
use crate::ingest::{extract_entries, normalize};
use crate::output;
use crate::scoring::{explain_score, ScoreExplanation, ScoringEngine, ScoringOutcome};

/// Everything derived from one input set
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Normalized records that survived ingestion
    pub record_count: usize,
    pub features: Vec<WalletFeatures>,
    pub outcome: ScoringOutcome,
}

impl Analysis {
    /// Explain one wallet's score from this run's tables
    pub fn explain(&self, wallet_address: &str) -> Result<ScoreExplanation> {
        explain_score(wallet_address, &self.features, &self.outcome.scores)
    }
}

/// Read the transaction feed and return its raw entries
pub fn load_entries(path: &Path) -> Result<Vec<Value>> {
    let content =
        fs::read_to_string(path).map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
    let document: Value = serde_json::from_str(&content)?;
    extract_entries(document)
}

/// Normalize, aggregate and score raw entries without touching the filesystem
pub fn analyze(entries: &[Value]) -> Result<Analysis> {
    let records = normalize(entries)?;

    info!("Computing wallet features...");
    let features = compute_wallet_features(&records);

    info!("Calculating credit scores...");
    let outcome = ScoringEngine::new().score_wallets(&features);

    Ok(Analysis {
        record_count: records.len(),
        features,
        outcome,
    })
}

/// Load the configured input and analyze it
pub fn load_and_analyze(config: &Config) -> Result<Analysis> {
    info!("Loading transactions from {}", config.input.path.display());
    let entries = load_entries(&config.input.path)?;
    analyze(&entries)
}

/// Run the full batch: load, analyze, write the output tables, log the summary
pub fn run(config: &Config) -> Result<Analysis> {
    let analysis = load_and_analyze(config)?;

    if config.output.write_features {
        output::write_features(&config.output.features_path, &analysis.features)?;
    }
    output::write_scores(&config.output.scores_path, &analysis.outcome.scores)?;

    let distribution = &analysis.outcome.distribution;
    info!("Score Distribution:");
    for (bucket, count) in &distribution.score_distribution {
        info!("{}: {} wallets", bucket.label(), count);
    }
    info!("Risk Categories:");
    for (category, count) in &distribution.risk_categories {
        info!("{}: {} wallets", category.label(), count);
    }
    info!(
        "Scoring process completed: {} wallets from {} records",
        distribution.total_wallets, analysis.record_count
    );

    Ok(analysis)
}
