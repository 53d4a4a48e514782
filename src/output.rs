//! CSV output for the feature and score tables

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};
use crate::features::types::WalletFeatures;
use crate::scoring::engine::WalletScore;

/// Write the feature table, one row per wallet
pub fn write_features(path: &Path, features: &[WalletFeatures]) -> Result<()> {
    write_csv(path, features)?;
    info!("Wallet features saved to {}", path.display());
    Ok(())
}

/// Write the score table as `wallet_address,score`
pub fn write_scores(path: &Path, scores: &[WalletScore]) -> Result<()> {
    write_csv(path, scores)?;
    info!("Scores saved to {}", path.display());
    Ok(())
}

/// Serialize rows to a CSV file with a header taken from the row's field names
fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Io(format!("{}: {}", parent.display(), e)))?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
    Ok(())
}
