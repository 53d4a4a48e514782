//! Record normalizer
//!
//! Converts raw transaction entries (as decoded from the feed's JSON) into
//! [`TransactionRecord`]s. Entries missing a required field are skipped;
//! unparsable amounts or timestamps are kept as `None` on an otherwise
//! valid record.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::ingest::types::{Action, TransactionRecord};

/// Amounts above this are assumed to be fixed-point (wei) encoded and are divided by it
pub const AMOUNT_SCALE: f64 = 1e18;

/// Columns every normalized record carries
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "wallet_address",
    "action",
    "amount",
    "token_symbol",
    "timestamp",
];

// Raw feed field names
const WALLET_KEY: &str = "userWallet";
const ACTION_KEY: &str = "action";
const ACTION_DATA_KEY: &str = "actionData";
const TIMESTAMP_KEY: &str = "timestamp";
const AMOUNT_KEY: &str = "amount";
const ASSET_SYMBOL_KEY: &str = "assetSymbol";

/// Pull the list of transaction entries out of a decoded document
///
/// The document is either the list itself or an object holding it under
/// some key; the first list-valued member wins.
pub fn extract_entries(document: Value) -> Result<Vec<Value>> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(map) => {
            for (key, value) in map {
                if let Value::Array(entries) = value {
                    debug!("Using transaction list under key '{}'", key);
                    return Ok(entries);
                }
            }
            debug!("Container object holds no list of transactions");
            Ok(Vec::new())
        }
        other => Err(Error::InvalidInput(format!(
            "expected a list of transactions or an object containing one, got {}",
            json_kind(&other)
        ))),
    }
}

/// Normalize a single raw entry
///
/// Returns `None` when a required field is absent or not of the expected shape.
pub fn normalize_entry(entry: &Value) -> Option<TransactionRecord> {
    let wallet_address = entry.get(WALLET_KEY)?.as_str()?;
    let action = entry.get(ACTION_KEY)?.as_str()?;
    let action_data = entry.get(ACTION_DATA_KEY)?;
    let raw_timestamp = entry.get(TIMESTAMP_KEY)?;
    let raw_amount = action_data.get(AMOUNT_KEY)?;
    let token_symbol = action_data.get(ASSET_SYMBOL_KEY)?.as_str()?;

    Some(TransactionRecord {
        wallet_address: wallet_address.to_string(),
        action: Action::parse(action),
        amount: parse_amount(raw_amount),
        token_symbol: token_symbol.to_string(),
        timestamp: parse_timestamp(raw_timestamp),
    })
}

/// Normalize every entry, dropping malformed ones
///
/// Fails when nothing usable is left, since no table can be built from it.
pub fn normalize(entries: &[Value]) -> Result<Vec<TransactionRecord>> {
    let records: Vec<TransactionRecord> = entries.iter().filter_map(normalize_entry).collect();

    let skipped = entries.len() - records.len();
    if skipped > 0 {
        debug!("Skipped {} malformed transaction entries", skipped);
    }

    if records.is_empty() {
        return Err(Error::MissingColumns {
            missing: REQUIRED_COLUMNS.to_vec(),
        });
    }

    let undefined_amounts = records.iter().filter(|r| r.amount.is_none()).count();
    let undefined_timestamps = records.iter().filter(|r| r.timestamp.is_none()).count();
    if undefined_amounts > 0 || undefined_timestamps > 0 {
        warn!(
            "Kept records with unparsable values: {} amounts, {} timestamps",
            undefined_amounts, undefined_timestamps
        );
    }

    info!(
        "Normalized {} records from {} entries ({} skipped)",
        records.len(),
        entries.len(),
        skipped
    );

    Ok(records)
}

/// Parse an amount given as a JSON number or numeric string
///
/// NaN counts as missing.
fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if amount.is_nan() {
        return None;
    }

    if amount > AMOUNT_SCALE {
        Some(amount / AMOUNT_SCALE)
    } else {
        Some(amount)
    }
}

/// Parse a Unix timestamp in seconds
///
/// Fractional numbers are truncated; strings must hold an integer.
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let secs = match value {
        Value::Number(n) => match n.as_i64() {
            Some(secs) => secs,
            None => {
                let secs = n.as_f64()?;
                if !secs.is_finite() || secs.abs() >= i64::MAX as f64 {
                    return None;
                }
                secs.trunc() as i64
            }
        },
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    DateTime::from_timestamp(secs, 0)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
