//! Feature Aggregator
//!
//! Groups normalized records by wallet and derives each wallet's feature
//! vector in two passes:
//! - a per-record pass filling one accumulator per wallet
//! - a per-wallet pass turning accumulators into [`WalletFeatures`]
//!
//! Borrow/repay pairing is a cross join of every borrow with every repay of
//! the same token within a wallet, not a chronological match. A repay that
//! precedes an unrelated borrow therefore contributes a negative duration.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::features::types::WalletFeatures;
use crate::ingest::types::{Action, TransactionRecord};

/// Added to ratio denominators so a missing activity kind never divides by zero
pub const RATIO_EPSILON: f64 = 1e-6;

const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

/// Running totals for one wallet
#[derive(Debug, Default)]
struct WalletAccumulator<'a> {
    record_count: u64,

    // Amount sums and defined-amount counts per action
    deposit_sum: f64,
    borrow_sum: f64,
    deposit_count: u64,
    borrow_count: u64,
    repay_count: u64,
    redeem_count: u64,
    liquidation_count: u64,

    first_seen: Option<DateTime<Utc>>,
    last_seen: Option<DateTime<Utc>>,

    // Event times keyed by token, for borrow/repay pairing
    borrow_times: BTreeMap<&'a str, Vec<Option<DateTime<Utc>>>>,
    repay_times: BTreeMap<&'a str, Vec<Option<DateTime<Utc>>>>,
}

impl<'a> WalletAccumulator<'a> {
    fn add(&mut self, record: &'a TransactionRecord) {
        self.record_count += 1;

        if let Some(ts) = record.timestamp {
            self.first_seen = Some(self.first_seen.map_or(ts, |first| first.min(ts)));
            self.last_seen = Some(self.last_seen.map_or(ts, |last| last.max(ts)));
        }

        let token = record.token_symbol.as_str();
        match record.action {
            Action::Borrow => self
                .borrow_times
                .entry(token)
                .or_default()
                .push(record.timestamp),
            Action::Repay => self
                .repay_times
                .entry(token)
                .or_default()
                .push(record.timestamp),
            _ => {}
        }

        // Sums and counts only see records with a defined amount
        let Some(amount) = record.amount else {
            return;
        };
        match record.action {
            Action::Deposit => {
                self.deposit_sum += amount;
                self.deposit_count += 1;
            }
            Action::Borrow => {
                self.borrow_sum += amount;
                self.borrow_count += 1;
            }
            Action::Repay => self.repay_count += 1,
            Action::RedeemUnderlying => self.redeem_count += 1,
            Action::LiquidationCall => self.liquidation_count += 1,
            Action::Other(_) => {}
        }
    }

    /// Mean borrow duration over all same-token borrow x repay pairs, 0 without pairs
    fn avg_borrow_duration(&self) -> f64 {
        let mut total_days = 0.0;
        let mut pairs = 0u64;

        for (token, borrows) in &self.borrow_times {
            let Some(repays) = self.repay_times.get(token) else {
                continue;
            };
            for borrowed_at in borrows.iter().flatten() {
                for repaid_at in repays.iter().flatten() {
                    total_days += days_between(*borrowed_at, *repaid_at);
                    pairs += 1;
                }
            }
        }

        if pairs == 0 {
            0.0
        } else {
            total_days / pairs as f64
        }
    }

    fn activity_span_days(&self) -> f64 {
        match (self.first_seen, self.last_seen) {
            (Some(first), Some(last)) => days_between(first, last),
            _ => 0.0,
        }
    }

    fn finish(
        &self,
        wallet_address: &str,
        latest_overall: Option<DateTime<Utc>>,
    ) -> WalletFeatures {
        let activity_span_days = self.activity_span_days();
        let last_activity_days_ago = match (latest_overall, self.last_seen) {
            (Some(latest), Some(last)) => Some(days_between(last, latest)),
            _ => None,
        };

        WalletFeatures {
            wallet_address: wallet_address.to_string(),
            total_deposits: self.deposit_sum,
            total_borrows: self.borrow_sum,
            deposit_to_borrow_ratio: self.deposit_sum / (self.borrow_sum + RATIO_EPSILON),
            num_repayments: self.repay_count,
            num_liquidations: self.liquidation_count,
            avg_borrow_duration: self.avg_borrow_duration(),
            activity_span_days,
            transaction_frequency: self.record_count as f64 / activity_span_days.max(1.0),
            redeem_to_deposit_ratio: self.redeem_count as f64
                / (self.deposit_count as f64 + RATIO_EPSILON),
            liquidation_ratio: self.liquidation_count as f64
                / (self.borrow_count as f64 + RATIO_EPSILON),
            last_activity_days_ago,
        }
    }
}

/// Fractional days from `from` to `to` (negative if `to` is earlier)
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

/// Derive one feature row per wallet, ordered by wallet address
///
/// Everything is recomputed from `records`; there is no incremental state.
pub fn compute_wallet_features(records: &[TransactionRecord]) -> Vec<WalletFeatures> {
    let mut wallets: BTreeMap<&str, WalletAccumulator> = BTreeMap::new();
    for record in records {
        wallets
            .entry(record.wallet_address.as_str())
            .or_default()
            .add(record);
    }

    let latest_overall = records.iter().filter_map(|r| r.timestamp).max();

    let features: Vec<WalletFeatures> = wallets
        .iter()
        .map(|(wallet, acc)| {
            let row = acc.finish(wallet, latest_overall);
            debug!(
                wallet = %row.wallet_address,
                records = acc.record_count,
                span_days = row.activity_span_days,
                "Computed wallet features"
            );
            row
        })
        .collect();

    info!(
        "Computed features for {} wallets from {} records",
        features.len(),
        records.len()
    );

    features
}
