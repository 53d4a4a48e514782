//! Per-wallet behavioral features

use serde::{Deserialize, Serialize};

/// Feature vector derived from one wallet's transaction history
///
/// Field order matches the column order of the feature table output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletFeatures {
    pub wallet_address: String,
    pub total_deposits: f64,
    pub total_borrows: f64,
    pub deposit_to_borrow_ratio: f64,
    pub num_repayments: u64,
    pub num_liquidations: u64,
    /// Mean repay-minus-borrow time in days over all same-token pairs
    pub avg_borrow_duration: f64,
    pub activity_span_days: f64,
    /// Records per day of activity span (span floored at one day)
    pub transaction_frequency: f64,
    pub redeem_to_deposit_ratio: f64,
    pub liquidation_ratio: f64,
    /// Days between the wallet's latest record and the latest record overall;
    /// `None` when the wallet has no parsable timestamp
    pub last_activity_days_ago: Option<f64>,
}
