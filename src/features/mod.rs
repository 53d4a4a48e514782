//! Wallet feature engineering

pub mod aggregator;
pub mod types;

pub use aggregator::{compute_wallet_features, RATIO_EPSILON};
pub use types::WalletFeatures;
