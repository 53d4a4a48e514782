//! Wallet Credit Score Library
//!
//! Rule-based creditworthiness scoring for lending-protocol wallets,
//! derived from their deposit/borrow/repay/redeem/liquidation history.

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod ingest;
pub mod output;
pub mod pipeline;
pub mod scoring;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
