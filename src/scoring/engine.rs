//! Scoring engine
//!
//! Applies the rule table to every wallet's feature vector and summarizes
//! the resulting score table.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::features::types::WalletFeatures;
use crate::scoring::distribution::{RiskCategory, ScoreBucket, ScoreDistribution};
use crate::scoring::rules;

/// Final credit score for one wallet, always within [0, 1000]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletScore {
    pub wallet_address: String,
    pub score: u32,
}

impl WalletScore {
    pub fn bucket(&self) -> ScoreBucket {
        ScoreBucket::for_score(self.score)
    }

    pub fn risk_category(&self) -> RiskCategory {
        RiskCategory::for_score(self.score)
    }
}

/// Score table plus its distribution summary
#[derive(Debug, Clone)]
pub struct ScoringOutcome {
    pub scores: Vec<WalletScore>,
    pub distribution: ScoreDistribution,
}

/// Rule-based wallet scorer
///
/// Total over any feature table: there are no error conditions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a single wallet
    pub fn score_wallet(&self, features: &WalletFeatures) -> WalletScore {
        WalletScore {
            wallet_address: features.wallet_address.clone(),
            score: rules::evaluate(features),
        }
    }

    /// Score every wallet, preserving the feature table's row order
    pub fn score_wallets(&self, features: &[WalletFeatures]) -> ScoringOutcome {
        let scores: Vec<WalletScore> = features
            .iter()
            .map(|f| {
                let score = self.score_wallet(f);
                debug!(wallet = %score.wallet_address, score = score.score, "Scored wallet");
                score
            })
            .collect();

        let distribution = ScoreDistribution::from_scores(&scores);
        info!("Scored {} wallets", scores.len());

        ScoringOutcome {
            scores,
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Features that trigger no rule at all
    fn neutral(wallet: &str) -> WalletFeatures {
        WalletFeatures {
            wallet_address: wallet.to_string(),
            total_deposits: 100.0,
            total_borrows: 100.0,
            deposit_to_borrow_ratio: 1.0,
            num_repayments: 0,
            num_liquidations: 0,
            avg_borrow_duration: 0.0,
            activity_span_days: 10.0,
            transaction_frequency: 1.0,
            redeem_to_deposit_ratio: 0.0,
            liquidation_ratio: 0.0,
            last_activity_days_ago: Some(5.0),
        }
    }

    #[test]
    fn test_neutral_wallet_keeps_base_score() {
        let score = ScoringEngine::new().score_wallet(&neutral("w"));
        assert_eq!(score.score, 500);
        assert_eq!(score.risk_category(), RiskCategory::MediumRisk);
    }

    #[test]
    fn test_healthy_wallet_scenario() {
        let features = WalletFeatures {
            total_deposits: 300.0,
            total_borrows: 100.0,
            deposit_to_borrow_ratio: 300.0 / (100.0 + 1e-6),
            num_repayments: 2,
            avg_borrow_duration: 15.0,
            activity_span_days: 120.0,
            last_activity_days_ago: Some(5.0),
            ..neutral("healthy")
        };
        let score = ScoringEngine::new().score_wallet(&features);
        assert_eq!(score.score, 800);
        assert_eq!(score.bucket(), ScoreBucket::From800To1000);
        assert_eq!(score.risk_category(), RiskCategory::LowRisk);
    }

    #[test]
    fn test_liquidated_recent_wallet_scenario() {
        let features = WalletFeatures {
            num_liquidations: 3,
            liquidation_ratio: 3.0 / (4.0 + 1e-6),
            last_activity_days_ago: Some(0.5),
            ..neutral("risky")
        };
        let score = ScoringEngine::new().score_wallet(&features);
        assert_eq!(score.score, 100);
        assert_eq!(score.bucket(), ScoreBucket::From0To200);
        assert_eq!(score.risk_category(), RiskCategory::HighRisk);
    }

    #[test]
    fn test_repayment_count_compared_against_borrow_amount() {
        // 3 repayments against 2.5 units borrowed fires the rule
        let features = WalletFeatures {
            total_borrows: 2.5,
            deposit_to_borrow_ratio: 1.0,
            num_repayments: 3,
            ..neutral("w")
        };
        assert_eq!(ScoringEngine::new().score_wallet(&features).score, 600);

        // The same repayments against 1000 units borrowed do not
        let features = WalletFeatures {
            total_borrows: 1000.0,
            num_repayments: 3,
            ..neutral("w")
        };
        assert_eq!(ScoringEngine::new().score_wallet(&features).score, 500);
    }

    #[test]
    fn test_score_extremes_stay_in_range() {
        let best = WalletFeatures {
            total_borrows: 0.0,
            deposit_to_borrow_ratio: 1e8,
            num_repayments: 1,
            avg_borrow_duration: 30.0,
            activity_span_days: 365.0,
            ..neutral("best")
        };
        let worst = WalletFeatures {
            liquidation_ratio: 1.0,
            last_activity_days_ago: Some(0.0),
            ..neutral("worst")
        };
        let outcome = ScoringEngine::new().score_wallets(&[best, worst]);
        assert_eq!(outcome.scores[0].score, 900);
        assert_eq!(outcome.scores[1].score, 100);
        assert!(outcome.scores.iter().all(|s| s.score <= 1000));
    }

    #[test]
    fn test_score_wallets_keeps_order_and_summarizes() {
        let features = vec![neutral("b"), neutral("a")];
        let outcome = ScoringEngine::new().score_wallets(&features);
        assert_eq!(outcome.scores[0].wallet_address, "b");
        assert_eq!(outcome.distribution.total_wallets, 2);
        assert_eq!(outcome.distribution.risk_count(RiskCategory::MediumRisk), 2);
    }
}
