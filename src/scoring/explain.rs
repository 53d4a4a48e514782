//! Reason explainer
//!
//! Reconstructs which rules produced a wallet's score.

use std::fmt;

use crate::error::{Error, Result};
use crate::features::types::WalletFeatures;
use crate::scoring::engine::WalletScore;
use crate::scoring::rules;

/// One fired rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReason {
    pub delta: i64,
    pub label: &'static str,
}

impl fmt::Display for ScoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}  {}", self.delta, self.label)
    }
}

/// Audit trail for a single wallet's score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreExplanation {
    pub wallet_address: String,
    pub final_score: u32,
    pub reasons: Vec<ScoreReason>,
}

impl fmt::Display for ScoreExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wallet: {}", self.wallet_address)?;
        writeln!(f, "Score:  {}", self.final_score)?;
        if self.reasons.is_empty() {
            write!(f, "No rules fired (base score)")
        } else {
            write!(f, "Reasons:")?;
            for reason in &self.reasons {
                write!(f, "\n  {}", reason)?;
            }
            Ok(())
        }
    }
}

/// Explain a wallet's score from the feature and score tables
///
/// Fails with [`Error::WalletNotFound`] if either table has no row for the wallet.
pub fn explain_score(
    wallet_address: &str,
    features: &[WalletFeatures],
    scores: &[WalletScore],
) -> Result<ScoreExplanation> {
    let wallet_features = features
        .iter()
        .find(|f| f.wallet_address == wallet_address)
        .ok_or_else(|| Error::WalletNotFound(wallet_address.to_string()))?;
    let wallet_score = scores
        .iter()
        .find(|s| s.wallet_address == wallet_address)
        .ok_or_else(|| Error::WalletNotFound(wallet_address.to_string()))?;

    let reasons = rules::fired_rules(wallet_features)
        .map(|rule| ScoreReason {
            delta: rule.delta,
            label: rule.label,
        })
        .collect();

    Ok(ScoreExplanation {
        wallet_address: wallet_address.to_string(),
        final_score: wallet_score.score,
        reasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::engine::ScoringEngine;

    fn features(wallet: &str) -> WalletFeatures {
        WalletFeatures {
            wallet_address: wallet.to_string(),
            total_deposits: 300.0,
            total_borrows: 100.0,
            deposit_to_borrow_ratio: 3.0,
            num_repayments: 2,
            num_liquidations: 0,
            avg_borrow_duration: 15.0,
            activity_span_days: 120.0,
            transaction_frequency: 0.1,
            redeem_to_deposit_ratio: 0.0,
            liquidation_ratio: 0.0,
            last_activity_days_ago: Some(5.0),
        }
    }

    #[test]
    fn test_explain_lists_fired_rules_in_order() {
        let table = vec![features("w1")];
        let scores = ScoringEngine::new().score_wallets(&table).scores;

        let explanation = explain_score("w1", &table, &scores).unwrap();
        assert_eq!(explanation.final_score, 800);
        let labels: Vec<&str> = explanation.reasons.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "High deposit-to-borrow ratio",
                "Long-term borrow duration",
                "Long-term activity"
            ]
        );
        let total: i64 = explanation.reasons.iter().map(|r| r.delta).sum();
        assert_eq!(500 + total, explanation.final_score as i64);
    }

    #[test]
    fn test_reason_display_is_signed() {
        let reason = ScoreReason {
            delta: -300,
            label: "High liquidation risk",
        };
        assert_eq!(reason.to_string(), "-300  High liquidation risk");
        let reason = ScoreReason {
            delta: 200,
            label: "High deposit-to-borrow ratio",
        };
        assert_eq!(reason.to_string(), "+200  High deposit-to-borrow ratio");
    }

    #[test]
    fn test_unknown_wallet_is_not_found() {
        let table = vec![features("w1")];
        let scores = ScoringEngine::new().score_wallets(&table).scores;
        assert!(matches!(
            explain_score("nobody", &table, &scores),
            Err(Error::WalletNotFound(_))
        ));
    }

    #[test]
    fn test_wallet_missing_from_score_table_is_not_found() {
        let table = vec![features("w1")];
        assert!(matches!(
            explain_score("w1", &table, &[]),
            Err(Error::WalletNotFound(_))
        ));
    }
}
