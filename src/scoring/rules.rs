//! The fixed scoring rule table
//!
//! Every wallet starts at [`BASE_SCORE`]; each rule whose condition holds
//! adds its delta. Rules are independent and all of them are evaluated, so
//! their order only affects how reasons are listed.
//!
//! `num_repayments > total_borrows` compares a count with a summed amount.
//! That is the rule as defined and is kept literally.
//!
//! A wallet without any parsable timestamp has no last-activity age, so the
//! recent-activity rule cannot fire for it.

use crate::features::types::WalletFeatures;

/// Starting score before any rule applies
pub const BASE_SCORE: i64 = 500;

/// Lowest possible final score
pub const MIN_SCORE: i64 = 0;

/// Highest possible final score
pub const MAX_SCORE: i64 = 1000;

/// A single additive scoring rule
#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    /// Signed score adjustment when the rule fires
    pub delta: i64,
    /// Human-readable reason shown in explanations
    pub label: &'static str,
    condition: fn(&WalletFeatures) -> bool,
}

impl ScoringRule {
    /// Check whether this rule fires for a wallet
    pub fn applies(&self, features: &WalletFeatures) -> bool {
        (self.condition)(features)
    }
}

/// Scoring rules in evaluation order
pub static RULES: [ScoringRule; 6] = [
    ScoringRule {
        delta: 200,
        label: "High deposit-to-borrow ratio",
        condition: |f| f.deposit_to_borrow_ratio > 1.5,
    },
    ScoringRule {
        delta: 100,
        label: "Good repayment history",
        condition: |f| f.num_repayments as f64 > f.total_borrows,
    },
    ScoringRule {
        delta: -300,
        label: "High liquidation risk",
        condition: |f| f.liquidation_ratio > 0.5,
    },
    ScoringRule {
        delta: 50,
        label: "Long-term borrow duration",
        condition: |f| f.avg_borrow_duration > 10.0,
    },
    ScoringRule {
        delta: -100,
        label: "Potential bot activity",
        condition: |f| f.last_activity_days_ago.is_some_and(|days| days < 1.0),
    },
    ScoringRule {
        delta: 50,
        label: "Long-term activity",
        condition: |f| f.activity_span_days > 90.0,
    },
];

/// Rules that fire for a wallet, in table order
pub fn fired_rules(
    features: &WalletFeatures,
) -> impl Iterator<Item = &'static ScoringRule> + '_ {
    RULES.iter().filter(move |rule| rule.applies(features))
}

/// Base score plus every fired delta, clamped to the score range
pub fn evaluate(features: &WalletFeatures) -> u32 {
    let raw: i64 = BASE_SCORE + fired_rules(features).map(|rule| rule.delta).sum::<i64>();
    raw.clamp(MIN_SCORE, MAX_SCORE) as u32
}
