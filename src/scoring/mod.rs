//! Wallet credit scoring
//!
//! A fixed additive rule table turns feature vectors into scores in
//! [0, 1000]; the same table explains individual scores after the fact.

pub mod distribution;
pub mod engine;
pub mod explain;
pub mod rules;

pub use distribution::{RiskCategory, ScoreBucket, ScoreDistribution};
pub use engine::{ScoringEngine, ScoringOutcome, WalletScore};
pub use explain::{explain_score, ScoreExplanation, ScoreReason};
pub use rules::{ScoringRule, BASE_SCORE, MAX_SCORE, MIN_SCORE, RULES};
