//! Score distribution summary
//!
//! Counts wallets per fixed-width score bucket and per risk category.

use crate::scoring::engine::WalletScore;

/// Score range of width 200; the top bucket includes 1000
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBucket {
    From0To200,
    From200To400,
    From400To600,
    From600To800,
    From800To1000,
}

impl ScoreBucket {
    /// All buckets, lowest first
    pub const ALL: [ScoreBucket; 5] = [
        ScoreBucket::From0To200,
        ScoreBucket::From200To400,
        ScoreBucket::From400To600,
        ScoreBucket::From600To800,
        ScoreBucket::From800To1000,
    ];

    pub fn for_score(score: u32) -> Self {
        match score {
            0..=199 => ScoreBucket::From0To200,
            200..=399 => ScoreBucket::From200To400,
            400..=599 => ScoreBucket::From400To600,
            600..=799 => ScoreBucket::From600To800,
            _ => ScoreBucket::From800To1000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBucket::From0To200 => "0-200",
            ScoreBucket::From200To400 => "200-400",
            ScoreBucket::From400To600 => "400-600",
            ScoreBucket::From600To800 => "600-800",
            ScoreBucket::From800To1000 => "800-1000",
        }
    }
}

/// Coarse credit risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskCategory {
    /// Score below 400
    HighRisk,
    /// Score in [400, 600)
    MediumRisk,
    /// Score 600 and above
    LowRisk,
}

impl RiskCategory {
    /// All categories, riskiest first
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::HighRisk,
        RiskCategory::MediumRisk,
        RiskCategory::LowRisk,
    ];

    pub fn for_score(score: u32) -> Self {
        if score < 400 {
            RiskCategory::HighRisk
        } else if score < 600 {
            RiskCategory::MediumRisk
        } else {
            RiskCategory::LowRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::HighRisk => "high_risk",
            RiskCategory::MediumRisk => "medium_risk",
            RiskCategory::LowRisk => "low_risk",
        }
    }
}

/// Wallet counts per bucket and per risk category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreDistribution {
    /// Counts for every bucket, in [`ScoreBucket::ALL`] order
    pub score_distribution: Vec<(ScoreBucket, usize)>,
    /// Counts for every category, in [`RiskCategory::ALL`] order
    pub risk_categories: Vec<(RiskCategory, usize)>,
    pub total_wallets: usize,
}

impl ScoreDistribution {
    /// Summarize a score table
    pub fn from_scores(scores: &[WalletScore]) -> Self {
        let mut bucket_counts = [0usize; 5];
        let mut risk_counts = [0usize; 3];

        for score in scores {
            let bucket = ScoreBucket::for_score(score.score);
            let risk = RiskCategory::for_score(score.score);
            if let Some(i) = ScoreBucket::ALL.iter().position(|b| *b == bucket) {
                bucket_counts[i] += 1;
            }
            if let Some(i) = RiskCategory::ALL.iter().position(|r| *r == risk) {
                risk_counts[i] += 1;
            }
        }

        Self {
            score_distribution: ScoreBucket::ALL.into_iter().zip(bucket_counts).collect(),
            risk_categories: RiskCategory::ALL.into_iter().zip(risk_counts).collect(),
            total_wallets: scores.len(),
        }
    }

    /// Number of wallets in a bucket
    pub fn bucket_count(&self, bucket: ScoreBucket) -> usize {
        self.score_distribution
            .iter()
            .find(|(b, _)| *b == bucket)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Number of wallets in a risk category
    pub fn risk_count(&self, category: RiskCategory) -> usize {
        self.risk_categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Human-readable multi-line summary
    pub fn summary(&self) -> String {
        let mut lines = vec!["Score Distribution:".to_string()];
        for (bucket, count) in &self.score_distribution {
            lines.push(format!("  {}: {} wallets", bucket.label(), count));
        }
        lines.push("Risk Categories:".to_string());
        for (category, count) in &self.risk_categories {
            lines.push(format!("  {}: {} wallets", category.label(), count));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[u32]) -> Vec<WalletScore> {
        values
            .iter()
            .enumerate()
            .map(|(i, score)| WalletScore {
                wallet_address: format!("w{}", i),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(ScoreBucket::for_score(0), ScoreBucket::From0To200);
        assert_eq!(ScoreBucket::for_score(199), ScoreBucket::From0To200);
        assert_eq!(ScoreBucket::for_score(200), ScoreBucket::From200To400);
        assert_eq!(ScoreBucket::for_score(799), ScoreBucket::From600To800);
        assert_eq!(ScoreBucket::for_score(800), ScoreBucket::From800To1000);
        assert_eq!(ScoreBucket::for_score(1000), ScoreBucket::From800To1000);
    }

    #[test]
    fn test_risk_boundaries() {
        assert_eq!(RiskCategory::for_score(399), RiskCategory::HighRisk);
        assert_eq!(RiskCategory::for_score(400), RiskCategory::MediumRisk);
        assert_eq!(RiskCategory::for_score(599), RiskCategory::MediumRisk);
        assert_eq!(RiskCategory::for_score(600), RiskCategory::LowRisk);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let table = scores(&[0, 100, 250, 400, 450, 500, 650, 800, 1000]);
        let dist = ScoreDistribution::from_scores(&table);

        let bucket_total: usize = dist.score_distribution.iter().map(|(_, c)| c).sum();
        let risk_total: usize = dist.risk_categories.iter().map(|(_, c)| c).sum();
        assert_eq!(bucket_total, table.len());
        assert_eq!(risk_total, table.len());
        assert_eq!(dist.total_wallets, 9);

        assert_eq!(dist.bucket_count(ScoreBucket::From0To200), 2);
        assert_eq!(dist.bucket_count(ScoreBucket::From400To600), 3);
        assert_eq!(dist.bucket_count(ScoreBucket::From800To1000), 2);
        assert_eq!(dist.risk_count(RiskCategory::HighRisk), 3);
        assert_eq!(dist.risk_count(RiskCategory::LowRisk), 3);
    }

    #[test]
    fn test_empty_table_reports_zero_everywhere() {
        let dist = ScoreDistribution::from_scores(&[]);
        assert_eq!(dist.score_distribution.len(), 5);
        assert!(dist.score_distribution.iter().all(|(_, c)| *c == 0));
        assert!(dist.summary().contains("800-1000: 0 wallets"));
    }
}
