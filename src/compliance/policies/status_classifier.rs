use crate::compliance::domain::{ComplianceStatus, SeverityTier};

/// Score at or above which an item is Healthy
pub const HEALTHY_THRESHOLD: f64 = 85.0;

/// Score at or above which an item is at least Warning
pub const WARNING_THRESHOLD: f64 = 70.0;

/// StatusClassifier policy for deriving severity from a compliance score
///
/// Tiers:
/// 1. `score >= 85` → Healthy
/// 2. `70 <= score < 85` → Warning
/// 3. `score < 70` → Critical
///
/// Any numeric input is accepted; out-of-range values fall through the same
/// comparisons. The tier is independent of the stored status label.
pub struct StatusClassifier;

impl StatusClassifier {
    pub fn classify(score: f64) -> SeverityTier {
        if score >= HEALTHY_THRESHOLD {
            SeverityTier::Healthy
        } else if score >= WARNING_THRESHOLD {
            SeverityTier::Warning
        } else {
            // NaN also lands here
            SeverityTier::Critical
        }
    }

    /// The status label a writer would normally pair with a tier
    pub fn expected_status(tier: SeverityTier) -> ComplianceStatus {
        match tier {
            SeverityTier::Healthy => ComplianceStatus::Passing,
            SeverityTier::Warning => ComplianceStatus::Warning,
            SeverityTier::Critical => ComplianceStatus::Failing,
        }
    }

    /// Whether a stored label agrees with the tier of its score.
    ///
    /// Used to warn about drift only; status is never rewritten from score.
    pub fn is_consistent(score: f64, status: ComplianceStatus) -> bool {
        Self::expected_status(Self::classify(score)) == status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(StatusClassifier::classify(85.0), SeverityTier::Healthy);
        assert_eq!(StatusClassifier::classify(84.999), SeverityTier::Warning);
        assert_eq!(StatusClassifier::classify(70.0), SeverityTier::Warning);
        assert_eq!(StatusClassifier::classify(69.999), SeverityTier::Critical);
    }

    #[test]
    fn test_classify_range_extremes() {
        assert_eq!(StatusClassifier::classify(100.0), SeverityTier::Healthy);
        assert_eq!(StatusClassifier::classify(0.0), SeverityTier::Critical);
    }

    #[test]
    fn test_classify_out_of_range_values() {
        assert_eq!(StatusClassifier::classify(250.0), SeverityTier::Healthy);
        assert_eq!(StatusClassifier::classify(-5.0), SeverityTier::Critical);
        assert_eq!(
            StatusClassifier::classify(f64::INFINITY),
            SeverityTier::Healthy
        );
        assert_eq!(
            StatusClassifier::classify(f64::NEG_INFINITY),
            SeverityTier::Critical
        );
        assert_eq!(StatusClassifier::classify(f64::NAN), SeverityTier::Critical);
    }

    #[test]
    fn test_classify_tiers_partition_a_score_sweep() {
        for step in 0..=1000 {
            let score = step as f64 / 10.0;
            let tier = StatusClassifier::classify(score);
            let expected = if score >= 85.0 {
                SeverityTier::Healthy
            } else if score >= 70.0 {
                SeverityTier::Warning
            } else {
                SeverityTier::Critical
            };
            assert_eq!(tier, expected, "score {}", score);
        }
    }

    #[test]
    fn test_expected_status() {
        assert_eq!(
            StatusClassifier::expected_status(SeverityTier::Healthy),
            ComplianceStatus::Passing
        );
        assert_eq!(
            StatusClassifier::expected_status(SeverityTier::Warning),
            ComplianceStatus::Warning
        );
        assert_eq!(
            StatusClassifier::expected_status(SeverityTier::Critical),
            ComplianceStatus::Failing
        );
    }

    #[test]
    fn test_is_consistent() {
        assert!(StatusClassifier::is_consistent(92.0, ComplianceStatus::Passing));
        assert!(StatusClassifier::is_consistent(60.0, ComplianceStatus::Failing));
        assert!(!StatusClassifier::is_consistent(60.0, ComplianceStatus::Passing));
        assert!(!StatusClassifier::is_consistent(75.0, ComplianceStatus::Failing));
    }
}
