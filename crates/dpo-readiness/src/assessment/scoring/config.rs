use serde::{Deserialize, Serialize};

/// Blend weights and tier thresholds applied by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub psychometric_weight: f64,
    pub technical_weight: f64,
    pub wiscar_weight: f64,
    /// Overall score at or above which the candidate is recommended outright.
    pub recommend_threshold: f64,
    /// Overall score at or above which the candidate is recommended with preparation.
    pub consider_threshold: f64,
    /// Category score below which remediation steps are suggested for the middle tier.
    pub remediation_threshold: f64,
    pub career_match_threshold: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            psychometric_weight: 0.3,
            technical_weight: 0.3,
            wiscar_weight: 0.4,
            recommend_threshold: 80.0,
            consider_threshold: 50.0,
            remediation_threshold: 70.0,
            career_match_threshold: 60.0,
        }
    }
}
