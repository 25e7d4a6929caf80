use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::Recommendation;

/// Identifier attached to a generated results record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// `user-<unix millis>` for anonymous sessions.
    pub fn anonymous(at: DateTime<Utc>) -> Self {
        Self(format!("user-{}", at.timestamp_millis()))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The six WISCAR readiness dimensions, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WiscarVector {
    pub will: f64,
    pub interest: f64,
    pub skill: f64,
    pub cognitive_readiness: f64,
    pub ability_to_learn: f64,
    pub real_world_alignment: f64,
}

impl WiscarVector {
    pub fn dimensions(&self) -> [(&'static str, f64); 6] {
        [
            ("Will", self.will),
            ("Interest", self.interest),
            ("Skill", self.skill),
            ("Cognitive Readiness", self.cognitive_readiness),
            ("Ability to Learn", self.ability_to_learn),
            ("Real-World Alignment", self.real_world_alignment),
        ]
    }

    pub fn mean(&self) -> f64 {
        let dimensions = self.dimensions();
        let total: f64 = dimensions.iter().map(|(_, score)| score).sum();
        total / dimensions.len() as f64
    }
}

/// Final report for a completed (or previewed) response log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsRecord {
    pub user_id: UserId,
    pub psychometric_score: f64,
    pub technical_score: f64,
    pub wiscar: WiscarVector,
    pub overall_score: f64,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub next_steps: Vec<String>,
    pub career_matches: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl ResultsRecord {
    pub fn summary(&self) -> String {
        format!(
            "{} ({:.0}% overall match)",
            self.recommendation.headline(),
            self.confidence
        )
    }
}
