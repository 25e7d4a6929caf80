mod aggregate;
mod config;
mod policy;
mod rules;

pub use aggregate::category_score;
pub use config::ScoringPolicy;
pub use policy::Recommendation;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::domain::{QuestionCategory, QuestionId, QuestionKind};
use super::catalog::QuestionCatalog;
use super::results::{ResultsRecord, UserId};
use aggregate::{category_subset, wiscar_vector, ScoredPair};

/// One scored answer. `score` already includes the question weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: QuestionId,
    pub answer: String,
    pub score: f64,
}

/// Stateless engine that applies the scoring policy to responses against a catalog.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<QuestionCatalog>,
    policy: ScoringPolicy,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<QuestionCatalog>, policy: ScoringPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Scores a raw answer for `question_id` and applies the question weight.
    pub fn score_response(
        &self,
        question_id: &QuestionId,
        answer: &str,
    ) -> Result<Response, ScoringError> {
        let question = self
            .catalog
            .find(question_id)
            .ok_or_else(|| ScoringError::UnknownQuestion(question_id.clone()))?;

        let raw = rules::raw_score(question, answer)?;
        let score = raw * question.weight;
        debug!(question = %question_id, raw, score, "scored response");

        Ok(Response {
            question_id: question_id.clone(),
            answer: answer.to_string(),
            score,
        })
    }

    /// Aggregates a response log into a results record. Every response must reference a
    /// catalog question; the log does not need to be complete.
    pub fn evaluate(
        &self,
        responses: &[Response],
        user_id: UserId,
        generated_at: DateTime<Utc>,
    ) -> Result<ResultsRecord, ScoringError> {
        let pairs = responses
            .iter()
            .map(|response| {
                self.catalog
                    .find(&response.question_id)
                    .map(|question| (question, response))
                    .ok_or_else(|| ScoringError::UnknownQuestion(response.question_id.clone()))
            })
            .collect::<Result<Vec<ScoredPair<'_>>, _>>()?;

        let psychometric_score = category_score(
            category_subset(&pairs, QuestionCategory::Psychometric).map(|(_, response)| response),
        );
        let technical_score = category_score(
            category_subset(&pairs, QuestionCategory::Technical).map(|(_, response)| response),
        );
        let wiscar = wiscar_vector(&pairs, technical_score);

        let overall_score = (psychometric_score * self.policy.psychometric_weight
            + technical_score * self.policy.technical_weight
            + wiscar.mean() * self.policy.wiscar_weight)
            .clamp(0.0, 100.0);

        let recommendation = policy::recommend(overall_score, &self.policy);
        let next_steps = policy::next_steps(
            recommendation,
            psychometric_score,
            technical_score,
            &self.policy,
        );
        let career_matches = policy::career_matches(
            overall_score,
            psychometric_score,
            technical_score,
            &self.policy,
        );

        info!(
            user = %user_id,
            responses = responses.len(),
            overall_score,
            recommendation = recommendation.label(),
            "assessment evaluated"
        );

        Ok(ResultsRecord {
            user_id,
            psychometric_score,
            technical_score,
            wiscar,
            overall_score,
            recommendation,
            // No separate uncertainty model exists yet; confidence mirrors the overall score.
            confidence: overall_score,
            next_steps,
            career_matches,
            generated_at,
        })
    }
}

/// Raised when an answer cannot be scored.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("question '{0}' is not part of the catalog")]
    UnknownQuestion(QuestionId),
    #[error("answer '{answer}' for question '{question_id}' is not a selection index")]
    InvalidAnswer {
        question_id: QuestionId,
        answer: String,
    },
    #[error(
        "selection {index} for question '{question_id}' is outside the {available} available choices"
    )]
    SelectionOutOfRange {
        question_id: QuestionId,
        index: i64,
        available: usize,
    },
    #[error("question '{question_id}' uses the unsupported '{}' type", .kind.label())]
    UnsupportedQuestionKind {
        question_id: QuestionId,
        kind: QuestionKind,
    },
    #[error("question '{0}' is missing the data its type requires")]
    MalformedQuestion(QuestionId),
}
