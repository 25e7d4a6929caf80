//! Readiness assessment: question catalog, per-answer scoring, aggregation into the WISCAR
//! vector and recommendation tier, and the session that collects answers in order.

pub mod catalog;
pub mod results;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::domain::{
    QuestionCategory, QuestionId, QuestionKind, QuestionSpec, QuestionView, ScenarioBody,
    ScenarioChoice,
};
pub use catalog::{CatalogError, QuestionCatalog};
pub use results::{ResultsRecord, UserId, WiscarVector};
pub use router::assessment_router;
pub use scoring::{
    category_score, Recommendation, Response, ScoringEngine, ScoringError, ScoringPolicy,
};
pub use service::{AnswerSheet, AnswerSubmission, AssessmentError, AssessmentService};
pub use session::{AssessmentSession, SessionError};
