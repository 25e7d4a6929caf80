use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::domain::{QuestionId, QuestionView};
use super::catalog::QuestionCatalog;
use super::results::{ResultsRecord, UserId};
use super::scoring::{ScoringEngine, ScoringPolicy};
use super::session::{AssessmentSession, SessionError};

/// Single raw answer as submitted by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: QuestionId,
    pub answer: String,
}

/// Complete set of answers, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub answers: Vec<AnswerSubmission>,
}

/// Service composing the catalog and scoring engine for collaborators that work with whole
/// answer sheets rather than one answer at a time.
pub struct AssessmentService {
    engine: Arc<ScoringEngine>,
}

impl AssessmentService {
    pub fn new(catalog: QuestionCatalog, policy: ScoringPolicy) -> Self {
        let engine = ScoringEngine::new(Arc::new(catalog), policy);
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        self.engine.catalog()
    }

    pub fn question_views(&self) -> Vec<QuestionView> {
        self.engine.catalog().views()
    }

    pub fn start_session(&self) -> AssessmentSession {
        AssessmentSession::new(self.engine.clone())
    }

    /// Replays `sheet` through a fresh session and returns the final results.
    pub fn score_answers(&self, sheet: AnswerSheet) -> Result<ResultsRecord, AssessmentError> {
        let expected = self.catalog().len();
        if sheet.answers.len() != expected {
            return Err(AssessmentError::IncompleteAnswers {
                answered: sheet.answers.len(),
                expected,
            });
        }

        let mut session = self.start_session();
        if let Some(user_id) = sheet.user_id {
            session = session.with_user_id(user_id);
        }

        for submission in &sheet.answers {
            session.submit(&submission.question_id, &submission.answer)?;
        }

        session
            .results()
            .cloned()
            .ok_or(AssessmentError::IncompleteAnswers {
                answered: session.current_index(),
                expected,
            })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("answer sheet covers {answered} of {expected} questions")]
    IncompleteAnswers { answered: usize, expected: usize },
}
