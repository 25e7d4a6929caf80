use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::catalog::domain::{QuestionId, QuestionSpec};
use super::results::{ResultsRecord, UserId};
use super::scoring::{Response, ScoringEngine, ScoringError};

/// Response log and cached results for one pass through the catalog.
///
/// Answers are accepted strictly in catalog order. The results record is computed once,
/// when the final answer lands, and stays cached until [`AssessmentSession::reset`].
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    engine: Arc<ScoringEngine>,
    user_id: Option<UserId>,
    responses: Vec<Response>,
    results: Option<ResultsRecord>,
}

impl AssessmentSession {
    pub fn new(engine: Arc<ScoringEngine>) -> Self {
        Self {
            engine,
            user_id: None,
            responses: Vec::new(),
            results: None,
        }
    }

    /// Stamps results with `user_id` instead of a generated anonymous identifier.
    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn current_index(&self) -> usize {
        self.responses.len()
    }

    pub fn total_questions(&self) -> usize {
        self.engine.catalog().len()
    }

    pub fn current_question(&self) -> Option<&QuestionSpec> {
        self.engine.catalog().get(self.current_index())
    }

    pub fn is_complete(&self) -> bool {
        self.responses.len() == self.total_questions()
    }

    /// Share of the catalog answered so far, in percent.
    pub fn progress(&self) -> f64 {
        self.current_index() as f64 / self.total_questions() as f64 * 100.0
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn results(&self) -> Option<&ResultsRecord> {
        self.results.as_ref()
    }

    /// Scores and appends the answer for `question_id`, which must be the current question.
    pub fn submit(
        &mut self,
        question_id: &QuestionId,
        answer: &str,
    ) -> Result<&Response, SessionError> {
        let expected = match self.current_question() {
            Some(question) => question.id.clone(),
            None => return Err(SessionError::AlreadyComplete),
        };

        if &expected != question_id {
            if self.engine.catalog().find(question_id).is_none() {
                return Err(ScoringError::UnknownQuestion(question_id.clone()).into());
            }
            return Err(SessionError::OutOfOrder {
                expected,
                received: question_id.clone(),
            });
        }

        let response = self
            .engine
            .score_response(question_id, answer)
            .map_err(|err| {
                warn!(question = %question_id, error = %err, "answer rejected");
                err
            })?;

        self.responses.push(response);
        debug!(
            index = self.responses.len(),
            total = self.total_questions(),
            "response recorded"
        );

        if self.is_complete() {
            let generated_at = Utc::now();
            let user_id = self
                .user_id
                .clone()
                .unwrap_or_else(|| UserId::anonymous(generated_at));
            let results = self
                .engine
                .evaluate(&self.responses, user_id, generated_at)?;
            info!(summary = %results.summary(), "assessment complete");
            self.results = Some(results);
        }

        let index = self.responses.len() - 1;
        Ok(&self.responses[index])
    }

    /// Answers whichever question is current.
    pub fn submit_current(&mut self, answer: &str) -> Result<&Response, SessionError> {
        let question_id = self
            .current_question()
            .map(|question| question.id.clone())
            .ok_or(SessionError::AlreadyComplete)?;
        self.submit(&question_id, answer)
    }

    /// Results over the answers given so far. Nothing is cached.
    pub fn preview(&self) -> Result<ResultsRecord, SessionError> {
        let generated_at = Utc::now();
        let user_id = self
            .user_id
            .clone()
            .unwrap_or_else(|| UserId::anonymous(generated_at));
        Ok(self
            .engine
            .evaluate(&self.responses, user_id, generated_at)?)
    }

    /// Clears the log and cached results and rewinds to the first question.
    pub fn reset(&mut self) {
        self.responses.clear();
        self.results = None;
        debug!("assessment session reset");
    }
}

/// Raised while collecting answers.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error("expected an answer for question '{expected}' but received '{received}'")]
    OutOfOrder {
        expected: QuestionId,
        received: QuestionId,
    },
    #[error("assessment is already complete")]
    AlreadyComplete,
}
