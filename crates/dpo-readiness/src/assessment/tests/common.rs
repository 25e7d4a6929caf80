use std::sync::Arc;

use axum::response::Response as HttpResponse;
use serde_json::Value;

use crate::assessment::catalog::domain::{
    QuestionCategory, QuestionId, QuestionKind, QuestionSpec,
};
use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::scoring::{Response, ScoringEngine, ScoringPolicy};
use crate::assessment::service::{AnswerSheet, AnswerSubmission, AssessmentService};

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn standard_engine() -> Arc<ScoringEngine> {
    engine_for(QuestionCatalog::standard())
}

pub(super) fn engine_for(catalog: QuestionCatalog) -> Arc<ScoringEngine> {
    Arc::new(ScoringEngine::new(
        Arc::new(catalog),
        ScoringPolicy::default(),
    ))
}

pub(super) fn standard_service() -> AssessmentService {
    AssessmentService::new(QuestionCatalog::standard(), ScoringPolicy::default())
}

/// Correct multiple choice answers, last likert option, highest scoring scenario choice.
pub(super) fn strongest_answer(question: &QuestionSpec) -> String {
    match question.kind {
        QuestionKind::MultipleChoice => question.correct_answer.clone().unwrap_or_default(),
        QuestionKind::LikertScale => (question.options.len() - 1).to_string(),
        QuestionKind::Scenario => question
            .scenario
            .as_ref()
            .and_then(|body| body.highest_scoring_index())
            .unwrap_or_default()
            .to_string(),
        QuestionKind::Ranking => "0".to_string(),
    }
}

/// Wrong multiple choice answers, first likert option, lowest scoring scenario choice.
pub(super) fn weakest_answer(question: &QuestionSpec) -> String {
    match question.kind {
        QuestionKind::MultipleChoice => question
            .options
            .iter()
            .find(|option| Some(*option) != question.correct_answer.as_ref())
            .cloned()
            .unwrap_or_default(),
        QuestionKind::LikertScale => "0".to_string(),
        QuestionKind::Scenario => question
            .scenario
            .as_ref()
            .and_then(|body| body.lowest_scoring_index())
            .unwrap_or_default()
            .to_string(),
        QuestionKind::Ranking => "0".to_string(),
    }
}

pub(super) fn answers_with(
    catalog: &QuestionCatalog,
    pick: impl Fn(&QuestionSpec) -> String,
) -> Vec<(QuestionId, String)> {
    catalog
        .questions()
        .iter()
        .map(|question| (question.id.clone(), pick(question)))
        .collect()
}

pub(super) fn score_all(engine: &ScoringEngine, answers: &[(QuestionId, String)]) -> Vec<Response> {
    answers
        .iter()
        .map(|(id, answer)| engine.score_response(id, answer).expect("answer scores"))
        .collect()
}

pub(super) fn answer_sheet(answers: Vec<(QuestionId, String)>) -> AnswerSheet {
    AnswerSheet {
        user_id: None,
        answers: answers
            .into_iter()
            .map(|(question_id, answer)| AnswerSubmission {
                question_id,
                answer,
            })
            .collect(),
    }
}

pub(super) fn likert(
    id: &str,
    category: QuestionCategory,
    subcategory: &str,
    weight: f64,
) -> QuestionSpec {
    QuestionSpec {
        id: QuestionId::new(id),
        category,
        subcategory: subcategory.to_string(),
        kind: QuestionKind::LikertScale,
        prompt: format!("Likert prompt {id}"),
        options: ["1", "2", "3", "4", "5"]
            .iter()
            .map(|option| option.to_string())
            .collect(),
        scenario: None,
        correct_answer: None,
        weight,
    }
}

pub(super) fn multiple_choice(
    id: &str,
    category: QuestionCategory,
    subcategory: &str,
) -> QuestionSpec {
    QuestionSpec {
        id: QuestionId::new(id),
        category,
        subcategory: subcategory.to_string(),
        kind: QuestionKind::MultipleChoice,
        prompt: format!("Multiple choice prompt {id}"),
        options: vec!["right".to_string(), "wrong".to_string()],
        scenario: None,
        correct_answer: Some("right".to_string()),
        weight: 1.0,
    }
}

pub(super) async fn read_json_body(response: HttpResponse) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
