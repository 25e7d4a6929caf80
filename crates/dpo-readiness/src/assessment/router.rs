use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::service::{AnswerSheet, AssessmentService};

/// Router builder exposing the catalog and results endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/results", post(results_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    let questions = service.question_views();
    let payload = json!({
        "total": questions.len(),
        "questions": questions,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn results_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(sheet): Json<AnswerSheet>,
) -> Response {
    match service.score_answers(sheet) {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
