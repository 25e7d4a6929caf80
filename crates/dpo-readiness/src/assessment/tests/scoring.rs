use chrono::{TimeZone, Utc};

use super::common::*;
use crate::assessment::catalog::domain::{QuestionCategory, QuestionId, QuestionKind};
use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::results::{ResultsRecord, UserId};
use crate::assessment::scoring::{Recommendation, Response, ScoringEngine, ScoringError};

fn evaluate(engine: &ScoringEngine, responses: &[Response]) -> ResultsRecord {
    let generated_at = Utc
        .with_ymd_and_hms(2025, 10, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    engine
        .evaluate(responses, UserId("user-test".to_string()), generated_at)
        .expect("evaluation succeeds")
}

#[test]
fn strongest_answers_yield_full_marks_and_yes() {
    let engine = standard_engine();
    let answers = answers_with(engine.catalog(), strongest_answer);
    let responses = score_all(&engine, &answers);

    let results = evaluate(&engine, &responses);

    assert_close(results.psychometric_score, 100.0);
    assert_close(results.technical_score, 100.0);
    assert_close(results.wiscar.mean(), 100.0);
    assert_close(results.overall_score, 100.0);
    assert_eq!(results.recommendation, Recommendation::Yes);
    assert_eq!(results.career_matches[0], "Data Privacy Officer");
    assert_eq!(results.next_steps.len(), 3);
    assert_eq!(results.user_id, UserId("user-test".to_string()));
}

#[test]
fn weakest_answers_yield_low_score_and_no() {
    let engine = standard_engine();
    let answers = answers_with(engine.catalog(), weakest_answer);
    let responses = score_all(&engine, &answers);

    let results = evaluate(&engine, &responses);

    // Only the lowest scenario choices contribute: psych_002 (2 x 1.5) and tech_003 (5 x 1.4).
    assert_close(results.psychometric_score, 7.5);
    assert_close(results.technical_score, 17.5);
    assert_close(results.wiscar.will, 0.0);
    assert_close(results.wiscar.interest, 0.0);
    assert_close(results.wiscar.cognitive_readiness, 0.0);
    assert_close(results.wiscar.ability_to_learn, 48.0);
    assert_close(results.wiscar.real_world_alignment, 42.0);
    assert_close(results.overall_score, 2.25 + 5.25 + 107.5 / 6.0 * 0.4);
    assert!(results.overall_score < 20.0);
    assert_eq!(results.recommendation, Recommendation::No);
    assert_eq!(results.career_matches[0], "Data Analyst");
    assert!(results.next_steps[0].contains("cybersecurity"));
}

#[test]
fn confidence_mirrors_overall_score() {
    let engine = standard_engine();
    let answers = answers_with(engine.catalog(), weakest_answer);
    let results = evaluate(&engine, &score_all(&engine, &answers));
    assert_eq!(results.confidence.to_bits(), results.overall_score.to_bits());
}

#[test]
fn skill_is_the_technical_score() {
    let engine = standard_engine();
    let catalog = engine.catalog().clone();

    for k in 0..5usize {
        let answers = answers_with(&catalog, |question| {
            if k % 2 == 0 {
                strongest_answer(question)
            } else {
                weakest_answer(question)
            }
        });
        let mut responses = score_all(&engine, &answers);
        responses.truncate(12 - k);

        let results = evaluate(&engine, &responses);
        assert_eq!(
            results.wiscar.skill.to_bits(),
            results.technical_score.to_bits()
        );
    }
}

#[test]
fn overall_score_stays_within_bounds() {
    let engine = standard_engine();
    let catalog = engine.catalog().clone();

    for pick in 0..5usize {
        let answers = answers_with(&catalog, |question| match question.kind {
            QuestionKind::LikertScale => pick.to_string(),
            QuestionKind::Scenario => (pick % 4).to_string(),
            _ if pick % 2 == 0 => strongest_answer(question),
            _ => weakest_answer(question),
        });
        let results = evaluate(&engine, &score_all(&engine, &answers));

        assert!(
            (0.0..=100.0).contains(&results.overall_score),
            "overall {} out of bounds",
            results.overall_score
        );
        for (label, score) in results.wiscar.dimensions() {
            assert!((0.0..=100.0).contains(&score), "{label} out of bounds");
        }
    }
}

#[test]
fn weights_apply_to_each_response() {
    let engine = standard_engine();

    let response = engine
        .score_response(&QuestionId::new("psych_002"), "1")
        .expect("scenario scores");
    assert_close(response.score, 8.0 * 1.5);

    let response = engine
        .score_response(&QuestionId::new("psych_001"), "2")
        .expect("likert scores");
    assert_close(response.score, 5.0 * 1.2);
    assert_eq!(response.answer, "2");
}

#[test]
fn weighted_categories_hit_the_ceiling_early() {
    // Every technical question carries weight >= 1, so near-perfect answers already clamp.
    let engine = standard_engine();
    let answers = answers_with(engine.catalog(), |question| {
        if question.id.as_str() == "tech_003" {
            "1".to_string()
        } else {
            strongest_answer(question)
        }
    });
    let results = evaluate(&engine, &score_all(&engine, &answers));

    // (10 + 11 + 9.8 + 12) / 40 = 107% before clamping.
    assert_close(results.technical_score, 100.0);
}

#[test]
fn interest_pools_across_categories_other_dimensions_do_not() {
    let catalog = QuestionCatalog::new(vec![
        likert("p1", QuestionCategory::Psychometric, "interest", 1.0),
        likert("p2", QuestionCategory::Psychometric, "will", 1.0),
        likert("w1", QuestionCategory::Wiscar, "will", 1.0),
        likert("w2", QuestionCategory::Wiscar, "interest", 1.0),
        multiple_choice("t1", QuestionCategory::Technical, "cognitive_readiness"),
        multiple_choice("w3", QuestionCategory::Wiscar, "cognitive_readiness"),
        likert("t2", QuestionCategory::Technical, "ability_to_learn", 1.0),
        likert("p3", QuestionCategory::Psychometric, "real_world_alignment", 1.0),
    ])
    .expect("catalog valid");
    let engine = engine_for(catalog);

    let answers = vec![
        (QuestionId::new("p1"), "4".to_string()),
        (QuestionId::new("p2"), "4".to_string()),
        (QuestionId::new("w1"), "0".to_string()),
        (QuestionId::new("w2"), "0".to_string()),
        (QuestionId::new("t1"), "right".to_string()),
        (QuestionId::new("w3"), "wrong".to_string()),
        (QuestionId::new("t2"), "4".to_string()),
        (QuestionId::new("p3"), "4".to_string()),
    ];
    let results = evaluate(&engine, &score_all(&engine, &answers));

    assert_close(results.wiscar.interest, 50.0);
    assert_close(results.wiscar.will, 0.0);
    assert_close(results.wiscar.cognitive_readiness, 0.0);
    assert_close(results.wiscar.ability_to_learn, 0.0);
    assert_close(results.wiscar.real_world_alignment, 0.0);
    assert_close(results.technical_score, 100.0);
    assert_close(results.wiscar.skill, 100.0);
}

#[test]
fn empty_log_scores_zero_everywhere() {
    let engine = standard_engine();
    let results = evaluate(&engine, &[]);

    assert_eq!(results.psychometric_score, 0.0);
    assert_eq!(results.technical_score, 0.0);
    assert_eq!(results.wiscar.mean(), 0.0);
    assert_eq!(results.overall_score, 0.0);
    assert_eq!(results.recommendation, Recommendation::No);
}

#[test]
fn unknown_question_fails_fast() {
    let engine = standard_engine();

    match engine.score_response(&QuestionId::new("psych_999"), "1") {
        Err(ScoringError::UnknownQuestion(id)) => assert_eq!(id.as_str(), "psych_999"),
        other => panic!("expected unknown question, got {other:?}"),
    }

    let stray = Response {
        question_id: QuestionId::new("ghost"),
        answer: "0".to_string(),
        score: 10.0,
    };
    let result = engine.evaluate(&[stray], UserId("user-test".to_string()), Utc::now());
    assert!(matches!(result, Err(ScoringError::UnknownQuestion(_))));
}

#[test]
fn results_serialize_with_snake_case_fields() {
    let engine = standard_engine();
    let answers = answers_with(engine.catalog(), strongest_answer);
    let results = evaluate(&engine, &score_all(&engine, &answers));

    let value = serde_json::to_value(&results).expect("results serialize");
    assert_eq!(value["recommendation"], "yes");
    assert_eq!(value["user_id"], "user-test");
    assert!(value["wiscar"]["real_world_alignment"].is_number());
    assert!(results.summary().starts_with("Highly Recommended"));
}
