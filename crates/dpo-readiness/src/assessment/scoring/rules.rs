use super::super::catalog::domain::{QuestionKind, QuestionSpec};
use super::ScoringError;

pub(crate) const MAX_RAW_SCORE: f64 = 10.0;

/// Unweighted score in `[0, 10]` for a single answer.
pub(crate) fn raw_score(question: &QuestionSpec, answer: &str) -> Result<f64, ScoringError> {
    match question.kind {
        QuestionKind::MultipleChoice => {
            let correct = question.correct_answer.as_deref() == Some(answer);
            Ok(if correct { MAX_RAW_SCORE } else { 0.0 })
        }
        QuestionKind::LikertScale => {
            let count = question.options.len();
            if count < 2 {
                return Err(ScoringError::MalformedQuestion(question.id.clone()));
            }
            let index = selection_index(question, answer, count)?;
            Ok(index as f64 / (count - 1) as f64 * MAX_RAW_SCORE)
        }
        QuestionKind::Scenario => {
            let body = question
                .scenario
                .as_ref()
                .ok_or_else(|| ScoringError::MalformedQuestion(question.id.clone()))?;
            let index = selection_index(question, answer, body.choices.len())?;
            Ok(body.choices[index].score)
        }
        QuestionKind::Ranking => Err(ScoringError::UnsupportedQuestionKind {
            question_id: question.id.clone(),
            kind: question.kind,
        }),
    }
}

/// Parses a zero-based index and rejects anything outside `[0, available)`.
fn selection_index(
    question: &QuestionSpec,
    answer: &str,
    available: usize,
) -> Result<usize, ScoringError> {
    let index = answer
        .trim()
        .parse::<i64>()
        .map_err(|_| ScoringError::InvalidAnswer {
            question_id: question.id.clone(),
            answer: answer.to_string(),
        })?;

    usize::try_from(index)
        .ok()
        .filter(|index| *index < available)
        .ok_or_else(|| ScoringError::SelectionOutOfRange {
            question_id: question.id.clone(),
            index,
            available,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::domain::QuestionId;
    use crate::assessment::catalog::QuestionCatalog;

    fn question(id: &str) -> QuestionSpec {
        QuestionCatalog::standard()
            .find(&QuestionId::new(id))
            .cloned()
            .expect("standard question present")
    }

    #[test]
    fn multiple_choice_awards_all_or_nothing() {
        let question = question("tech_004");
        assert_eq!(raw_score(&question, "72 hours").expect("scores"), 10.0);
        assert_eq!(raw_score(&question, "24 hours").expect("scores"), 0.0);
        assert_eq!(raw_score(&question, "72 Hours").expect("scores"), 0.0);
        assert_eq!(raw_score(&question, "not an option").expect("scores"), 0.0);
    }

    #[test]
    fn likert_interpolates_across_options() {
        let question = question("wiscar_001");
        let scores: Vec<f64> = (0..5)
            .map(|index| raw_score(&question, &index.to_string()).expect("in range"))
            .collect();

        assert_eq!(scores, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn likert_rejects_out_of_range_and_non_numeric_answers() {
        let question = question("psych_003");

        match raw_score(&question, "5") {
            Err(ScoringError::SelectionOutOfRange {
                index, available, ..
            }) => {
                assert_eq!(index, 5);
                assert_eq!(available, 5);
            }
            other => panic!("expected out of range, got {other:?}"),
        }
        assert!(matches!(
            raw_score(&question, "-1"),
            Err(ScoringError::SelectionOutOfRange { index: -1, .. })
        ));
        assert!(matches!(
            raw_score(&question, "Very comfortable"),
            Err(ScoringError::InvalidAnswer { .. })
        ));
    }

    #[test]
    fn scenario_uses_declared_choice_score() {
        let question = question("tech_003");
        assert_eq!(raw_score(&question, "0").expect("scores"), 10.0);
        assert_eq!(raw_score(&question, "2").expect("scores"), 8.0);
        assert_eq!(raw_score(&question, " 3 ").expect("scores"), 5.0);
        assert!(matches!(
            raw_score(&question, "4"),
            Err(ScoringError::SelectionOutOfRange { available: 4, .. })
        ));
    }

    #[test]
    fn ranking_fails_loudly() {
        let mut question = question("wiscar_001");
        question.kind = QuestionKind::Ranking;

        match raw_score(&question, "0") {
            Err(ScoringError::UnsupportedQuestionKind { kind, .. }) => {
                assert_eq!(kind, QuestionKind::Ranking)
            }
            other => panic!("expected unsupported kind, got {other:?}"),
        }
    }
}
