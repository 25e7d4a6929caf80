//! Question catalog: the ordered, validated set of questions an assessment walks through.

pub mod domain;
mod standard;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use domain::{QuestionCategory, QuestionId, QuestionKind, QuestionSpec, QuestionView};

const MAX_CHOICE_SCORE: f64 = 10.0;

/// Ordered question list. Construction validates every record, so scoring never sees a
/// malformed question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<QuestionSpec>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    questions: Vec<QuestionSpec>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<QuestionSpec>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.clone()) {
                return Err(CatalogError::DuplicateId(question.id.clone()));
            }
            validate_question(question)?;
        }

        debug!(questions = questions.len(), "question catalog validated");
        Ok(Self { questions })
    }

    /// The twelve-question Data Privacy Officer readiness survey.
    pub fn standard() -> Self {
        Self {
            questions: standard::questions(),
        }
    }

    /// Reads `{"questions": [...]}` JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(document.questions)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[QuestionSpec] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&QuestionSpec> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &QuestionId) -> Option<&QuestionSpec> {
        self.questions.iter().find(|question| &question.id == id)
    }

    pub fn category_of(&self, id: &QuestionId) -> Option<QuestionCategory> {
        self.find(id).map(|question| question.category)
    }

    pub fn views(&self) -> Vec<QuestionView> {
        self.questions.iter().map(QuestionSpec::view).collect()
    }
}

fn validate_question(question: &QuestionSpec) -> Result<(), CatalogError> {
    let id = &question.id;
    let malformed = |reason: &str| CatalogError::Malformed {
        id: id.clone(),
        reason: reason.to_string(),
    };

    if !question.weight.is_finite() || question.weight <= 0.0 {
        return Err(malformed("weight must be a positive finite number"));
    }

    if question.kind.uses_options() {
        if question.options.is_empty() {
            return Err(malformed("options are required for this question type"));
        }
        if question.scenario.is_some() {
            return Err(malformed("only scenario questions may carry a scenario body"));
        }
    } else {
        let body = question
            .scenario
            .as_ref()
            .ok_or_else(|| malformed("scenario questions require a scenario body"))?;
        if !question.options.is_empty() {
            return Err(malformed("scenario questions must not list plain options"));
        }
        if body.choices.is_empty() {
            return Err(malformed("scenario body must offer at least one choice"));
        }
        if body
            .choices
            .iter()
            .any(|choice| !(0.0..=MAX_CHOICE_SCORE).contains(&choice.score))
        {
            return Err(malformed("scenario choice scores must fall within [0, 10]"));
        }
    }

    if question.kind == QuestionKind::LikertScale && question.options.len() < 2 {
        return Err(malformed("likert scales need at least two options"));
    }

    match (&question.correct_answer, question.kind) {
        (Some(answer), QuestionKind::MultipleChoice) => {
            if !question.options.iter().any(|option| option == answer) {
                return Err(malformed("correct answer must match one of the options"));
            }
        }
        (None, QuestionKind::MultipleChoice) => {
            return Err(malformed("multiple choice questions require a correct answer"));
        }
        (Some(_), _) => {
            return Err(malformed("only multiple choice questions carry a correct answer"));
        }
        (None, _) => {}
    }

    Ok(())
}

/// Raised while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("question catalog is empty")]
    Empty,
    #[error("duplicate question id '{0}'")]
    DuplicateId(QuestionId),
    #[error("question '{id}' is malformed: {reason}")]
    Malformed { id: QuestionId, reason: String },
    #[error("unable to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
