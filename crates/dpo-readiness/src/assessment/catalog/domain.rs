use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-level grouping a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Psychometric,
    Technical,
    Wiscar,
}

impl QuestionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionCategory::Psychometric => "Psychometric Fit",
            QuestionCategory::Technical => "Technical Readiness",
            QuestionCategory::Wiscar => "WISCAR Framework",
        }
    }

    pub const fn ordered() -> [QuestionCategory; 3] {
        [
            QuestionCategory::Psychometric,
            QuestionCategory::Technical,
            QuestionCategory::Wiscar,
        ]
    }
}

/// Answer format a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    LikertScale,
    Scenario,
    /// Declared by the data model but never scored.
    Ranking,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::LikertScale => "likert_scale",
            QuestionKind::Scenario => "scenario",
            QuestionKind::Ranking => "ranking",
        }
    }

    pub(crate) const fn uses_options(self) -> bool {
        !matches!(self, QuestionKind::Scenario)
    }
}

/// Sub-category labels feeding the WISCAR dimensions.
pub mod subcategory {
    pub const WILL: &str = "will";
    pub const INTEREST: &str = "interest";
    pub const COGNITIVE_READINESS: &str = "cognitive_readiness";
    pub const ABILITY_TO_LEARN: &str = "ability_to_learn";
    pub const REAL_WORLD_ALIGNMENT: &str = "real_world_alignment";
}

/// Narrative prompt plus the scored choices of a scenario question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBody {
    pub situation: String,
    pub choices: Vec<ScenarioChoice>,
}

impl ScenarioBody {
    pub fn highest_scoring_index(&self) -> Option<usize> {
        self.choices
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.score.total_cmp(&b.score))
            .map(|(index, _)| index)
    }

    pub fn lowest_scoring_index(&self) -> Option<usize> {
        self.choices
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.score.total_cmp(&b.score))
            .map(|(index, _)| index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioChoice {
    pub text: String,
    /// Raw score in `[0, 10]`.
    pub score: f64,
}

/// Immutable question record as loaded from the catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub id: QuestionId,
    pub category: QuestionCategory,
    pub subcategory: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<ScenarioBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    pub weight: f64,
}

impl QuestionSpec {
    /// Number of selectable answers, regardless of kind.
    pub fn choice_count(&self) -> usize {
        match &self.scenario {
            Some(body) => body.choices.len(),
            None => self.options.len(),
        }
    }

    pub fn view(&self) -> QuestionView {
        let choices = match &self.scenario {
            Some(body) => body
                .choices
                .iter()
                .map(|choice| choice.text.clone())
                .collect(),
            None => self.options.clone(),
        };

        QuestionView {
            id: self.id.clone(),
            category: self.category,
            category_label: self.category.label(),
            kind: self.kind,
            prompt: self.prompt.clone(),
            situation: self.scenario.as_ref().map(|body| body.situation.clone()),
            choices,
        }
    }
}

/// Presentation-safe projection that withholds answer keys and scenario scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub category: QuestionCategory,
    pub category_label: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
    pub choices: Vec<String>,
}
