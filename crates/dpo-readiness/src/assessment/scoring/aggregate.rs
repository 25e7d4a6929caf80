use super::super::catalog::domain::{subcategory, QuestionCategory, QuestionSpec};
use super::super::results::WiscarVector;
use super::rules::MAX_RAW_SCORE;
use super::Response;

const MAX_CATEGORY_SCORE: f64 = 100.0;

/// Response paired with the catalog question it answers.
pub(crate) type ScoredPair<'a> = (&'a QuestionSpec, &'a Response);

/// Percentage of the unweighted maximum earned by `responses`, capped at 100.
///
/// The denominator counts every response as worth 10 points even when its question weight
/// exceeds 1, so weighted groups reach the cap before every answer is perfect.
pub fn category_score<'a, I>(responses: I) -> f64
where
    I: IntoIterator<Item = &'a Response>,
{
    let (count, total) = responses
        .into_iter()
        .fold((0usize, 0.0f64), |(count, total), response| {
            (count + 1, total + response.score)
        });

    if count == 0 {
        return 0.0;
    }

    let max_possible = count as f64 * MAX_RAW_SCORE;
    (total / max_possible * MAX_CATEGORY_SCORE).min(MAX_CATEGORY_SCORE)
}

pub(crate) fn category_subset<'a>(
    pairs: &'a [ScoredPair<'a>],
    category: QuestionCategory,
) -> impl Iterator<Item = ScoredPair<'a>> + 'a {
    pairs
        .iter()
        .copied()
        .filter(move |(question, _)| question.category == category)
}

pub(crate) fn subcategory_score<'a, I>(pairs: I, label: &str) -> f64
where
    I: IntoIterator<Item = ScoredPair<'a>>,
{
    category_score(
        pairs
            .into_iter()
            .filter(|(question, _)| question.subcategory == label)
            .map(|(_, response)| response),
    )
}

/// `interest` pools every response in the log; the other derived dimensions only look at
/// wiscar-category responses. `skill` reuses the technical score as-is.
pub(crate) fn wiscar_vector(pairs: &[ScoredPair<'_>], technical_score: f64) -> WiscarVector {
    let wiscar = || category_subset(pairs, QuestionCategory::Wiscar);

    WiscarVector {
        will: subcategory_score(wiscar(), subcategory::WILL),
        interest: subcategory_score(pairs.iter().copied(), subcategory::INTEREST),
        skill: technical_score,
        cognitive_readiness: subcategory_score(wiscar(), subcategory::COGNITIVE_READINESS),
        ability_to_learn: subcategory_score(wiscar(), subcategory::ABILITY_TO_LEARN),
        real_world_alignment: subcategory_score(wiscar(), subcategory::REAL_WORLD_ALIGNMENT),
    }
}
