use crate::infra::build_service;
use clap::{Args, ValueEnum};
use dpo_readiness::assessment::{
    AnswerSheet, AssessmentError, AssessmentService, QuestionKind, QuestionSpec, ResultsRecord,
    UserId,
};
use dpo_readiness::config::AppConfig;
use dpo_readiness::error::AppError;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum DemoProfile {
    /// Correct answers, top likert option, best scenario choice
    #[default]
    Strongest,
    /// Middle likert option, second scenario choice, correct answers
    Balanced,
    /// Wrong answers, bottom likert option, worst scenario choice
    Weakest,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Canned answer profile used to fill in the assessment.
    #[arg(long, value_enum, default_value_t = DemoProfile::Strongest)]
    pub(crate) profile: DemoProfile,
    /// Identifier stamped on the report (defaults to an anonymous user id).
    #[arg(long)]
    pub(crate) user_id: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON answer sheet: {"answers": [{"question_id": "...", "answer": "..."}]}
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Identifier stamped on the report, overriding any id in the sheet.
    #[arg(long)]
    pub(crate) user_id: Option<String>,
}

fn load_service() -> Result<AssessmentService, AppError> {
    let config = AppConfig::load()?;
    build_service(&config.assessment)
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let service = load_service()?;

    println!("Assessment catalog ({} questions)", service.catalog().len());
    for (position, question) in service.catalog().questions().iter().enumerate() {
        println!(
            "\n{:>2}. [{} / {}] {}",
            position + 1,
            question.category.label(),
            question.kind.label(),
            question.prompt
        );
        if let Some(body) = &question.scenario {
            println!("    Situation: {}", body.situation);
        }
        let view = question.view();
        for (index, choice) in view.choices.iter().enumerate() {
            println!("    {index}) {choice}");
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { profile, user_id } = args;
    let service = load_service()?;

    let mut session = service.start_session();
    if let Some(user_id) = user_id {
        session = session.with_user_id(UserId(user_id));
    }

    println!("Readiness assessment demo ({profile:?} profile)");
    while let Some(question) = session.current_question().cloned() {
        let answer = demo_answer(&question, profile);
        let response = session
            .submit(&question.id, &answer)
            .map_err(|err| AppError::from(AssessmentError::from(err)))?;
        println!(
            "- {} answered '{}' -> {:.1} points",
            response.question_id, response.answer, response.score
        );
    }

    let results = session
        .results()
        .ok_or(AppError::Assessment(AssessmentError::IncompleteAnswers {
            answered: session.current_index(),
            expected: session.total_questions(),
        }))?;
    render_results(results);
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { answers, user_id } = args;
    let service = load_service()?;

    let reader = BufReader::new(File::open(&answers)?);
    let mut sheet: AnswerSheet = serde_json::from_reader(reader).map_err(std::io::Error::from)?;
    if let Some(user_id) = user_id {
        sheet.user_id = Some(UserId(user_id));
    }

    let results = service.score_answers(sheet)?;
    render_results(&results);
    Ok(())
}

fn demo_answer(question: &QuestionSpec, profile: DemoProfile) -> String {
    match question.kind {
        QuestionKind::MultipleChoice => match profile {
            DemoProfile::Weakest => question
                .options
                .iter()
                .find(|option| Some(*option) != question.correct_answer.as_ref())
                .cloned()
                .unwrap_or_default(),
            _ => question.correct_answer.clone().unwrap_or_default(),
        },
        QuestionKind::LikertScale => {
            let last = question.options.len().saturating_sub(1);
            match profile {
                DemoProfile::Strongest => last.to_string(),
                DemoProfile::Balanced => (last / 2).to_string(),
                DemoProfile::Weakest => "0".to_string(),
            }
        }
        QuestionKind::Scenario => {
            let index = question.scenario.as_ref().and_then(|body| match profile {
                DemoProfile::Strongest => body.highest_scoring_index(),
                DemoProfile::Balanced => Some(1usize.min(body.choices.len().saturating_sub(1))),
                DemoProfile::Weakest => body.lowest_scoring_index(),
            });
            index.unwrap_or_default().to_string()
        }
        QuestionKind::Ranking => "0".to_string(),
    }
}

fn render_results(results: &ResultsRecord) {
    println!("\nReadiness report for {}", results.user_id);
    println!("Generated {}", results.generated_at.to_rfc3339());
    println!(
        "\n{} ({:.0}% overall match)",
        results.recommendation.headline(),
        results.confidence
    );
    println!("{}", results.recommendation.description());

    println!("\nScores");
    println!("- Psychometric fit: {:.0}%", results.psychometric_score);
    println!("- Technical readiness: {:.0}%", results.technical_score);
    println!("- Overall: {:.0}%", results.overall_score);

    println!("\nWISCAR dimensions");
    for (label, score) in results.wiscar.dimensions() {
        println!("- {label}: {score:.0}%");
    }

    println!("\nNext steps");
    for step in &results.next_steps {
        println!("- {step}");
    }

    println!("\nCareer matches");
    for career in &results.career_matches {
        println!("- {career}");
    }
}
