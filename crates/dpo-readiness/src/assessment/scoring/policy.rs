use super::config::ScoringPolicy;
use serde::{Deserialize, Serialize};

/// Readiness tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Yes => "yes",
            Recommendation::Maybe => "maybe",
            Recommendation::No => "no",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Recommendation::Yes => "Highly Recommended",
            Recommendation::Maybe => "Recommended with Preparation",
            Recommendation::No => "Consider Alternative Paths",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Recommendation::Yes => {
                "You show strong alignment with DPO responsibilities and have the foundational skills to succeed in this career path."
            }
            Recommendation::Maybe => {
                "You have potential for this role but would benefit from additional preparation in key areas before pursuing DPO positions."
            }
            Recommendation::No => {
                "Your profile suggests exploring related careers might be more suitable. Consider the alternative paths suggested below."
            }
        }
    }
}

pub(crate) fn recommend(overall_score: f64, policy: &ScoringPolicy) -> Recommendation {
    if overall_score >= policy.recommend_threshold {
        Recommendation::Yes
    } else if overall_score >= policy.consider_threshold {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}

pub(crate) fn next_steps(
    recommendation: Recommendation,
    psychometric_score: f64,
    technical_score: f64,
    policy: &ScoringPolicy,
) -> Vec<String> {
    let mut steps: Vec<&str> = Vec::new();

    match recommendation {
        Recommendation::Yes => {
            steps.push("Enroll in an advanced GDPR certification program");
            steps.push("Gain hands-on experience with privacy impact assessments");
            steps.push("Network with data protection professionals");
        }
        Recommendation::Maybe => {
            if technical_score < policy.remediation_threshold {
                steps.push("Complete foundational data protection law courses");
                steps.push("Study GDPR and CCPA requirements in detail");
            }
            if psychometric_score < policy.remediation_threshold {
                steps.push("Develop analytical and critical thinking skills");
                steps.push("Practice ethical decision-making scenarios");
            }
            steps.push("Consider starting in a compliance analyst role");
        }
        Recommendation::No => {
            steps.push("Explore related careers in cybersecurity or legal technology");
            steps.push("Build foundational IT and legal knowledge");
            steps.push("Consider data analyst or business analyst roles as stepping stones");
        }
    }

    steps.into_iter().map(str::to_string).collect()
}

/// First matching tier wins; tiers never accumulate.
pub(crate) fn career_matches(
    overall_score: f64,
    psychometric_score: f64,
    technical_score: f64,
    policy: &ScoringPolicy,
) -> Vec<String> {
    let careers: &[&str] = if overall_score >= policy.recommend_threshold {
        &[
            "Data Privacy Officer",
            "Chief Privacy Officer",
            "Privacy Consultant",
        ]
    } else if overall_score >= policy.career_match_threshold {
        &[
            "Compliance Analyst",
            "Privacy Specialist",
            "Legal Technology Analyst",
        ]
    } else if technical_score >= policy.career_match_threshold {
        &["Cybersecurity Analyst", "Information Security Specialist"]
    } else if psychometric_score >= policy.career_match_threshold {
        &["Business Analyst", "Risk Management Specialist"]
    } else {
        &[
            "Data Analyst",
            "Project Coordinator",
            "Administrative Specialist",
        ]
    };

    careers.iter().map(|career| career.to_string()).collect()
}
