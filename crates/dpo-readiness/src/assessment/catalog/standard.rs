use super::domain::{
    QuestionCategory, QuestionId, QuestionKind, QuestionSpec, ScenarioBody, ScenarioChoice,
};

fn likert(
    id: &str,
    category: QuestionCategory,
    subcategory: &str,
    prompt: &str,
    options: [&str; 5],
    weight: f64,
) -> QuestionSpec {
    QuestionSpec {
        id: QuestionId::new(id),
        category,
        subcategory: subcategory.to_string(),
        kind: QuestionKind::LikertScale,
        prompt: prompt.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        scenario: None,
        correct_answer: None,
        weight,
    }
}

fn multiple_choice(
    id: &str,
    category: QuestionCategory,
    subcategory: &str,
    prompt: &str,
    options: [&str; 4],
    correct_answer: &str,
    weight: f64,
) -> QuestionSpec {
    QuestionSpec {
        id: QuestionId::new(id),
        category,
        subcategory: subcategory.to_string(),
        kind: QuestionKind::MultipleChoice,
        prompt: prompt.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        scenario: None,
        correct_answer: Some(correct_answer.to_string()),
        weight,
    }
}

fn scenario(
    id: &str,
    category: QuestionCategory,
    subcategory: &str,
    prompt: &str,
    situation: &str,
    choices: [(&str, f64); 4],
    weight: f64,
) -> QuestionSpec {
    QuestionSpec {
        id: QuestionId::new(id),
        category,
        subcategory: subcategory.to_string(),
        kind: QuestionKind::Scenario,
        prompt: prompt.to_string(),
        options: Vec::new(),
        scenario: Some(ScenarioBody {
            situation: situation.to_string(),
            choices: choices
                .iter()
                .map(|(text, score)| ScenarioChoice {
                    text: text.to_string(),
                    score: *score,
                })
                .collect(),
        }),
        correct_answer: None,
        weight,
    }
}

pub(super) fn questions() -> Vec<QuestionSpec> {
    use QuestionCategory::{Psychometric, Technical, Wiscar};

    vec![
        likert(
            "psych_001",
            Psychometric,
            "interest",
            "How interested are you in staying updated with data protection regulations and legal frameworks?",
            [
                "Not at all interested",
                "Slightly interested",
                "Moderately interested",
                "Very interested",
                "Extremely interested",
            ],
            1.2,
        ),
        scenario(
            "psych_002",
            Psychometric,
            "personality",
            "You discover that your company is processing personal data without proper consent. What is your immediate response?",
            "A colleague mentions they've been collecting email addresses from website visitors without clear consent mechanisms.",
            [
                ("Immediately escalate to management and suggest halting the collection", 10.0),
                ("Research the legal requirements before taking action", 8.0),
                ("Suggest implementing a proper consent mechanism gradually", 6.0),
                ("Wait to see if anyone else notices the issue", 2.0),
            ],
            1.5,
        ),
        likert(
            "psych_003",
            Psychometric,
            "ethics",
            "How comfortable are you with having to sometimes say 'no' to business requests that may violate privacy regulations?",
            [
                "Very uncomfortable",
                "Somewhat uncomfortable",
                "Neutral",
                "Somewhat comfortable",
                "Very comfortable",
            ],
            1.3,
        ),
        multiple_choice(
            "tech_001",
            Technical,
            "gdpr_knowledge",
            "What does GDPR stand for?",
            [
                "General Data Protection Regulation",
                "Global Data Privacy Rules",
                "General Digital Protection Rights",
                "Global Data Processing Regulation",
            ],
            "General Data Protection Regulation",
            1.0,
        ),
        multiple_choice(
            "tech_002",
            Technical,
            "technical_concepts",
            "Which of the following is considered personally identifiable information (PII)?",
            [
                "IP address and email address",
                "Only social security numbers",
                "Only names and addresses",
                "Only financial information",
            ],
            "IP address and email address",
            1.1,
        ),
        scenario(
            "tech_003",
            Technical,
            "risk_assessment",
            "Your company wants to implement a new customer analytics system. What is your first priority as a DPO?",
            "The marketing team wants to deploy AI-powered customer behavior tracking across the website.",
            [
                ("Conduct a Data Protection Impact Assessment (DPIA)", 10.0),
                ("Review the vendor's security certifications", 7.0),
                ("Check if customers have consented to analytics", 8.0),
                ("Ensure the system complies with internal policies", 5.0),
            ],
            1.4,
        ),
        likert(
            "wiscar_001",
            Wiscar,
            "will",
            "How committed are you to pursuing continuous learning in privacy law and technology?",
            [
                "Not committed",
                "Slightly committed",
                "Moderately committed",
                "Very committed",
                "Extremely committed",
            ],
            1.2,
        ),
        multiple_choice(
            "wiscar_002",
            Wiscar,
            "cognitive_readiness",
            "When facing a complex privacy compliance issue, what is your preferred approach?",
            [
                "Break it down into smaller, manageable components",
                "Seek expert advice immediately",
                "Apply previous experience and patterns",
                "Research extensively before acting",
            ],
            "Break it down into smaller, manageable components",
            1.3,
        ),
        scenario(
            "wiscar_003",
            Wiscar,
            "ability_to_learn",
            "A new privacy regulation has been introduced in your industry. How do you approach learning about it?",
            "The government has just announced new AI governance requirements that affect your company's machine learning models.",
            [
                ("Create a structured learning plan with timelines and resources", 10.0),
                ("Attend industry webinars and conferences", 8.0),
                ("Read the regulation document thoroughly", 7.0),
                ("Wait for legal interpretations to emerge", 4.0),
            ],
            1.2,
        ),
        scenario(
            "wiscar_004",
            Wiscar,
            "real_world_alignment",
            "You need to explain GDPR compliance to a non-technical marketing team. How do you approach this?",
            "The marketing team is frustrated with privacy restrictions affecting their campaigns and wants to understand 'why all these rules exist'.",
            [
                ("Use business impact examples and analogies they can relate to", 10.0),
                ("Provide a detailed legal explanation of the regulations", 6.0),
                ("Focus on the penalties and risks of non-compliance", 7.0),
                ("Direct them to read the regulation themselves", 3.0),
            ],
            1.4,
        ),
        multiple_choice(
            "psych_004",
            Psychometric,
            "attention_to_detail",
            "When reviewing a data processing agreement, what would you prioritize checking first?",
            [
                "Data retention periods and deletion procedures",
                "Security measures and encryption requirements",
                "Legal basis for processing and consent mechanisms",
                "All of the above with equal priority",
            ],
            "All of the above with equal priority",
            1.1,
        ),
        multiple_choice(
            "tech_004",
            Technical,
            "logical_reasoning",
            "If a data breach affects 500 EU residents, what is the maximum time you have to notify the supervisory authority?",
            ["24 hours", "72 hours", "7 days", "30 days"],
            "72 hours",
            1.2,
        ),
    ]
}
