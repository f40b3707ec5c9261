//! Template-based question generation
//!
//! Questions are built from a small set of topic-parameterized templates,
//! cycling through them when more questions are requested than there are
//! templates. The only source of variation is which multiple choice option
//! is declared correct, drawn from the caller's random number generator.

use rand::Rng;

use super::config::{Difficulty, QuizConfig, ResponseType};
use super::question::{OPTION_COUNT, Question};

/// A multiple choice template: stem, fixed options, explanation lead
struct ChoiceTemplate {
    stem: &'static str,
    options: [&'static str; OPTION_COUNT],
    lead: &'static str,
}

/// A true/false template: statement, its truth value, explanation lead
struct VerdictTemplate {
    statement: &'static str,
    truth: bool,
    lead: &'static str,
}

/// Placeholder replaced with the quiz topic
const TOPIC: &str = "{topic}";

const CHOICE_TEMPLATES: &[ChoiceTemplate] = &[
    ChoiceTemplate {
        stem: "What is the capital of {topic}?",
        options: ["Paris", "London", "Berlin", "Madrid"],
        lead: "This question tests your knowledge of capitals and major cities in geography.",
    },
    ChoiceTemplate {
        stem: "Which year is significant in {topic}?",
        options: ["1492", "1776", "1945", "2001"],
        lead: "Historical dates help us understand the timeline of important events and discoveries.",
    },
    ChoiceTemplate {
        stem: "Who is famous in {topic}?",
        options: ["Einstein", "Newton", "Tesla", "Curie"],
        lead: "Understanding key figures helps us appreciate their contributions to this field.",
    },
    ChoiceTemplate {
        stem: "What is a key concept in {topic}?",
        options: ["Gravity", "Evolution", "Relativity", "Quantum"],
        lead: "Core concepts form the foundation for understanding more complex topics in this area.",
    },
    ChoiceTemplate {
        stem: "Which discovery relates to {topic}?",
        options: ["DNA", "Electricity", "Atoms", "Cells"],
        lead: "Scientific discoveries have shaped our modern understanding of the world around us.",
    },
];

const VERDICT_TEMPLATES: &[VerdictTemplate] = &[
    VerdictTemplate {
        statement: "{topic} was discovered in ancient times",
        truth: true,
        lead: "Many foundational concepts and discoveries have roots in ancient civilizations and early human inquiry.",
    },
    VerdictTemplate {
        statement: "The study of {topic} began in the 20th century",
        truth: false,
        lead: "Most fields of study have much longer histories, often dating back centuries or millennia.",
    },
    VerdictTemplate {
        statement: "{topic} is considered a fundamental concept",
        truth: true,
        lead: "Core concepts form the building blocks for understanding more advanced topics in any field.",
    },
    VerdictTemplate {
        statement: "There are no practical applications of {topic}",
        truth: false,
        lead: "Nearly all areas of knowledge have real-world applications that benefit society and technology.",
    },
    VerdictTemplate {
        statement: "{topic} has influenced modern technology",
        truth: true,
        lead: "Scientific and theoretical knowledge often serves as the foundation for technological advancement.",
    },
];

/// Number of templates per response type
pub const TEMPLATE_COUNT: usize = 5;

/// Generate `config.num_questions` questions for the configured response type.
///
/// The count is not validated here; zero yields an empty vector.
pub fn generate<R: Rng + ?Sized>(config: &QuizConfig, rng: &mut R) -> Vec<Question> {
    (0..config.num_questions)
        .map(|i| match config.response_type {
            ResponseType::MultipleChoice => multiple_choice(i, config, rng),
            ResponseType::TrueFalse => true_false(i, config),
            ResponseType::Mixed if i % 2 == 0 => multiple_choice(i, config, rng),
            ResponseType::Mixed => true_false(i, config),
        })
        .collect()
}

/// Build the multiple choice question at position `i`
pub fn multiple_choice<R: Rng + ?Sized>(i: usize, config: &QuizConfig, rng: &mut R) -> Question {
    let template = &CHOICE_TEMPLATES[i % CHOICE_TEMPLATES.len()];
    let correct_index = rng.gen_range(0..OPTION_COUNT);
    let topic = config.topic.as_str();

    Question::MultipleChoice {
        text: question_text(template.stem, topic, config.difficulty),
        options: template.options.map(String::from),
        correct_index,
        topic: topic.to_string(),
        explanation: format!(
            "{} The correct answer is \"{}\" based on established {} knowledge at {} level.",
            template.lead, template.options[correct_index], topic, config.difficulty
        ),
    }
}

/// Build the true/false question at position `i`
pub fn true_false(i: usize, config: &QuizConfig) -> Question {
    let template = &VERDICT_TEMPLATES[i % VERDICT_TEMPLATES.len()];
    let topic = config.topic.as_str();

    Question::TrueFalse {
        text: question_text(template.statement, topic, config.difficulty),
        correct_answer: template.truth,
        topic: topic.to_string(),
        explanation: format!(
            "{} In the context of {}, this {} accurate at {} level.",
            template.lead,
            topic,
            if template.truth { "is" } else { "is not" },
            config.difficulty
        ),
    }
}

fn question_text(template: &str, topic: &str, difficulty: Difficulty) -> String {
    format!("{} ({})", template.replace(TOPIC, topic), difficulty)
}
