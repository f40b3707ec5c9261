//! Question and answer types

use serde::{Deserialize, Serialize};

/// Number of options on every multiple choice question
pub const OPTION_COUNT: usize = 4;

/// Rendering used for a question slot the user never answered
pub const NOT_ANSWERED: &str = "Not answered";

/// A generated quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Question {
    MultipleChoice {
        text: String,
        options: [String; OPTION_COUNT],
        correct_index: usize,
        topic: String,
        explanation: String,
    },
    TrueFalse {
        text: String,
        correct_answer: bool,
        topic: String,
        explanation: String,
    },
}

/// A user's response to a single question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// Index into the options of a multiple choice question
    Choice(usize),
    /// True or false
    Verdict(bool),
}

/// Literal rendering of a true/false value
pub fn verdict_text(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

impl Question {
    pub fn text(&self) -> &str {
        match self {
            Self::MultipleChoice { text, .. } | Self::TrueFalse { text, .. } => text,
        }
    }

    pub fn topic(&self) -> &str {
        match self {
            Self::MultipleChoice { topic, .. } | Self::TrueFalse { topic, .. } => topic,
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            Self::MultipleChoice { explanation, .. } | Self::TrueFalse { explanation, .. } => {
                explanation
            }
        }
    }

    /// Options for multiple choice, empty for true/false
    pub fn options(&self) -> &[String] {
        match self {
            Self::MultipleChoice { options, .. } => options,
            Self::TrueFalse { .. } => &[],
        }
    }

    pub fn is_true_false(&self) -> bool {
        matches!(self, Self::TrueFalse { .. })
    }

    /// The answer that scores this question as correct
    pub fn correct_answer(&self) -> Answer {
        match self {
            Self::MultipleChoice { correct_index, .. } => Answer::Choice(*correct_index),
            Self::TrueFalse { correct_answer, .. } => Answer::Verdict(*correct_answer),
        }
    }

    /// Whether the answer has the right shape for this question
    pub fn accepts(&self, answer: &Answer) -> bool {
        matches!(
            (self, answer),
            (Self::MultipleChoice { .. }, Answer::Choice(_))
                | (Self::TrueFalse { .. }, Answer::Verdict(_))
        )
    }

    /// Check an answer; an answer of the wrong kind is never correct
    pub fn is_correct(&self, answer: &Answer) -> bool {
        self.correct_answer() == *answer
    }

    /// Render an answer the way the review screen shows it
    pub fn render_answer(&self, answer: &Answer) -> String {
        match (self, answer) {
            (Self::MultipleChoice { options, .. }, Answer::Choice(i)) => {
                options.get(*i).cloned().unwrap_or_else(|| NOT_ANSWERED.to_string())
            }
            (_, Answer::Verdict(v)) => verdict_text(*v).to_string(),
            (Self::TrueFalse { .. }, Answer::Choice(_)) => NOT_ANSWERED.to_string(),
        }
    }

    pub fn correct_answer_text(&self) -> String {
        self.render_answer(&self.correct_answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiple_choice() -> Question {
        Question::MultipleChoice {
            text: "Who is famous in Science? (easy)".into(),
            options: ["Einstein".into(), "Newton".into(), "Tesla".into(), "Curie".into()],
            correct_index: 2,
            topic: "Science".into(),
            explanation: "Key figures.".into(),
        }
    }

    fn true_false() -> Question {
        Question::TrueFalse {
            text: "Science has influenced modern technology (easy)".into(),
            correct_answer: true,
            topic: "Science".into(),
            explanation: "Foundations.".into(),
        }
    }

    #[test]
    fn multiple_choice_checks_index() {
        let q = multiple_choice();
        assert!(q.is_correct(&Answer::Choice(2)));
        assert!(!q.is_correct(&Answer::Choice(0)));
        assert!(!q.is_correct(&Answer::Verdict(true)));
    }

    #[test]
    fn true_false_checks_verdict() {
        let q = true_false();
        assert!(q.is_correct(&Answer::Verdict(true)));
        assert!(!q.is_correct(&Answer::Verdict(false)));
        assert!(!q.is_correct(&Answer::Choice(0)));
    }

    #[test]
    fn accepts_matches_kind() {
        assert!(multiple_choice().accepts(&Answer::Choice(3)));
        assert!(!multiple_choice().accepts(&Answer::Verdict(false)));
        assert!(true_false().accepts(&Answer::Verdict(false)));
    }

    #[test]
    fn render_uses_option_text_and_literal_booleans() {
        assert_eq!(multiple_choice().render_answer(&Answer::Choice(1)), "Newton");
        assert_eq!(multiple_choice().correct_answer_text(), "Tesla");
        assert_eq!(true_false().render_answer(&Answer::Verdict(false)), "False");
        assert_eq!(true_false().correct_answer_text(), "True");
    }

    #[test]
    fn options_empty_for_true_false() {
        assert!(true_false().options().is_empty());
        assert_eq!(multiple_choice().options().len(), OPTION_COUNT);
    }
}
