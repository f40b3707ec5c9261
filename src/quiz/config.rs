//! Quiz configuration chosen on the setup screen

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::QuizError;

/// Smallest number of questions a quiz can have
pub const MIN_QUESTIONS: usize = 5;

/// Largest number of questions a quiz can have
pub const MAX_QUESTIONS: usize = 30;

/// Topics offered on the setup screen
pub const TOPICS: &[&str] = &[
    "Science",
    "History",
    "Geography",
    "Math",
    "Literature",
    "Movies",
    "Music",
    "Sports",
    "Technology",
    "Art",
];

/// How hard the generated questions are labelled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Mixed,
}

impl Difficulty {
    /// All difficulties in selector order
    pub fn all() -> &'static [Difficulty] {
        &[Self::Easy, Self::Medium, Self::Hard, Self::Mixed]
    }

    /// Lowercase label interpolated into question text
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "medium" | "m" => Ok(Self::Medium),
            "hard" | "h" => Ok(Self::Hard),
            "mixed" | "mix" => Ok(Self::Mixed),
            _ => Err(format!("Unknown difficulty: {}. Options: easy, medium, hard, mixed", s)),
        }
    }
}

/// Which kind of questions the quiz is made of
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseType {
    #[default]
    MultipleChoice,
    TrueFalse,
    Mixed,
}

impl ResponseType {
    /// All response types in selector order
    pub fn all() -> &'static [ResponseType] {
        &[Self::MultipleChoice, Self::TrueFalse, Self::Mixed]
    }

    /// Kebab-case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::TrueFalse => "true-false",
            Self::Mixed => "mixed",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple Choice",
            Self::TrueFalse => "True / False",
            Self::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ResponseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multiple-choice" | "multiple_choice" | "mc" => Ok(Self::MultipleChoice),
            "true-false" | "true_false" | "tf" => Ok(Self::TrueFalse),
            "mixed" | "mix" => Ok(Self::Mixed),
            _ => Err(format!(
                "Unknown response type: {}. Options: multiple-choice (mc), true-false (tf), mixed",
                s
            )),
        }
    }
}

/// When answer feedback is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    /// Feedback after every question
    #[default]
    Interactive,
    /// Feedback only on the results screen
    Batch,
}

impl AnswerMode {
    /// All answer modes in selector order
    pub fn all() -> &'static [AnswerMode] {
        &[Self::Interactive, Self::Batch]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interactive => "interactive",
            Self::Batch => "batch",
        }
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AnswerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "interactive" | "i" => Ok(Self::Interactive),
            "batch" | "b" => Ok(Self::Batch),
            _ => Err(format!("Unknown answer mode: {}. Options: interactive, batch", s)),
        }
    }
}

/// Step to the neighbouring entry of a selector list, wrapping at both ends
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    all[next]
}

/// Settings for a single quiz session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub difficulty: Difficulty,
    pub topic: String,
    pub num_questions: usize,
    pub response_type: ResponseType,
    pub answer_mode: AnswerMode,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            topic: TOPICS[0].to_string(),
            num_questions: 10,
            response_type: ResponseType::MultipleChoice,
            answer_mode: AnswerMode::Interactive,
        }
    }
}

impl QuizConfig {
    /// Create a config for a topic with default settings
    pub fn new(topic: impl Into<String>) -> Self {
        Self { topic: topic.into().trim().to_string(), ..Default::default() }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_num_questions(mut self, num_questions: usize) -> Self {
        self.num_questions = num_questions;
        self
    }

    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    pub fn with_answer_mode(mut self, answer_mode: AnswerMode) -> Self {
        self.answer_mode = answer_mode;
        self
    }

    /// Check the config before a session is started from it
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.topic.trim().is_empty() {
            return Err(QuizError::EmptyTopic);
        }
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&self.num_questions) {
            return Err(QuizError::QuestionCountOutOfRange(self.num_questions));
        }
        Ok(())
    }

    /// Whether answers are revealed one at a time
    pub fn is_interactive(&self) -> bool {
        self.answer_mode == AnswerMode::Interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(QuizConfig::default().validate().is_ok());
    }

    #[test]
    fn new_trims_topic() {
        let config = QuizConfig::new("  Astronomy ");
        assert_eq!(config.topic, "Astronomy");
    }

    #[test]
    fn blank_topic_is_rejected() {
        let config = QuizConfig::new("   ");
        assert_eq!(config.validate(), Err(QuizError::EmptyTopic));
    }

    #[test]
    fn question_count_bounds_are_inclusive() {
        assert!(QuizConfig::new("Art").with_num_questions(5).validate().is_ok());
        assert!(QuizConfig::new("Art").with_num_questions(30).validate().is_ok());
        assert_eq!(
            QuizConfig::new("Art").with_num_questions(4).validate(),
            Err(QuizError::QuestionCountOutOfRange(4))
        );
        assert_eq!(
            QuizConfig::new("Art").with_num_questions(31).validate(),
            Err(QuizError::QuestionCountOutOfRange(31))
        );
    }

    #[test]
    fn enums_parse_aliases() {
        assert_eq!("MC".parse::<ResponseType>(), Ok(ResponseType::MultipleChoice));
        assert_eq!("true-false".parse::<ResponseType>(), Ok(ResponseType::TrueFalse));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("b".parse::<AnswerMode>(), Ok(AnswerMode::Batch));
        assert!("sometimes".parse::<AnswerMode>().is_err());
    }

    #[test]
    fn cycle_wraps_in_both_directions() {
        let all = Difficulty::all();
        assert_eq!(cycle(all, Difficulty::Mixed, true), Difficulty::Easy);
        assert_eq!(cycle(all, Difficulty::Easy, false), Difficulty::Mixed);
        assert_eq!(cycle(all, Difficulty::Easy, true), Difficulty::Medium);
    }

    #[test]
    fn config_serializes_with_kebab_case_response_type() {
        let config = QuizConfig::default().with_response_type(ResponseType::TrueFalse);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"true-false\""));
        assert!(json.contains("\"medium\""));
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{"difficulty":"hard","topic":"Music","num_questions":12,"response_type":"mixed","answer_mode":"batch"}"#;
        let config: QuizConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.response_type, ResponseType::Mixed);
        assert_eq!(config.answer_mode, AnswerMode::Batch);
        assert_eq!(config.num_questions, 12);
    }
}
