//! Error types for quiz configuration and session handling

use thiserror::Error;

use super::config::{MAX_QUESTIONS, MIN_QUESTIONS};

/// Errors that can occur while configuring or running a quiz
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Topic was empty after trimming
    #[error("Topic must not be empty")]
    EmptyTopic,

    /// Question count outside of the supported range
    #[error("Number of questions must be between {MIN_QUESTIONS} and {MAX_QUESTIONS}, got {0}")]
    QuestionCountOutOfRange(usize),

    /// Username was empty after trimming
    #[error("Name must not be empty")]
    EmptyUsername,

    /// The session already produced its result
    #[error("Quiz is already finished")]
    SessionFinished,

    /// The current question already has an answer recorded
    #[error("Question {0} has already been answered")]
    AlreadyAnswered(usize),

    /// Multiple choice option index is not one of the four options
    #[error("Option {0} does not exist")]
    InvalidOption(usize),

    /// A true/false verdict was given for a multiple choice question or vice versa
    #[error("Answer does not match the question type")]
    AnswerKindMismatch,
}

impl QuizError {
    /// Check if this error was raised by a call the session state did not allow
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            QuizError::SessionFinished
                | QuizError::AlreadyAnswered(_)
                | QuizError::InvalidOption(_)
                | QuizError::AnswerKindMismatch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_bounds() {
        let msg = QuizError::QuestionCountOutOfRange(42).to_string();
        assert_eq!(msg, "Number of questions must be between 5 and 30, got 42");
    }

    #[test]
    fn only_session_misuse_is_a_session_error() {
        assert!(!QuizError::EmptyTopic.is_session_error());
        assert!(!QuizError::QuestionCountOutOfRange(3).is_session_error());
        assert!(QuizError::AlreadyAnswered(2).is_session_error());
        assert!(QuizError::AnswerKindMismatch.is_session_error());
        assert!(!QuizError::EmptyUsername.is_session_error());
    }
}
