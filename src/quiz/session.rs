//! Quiz session state machine
//!
//! A session walks forward through a fixed question list. Each question is
//! answered at most once. In interactive mode the answer is revealed and the
//! caller advances explicitly; in batch mode submitting advances immediately.
//! Finishing the last question scores the session exactly once.

use std::time::{Duration, Instant};

use super::config::QuizConfig;
use super::error::QuizError;
use super::question::{Answer, OPTION_COUNT, Question};
use super::scoring::{self, QuizResult};

/// Where the session currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    InProgress {
        current_index: usize,
        /// Feedback for the current question is on screen
        revealed: bool,
    },
    Finished(QuizResult),
}

/// What a submit or advance call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Interactive mode: the answer was recorded and feedback is shown
    Revealed { correct: bool },
    /// Moved on to the question at this index
    Advanced(usize),
    /// The last question was passed and the result is available
    Finished,
    /// The session had already finished; nothing changed
    AlreadyFinished,
}

/// One attempt at a configured quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
    config: QuizConfig,
    questions: Vec<Question>,
    answers: Vec<Option<Answer>>,
    started_at: Instant,
    state: SessionState,
}

impl QuizSession {
    /// Start a session over generated questions
    pub fn start(config: QuizConfig, questions: Vec<Question>, now: Instant) -> Self {
        let answers = vec![None; questions.len()];
        let state = if questions.is_empty() {
            SessionState::Finished(scoring::score(&config, &questions, &answers, Duration::ZERO))
        } else {
            SessionState::InProgress { current_index: 0, revealed: false }
        };

        tracing::info!(
            topic = %config.topic,
            difficulty = %config.difficulty,
            questions = questions.len(),
            mode = %config.answer_mode,
            "Quiz session started"
        );

        Self { config, questions, answers, started_at: now, state }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<Answer>] {
        &self.answers
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished(_))
    }

    /// Index of the question on screen, `None` once finished
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { current_index, .. } => Some(current_index),
            SessionState::Finished(_) => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    /// Answer recorded for the current question, if any
    pub fn current_answer(&self) -> Option<Answer> {
        self.current_index().and_then(|i| self.answers[i])
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state, SessionState::InProgress { revealed: true, .. })
    }

    /// Fraction of the quiz reached, counting the current question
    pub fn progress(&self) -> f64 {
        match self.state {
            SessionState::InProgress { current_index, .. } => {
                (current_index + 1) as f64 / self.questions.len() as f64
            }
            SessionState::Finished(_) => 1.0,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Result of the session once finished
    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            SessionState::Finished(result) => Some(result),
            SessionState::InProgress { .. } => None,
        }
    }

    /// Consume the session, returning its result if finished
    pub fn into_result(self) -> Option<QuizResult> {
        match self.state {
            SessionState::Finished(result) => Some(result),
            SessionState::InProgress { .. } => None,
        }
    }

    /// Record an answer for the current question
    pub fn submit(&mut self, answer: Answer, now: Instant) -> Result<Transition, QuizError> {
        let SessionState::InProgress { current_index, .. } = self.state else {
            return Err(QuizError::SessionFinished);
        };

        if self.answers[current_index].is_some() {
            return Err(QuizError::AlreadyAnswered(current_index));
        }

        let question = &self.questions[current_index];
        if !question.accepts(&answer) {
            return Err(QuizError::AnswerKindMismatch);
        }
        if let Answer::Choice(i) = answer {
            if i >= OPTION_COUNT {
                return Err(QuizError::InvalidOption(i));
            }
        }

        let correct = question.is_correct(&answer);
        self.answers[current_index] = Some(answer);
        tracing::debug!(question = current_index, correct, "Answer recorded");

        if self.config.is_interactive() {
            self.state = SessionState::InProgress { current_index, revealed: true };
            Ok(Transition::Revealed { correct })
        } else {
            Ok(self.advance(now))
        }
    }

    /// Move past the current question, finishing after the last one
    pub fn advance(&mut self, now: Instant) -> Transition {
        let SessionState::InProgress { current_index, .. } = self.state else {
            return Transition::AlreadyFinished;
        };

        if current_index + 1 < self.questions.len() {
            self.state = SessionState::InProgress { current_index: current_index + 1, revealed: false };
            return Transition::Advanced(current_index + 1);
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        let result = scoring::score(&self.config, &self.questions, &self.answers, elapsed);
        tracing::info!(
            correct = result.correct_answers,
            total = result.total_questions,
            seconds = result.time_taken_secs,
            "Quiz session finished"
        );
        self.state = SessionState::Finished(result);
        Transition::Finished
    }
}
