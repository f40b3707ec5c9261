//! Cross-screen session context
//!
//! Holds who is logged in, the active quiz configuration, the last result,
//! and statistics accumulated over every quiz completed during this run.
//! Nothing here is written to disk.

use serde::{Deserialize, Serialize};

use crate::quiz::scoring::score_percentage;
use crate::quiz::{Difficulty, Grade, QuizConfig, QuizError, QuizResult};

/// Totals over all completed quizzes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_quizzes: u32,
    pub total_correct: usize,
    pub total_questions: usize,
    pub achievements: u32,
}

impl UserStats {
    /// Overall percentage of questions answered correctly
    pub fn accuracy(&self) -> u32 {
        score_percentage(self.total_correct, self.total_questions)
    }

    fn record(&mut self, result: &QuizResult) {
        self.total_quizzes += 1;
        self.total_correct += result.correct_answers;
        self.total_questions += result.total_questions;
    }
}

/// A completed quiz as listed on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub topic: String,
    pub difficulty: Difficulty,
    /// Score percentage (0-100)
    pub score: u32,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub time_taken_secs: u64,
    pub grade: Grade,
}

impl HistoryEntry {
    fn new(config: &QuizConfig, result: &QuizResult) -> Self {
        Self {
            topic: config.topic.clone(),
            difficulty: config.difficulty,
            score: result.score_percentage(),
            total_questions: result.total_questions,
            correct_answers: result.correct_answers,
            time_taken_secs: result.time_taken_secs,
            grade: result.grade(),
        }
    }
}

/// State shared between screens for the lifetime of the application
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    username: String,
    quiz_config: Option<QuizConfig>,
    quiz_result: Option<QuizResult>,
    user_stats: UserStats,
    history: Vec<HistoryEntry>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_logged_in(&self) -> bool {
        !self.username.is_empty()
    }

    pub fn quiz_config(&self) -> Option<&QuizConfig> {
        self.quiz_config.as_ref()
    }

    pub fn quiz_result(&self) -> Option<&QuizResult> {
        self.quiz_result.as_ref()
    }

    pub fn user_stats(&self) -> &UserStats {
        &self.user_stats
    }

    /// Completed quizzes, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn login(&mut self, name: &str) -> Result<(), QuizError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(QuizError::EmptyUsername);
        }
        self.username = name.to_string();
        tracing::info!(user = %self.username, "Logged in");
        Ok(())
    }

    /// Forget the user and any quiz in flight. Stats are kept for the run.
    pub fn logout(&mut self) {
        tracing::info!(user = %self.username, "Logged out");
        self.username.clear();
        self.quiz_config = None;
        self.quiz_result = None;
    }

    pub fn start_quiz(&mut self, config: QuizConfig) {
        self.quiz_config = Some(config);
        self.quiz_result = None;
    }

    /// Store a finished result and fold it into the stats
    pub fn complete_quiz(&mut self, result: QuizResult) {
        self.user_stats.record(&result);
        if let Some(config) = &self.quiz_config {
            self.history.push(HistoryEntry::new(config, &result));
        }
        tracing::info!(
            quizzes = self.user_stats.total_quizzes,
            accuracy = self.user_stats.accuracy(),
            "Quiz completed"
        );
        self.quiz_result = Some(result);
    }

    pub fn reset_quiz(&mut self) {
        self.quiz_config = None;
        self.quiz_result = None;
    }
}
