//! Application state definitions

use std::time::Instant;

use crate::context::SessionContext;
use crate::quiz::config::{MAX_QUESTIONS, MIN_QUESTIONS, cycle};
use crate::quiz::{AnswerMode, Difficulty, QuizConfig, QuizSession, ResponseType, TOPICS};
use crate::theme::Theme;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
    Setup,
    Quiz,
    Results,
}

/// Single-line text input with a character cursor
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Input buffer
    pub value: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl TextInput {
    /// Maximum number of characters accepted
    const MAX_LEN: usize = 40;

    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.value.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        if self.char_count() >= Self::MAX_LEN {
            return;
        }
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.value.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.value.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }
}

/// Fields of the setup form, top to bottom
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SetupField {
    #[default]
    Topic,
    CustomTopic,
    Difficulty,
    Questions,
    ResponseType,
    AnswerMode,
    Start,
}

impl SetupField {
    pub fn all() -> &'static [SetupField] {
        &[
            Self::Topic,
            Self::CustomTopic,
            Self::Difficulty,
            Self::Questions,
            Self::ResponseType,
            Self::AnswerMode,
            Self::Start,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Topic => "Topic",
            Self::CustomTopic => "Custom topic",
            Self::Difficulty => "Difficulty",
            Self::Questions => "Questions",
            Self::ResponseType => "Response type",
            Self::AnswerMode => "Answer mode",
            Self::Start => "Start",
        }
    }
}

/// State of the quiz setup form
#[derive(Debug, Clone)]
pub struct SetupState {
    /// Focused field
    pub field: SetupField,
    /// Index into the fixed topic list
    pub topic_index: usize,
    /// Overrides the listed topic when not blank
    pub custom_topic: TextInput,
    pub difficulty: Difficulty,
    pub num_questions: usize,
    pub response_type: ResponseType,
    pub answer_mode: AnswerMode,
}

impl Default for SetupState {
    fn default() -> Self {
        Self::from_config(&QuizConfig::default())
    }
}

impl SetupState {
    /// Prefill the form from a config, keeping unlisted topics as custom
    pub fn from_config(config: &QuizConfig) -> Self {
        let listed = TOPICS.iter().position(|t| *t == config.topic);
        let mut custom_topic = TextInput::default();
        if listed.is_none() {
            for c in config.topic.chars() {
                custom_topic.insert_char(c);
            }
        }

        Self {
            field: SetupField::Topic,
            topic_index: listed.unwrap_or(0),
            custom_topic,
            difficulty: config.difficulty,
            num_questions: config.num_questions.clamp(MIN_QUESTIONS, MAX_QUESTIONS),
            response_type: config.response_type,
            answer_mode: config.answer_mode,
        }
    }

    /// Topic the quiz will use
    pub fn topic(&self) -> &str {
        match self.custom_topic.trimmed() {
            "" => TOPICS[self.topic_index],
            custom => custom,
        }
    }

    pub fn to_config(&self) -> QuizConfig {
        QuizConfig::new(self.topic())
            .with_difficulty(self.difficulty)
            .with_num_questions(self.num_questions)
            .with_response_type(self.response_type)
            .with_answer_mode(self.answer_mode)
    }

    pub fn next_field(&mut self) {
        self.field = cycle(SetupField::all(), self.field, true);
    }

    pub fn previous_field(&mut self) {
        self.field = cycle(SetupField::all(), self.field, false);
    }

    /// Change the focused field's value one step
    pub fn step_value(&mut self, forward: bool) {
        match self.field {
            SetupField::Topic => {
                let len = TOPICS.len();
                self.topic_index =
                    if forward { (self.topic_index + 1) % len } else { (self.topic_index + len - 1) % len };
            }
            SetupField::Difficulty => {
                self.difficulty = cycle(Difficulty::all(), self.difficulty, forward);
            }
            SetupField::Questions => {
                self.num_questions = if forward {
                    (self.num_questions + 1).min(MAX_QUESTIONS)
                } else {
                    self.num_questions.saturating_sub(1).max(MIN_QUESTIONS)
                };
            }
            SetupField::ResponseType => {
                self.response_type = cycle(ResponseType::all(), self.response_type, forward);
            }
            SetupField::AnswerMode => {
                self.answer_mode = cycle(AnswerMode::all(), self.answer_mode, forward);
            }
            SetupField::CustomTopic | SetupField::Start => {}
        }
    }
}

/// A running quiz plus its on-screen selection
#[derive(Debug, Clone)]
pub struct QuizView {
    pub session: QuizSession,
    /// Highlighted option for multiple choice
    pub selected_option: usize,
    /// When the revealed question moves on by itself
    pub auto_advance_at: Option<Instant>,
}

impl QuizView {
    pub fn new(session: QuizSession) -> Self {
        Self { session, selected_option: 0, auto_advance_at: None }
    }
}

/// State for the results review list
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    /// Review entries scrolled past
    pub scroll_offset: usize,
}

/// Status line message
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
    pub is_error: bool,
}

impl StatusLine {
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.is_error = false;
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// User, active quiz config, last result, and run-wide stats
    pub context: SessionContext,

    /// Name typed on the login screen
    pub login: TextInput,

    /// Setup form
    pub setup: SetupState,

    /// Quiz in progress, if any
    pub quiz: Option<QuizView>,

    /// Results review state
    pub results: ResultsState,

    /// Status or error message shown at the bottom
    pub status: StatusLine,

    /// Palette in use
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::default();
        for c in "ada".chars() {
            input.insert_char(c);
        }
        input.move_start();
        input.insert_char('L');
        assert_eq!(input.value, "Lada");

        input.move_end();
        input.delete_char();
        assert_eq!(input.value, "Lad");

        input.move_start();
        input.delete_char_forward();
        assert_eq!(input.value, "ad");
    }

    #[test]
    fn text_input_handles_multibyte() {
        let mut input = TextInput::default();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_char();
        assert_eq!(input.value, "hllo");
    }

    #[test]
    fn text_input_caps_length() {
        let mut input = TextInput::default();
        for _ in 0..100 {
            input.insert_char('x');
        }
        assert_eq!(input.value.len(), TextInput::MAX_LEN);
    }

    #[test]
    fn custom_topic_overrides_listed_topic() {
        let mut setup = SetupState::default();
        assert_eq!(setup.topic(), "Science");

        for c in "  Jazz ".chars() {
            setup.custom_topic.insert_char(c);
        }
        assert_eq!(setup.topic(), "Jazz");
        assert_eq!(setup.to_config().topic, "Jazz");
    }

    #[test]
    fn question_count_stays_in_range() {
        let mut setup = SetupState { field: SetupField::Questions, num_questions: 30, ..Default::default() };
        setup.step_value(true);
        assert_eq!(setup.num_questions, 30);

        setup.num_questions = 5;
        setup.step_value(false);
        assert_eq!(setup.num_questions, 5);
    }

    #[test]
    fn from_config_keeps_unlisted_topic_as_custom() {
        let setup = SetupState::from_config(&QuizConfig::new("Chess").with_num_questions(99));
        assert_eq!(setup.custom_topic.value, "Chess");
        assert_eq!(setup.num_questions, MAX_QUESTIONS);
        assert_eq!(setup.topic(), "Chess");
    }

    #[test]
    fn field_navigation_wraps() {
        let mut setup = SetupState::default();
        setup.previous_field();
        assert_eq!(setup.field, SetupField::Start);
        setup.next_field();
        assert_eq!(setup.field, SetupField::Topic);
    }

    #[test]
    fn topic_cycles_through_list() {
        let mut setup = SetupState::default();
        setup.step_value(false);
        assert_eq!(setup.topic(), "Art");
        setup.step_value(true);
        setup.step_value(true);
        assert_eq!(setup.topic(), "History");
    }
}
