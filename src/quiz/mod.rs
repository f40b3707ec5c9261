//! Quiz engine
//!
//! Question generation, the per-session state machine, and scoring.

pub mod config;
pub mod error;
pub mod generator;
pub mod question;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use config::{AnswerMode, Difficulty, QuizConfig, ResponseType, TOPICS};
pub use error::QuizError;
pub use generator::generate;
pub use question::{Answer, Question};
pub use scoring::{Grade, QuestionDetail, QuizResult};
pub use session::{QuizSession, SessionState, Transition};
