//! Quizdeck - a terminal quiz game
//!
//! Quizdeck generates quizzes from built-in question templates, walks the
//! player through them one question at a time, and scores the result with
//! a grade, weak-topic analysis, and a full answer review.

pub mod app;
pub mod config;
pub mod context;
pub mod quiz;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use context::SessionContext;
pub use theme::Theme;
