use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quizdeck::quiz::{AnswerMode, Difficulty, QuizConfig, ResponseType, TOPICS};
use quizdeck::{App, Config};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quizdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a quiz straight away, skipping login and setup
    Play {
        /// Player name
        #[arg(long, env = "USER", default_value = "player")]
        name: String,
        /// Quiz topic (any text, see `topics` for the built-in list)
        #[arg(long)]
        topic: Option<String>,
        /// easy, medium, hard or mixed
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Number of questions (5-30)
        #[arg(short = 'n', long)]
        questions: Option<usize>,
        /// multiple-choice (mc), true-false (tf) or mixed
        #[arg(long = "type")]
        response_type: Option<ResponseType>,
        /// interactive or batch
        #[arg(long)]
        mode: Option<AnswerMode>,
        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the built-in topics
    Topics,
    /// Show the config file location and contents
    Config,
}

/// Log to a file while the TUI owns the terminal, to stderr otherwise
fn init_logging(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "quizdeck=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = Config::log_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).with_ansi(false).with_writer(Mutex::new(file)))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let tui = matches!(cli.command, None | Some(Commands::Play { .. }));
    init_logging(tui)?;

    match cli.command {
        Some(Commands::Topics) => {
            for topic in TOPICS {
                println!("{}", topic);
            }
        }
        Some(Commands::Config) => {
            let path = Config::config_path()?;
            let config = Config::load()?;
            println!("{}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Some(Commands::Play { name, topic, difficulty, questions, response_type, mode, seed }) => {
            let config = Config::load()?;
            let defaults = &config.defaults;
            let quiz = QuizConfig::new(topic.unwrap_or_else(|| defaults.topic.clone()))
                .with_difficulty(difficulty.unwrap_or(defaults.difficulty))
                .with_num_questions(questions.unwrap_or(defaults.num_questions))
                .with_response_type(response_type.unwrap_or(defaults.response_type))
                .with_answer_mode(mode.unwrap_or(defaults.answer_mode));
            quiz.validate()?;
            if name.trim().is_empty() {
                anyhow::bail!("Player name cannot be empty");
            }

            let mut app = App::new(config, seed)?;
            app.start_quiz(&name, quiz);
            app.run().await?;
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let mut app = App::new(config, None)?;
            app.run().await?;
        }
    }

    Ok(())
}
