//! # Persona
//!
//! Command-line front end of the Persona scoring engine.
//!
//! Logging is configured through `RUST_LOG` (default `persona=info`) and
//! written to stderr; stdout carries only command output.

use clap::{Parser, Subcommand};
use persona::cli;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "persona", version, about = "Big Five, MBTI and Belbin scoring")]
struct Cli {
    /// Questionnaire definition to use instead of the standard one (JSON).
    #[arg(long, global = true)]
    questionnaire: Option<PathBuf>,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the questionnaire items and the answer scale.
    Questions,

    /// Per-dimension trait statistics.
    Score {
        /// Answer file (JSON object of question id -> 1..5).
        answers: PathBuf,
    },

    /// Highest and lowest traits and the personality label.
    Summary { answers: PathBuf },

    /// MBTI type, axis breakdown and analysis.
    Mbti { answers: PathBuf },

    /// Belbin team-role ranking and advice.
    Belbin { answers: PathBuf },

    /// Full report.
    Report { answers: PathBuf },

    /// Completion and progress through the questionnaire.
    Progress {
        answers: PathBuf,

        /// Question the respondent is on (defaults to the first unanswered).
        #[arg(long)]
        current: Option<u16>,
    },

    /// Compare two answer files.
    Compare {
        /// Earlier answers.
        old: PathBuf,

        /// Later answers.
        new: PathBuf,
    },

    /// Prompt material for an external narrative generator.
    Brief { answers: PathBuf },

    /// List MBTI profiles, or show one.
    Types {
        /// Four-letter code, e.g. INTJ.
        code: Option<String>,
    },

    /// List Belbin roles, or show one.
    Roles {
        /// Role name, e.g. "Monitor Evaluator".
        name: Option<String>,
    },

    /// Score a JSONL file with one answer object per line.
    Batch { path: PathBuf },
}

fn run(args: Cli) -> cli::Result<String> {
    let Cli {
        questionnaire,
        json,
        command,
    } = args;
    let definition = || cli::load_questionnaire(questionnaire.as_deref());

    match command {
        Commands::Questions => cli::cmd_questions(&definition()?, json),
        Commands::Score { answers } => cli::cmd_score(&definition()?, &answers, json),
        Commands::Summary { answers } => cli::cmd_summary(&definition()?, &answers, json),
        Commands::Mbti { answers } => cli::cmd_mbti(&definition()?, &answers, json),
        Commands::Belbin { answers } => cli::cmd_belbin(&definition()?, &answers, json),
        Commands::Report { answers } => cli::cmd_report(&definition()?, &answers, json),
        Commands::Progress { answers, current } => {
            cli::cmd_progress(&definition()?, &answers, current, json)
        }
        Commands::Compare { old, new } => cli::cmd_compare(&definition()?, &old, &new, json),
        Commands::Brief { answers } => cli::cmd_brief(&definition()?, &answers, json),
        Commands::Batch { path } => cli::cmd_batch(&definition()?, &path, json),
        Commands::Types { code } => cli::cmd_types(code.as_deref(), json),
        Commands::Roles { name } => cli::cmd_roles(name.as_deref(), json),
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("persona=info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
