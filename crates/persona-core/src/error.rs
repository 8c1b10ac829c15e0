//! # Error Types
//!
//! Every error the engine reports is an input problem. The engine performs
//! no I/O, so nothing here is retryable: the caller must fix its input.

use thiserror::Error;

/// Errors reported by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A Likert response outside `[1, 5]`.
    #[error("answer to question {question} is {value}, expected 1-5")]
    AnswerOutOfRange { question: u16, value: i64 },

    /// A question id that the questionnaire does not define.
    #[error("question {question} is not part of the questionnaire")]
    UnknownQuestion { question: u16 },

    /// The answer set does not have the expected shape.
    #[error("malformed answer set: {0}")]
    MalformedAnswers(String),

    /// A supplied questionnaire definition is inconsistent.
    #[error("invalid questionnaire: {0}")]
    InvalidQuestionnaire(String),

    /// NaN or an infinity was handed in as a trait average.
    #[error("trait average must be a finite number")]
    NonFiniteTraitAverage,
}

pub type Result<T> = std::result::Result<T, Error>;
