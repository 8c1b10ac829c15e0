//! # Persona Core
//!
//! Deterministic psychometric scoring engine.
//!
//! ```text
//! AnswerSet ──► ScoreAggregator ──► TraitScoreSet ─┬─► ResultSummarizer ─► ResultSummary
//!                                                  ├─► AxisClassifier ×4 ─► MbtiComposer ─► MbtiResult
//!                                                  └─► RoleFitScorer ×9 ─► BelbinRanker ─► BelbinResult
//! ```
//!
//! Every stage is a pure function over immutable input. There is no I/O,
//! no logging, no randomness and no floating-point arithmetic: averages,
//! percentages and confidences are fixed-point integers that only become
//! `f64` at the serde boundary. Independent evaluations can run on any
//! number of threads without coordination.
//!
//! [`Assessment::evaluate`] runs the whole pipeline in one call.

pub mod aggregate;
pub mod answers;
pub mod belbin;
pub mod error;
pub mod mbti;
pub mod primitives;
pub mod questionnaire;
pub mod report;
pub mod summary;

pub use aggregate::{ScoreAggregator, TraitAverages, TraitScore, TraitScoreSet};
pub use answers::AnswerSet;
pub use belbin::{
    BelbinAnalysis, BelbinRanker, BelbinResult, BelbinRole, RankedRole, RoleFitResult,
    RoleFitScorer, RoleProfile, TeamAdvice,
};
pub use error::{Error, Result};
pub use mbti::{
    Axis, AxisClassifier, AxisResult, Letter, MbtiAnalysis, MbtiComposer, MbtiProfile, MbtiResult,
    MbtiType,
};
pub use primitives::{AverageChange, Confidence, Dimension, PercentChange, Percentage, TraitAverage};
pub use questionnaire::{
    answer_label, CompletionReport, Item, ProgressInfo, QuestionnaireDefinition, ANSWER_OPTIONS,
};
pub use report::{Assessment, NarrativeBrief};
pub use summary::{
    compare_results, DimensionScore, PersonalityType, RankedDimension, ResultSummarizer,
    ResultSummary, TraitComparison, Trend,
};
