//! # CLI Commands
//!
//! File-facing side of the scoring engine. Each `cmd_*` function loads its
//! inputs, runs the engine and returns the rendered output (plain text or
//! pretty JSON); `main.rs` only prints it.
//!
//! Answer files are JSON objects mapping question ids to Likert values:
//!
//! ```text
//! {"1": 4, "2": 5, "3": null, ...}
//! ```
//!
//! `null` marks an unanswered question. Batch files hold one such object per
//! line.

use persona_core::{
    compare_results, AnswerSet, Assessment, BelbinRole, Item, MbtiProfile, QuestionnaireDefinition,
    RoleProfile, ScoreAggregator, TraitComparison, ANSWER_OPTIONS,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Engine(#[from] persona_core::Error),

    #[error("unknown MBTI type '{0}'")]
    UnknownType(String),

    #[error("unknown Belbin role '{0}'")]
    UnknownRole(String),

    #[error("failed to render output: {0}")]
    Render(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

// =============================================================================
// LOADING
// =============================================================================

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json(path: &Path) -> Result<Value> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Questionnaire override file: a bare item list or `{"items": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionnaireFile {
    Items(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

/// Load the questionnaire, falling back to the standard one.
pub fn load_questionnaire(path: Option<&Path>) -> Result<QuestionnaireDefinition> {
    let Some(path) = path else {
        return Ok(QuestionnaireDefinition::standard());
    };

    let content = read_file(path)?;
    let file: QuestionnaireFile = serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let items = match file {
        QuestionnaireFile::Items(items) | QuestionnaireFile::Wrapped { items } => items,
    };

    let definition = QuestionnaireDefinition::from_items(items)?;
    tracing::info!("Loaded questionnaire override from {}", path.display());
    Ok(definition)
}

/// Turn a parsed JSON object into an answer set.
///
/// Keys must be positive integers, values integers or `null`.
pub fn parse_answers(value: &Value) -> Result<AnswerSet> {
    let object = value.as_object().ok_or_else(|| {
        persona_core::Error::MalformedAnswers("expected a JSON object of id -> answer".to_string())
    })?;

    let mut answers = AnswerSet::new();
    for (key, raw) in object {
        let question: u16 = key.trim().parse().map_err(|_| {
            persona_core::Error::MalformedAnswers(format!("'{}' is not a question id", key))
        })?;
        if raw.is_null() {
            continue;
        }
        let answer = raw.as_i64().ok_or_else(|| {
            persona_core::Error::MalformedAnswers(format!(
                "answer to question {} must be an integer, found {}",
                question, raw
            ))
        })?;
        answers.insert(question, answer)?;
    }
    Ok(answers)
}

/// Read and validate an answer file against the questionnaire.
pub fn load_answers(path: &Path, definition: &QuestionnaireDefinition) -> Result<AnswerSet> {
    let answers = parse_answers(&read_json(path)?)?;
    definition.check_answers(&answers)?;
    tracing::debug!("Loaded {} answers from {}", answers.len(), path.display());
    Ok(answers)
}

fn evaluate(path: &Path, definition: &QuestionnaireDefinition) -> Result<Assessment> {
    let answers = load_answers(path, definition)?;
    let assessment = Assessment::evaluate(definition, &answers)?;
    if !assessment.completion.is_complete {
        tracing::warn!(
            "{} is incomplete: {}/{} answered",
            path.display(),
            assessment.completion.answered_count,
            assessment.completion.total_count
        );
    }
    if assessment.mbti.profile_fallback {
        tracing::warn!(
            "No profile for {}, using default {}",
            assessment.mbti.mbti_type,
            assessment.mbti.profile.code
        );
    }
    Ok(assessment)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(CliError::Render)
}

// =============================================================================
// COMMANDS
// =============================================================================

/// List the questionnaire items and the answer scale.
pub fn cmd_questions(definition: &QuestionnaireDefinition, json: bool) -> Result<String> {
    if json {
        return to_json(&serde_json::json!({
            "items": definition.items(),
            "options": ANSWER_OPTIONS,
        }));
    }

    let mut output = String::new();
    for item in definition.items() {
        output.push_str(&format!(
            "{:>2}. [{} {}] {}\n",
            item.id,
            item.dimension.key(),
            item.dimension_order,
            item.text
        ));
    }
    output.push('\n');
    let scale: Vec<String> = ANSWER_OPTIONS
        .iter()
        .map(|o| format!("{} = {}", o.value, o.label))
        .collect();
    output.push_str(&format!("Scale: {}\n", scale.join(", ")));
    Ok(output)
}

/// Per-dimension statistics.
pub fn cmd_score(definition: &QuestionnaireDefinition, answers: &Path, json: bool) -> Result<String> {
    let answers = load_answers(answers, definition)?;
    let scores = ScoreAggregator::aggregate(definition, &answers);
    if json {
        return to_json(&scores);
    }

    let mut output = String::new();
    for (dimension, score) in scores.iter() {
        output.push_str(&format!(
            "{:<18} avg {}  {:>6}  total {:>2}  answered {}/{}\n",
            dimension.name(),
            score.average,
            score.percentage.to_string(),
            score.total,
            score.count,
            score.max_possible
        ));
    }
    Ok(output)
}

/// Highest/lowest trait, overall average and label.
pub fn cmd_summary(definition: &QuestionnaireDefinition, answers: &Path, json: bool) -> Result<String> {
    let summary = evaluate(answers, definition)?.summary;
    if json {
        return to_json(&summary);
    }

    let mut output = format!(
        "Personality: {}\nOverall average: {}\nHighest: {} ({})\nLowest: {} ({})\n",
        summary.personality_type,
        summary.total_average,
        summary.highest.name,
        summary.highest.score,
        summary.lowest.name,
        summary.lowest.score
    );
    output.push_str("Ranking:\n");
    for (rank, entry) in summary.dimensions.iter().enumerate() {
        output.push_str(&format!("  {}. {} {}\n", rank + 1, entry.name, entry.average));
    }
    Ok(output)
}

/// MBTI classification with its analysis.
pub fn cmd_mbti(definition: &QuestionnaireDefinition, answers: &Path, json: bool) -> Result<String> {
    let mbti = evaluate(answers, definition)?.mbti;
    if json {
        return to_json(&mbti);
    }

    let mut output = format!(
        "{} - {} ({}% confidence)\n{}\n\n",
        mbti.mbti_type, mbti.profile.name, mbti.confidence, mbti.analysis.overview
    );
    for axis in persona_core::Axis::ALL {
        let result = mbti.dimensions.get(axis);
        output.push_str(&format!(
            "  {:?}: {} ({}, score {}, confidence {})\n      {}\n",
            axis, result.letter, result.full_type, result.score, result.confidence, result.description
        ));
    }
    push_list(&mut output, "Strengths", &mbti.analysis.strengths);
    push_list(&mut output, "Growth areas", &mbti.analysis.development);
    push_list(&mut output, "Careers", &mbti.analysis.career);
    push_list(&mut output, "Relationships", &mbti.analysis.relationships);
    push_list(&mut output, "Work style", &mbti.analysis.work_style);
    Ok(output)
}

/// Belbin ranking with its analysis.
pub fn cmd_belbin(definition: &QuestionnaireDefinition, answers: &Path, json: bool) -> Result<String> {
    let belbin = evaluate(answers, definition)?.belbin;
    if json {
        return to_json(&belbin);
    }

    let mut output = format!("{}\n\n", belbin.analysis.overview);
    for fit in &belbin.all_roles {
        output.push_str(&format!("  {:<22} {:>3}  [{}]\n", fit.role, fit.score, fit.confidence));
        for reason in &fit.reasoning {
            output.push_str(&format!("      - {}\n", reason));
        }
    }
    output.push('\n');
    for advice in &belbin.team_contribution {
        output.push_str(&format!("{}: {}\n", advice.title, advice.content));
    }
    Ok(output)
}

/// The full boxed report.
pub fn cmd_report(definition: &QuestionnaireDefinition, answers: &Path, json: bool) -> Result<String> {
    let assessment = evaluate(answers, definition)?;
    if json {
        return to_json(&assessment);
    }
    Ok(assessment.to_text())
}

/// Completion and progress through the questionnaire.
pub fn cmd_progress(
    definition: &QuestionnaireDefinition,
    answers: &Path,
    current: Option<u16>,
    json: bool,
) -> Result<String> {
    let answers = load_answers(answers, definition)?;
    let completion = definition.completion(&answers);
    let current = current.unwrap_or_else(|| {
        completion
            .unanswered
            .first()
            .copied()
            .unwrap_or(definition.len() as u16)
    });
    let progress = definition.progress(&answers, current);

    if json {
        return to_json(&serde_json::json!({
            "completion": completion,
            "progress": progress,
        }));
    }

    let mut output = format!("Progress: {}\nCurrent question: {}\n", progress.progress_text, progress.current);
    if completion.is_complete {
        output.push_str("Complete\n");
    } else {
        let ids: Vec<String> = completion.unanswered.iter().map(u16::to_string).collect();
        output.push_str(&format!("Unanswered ({}): {}\n", progress.remaining, ids.join(", ")));
    }
    Ok(output)
}

/// Compare two answer files dimension by dimension.
pub fn cmd_compare(
    definition: &QuestionnaireDefinition,
    old: &Path,
    new: &Path,
    json: bool,
) -> Result<String> {
    let before = ScoreAggregator::aggregate(definition, &load_answers(old, definition)?);
    let after = ScoreAggregator::aggregate(definition, &load_answers(new, definition)?);
    let comparisons = compare_results(&before, &after);
    if json {
        return to_json(&comparisons);
    }

    Ok(comparisons.iter().map(format_comparison).collect())
}

fn format_comparison(c: &TraitComparison) -> String {
    let percent = c
        .change_percent
        .map(|p| p.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "{:<18} {} -> {}  {} ({})  {:?}\n",
        c.dimension.name(),
        c.old,
        c.new,
        c.change,
        percent,
        c.trend
    )
}

/// Prompt material for the external narrative generator.
pub fn cmd_brief(definition: &QuestionnaireDefinition, answers: &Path, json: bool) -> Result<String> {
    let brief = evaluate(answers, definition)?.brief();
    if json {
        return to_json(&serde_json::json!({
            "brief": brief,
            "basicPrompt": brief.basic_prompt(),
            "advancedPrompt": brief.advanced_prompt(),
        }));
    }
    Ok(format!(
        "{}\n---\n\n{}",
        brief.basic_prompt(),
        brief.advanced_prompt()
    ))
}

/// List the MBTI profiles, or show one.
pub fn cmd_types(code: Option<&str>, json: bool) -> Result<String> {
    let profiles: Vec<&MbtiProfile> = match code {
        Some(code) => vec![MbtiProfile::find(code).ok_or_else(|| CliError::UnknownType(code.to_string()))?],
        None => MbtiProfile::all().iter().collect(),
    };
    if json {
        return match profiles.as_slice() {
            [single] if code.is_some() => to_json(single),
            _ => to_json(&profiles),
        };
    }

    let mut output = String::new();
    for profile in &profiles {
        output.push_str(&format!("{}  {:<13} {}\n", profile.code, profile.name, profile.description));
        if code.is_some() {
            push_list(&mut output, "Traits", profile.traits);
            push_list(&mut output, "Careers", profile.career);
            push_list(&mut output, "Strengths", profile.strengths);
            push_list(&mut output, "Growth areas", profile.growth_areas);
        }
    }
    Ok(output)
}

/// A role description with its best environment.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleView {
    #[serde(flatten)]
    profile: &'static RoleProfile,
    best_environment: &'static str,
}

impl RoleView {
    fn new(role: BelbinRole) -> Self {
        Self {
            profile: role.profile(),
            best_environment: role.best_environment(),
        }
    }
}

/// List the Belbin roles, or show one.
pub fn cmd_roles(name: Option<&str>, json: bool) -> Result<String> {
    let roles: Vec<BelbinRole> = match name {
        Some(name) => vec![BelbinRole::from_name(name).ok_or_else(|| CliError::UnknownRole(name.to_string()))?],
        None => BelbinRole::ALL.to_vec(),
    };
    if json {
        let views: Vec<RoleView> = roles.into_iter().map(RoleView::new).collect();
        return match views.as_slice() {
            [single] if name.is_some() => to_json(single),
            _ => to_json(&views),
        };
    }

    let mut output = String::new();
    for role in roles {
        let profile = role.profile();
        output.push_str(&format!("{}\n  {}\n", profile.name, profile.description));
        if name.is_some() {
            push_list(&mut output, "Key traits", profile.key_traits);
            push_list(&mut output, "Strengths", profile.strengths);
            push_list(&mut output, "Weaknesses", profile.weaknesses);
            push_list(&mut output, "Contributions", profile.contributions);
            push_list(&mut output, "Development", profile.development);
            output.push_str(&format!("Best environment: {}\n", role.best_environment()));
        }
    }
    Ok(output)
}

/// Outcome of one batch line.
#[derive(Serialize)]
#[serde(untagged)]
enum BatchLine {
    Scored { line: usize, assessment: Box<Assessment> },
    Rejected { line: usize, error: String },
}

/// Score every line of a JSONL file independently.
///
/// A bad line is reported in place and does not stop the batch.
pub fn cmd_batch(definition: &QuestionnaireDefinition, path: &Path, json: bool) -> Result<String> {
    let content = read_file(path)?;
    let mut output = String::new();
    let mut failed = 0usize;
    let mut scored = 0usize;

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let outcome = serde_json::from_str::<Value>(raw)
            .map_err(|source| CliError::Json {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|value| parse_answers(&value))
            .and_then(|answers| Assessment::evaluate(definition, &answers).map_err(CliError::from));

        let entry = match outcome {
            Ok(assessment) => {
                scored += 1;
                BatchLine::Scored {
                    line,
                    assessment: Box::new(assessment),
                }
            }
            Err(error) => {
                failed += 1;
                tracing::warn!("Batch line {} rejected: {}", line, error);
                BatchLine::Rejected {
                    line,
                    error: error.to_string(),
                }
            }
        };

        if json {
            let rendered = serde_json::to_string(&entry).map_err(CliError::Render)?;
            output.push_str(&rendered);
            output.push('\n');
        } else {
            match entry {
                BatchLine::Scored { line, assessment } => output.push_str(&format!(
                    "{:>4}: {} {:<12} {:<22} {}\n",
                    line,
                    assessment.mbti.mbti_type,
                    assessment.mbti.profile.name,
                    assessment.belbin.primary_role.role(),
                    assessment.summary.personality_type
                )),
                BatchLine::Rejected { line, error } => {
                    output.push_str(&format!("{:>4}: error: {}\n", line, error));
                }
            }
        }
    }

    tracing::info!("Batch {}: {} scored, {} rejected", path.display(), scored, failed);
    Ok(output)
}

fn push_list<S: AsRef<str>>(output: &mut String, title: &str, items: &[S]) {
    let joined: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    output.push_str(&format!("{}: {}\n", title, joined.join(", ")));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_answers_skips_nulls() {
        let answers = parse_answers(&json!({"1": 4, "2": null, "3": 5}));
        assert_eq!(answers.map(|a| a.len()).ok(), Some(2));
    }

    #[test]
    fn parse_answers_rejects_bad_shapes() {
        assert!(matches!(
            parse_answers(&json!([1, 2, 3])),
            Err(CliError::Engine(persona_core::Error::MalformedAnswers(_)))
        ));
        assert!(matches!(
            parse_answers(&json!({"one": 3})),
            Err(CliError::Engine(persona_core::Error::MalformedAnswers(_)))
        ));
        assert!(matches!(
            parse_answers(&json!({"1": 3.5})),
            Err(CliError::Engine(persona_core::Error::MalformedAnswers(_)))
        ));
        assert!(matches!(
            parse_answers(&json!({"1": 6})),
            Err(CliError::Engine(persona_core::Error::AnswerOutOfRange { question: 1, value: 6 }))
        ));
    }

    #[test]
    fn types_and_roles_lookup() {
        assert!(cmd_types(Some("intj"), false).is_ok_and(|s| s.contains("Architect")));
        assert!(matches!(cmd_types(Some("ABCD"), false), Err(CliError::UnknownType(_))));
        assert!(cmd_roles(Some("plant"), false).is_ok_and(|s| s.contains("R&D team")));
        assert!(matches!(cmd_roles(Some("Captain"), true), Err(CliError::UnknownRole(_))));
    }
}
