//! Integration tests for Persona CLI commands.
//!
//! Uses tempfile for answer, questionnaire and batch files.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use persona::cli::{
    cmd_batch, cmd_belbin, cmd_brief, cmd_compare, cmd_mbti, cmd_progress, cmd_questions,
    cmd_report, cmd_roles, cmd_score, cmd_summary, cmd_types, load_answers, load_questionnaire,
    CliError,
};
use persona_core::{Item, QuestionnaireDefinition};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Answer file with the same value for every question in `ids`.
fn create_uniform_answers(
    dir: &TempDir,
    name: &str,
    ids: std::ops::RangeInclusive<u16>,
    value: u8,
) -> PathBuf {
    let map: serde_json::Map<String, Value> = ids
        .map(|id| (id.to_string(), Value::from(value)))
        .collect();
    write_file(dir, name, &Value::Object(map).to_string())
}

fn standard() -> QuestionnaireDefinition {
    QuestionnaireDefinition::standard()
}

fn parse(output: &str) -> Value {
    serde_json::from_str(output).unwrap()
}

// =============================================================================
// LOADING TESTS
// =============================================================================

#[test]
fn test_load_answers_with_nulls() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "answers.json", r#"{"1": 5, "2": null, "11": 3}"#);

    let answers = load_answers(&path, &standard()).unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers.get(11), Some(3));
}

#[test]
fn test_load_answers_rejects_unknown_question() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "answers.json", r#"{"1": 5, "77": 3}"#);

    let result = load_answers(&path, &standard());
    assert!(matches!(
        result,
        Err(CliError::Engine(persona_core::Error::UnknownQuestion { question: 77 }))
    ));
}

#[test]
fn test_load_answers_rejects_out_of_range() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "answers.json", r#"{"1": 0}"#);

    let result = load_answers(&path, &standard());
    assert!(matches!(
        result,
        Err(CliError::Engine(persona_core::Error::AnswerOutOfRange { question: 1, value: 0 }))
    ));
}

#[test]
fn test_load_answers_missing_file() {
    let temp = create_temp_dir();
    let result = load_answers(&temp.path().join("missing.json"), &standard());
    assert!(matches!(result, Err(CliError::Io { .. })));
}

#[test]
fn test_load_answers_invalid_json() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "answers.json", "{not json");
    assert!(matches!(load_answers(&path, &standard()), Err(CliError::Json { .. })));
}

#[test]
fn test_load_questionnaire_default() {
    let definition = load_questionnaire(None).unwrap();
    assert_eq!(definition, standard());
}

#[test]
fn test_load_questionnaire_override() {
    let temp = create_temp_dir();
    // Same shape as the standard questionnaire, wrapped, without texts.
    let items: Vec<Value> = standard()
        .items()
        .iter()
        .map(|item| {
            serde_json::json!({
                "id": item.id,
                "dimension": item.dimension,
                "dimensionOrder": item.dimension_order,
            })
        })
        .collect();
    let path = write_file(
        &temp,
        "questionnaire.json",
        &serde_json::json!({ "items": items }).to_string(),
    );

    let definition = load_questionnaire(Some(&path)).unwrap();
    assert_eq!(definition.len(), 50);
    assert!(definition.items().iter().all(|item: &Item| item.text.is_empty()));
}

#[test]
fn test_load_questionnaire_rejects_wrong_shape() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "questionnaire.json",
        r#"[{"id": 1, "dimension": "openness", "dimensionOrder": 1}]"#,
    );

    let result = load_questionnaire(Some(&path));
    assert!(matches!(
        result,
        Err(CliError::Engine(persona_core::Error::InvalidQuestionnaire(_)))
    ));
}

// =============================================================================
// SCORING COMMAND TESTS
// =============================================================================

#[test]
fn test_questions_lists_fifty_items() {
    let text = cmd_questions(&standard(), false).unwrap();
    assert_eq!(text.lines().filter(|l| l.contains(". [")).count(), 50);
    assert!(text.contains("5 = Strongly Agree"));

    let json = parse(&cmd_questions(&standard(), true).unwrap());
    assert_eq!(json["items"].as_array().map(Vec::len), Some(50));
}

#[test]
fn test_score_json_shape() {
    let temp = create_temp_dir();
    let path = create_uniform_answers(&temp, "answers.json", 1..=50, 4);

    let json = parse(&cmd_score(&standard(), &path, true).unwrap());
    assert_eq!(json["openness"]["average"], serde_json::json!(4.0));
    assert_eq!(json["openness"]["percentage"], serde_json::json!(80.0));
    assert_eq!(json["neuroticism"]["count"], serde_json::json!(10));
}

#[test]
fn test_summary_text() {
    let temp = create_temp_dir();
    let path = create_uniform_answers(&temp, "answers.json", 1..=50, 5);

    let text = cmd_summary(&standard(), &path, false).unwrap();
    assert!(text.contains("Personality: Multi-faceted"));
    assert!(text.contains("Highest: Openness (5.00)"));
    assert!(text.contains("  1. Openness 5.00"));

    let json = parse(&cmd_summary(&standard(), &path, true).unwrap());
    assert_eq!(json["dimensions"][0]["average"], serde_json::json!(5.0));
}

#[test]
fn test_mbti_all_fives() {
    let temp = create_temp_dir();
    let path = create_uniform_answers(&temp, "answers.json", 1..=50, 5);

    let json = parse(&cmd_mbti(&standard(), &path, true).unwrap());
    assert_eq!(json["type"], "ENFJ");
    assert_eq!(json["confidence"], 90);
    assert_eq!(json["profileFallback"], false);

    let text = cmd_mbti(&standard(), &path, false).unwrap();
    assert!(text.starts_with("ENFJ - Protagonist (90% confidence)"));
}

#[test]
fn test_belbin_neutral_ties() {
    let temp = create_temp_dir();
    let path = create_uniform_answers(&temp, "answers.json", 1..=50, 3);

    let json = parse(&cmd_belbin(&standard(), &path, true).unwrap());
    assert_eq!(json["primaryRole"]["role"], "Coordinator");
    assert_eq!(json["secondaryRoles"][0]["role"], "Shaper");
    assert_eq!(json["secondaryRoles"][1]["role"], "Resource Investigator");
    assert_eq!(json["allRoles"].as_array().map(Vec::len), Some(9));
}

#[test]
fn test_report_text_and_json() {
    let temp = create_temp_dir();
    let path = create_uniform_answers(&temp, "answers.json", 1..=50, 1);

    let text = cmd_report(&standard(), &path, false).unwrap();
    assert!(text.contains("ISTP Virtuoso"));
    assert!(text.contains("BELBIN TEAM ROLES"));

    let json = parse(&cmd_report(&standard(), &path, true).unwrap());
    assert_eq!(json["mbti"]["type"], "ISTP");
    assert_eq!(json["completion"]["isComplete"], true);
}

#[test]
fn test_progress_partial() {
    let temp = create_temp_dir();
    let path = create_uniform_answers(&temp, "answers.json", 1..=12, 3);

    let text = cmd_progress(&standard(), &path, None, false).unwrap();
    assert!(text.contains("Progress: 12/50 (24%)"));
    assert!(text.contains("Current question: 13"));

    let json = parse(&cmd_progress(&standard(), &path, Some(20), true).unwrap());
    assert_eq!(json["progress"]["current"], 20);
    assert_eq!(json["completion"]["unanswered"][0], 13);
}

#[test]
fn test_compare_trends() {
    let temp = create_temp_dir();
    let old = create_uniform_answers(&temp, "old.json", 1..=50, 2);
    let new = create_uniform_answers(&temp, "new.json", 1..=50, 3);

    let json = parse(&cmd_compare(&standard(), &old, &new, true).unwrap());
    assert_eq!(json[0]["dimension"], "openness");
    assert_eq!(json[0]["old"], serde_json::json!(2.0));
    assert_eq!(json[0]["change"], serde_json::json!(1.0));
    assert_eq!(json[0]["changePercent"], serde_json::json!(50.0));
    assert_eq!(json[0]["trend"], "Rising");

    let text = cmd_compare(&standard(), &old, &new, false).unwrap();
    assert!(text.contains("2.00 -> 3.00  +1.00 (+50.0%)  Rising"));
}

#[test]
fn test_compare_from_empty_has_no_percent() {
    let temp = create_temp_dir();
    let old = write_file(&temp, "old.json", "{}");
    let new = create_uniform_answers(&temp, "new.json", 1..=50, 3);

    let json = parse(&cmd_compare(&standard(), &old, &new, true).unwrap());
    assert!(json[0]["changePercent"].is_null());
    let text = cmd_compare(&standard(), &old, &new, false).unwrap();
    assert!(text.contains("(n/a)"));
}

#[test]
fn test_brief_prompts() {
    let temp = create_temp_dir();
    let path = create_uniform_answers(&temp, "answers.json", 1..=50, 3);

    let json = parse(&cmd_brief(&standard(), &path, true).unwrap());
    assert_eq!(json["brief"]["mbtiType"], "ENFJ");
    assert_eq!(json["brief"]["primaryRole"], "Coordinator");
    let advanced = json["advancedPrompt"].as_str().unwrap_or_default();
    assert!(advanced.contains("Computed primary Belbin role: Coordinator"));
}

// =============================================================================
// CATALOGUE COMMAND TESTS
// =============================================================================

#[test]
fn test_types_catalogue() {
    let json = parse(&cmd_types(None, true).unwrap());
    assert_eq!(json.as_array().map(Vec::len), Some(16));

    let single = parse(&cmd_types(Some("estj"), true).unwrap());
    assert_eq!(single["name"], "Executive");
}

#[test]
fn test_roles_catalogue() {
    let json = parse(&cmd_roles(None, true).unwrap());
    assert_eq!(json.as_array().map(Vec::len), Some(9));

    let single = parse(&cmd_roles(Some("monitor evaluator"), true).unwrap());
    assert_eq!(single["name"], "Monitor Evaluator");
    assert!(single["bestEnvironment"].is_string());
}

// =============================================================================
// BATCH COMMAND TESTS
// =============================================================================

fn create_batch(dir: &TempDir) -> PathBuf {
    let all = |value: u8| {
        let map: serde_json::Map<String, Value> =
            (1..=50).map(|id: u16| (id.to_string(), Value::from(value))).collect();
        Value::Object(map).to_string()
    };
    let content = format!("{}\n\n{}\n{{\"1\": 9}}\n", all(5), all(1));
    write_file(dir, "batch.jsonl", &content)
}

#[test]
fn test_batch_json_lines() {
    let temp = create_temp_dir();
    let path = create_batch(&temp);

    let output = cmd_batch(&standard(), &path, true).unwrap();
    let lines: Vec<Value> = output.lines().map(parse).collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["line"], 1);
    assert_eq!(lines[0]["assessment"]["mbti"]["type"], "ENFJ");
    assert_eq!(lines[1]["line"], 3);
    assert_eq!(lines[1]["assessment"]["mbti"]["type"], "ISTP");
    assert_eq!(lines[2]["line"], 4);
    assert!(lines[2]["error"].as_str().unwrap_or_default().contains("expected 1-5"));
}

#[test]
fn test_batch_text() {
    let temp = create_temp_dir();
    let path = create_batch(&temp);

    let output = cmd_batch(&standard(), &path, false).unwrap();
    assert!(output.contains("   1: ENFJ"));
    assert!(output.contains("   4: error:"));
}

#[test]
fn test_batch_missing_file() {
    let result = cmd_batch(&standard(), Path::new("/nonexistent/batch.jsonl"), false);
    assert!(matches!(result, Err(CliError::Io { .. })));
}
