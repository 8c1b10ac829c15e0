//! # Report Module
//!
//! One-call evaluation of an answer set and its presentations.
//!
//! [`Assessment`] runs the whole pipeline: answer check, aggregation,
//! summary, MBTI, Belbin and completion. It renders a boxed plain-text
//! report and derives a [`NarrativeBrief`], the structured prompt material
//! handed to an external text generator. The engine never calls that
//! generator itself.

use crate::aggregate::{ScoreAggregator, TraitAverages, TraitScoreSet};
use crate::answers::AnswerSet;
use crate::belbin::{BelbinRanker, BelbinResult, BelbinRole};
use crate::error::Result;
use crate::mbti::{MbtiComposer, MbtiResult, MbtiType};
use crate::primitives::Dimension;
use crate::questionnaire::{CompletionReport, QuestionnaireDefinition};
use crate::summary::{ResultSummarizer, ResultSummary};
use serde::Serialize;

const RULE: &str = "─────────────────────────────────────────────";

// =============================================================================
// ASSESSMENT
// =============================================================================

/// Everything derived from one answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub scores: TraitScoreSet,
    pub summary: ResultSummary,
    pub mbti: MbtiResult,
    pub belbin: BelbinResult,
    pub completion: CompletionReport,
}

impl Assessment {
    /// Validate and score an answer set.
    ///
    /// Fails with [`crate::Error::UnknownQuestion`] if an answered id is not
    /// part of the questionnaire. Partial answer sets are fine.
    pub fn evaluate(definition: &QuestionnaireDefinition, answers: &AnswerSet) -> Result<Self> {
        definition.check_answers(answers)?;
        let scores = ScoreAggregator::aggregate(definition, answers);
        let completion = definition.completion(answers);
        Ok(Self::from_scores(scores, completion))
    }

    /// Derive summary, MBTI and Belbin from an existing scoring.
    #[must_use]
    pub fn from_scores(scores: TraitScoreSet, completion: CompletionReport) -> Self {
        let averages = scores.averages();
        Self {
            summary: ResultSummarizer::summarize(&scores),
            mbti: MbtiComposer::compose(&averages),
            belbin: BelbinRanker::rank(&averages),
            scores,
            completion,
        }
    }

    #[must_use]
    pub fn averages(&self) -> TraitAverages {
        self.scores.averages()
    }

    /// Prompt material for the external narrative generator.
    #[must_use]
    pub fn brief(&self) -> NarrativeBrief {
        NarrativeBrief {
            averages: self.averages(),
            mbti_type: self.mbti.mbti_type,
            mbti_name: self.mbti.profile.name,
            primary_role: self.belbin.primary_role.role(),
        }
    }

    /// Format as plain text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("┌{}┐\n", RULE));
        output.push_str("│ BIG FIVE TRAITS\n");
        for (dimension, score) in self.scores.iter() {
            output.push_str(&format!(
                "│ - {:<18} {} ({}, {} of {} answered)\n",
                dimension.name(),
                score.average,
                score.percentage,
                score.count,
                score.max_possible
            ));
        }

        output.push_str(&format!("├{}┤\n", RULE));
        output.push_str("│ SUMMARY\n");
        output.push_str(&format!("│ - Overall average: {}\n", self.summary.total_average));
        output.push_str(&format!(
            "│ - Highest: {} ({})\n",
            self.summary.highest.name, self.summary.highest.score
        ));
        output.push_str(&format!(
            "│ - Lowest: {} ({})\n",
            self.summary.lowest.name, self.summary.lowest.score
        ));
        output.push_str(&format!("│ - Personality: {}\n", self.summary.personality_type));

        output.push_str(&format!("├{}┤\n", RULE));
        output.push_str("│ MBTI\n");
        output.push_str(&format!(
            "│ - {} {} [{}% confidence]\n",
            self.mbti.mbti_type, self.mbti.profile.name, self.mbti.confidence
        ));
        for axis in crate::mbti::Axis::ALL {
            let result = self.mbti.dimensions.get(axis);
            output.push_str(&format!(
                "│   {} {} ({}) {}\n",
                result.letter,
                result.full_type,
                result.confidence,
                if result.ambiguous { "[ambiguous]" } else { "" }
            ));
        }
        if self.mbti.profile_fallback {
            output.push_str("│   (profile is the default; the type had no entry)\n");
        }

        output.push_str(&format!("├{}┤\n", RULE));
        output.push_str("│ BELBIN TEAM ROLES\n");
        for (rank, fit) in self.belbin.all_roles.iter().enumerate() {
            let marker = match rank {
                0 => "*",
                1 | 2 => "+",
                _ => "-",
            };
            output.push_str(&format!(
                "│ {} {:<22} {:>3} [{}]\n",
                marker, fit.role, fit.score, fit.confidence
            ));
        }
        output.push_str(&format!(
            "│ Best environment: {}\n",
            self.belbin.best_team_environment
        ));

        output.push_str(&format!("├{}┤\n", RULE));
        output.push_str("│ COMPLETION\n");
        output.push_str(&format!(
            "│ - {}/{} answered ({}%)\n",
            self.completion.answered_count, self.completion.total_count, self.completion.completion_rate
        ));
        if !self.completion.is_complete {
            let ids: Vec<String> = self.completion.unanswered.iter().map(u16::to_string).collect();
            output.push_str(&format!("│ - unanswered: {}\n", ids.join(", ")));
        }

        output.push_str(&format!("└{}┘\n", RULE));
        output
    }
}

// =============================================================================
// NARRATIVE BRIEF
// =============================================================================

/// Sections requested from the generator for the personality narrative.
pub const BASIC_SECTIONS: [&str; 3] = ["Career advice", "Personality analysis", "Relationships"];

/// Sections requested from the generator for the MBTI/Belbin narrative.
pub const ADVANCED_SECTIONS: [&str; 4] = [
    "MBTI deep dive",
    "Belbin team role analysis",
    "Career development advice",
    "Personal growth strategy",
];

/// Structured input for an external narrative generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeBrief {
    pub averages: TraitAverages,
    pub mbti_type: MbtiType,
    pub mbti_name: &'static str,
    pub primary_role: BelbinRole,
}

impl NarrativeBrief {
    fn score_lines(&self) -> String {
        Dimension::ALL
            .iter()
            .map(|d| format!("- {}: {}/5.0\n", d.name(), self.averages.get(*d)))
            .collect()
    }

    fn numbered(sections: &[&str]) -> String {
        sections
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}\n", i + 1, s))
            .collect()
    }

    /// Prompt for the Big Five narrative.
    #[must_use]
    pub fn basic_prompt(&self) -> String {
        format!(
            "Write a detailed personality report based on these Big Five results.\n\n\
             Scores:\n{}\n\
             Cover the following, in a warm and encouraging tone, 100-200 words each:\n{}",
            self.score_lines(),
            Self::numbered(&BASIC_SECTIONS)
        )
    }

    /// Prompt for the MBTI and Belbin narrative.
    #[must_use]
    pub fn advanced_prompt(&self) -> String {
        format!(
            "Provide a professional MBTI and Belbin team role analysis of these results.\n\n\
             Big Five scores:\n{}\n\
             Computed MBTI type: {} ({})\n\
             Computed primary Belbin role: {}\n\n\
             Cover the following, specific and practical, 150-250 words each:\n{}",
            self.score_lines(),
            self.mbti_type,
            self.mbti_name,
            self.primary_role,
            Self::numbered(&ADVANCED_SECTIONS)
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn evaluate(answers: &AnswerSet) -> Option<Assessment> {
        Assessment::evaluate(&QuestionnaireDefinition::standard(), answers).ok()
    }

    #[test]
    fn evaluate_all_fives() {
        let answers = AnswerSet::uniform(1..=50, 5).unwrap_or_default();
        let assessment = evaluate(&answers);
        let mbti = assessment.as_ref().map(|a| a.mbti.mbti_type.to_string());
        assert_eq!(mbti.as_deref(), Some("ENFJ"));
        let complete = assessment.map(|a| a.completion.is_complete);
        assert_eq!(complete, Some(true));
    }

    #[test]
    fn evaluate_rejects_unknown_question() {
        let answers = AnswerSet::from_pairs([(1, 3), (51, 3)]).unwrap_or_default();
        let result = Assessment::evaluate(&QuestionnaireDefinition::standard(), &answers);
        assert_eq!(result.err(), Some(Error::UnknownQuestion { question: 51 }));
    }

    #[test]
    fn partial_answers_are_reported() {
        let answers = AnswerSet::uniform(1..=25, 4).unwrap_or_default();
        let assessment = evaluate(&answers);
        assert!(assessment.is_some());
        if let Some(assessment) = assessment {
            assert!(!assessment.completion.is_complete);
            assert_eq!(assessment.completion.completion_rate, 50);
            assert!(assessment.to_text().contains("unanswered: 26, 27"));
        }
    }

    #[test]
    fn text_report_sections() {
        let answers = AnswerSet::uniform(1..=50, 3).unwrap_or_default();
        let text = evaluate(&answers).map(|a| a.to_text()).unwrap_or_default();
        for heading in ["BIG FIVE TRAITS", "SUMMARY", "MBTI", "BELBIN TEAM ROLES", "COMPLETION"] {
            assert!(text.contains(heading), "missing {}", heading);
        }
        assert!(text.contains("ENFJ Protagonist [50% confidence]"));
        assert!(text.contains("Personality: Balanced"));
        assert!(text.starts_with('┌'));
        assert!(text.trim_end().ends_with('┘'));
    }

    #[test]
    fn brief_carries_computed_results() {
        let answers = AnswerSet::uniform(1..=50, 1).unwrap_or_default();
        let brief = evaluate(&answers).map(|a| a.brief());
        let prompt = brief.as_ref().map(|b| b.advanced_prompt()).unwrap_or_default();
        assert!(prompt.contains("- Openness: 1.00/5.0"));
        assert!(prompt.contains("Computed MBTI type: ISTP (Virtuoso)"));
        assert!(prompt.contains("4. Personal growth strategy"));

        let basic = brief.map(|b| b.basic_prompt()).unwrap_or_default();
        assert!(basic.contains("3. Relationships"));
        assert!(!basic.contains("MBTI"));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let answers = AnswerSet::from_pairs((1..=50).map(|id| (id, i64::from(id % 5) + 1)))
            .unwrap_or_default();
        let first = evaluate(&answers).map(|a| serde_json::to_string(&a).unwrap_or_default());
        let second = evaluate(&answers).map(|a| serde_json::to_string(&a).unwrap_or_default());
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
