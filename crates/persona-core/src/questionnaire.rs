//! # Questionnaire
//!
//! The static 50-item Big Five questionnaire (5 dimensions × 10 items) and
//! the completion bookkeeping derived from it.
//!
//! A definition is immutable once built. The standard definition is
//! compiled in; alternatives can be supplied (e.g. loaded from JSON by the
//! app) and are validated on construction.

use crate::answers::AnswerSet;
use crate::error::{Error, Result};
use crate::primitives::{div_round, Dimension, ITEMS_PER_DIMENSION, LIKERT_MAX, LIKERT_MIN};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Number of items in a complete questionnaire.
pub const ITEM_COUNT: usize = 50;

/// One questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Question id, `1..=50`.
    pub id: u16,
    /// The dimension this item measures.
    pub dimension: Dimension,
    /// Position within its dimension, `1..=10`.
    pub dimension_order: u8,
    /// Item text shown to the respondent.
    #[serde(default)]
    pub text: String,
}

/// A labelled Likert response option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikertOption {
    pub value: u8,
    pub label: &'static str,
}

/// The five response options, lowest first.
pub const ANSWER_OPTIONS: [LikertOption; 5] = [
    LikertOption { value: 1, label: "Strongly Disagree" },
    LikertOption { value: 2, label: "Disagree" },
    LikertOption { value: 3, label: "Neutral" },
    LikertOption { value: 4, label: "Agree" },
    LikertOption { value: 5, label: "Strongly Agree" },
];

const STANDARD_ITEMS: [(Dimension, &str); ITEM_COUNT] = [
    (Dimension::Openness, "I have a vivid imagination."),
    (Dimension::Openness, "I like to try new things."),
    (Dimension::Openness, "I have a strong interest in art and aesthetics."),
    (Dimension::Openness, "I enjoy thinking about abstract concepts."),
    (Dimension::Openness, "I often have creative ideas."),
    (Dimension::Openness, "I like to explore different cultures."),
    (Dimension::Openness, "I am interested in philosophical questions."),
    (Dimension::Openness, "I enjoy learning new skills."),
    (Dimension::Openness, "I am curious about unknown things."),
    (Dimension::Openness, "I like to challenge traditional ideas."),
    (Dimension::Conscientiousness, "I always complete tasks on time."),
    (Dimension::Conscientiousness, "I do things in an organized manner."),
    (Dimension::Conscientiousness, "I pay attention to details."),
    (Dimension::Conscientiousness, "I persist in completing work I start."),
    (Dimension::Conscientiousness, "I make plans and follow through with them."),
    (Dimension::Conscientiousness, "I rarely procrastinate."),
    (Dimension::Conscientiousness, "I always prepare thoroughly."),
    (Dimension::Conscientiousness, "I pursue perfection."),
    (Dimension::Conscientiousness, "I am able to exercise self-control."),
    (Dimension::Conscientiousness, "I have strong goal orientation."),
    (Dimension::Extraversion, "I feel comfortable in social situations."),
    (Dimension::Extraversion, "I enjoy being the center of attention."),
    (Dimension::Extraversion, "I have many friends."),
    (Dimension::Extraversion, "I enjoy attending parties and events."),
    (Dimension::Extraversion, "I find it easy to talk to strangers."),
    (Dimension::Extraversion, "I am active in team settings."),
    (Dimension::Extraversion, "I enjoy expressing my opinions."),
    (Dimension::Extraversion, "I am full of energy."),
    (Dimension::Extraversion, "I enjoy lively environments."),
    (Dimension::Extraversion, "I am good at motivating others."),
    (Dimension::Agreeableness, "I trust others."),
    (Dimension::Agreeableness, "I am willing to help others."),
    (Dimension::Agreeableness, "I am easy to get along with."),
    (Dimension::Agreeableness, "I rarely argue with others."),
    (Dimension::Agreeableness, "I am tolerant of others."),
    (Dimension::Agreeableness, "I consider others' feelings."),
    (Dimension::Agreeableness, "I am willing to cooperate with others."),
    (Dimension::Agreeableness, "I care about others' well-being."),
    (Dimension::Agreeableness, "I find it easy to trust others."),
    (Dimension::Agreeableness, "I try to avoid conflicts."),
    (Dimension::Neuroticism, "I often feel anxious."),
    (Dimension::Neuroticism, "I am easily discouraged."),
    (Dimension::Neuroticism, "I often feel tense."),
    (Dimension::Neuroticism, "I worry about many things."),
    (Dimension::Neuroticism, "My emotions fluctuate greatly."),
    (Dimension::Neuroticism, "I am easily stressed."),
    (Dimension::Neuroticism, "I often feel uneasy."),
    (Dimension::Neuroticism, "I am sensitive to criticism."),
    (Dimension::Neuroticism, "I get angry easily."),
    (Dimension::Neuroticism, "I often feel lonely."),
];

// =============================================================================
// DEFINITION
// =============================================================================

/// An immutable, validated questionnaire definition.
///
/// Items are kept sorted by id; that is the questionnaire order used by
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionnaireDefinition {
    items: Vec<Item>,
}

impl QuestionnaireDefinition {
    /// The compiled-in standard questionnaire.
    #[must_use]
    pub fn standard() -> Self {
        let mut orders: BTreeMap<Dimension, u8> = BTreeMap::new();
        let items = STANDARD_ITEMS
            .iter()
            .zip(1u16..)
            .map(|(&(dimension, text), id)| {
                let order = orders.entry(dimension).or_insert(0);
                *order = order.saturating_add(1);
                Item {
                    id,
                    dimension,
                    dimension_order: *order,
                    text: text.to_string(),
                }
            })
            .collect();
        Self { items }
    }

    /// Build a definition from arbitrary items, checking the 5×10 shape.
    ///
    /// Requires exactly 50 items with unique ids in `1..=50`, ten items per
    /// dimension, and each dimension's `dimension_order` values forming
    /// exactly `1..=10`.
    pub fn from_items(mut items: Vec<Item>) -> Result<Self> {
        if items.len() != ITEM_COUNT {
            return Err(Error::InvalidQuestionnaire(format!(
                "expected {} items, found {}",
                ITEM_COUNT,
                items.len()
            )));
        }

        let mut ids = BTreeSet::new();
        let mut orders: BTreeMap<Dimension, BTreeSet<u8>> = BTreeMap::new();
        for item in &items {
            if item.id == 0 || usize::from(item.id) > ITEM_COUNT {
                return Err(Error::InvalidQuestionnaire(format!(
                    "item id {} outside 1-{}",
                    item.id, ITEM_COUNT
                )));
            }
            if !ids.insert(item.id) {
                return Err(Error::InvalidQuestionnaire(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
            if item.dimension_order == 0 || item.dimension_order > ITEMS_PER_DIMENSION {
                return Err(Error::InvalidQuestionnaire(format!(
                    "item {} has dimension order {}, expected 1-{}",
                    item.id, item.dimension_order, ITEMS_PER_DIMENSION
                )));
            }
            if !orders
                .entry(item.dimension)
                .or_default()
                .insert(item.dimension_order)
            {
                return Err(Error::InvalidQuestionnaire(format!(
                    "{} has dimension order {} twice",
                    item.dimension.key(),
                    item.dimension_order
                )));
            }
        }

        for dimension in Dimension::ALL {
            let count = orders.get(&dimension).map_or(0, BTreeSet::len);
            if count != usize::from(ITEMS_PER_DIMENSION) {
                return Err(Error::InvalidQuestionnaire(format!(
                    "{} has {} items, expected {}",
                    dimension.key(),
                    count,
                    ITEMS_PER_DIMENSION
                )));
            }
        }

        items.sort_by_key(|item| item.id);
        Ok(Self { items })
    }

    /// All items in questionnaire order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items of one dimension in questionnaire order.
    pub fn items_for(&self, dimension: Dimension) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.dimension == dimension)
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: u16) -> Option<&Item> {
        self.items
            .binary_search_by_key(&id, |item| item.id)
            .ok()
            .and_then(|index| self.items.get(index))
    }

    #[must_use]
    pub fn contains(&self, id: u16) -> bool {
        self.item(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check that every answered id belongs to this questionnaire.
    ///
    /// Values are already range-checked by [`AnswerSet`]; this closes the
    /// remaining gap of ids the definition does not know.
    pub fn check_answers(&self, answers: &AnswerSet) -> Result<()> {
        match answers.iter().find(|(id, _)| !self.contains(*id)) {
            Some((question, _)) => Err(Error::UnknownQuestion { question }),
            None => Ok(()),
        }
    }

    /// Completion statistics for an answer set.
    #[must_use]
    pub fn completion(&self, answers: &AnswerSet) -> CompletionReport {
        let unanswered: Vec<u16> = self
            .items
            .iter()
            .map(|item| item.id)
            .filter(|id| answers.get(*id).is_none())
            .collect();
        let total_count = self.items.len();
        let answered_count = total_count.saturating_sub(unanswered.len());

        CompletionReport {
            is_complete: unanswered.is_empty(),
            answered_count,
            total_count,
            completion_rate: percent_of(answered_count, total_count),
            unanswered,
        }
    }

    /// Progress information for a respondent currently at `current`.
    #[must_use]
    pub fn progress(&self, answers: &AnswerSet, current: u16) -> ProgressInfo {
        let total = self.items.len();
        let answered = self.completion(answers).answered_count;
        let progress = percent_of(answered, total);

        ProgressInfo {
            current,
            total,
            answered,
            remaining: total.saturating_sub(answered),
            progress,
            progress_text: format!("{}/{} ({}%)", answered, total, progress),
        }
    }
}

impl Default for QuestionnaireDefinition {
    fn default() -> Self {
        Self::standard()
    }
}

fn percent_of(part: usize, whole: usize) -> u8 {
    div_round((part as u64).saturating_mul(100), whole as u64).min(100) as u8
}

/// Label for a Likert value, if it is in range.
#[must_use]
pub fn answer_label(value: u8) -> Option<&'static str> {
    if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
        return None;
    }
    ANSWER_OPTIONS
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

// =============================================================================
// COMPLETION
// =============================================================================

/// How much of the questionnaire an answer set covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReport {
    pub is_complete: bool,
    pub answered_count: usize,
    pub total_count: usize,
    /// Rounded percentage, `0..=100`.
    pub completion_rate: u8,
    /// Unanswered ids in questionnaire order.
    pub unanswered: Vec<u16>,
}

/// Progress through the questionnaire, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressInfo {
    pub current: u16,
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub progress: u8,
    pub progress_text: String,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_has_fifty_items_ten_per_dimension() {
        let def = QuestionnaireDefinition::standard();
        assert_eq!(def.len(), ITEM_COUNT);
        for dimension in Dimension::ALL {
            let orders: Vec<u8> = def.items_for(dimension).map(|i| i.dimension_order).collect();
            assert_eq!(orders, (1..=10).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn standard_passes_its_own_validation() {
        let def = QuestionnaireDefinition::standard();
        let rebuilt = QuestionnaireDefinition::from_items(def.items().to_vec());
        assert_eq!(rebuilt.as_ref().ok(), Some(&def));
    }

    #[test]
    fn standard_layout_is_blocked_by_dimension() {
        let def = QuestionnaireDefinition::standard();
        assert_eq!(def.item(1).map(|i| i.dimension), Some(Dimension::Openness));
        assert_eq!(def.item(11).map(|i| i.dimension), Some(Dimension::Conscientiousness));
        assert_eq!(def.item(21).map(|i| i.dimension), Some(Dimension::Extraversion));
        assert_eq!(def.item(31).map(|i| i.dimension), Some(Dimension::Agreeableness));
        assert_eq!(def.item(50).map(|i| i.dimension), Some(Dimension::Neuroticism));
        assert!(def.item(51).is_none());
    }

    #[test]
    fn from_items_rejects_wrong_count() {
        let mut items = QuestionnaireDefinition::standard().items().to_vec();
        items.pop();
        assert!(matches!(
            QuestionnaireDefinition::from_items(items),
            Err(Error::InvalidQuestionnaire(_))
        ));
    }

    #[test]
    fn from_items_rejects_duplicate_ids() {
        let mut items = QuestionnaireDefinition::standard().items().to_vec();
        items[1].id = 1;
        assert!(QuestionnaireDefinition::from_items(items).is_err());
    }

    #[test]
    fn from_items_rejects_unbalanced_dimensions() {
        let mut items = QuestionnaireDefinition::standard().items().to_vec();
        // Move one openness item into neuroticism; orders collide first.
        items[0].dimension = Dimension::Neuroticism;
        items[0].dimension_order = 10;
        assert!(QuestionnaireDefinition::from_items(items).is_err());
    }

    #[test]
    fn from_items_sorts_by_id() {
        let mut items = QuestionnaireDefinition::standard().items().to_vec();
        items.reverse();
        let def = QuestionnaireDefinition::from_items(items);
        let first = def.as_ref().ok().and_then(|d| d.items().first()).map(|i| i.id);
        assert_eq!(first, Some(1));
    }

    #[test]
    fn completion_of_partial_answers() {
        let def = QuestionnaireDefinition::standard();
        let answers = AnswerSet::from_pairs((1..=10).map(|id| (id, 3))).unwrap_or_default();

        let report = def.completion(&answers);
        assert!(!report.is_complete);
        assert_eq!(report.answered_count, 10);
        assert_eq!(report.total_count, 50);
        assert_eq!(report.completion_rate, 20);
        assert_eq!(report.unanswered.first(), Some(&11));
        assert_eq!(report.unanswered.len(), 40);
    }

    #[test]
    fn progress_text_format() {
        let def = QuestionnaireDefinition::standard();
        let answers = AnswerSet::from_pairs((1..=12).map(|id| (id, 4))).unwrap_or_default();

        let progress = def.progress(&answers, 13);
        assert_eq!(progress.progress_text, "12/50 (24%)");
        assert_eq!(progress.remaining, 38);
        assert_eq!(progress.current, 13);
    }

    #[test]
    fn check_answers_flags_unknown_ids() {
        let def = QuestionnaireDefinition::standard();
        let answers = AnswerSet::from_pairs([(1, 3), (77, 2)]).unwrap_or_default();
        assert_eq!(
            def.check_answers(&answers),
            Err(Error::UnknownQuestion { question: 77 })
        );
    }

    #[test]
    fn answer_labels() {
        assert_eq!(answer_label(1), Some("Strongly Disagree"));
        assert_eq!(answer_label(5), Some("Strongly Agree"));
        assert_eq!(answer_label(0), None);
        assert_eq!(answer_label(6), None);
    }
}
