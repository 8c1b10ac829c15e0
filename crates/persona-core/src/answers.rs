//! # Answer Set
//!
//! Question id → Likert response, with every value range-checked on entry.
//! Partial completion is normal: unanswered ids are simply absent.

use crate::error::{Error, Result};
use crate::primitives::{LIKERT_MAX, LIKERT_MIN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A respondent's answers.
///
/// Iteration is in ascending question id. Values are guaranteed to be in
/// `[1, 5]`; whether every id exists in a given questionnaire is checked by
/// [`QuestionnaireDefinition::check_answers`](crate::QuestionnaireDefinition::check_answers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u16, i64>", into = "BTreeMap<u16, u8>")]
pub struct AnswerSet {
    answers: BTreeMap<u16, u8>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(question, value)` pairs. Later pairs overwrite earlier
    /// ones for the same question.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u16, i64)>,
    {
        let mut set = Self::new();
        for (question, value) in pairs {
            set.insert(question, value)?;
        }
        Ok(set)
    }

    /// The same answer for every id in `ids`.
    pub fn uniform<I>(ids: I, value: i64) -> Result<Self>
    where
        I: IntoIterator<Item = u16>,
    {
        Self::from_pairs(ids.into_iter().map(|id| (id, value)))
    }

    /// Record an answer, replacing any previous answer to the question.
    pub fn insert(&mut self, question: u16, value: i64) -> Result<()> {
        if question == 0 {
            return Err(Error::MalformedAnswers(
                "question ids start at 1".to_string(),
            ));
        }
        let in_range = (i64::from(LIKERT_MIN)..=i64::from(LIKERT_MAX)).contains(&value);
        if !in_range {
            return Err(Error::AnswerOutOfRange { question, value });
        }
        self.answers.insert(question, value as u8);
        Ok(())
    }

    /// Remove an answer, returning it if present.
    pub fn remove(&mut self, question: u16) -> Option<u8> {
        self.answers.remove(&question)
    }

    #[must_use]
    pub fn get(&self, question: u16) -> Option<u8> {
        self.answers.get(&question).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.answers.iter().map(|(id, value)| (*id, *value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl TryFrom<BTreeMap<u16, i64>> for AnswerSet {
    type Error = Error;

    fn try_from(raw: BTreeMap<u16, i64>) -> Result<Self> {
        Self::from_pairs(raw)
    }
}

impl From<AnswerSet> for BTreeMap<u16, u8> {
    fn from(set: AnswerSet) -> Self {
        set.answers
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_accepts_likert_range() {
        let mut set = AnswerSet::new();
        for value in 1..=5 {
            assert!(set.insert(1, value).is_ok());
        }
        assert_eq!(set.get(1), Some(5));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn insert_rejects_out_of_range() {
        let mut set = AnswerSet::new();
        assert_eq!(
            set.insert(3, 0),
            Err(Error::AnswerOutOfRange { question: 3, value: 0 })
        );
        assert_eq!(
            set.insert(3, 6),
            Err(Error::AnswerOutOfRange { question: 3, value: 6 })
        );
        assert!(set.is_empty());
    }

    #[test]
    fn insert_rejects_question_zero() {
        let mut set = AnswerSet::new();
        assert!(matches!(set.insert(0, 3), Err(Error::MalformedAnswers(_))));
    }

    #[test]
    fn iteration_is_ordered_by_id() {
        let set = AnswerSet::from_pairs([(9, 1), (2, 2), (5, 3)]).unwrap_or_default();
        let ids: Vec<u16> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn deserialize_validates_values() {
        let ok: std::result::Result<AnswerSet, _> = serde_json::from_str(r#"{"1": 4, "2": 5}"#);
        assert_eq!(ok.ok().map(|s| s.len()), Some(2));

        let bad: std::result::Result<AnswerSet, _> = serde_json::from_str(r#"{"1": 9}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn remove_returns_previous_value() {
        let mut set = AnswerSet::uniform(1..=3, 2).unwrap_or_default();
        assert_eq!(set.remove(2), Some(2));
        assert_eq!(set.remove(2), None);
        assert_eq!(set.len(), 2);
    }
}
