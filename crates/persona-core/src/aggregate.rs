//! # Score Aggregation
//!
//! Raw answers → per-dimension statistics.
//!
//! For every dimension the answered items are collected in questionnaire
//! order. Unanswered items are excluded from `count` and `total`; nothing is
//! imputed. The average is the rounded mean of the answered items and the
//! percentage is derived from that rounded average.

use crate::answers::AnswerSet;
use crate::error::{Error, Result};
use crate::primitives::{
    Dimension, Percentage, TraitAverage, ITEMS_PER_DIMENSION, LIKERT_MAX, LIKERT_MIN,
};
use crate::questionnaire::QuestionnaireDefinition;
use serde::{Deserialize, Serialize};

/// Statistics for one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitScore {
    /// Answered values in questionnaire order.
    pub scores: Vec<u8>,
    pub total: u16,
    pub average: TraitAverage,
    pub count: u8,
    /// Items in the dimension, answered or not.
    pub max_possible: u8,
    pub percentage: Percentage,
}

impl TraitScore {
    /// Build the statistics from answered values.
    ///
    /// Every value must be a Likert response and a dimension holds at most
    /// ten items.
    pub fn from_scores(scores: Vec<u8>) -> Result<Self> {
        if scores.len() > usize::from(ITEMS_PER_DIMENSION) {
            return Err(Error::MalformedAnswers(format!(
                "{} answers for one dimension, expected at most {}",
                scores.len(),
                ITEMS_PER_DIMENSION
            )));
        }
        if let Some(value) = scores.iter().find(|v| !(LIKERT_MIN..=LIKERT_MAX).contains(*v)) {
            return Err(Error::MalformedAnswers(format!(
                "score {} is outside {}-{}",
                value, LIKERT_MIN, LIKERT_MAX
            )));
        }
        Ok(Self::tally(scores))
    }

    /// Statistics over values already checked by [`AnswerSet`] and a
    /// validated questionnaire.
    fn tally(scores: Vec<u8>) -> Self {
        let total = scores
            .iter()
            .fold(0u16, |sum, &s| sum.saturating_add(u16::from(s)));
        let count = scores.len().min(usize::from(ITEMS_PER_DIMENSION)) as u8;
        let average = TraitAverage::from_ratio(u64::from(total), u64::from(count));

        Self {
            scores,
            total,
            average,
            count,
            max_possible: ITEMS_PER_DIMENSION,
            percentage: average.percentage(),
        }
    }
}

/// Statistics for all five dimensions.
///
/// Produced once per answer set and never mutated by the later stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScoreSet {
    pub openness: TraitScore,
    pub conscientiousness: TraitScore,
    pub extraversion: TraitScore,
    pub agreeableness: TraitScore,
    pub neuroticism: TraitScore,
}

impl TraitScoreSet {
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> &TraitScore {
        match dimension {
            Dimension::Openness => &self.openness,
            Dimension::Conscientiousness => &self.conscientiousness,
            Dimension::Extraversion => &self.extraversion,
            Dimension::Agreeableness => &self.agreeableness,
            Dimension::Neuroticism => &self.neuroticism,
        }
    }

    fn get_mut(&mut self, dimension: Dimension) -> &mut TraitScore {
        match dimension {
            Dimension::Openness => &mut self.openness,
            Dimension::Conscientiousness => &mut self.conscientiousness,
            Dimension::Extraversion => &mut self.extraversion,
            Dimension::Agreeableness => &mut self.agreeableness,
            Dimension::Neuroticism => &mut self.neuroticism,
        }
    }

    /// Average of one dimension.
    #[must_use]
    pub fn average(&self, dimension: Dimension) -> TraitAverage {
        self.get(dimension).average
    }

    /// The five averages as a compact profile.
    #[must_use]
    pub fn averages(&self) -> TraitAverages {
        TraitAverages {
            openness: self.openness.average,
            conscientiousness: self.conscientiousness.average,
            extraversion: self.extraversion.average,
            agreeableness: self.agreeableness.average,
            neuroticism: self.neuroticism.average,
        }
    }

    /// `(dimension, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &TraitScore)> {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

/// Just the five trait averages, the input of every classifier.
///
/// Can be built directly from floating-point values, in which case each
/// value is clamped into `[0, 5]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitAverages {
    pub openness: TraitAverage,
    pub conscientiousness: TraitAverage,
    pub extraversion: TraitAverage,
    pub agreeableness: TraitAverage,
    pub neuroticism: TraitAverage,
}

impl TraitAverages {
    /// All five dimensions at the same average.
    #[must_use]
    pub fn uniform(average: TraitAverage) -> Self {
        Self {
            openness: average,
            conscientiousness: average,
            extraversion: average,
            agreeableness: average,
            neuroticism: average,
        }
    }

    #[must_use]
    pub fn get(&self, dimension: Dimension) -> TraitAverage {
        match dimension {
            Dimension::Openness => self.openness,
            Dimension::Conscientiousness => self.conscientiousness,
            Dimension::Extraversion => self.extraversion,
            Dimension::Agreeableness => self.agreeableness,
            Dimension::Neuroticism => self.neuroticism,
        }
    }

    /// Return a copy with one dimension replaced.
    #[must_use]
    pub fn with(mut self, dimension: Dimension, average: TraitAverage) -> Self {
        match dimension {
            Dimension::Openness => self.openness = average,
            Dimension::Conscientiousness => self.conscientiousness = average,
            Dimension::Extraversion => self.extraversion = average,
            Dimension::Agreeableness => self.agreeableness = average,
            Dimension::Neuroticism => self.neuroticism = average,
        }
        self
    }
}

impl From<&TraitScoreSet> for TraitAverages {
    fn from(set: &TraitScoreSet) -> Self {
        set.averages()
    }
}

// =============================================================================
// AGGREGATOR
// =============================================================================

/// Turns an answer set into a [`TraitScoreSet`].
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Aggregate answers against a questionnaire.
    ///
    /// Total for every answer set: answers to ids the questionnaire does not
    /// define are ignored here (reject them beforehand with
    /// [`QuestionnaireDefinition::check_answers`]).
    #[must_use]
    pub fn aggregate(definition: &QuestionnaireDefinition, answers: &AnswerSet) -> TraitScoreSet {
        let mut set = TraitScoreSet::default();

        for dimension in Dimension::ALL {
            let scores: Vec<u8> = definition
                .items_for(dimension)
                .filter_map(|item| answers.get(item.id))
                .collect();
            *set.get_mut(dimension) = TraitScore::tally(scores);
        }

        set
    }
}

// =============================================================================
// TESTS
// =============================================================================
