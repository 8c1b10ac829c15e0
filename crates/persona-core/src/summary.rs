//! # Result Summary
//!
//! Per-dimension statistics → highest/lowest trait, overall average and a
//! coarse personality label. Also compares two scorings of the same person.

use crate::aggregate::TraitScoreSet;
use crate::primitives::{div_round, AverageChange, Dimension, PercentChange, TraitAverage};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label threshold for openness, conscientiousness, extraversion and
/// agreeableness (4.00).
const HIGH_TRAIT: u16 = 400;

/// Label threshold for neuroticism (2.00 or lower qualifies).
const LOW_NEUROTICISM: u16 = 200;

/// Qualifier count at which the label becomes "Multi-faceted".
const MULTI_FACETED_AT: usize = 3;

/// A dimension with its display name and average.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub name: String,
    pub score: TraitAverage,
}

impl DimensionScore {
    fn new(dimension: Dimension, score: TraitAverage) -> Self {
        Self {
            dimension,
            name: dimension.name().to_string(),
            score,
        }
    }
}

/// One entry of the ranked dimension list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedDimension {
    pub dimension: Dimension,
    pub average: TraitAverage,
    pub name: String,
}

/// Coarse personality label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PersonalityType {
    /// No dimension qualifies.
    Balanced,
    /// Three or more dimensions qualify.
    MultiFaceted,
    /// One or two qualifying dimensions, in canonical order.
    Traits(Vec<Dimension>),
}

impl PersonalityType {
    /// Short label of a qualifying dimension.
    #[must_use]
    pub fn trait_label(dimension: Dimension) -> &'static str {
        match dimension {
            Dimension::Openness => "Creative",
            Dimension::Conscientiousness => "Responsible",
            Dimension::Extraversion => "Outgoing",
            Dimension::Agreeableness => "Cooperative",
            Dimension::Neuroticism => "Emotionally stable",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => f.write_str("Balanced"),
            Self::MultiFaceted => f.write_str("Multi-faceted"),
            Self::Traits(dimensions) => {
                let labels: Vec<&str> = dimensions.iter().map(|d| Self::trait_label(*d)).collect();
                f.write_str(&labels.join(", "))
            }
        }
    }
}

impl From<PersonalityType> for String {
    fn from(value: PersonalityType) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for PersonalityType {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        match label.as_str() {
            "Balanced" => return Ok(Self::Balanced),
            "Multi-faceted" => return Ok(Self::MultiFaceted),
            _ => {}
        }
        label
            .split(", ")
            .map(|part| {
                Dimension::ALL
                    .into_iter()
                    .find(|d| Self::trait_label(*d) == part)
                    .ok_or_else(|| format!("unknown personality label: {}", part))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::Traits)
    }
}

/// Summary of a trait score set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    /// Mean of the five dimension averages.
    pub total_average: TraitAverage,
    pub highest: DimensionScore,
    pub lowest: DimensionScore,
    /// All dimensions by descending average; ties keep canonical order.
    pub dimensions: Vec<RankedDimension>,
    pub personality_type: PersonalityType,
}

// =============================================================================
// SUMMARIZER
// =============================================================================

/// Derives a [`ResultSummary`] from a [`TraitScoreSet`].
pub struct ResultSummarizer;

impl ResultSummarizer {
    #[must_use]
    pub fn summarize(scores: &TraitScoreSet) -> ResultSummary {
        let averages: Vec<(Dimension, TraitAverage)> = Dimension::ALL
            .into_iter()
            .map(|d| (d, scores.average(d)))
            .collect();

        let sum: u64 = averages.iter().map(|(_, a)| u64::from(a.hundredths())).sum();
        let total_average = TraitAverage::from_hundredths(div_round(sum, 5) as u16);

        let mut dimensions: Vec<RankedDimension> = averages
            .iter()
            .map(|&(dimension, average)| RankedDimension {
                dimension,
                average,
                name: dimension.name().to_string(),
            })
            .collect();
        dimensions.sort_by(|a, b| b.average.cmp(&a.average).then(a.dimension.cmp(&b.dimension)));

        ResultSummary {
            total_average,
            highest: Self::highest(&averages),
            lowest: Self::lowest(&averages),
            dimensions,
            personality_type: Self::personality_type(scores),
        }
    }

    /// Running maximum from 0 with strict `>`; the first canonical
    /// dimension wins ties and is reported when nothing exceeds 0.
    fn highest(averages: &[(Dimension, TraitAverage)]) -> DimensionScore {
        let mut best: Option<(Dimension, TraitAverage)> = None;
        let mut bound = TraitAverage::ZERO;
        for &(dimension, average) in averages {
            if average > bound {
                bound = average;
                best = Some((dimension, average));
            }
        }
        let (dimension, average) = best.unwrap_or_else(|| Self::first(averages));
        DimensionScore::new(dimension, average)
    }

    /// Running minimum from 5 with strict `<`; mirror of [`Self::highest`].
    fn lowest(averages: &[(Dimension, TraitAverage)]) -> DimensionScore {
        let mut best: Option<(Dimension, TraitAverage)> = None;
        let mut bound = TraitAverage::MAX;
        for &(dimension, average) in averages {
            if average < bound {
                bound = average;
                best = Some((dimension, average));
            }
        }
        let (dimension, average) = best.unwrap_or_else(|| Self::first(averages));
        DimensionScore::new(dimension, average)
    }

    fn first(averages: &[(Dimension, TraitAverage)]) -> (Dimension, TraitAverage) {
        averages
            .first()
            .copied()
            .unwrap_or((Dimension::Openness, TraitAverage::ZERO))
    }

    /// Count the qualifying dimensions and label them.
    #[must_use]
    pub fn personality_type(scores: &TraitScoreSet) -> PersonalityType {
        let qualifiers: Vec<Dimension> = Dimension::ALL
            .into_iter()
            .filter(|&d| {
                let average = scores.average(d).hundredths();
                match d {
                    Dimension::Neuroticism => average <= LOW_NEUROTICISM,
                    _ => average >= HIGH_TRAIT,
                }
            })
            .collect();

        match qualifiers.len() {
            0 => PersonalityType::Balanced,
            n if n >= MULTI_FACETED_AT => PersonalityType::MultiFaceted,
            _ => PersonalityType::Traits(qualifiers),
        }
    }
}

// =============================================================================
// COMPARISON
// =============================================================================

/// Direction of change between two scorings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

/// Change of one dimension between two scorings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitComparison {
    pub dimension: Dimension,
    pub old: TraitAverage,
    pub new: TraitAverage,
    pub change: AverageChange,
    /// `None` when `old` is zero.
    pub change_percent: Option<PercentChange>,
    pub trend: Trend,
}

/// Compare two scorings dimension by dimension, in canonical order.
#[must_use]
pub fn compare_results(old: &TraitScoreSet, new: &TraitScoreSet) -> Vec<TraitComparison> {
    Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let before = old.average(dimension);
            let after = new.average(dimension);
            let change = AverageChange::between(before, after);
            let change_percent = PercentChange::relative(change, before);
            let trend = match change.hundredths() {
                c if c > 0 => Trend::Rising,
                c if c < 0 => Trend::Falling,
                _ => Trend::Stable,
            };

            TraitComparison {
                dimension,
                old: before,
                new: after,
                change,
                change_percent,
                trend,
            }
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
