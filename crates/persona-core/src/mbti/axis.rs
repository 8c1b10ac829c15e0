//! # Axis Classification
//!
//! One trait average → one MBTI letter with a confidence.
//!
//! All four axes share one symmetric threshold rule:
//!
//! ```text
//!   0.00 ──────── 2.50 ═══ ambiguous ═══ 3.50 ──────── 5.00
//!   low letter     │   pivot at 3.00     │    high letter
//!   conf 0.5 + (2.5 − s)·0.4             conf 0.5 + (s − 3.5)·0.4
//!                  └─ conf fixed at 0.5 ─┘      (both capped at 0.9)
//! ```

use crate::primitives::{Confidence, Dimension, TraitAverage, MAX_DERIVED_CONFIDENCE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// At or above: the high letter with a scaled confidence.
const HIGH_THRESHOLD: u16 = 350;
/// At or below: the low letter with a scaled confidence.
const LOW_THRESHOLD: u16 = 250;
/// Inside the ambiguous zone, at or above picks the high letter.
const PIVOT: u16 = 300;
/// Confidence gained per hundredth beyond a threshold, in per-mille (0.4/pt).
const PERMILLE_PER_HUNDREDTH: u16 = 4;

// =============================================================================
// LETTERS AND AXES
// =============================================================================

/// One MBTI preference letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::S => 'S',
            Self::N => 'N',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Self::E),
            'I' => Some(Self::I),
            'S' => Some(Self::S),
            'N' => Some(Self::N),
            'T' => Some(Self::T),
            'F' => Some(Self::F),
            'J' => Some(Self::J),
            'P' => Some(Self::P),
            _ => None,
        }
    }

    /// Full preference name, e.g. "Extraversion".
    #[must_use]
    pub fn full_name(self) -> &'static str {
        match self {
            Self::E => "Extraversion",
            Self::I => "Introversion",
            Self::S => "Sensing",
            Self::N => "Intuition",
            Self::T => "Thinking",
            Self::F => "Feeling",
            Self::J => "Judging",
            Self::P => "Perceiving",
        }
    }

    /// The axis this letter belongs to.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::E | Self::I => Axis::EI,
            Self::S | Self::N => Axis::SN,
            Self::T | Self::F => Axis::TF,
            Self::J | Self::P => Axis::JP,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the four MBTI dichotomies, in composite order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    EI,
    SN,
    TF,
    JP,
}

/// Static binding of an axis to its source trait, letters and texts.
struct AxisTable {
    source: Dimension,
    high: Letter,
    low: Letter,
    high_clear: &'static str,
    low_clear: &'static str,
    high_slight: &'static str,
    low_slight: &'static str,
}

static EI_TABLE: AxisTable = AxisTable {
    source: Dimension::Extraversion,
    high: Letter::E,
    low: Letter::I,
    high_clear: "Extraverted: draws energy from the outside world, enjoys socializing and action",
    low_clear: "Introverted: draws energy from the inner world, enjoys solitude and deep thinking",
    high_slight: "Slightly extraverted: shows extraverted or introverted traits depending on the situation",
    low_slight: "Slightly introverted: shows introverted or extraverted traits depending on the situation",
};

static SN_TABLE: AxisTable = AxisTable {
    source: Dimension::Openness,
    high: Letter::N,
    low: Letter::S,
    high_clear: "Intuitive: focuses on possibilities and concepts, enjoys innovation and theory",
    low_clear: "Sensing: focuses on concrete facts and practical experience, prefers useful information",
    high_slight: "Slightly intuitive: balances present facts with future possibilities",
    low_slight: "Slightly sensing: balances practical experience with new ideas",
};

static TF_TABLE: AxisTable = AxisTable {
    source: Dimension::Agreeableness,
    high: Letter::F,
    low: Letter::T,
    high_clear: "Feeling: decides by values and interpersonal harmony, values empathy",
    low_clear: "Thinking: decides by logic and objective analysis, values fairness and principle",
    high_slight: "Slightly feeling: balances logical analysis with care for people",
    low_slight: "Slightly thinking: balances objective principles with relationships",
};

static JP_TABLE: AxisTable = AxisTable {
    source: Dimension::Conscientiousness,
    high: Letter::J,
    low: Letter::P,
    high_clear: "Judging: prefers a planned, orderly life and values results",
    low_clear: "Perceiving: prefers a flexible, open life and values the process",
    high_slight: "Slightly judging: finds a balance between planning and flexibility",
    low_slight: "Slightly perceiving: finds a balance between flexibility and planning",
};

impl Axis {
    /// All axes in composite order.
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    fn table(self) -> &'static AxisTable {
        match self {
            Self::EI => &EI_TABLE,
            Self::SN => &SN_TABLE,
            Self::TF => &TF_TABLE,
            Self::JP => &JP_TABLE,
        }
    }

    /// The Big Five dimension this axis is read from.
    #[must_use]
    pub fn source(self) -> Dimension {
        self.table().source
    }

    /// Letter chosen for high trait averages.
    #[must_use]
    pub fn high(self) -> Letter {
        self.table().high
    }

    /// Letter chosen for low trait averages.
    #[must_use]
    pub fn low(self) -> Letter {
        self.table().low
    }
}

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Outcome of classifying one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisResult {
    #[serde(rename = "type")]
    pub letter: Letter,
    /// Within `[0.5, 0.9]`.
    pub confidence: Confidence,
    /// The source trait average.
    pub score: TraitAverage,
    pub description: String,
    /// Full preference name of `letter`.
    pub full_type: String,
    /// Whether the score fell inside the ambiguous zone.
    pub ambiguous: bool,
}

/// Maps a trait average onto one axis.
pub struct AxisClassifier;

impl AxisClassifier {
    #[must_use]
    pub fn classify(axis: Axis, score: TraitAverage) -> AxisResult {
        let table = axis.table();
        let s = score.hundredths();

        let (letter, confidence, description, ambiguous) = if s >= HIGH_THRESHOLD {
            (table.high, Self::scaled(s - HIGH_THRESHOLD), table.high_clear, false)
        } else if s <= LOW_THRESHOLD {
            (table.low, Self::scaled(LOW_THRESHOLD - s), table.low_clear, false)
        } else if s >= PIVOT {
            (table.high, Confidence::NEUTRAL, table.high_slight, true)
        } else {
            (table.low, Confidence::NEUTRAL, table.low_slight, true)
        };

        AxisResult {
            letter,
            confidence,
            score,
            description: description.to_string(),
            full_type: letter.full_name().to_string(),
            ambiguous,
        }
    }

    /// `min(0.9, 0.5 + distance × 0.4)` with distance in hundredths.
    fn scaled(distance: u16) -> Confidence {
        let permille = Confidence::NEUTRAL
            .permille()
            .saturating_add(distance.saturating_mul(PERMILLE_PER_HUNDREDTH));
        Confidence::from_permille(permille.min(MAX_DERIVED_CONFIDENCE))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn avg(hundredths: u16) -> TraitAverage {
        TraitAverage::from_hundredths(hundredths)
    }

    #[test]
    fn bindings() {
        assert_eq!(Axis::EI.source(), Dimension::Extraversion);
        assert_eq!(Axis::SN.source(), Dimension::Openness);
        assert_eq!(Axis::TF.source(), Dimension::Agreeableness);
        assert_eq!(Axis::JP.source(), Dimension::Conscientiousness);
        assert_eq!((Axis::SN.high(), Axis::SN.low()), (Letter::N, Letter::S));
        assert_eq!((Axis::TF.high(), Axis::TF.low()), (Letter::F, Letter::T));
    }

    #[test]
    fn high_zone_scales_confidence() {
        let result = AxisClassifier::classify(Axis::EI, avg(400));
        assert_eq!(result.letter, Letter::E);
        // 0.5 + 0.5 × 0.4 = 0.7
        assert_eq!(result.confidence.permille(), 700);
        assert!(!result.ambiguous);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let at_high = AxisClassifier::classify(Axis::JP, avg(350));
        assert_eq!(at_high.letter, Letter::J);
        assert_eq!(at_high.confidence, Confidence::NEUTRAL);
        assert!(!at_high.ambiguous);

        let at_low = AxisClassifier::classify(Axis::JP, avg(250));
        assert_eq!(at_low.letter, Letter::P);
        assert_eq!(at_low.confidence, Confidence::NEUTRAL);
        assert!(!at_low.ambiguous);
    }

    #[test]
    fn confidence_caps_at_point_nine() {
        let top = AxisClassifier::classify(Axis::SN, avg(500));
        assert_eq!(top.letter, Letter::N);
        assert_eq!(top.confidence, Confidence::CEILING);

        let bottom = AxisClassifier::classify(Axis::SN, avg(0));
        assert_eq!(bottom.letter, Letter::S);
        assert_eq!(bottom.confidence, Confidence::CEILING);

        // 4.50 → 0.5 + 1.0 × 0.4 = 0.9 exactly
        let edge = AxisClassifier::classify(Axis::SN, avg(450));
        assert_eq!(edge.confidence, Confidence::CEILING);
    }

    #[test]
    fn ambiguous_zone_uses_pivot() {
        let above = AxisClassifier::classify(Axis::TF, avg(300));
        assert_eq!(above.letter, Letter::F);
        assert_eq!(above.confidence, Confidence::NEUTRAL);
        assert!(above.ambiguous);

        let below = AxisClassifier::classify(Axis::TF, avg(299));
        assert_eq!(below.letter, Letter::T);
        assert_eq!(below.confidence, Confidence::NEUTRAL);

        let near_high = AxisClassifier::classify(Axis::EI, avg(349));
        assert_eq!(near_high.letter, Letter::E);
        assert!(near_high.ambiguous);

        let near_low = AxisClassifier::classify(Axis::EI, avg(251));
        assert_eq!(near_low.letter, Letter::I);
        assert!(near_low.ambiguous);
    }

    #[test]
    fn description_follows_zone() {
        let clear = AxisClassifier::classify(Axis::EI, avg(420));
        assert!(clear.description.starts_with("Extraverted"));
        let slight = AxisClassifier::classify(Axis::EI, avg(280));
        assert!(slight.description.starts_with("Slightly introverted"));
        assert_eq!(slight.full_type, "Introversion");
    }

    #[test]
    fn letters_parse() {
        for axis in Axis::ALL {
            for letter in [axis.high(), axis.low()] {
                assert_eq!(Letter::from_char(letter.as_char()), Some(letter));
                assert_eq!(letter.axis(), axis);
            }
        }
        assert_eq!(Letter::from_char('x'), None);
        assert_eq!(Letter::from_char('e'), Some(Letter::E));
    }
}
