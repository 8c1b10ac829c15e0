//! # MBTI Module
//!
//! Four axis classifications → composite type, overall confidence and
//! profile.
//!
//! The composite is always ordered E/I, S/N, T/F, J/P. Overall confidence is
//! the geometric mean of the four axis confidences, as an integer percent.
//! Profile lookup goes through a static table; a miss falls back to
//! [`DEFAULT_PROFILE_CODE`] and is flagged on the result.

mod axis;
mod profiles;

pub use axis::{Axis, AxisClassifier, AxisResult, Letter};
pub use profiles::{MbtiProfile, DEFAULT_PROFILE_CODE};

use crate::aggregate::TraitAverages;
use crate::primitives::Confidence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// COMPOSITE TYPE
// =============================================================================

/// A four-letter MBTI type such as `ENFJ`.
///
/// Each position can only hold a letter of its own axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MbtiType {
    ei: Letter,
    sn: Letter,
    tf: Letter,
    jp: Letter,
}

impl MbtiType {
    /// Build from four letters in composite order.
    ///
    /// Returns `None` if a letter sits on the wrong axis.
    #[must_use]
    pub fn new(ei: Letter, sn: Letter, tf: Letter, jp: Letter) -> Option<Self> {
        let placed = [(ei, Axis::EI), (sn, Axis::SN), (tf, Axis::TF), (jp, Axis::JP)];
        placed
            .iter()
            .all(|(letter, axis)| letter.axis() == *axis)
            .then_some(Self { ei, sn, tf, jp })
    }

    /// The letter on one axis.
    #[must_use]
    pub fn letter(&self, axis: Axis) -> Letter {
        match axis {
            Axis::EI => self.ei,
            Axis::SN => self.sn,
            Axis::TF => self.tf,
            Axis::JP => self.jp,
        }
    }

    #[must_use]
    pub fn letters(&self) -> [Letter; 4] {
        [self.ei, self.sn, self.tf, self.jp]
    }

    /// Every one of the 16 types, in axis-major order.
    #[must_use]
    pub fn all() -> Vec<MbtiType> {
        let mut types = Vec::with_capacity(16);
        for ei in [Letter::E, Letter::I] {
            for sn in [Letter::S, Letter::N] {
                for tf in [Letter::T, Letter::F] {
                    for jp in [Letter::J, Letter::P] {
                        types.push(Self { ei, sn, tf, jp });
                    }
                }
            }
        }
        types
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for MbtiType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<Letter> = s
            .chars()
            .map(|c| Letter::from_char(c).ok_or_else(|| format!("'{}' is not an MBTI letter", c)))
            .collect::<Result<_, _>>()?;
        match letters.as_slice() {
            [ei, sn, tf, jp] => Self::new(*ei, *sn, *tf, *jp)
                .ok_or_else(|| format!("'{}' has letters out of E/I, S/N, T/F, J/P order", s)),
            _ => Err(format!("'{}' must have exactly four letters", s)),
        }
    }
}

impl From<MbtiType> for String {
    fn from(value: MbtiType) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for MbtiType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// The four axis results, keyed as in the external output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AxisResults {
    pub ei: AxisResult,
    pub sn: AxisResult,
    pub tf: AxisResult,
    pub jp: AxisResult,
}

impl AxisResults {
    #[must_use]
    pub fn get(&self, axis: Axis) -> &AxisResult {
        match axis {
            Axis::EI => &self.ei,
            Axis::SN => &self.sn,
            Axis::TF => &self.tf,
            Axis::JP => &self.jp,
        }
    }

    #[must_use]
    pub fn confidences(&self) -> [Confidence; 4] {
        [
            self.ei.confidence,
            self.sn.confidence,
            self.tf.confidence,
            self.jp.confidence,
        ]
    }
}

/// Full MBTI classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiResult {
    #[serde(rename = "type")]
    pub mbti_type: MbtiType,
    pub dimensions: AxisResults,
    /// Integer percent, `50..=90` for classifier-produced axes.
    pub confidence: u8,
    pub profile: &'static MbtiProfile,
    /// Set when `profile` is the default because the type had no entry.
    pub profile_fallback: bool,
    pub analysis: MbtiAnalysis,
}

// =============================================================================
// COMPOSER
// =============================================================================

/// Assembles the four axes into an [`MbtiResult`].
pub struct MbtiComposer;

impl MbtiComposer {
    /// Classify all four axes from the trait averages and compose.
    #[must_use]
    pub fn compose(averages: &TraitAverages) -> MbtiResult {
        let classify = |axis: Axis| AxisClassifier::classify(axis, averages.get(axis.source()));
        Self::from_axes(AxisResults {
            ei: classify(Axis::EI),
            sn: classify(Axis::SN),
            tf: classify(Axis::TF),
            jp: classify(Axis::JP),
        })
    }

    /// Compose already-classified axes.
    #[must_use]
    pub fn from_axes(dimensions: AxisResults) -> MbtiResult {
        let mbti_type = MbtiType {
            ei: dimensions.ei.letter,
            sn: dimensions.sn.letter,
            tf: dimensions.tf.letter,
            jp: dimensions.jp.letter,
        };
        let confidence = overall_confidence(dimensions.confidences());
        let (profile, profile_fallback) = resolve_profile(&mbti_type);
        let analysis = MbtiAnalysis::build(&dimensions, profile);

        MbtiResult {
            mbti_type,
            dimensions,
            confidence,
            profile,
            profile_fallback,
            analysis,
        }
    }
}

/// Look up the profile for a type, falling back to the default profile.
///
/// The boolean is `true` when the fallback was used.
#[must_use]
pub fn resolve_profile(mbti_type: &MbtiType) -> (&'static MbtiProfile, bool) {
    match MbtiProfile::find(&mbti_type.to_string()) {
        Some(profile) => (profile, false),
        None => (MbtiProfile::default_profile(), true),
    }
}

/// Geometric mean of four per-mille confidences as a rounded percent.
///
/// With `m` the geometric mean in per-mille, the answer is `round(m / 10)`:
/// the largest `n` such that `(10n − 5)^4 ≤ product`. Halves round up.
#[must_use]
pub fn overall_confidence(confidences: [Confidence; 4]) -> u8 {
    let product: u128 = confidences
        .iter()
        .map(|c| u128::from(c.permille()))
        .product();

    let mut percent = 0u8;
    for n in 1..=100u8 {
        let edge = u128::from(n) * 10 - 5;
        if edge * edge * edge * edge <= product {
            percent = n;
        } else {
            break;
        }
    }
    percent
}

// =============================================================================
// ANALYSIS
// =============================================================================

/// Structured reading of an MBTI result, assembled from fixed templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiAnalysis {
    pub overview: String,
    pub strengths: Vec<String>,
    pub development: Vec<String>,
    pub career: Vec<String>,
    pub relationships: Vec<String>,
    pub work_style: Vec<String>,
}

impl MbtiAnalysis {
    fn build(dimensions: &AxisResults, profile: &MbtiProfile) -> Self {
        let names: Vec<&str> = Axis::ALL
            .iter()
            .map(|axis| dimensions.get(*axis).letter.full_name())
            .collect();
        let to_strings = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();

        Self {
            overview: format!(
                "As a {} ({}), {}",
                profile.name,
                names.join(", "),
                lowercase_first(profile.description)
            ),
            strengths: to_strings(profile.strengths),
            development: to_strings(profile.growth_areas),
            career: to_strings(profile.career),
            relationships: relationship_advice(dimensions),
            work_style: work_style_advice(dimensions),
        }
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn relationship_advice(dimensions: &AxisResults) -> Vec<String> {
    let mut advice = Vec::with_capacity(4);

    if dimensions.ei.letter == Letter::I {
        advice.push("Needs plenty of time alone to recharge");
        advice.push("Does best in deep one-to-one conversations");
    } else {
        advice.push("Draws energy and inspiration from social interaction");
        advice.push("Enjoys connecting with many different people");
    }

    if dimensions.tf.letter == Letter::F {
        advice.push("Values harmony and avoids unnecessary conflict");
        advice.push("Is highly sensitive to the emotional needs of others");
    } else {
        advice.push("Values honest and direct communication");
        advice.push("Leans on objective analysis when making decisions");
    }

    advice.into_iter().map(String::from).collect()
}

fn work_style_advice(dimensions: &AxisResults) -> Vec<String> {
    let mut advice = Vec::with_capacity(4);

    if dimensions.jp.letter == Letter::J {
        advice.push("Prefers a planned and orderly work environment");
        advice.push("Is good at finishing tasks and goals on time");
    } else {
        advice.push("Does best in flexible, changing environments");
        advice.push("Enjoys juggling several projects at once");
    }

    if dimensions.sn.letter == Letter::N {
        advice.push("Focuses on new ideas and future possibilities");
        advice.push("Sees the big picture and emerging trends");
    } else {
        advice.push("Focuses on concrete details and practical application");
        advice.push("Excels at hands-on, tangible work");
    }

    advice.into_iter().map(String::from).collect()
}

// =============================================================================
// TESTS
// =============================================================================
