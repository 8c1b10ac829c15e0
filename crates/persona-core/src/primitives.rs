//! # Primitives
//!
//! Fixed-point value types shared by every engine component.
//!
//! The engine never performs floating-point arithmetic. Trait averages are
//! carried in hundredths of a Likert point, percentages in tenths of a
//! percent and confidences in per-mille. Conversions to `f64` exist only for
//! serialization and display.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Lowest valid Likert response.
pub const LIKERT_MIN: u8 = 1;

/// Highest valid Likert response.
pub const LIKERT_MAX: u8 = 5;

/// Number of items per dimension in a complete questionnaire.
pub const ITEMS_PER_DIMENSION: u8 = 10;

/// Upper bound of a trait average in hundredths (5.00).
pub const MAX_AVERAGE_HUNDREDTHS: u16 = 500;

/// Upper bound of any derived confidence in per-mille (0.900).
pub const MAX_DERIVED_CONFIDENCE: u16 = 900;

/// Integer division rounding half away from zero, for non-negative operands.
///
/// Returns 0 when `den` is 0.
#[must_use]
pub fn div_round(num: u64, den: u64) -> u64 {
    if den == 0 {
        return 0;
    }
    num.saturating_mul(2).saturating_add(den) / den.saturating_mul(2)
}

/// Signed variant of [`div_round`]; halves round away from zero.
#[must_use]
pub fn div_round_signed(num: i64, den: i64) -> i64 {
    if den == 0 {
        return 0;
    }
    let magnitude = div_round(num.unsigned_abs(), den.unsigned_abs()) as i64;
    if (num < 0) != (den < 0) {
        -magnitude
    } else {
        magnitude
    }
}

// =============================================================================
// DIMENSION
// =============================================================================

/// One of the five Big Five (OCEAN) personality dimensions.
///
/// The declaration order is the canonical order used everywhere a scan or
/// a tie-break depends on order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Openness,
        Dimension::Conscientiousness,
        Dimension::Extraversion,
        Dimension::Agreeableness,
        Dimension::Neuroticism,
    ];

    /// Machine key, as used in questionnaire files and JSON output.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::Extraversion => "extraversion",
            Self::Agreeableness => "agreeableness",
            Self::Neuroticism => "neuroticism",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Openness => "Openness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Neuroticism => "Neuroticism",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Openness => "Reflects openness to new experiences",
            Self::Conscientiousness => "Reflects organization in goal-oriented behavior",
            Self::Extraversion => "Reflects energy level in social interactions",
            Self::Agreeableness => "Reflects concern for others",
            Self::Neuroticism => "Reflects emotional stability and stress coping",
        }
    }

    /// Parse a machine key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TRAIT AVERAGE
// =============================================================================

/// A trait average in hundredths of a Likert point, always within `[0, 500]`.
///
/// Every constructor clamps, so downstream classification never sees a
/// value outside `[0.00, 5.00]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct TraitAverage(u16);

impl TraitAverage {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(MAX_AVERAGE_HUNDREDTHS);

    /// Create from hundredths, clamping to `[0, 500]`.
    #[must_use]
    pub const fn from_hundredths(hundredths: u16) -> Self {
        if hundredths > MAX_AVERAGE_HUNDREDTHS {
            Self(MAX_AVERAGE_HUNDREDTHS)
        } else {
            Self(hundredths)
        }
    }

    /// Mean of `count` responses summing to `total`, rounded half-up to
    /// hundredths. Zero responses yield zero.
    #[must_use]
    pub fn from_ratio(total: u64, count: u64) -> Self {
        let hundredths = div_round(total.saturating_mul(100), count);
        Self::from_hundredths(hundredths.min(u64::from(MAX_AVERAGE_HUNDREDTHS)) as u16)
    }

    /// Convert a floating-point average, rounding to hundredths.
    ///
    /// Finite values outside `[0, 5]` are clamped. NaN and infinities are
    /// rejected.
    #[allow(clippy::float_arithmetic)]
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NonFiniteTraitAverage);
        }
        let scaled = (value * 100.0).round().clamp(0.0, f64::from(MAX_AVERAGE_HUNDREDTHS));
        Ok(Self(scaled as u16))
    }

    #[must_use]
    pub const fn hundredths(self) -> u16 {
        self.0
    }

    /// Percentage of the maximum (5.00) in tenths of a percent.
    #[must_use]
    pub const fn percentage(self) -> Percentage {
        Percentage(self.0 * 2)
    }

    #[allow(clippy::float_arithmetic)]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<TraitAverage> for f64 {
    fn from(value: TraitAverage) -> Self {
        value.as_f64()
    }
}

impl TryFrom<f64> for TraitAverage {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

impl fmt::Display for TraitAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// PERCENTAGE
// =============================================================================

/// A percentage in tenths of a percent, within `[0, 1000]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct Percentage(u16);

impl Percentage {
    #[must_use]
    pub const fn from_tenths(tenths: u16) -> Self {
        if tenths > 1000 { Self(1000) } else { Self(tenths) }
    }

    #[must_use]
    pub const fn tenths(self) -> u16 {
        self.0
    }

    #[allow(clippy::float_arithmetic)]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl From<Percentage> for f64 {
    fn from(value: Percentage) -> Self {
        value.as_f64()
    }
}

impl From<f64> for Percentage {
    #[allow(clippy::float_arithmetic)]
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0);
        }
        Self::from_tenths((value * 10.0).round().clamp(0.0, 1000.0) as u16)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}%", self.0 / 10, self.0 % 10)
    }
}

// =============================================================================
// SIGNED CHANGES
// =============================================================================

/// Render a signed scaled integer with an explicit sign, e.g. `-150` at
/// scale 100 as `-1.50`.
fn write_signed(f: &mut fmt::Formatter<'_>, value: i32, scale: u32, digits: usize) -> fmt::Result {
    let sign = if value < 0 { '-' } else { '+' };
    let magnitude = value.unsigned_abs();
    write!(
        f,
        "{}{}.{:0width$}",
        sign,
        magnitude / scale,
        magnitude % scale,
        width = digits
    )
}

/// Signed difference between two trait averages, in hundredths of a point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct AverageChange(i32);

impl AverageChange {
    #[must_use]
    pub const fn from_hundredths(hundredths: i32) -> Self {
        Self(hundredths)
    }

    /// `new - old`.
    #[must_use]
    pub fn between(old: TraitAverage, new: TraitAverage) -> Self {
        Self(i32::from(new.hundredths()) - i32::from(old.hundredths()))
    }

    #[must_use]
    pub const fn hundredths(self) -> i32 {
        self.0
    }

    #[allow(clippy::float_arithmetic)]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<AverageChange> for f64 {
    fn from(value: AverageChange) -> Self {
        value.as_f64()
    }
}

impl From<f64> for AverageChange {
    #[allow(clippy::float_arithmetic)]
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0);
        }
        let bound = f64::from(MAX_AVERAGE_HUNDREDTHS);
        Self((value * 100.0).round().clamp(-bound, bound) as i32)
    }
}

impl fmt::Display for AverageChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_signed(f, self.0, 100, 2)
    }
}

/// Signed relative change in tenths of a percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct PercentChange(i32);

impl PercentChange {
    #[must_use]
    pub const fn from_tenths(tenths: i32) -> Self {
        Self(tenths)
    }

    /// `change / old`, rounded half away from zero. `None` when `old` is zero.
    #[must_use]
    pub fn relative(change: AverageChange, old: TraitAverage) -> Option<Self> {
        let base = i64::from(old.hundredths());
        (base > 0).then(|| Self(div_round_signed(i64::from(change.hundredths()) * 1000, base) as i32))
    }

    #[must_use]
    pub const fn tenths(self) -> i32 {
        self.0
    }

    #[allow(clippy::float_arithmetic)]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl From<PercentChange> for f64 {
    fn from(value: PercentChange) -> Self {
        value.as_f64()
    }
}

impl From<f64> for PercentChange {
    #[allow(clippy::float_arithmetic)]
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0);
        }
        Self((value * 10.0).round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32)
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_signed(f, self.0, 10, 1)?;
        f.write_str("%")
    }
}

// =============================================================================
// CONFIDENCE
// =============================================================================

/// A confidence in per-mille, within `[0, 1000]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct Confidence(u16);

impl Confidence {
    /// The fixed confidence of an ambiguous-zone classification (0.5).
    pub const NEUTRAL: Self = Self(500);
    /// The ceiling of every derived confidence (0.9).
    pub const CEILING: Self = Self(MAX_DERIVED_CONFIDENCE);

    #[must_use]
    pub const fn from_permille(permille: u16) -> Self {
        if permille > 1000 { Self(1000) } else { Self(permille) }
    }

    #[must_use]
    pub const fn permille(self) -> u16 {
        self.0
    }

    /// Cap at the derived-confidence ceiling of 0.9.
    #[must_use]
    pub fn capped(self) -> Self {
        Self(self.0.min(MAX_DERIVED_CONFIDENCE))
    }

    #[allow(clippy::float_arithmetic)]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 1000.0
    }
}

impl From<Confidence> for f64 {
    fn from(value: Confidence) -> Self {
        value.as_f64()
    }
}

impl From<f64> for Confidence {
    #[allow(clippy::float_arithmetic)]
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0);
        }
        Self::from_permille((value * 1000.0).round().clamp(0.0, 1000.0) as u16)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.0 / 1000, self.0 % 1000)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_round_half_up() {
        assert_eq!(div_round(5, 2), 3);
        assert_eq!(div_round(4, 3), 1);
        assert_eq!(div_round(5, 3), 2);
        assert_eq!(div_round(7, 0), 0);
    }

    #[test]
    fn div_round_signed_is_symmetric() {
        assert_eq!(div_round_signed(5, 2), 3);
        assert_eq!(div_round_signed(-5, 2), -3);
        assert_eq!(div_round_signed(-4, 3), -1);
    }

    #[test]
    fn trait_average_rounds_to_hundredths() {
        // 11 / 3 = 3.666..
        assert_eq!(TraitAverage::from_ratio(11, 3).hundredths(), 367);
        // 25 / 8 = 3.125 rounds up
        assert_eq!(TraitAverage::from_ratio(25, 8).hundredths(), 313);
        assert_eq!(TraitAverage::from_ratio(0, 0), TraitAverage::ZERO);
    }

    #[test]
    fn trait_average_clamps() {
        assert_eq!(TraitAverage::from_hundredths(900), TraitAverage::MAX);
        assert_eq!(TraitAverage::from_f64(7.5).ok(), Some(TraitAverage::MAX));
        assert_eq!(TraitAverage::from_f64(-1.0).ok(), Some(TraitAverage::ZERO));
        assert!(TraitAverage::from_f64(f64::NAN).is_err());
        assert!(TraitAverage::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn percentage_is_exact() {
        assert_eq!(TraitAverage::from_hundredths(367).percentage().tenths(), 734);
        assert_eq!(TraitAverage::MAX.percentage().tenths(), 1000);
    }

    #[test]
    fn display_formats() {
        assert_eq!(TraitAverage::from_hundredths(305).to_string(), "3.05");
        assert_eq!(Percentage::from_tenths(734).to_string(), "73.4%");
        assert_eq!(Confidence::CEILING.to_string(), "0.900");
    }

    #[test]
    fn dimension_keys_round_trip() {
        for dimension in Dimension::ALL {
            assert_eq!(Dimension::from_key(dimension.key()), Some(dimension));
        }
        assert_eq!(Dimension::from_key("honesty"), None);
    }

    #[test]
    fn serde_uses_decimal_values() {
        let json = serde_json::to_string(&TraitAverage::from_hundredths(350)).unwrap_or_default();
        assert_eq!(json, "3.5");
        let json = serde_json::to_string(&Confidence::CEILING).unwrap_or_default();
        assert_eq!(json, "0.9");
    }

    #[test]
    fn changes_are_signed_and_decimal() {
        let up = AverageChange::between(TraitAverage::from_hundredths(200), TraitAverage::from_hundredths(300));
        assert_eq!(up.hundredths(), 100);
        assert_eq!(up.to_string(), "+1.00");
        assert_eq!(AverageChange::from_hundredths(-5).to_string(), "-0.05");

        let percent = PercentChange::relative(up, TraitAverage::from_hundredths(200));
        assert_eq!(percent.map(PercentChange::tenths), Some(500));
        assert_eq!(percent.map(|p| p.to_string()), Some("+50.0%".to_string()));
        assert_eq!(PercentChange::relative(up, TraitAverage::ZERO), None);

        // -0.50 / 4.00 = -12.5% rounds away from zero
        let down = PercentChange::relative(AverageChange::from_hundredths(-50), TraitAverage::from_hundredths(400));
        assert_eq!(down.map(PercentChange::tenths), Some(-125));
    }

    #[test]
    fn changes_serialize_as_decimals() {
        let json = serde_json::to_string(&AverageChange::from_hundredths(-150)).unwrap_or_default();
        assert_eq!(json, "-1.5");
        let json = serde_json::to_string(&PercentChange::from_tenths(500)).unwrap_or_default();
        assert_eq!(json, "50.0");
    }
}
