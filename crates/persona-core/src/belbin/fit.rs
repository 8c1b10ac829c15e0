//! # Role Fit Scoring
//!
//! Weighted-evidence fit of one Belbin role against the trait averages.
//!
//! Every role is a short list of bands. A band reads one trait average and
//! walks its tiers in order; the first tier whose threshold matches adds
//! its points and its reasoning line, and the band stops. Bands are
//! independent of each other. The sum is capped at 100 and the confidence
//! is `min(0.9, score / 120)`.
//!
//! The nine scorers differ only in their tables, so they share one type
//! and one static instance per role.

use super::roles::BelbinRole;
use crate::aggregate::TraitAverages;
use crate::primitives::{div_round, Confidence, Dimension, TraitAverage, MAX_DERIVED_CONFIDENCE};
use serde::{Deserialize, Serialize};

/// Upper bound of a fit score.
pub const MAX_FIT_SCORE: u8 = 100;

/// Score that maps onto a confidence of 1.0 before capping.
const CONFIDENCE_DIVISOR: u64 = 120;

// =============================================================================
// TABLE TYPES
// =============================================================================

/// Threshold on a trait average, in hundredths. All bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    AtLeast(u16),
    AtMost(u16),
    Between(u16, u16),
}

impl Threshold {
    #[must_use]
    pub fn matches(self, average: TraitAverage) -> bool {
        let v = average.hundredths();
        match self {
            Self::AtLeast(min) => v >= min,
            Self::AtMost(max) => v <= max,
            Self::Between(min, max) => v >= min && v <= max,
        }
    }
}

/// One rung of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub when: Threshold,
    pub points: u8,
    pub reason: &'static str,
}

/// A predictor trait with its tiers, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub dimension: Dimension,
    pub tiers: &'static [Tier],
}

impl Band {
    /// The first tier that fires for these averages, if any.
    #[must_use]
    pub fn fire(&self, averages: &TraitAverages) -> Option<&'static Tier> {
        let average = averages.get(self.dimension);
        self.tiers.iter().find(|tier| tier.when.matches(average))
    }
}

const fn tier(when: Threshold, points: u8, reason: &'static str) -> Tier {
    Tier { when, points, reason }
}

// =============================================================================
// RESULT
// =============================================================================

/// Fit of one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleFitResult {
    pub role: BelbinRole,
    /// Within `[0, 100]`.
    pub score: u8,
    /// `min(0.9, score / 120)`.
    pub confidence: Confidence,
    /// One line per band that fired, in band order.
    pub reasoning: Vec<String>,
}

// =============================================================================
// SCORER
// =============================================================================

/// Band table of one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleFitScorer {
    pub role: BelbinRole,
    pub bands: &'static [Band],
}

impl RoleFitScorer {
    /// The scorer for a role.
    #[must_use]
    pub fn for_role(role: BelbinRole) -> &'static RoleFitScorer {
        match role {
            BelbinRole::Coordinator => &COORDINATOR,
            BelbinRole::Shaper => &SHAPER,
            BelbinRole::Plant => &PLANT,
            BelbinRole::ResourceInvestigator => &RESOURCE_INVESTIGATOR,
            BelbinRole::Implementer => &IMPLEMENTER,
            BelbinRole::Finisher => &FINISHER,
            BelbinRole::Teamworker => &TEAMWORKER,
            BelbinRole::MonitorEvaluator => &MONITOR_EVALUATOR,
            BelbinRole::Specialist => &SPECIALIST,
        }
    }

    /// Score this role against the trait averages.
    #[must_use]
    pub fn score(&self, averages: &TraitAverages) -> RoleFitResult {
        let mut total: u16 = 0;
        let mut reasoning = Vec::with_capacity(self.bands.len());

        for band in self.bands {
            if let Some(tier) = band.fire(averages) {
                total = total.saturating_add(u16::from(tier.points));
                reasoning.push(tier.reason.to_string());
            }
        }

        let score = total.min(u16::from(MAX_FIT_SCORE)) as u8;
        RoleFitResult {
            role: self.role,
            score,
            confidence: fit_confidence(score),
            reasoning,
        }
    }

    /// Highest score this table can produce.
    #[must_use]
    pub fn max_score(&self) -> u8 {
        let sum: u16 = self
            .bands
            .iter()
            .map(|band| band.tiers.iter().map(|t| u16::from(t.points)).max().unwrap_or(0))
            .sum();
        sum.min(u16::from(MAX_FIT_SCORE)) as u8
    }
}

/// `min(0.9, score / 120)` in per-mille, rounded half-up.
#[must_use]
pub fn fit_confidence(score: u8) -> Confidence {
    let permille = div_round(u64::from(score) * 1000, CONFIDENCE_DIVISOR);
    Confidence::from_permille(permille.min(u64::from(MAX_DERIVED_CONFIDENCE)) as u16)
}

// =============================================================================
// ROLE TABLES
// =============================================================================

use Dimension::{Agreeableness, Conscientiousness, Extraversion, Neuroticism, Openness};
use Threshold::{AtLeast, AtMost, Between};

static COORDINATOR: RoleFitScorer = RoleFitScorer {
    role: BelbinRole::Coordinator,
    bands: &[
        Band {
            dimension: Agreeableness,
            tiers: &[
                tier(AtLeast(350), 30, "High agreeableness makes you good at coordinating and fostering teamwork"),
                tier(AtLeast(300), 20, "Moderate agreeableness gives you some ability to coordinate others"),
            ],
        },
        Band {
            dimension: Extraversion,
            tiers: &[
                tier(AtLeast(350), 25, "Extraversion gives you a solid base for communication and leadership"),
                tier(AtLeast(250), 15, "Moderate extraversion lets you communicate effectively"),
            ],
        },
        Band {
            dimension: Conscientiousness,
            tiers: &[
                tier(AtLeast(350), 25, "A strong sense of responsibility makes you a dependable core of the team"),
                tier(AtLeast(300), 15, "Conscientiousness gives you good organizing skills"),
            ],
        },
        Band {
            dimension: Openness,
            tiers: &[tier(Between(250, 400), 20, "Balanced openness lets you take in different opinions")],
        },
    ],
};

static SHAPER: RoleFitScorer = RoleFitScorer {
    role: BelbinRole::Shaper,
    bands: &[
        Band {
            dimension: Extraversion,
            tiers: &[
                tier(AtLeast(400), 35, "Strong extraversion gives you powerful drive"),
                tier(AtLeast(300), 25, "Extraversion gives you the ability to push the team forward"),
            ],
        },
        Band {
            dimension: Neuroticism,
            tiers: &[
                tier(AtMost(250), 30, "Emotional stability keeps you calm in the face of challenges"),
                tier(AtMost(300), 20, "Fairly stable emotions help you face challenges"),
            ],
        },
        Band {
            dimension: Conscientiousness,
            tiers: &[
                tier(AtLeast(350), 25, "Strong follow-through makes sure goals are reached"),
                tier(AtLeast(300), 15, "Conscientiousness gives you goal-oriented thinking"),
            ],
        },
    ],
};

static PLANT: RoleFitScorer = RoleFitScorer {
    role: BelbinRole::Plant,
    bands: &[
        Band {
            dimension: Openness,
            tiers: &[
                tier(AtLeast(400), 40, "High openness gives you a wealth of creative thinking"),
                tier(AtLeast(350), 30, "Openness gives you a good foundation for creativity"),
            ],
        },
        Band {
            dimension: Extraversion,
            tiers: &[
                tier(AtMost(250), 30, "Introversion lets you think deeply and innovate independently"),
                tier(AtMost(300), 20, "Moderate introversion helps creative thinking"),
            ],
        },
        Band {
            dimension: Conscientiousness,
            tiers: &[tier(Between(250, 350), 20, "Balanced conscientiousness helps ideas become reality")],
        },
    ],
};

static RESOURCE_INVESTIGATOR: RoleFitScorer = RoleFitScorer {
    role: BelbinRole::ResourceInvestigator,
    bands: &[
        Band {
            dimension: Extraversion,
            tiers: &[
                tier(AtLeast(350), 35, "Excellent social skills make you good at building outside contacts"),
                tier(AtLeast(300), 25, "Extraversion gives you a good base for communication"),
            ],
        },
        Band {
            dimension: Openness,
            tiers: &[
                tier(AtLeast(350), 30, "Strong curiosity drives you to explore new opportunities"),
                tier(AtLeast(300), 20, "Openness keeps you interested in new things"),
            ],
        },
        Band {
            dimension: Agreeableness,
            tiers: &[
                tier(AtLeast(350), 25, "Your friendliness makes it easy to win people's trust"),
                tier(AtLeast(300), 15, "Good rapport helps you build partnerships"),
            ],
        },
    ],
};

static IMPLEMENTER: RoleFitScorer = RoleFitScorer {
    role: BelbinRole::Implementer,
    bands: &[
        Band {
            dimension: Conscientiousness,
            tiers: &[
                tier(AtLeast(400), 40, "A strong sense of responsibility makes you a reliable implementer"),
                tier(AtLeast(350), 30, "Conscientiousness gives you excellent execution skills"),
            ],
        },
        Band {
            dimension: Openness,
            tiers: &[
                tier(AtMost(250), 30, "Your pragmatism keeps you focused on practical application"),
                tier(AtMost(300), 20, "Moderate openness balances innovation and pragmatism"),
            ],
        },
        Band {
            dimension: Neuroticism,
            tiers: &[tier(AtMost(250), 20, "Emotional stability makes you a dependable backstop for the team")],
        },
    ],
};

static FINISHER: RoleFitScorer = RoleFitScorer {
    role: BelbinRole::Finisher,
    bands: &[
        Band {
            dimension: Conscientiousness,
            tiers: &[
                tier(AtLeast(400), 35, "A strong sense of responsibility drives you toward perfection"),
                tier(AtLeast(350), 25, "Conscientiousness makes you care about the quality of work"),
            ],
        },
        Band {
            dimension: Neuroticism,
            tiers: &[
                tier(Between(300, 400), 25, "A healthy level of concern keeps you focused on details and deadlines"),
                tier(AtLeast(250), 15, "Some vigilance helps you safeguard the quality of work"),
            ],
        },
        Band {
            dimension: Agreeableness,
            tiers: &[tier(AtLeast(350), 20, "A strong team spirit means you hate to let the team down")],
        },
    ],
};

static TEAMWORKER: RoleFitScorer = RoleFitScorer {
    role: BelbinRole::Teamworker,
    bands: &[
        Band {
            dimension: Agreeableness,
            tiers: &[
                tier(AtLeast(400), 40, "A strong cooperative spirit puts you at the heart of team harmony"),
                tier(AtLeast(350), 30, "Your friendliness makes you good at fostering teamwork"),
            ],
        },
        Band {
            dimension: Neuroticism,
            tiers: &[
                tier(AtMost(250), 25, "Emotional stability lets you handle team conflict effectively"),
                tier(AtMost(300), 15, "Fairly stable emotions support team collaboration"),
            ],
        },
        Band {
            dimension: Extraversion,
            tiers: &[tier(Between(250, 350), 20, "Balanced extraversion lets you communicate without dominating")],
        },
    ],
};

static MONITOR_EVALUATOR: RoleFitScorer = RoleFitScorer {
    role: BelbinRole::MonitorEvaluator,
    bands: &[
        Band {
            dimension: Agreeableness,
            tiers: &[
                tier(AtMost(250), 35, "Objective analysis lets you make rational judgements"),
                tier(AtMost(300), 25, "A degree of objectivity supports critical thinking"),
            ],
        },
        Band {
            dimension: Openness,
            tiers: &[
                tier(AtLeast(350), 30, "Openness gives you strategic thinking ability"),
                tier(AtLeast(300), 20, "Openness helps with analysis and evaluation"),
            ],
        },
        Band {
            dimension: Neuroticism,
            tiers: &[tier(AtMost(250), 25, "Your calm lets you analyze objectively")],
        },
    ],
};

static SPECIALIST: RoleFitScorer = RoleFitScorer {
    role: BelbinRole::Specialist,
    bands: &[
        Band {
            dimension: Conscientiousness,
            tiers: &[
                tier(AtLeast(400), 35, "Strong dedication drives you toward professional excellence"),
                tier(AtLeast(350), 25, "Conscientiousness gives you a professional foundation"),
            ],
        },
        Band {
            dimension: Openness,
            tiers: &[
                tier(AtLeast(350), 30, "A strong thirst for knowledge keeps you learning your field"),
                tier(AtLeast(300), 20, "Openness helps you build up expertise"),
            ],
        },
        Band {
            dimension: Extraversion,
            tiers: &[
                tier(AtMost(250), 25, "Your focus lets you dig deep into your specialty"),
                tier(AtMost(300), 15, "Moderate introversion helps you develop specialist skills"),
            ],
        },
    ],
};

// =============================================================================
// TESTS
// =============================================================================
