//! # Belbin Module
//!
//! Nine role fits → ranked team-role profile.
//!
//! Ranking uses an explicit comparator: score descending, then the fixed
//! role enumeration order. The narrative fields are template fills keyed by
//! the primary and secondary roles; free-text generation happens outside
//! the engine.

mod fit;
mod roles;

pub use fit::{fit_confidence, Band, RoleFitResult, RoleFitScorer, Threshold, Tier, MAX_FIT_SCORE};
pub use roles::{BelbinRole, RoleProfile};

use crate::aggregate::TraitAverages;
use serde::Serialize;
use std::cmp::Ordering;

/// Number of secondary roles reported.
pub const SECONDARY_ROLE_COUNT: usize = 2;

// =============================================================================
// RESULT TYPES
// =============================================================================

/// A fit result merged with the role's static description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRole {
    #[serde(flatten)]
    pub fit: RoleFitResult,
    #[serde(flatten)]
    pub profile: &'static RoleProfile,
}

impl RankedRole {
    fn new(fit: RoleFitResult) -> Self {
        let profile = fit.role.profile();
        Self { fit, profile }
    }

    #[must_use]
    pub fn role(&self) -> BelbinRole {
        self.fit.role
    }
}

/// Strength a secondary role adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryStrength {
    pub role: BelbinRole,
    pub strength: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BelbinAnalysis {
    pub overview: String,
    pub contributions: Vec<&'static str>,
    pub challenges: Vec<&'static str>,
    pub development: Vec<&'static str>,
    pub team_fit: String,
    pub secondary_strengths: Vec<SecondaryStrength>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    Primary,
    Environment,
    Secondary,
}

/// One titled paragraph of team-contribution advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamAdvice {
    pub title: &'static str,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AdviceKind,
}

/// Full Belbin ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BelbinResult {
    pub primary_role: RankedRole,
    pub secondary_roles: Vec<RankedRole>,
    /// All nine fits, best first.
    pub all_roles: Vec<RoleFitResult>,
    pub analysis: BelbinAnalysis,
    pub team_contribution: Vec<TeamAdvice>,
    pub best_team_environment: &'static str,
}

// =============================================================================
// RANKER
// =============================================================================

/// Scores all nine roles and ranks them.
pub struct BelbinRanker;

impl BelbinRanker {
    #[must_use]
    pub fn rank(averages: &TraitAverages) -> BelbinResult {
        let mut fits = BelbinRole::ALL.map(|role| RoleFitScorer::for_role(role).score(averages));
        fits.sort_by(Self::compare);

        let [first, rest @ ..] = &fits;
        let primary_role = RankedRole::new(first.clone());
        let secondary_roles: Vec<RankedRole> = rest
            .iter()
            .take(SECONDARY_ROLE_COUNT)
            .cloned()
            .map(RankedRole::new)
            .collect();

        let analysis = analyze(&primary_role, &secondary_roles);
        let team_contribution = team_contribution(&primary_role, &secondary_roles);
        let best_team_environment = primary_role.role().best_environment();

        BelbinResult {
            primary_role,
            secondary_roles,
            all_roles: fits.to_vec(),
            analysis,
            team_contribution,
            best_team_environment,
        }
    }

    /// Score descending, ties in role enumeration order.
    #[must_use]
    pub fn compare(a: &RoleFitResult, b: &RoleFitResult) -> Ordering {
        b.score.cmp(&a.score).then_with(|| a.role.cmp(&b.role))
    }
}

fn analyze(primary: &RankedRole, secondary: &[RankedRole]) -> BelbinAnalysis {
    let profile = primary.profile;
    BelbinAnalysis {
        overview: format!("Your main team role is {}. {}", profile.name, profile.description),
        contributions: profile.contributions.to_vec(),
        challenges: profile.weaknesses.to_vec(),
        development: profile.development.to_vec(),
        team_fit: format!("The {} is the key role for {}", profile.name, profile.team_value),
        secondary_strengths: secondary
            .iter()
            .map(|r| SecondaryStrength {
                role: r.role(),
                strength: r
                    .profile
                    .contributions
                    .first()
                    .copied()
                    .unwrap_or("Gives the team additional support"),
            })
            .collect(),
    }
}

fn team_contribution(primary: &RankedRole, secondary: &[RankedRole]) -> Vec<TeamAdvice> {
    let mut advice = vec![
        TeamAdvice {
            title: "Primary contribution",
            content: format!(
                "As a {}, your greatest contribution is {}",
                primary.profile.name, primary.profile.team_value
            ),
            kind: AdviceKind::Primary,
        },
        TeamAdvice {
            title: "Best environment",
            content: format!(
                "The team environment that suits you best is {}",
                primary.role().best_environment()
            ),
            kind: AdviceKind::Environment,
        },
    ];

    if !secondary.is_empty() {
        let names: Vec<&str> = secondary.iter().map(|r| r.profile.name).collect();
        advice.push(TeamAdvice {
            title: "Secondary roles",
            content: format!(
                "You can also take on the {} roles, giving the team broader support",
                names.join(" and ")
            ),
            kind: AdviceKind::Secondary,
        });
    }

    advice
}

// =============================================================================
// TESTS
// =============================================================================
