//! # Belbin Roles
//!
//! The nine team roles and their static descriptions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine Belbin team roles.
///
/// Declaration order is the fixed enumeration order used to break ties
/// between equal fit scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BelbinRole {
    Coordinator,
    Shaper,
    Plant,
    #[serde(rename = "Resource Investigator")]
    ResourceInvestigator,
    Implementer,
    Finisher,
    Teamworker,
    #[serde(rename = "Monitor Evaluator")]
    MonitorEvaluator,
    Specialist,
}

impl BelbinRole {
    /// All roles in enumeration order.
    pub const ALL: [BelbinRole; 9] = [
        BelbinRole::Coordinator,
        BelbinRole::Shaper,
        BelbinRole::Plant,
        BelbinRole::ResourceInvestigator,
        BelbinRole::Implementer,
        BelbinRole::Finisher,
        BelbinRole::Teamworker,
        BelbinRole::MonitorEvaluator,
        BelbinRole::Specialist,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// Static description of this role.
    #[must_use]
    pub fn profile(self) -> &'static RoleProfile {
        match self {
            Self::Coordinator => &COORDINATOR,
            Self::Shaper => &SHAPER,
            Self::Plant => &PLANT,
            Self::ResourceInvestigator => &RESOURCE_INVESTIGATOR,
            Self::Implementer => &IMPLEMENTER,
            Self::Finisher => &FINISHER,
            Self::Teamworker => &TEAMWORKER,
            Self::MonitorEvaluator => &MONITOR_EVALUATOR,
            Self::Specialist => &SPECIALIST,
        }
    }

    /// The team setting in which this role does best.
    #[must_use]
    pub fn best_environment(self) -> &'static str {
        match self {
            Self::Coordinator => "a mature team that needs clear goals and a collaborative atmosphere",
            Self::Shaper => "a high-performing team full of challenges and opportunities",
            Self::Plant => "an R&D team that encourages innovation and independent thinking",
            Self::ResourceInvestigator => "a business team that depends on outside contacts and new resources",
            Self::Implementer => "a delivery team focused on quality and efficiency",
            Self::Finisher => "a professional team that pursues excellence",
            Self::Teamworker => "a service team that values harmony and mutual support",
            Self::MonitorEvaluator => "a team that needs rational analysis and strategic decisions",
            Self::Specialist => "a technical team that needs expert knowledge and in-depth guidance",
        }
    }

    /// Look a role up by display name.
    ///
    /// Case, spaces, hyphens and underscores are ignored, so
    /// `"monitor-evaluator"` and `"MonitorEvaluator"` both match.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL.into_iter().find(|role| normalize(role.name()) == wanted)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for BelbinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Static description of one team role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub key_traits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub contributions: &'static [&'static str],
    pub development: &'static [&'static str],
    /// Gerund phrase, e.g. "keeping the team ...".
    pub team_value: &'static str,
}

static COORDINATOR: RoleProfile = RoleProfile {
    name: "Coordinator",
    description: "Mature and confident, a natural team leader who clarifies goals, promotes decision making and delegates well.",
    key_traits: &["Mature", "Confident", "Leadership", "Delegates well"],
    strengths: &["Clarifies team goals", "Drives effective decisions", "Delegates well", "Resolves team conflict"],
    weaknesses: &["May over-delegate", "Can be manipulated", "Lacks original ideas"],
    contributions: &["Provides direction and goals", "Coordinates team members", "Promotes communication", "Resolves conflict"],
    development: &["Cultivate creative thinking", "Keep an eye on detail", "Avoid relying too much on others"],
    team_value: "keeping the team heading in the right direction and working efficiently",
};

static SHAPER: RoleProfile = RoleProfile {
    name: "Shaper",
    description: "Challenging and dynamic, pushes the team forward with the drive and courage to overcome obstacles.",
    key_traits: &["Challenging", "Driven", "Courageous", "Action-oriented"],
    strengths: &["Pushes the team forward", "Overcomes obstacles", "Brings energy", "Sustains momentum"],
    weaknesses: &["Can be impulsive", "May hurt others' feelings", "Impatient"],
    contributions: &["Brings drive and urgency", "Challenges the status quo", "Forces decisions", "Overcomes inertia"],
    development: &["Develop patience and empathy", "Learn to listen better", "Keep impulses in check"],
    team_value: "keeping the team motivated and out of its comfort zone",
};

static PLANT: RoleProfile = RoleProfile {
    name: "Plant",
    description: "Creative and imaginative, generates original ideas and solutions; often a clever, introverted thinker.",
    key_traits: &["Creative", "Innovative", "Clever", "Independent thinker"],
    strengths: &["Generates new ideas", "Solves difficult problems", "Offers fresh perspectives", "Breaks with convention"],
    weaknesses: &["Ignores details", "Poor communicator", "Lacks practical skills", "Too theoretical"],
    contributions: &["Proposes innovative solutions", "Challenges conventional thinking", "Brings new ideas", "Solves complex problems"],
    development: &["Improve communication skills", "Focus on practical application", "Work more closely with the team", "Manage time better"],
    team_value: "bringing creative thinking and breakthrough ideas to the team",
};

static RESOURCE_INVESTIGATOR: RoleProfile = RoleProfile {
    name: "Resource Investigator",
    description: "Enthusiastic and outgoing, the team's diplomat who explores opportunities and builds outside contacts.",
    key_traits: &["Enthusiastic", "Sociable", "Curious", "Diplomatic"],
    strengths: &["Builds outside contacts", "Explores opportunities", "Promotes communication", "Secures resources"],
    weaknesses: &["Loses interest quickly", "Lacks follow-through", "Can be over-optimistic"],
    contributions: &["Finds outside resources", "Builds partnerships", "Brings in new information", "Extends the team's network"],
    development: &["Build sustained focus", "Pay more attention to detail", "Learn to think things through"],
    team_value: "bringing outside resources and opportunities to the team",
};

static IMPLEMENTER: RoleProfile = RoleProfile {
    name: "Implementer",
    description: "Disciplined and reliable, turns ideas into practical action with strong organizing and practical skills.",
    key_traits: &["Reliable", "Organized", "Practical", "Systematic"],
    strengths: &["Puts ideas into practice", "Organizes work", "Stays efficient", "Ensures quality"],
    weaknesses: &["Inflexible", "Resists change", "Can be too conservative"],
    contributions: &["Carries out plans and strategies", "Organizes the team's work", "Sees projects through", "Maintains systems"],
    development: &["Become more flexible", "Be open to new ideas", "Build creative capacity", "Learn to adapt to change"],
    team_value: "making sure the team's ideas are put into practice effectively",
};

static FINISHER: RoleProfile = RoleProfile {
    name: "Finisher",
    description: "Conscientious and detail-oriented, makes sure work is completed on time and to a high standard.",
    key_traits: &["Responsible", "Detail-oriented", "Perfectionist", "Persistent"],
    strengths: &["Checks work quality", "Delivers on time", "Attends to detail", "Strives for perfection"],
    weaknesses: &["Can be anxious", "Reluctant to delegate", "Gets lost in detail"],
    contributions: &["Quality control", "Keeps deadlines", "Spots errors", "Raises standards"],
    development: &["Learn to delegate", "Manage anxiety", "Keep the big picture in view", "Accept imperfection"],
    team_value: "delivering the team's work to a high standard and on time",
};

static TEAMWORKER: RoleProfile = RoleProfile {
    name: "Teamworker",
    description: "Friendly and perceptive, the team's peacemaker who fosters cooperation and settles conflict.",
    key_traits: &["Friendly", "Perceptive", "Cooperative", "Harmonious"],
    strengths: &["Fosters teamwork", "Settles conflict", "Supports others", "Creates a harmonious atmosphere"],
    weaknesses: &["Indecisive", "Easily overlooked", "Lacks authority"],
    contributions: &["Keeps the team in harmony", "Promotes communication", "Supports teammates", "Mediates conflict"],
    development: &["Build decision-making skills", "Learn to speak up", "Grow self-confidence", "Handle difficult conversations"],
    team_value: "keeping the team in harmony and strengthening its cohesion",
};

static MONITOR_EVALUATOR: RoleProfile = RoleProfile {
    name: "Monitor Evaluator",
    description: "Calm and objective, weighs options carefully and brings rational thinking and critical analysis.",
    key_traits: &["Calm", "Objective", "Analytical", "Critical thinker"],
    strengths: &["Objective analysis", "Critical thinking", "Strategic thinking", "Risk assessment"],
    weaknesses: &["Struggles to motivate others", "Can be pessimistic", "Rarely inspires others"],
    contributions: &["Provides objective analysis", "Assesses risk", "Raises challenges", "Safeguards decision quality"],
    development: &["Learn to motivate others", "Think more positively", "Improve communication", "Learn to encourage others"],
    team_value: "keeping the team's decisions rational and well-founded",
};

static SPECIALIST: RoleProfile = RoleProfile {
    name: "Specialist",
    description: "Focused and professional, with deep knowledge and skills in a particular field.",
    key_traits: &["Expert knowledge", "Focused", "Dedicated", "Strives for mastery"],
    strengths: &["Provides expertise", "Solves technical problems", "Keeps standards high", "Keeps learning"],
    weaknesses: &["Narrow view", "Not a natural collaborator", "Limited breadth of interest"],
    contributions: &["Gives expert guidance", "Solves complex technical problems", "Upholds professional standards", "Passes on knowledge"],
    development: &["Broaden knowledge", "Collaborate more with the team", "Build communication skills", "Learn about other fields"],
    team_value: "giving the team expert knowledge and skills",
};

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_order_is_ord() {
        let mut sorted = BelbinRole::ALL;
        sorted.sort();
        assert_eq!(sorted, BelbinRole::ALL);
    }

    #[test]
    fn names_resolve_loosely() {
        assert_eq!(BelbinRole::from_name("Plant"), Some(BelbinRole::Plant));
        assert_eq!(
            BelbinRole::from_name("monitor-evaluator"),
            Some(BelbinRole::MonitorEvaluator)
        );
        assert_eq!(
            BelbinRole::from_name("ResourceInvestigator"),
            Some(BelbinRole::ResourceInvestigator)
        );
        assert_eq!(BelbinRole::from_name("Captain"), None);
    }

    #[test]
    fn every_role_has_metadata() {
        for role in BelbinRole::ALL {
            let profile = role.profile();
            assert_eq!(profile.name, role.to_string());
            assert!(!profile.contributions.is_empty());
            assert!(!profile.weaknesses.is_empty());
            assert!(!role.best_environment().is_empty());
        }
    }

    #[test]
    fn serializes_display_name() {
        let json = serde_json::to_string(&BelbinRole::MonitorEvaluator).unwrap_or_default();
        assert_eq!(json, "\"Monitor Evaluator\"");
    }
}
