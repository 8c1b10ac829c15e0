//! # MBTI Profiles
//!
//! Read-only table of the 16 canonical MBTI profiles.

use serde::Serialize;

/// Code of the profile used when a composite type has no table entry.
pub const DEFAULT_PROFILE_CODE: &str = INFP.code;

/// Static description of one MBTI type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub traits: &'static [&'static str],
    pub career: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub growth_areas: &'static [&'static str],
}

impl MbtiProfile {
    /// Look up a profile by its four-letter code (case-insensitive).
    #[must_use]
    pub fn find(code: &str) -> Option<&'static MbtiProfile> {
        PROFILES.iter().find(|p| p.code.eq_ignore_ascii_case(code))
    }

    /// The designated fallback profile.
    #[must_use]
    pub fn default_profile() -> &'static MbtiProfile {
        &DEFAULT_PROFILE
    }

    /// All 16 profiles in table order.
    #[must_use]
    pub fn all() -> &'static [MbtiProfile] {
        &PROFILES
    }
}

/// The fallback profile, also listed in the table.
const INFP: MbtiProfile = MbtiProfile {
    code: "INFP",
    name: "Mediator",
    description: "A gentle idealist devoted to helping others and seeking harmony.",
    traits: &["Idealistic", "Kind", "Creative", "Flexible"],
    career: &["Artist", "Counselor", "Writer", "Educator"],
    strengths: &["Empathy", "Creative expression", "Commitment to values", "Adaptability"],
    growth_areas: &["Handling conflict", "Decision making", "Self-assertion"],
};

static DEFAULT_PROFILE: MbtiProfile = INFP;

static PROFILES: [MbtiProfile; 16] = [
    MbtiProfile {
        code: "INTJ",
        name: "Architect",
        description: "An innovative strategist who plans well and strives for perfection.",
        traits: &["Rational", "Independent", "Visionary", "Decisive"],
        career: &["Software architect", "Strategy consultant", "R&D engineer", "Investment analyst"],
        strengths: &["Strategic thinking", "Working independently", "High standards", "Long-term planning"],
        growth_areas: &["Emotional expression", "Teamwork", "Flexibility"],
    },
    MbtiProfile {
        code: "INTP",
        name: "Logician",
        description: "A creative theorist skilled at abstract thinking and logical analysis.",
        traits: &["Rational", "Curious", "Flexible", "Independent"],
        career: &["Researcher", "Programmer", "Philosopher", "Data analyst"],
        strengths: &["Logical analysis", "Innovative thinking", "Objective judgement", "Deep thinking"],
        growth_areas: &["Practical execution", "Time management", "Social skills"],
    },
    MbtiProfile {
        code: "ENTJ",
        name: "Commander",
        description: "A natural leader who organizes teams and achieves goals.",
        traits: &["Leadership", "Decisive", "Confident", "Strategic"],
        career: &["CEO", "Management consultant", "Project manager", "Entrepreneur"],
        strengths: &["Leadership", "Decision making", "Goal orientation", "Motivating teams"],
        growth_areas: &["Patient listening", "Emotional care", "Attention to detail"],
    },
    MbtiProfile {
        code: "ENTP",
        name: "Debater",
        description: "An energetic innovator who explores possibilities and challenges tradition.",
        traits: &["Innovative", "Flexible", "Argumentative", "Enthusiastic"],
        career: &["Creative director", "Entrepreneur", "Consultant", "Marketing"],
        strengths: &["Innovative thinking", "Adaptability", "Persuasion", "Fast learning"],
        growth_areas: &["Focus and persistence", "Detailed execution", "Emotional regulation"],
    },
    MbtiProfile {
        code: "INFJ",
        name: "Advocate",
        description: "An idealistic protector with deep insight and empathy.",
        traits: &["Idealistic", "Insightful", "Empathetic", "Persistent"],
        career: &["Counselor", "Writer", "Social worker", "Human resources"],
        strengths: &["Deep understanding", "Creative thinking", "Value-driven", "Caring for others"],
        growth_areas: &["Self-care", "Setting boundaries", "Handling criticism"],
    },
    INFP,
    MbtiProfile {
        code: "ENFJ",
        name: "Protagonist",
        description: "A charismatic leader who inspires others and organizes teams.",
        traits: &["Charismatic", "Altruistic", "Leadership", "Empathetic"],
        career: &["Teacher", "Trainer", "Human resources", "Non-profit management"],
        strengths: &["Inspiring others", "Teamwork", "Communication", "Organization"],
        growth_areas: &["Own needs", "Conflict management", "Objective analysis"],
    },
    MbtiProfile {
        code: "ENFP",
        name: "Campaigner",
        description: "An enthusiastic creative who connects people and ideas.",
        traits: &["Enthusiastic", "Creative", "Sociable", "Flexible"],
        career: &["Marketing", "Public relations", "Counselor", "Creative work"],
        strengths: &["Connecting people", "Creative thinking", "Adaptability", "Positive energy"],
        growth_areas: &["Time management", "Focus and persistence", "Attention to detail"],
    },
    MbtiProfile {
        code: "ISTJ",
        name: "Logistician",
        description: "A reliable, practical manager committed to order and tradition.",
        traits: &["Reliable", "Practical", "Orderly", "Responsible"],
        career: &["Accountant", "Lawyer", "Doctor", "Engineer"],
        strengths: &["Organization", "Attention to detail", "Responsibility", "Dependability"],
        growth_areas: &["Adapting to change", "Innovative thinking", "Emotional expression"],
    },
    MbtiProfile {
        code: "ISFJ",
        name: "Defender",
        description: "A warm guardian devoted to protecting and supporting others.",
        traits: &["Warm", "Altruistic", "Reliable", "Attentive"],
        career: &["Nurse", "Teacher", "Social worker", "Human resources"],
        strengths: &["Caring for others", "Meticulousness", "Loyalty", "Supportiveness"],
        growth_areas: &["Self-assertion", "Handling conflict", "Accepting change"],
    },
    MbtiProfile {
        code: "ESTJ",
        name: "Executive",
        description: "An efficient manager who organizes resources and people.",
        traits: &["Efficient", "Organized", "Practical", "Leadership"],
        career: &["Business management", "Project manager", "Military officer", "Civil servant"],
        strengths: &["Organizational management", "Decision making", "Efficiency", "Team leadership"],
        growth_areas: &["Flexibility", "Emotional care", "Innovative thinking"],
    },
    MbtiProfile {
        code: "ESFJ",
        name: "Consul",
        description: "A keeper of harmony who organizes and supports others.",
        traits: &["Harmonious", "Supportive", "Organized", "Warm"],
        career: &["Nurse", "Teacher", "Customer service", "Event planner"],
        strengths: &["Teamwork", "Caring for others", "Organization", "Social skills"],
        growth_areas: &["Handling conflict", "Objective decisions", "Self-care"],
    },
    MbtiProfile {
        code: "ISTP",
        name: "Virtuoso",
        description: "A flexible practitioner who understands and operates all kinds of tools.",
        traits: &["Practical", "Flexible", "Calm", "Independent"],
        career: &["Engineer", "Technician", "Athlete", "Pilot"],
        strengths: &["Practical skills", "Problem solving", "Adaptability", "Calm analysis"],
        growth_areas: &["Long-term planning", "Emotional expression", "Team communication"],
    },
    MbtiProfile {
        code: "ISFP",
        name: "Adventurer",
        description: "A gentle artist pursuing beauty and self-expression.",
        traits: &["Artistic", "Sensitive", "Friendly", "Independent"],
        career: &["Artist", "Designer", "Counselor", "Writer"],
        strengths: &["Creative expression", "Aesthetic sense", "Empathy", "Adaptability"],
        growth_areas: &["Decision making", "Handling conflict", "Self-assertion"],
    },
    MbtiProfile {
        code: "ESTP",
        name: "Entrepreneur",
        description: "An energetic doer who seizes opportunities.",
        traits: &["Energetic", "Practical", "Adaptable", "Sociable"],
        career: &["Sales", "Entrepreneur", "Athlete", "Event planner"],
        strengths: &["Action orientation", "Adaptability", "Social skills", "Problem solving"],
        growth_areas: &["Long-term planning", "Careful execution", "Emotional regulation"],
    },
    MbtiProfile {
        code: "ESFP",
        name: "Entertainer",
        description: "A lively performer who enjoys life and carries others along.",
        traits: &["Lively", "Friendly", "Enthusiastic", "Practical"],
        career: &["Performing arts", "Sales", "Teacher", "Event planner"],
        strengths: &["Interpersonal interaction", "Adaptability", "Positive energy", "Practical skills"],
        growth_areas: &["Long-term planning", "Focus and persistence", "Analytical thinking"],
    },
];

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn table_has_sixteen_unique_codes() {
        let codes: BTreeSet<&str> = MbtiProfile::all().iter().map(|p| p.code).collect();
        assert_eq!(codes.len(), 16);
    }

    #[test]
    fn default_profile_is_designated_code() {
        assert_eq!(MbtiProfile::default_profile().code, DEFAULT_PROFILE_CODE);
        assert_eq!(MbtiProfile::find(DEFAULT_PROFILE_CODE), Some(MbtiProfile::default_profile()));
        assert_eq!(MbtiProfile::default_profile().name, "Mediator");
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(MbtiProfile::find("enfj").map(|p| p.name), Some("Protagonist"));
        assert_eq!(MbtiProfile::find("XXXX"), None);
    }

    #[test]
    fn every_profile_is_filled_in() {
        for profile in MbtiProfile::all() {
            assert_eq!(profile.code.len(), 4);
            assert!(!profile.traits.is_empty());
            assert!(!profile.career.is_empty());
            assert!(!profile.strengths.is_empty());
            assert!(!profile.growth_areas.is_empty());
        }
    }
}
