//! Property tests for the scoring engine.
//!
//! Arbitrary answer sets and trait averages are generated with proptest.

#![allow(clippy::unwrap_used, clippy::panic)]

use persona_core::{
    Assessment, AnswerSet, AxisClassifier, BelbinRanker, BelbinRole, Confidence, Dimension,
    MbtiComposer, QuestionnaireDefinition, RoleFitScorer, ScoreAggregator, TraitAverage,
    TraitAverages, Axis,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Up to 30 of the 50 questions, each answered 1..=5.
fn answer_set() -> impl Strategy<Value = AnswerSet> {
    proptest::collection::btree_map(1u16..=50, 1i64..=5, 0..=30)
        .prop_map(|raw| AnswerSet::try_from(raw).unwrap())
}

fn trait_average() -> impl Strategy<Value = TraitAverage> {
    (0u16..=500).prop_map(TraitAverage::from_hundredths)
}

fn trait_averages() -> impl Strategy<Value = TraitAverages> {
    (
        trait_average(),
        trait_average(),
        trait_average(),
        trait_average(),
        trait_average(),
    )
        .prop_map(|(o, c, e, a, n)| TraitAverages {
            openness: o,
            conscientiousness: c,
            extraversion: e,
            agreeableness: a,
            neuroticism: n,
        })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn aggregates_stay_in_range(answers in answer_set()) {
        let set = ScoreAggregator::aggregate(&QuestionnaireDefinition::standard(), &answers);
        for (_, score) in set.iter() {
            prop_assert!(score.average <= TraitAverage::MAX);
            prop_assert!(score.percentage.tenths() <= 1000);
            prop_assert!(score.count <= 10);
            prop_assert_eq!(usize::from(score.count), score.scores.len());
        }
    }

    #[test]
    fn answered_count_matches_input(answers in answer_set()) {
        let set = ScoreAggregator::aggregate(&QuestionnaireDefinition::standard(), &answers);
        let counted: usize = set.iter().map(|(_, s)| usize::from(s.count)).sum();
        prop_assert_eq!(counted, answers.len());
    }

    #[test]
    fn axis_confidence_within_bounds(average in trait_average()) {
        for axis in Axis::ALL {
            let result = AxisClassifier::classify(axis, average);
            prop_assert!(result.confidence >= Confidence::NEUTRAL);
            prop_assert!(result.confidence <= Confidence::CEILING);
            prop_assert!(result.letter == axis.high() || result.letter == axis.low());
        }
    }

    #[test]
    fn composite_confidence_within_bounds(averages in trait_averages()) {
        let result = MbtiComposer::compose(&averages);
        prop_assert!((50..=90).contains(&result.confidence));
        prop_assert!(!result.profile_fallback);
        prop_assert_eq!(result.profile.code, result.mbti_type.to_string());
    }

    #[test]
    fn role_scores_within_bounds(averages in trait_averages()) {
        for role in BelbinRole::ALL {
            let fit = RoleFitScorer::for_role(role).score(&averages);
            prop_assert!(fit.score <= 100);
            prop_assert!(fit.confidence <= Confidence::CEILING);
            prop_assert!(fit.reasoning.len() <= RoleFitScorer::for_role(role).bands.len());
        }
    }

    #[test]
    fn ranking_is_sorted_and_complete(averages in trait_averages()) {
        let result = BelbinRanker::rank(&averages);
        prop_assert_eq!(result.all_roles.len(), 9);
        for pair in result.all_roles.windows(2) {
            let ordered = pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].role < pair[1].role);
            prop_assert!(ordered);
        }
        prop_assert_eq!(result.primary_role.fit.role, result.all_roles[0].role);
        prop_assert_eq!(result.secondary_roles.len(), 2);
    }

    #[test]
    fn evaluation_is_idempotent(answers in answer_set()) {
        let definition = QuestionnaireDefinition::standard();
        let first = Assessment::evaluate(&definition, &answers).unwrap();
        let second = Assessment::evaluate(&definition, &answers).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn float_averages_are_clamped(value in -10.0f64..10.0) {
        let average = TraitAverage::from_f64(value).unwrap();
        prop_assert!(average <= TraitAverage::MAX);
    }
}

// =============================================================================
// FIXED SCENARIOS
// =============================================================================

fn evaluate_uniform(value: i64) -> Assessment {
    let answers = AnswerSet::uniform(1..=50, value).unwrap();
    Assessment::evaluate(&QuestionnaireDefinition::standard(), &answers).unwrap()
}

/// `(role, score)` pairs of the full Belbin ranking.
fn ranking(assessment: &Assessment) -> Vec<(BelbinRole, u8)> {
    assessment.belbin.all_roles.iter().map(|fit| (fit.role, fit.score)).collect()
}

#[test]
fn all_fives() {
    let assessment = evaluate_uniform(5);
    for dimension in Dimension::ALL {
        assert_eq!(assessment.scores.average(dimension), TraitAverage::MAX);
    }
    assert_eq!(assessment.summary.total_average, TraitAverage::MAX);
    assert_eq!(assessment.mbti.mbti_type.to_string(), "ENFJ");
    assert_eq!(assessment.mbti.confidence, 90);

    assert_eq!(
        ranking(&assessment),
        vec![
            (BelbinRole::ResourceInvestigator, 90),
            (BelbinRole::Coordinator, 80),
            (BelbinRole::Finisher, 70),
            (BelbinRole::Specialist, 65),
            (BelbinRole::Shaper, 60),
            (BelbinRole::Plant, 40),
            (BelbinRole::Implementer, 40),
            (BelbinRole::Teamworker, 40),
            (BelbinRole::MonitorEvaluator, 30),
        ]
    );
}

#[test]
fn all_ones() {
    let assessment = evaluate_uniform(1);
    assert_eq!(assessment.mbti.mbti_type.to_string(), "ISTP");
    assert_eq!(assessment.mbti.confidence, 90);
    for confidence in assessment.mbti.dimensions.confidences() {
        assert_eq!(confidence, Confidence::CEILING);
    }

    assert_eq!(
        ranking(&assessment),
        vec![
            (BelbinRole::MonitorEvaluator, 60),
            (BelbinRole::Implementer, 50),
            (BelbinRole::Shaper, 30),
            (BelbinRole::Plant, 30),
            (BelbinRole::Teamworker, 25),
            (BelbinRole::Specialist, 25),
            (BelbinRole::Coordinator, 0),
            (BelbinRole::ResourceInvestigator, 0),
            (BelbinRole::Finisher, 0),
        ]
    );
    assert_eq!(assessment.belbin.primary_role.fit.role, BelbinRole::MonitorEvaluator);
}

#[test]
fn all_threes() {
    let assessment = evaluate_uniform(3);
    assert_eq!(assessment.mbti.mbti_type.to_string(), "ENFJ");
    assert_eq!(assessment.mbti.confidence, 50);
    for confidence in assessment.mbti.dimensions.confidences() {
        assert_eq!(confidence, Confidence::NEUTRAL);
    }
}

#[test]
fn first_five_of_each_dimension() {
    let definition = QuestionnaireDefinition::standard();
    let pairs = definition
        .items()
        .iter()
        .filter(|item| item.dimension_order <= 5)
        .map(|item| (item.id, 4));
    let answers = AnswerSet::from_pairs(pairs).unwrap();
    let assessment = Assessment::evaluate(&definition, &answers).unwrap();

    for (_, score) in assessment.scores.iter() {
        assert_eq!(score.count, 5);
        assert_eq!(score.average.hundredths(), 400);
    }
    assert_eq!(assessment.completion.answered_count, 25);
}
