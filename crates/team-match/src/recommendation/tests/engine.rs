use super::common::*;
use crate::recommendation::domain::{BelbinRole, ScoringRequest, UserId};
use crate::recommendation::engine::{
    PersonalityMarkers, RecommendationEngine, ScoringConfig, ScoringWeights,
    INCOMPLETE_PROFILE_REASON,
};
use std::sync::Arc;

fn ids(outcome: &crate::recommendation::RecommendationOutcome) -> Vec<u64> {
    outcome
        .recommendations
        .iter()
        .map(|entry| entry.candidate.id.0)
        .collect()
}

#[test]
fn engine_ranks_seeded_pool_by_composite_score() {
    let engine = engine();
    let outcome = engine.recommend(&team(&[1, 2]), &pool(), &traits(), &request());

    assert_eq!(outcome.eligible_count, 6);
    assert_eq!(ids(&outcome), vec![3, 6, 8, 7, 4]);

    let top = &outcome.recommendations[0];
    assert!((top.score - 46.21).abs() < 1e-9);
    assert!((top.breakdown.skill - 0.3).abs() < 1e-9);
    assert!((top.breakdown.role - 2.0 / 14.0).abs() < 1e-9);
    assert_eq!(top.breakdown.personality, 1.0);
    assert!((top.breakdown.bonus - 0.05).abs() < 1e-9);
    assert_eq!(top.breakdown.weights, ScoringWeights::BASE);
    assert_eq!(
        top.reasons,
        vec![
            "Covers 1 role(s) missing from the team".to_string(),
            "Fits target role(s): Implementer".to_string(),
            "Personality fit 2/2 emphasized trait(s)".to_string(),
            "Alignment bonus: same region (Seoul)".to_string(),
        ]
    );
}

#[test]
fn members_never_appear_in_recommendations() {
    let engine = engine();
    let mut request = request();
    request.limit = Some(20);
    let team = team(&[1, 2]);

    let outcome = engine.recommend(&team, &pool(), &traits(), &request);

    assert!(outcome
        .recommendations
        .iter()
        .all(|entry| !team.members.contains(&entry.candidate.id)));
}

#[test]
fn scenario_team_without_belbin_traits_targets_all_roles() {
    let engine = engine();
    let outcome = engine.recommend(&team(&[1, 2]), &pool(), &[big5(1, "Openness:High")], &request());

    assert_eq!(outcome.parameters.missing_roles, BelbinRole::ordered().to_vec());
    assert_eq!(outcome.parameters.target_roles, BelbinRole::ordered().to_vec());
}

#[test]
fn scenario_surplus_plants_shift_weight_to_roles() {
    let engine = engine();
    let team_traits = vec![belbin(1, "Plant"), belbin(2, "Plant")];

    let outcome = engine.recommend(&team(&[1, 2]), &pool(), &team_traits, &request());

    let weights = outcome.parameters.weights;
    assert_eq!(outcome.parameters.plant_count, 2);
    assert!((weights.skill - 0.35).abs() < 1e-9);
    assert!((weights.role - 0.45).abs() < 1e-9);
    assert!((weights.personality - 0.20).abs() < 1e-9);
    assert!((weights.sum() - 1.0).abs() < 1e-9);
    assert!(outcome
        .recommendations
        .iter()
        .all(|entry| entry.breakdown.weights == weights));
}

#[test]
fn scenario_required_skill_filters_pool() {
    let engine = engine();
    let pool = vec![
        candidate(20, None, None, Some("React, Node.js")),
        candidate(21, None, None, Some("Python")),
    ];
    let request = ScoringRequest {
        required_skills: vec!["react".to_string()],
        ..ScoringRequest::default()
    };

    let outcome = engine.recommend(&team(&[]), &pool, &[], &request);

    assert_eq!(ids(&outcome), vec![20]);
    assert_eq!(outcome.recommendations[0].breakdown.skill, 1.0);
    assert_eq!(
        outcome.recommendations[0].reasons[0],
        "Matches 1 of 1 required skill(s)"
    );
}

#[test]
fn scenario_candidate_without_traits_gets_baselines() {
    let engine = engine();
    let pool = vec![candidate(30, None, None, None)];

    let outcome = engine.recommend(&team(&[1]), &pool, &[], &request());

    let entry = &outcome.recommendations[0];
    assert!(entry.breakdown.role == 0.1 || entry.breakdown.role == 0.15);
    assert_eq!(entry.breakdown.personality, 0.1);
    assert!(entry.score > 0.0);
    assert_eq!(entry.reasons, vec![INCOMPLETE_PROFILE_REASON.to_string()]);
}

#[test]
fn scenario_skill_baselines_without_requirements() {
    let engine = engine();
    let pool = vec![
        candidate(40, None, None, Some("Figma")),
        candidate(41, None, None, None),
    ];

    let outcome = engine.recommend(&team(&[]), &pool, &[], &request());

    let skill_of = |id: u64| {
        outcome
            .recommendations
            .iter()
            .find(|entry| entry.candidate.id == UserId(id))
            .map(|entry| entry.breakdown.skill)
            .expect("candidate returned")
    };
    assert_eq!(skill_of(40), 0.3);
    assert_eq!(skill_of(41), 0.1);
}

#[test]
fn empty_pool_after_filtering_is_not_an_error() {
    let engine = engine();
    let request = ScoringRequest {
        required_skills: vec!["haskell".to_string()],
        ..ScoringRequest::default()
    };

    let outcome = engine.recommend(&team(&[1, 2]), &pool(), &traits(), &request);

    assert_eq!(outcome.eligible_count, 0);
    assert!(outcome.recommendations.is_empty());
    assert_eq!(outcome.parameters.required_skills, vec!["haskell".to_string()]);
}

#[test]
fn equal_scores_keep_retrieval_order() {
    let engine = engine();
    let forward = vec![
        candidate(50, Some("Jeju"), None, Some("Go")),
        candidate(51, Some("Jeju"), None, Some("Go")),
        candidate(52, Some("Jeju"), None, Some("Go")),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    let first = engine.recommend(&team(&[]), &forward, &[], &request());
    let second = engine.recommend(&team(&[]), &backward, &[], &request());

    assert_eq!(ids(&first), vec![50, 51, 52]);
    assert_eq!(ids(&second), vec![52, 51, 50]);
}

#[test]
fn repeated_calls_are_identical() {
    let engine = engine();
    let request = ScoringRequest {
        required_skills: vec!["Python".to_string(), "React".to_string()],
        desired_roles: vec!["Specialist".to_string()],
        limit: Some(10),
        ..ScoringRequest::default()
    };

    let first = engine.recommend(&team(&[1, 2]), &pool(), &traits(), &request);
    let second = engine.recommend(&team(&[1, 2]), &pool(), &traits(), &request);

    assert_eq!(first, second);
}

#[test]
fn limit_is_clamped_and_truncates_output() {
    let engine = engine();
    let mut request = request();

    request.limit = Some(0);
    let outcome = engine.recommend(&team(&[1, 2]), &pool(), &traits(), &request);
    assert_eq!(outcome.parameters.limit, 1);
    assert_eq!(outcome.recommendations.len(), 1);

    request.limit = Some(99);
    let outcome = engine.recommend(&team(&[1, 2]), &pool(), &traits(), &request);
    assert_eq!(outcome.parameters.limit, 20);
    assert_eq!(outcome.recommendations.len(), 6);
}

#[test]
fn job_field_requirement_filters_and_adds_bonus() {
    let engine = engine();
    let request = ScoringRequest {
        required_job_field: Some("Frontend".to_string()),
        ..ScoringRequest::default()
    };

    let outcome = engine.recommend(&team(&[1, 2]), &pool(), &traits(), &request);

    assert_eq!(ids(&outcome), vec![3, 6]);
    for entry in &outcome.recommendations {
        assert!((entry.breakdown.bonus - 0.10).abs() < 1e-9);
        assert!(entry
            .reasons
            .iter()
            .any(|reason| reason.contains("job field match (Frontend)")));
    }
}

#[test]
fn desired_roles_replace_gap_targets() {
    let engine = engine();
    let request = ScoringRequest {
        desired_roles: vec!["monitor-evaluator".to_string(), "Oracle".to_string()],
        limit: Some(20),
        ..ScoringRequest::default()
    };

    let outcome = engine.recommend(&team(&[1, 2]), &pool(), &traits(), &request);

    assert_eq!(outcome.parameters.target_roles, vec![BelbinRole::MonitorEvaluator]);
    assert_eq!(outcome.parameters.unrecognized_roles, vec!["Oracle".to_string()]);
    let evaluator = outcome
        .recommendations
        .iter()
        .find(|entry| entry.candidate.id == UserId(7))
        .expect("monitor evaluator returned");
    assert!((evaluator.breakdown.role - 0.25).abs() < 1e-9);
    assert!(evaluator
        .reasons
        .iter()
        .any(|reason| reason == "Fits target role(s): Monitor Evaluator"));
}

#[test]
fn custom_weights_and_markers_are_honoured() {
    let config = ScoringConfig {
        weights: ScoringWeights {
            skill: 0.0,
            role: 0.0,
            personality: 1.0,
        },
        ..ScoringConfig::default()
    };
    let markers = PersonalityMarkers::new(
        Arc::new(|value: &str| value == "C+"),
        Arc::new(|value: &str| value == "A+"),
    );
    let engine = RecommendationEngine::new(config).with_markers(markers);
    let pool = vec![candidate(60, None, None, None), candidate(61, None, None, None)];
    let traits = vec![big5(60, "C+"), big5(61, "C+"), big5(61, "A+")];

    let outcome = engine.recommend(&team(&[]), &pool, &traits, &request());

    assert_eq!(ids(&outcome), vec![61, 60]);
    assert_eq!(outcome.recommendations[0].score, 100.0);
    assert_eq!(outcome.recommendations[1].score, 50.0);
}

#[test]
fn role_gap_report_lists_counts_and_targets() {
    let engine = engine();
    let report = engine.role_gaps(&team(&[1, 2]), &[belbin(1, "Plant"), belbin(2, "Plant")]);

    assert_eq!(report.plant_count, 2);
    assert_eq!(report.missing_roles.len(), 8);
    assert_eq!(report.default_targets, report.missing_roles);
    assert_eq!(report.role_counts.len(), 9);
    assert_eq!(report.role_counts[0].count, 2);
    assert!((report.weights.role - 0.45).abs() < 1e-9);
}
