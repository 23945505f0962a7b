//! Property checks for the ranking invariants over randomly generated rosters.

use proptest::prelude::*;
use std::collections::BTreeSet;

use team_match::recommendation::{
    BelbinRole, Candidate, RecommendationEngine, ScoringConfig, ScoringRequest, TeamId,
    TeamSnapshot, TraitTag, UserId,
};

const SKILLS: [&str; 6] = ["React", "rust", "Go", "Python", "Figma", "SQL"];
const REGIONS: [&str; 3] = ["Seoul", "Busan", "Jeju"];
const BIG5: [&str; 5] = [
    "Conscientiousness:High",
    "Agreeableness:High",
    "Agreeableness:Low",
    "성실성 높음",
    "Openness:High",
];

fn candidate_strategy(id: u64) -> impl Strategy<Value = Candidate> {
    (
        proptest::option::of(0..REGIONS.len()),
        proptest::option::of(proptest::sample::subsequence(SKILLS.to_vec(), 0..4)),
    )
        .prop_map(move |(region, skills)| Candidate {
            id: UserId(id),
            name: format!("user-{id}"),
            contact: format!("@user{id}"),
            region: region.map(|index| REGIONS[index].to_string()),
            job_field: None,
            skills_raw: skills.map(|list| list.join(", ")),
        })
}

fn pool_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    (0usize..12).prop_flat_map(|len| {
        (0..len as u64)
            .map(candidate_strategy)
            .collect::<Vec<_>>()
    })
}

fn traits_strategy() -> impl Strategy<Value = Vec<TraitTag>> {
    proptest::collection::vec(
        (0u64..12, any::<bool>(), 0usize..9, 0usize..BIG5.len()),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(user, is_belbin, role, marker)| {
                if is_belbin {
                    TraitTag::new(UserId(user), "belbin", BelbinRole::ordered()[role].label())
                } else {
                    TraitTag::new(UserId(user), "big5", BIG5[marker])
                }
            })
            .collect()
    })
}

fn request_strategy() -> impl Strategy<Value = ScoringRequest> {
    (
        proptest::sample::subsequence(SKILLS.to_vec(), 0..3),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(-5i64..40),
    )
        .prop_map(|(skills, conscientious, agreeable, limit)| ScoringRequest {
            required_skills: skills.into_iter().map(|s| s.to_lowercase()).collect(),
            emphasize_conscientiousness: conscientious,
            emphasize_agreeableness: agreeable,
            limit,
            ..ScoringRequest::default()
        })
}

fn team_strategy() -> impl Strategy<Value = TeamSnapshot> {
    proptest::collection::btree_set(0u64..12, 0..4).prop_map(|members| TeamSnapshot {
        id: TeamId(1),
        name: "Props".to_string(),
        region: Some("Seoul".to_string()),
        members: members.into_iter().map(UserId).collect(),
    })
}

proptest! {
    #[test]
    fn ranking_invariants_hold(
        team in team_strategy(),
        pool in pool_strategy(),
        traits in traits_strategy(),
        request in request_strategy(),
    ) {
        let engine = RecommendationEngine::new(ScoringConfig::default());
        let outcome = engine.recommend(&team, &pool, &traits, &request);
        let required: BTreeSet<String> = request.normalized_skills();

        let eligible = pool
            .iter()
            .filter(|candidate| !team.members.contains(&candidate.id))
            .filter(|candidate| {
                required.is_empty()
                    || candidate.normalized_skills().iter().any(|skill| required.contains(skill))
            })
            .count();
        let limit = outcome.parameters.limit;
        prop_assert!((1..=20).contains(&limit));
        prop_assert_eq!(outcome.eligible_count, eligible);
        prop_assert_eq!(outcome.recommendations.len(), limit.min(eligible));
        prop_assert!((outcome.parameters.weights.sum() - 1.0).abs() < 1e-9);

        for entry in &outcome.recommendations {
            prop_assert!(!team.members.contains(&entry.candidate.id));
            if !required.is_empty() {
                prop_assert!(entry
                    .candidate
                    .normalized_skills()
                    .iter()
                    .any(|skill| required.contains(skill)));
            }
            for dimension in [entry.breakdown.skill, entry.breakdown.role, entry.breakdown.personality] {
                prop_assert!((0.0..=1.0).contains(&dimension));
            }
            prop_assert!((0.0..=100.0).contains(&entry.score));
            prop_assert!(!entry.reasons.is_empty() && entry.reasons.len() <= 5);
        }

        for pair in outcome.recommendations.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                let position = |id: UserId| pool.iter().position(|c| c.id == id);
                prop_assert!(position(pair[0].candidate.id) < position(pair[1].candidate.id));
            }
        }

        let again = engine.recommend(&team, &pool, &traits, &request);
        prop_assert_eq!(outcome, again);
    }
}
