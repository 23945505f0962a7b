use std::collections::BTreeSet;

use crate::recommendation::domain::{BelbinRole, UserTraits};

use super::config::BaselineScores;
use super::markers::{MarkerMatcher, PersonalityMarkers};

pub(crate) fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SkillSignal {
    pub score: f64,
    pub matched: usize,
}

pub(crate) fn skill_score(
    candidate_skills: &BTreeSet<String>,
    required: &BTreeSet<String>,
    baselines: &BaselineScores,
) -> SkillSignal {
    if required.is_empty() {
        let score = if candidate_skills.is_empty() {
            baselines.skills_missing
        } else {
            baselines.skills_on_file
        };
        return SkillSignal {
            score: clamp01(score),
            matched: 0,
        };
    }

    let matched = required
        .iter()
        .filter(|skill| candidate_skills.contains(*skill))
        .count();

    SkillSignal {
        score: clamp01(matched as f64 / required.len() as f64),
        matched,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RoleSignal {
    pub score: f64,
    pub target_hits: Vec<BelbinRole>,
    pub gap_hits: usize,
    pub has_data: bool,
}

pub(crate) fn role_score(
    traits: &UserTraits,
    target_roles: &[BelbinRole],
    missing_roles: &[BelbinRole],
    baselines: &BaselineScores,
) -> RoleSignal {
    let held = traits.roles();
    let target_hits: Vec<BelbinRole> = target_roles
        .iter()
        .copied()
        .filter(|role| held.contains(role))
        .collect();
    let gap_hits = missing_roles.iter().filter(|role| held.contains(role)).count();

    if !traits.has_belbin() {
        // Without roles on file there can be no gap hits; the team's own gaps pick the baseline.
        let score = if missing_roles.is_empty() {
            baselines.role_missing
        } else {
            baselines.role_missing_with_gaps
        };
        return RoleSignal {
            score: clamp01(score),
            target_hits,
            gap_hits,
            has_data: false,
        };
    }

    let raw = (target_hits.len() + gap_hits) as f64;
    let denominator = (target_roles.len() + missing_roles.len()).max(1) as f64;

    RoleSignal {
        score: clamp01(raw / denominator),
        target_hits,
        gap_hits,
        has_data: true,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PersonalitySignal {
    pub score: f64,
    pub raw: usize,
    pub emphasized: usize,
    pub has_data: bool,
}

pub(crate) fn personality_score(
    traits: &UserTraits,
    emphasize_conscientiousness: bool,
    emphasize_agreeableness: bool,
    markers: &PersonalityMarkers,
    baselines: &BaselineScores,
) -> PersonalitySignal {
    let detected = |matcher: &dyn MarkerMatcher| {
        traits.big5.iter().any(|value| matcher.matches(value))
    };

    let mut raw = 0;
    if emphasize_conscientiousness && detected(markers.conscientiousness.as_ref()) {
        raw += 1;
    }
    if emphasize_agreeableness && detected(markers.agreeableness.as_ref()) {
        raw += 1;
    }

    let emphasized =
        usize::from(emphasize_conscientiousness) + usize::from(emphasize_agreeableness);

    if !traits.has_big5() {
        return PersonalitySignal {
            score: clamp01(baselines.personality_missing),
            raw,
            emphasized,
            has_data: false,
        };
    }

    PersonalitySignal {
        score: clamp01(raw as f64 / emphasized.max(1) as f64),
        raw,
        emphasized,
        has_data: true,
    }
}
