//! Human-readable reasons derived from the same signals used for scoring.

use super::bonus::BonusSignal;
use super::scorers::{PersonalitySignal, RoleSignal, SkillSignal};

pub const MAX_REASONS: usize = 5;
pub const INCOMPLETE_PROFILE_REASON: &str =
    "Default weighting applied due to incomplete profile data";
pub const FALLBACK_REASON: &str = "Insufficient trait data; default scoring applied";

pub(crate) struct ReasonInputs<'a> {
    pub skill: &'a SkillSignal,
    pub required_skill_count: usize,
    pub role: &'a RoleSignal,
    pub personality: &'a PersonalitySignal,
    pub bonus: &'a BonusSignal,
}

pub(crate) fn reasons(inputs: &ReasonInputs<'_>) -> Vec<String> {
    let mut reasons = Vec::new();

    if inputs.skill.matched > 0 {
        reasons.push(format!(
            "Matches {} of {} required skill(s)",
            inputs.skill.matched, inputs.required_skill_count
        ));
    }

    if inputs.role.gap_hits > 0 {
        reasons.push(format!(
            "Covers {} role(s) missing from the team",
            inputs.role.gap_hits
        ));
    }

    if !inputs.role.target_hits.is_empty() {
        let labels: Vec<&str> = inputs
            .role
            .target_hits
            .iter()
            .map(|role| role.label())
            .collect();
        reasons.push(format!("Fits target role(s): {}", labels.join(", ")));
    }

    if inputs.personality.raw > 0 {
        reasons.push(format!(
            "Personality fit {}/{} emphasized trait(s)",
            inputs.personality.raw,
            inputs.personality.emphasized.max(1)
        ));
    }

    let mut bonus_parts = Vec::new();
    if let Some(region) = &inputs.bonus.same_region {
        bonus_parts.push(format!("same region ({region})"));
    }
    if let Some(field) = &inputs.bonus.job_field {
        bonus_parts.push(format!("job field match ({field})"));
    }
    if !bonus_parts.is_empty() {
        reasons.push(format!("Alignment bonus: {}", bonus_parts.join("; ")));
    }

    if !inputs.role.has_data || !inputs.personality.has_data {
        reasons.push(INCOMPLETE_PROFILE_REASON.to_string());
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}
