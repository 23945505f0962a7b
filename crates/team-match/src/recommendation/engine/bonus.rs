use crate::recommendation::domain::{Candidate, TeamSnapshot};

use super::config::BonusConfig;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BonusSignal {
    pub total: f64,
    pub same_region: Option<String>,
    pub job_field: Option<String>,
}

pub(crate) fn alignment_bonus(
    candidate: &Candidate,
    team: &TeamSnapshot,
    required_job_field: Option<&str>,
    config: &BonusConfig,
) -> BonusSignal {
    let mut total = 0.0;

    let same_region = match (present(&candidate.region), present(&team.region)) {
        (Some(candidate_region), Some(team_region)) if candidate_region == team_region => {
            total += config.same_region;
            Some(candidate_region.to_string())
        }
        _ => None,
    };

    let job_field = match (required_job_field, present(&candidate.job_field)) {
        (Some(required), Some(field)) if required == field => {
            total += config.job_field_match;
            Some(field.to_string())
        }
        _ => None,
    };

    BonusSignal {
        total,
        same_region,
        job_field,
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
