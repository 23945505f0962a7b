use std::collections::BTreeMap;

use crate::recommendation::domain::{BelbinRole, TeamSnapshot, TraitIndex};

/// Role composition of the current team and the roles a recruit should cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoleGaps {
    pub target_roles: Vec<BelbinRole>,
    pub missing_roles: Vec<BelbinRole>,
    pub plant_count: usize,
    pub unrecognized_roles: Vec<String>,
}

/// Counts canonical roles held by accepted members.
pub(crate) fn role_counts(team: &TeamSnapshot, traits: &TraitIndex) -> BTreeMap<BelbinRole, usize> {
    let mut counts: BTreeMap<BelbinRole, usize> =
        BelbinRole::ordered().into_iter().map(|role| (role, 0)).collect();

    for member in &team.members {
        let Some(member_traits) = traits.get(*member) else {
            continue;
        };
        for value in &member_traits.belbin {
            if let Some(role) = BelbinRole::parse(value) {
                *counts.entry(role).or_insert(0) += 1;
            }
        }
    }

    counts
}

pub(crate) fn analyze(
    team: &TeamSnapshot,
    traits: &TraitIndex,
    desired_roles: &[String],
    fallback_roles: &[BelbinRole],
) -> RoleGaps {
    let counts = role_counts(team, traits);

    let missing_roles: Vec<BelbinRole> = BelbinRole::ordered()
        .into_iter()
        .filter(|role| counts.get(role).copied().unwrap_or(0) == 0)
        .collect();
    let plant_count = counts.get(&BelbinRole::Plant).copied().unwrap_or(0);

    let mut requested = Vec::new();
    let mut unrecognized_roles = Vec::new();
    for label in desired_roles {
        if label.trim().is_empty() {
            continue;
        }
        match BelbinRole::parse(label) {
            Some(role) if !requested.contains(&role) => requested.push(role),
            Some(_) => {}
            None => unrecognized_roles.push(label.trim().to_string()),
        }
    }

    let target_roles = if !requested.is_empty() {
        requested
    } else if !missing_roles.is_empty() {
        missing_roles.clone()
    } else {
        fallback_roles.to_vec()
    };

    RoleGaps {
        target_roles,
        missing_roles,
        plant_count,
        unrecognized_roles,
    }
}
