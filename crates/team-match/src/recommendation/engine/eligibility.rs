use std::collections::BTreeSet;

use crate::recommendation::domain::{Candidate, TeamSnapshot};

/// Hard filters narrowing the candidate pool before any scoring happens.
pub(crate) struct EligibilityFilter<'a> {
    pub team: &'a TeamSnapshot,
    pub required_job_field: Option<&'a str>,
    pub required_skills: &'a BTreeSet<String>,
}

impl<'a> EligibilityFilter<'a> {
    /// Returns the eligible candidates in their original retrieval order.
    pub fn apply<'p>(&self, pool: &'p [Candidate]) -> Vec<&'p Candidate> {
        pool.iter()
            .filter(|candidate| !self.team.is_member(candidate.id))
            .filter(|candidate| self.job_field_matches(candidate))
            .filter(|candidate| self.shares_required_skill(candidate))
            .collect()
    }

    fn job_field_matches(&self, candidate: &Candidate) -> bool {
        match self.required_job_field {
            Some(required) => candidate.job_field.as_deref().map(str::trim) == Some(required),
            None => true,
        }
    }

    fn shares_required_skill(&self, candidate: &Candidate) -> bool {
        if self.required_skills.is_empty() {
            return true;
        }
        candidate
            .normalized_skills()
            .iter()
            .any(|skill| self.required_skills.contains(skill))
    }
}
