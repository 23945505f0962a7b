use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{ScoringRequest, TeamId, TeamSnapshot, UserId};
use super::engine::{RecommendationEngine, RecommendationOutcome, RoleGapReport, ScoringConfig};
use super::repository::{DirectoryError, TeamDirectory, TraitStore};

/// Service composing the read collaborators with the scoring engine.
pub struct TeamRecommendationService<D, T> {
    directory: Arc<D>,
    traits: Arc<T>,
    engine: Arc<RecommendationEngine>,
}

impl<D, T> TeamRecommendationService<D, T>
where
    D: TeamDirectory + 'static,
    T: TraitStore + 'static,
{
    pub fn new(directory: Arc<D>, traits: Arc<T>, config: ScoringConfig) -> Self {
        Self::with_engine(directory, traits, RecommendationEngine::new(config))
    }

    pub fn with_engine(directory: Arc<D>, traits: Arc<T>, engine: RecommendationEngine) -> Self {
        Self {
            directory,
            traits,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Rank candidates for `team_id` against the supplied requirements.
    pub fn recommend(
        &self,
        team_id: TeamId,
        request: &ScoringRequest,
    ) -> Result<RecommendationOutcome, RecommendationServiceError> {
        let team = self.load_team(team_id)?;
        let pool = self.directory.candidate_pool()?;

        let mut users: Vec<UserId> = team.members.iter().copied().collect();
        users.extend(
            pool.iter()
                .map(|candidate| candidate.id)
                .filter(|id| !team.is_member(*id)),
        );
        let traits = self.traits.traits_for(&users)?;

        debug!(
            team = %team.id,
            members = team.members.len(),
            pool = pool.len(),
            trait_rows = traits.len(),
            "scoring team candidates"
        );

        let outcome = self.engine.recommend(&team, &pool, &traits, request);

        info!(
            team = %team.id,
            eligible = outcome.eligible_count,
            returned = outcome.recommendations.len(),
            limit = outcome.parameters.limit,
            plant_count = outcome.parameters.plant_count,
            "team recommendations ranked"
        );

        Ok(outcome)
    }

    /// Diagnose which roles the team is missing.
    pub fn role_gaps(&self, team_id: TeamId) -> Result<RoleGapReport, RecommendationServiceError> {
        let team = self.load_team(team_id)?;
        let members: Vec<UserId> = team.members.iter().copied().collect();
        let traits = self.traits.traits_for(&members)?;
        Ok(self.engine.role_gaps(&team, &traits))
    }

    fn load_team(&self, team_id: TeamId) -> Result<TeamSnapshot, RecommendationServiceError> {
        self.directory
            .team(team_id)?
            .ok_or(RecommendationServiceError::TeamNotFound(team_id))
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error("team {0} not found")]
    TeamNotFound(TeamId),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
