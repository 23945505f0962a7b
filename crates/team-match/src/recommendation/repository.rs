use super::domain::{Candidate, TeamId, TeamSnapshot, TraitTag, UserId};

/// Read access to teams and the candidate pool so the service can be exercised in isolation.
pub trait TeamDirectory: Send + Sync {
    /// Team with its accepted members, or `None` when the id is unknown.
    fn team(&self, id: TeamId) -> Result<Option<TeamSnapshot>, DirectoryError>;
    /// Candidate pool in retrieval order; that order breaks score ties.
    fn candidate_pool(&self) -> Result<Vec<Candidate>, DirectoryError>;
}

/// Read access to categorized trait rows.
pub trait TraitStore: Send + Sync {
    fn traits_for(&self, users: &[UserId]) -> Result<Vec<TraitTag>, DirectoryError>;
}

/// Error enumeration for collaborator failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
