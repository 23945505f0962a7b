//! Team recommendation: eligibility filtering, role-gap analysis, dimension scoring,
//! composite ranking and explanations for a single team's recruitment needs.

pub mod domain;
pub mod engine;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    BelbinRole, Candidate, MembershipStatus, ScoringRequest, TeamId, TeamSnapshot, TraitCategory,
    TraitIndex, TraitTag, UserId, UserTraits,
};
pub use engine::{
    AppliedParameters, RecommendationEngine, RecommendationOutcome, RoleGapReport,
    ScoreBreakdown, ScoredCandidate, ScoringConfig, ScoringWeights,
};
pub use repository::{DirectoryError, TeamDirectory, TraitStore};
pub use router::recommendation_router;
pub use service::{RecommendationServiceError, TeamRecommendationService};
