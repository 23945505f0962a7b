use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::recommendation::domain::{
    Candidate, ScoringRequest, TeamId, TeamSnapshot, TraitTag, UserId,
};
use crate::recommendation::engine::{RecommendationEngine, ScoringConfig};
use crate::recommendation::repository::{DirectoryError, TeamDirectory, TraitStore};
use crate::recommendation::{recommendation_router, TeamRecommendationService};

pub(super) fn candidate(
    id: u64,
    region: Option<&str>,
    job_field: Option<&str>,
    skills: Option<&str>,
) -> Candidate {
    Candidate {
        id: UserId(id),
        name: format!("Candidate {id}"),
        contact: format!("@candidate{id}"),
        region: region.map(str::to_string),
        job_field: job_field.map(str::to_string),
        skills_raw: skills.map(str::to_string),
    }
}

pub(super) fn team(members: &[u64]) -> TeamSnapshot {
    TeamSnapshot {
        id: TeamId(10),
        name: "Hackathon Crew".to_string(),
        region: Some("Seoul".to_string()),
        members: members.iter().copied().map(UserId).collect::<BTreeSet<_>>(),
    }
}

pub(super) fn belbin(user: u64, role: &str) -> TraitTag {
    TraitTag::new(UserId(user), "belbin", role)
}

pub(super) fn big5(user: u64, value: &str) -> TraitTag {
    TraitTag::new(UserId(user), "big5", value)
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(ScoringConfig::default())
}

pub(super) fn request() -> ScoringRequest {
    ScoringRequest::default()
}

/// Pool of six non-members plus two members (ids 1 and 2).
pub(super) fn pool() -> Vec<Candidate> {
    vec![
        candidate(1, Some("Seoul"), Some("Backend"), Some("Rust, Go")),
        candidate(2, Some("Busan"), Some("Design"), Some("Figma")),
        candidate(3, Some("Seoul"), Some("Frontend"), Some("React, Node.js")),
        candidate(4, Some("Busan"), Some("Backend"), Some("Python")),
        candidate(5, None, None, None),
        candidate(6, Some("Seoul"), Some("Frontend"), Some("React, TypeScript")),
        candidate(7, Some("Daegu"), Some("Data"), Some("Python, SQL")),
        candidate(8, Some("Seoul"), Some("Design"), Some("Figma, Sketch")),
    ]
}

pub(super) fn traits() -> Vec<TraitTag> {
    vec![
        belbin(1, "Plant"),
        belbin(2, "Shaper"),
        belbin(3, "Implementer"),
        big5(3, "Conscientiousness:High"),
        big5(3, "Agreeableness:High"),
        belbin(4, "Specialist"),
        big5(4, "Agreeableness:Low"),
        belbin(6, "Completer Finisher"),
        big5(6, "성실성: 높음"),
        belbin(7, "Monitor Evaluator"),
        big5(8, "Openness:High"),
    ]
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    pub(super) teams: Vec<TeamSnapshot>,
    pub(super) candidates: Vec<Candidate>,
    pub(super) traits: Vec<TraitTag>,
    pub(super) trait_requests: Arc<Mutex<Vec<Vec<UserId>>>>,
}

impl MemoryDirectory {
    pub(super) fn seeded() -> Self {
        Self {
            teams: vec![team(&[1, 2])],
            candidates: pool(),
            traits: traits(),
            trait_requests: Arc::default(),
        }
    }

    pub(super) fn requested_users(&self) -> Vec<Vec<UserId>> {
        self.trait_requests
            .lock()
            .expect("trait request mutex poisoned")
            .clone()
    }
}

impl TeamDirectory for MemoryDirectory {
    fn team(&self, id: TeamId) -> Result<Option<TeamSnapshot>, DirectoryError> {
        Ok(self.teams.iter().find(|team| team.id == id).cloned())
    }

    fn candidate_pool(&self) -> Result<Vec<Candidate>, DirectoryError> {
        Ok(self.candidates.clone())
    }
}

impl TraitStore for MemoryDirectory {
    fn traits_for(&self, users: &[UserId]) -> Result<Vec<TraitTag>, DirectoryError> {
        self.trait_requests
            .lock()
            .expect("trait request mutex poisoned")
            .push(users.to_vec());
        Ok(self
            .traits
            .iter()
            .filter(|tag| users.contains(&tag.user_id))
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableDirectory;

impl TeamDirectory for UnavailableDirectory {
    fn team(&self, _id: TeamId) -> Result<Option<TeamSnapshot>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn candidate_pool(&self) -> Result<Vec<Candidate>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }
}

impl TraitStore for UnavailableDirectory {
    fn traits_for(&self, _users: &[UserId]) -> Result<Vec<TraitTag>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    TeamRecommendationService<MemoryDirectory, MemoryDirectory>,
    Arc<MemoryDirectory>,
) {
    let directory = Arc::new(MemoryDirectory::seeded());
    let service = TeamRecommendationService::new(
        directory.clone(),
        directory.clone(),
        ScoringConfig::default(),
    );
    (service, directory)
}

pub(super) fn router_with_service(
    service: TeamRecommendationService<MemoryDirectory, MemoryDirectory>,
) -> axum::Router {
    recommendation_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
