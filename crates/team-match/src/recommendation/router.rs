use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::domain::{ScoringRequest, TeamId};
use super::engine::{AppliedParameters, RoleGapReport, ScoredCandidate};
use super::repository::{TeamDirectory, TraitStore};
use super::service::{RecommendationServiceError, TeamRecommendationService};

/// Router builder exposing the recommendation endpoints.
pub fn recommendation_router<D, T>(service: Arc<TeamRecommendationService<D, T>>) -> Router
where
    D: TeamDirectory + 'static,
    T: TraitStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/teams/:team_id/recommendations",
            post(recommend_handler::<D, T>),
        )
        .route(
            "/api/v1/teams/:team_id/role-gaps",
            get(role_gaps_handler::<D, T>),
        )
        .with_state(service)
}

/// Response envelope for a recommendation request.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub team_id: TeamId,
    pub generated_at: DateTime<Utc>,
    pub eligible_count: usize,
    pub parameters: AppliedParameters,
    pub recommendations: Vec<ScoredCandidate>,
}

#[derive(Debug, Serialize)]
pub struct RoleGapResponse {
    pub team_id: TeamId,
    #[serde(flatten)]
    pub report: RoleGapReport,
}

pub(crate) async fn recommend_handler<D, T>(
    State(service): State<Arc<TeamRecommendationService<D, T>>>,
    Path(team_id): Path<u64>,
    body: Bytes,
) -> Response
where
    D: TeamDirectory + 'static,
    T: TraitStore + 'static,
{
    let team_id = TeamId(team_id);
    let request = parse_request(team_id, &body);
    match service.recommend(team_id, &request) {
        Ok(outcome) => {
            let body = RecommendationResponse {
                team_id,
                generated_at: Utc::now(),
                eligible_count: outcome.eligible_count,
                parameters: outcome.parameters,
                recommendations: outcome.recommendations,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(team_id, error),
    }
}

pub(crate) async fn role_gaps_handler<D, T>(
    State(service): State<Arc<TeamRecommendationService<D, T>>>,
    Path(team_id): Path<u64>,
) -> Response
where
    D: TeamDirectory + 'static,
    T: TraitStore + 'static,
{
    let team_id = TeamId(team_id);
    match service.role_gaps(team_id) {
        Ok(report) => {
            (StatusCode::OK, axum::Json(RoleGapResponse { team_id, report })).into_response()
        }
        Err(error) => error_response(team_id, error),
    }
}

/// Blank or unparseable bodies score with the default request instead of being rejected.
pub(crate) fn parse_request(team_id: TeamId, body: &[u8]) -> ScoringRequest {
    if body.iter().all(u8::is_ascii_whitespace) {
        return ScoringRequest::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|error| {
        warn!(%team_id, %error, "unreadable recommendation request, using defaults");
        ScoringRequest::default()
    })
}

fn error_response(team_id: TeamId, error: RecommendationServiceError) -> Response {
    let status = match error {
        RecommendationServiceError::TeamNotFound(_) => StatusCode::NOT_FOUND,
        RecommendationServiceError::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "team_id": team_id,
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
