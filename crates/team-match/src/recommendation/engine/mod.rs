mod bonus;
mod config;
mod eligibility;
mod explain;
mod markers;
mod ranker;
mod roles;
mod scorers;

pub use config::{
    AdaptiveWeighting, BaselineScores, BonusConfig, ResultLimits, ScoringConfig, ScoringWeights,
};
pub use explain::{FALLBACK_REASON, INCOMPLETE_PROFILE_REASON, MAX_REASONS};
pub use markers::{HighMarker, MarkerMatcher, PersonalityMarkers};

use serde::{Deserialize, Serialize};

use super::domain::{BelbinRole, Candidate, ScoringRequest, TeamSnapshot, TraitIndex, TraitTag};
use eligibility::EligibilityFilter;
use explain::ReasonInputs;

/// Stateless engine ranking non-member candidates for a single team.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: ScoringConfig,
    markers: PersonalityMarkers,
}

impl RecommendationEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            markers: PersonalityMarkers::default(),
        }
    }

    pub fn with_markers(mut self, markers: PersonalityMarkers) -> Self {
        self.markers = markers;
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Role gaps for the team, with targets derived as if no roles were requested.
    pub fn role_gaps(&self, team: &TeamSnapshot, traits: &[TraitTag]) -> RoleGapReport {
        let index = TraitIndex::from_tags(traits);
        let gaps = roles::analyze(team, &index, &[], &self.config.fallback_roles);
        let counts = roles::role_counts(team, &index)
            .into_iter()
            .map(|(role, count)| RoleCount { role, count })
            .collect();

        RoleGapReport {
            missing_roles: gaps.missing_roles,
            default_targets: gaps.target_roles,
            plant_count: gaps.plant_count,
            weights: self.config.weights_for(gaps.plant_count),
            role_counts: counts,
        }
    }

    /// Scores and ranks `pool` against `team`. Pool order is the tie-break order.
    pub fn recommend(
        &self,
        team: &TeamSnapshot,
        pool: &[Candidate],
        traits: &[TraitTag],
        request: &ScoringRequest,
    ) -> RecommendationOutcome {
        let index = TraitIndex::from_tags(traits);
        let required_skills = request.normalized_skills();
        let required_job_field = request.job_field();
        let limit = self.config.limits.resolve(request.limit);

        let gaps = roles::analyze(
            team,
            &index,
            &request.desired_roles,
            &self.config.fallback_roles,
        );
        let weights = self.config.weights_for(gaps.plant_count);

        let parameters = AppliedParameters {
            required_job_field: required_job_field.map(str::to_string),
            required_skills: required_skills.iter().cloned().collect(),
            target_roles: gaps.target_roles.clone(),
            missing_roles: gaps.missing_roles.clone(),
            unrecognized_roles: gaps.unrecognized_roles.clone(),
            plant_count: gaps.plant_count,
            emphasize_conscientiousness: request.emphasize_conscientiousness,
            emphasize_agreeableness: request.emphasize_agreeableness,
            limit,
            weights,
        };

        let filter = EligibilityFilter {
            team,
            required_job_field,
            required_skills: &required_skills,
        };
        let eligible = filter.apply(pool);
        if eligible.is_empty() {
            return RecommendationOutcome {
                parameters,
                eligible_count: 0,
                recommendations: Vec::new(),
            };
        }

        let baselines = &self.config.baselines;
        let mut scored: Vec<ScoredCandidate> = eligible
            .iter()
            .map(|candidate| {
                let candidate_traits = index.traits_for(candidate.id);
                let skill = scorers::skill_score(
                    &candidate.normalized_skills(),
                    &required_skills,
                    baselines,
                );
                let role = scorers::role_score(
                    &candidate_traits,
                    &gaps.target_roles,
                    &gaps.missing_roles,
                    baselines,
                );
                let personality = scorers::personality_score(
                    &candidate_traits,
                    request.emphasize_conscientiousness,
                    request.emphasize_agreeableness,
                    &self.markers,
                    baselines,
                );
                let bonus =
                    bonus::alignment_bonus(candidate, team, required_job_field, &self.config.bonuses);

                let ratio = ranker::composite_ratio(
                    skill.score,
                    role.score,
                    personality.score,
                    &weights,
                    bonus.total,
                );
                let composite = ranker::to_percent(ratio);

                let reasons = explain::reasons(&ReasonInputs {
                    skill: &skill,
                    required_skill_count: required_skills.len(),
                    role: &role,
                    personality: &personality,
                    bonus: &bonus,
                });

                ScoredCandidate {
                    candidate: (*candidate).clone(),
                    score: composite,
                    breakdown: ScoreBreakdown {
                        skill: skill.score,
                        role: role.score,
                        personality: personality.score,
                        weights,
                        bonus: bonus.total,
                        composite,
                    },
                    reasons,
                }
            })
            .collect();

        let eligible_count = scored.len();
        ranker::rank(&mut scored, |entry| entry.score);
        scored.truncate(limit);

        RecommendationOutcome {
            parameters,
            eligible_count,
            recommendations: scored,
        }
    }
}

/// Per-dimension contribution to a candidate's composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill: f64,
    pub role: f64,
    pub personality: f64,
    pub weights: ScoringWeights,
    pub bonus: f64,
    pub composite: f64,
}

/// A ranked candidate with its score trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub reasons: Vec<String>,
}

/// Parameters actually applied after defaulting and clamping, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedParameters {
    pub required_job_field: Option<String>,
    pub required_skills: Vec<String>,
    pub target_roles: Vec<BelbinRole>,
    pub missing_roles: Vec<BelbinRole>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unrecognized_roles: Vec<String>,
    pub plant_count: usize,
    pub emphasize_conscientiousness: bool,
    pub emphasize_agreeableness: bool,
    pub limit: usize,
    pub weights: ScoringWeights,
}

/// Engine output: the ranked list paired with the parameters used to produce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOutcome {
    pub parameters: AppliedParameters,
    pub eligible_count: usize,
    pub recommendations: Vec<ScoredCandidate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCount {
    pub role: BelbinRole,
    pub count: usize,
}

/// Team composition diagnosis exposed alongside recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleGapReport {
    pub missing_roles: Vec<BelbinRole>,
    pub default_targets: Vec<BelbinRole>,
    pub plant_count: usize,
    pub weights: ScoringWeights,
    pub role_counts: Vec<RoleCount>,
}
