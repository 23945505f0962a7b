use serde::{Deserialize, Serialize};

use crate::recommendation::domain::BelbinRole;

/// Relative weight of each scoring dimension. Sums to 1 before bonuses are added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f64,
    pub role: f64,
    pub personality: f64,
}

impl ScoringWeights {
    pub const BASE: Self = Self {
        skill: 0.35,
        role: 0.40,
        personality: 0.25,
    };

    pub fn sum(&self) -> f64 {
        self.skill + self.role + self.personality
    }

    /// Moves up to `amount` from personality to role, keeping the total unchanged.
    pub fn shifted_toward_role(self, amount: f64) -> Self {
        let shift = amount.max(0.0).min(self.personality.max(0.0));
        Self {
            skill: self.skill,
            role: self.role + shift,
            personality: self.personality - shift,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::BASE
    }
}

/// Re-weighting applied when the team already carries surplus ideation roles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveWeighting {
    pub plant_threshold: usize,
    pub personality_to_role_shift: f64,
}

impl Default for AdaptiveWeighting {
    fn default() -> Self {
        Self {
            plant_threshold: 2,
            personality_to_role_shift: 0.05,
        }
    }
}

/// Additive alignment bonuses applied outside the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusConfig {
    pub same_region: f64,
    pub job_field_match: f64,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            same_region: 0.05,
            job_field_match: 0.05,
        }
    }
}

/// Floor scores substituted when a candidate's data for a dimension is missing,
/// so incomplete profiles rank low without being zeroed out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineScores {
    /// Skill score when no skills were requested but the candidate lists some.
    pub skills_on_file: f64,
    /// Skill score when no skills were requested and the candidate lists none.
    pub skills_missing: f64,
    /// Role score for a candidate without belbin traits while the team has role gaps.
    pub role_missing_with_gaps: f64,
    /// Role score for a candidate without belbin traits otherwise.
    pub role_missing: f64,
    /// Personality score for a candidate without big5 traits.
    pub personality_missing: f64,
}

impl Default for BaselineScores {
    fn default() -> Self {
        Self {
            skills_on_file: 0.3,
            skills_missing: 0.1,
            role_missing_with_gaps: 0.15,
            role_missing: 0.1,
            personality_missing: 0.1,
        }
    }
}

/// Bounds for the number of recommendations returned per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLimits {
    pub default: usize,
    pub min: usize,
    pub max: usize,
}

impl ResultLimits {
    /// Clamps a caller supplied limit, falling back to the default when absent.
    pub fn resolve(&self, requested: Option<i64>) -> usize {
        let min = self.min.max(1);
        let max = self.max.max(min);
        match requested {
            Some(value) if value < min as i64 => min,
            Some(value) if value > max as i64 => max,
            Some(value) => value as usize,
            None => self.default.clamp(min, max),
        }
    }
}

impl Default for ResultLimits {
    fn default() -> Self {
        Self {
            default: 5,
            min: 1,
            max: 20,
        }
    }
}

/// Full configuration for the recommendation engine, passed explicitly per instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub adaptive: AdaptiveWeighting,
    #[serde(default)]
    pub bonuses: BonusConfig,
    #[serde(default)]
    pub baselines: BaselineScores,
    #[serde(default)]
    pub limits: ResultLimits,
    /// Roles targeted when the team has no gaps and the caller named none.
    #[serde(default = "default_fallback_roles")]
    pub fallback_roles: Vec<BelbinRole>,
}

fn default_fallback_roles() -> Vec<BelbinRole> {
    vec![BelbinRole::Implementer, BelbinRole::CompleterFinisher]
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            adaptive: AdaptiveWeighting::default(),
            bonuses: BonusConfig::default(),
            baselines: BaselineScores::default(),
            limits: ResultLimits::default(),
            fallback_roles: default_fallback_roles(),
        }
    }
}

impl ScoringConfig {
    /// Weight vector for a team with `plant_count` members tagged as Plant.
    pub fn weights_for(&self, plant_count: usize) -> ScoringWeights {
        if plant_count >= self.adaptive.plant_threshold {
            self.weights
                .shifted_toward_role(self.adaptive.personality_to_role_shift)
        } else {
            self.weights
        }
    }
}
