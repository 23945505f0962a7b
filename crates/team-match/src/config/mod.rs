use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::recommendation::engine::{ScoringConfig, ScoringWeights};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub data: DataConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let dataset_dir = env::var("TEAM_MATCH_DATASET_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            data: DataConfig { dataset_dir },
            scoring: load_scoring()?,
        })
    }
}

fn load_scoring() -> Result<ScoringConfig, ConfigError> {
    let mut scoring = ScoringConfig::default();
    let base = scoring.weights;

    let weights = ScoringWeights {
        skill: weight_var("SCORING_WEIGHT_SKILL", base.skill)?,
        role: weight_var("SCORING_WEIGHT_ROLE", base.role)?,
        personality: weight_var("SCORING_WEIGHT_PERSONALITY", base.personality)?,
    };
    if (weights.sum() - 1.0).abs() > 1e-6 {
        return Err(ConfigError::WeightsDoNotSumToOne { sum: weights.sum() });
    }
    scoring.weights = weights;

    if let Ok(raw) = env::var("SCORING_DEFAULT_LIMIT") {
        let limit = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidLimit)?;
        if limit < scoring.limits.min || limit > scoring.limits.max {
            return Err(ConfigError::InvalidLimit);
        }
        scoring.limits.default = limit;
    }

    Ok(scoring)
}

fn weight_var(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or(ConfigError::InvalidWeight { key }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the server reads its team and candidate snapshot from.
#[derive(Debug, Clone, Default)]
pub struct DataConfig {
    pub dataset_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidWeight { key: &'static str },
    WeightsDoNotSumToOne { sum: f64 },
    InvalidLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidWeight { key } => {
                write!(f, "{key} must be a non-negative number")
            }
            ConfigError::WeightsDoNotSumToOne { sum } => {
                write!(f, "scoring weights must sum to 1.0 (got {sum:.4})")
            }
            ConfigError::InvalidLimit => {
                write!(f, "SCORING_DEFAULT_LIMIT must be an integer between 1 and 20")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidWeight { .. }
            | ConfigError::WeightsDoNotSumToOne { .. }
            | ConfigError::InvalidLimit => None,
        }
    }
}
