pub mod config;
pub mod error;
pub mod import;
pub mod recommendation;
pub mod telemetry;
