use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use team_match::import::{Dataset, DatasetImporter, ImportError};
use team_match::recommendation::{Candidate, TeamId, TeamSnapshot, TraitTag, UserId};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the CSV snapshot from `dir`, or the built-in demo roster when no directory is set.
pub(crate) fn load_dataset(dir: Option<&Path>) -> Result<Dataset, ImportError> {
    let dataset = match dir {
        Some(dir) => DatasetImporter::from_dir(dir)?,
        None => demo_dataset(),
    };

    let source = dir
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "built-in demo".to_string());
    info!(
        %source,
        teams = dataset.teams().count(),
        candidates = dataset.candidates().len(),
        traits = dataset.trait_count(),
        "dataset loaded"
    );

    Ok(dataset)
}

pub(crate) const DEMO_TEAM: TeamId = TeamId(1);

/// Small roster used by the `demo` command and by the server when no dataset is configured.
///
/// Team 1 ("Launchpad") is two Plants and a Shaper, so requests against it exercise
/// the plant-heavy weight shift.
pub(crate) fn demo_dataset() -> Dataset {
    let person = |id: u64, name: &str, region: &str, job_field: &str, skills: &str| Candidate {
        id: UserId(id),
        name: name.to_string(),
        contact: format!("@{}", name.to_lowercase()),
        region: Some(region.to_string()).filter(|value| !value.is_empty()),
        job_field: Some(job_field.to_string()).filter(|value| !value.is_empty()),
        skills_raw: Some(skills.to_string()).filter(|value| !value.is_empty()),
    };

    let candidates = vec![
        person(1, "Hana", "Seoul", "Product", "Research, Figma"),
        person(2, "Joon", "Seoul", "Product", "Strategy"),
        person(3, "Minsu", "Seoul", "Backend", "Rust, PostgreSQL"),
        person(4, "Ara", "Seoul", "Frontend", "React, TypeScript"),
        person(5, "Taeyang", "Busan", "Backend", "Go, Rust, Kafka"),
        person(6, "Yuri", "Seoul", "Design", "Figma, Illustration"),
        person(7, "Doyun", "Daegu", "Frontend", "React, Svelte"),
        person(8, "Seoyeon", "Seoul", "Data", "Python, SQL"),
        person(9, "Jiho", "", "Backend", "Java"),
        person(10, "Eunji", "Busan", "Data", ""),
    ];

    let teams = vec![
        TeamSnapshot {
            id: DEMO_TEAM,
            name: "Launchpad".to_string(),
            region: Some("Seoul".to_string()),
            members: [UserId(1), UserId(2), UserId(6)].into_iter().collect(),
        },
        TeamSnapshot {
            id: TeamId(2),
            name: "Harbor".to_string(),
            region: Some("Busan".to_string()),
            members: BTreeSet::new(),
        },
    ];

    let tag = |id: u64, category: &str, value: &str| TraitTag::new(UserId(id), category, value);
    let traits = vec![
        tag(1, "belbin", "Plant"),
        tag(2, "belbin", "Plant"),
        tag(6, "belbin", "Shaper"),
        tag(3, "belbin", "Implementer"),
        tag(3, "big5", "Conscientiousness:High"),
        tag(4, "belbin", "Teamworker"),
        tag(4, "big5", "Agreeableness:High"),
        tag(4, "big5", "Conscientiousness:High"),
        tag(5, "belbin", "Completer Finisher"),
        tag(5, "big5", "성실성: 높음"),
        tag(7, "belbin", "Plant"),
        tag(7, "big5", "Openness:High"),
        tag(8, "belbin", "Monitor Evaluator"),
        tag(8, "big5", "친화성 높음"),
        tag(10, "big5", "Extraversion:High"),
    ];

    Dataset::new(teams, candidates, traits)
}
