use crate::infra::{demo_dataset, load_dataset, DEMO_TEAM};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use team_match::config::AppConfig;
use team_match::error::AppError;
use team_match::import::Dataset;
use team_match::recommendation::{
    AppliedParameters, RecommendationOutcome, RoleGapReport, ScoredCandidate, ScoringRequest,
    TeamId, TeamRecommendationService,
};

type DatasetService = TeamRecommendationService<Dataset, Dataset>;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Team to recommend candidates for
    #[arg(long)]
    pub(crate) team_id: u64,
    /// Directory holding the CSV snapshot (defaults to TEAM_MATCH_DATASET_DIR, then the demo roster)
    #[arg(long)]
    pub(crate) dataset_dir: Option<PathBuf>,
    /// Required skill; repeat for several
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Desired Belbin role; repeat for several
    #[arg(long = "role")]
    pub(crate) roles: Vec<String>,
    /// Required job field (exact match)
    #[arg(long)]
    pub(crate) job_field: Option<String>,
    /// Number of recommendations to return (clamped to 1..=20)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) limit: Option<i64>,
    /// Do not emphasize conscientiousness in personality scoring
    #[arg(long)]
    pub(crate) no_conscientiousness: bool,
    /// Do not emphasize agreeableness in personality scoring
    #[arg(long)]
    pub(crate) no_agreeableness: bool,
    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    fn request(&self) -> ScoringRequest {
        ScoringRequest {
            required_job_field: self.job_field.clone(),
            required_skills: self.skills.clone(),
            desired_roles: self.roles.clone(),
            emphasize_conscientiousness: !self.no_conscientiousness,
            emphasize_agreeableness: !self.no_agreeableness,
            limit: self.limit,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of recommendations per scenario
    #[arg(long)]
    pub(crate) limit: Option<i64>,
}

#[derive(Debug, Serialize)]
struct RecommendationReport<'a> {
    team_id: TeamId,
    eligible_count: usize,
    parameters: &'a AppliedParameters,
    recommendations: &'a [ScoredCandidate],
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let dataset_dir = args.dataset_dir.clone().or(config.data.dataset_dir);
    let dataset = Arc::new(load_dataset(dataset_dir.as_deref())?);
    let service = DatasetService::new(dataset.clone(), dataset, config.scoring);

    let team_id = TeamId(args.team_id);
    let outcome = service.recommend(team_id, &args.request())?;

    if args.json {
        let report = RecommendationReport {
            team_id,
            eligible_count: outcome.eligible_count,
            parameters: &outcome.parameters,
            recommendations: &outcome.recommendations,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => eprintln!("failed to render JSON report: {err}"),
        }
    } else {
        render_outcome(team_id, &outcome);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let dataset = Arc::new(demo_dataset());
    let service = DatasetService::new(dataset.clone(), dataset, Default::default());

    println!("Team recommendation demo");
    let gaps = service.role_gaps(DEMO_TEAM)?;
    render_role_gaps(DEMO_TEAM, &gaps);

    let scenarios = [
        ("Open call, default emphasis", ScoringRequest::default()),
        (
            "Backend engineers with Rust",
            ScoringRequest {
                required_job_field: Some("Backend".to_string()),
                required_skills: vec!["rust".to_string()],
                ..ScoringRequest::default()
            },
        ),
        (
            "Looking for a Teamworker, agreeableness only",
            ScoringRequest {
                desired_roles: vec!["Teamworker".to_string()],
                emphasize_conscientiousness: false,
                ..ScoringRequest::default()
            },
        ),
    ];

    for (title, mut request) in scenarios {
        request.limit = args.limit.or(request.limit);
        println!("\n== {title}");
        let outcome = service.recommend(DEMO_TEAM, &request)?;
        render_outcome(DEMO_TEAM, &outcome);
    }

    Ok(())
}

fn render_role_gaps(team_id: TeamId, report: &RoleGapReport) {
    println!("\nRole coverage for team {team_id}");
    for entry in &report.role_counts {
        println!("- {}: {}", entry.role.label(), entry.count);
    }
    if report.missing_roles.is_empty() {
        println!("Missing roles: none");
    } else {
        let labels: Vec<&str> = report.missing_roles.iter().map(|role| role.label()).collect();
        println!("Missing roles: {}", labels.join(", "));
    }
    println!(
        "Plants on team: {} (weights skill {:.2} / role {:.2} / personality {:.2})",
        report.plant_count, report.weights.skill, report.weights.role, report.weights.personality
    );
}

pub(crate) fn render_outcome(team_id: TeamId, outcome: &RecommendationOutcome) {
    let parameters = &outcome.parameters;
    println!(
        "Team {team_id}: {} eligible candidate(s), showing up to {}",
        outcome.eligible_count, parameters.limit
    );
    if !parameters.unrecognized_roles.is_empty() {
        println!(
            "Ignored unknown role label(s): {}",
            parameters.unrecognized_roles.join(", ")
        );
    }

    if outcome.recommendations.is_empty() {
        println!("No candidates matched the request.");
        return;
    }

    for (rank, entry) in outcome.recommendations.iter().enumerate() {
        let breakdown = &entry.breakdown;
        println!(
            "{}. {} ({}) score {:.2} [skill {:.2}, role {:.2}, personality {:.2}, bonus {:.2}]",
            rank + 1,
            entry.candidate.name,
            entry.candidate.id,
            entry.score,
            breakdown.skill,
            breakdown.role,
            breakdown.personality,
            breakdown.bonus
        );
        for reason in &entry.reasons {
            println!("   - {reason}");
        }
    }
}
