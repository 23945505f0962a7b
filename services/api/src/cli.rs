use crate::demo::{run_demo, run_recommend, DemoArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use team_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Team Match",
    about = "Rank candidates for a team from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank candidates for one team and print the result
    Recommend(RecommendArgs),
    /// Walk through recommendations against the built-in demo roster
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Directory holding teams.csv, users.csv, memberships.csv and traits.csv
    #[arg(long)]
    pub(crate) dataset_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}
