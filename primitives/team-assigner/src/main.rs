//! `team-assigner`: assigns a random team member to one issue or to every
//! unassigned open pull request.

use clap::Parser;
use team_assigner::{Args, init_tracing, run_with_github};
use tracing::error;

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    let config = match args.validate() {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_with_github(&config).await {
        error!("{e}");
        std::process::exit(1);
    }
}
