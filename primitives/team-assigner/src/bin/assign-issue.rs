//! `assign-issue`: assigns a random team member to a single issue or pull
//! request. Has no bulk mode.

use clap::Parser;
use team_assigner::{SingleIssueArgs, init_tracing, run_with_github};
use tracing::error;

#[tokio::main]
async fn main() {
    init_tracing();
    let args = SingleIssueArgs::parse();

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
