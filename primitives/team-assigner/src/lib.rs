//! Team Assigner - Random Reviewer Assignment
//!
//! Assigns one randomly chosen member of a GitHub team to an issue or pull
//! request, skipping items that already have an assignee.
//!
//! Two binaries share this library:
//!
//! ```bash
//! # One issue or pull request
//! team-assigner --organization acme --repo widgets --team reviewers --issue 42
//!
//! # Every unassigned open pull request (use with care!)
//! team-assigner --organization acme --repo widgets --team reviewers --all-pull-requests
//!
//! # Single-issue-only variant
//! assign-issue --organization acme --repo widgets --team reviewers --issue 42
//! ```
//!
//! The token is read from `--token` or `GITHUB_ACCESS_TOKEN`.

pub mod assign;
pub mod client;
pub mod config;
pub mod error;
pub mod github;
pub mod model;
pub mod run;
pub mod targets;
pub mod team;

#[cfg(test)]
mod test_support;

pub use assign::{Outcome, assign_issue};
pub use client::HostingClient;
pub use config::{Args, Config, SingleIssueArgs, TOKEN_ENV, Target};
pub use error::{AssignError, ErrorKind};
pub use github::GithubClient;
pub use run::run;

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Runs a validated configuration against GitHub.
pub async fn run_with_github(config: &Config) -> Result<Vec<Outcome>, AssignError> {
    let client = GithubClient::new(&config.token)?;
    let mut rng = rand::thread_rng();
    run(config, &client, &mut rng).await
}
