//! Command-line surface for both binaries.
//!
//! Clap handles syntax only. Rules that span several options (token presence,
//! `--issue` versus `--all-pull-requests`) are checked by `validate`, so they
//! surface as [`AssignError::Configuration`] before any network access.

use std::fmt;

use clap::Parser;

use crate::error::AssignError;

/// Environment variable consulted when `--token` is absent.
pub const TOKEN_ENV: &str = "GITHUB_ACCESS_TOKEN";

/// Assigns a random team member to an issue or to every unassigned open pull request.
#[derive(Parser, Debug, Clone)]
#[command(name = "team-assigner")]
#[command(about = "Assigns a random team member to GitHub issues and pull requests")]
pub struct Args {
    /// Organization owning the repository and the team.
    #[arg(long)]
    pub organization: String,

    /// Repository name within the organization.
    #[arg(long)]
    pub repo: String,

    /// Display name of the team to draw assignees from.
    #[arg(long)]
    pub team: String,

    /// Issue or pull request number to assign.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub issue: Option<u64>,

    /// Add an assignee to all open pull requests (use with care!).
    #[arg(long)]
    pub all_pull_requests: bool,

    /// GitHub access token.
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,
}

/// Assigns a random team member to a single issue or pull request.
#[derive(Parser, Debug, Clone)]
#[command(name = "assign-issue")]
#[command(about = "Assigns a random team member to one GitHub issue or pull request")]
pub struct SingleIssueArgs {
    /// Organization owning the repository and the team.
    #[arg(long)]
    pub organization: String,

    /// Repository name within the organization.
    #[arg(long)]
    pub repo: String,

    /// Display name of the team to draw assignees from.
    #[arg(long)]
    pub team: String,

    /// Issue or pull request number to assign.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub issue: Option<u64>,

    /// GitHub access token.
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,
}

/// Which items a run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Issue(u64),
    AllPullRequests,
}

/// Validated invocation parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub organization: String,
    pub repo: String,
    pub team: String,
    pub target: Target,
    pub token: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("organization", &self.organization)
            .field("repo", &self.repo)
            .field("team", &self.team)
            .field("target", &self.target)
            .field("token", &"<redacted>")
            .finish()
    }
}

fn require_token(token: Option<String>) -> Result<String, AssignError> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AssignError::Configuration(format!(
                "--token option or {TOKEN_ENV} environment variable must be specified"
            ))
        })
}

impl Args {
    pub fn validate(self) -> Result<Config, AssignError> {
        let token = require_token(self.token)?;

        let target = match (self.issue, self.all_pull_requests) {
            (Some(number), false) => Target::Issue(number),
            (None, true) => Target::AllPullRequests,
            (None, false) => {
                return Err(AssignError::Configuration(
                    "--issue option or --all-pull-requests option must be specified".to_string(),
                ));
            }
            (Some(_), true) => {
                return Err(AssignError::Configuration(
                    "--issue option and --all-pull-requests option cannot be specified together"
                        .to_string(),
                ));
            }
        };

        Ok(Config {
            organization: self.organization,
            repo: self.repo,
            team: self.team,
            target,
            token,
        })
    }
}

impl SingleIssueArgs {
    pub fn validate(self) -> Result<Config, AssignError> {
        let token = require_token(self.token)?;
        let number = self.issue.ok_or_else(|| {
            AssignError::Configuration("--issue option must be specified".to_string())
        })?;

        Ok(Config {
            organization: self.organization,
            repo: self.repo,
            team: self.team,
            target: Target::Issue(number),
            token,
        })
    }
}
