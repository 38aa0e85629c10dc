//! The hosting-service operations the assigner depends on.
//!
//! Core logic only ever talks to [`HostingClient`]; the octocrab-backed
//! implementation lives in [`crate::github`].

use async_trait::async_trait;

use crate::error::AssignError;
use crate::model::{Issue, Member, Organization, Repository, Team};

/// Remote lookups and the single mutation the assigner performs.
///
/// Implementations return [`AssignError`] not-found variants for missing
/// entities and [`AssignError::Transport`] for everything else.
#[async_trait]
pub trait HostingClient: Send + Sync {
    /// Resolves an organization by handle.
    async fn organization(&self, handle: &str) -> Result<Organization, AssignError>;

    /// Lists every team the organization exposes.
    async fn list_teams(&self, org: &Organization) -> Result<Vec<Team>, AssignError>;

    /// Lists the members of a team.
    async fn team_members(&self, org: &Organization, team: &Team)
    -> Result<Vec<Member>, AssignError>;

    /// Resolves a repository by name within an organization.
    async fn repository(&self, org: &Organization, name: &str) -> Result<Repository, AssignError>;

    /// Fetches one issue or pull request by number.
    async fn get_issue(&self, repo: &Repository, number: u64) -> Result<Issue, AssignError>;

    /// Lists open issues and pull requests that have no assignee.
    async fn list_unassigned_open_issues(&self, repo: &Repository)
    -> Result<Vec<Issue>, AssignError>;

    /// Replaces the assignee set of an issue or pull request.
    async fn set_assignees(
        &self,
        repo: &Repository,
        number: u64,
        logins: &[String],
    ) -> Result<(), AssignError>;
}
