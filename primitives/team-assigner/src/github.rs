//! GitHub implementation of [`HostingClient`] backed by octocrab.
//!
//! Listings follow every page at 100 items per page. A 404 from GitHub maps to
//! the matching not-found error; any other failure is a transport error.

use async_trait::async_trait;
use octocrab::{Octocrab, Page, params};
use serde::Deserialize;
use tracing::debug;

use crate::client::HostingClient;
use crate::error::AssignError;
use crate::model::{Issue, Member, Organization, Repository, Team};

const PER_PAGE: u8 = 100;

/// Team as returned by `GET /orgs/{org}/teams`.
#[derive(Debug, Deserialize)]
struct TeamRecord {
    id: u64,
    name: String,
    slug: String,
}

/// Member as returned by `GET /orgs/{org}/teams/{slug}/members`.
#[derive(Debug, Deserialize)]
struct MemberRecord {
    login: String,
}

/// Authenticated GitHub API client.
pub struct GithubClient {
    octocrab: Octocrab,
}

impl GithubClient {
    /// Builds a client for api.github.com authenticated with a personal access token.
    pub fn new(token: &str) -> Result<Self, AssignError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| AssignError::transport("build GitHub client", e))?;
        Ok(Self { octocrab })
    }

    /// Builds a client against another API root, such as GitHub Enterprise.
    pub fn with_base_uri(token: &str, base_uri: &str) -> Result<Self, AssignError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(base_uri.to_string())
            .map_err(|e| AssignError::transport("build GitHub client", e))?
            .build()
            .map_err(|e| AssignError::transport("build GitHub client", e))?;
        Ok(Self { octocrab })
    }

    async fn all_pages<T>(
        &self,
        operation: &'static str,
        first: Page<T>,
    ) -> Result<Vec<T>, AssignError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.octocrab
            .all_pages(first)
            .await
            .map_err(|e| AssignError::transport(operation, e))
    }
}

fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(
        err,
        octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404
    )
}

fn convert_issue(issue: octocrab::models::issues::Issue) -> Issue {
    Issue {
        number: issue.number,
        assignees: issue.assignees.into_iter().map(|a| a.login).collect(),
        is_pull_request: issue.pull_request.is_some(),
    }
}

#[async_trait]
impl HostingClient for GithubClient {
    async fn organization(&self, handle: &str) -> Result<Organization, AssignError> {
        match self.octocrab.orgs(handle).get().await {
            Ok(org) => Ok(Organization { login: org.login }),
            Err(e) if is_not_found(&e) => {
                Err(AssignError::OrganizationNotFound(handle.to_string()))
            }
            Err(e) => Err(AssignError::transport("get organization", e)),
        }
    }

    async fn list_teams(&self, org: &Organization) -> Result<Vec<Team>, AssignError> {
        let route = format!("/orgs/{}/teams", org.login);
        let first: Page<TeamRecord> = self
            .octocrab
            .get(route, Some(&[("per_page", PER_PAGE)]))
            .await
            .map_err(|e| AssignError::transport("list teams", e))?;
        let teams = self.all_pages("list teams", first).await?;
        debug!(organization = %org.login, count = teams.len(), "listed teams");

        Ok(teams
            .into_iter()
            .map(|t| Team {
                id: t.id,
                name: t.name,
                slug: t.slug,
            })
            .collect())
    }

    async fn team_members(
        &self,
        org: &Organization,
        team: &Team,
    ) -> Result<Vec<Member>, AssignError> {
        let route = format!("/orgs/{}/teams/{}/members", org.login, team.slug);
        let first: Page<MemberRecord> = self
            .octocrab
            .get(route, Some(&[("per_page", PER_PAGE)]))
            .await
            .map_err(|e| AssignError::transport("list team members", e))?;
        let members = self.all_pages("list team members", first).await?;

        Ok(members
            .into_iter()
            .map(|m| Member { login: m.login })
            .collect())
    }

    async fn repository(&self, org: &Organization, name: &str) -> Result<Repository, AssignError> {
        match self.octocrab.repos(&org.login, name).get().await {
            Ok(repo) => Ok(Repository {
                owner: org.login.clone(),
                name: repo.name,
            }),
            Err(e) if is_not_found(&e) => Err(AssignError::RepositoryNotFound {
                organization: org.login.clone(),
                repo: name.to_string(),
            }),
            Err(e) => Err(AssignError::transport("get repository", e)),
        }
    }

    async fn get_issue(&self, repo: &Repository, number: u64) -> Result<Issue, AssignError> {
        match self.octocrab.issues(&repo.owner, &repo.name).get(number).await {
            Ok(issue) => Ok(convert_issue(issue)),
            Err(e) if is_not_found(&e) => Err(AssignError::IssueNotFound {
                repository: repo.to_string(),
                number,
            }),
            Err(e) => Err(AssignError::transport("get issue", e)),
        }
    }

    async fn list_unassigned_open_issues(
        &self,
        repo: &Repository,
    ) -> Result<Vec<Issue>, AssignError> {
        let first = self
            .octocrab
            .issues(&repo.owner, &repo.name)
            .list()
            .state(params::State::Open)
            .assignee(params::issues::Filter::None)
            .per_page(PER_PAGE)
            .send()
            .await
            .map_err(|e| AssignError::transport("list issues", e))?;
        let issues = self.all_pages("list issues", first).await?;

        Ok(issues.into_iter().map(convert_issue).collect())
    }

    async fn set_assignees(
        &self,
        repo: &Repository,
        number: u64,
        logins: &[String],
    ) -> Result<(), AssignError> {
        self.octocrab
            .issues(&repo.owner, &repo.name)
            .update(number)
            .assignees(logins)
            .send()
            .await
            .map_err(|e| AssignError::transport("update assignees", e))?;
        Ok(())
    }
}
