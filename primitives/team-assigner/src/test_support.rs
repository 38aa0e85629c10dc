//! In-memory [`HostingClient`] for tests.

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::client::HostingClient;
use crate::error::AssignError;
use crate::model::{Issue, Member, Organization, Repository, Team};

/// A single organization with one repository, its teams and its issues.
///
/// Every `set_assignees` call is recorded in `writes`; `fail_writes` turns
/// writes into transport errors.
pub(crate) struct FakeHosting {
    pub org: String,
    pub repo: String,
    pub teams: Vec<(Team, Vec<String>)>,
    pub issues: Mutex<BTreeMap<u64, Issue>>,
    pub writes: Mutex<Vec<(u64, Vec<String>)>>,
    pub fail_writes: bool,
}

impl FakeHosting {
    pub fn new(org: &str, repo: &str) -> Self {
        Self {
            org: org.to_string(),
            repo: repo.to_string(),
            teams: Vec::new(),
            issues: Mutex::new(BTreeMap::new()),
            writes: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn with_team(mut self, name: &str, members: &[&str]) -> Self {
        let id = self.teams.len() as u64 + 1;
        let team = Team {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
        };
        self.teams
            .push((team, members.iter().map(|m| m.to_string()).collect()));
        self
    }

    pub fn with_issue(self, number: u64, assignees: &[&str], is_pull_request: bool) -> Self {
        self.issues.lock().unwrap().insert(
            number,
            Issue {
                number,
                assignees: assignees.iter().map(|a| a.to_string()).collect(),
                is_pull_request,
            },
        );
        self
    }

    pub fn repository(&self) -> Repository {
        Repository {
            owner: self.org.clone(),
            name: self.repo.clone(),
        }
    }

    pub fn assignees_of(&self, number: u64) -> Vec<String> {
        self.issues.lock().unwrap()[&number].assignees.clone()
    }

    pub fn writes(&self) -> Vec<(u64, Vec<String>)> {
        self.writes.lock().unwrap().clone()
    }
}

/// Collects formatted log lines for the current thread while the guard lives.
#[derive(Clone, Default)]
pub(crate) struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .with_target(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Lines containing `needle`.
    pub fn lines_with(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[async_trait]
impl HostingClient for FakeHosting {
    async fn organization(&self, handle: &str) -> Result<Organization, AssignError> {
        if handle == self.org {
            Ok(Organization {
                login: handle.to_string(),
            })
        } else {
            Err(AssignError::OrganizationNotFound(handle.to_string()))
        }
    }

    async fn list_teams(&self, _org: &Organization) -> Result<Vec<Team>, AssignError> {
        Ok(self.teams.iter().map(|(team, _)| team.clone()).collect())
    }

    async fn team_members(
        &self,
        _org: &Organization,
        team: &Team,
    ) -> Result<Vec<Member>, AssignError> {
        let (_, members) = self
            .teams
            .iter()
            .find(|(t, _)| t.id == team.id)
            .ok_or_else(|| AssignError::transport("list team members", "unknown team id"))?;
        Ok(members
            .iter()
            .map(|login| Member {
                login: login.clone(),
            })
            .collect())
    }

    async fn repository(&self, org: &Organization, name: &str) -> Result<Repository, AssignError> {
        if name == self.repo {
            Ok(self.repository())
        } else {
            Err(AssignError::RepositoryNotFound {
                organization: org.login.clone(),
                repo: name.to_string(),
            })
        }
    }

    async fn get_issue(&self, repo: &Repository, number: u64) -> Result<Issue, AssignError> {
        self.issues
            .lock()
            .unwrap()
            .get(&number)
            .cloned()
            .ok_or_else(|| AssignError::IssueNotFound {
                repository: repo.to_string(),
                number,
            })
    }

    async fn list_unassigned_open_issues(
        &self,
        _repo: &Repository,
    ) -> Result<Vec<Issue>, AssignError> {
        Ok(self
            .issues
            .lock()
            .unwrap()
            .values()
            .filter(|issue| !issue.is_assigned())
            .cloned()
            .collect())
    }

    async fn set_assignees(
        &self,
        _repo: &Repository,
        number: u64,
        logins: &[String],
    ) -> Result<(), AssignError> {
        if self.fail_writes {
            return Err(AssignError::transport("update assignees", "rate limited"));
        }
        self.writes
            .lock()
            .unwrap()
            .push((number, logins.to_vec()));
        if let Some(issue) = self.issues.lock().unwrap().get_mut(&number) {
            issue.assignees = logins.to_vec();
        }
        Ok(())
    }
}
