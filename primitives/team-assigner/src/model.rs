//! Read views of hosting-service entities, fetched fresh on every run.

use std::fmt;

/// An organization, identified by its handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub login: String,
}

/// A team owned by an organization.
///
/// `name` is the display name matched by the operator; `slug` is the URL-safe
/// identifier the hosting service uses to address the team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// A team member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub login: String,
}

/// A repository within an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// An issue or pull request. Pull requests are issues with a marker set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub assignees: Vec<String>,
    pub is_pull_request: bool,
}

impl Issue {
    pub fn is_assigned(&self) -> bool {
        !self.assignees.is_empty()
    }
}
