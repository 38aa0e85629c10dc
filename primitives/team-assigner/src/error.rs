//! Failure kinds for a team-assigner run.
//!
//! Every variant is fatal: the binaries log it and exit non-zero. An item that
//! already has an assignee is not an error and is reported through
//! [`crate::Outcome::AlreadyAssigned`] instead.

use thiserror::Error;

/// Boxed source error carried by [`AssignError::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Coarse classification of an [`AssignError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or contradictory invocation parameters.
    Configuration,
    /// An organization, repository, team or issue does not exist.
    NotFound,
    /// Random selection was attempted over zero candidates.
    EmptyCandidatePool,
    /// The hosting service failed (network, authentication, rate limit).
    Transport,
}

/// Errors produced while resolving, selecting or assigning.
#[derive(Debug, Error)]
pub enum AssignError {
    /// Invalid invocation; raised before any network access.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("no organization named {0} found")]
    OrganizationNotFound(String),

    #[error("no repository named {organization}/{repo} found")]
    RepositoryNotFound { organization: String, repo: String },

    #[error("no team named {team} found")]
    TeamNotFound { organization: String, team: String },

    #[error("no issue or pull request #{number} found in {repository}")]
    IssueNotFound { repository: String, number: u64 },

    /// The team roster was empty when a target needed an assignee.
    #[error("cannot assign #{number}: the candidate list is empty")]
    EmptyCandidatePool { number: u64 },

    #[error("{operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: BoxError,
    },
}

impl AssignError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::OrganizationNotFound(_)
            | Self::RepositoryNotFound { .. }
            | Self::TeamNotFound { .. }
            | Self::IssueNotFound { .. } => ErrorKind::NotFound,
            Self::EmptyCandidatePool { .. } => ErrorKind::EmptyCandidatePool,
            Self::Transport { .. } => ErrorKind::Transport,
        }
    }

    /// Wraps a hosting-service failure, naming the operation that raised it.
    pub fn transport(operation: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            operation,
            source: source.into(),
        }
    }
}
