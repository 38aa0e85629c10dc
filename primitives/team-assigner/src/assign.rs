//! Assigns one randomly chosen candidate to an unassigned item.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::client::HostingClient;
use crate::error::AssignError;
use crate::model::Repository;

/// Result of one assignment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `assignee` was written as the sole assignee.
    Assigned { number: u64, assignee: String },
    /// The item already had assignees and was left untouched.
    AlreadyAssigned { number: u64, assignees: Vec<String> },
}

impl Outcome {
    pub fn number(&self) -> u64 {
        match self {
            Self::Assigned { number, .. } | Self::AlreadyAssigned { number, .. } => *number,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned { number, assignee } => {
                write!(f, "Issue/Pull-Request #{number} assigned to {assignee}")
            }
            Self::AlreadyAssigned { number, assignees } => write!(
                f,
                "Issue/Pull-Request #{number} already assigned to {}",
                assignees.join(", ")
            ),
        }
    }
}

/// Assigns a uniformly random member of `candidates` to item `number`.
///
/// The item is re-read immediately before writing; if it has gained an
/// assignee in the meantime nothing is written. An empty candidate list fails
/// before any remote call.
pub async fn assign_issue<C, R>(
    client: &C,
    repo: &Repository,
    candidates: &[String],
    number: u64,
    rng: &mut R,
) -> Result<Outcome, AssignError>
where
    C: HostingClient + ?Sized,
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(AssignError::EmptyCandidatePool { number });
    }

    let current = client.get_issue(repo, number).await?;
    if current.is_assigned() {
        let outcome = Outcome::AlreadyAssigned {
            number,
            assignees: current.assignees,
        };
        warn!("{outcome}");
        return Ok(outcome);
    }

    let assignee = candidates
        .choose(rng)
        .cloned()
        .ok_or(AssignError::EmptyCandidatePool { number })?;
    client
        .set_assignees(repo, number, std::slice::from_ref(&assignee))
        .await?;

    let outcome = Outcome::Assigned { number, assignee };
    info!("{outcome}");
    Ok(outcome)
}
