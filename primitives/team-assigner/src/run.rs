//! Wires the resolver, selector and executor into one sequential run.

use rand::Rng;
use tracing::debug;

use crate::assign::{Outcome, assign_issue};
use crate::client::HostingClient;
use crate::config::Config;
use crate::error::AssignError;
use crate::targets::select_targets;
use crate::team::resolve_team_members;

/// Runs one invocation and returns the outcome of every attempted target.
///
/// Targets are processed one at a time in listing order. The first error
/// stops the run; items processed before it keep their assignment.
pub async fn run<C, R>(
    config: &Config,
    client: &C,
    rng: &mut R,
) -> Result<Vec<Outcome>, AssignError>
where
    C: HostingClient + ?Sized,
    R: Rng + ?Sized,
{
    let org = client.organization(&config.organization).await?;
    let repo = client.repository(&org, &config.repo).await?;

    let candidates = resolve_team_members(client, &org, &config.team).await?;
    let targets = select_targets(client, &repo, config.target).await?;
    debug!(candidates = candidates.len(), targets = targets.len(), "starting assignment");

    let mut outcomes = Vec::with_capacity(targets.len());
    for target in targets {
        outcomes.push(assign_issue(client, &repo, &candidates, target.number, rng).await?);
    }

    Ok(outcomes)
}
