//! Resolves a team display name to its member logins.

use tracing::debug;

use crate::client::HostingClient;
use crate::error::AssignError;
use crate::model::Organization;

/// Returns the logins of the team whose display name equals `team_name`.
///
/// Matching is exact and case-sensitive. An empty roster is returned as-is;
/// the executor rejects it when a target needs an assignee.
pub async fn resolve_team_members<C>(
    client: &C,
    org: &Organization,
    team_name: &str,
) -> Result<Vec<String>, AssignError>
where
    C: HostingClient + ?Sized,
{
    let teams = client.list_teams(org).await?;
    let team = teams
        .into_iter()
        .find(|t| t.name == team_name)
        .ok_or_else(|| AssignError::TeamNotFound {
            organization: org.login.clone(),
            team: team_name.to_string(),
        })?;

    let members = client.team_members(org, &team).await?;
    debug!(team = %team.name, id = team.id, members = members.len(), "resolved team");

    Ok(members.into_iter().map(|m| m.login).collect())
}
