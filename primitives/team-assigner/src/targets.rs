//! Determines which items a run may assign.

use tracing::{debug, info};

use crate::client::HostingClient;
use crate::config::Target;
use crate::error::AssignError;
use crate::model::{Issue, Repository};

/// Fetches the items named by `target`.
///
/// In bulk mode the listing endpoint mixes issues and pull requests, so the
/// unassigned open items are fetched first and plain issues dropped after.
pub async fn select_targets<C>(
    client: &C,
    repo: &Repository,
    target: Target,
) -> Result<Vec<Issue>, AssignError>
where
    C: HostingClient + ?Sized,
{
    match target {
        Target::Issue(number) => Ok(vec![client.get_issue(repo, number).await?]),
        Target::AllPullRequests => {
            info!("Getting all issues (this may take a while)...");
            let open = client.list_unassigned_open_issues(repo).await?;
            let total = open.len();
            let pull_requests: Vec<Issue> =
                open.into_iter().filter(|i| i.is_pull_request).collect();
            debug!(
                repository = %repo,
                open = total,
                pull_requests = pull_requests.len(),
                "selected unassigned pull requests"
            );
            Ok(pull_requests)
        }
    }
}
