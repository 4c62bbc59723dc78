//! API surface
//!
//! Concrete endpoints and the operations built on them: identity resolution
//! (one unpaged request) and the paged relationship fetches.

mod types;

pub use types::{Follow, FollowListResponse, IdListResponse, ResultMeta, VerifyCredentials};

use crate::error::Result;
use crate::http::ApiClient;
use crate::pagination::{fetch_all, Endpoint};

/// Verify-credentials endpoint, the identity source
pub const VERIFY_CREDENTIALS: &str = "/1.1/account/verify_credentials.json";

/// Accounts the user follows (token protocol, newest first)
pub const FOLLOWING: Endpoint =
    Endpoint::new("/2/users/:id/following?max_results=500", "pagination_token");

/// Follower ids (numeric-cursor protocol)
pub const FOLLOWERS: Endpoint = Endpoint::new(
    "/1.1/followers/ids.json?count=5000&stringify_ids=true",
    "cursor",
);

/// Muted account ids (numeric-cursor protocol)
pub const MUTES: Endpoint = Endpoint::new(
    "/1.1/mutes/users/ids.json?count=5000&stringify_ids=true",
    "cursor",
);

/// Blocked account ids (numeric-cursor protocol)
pub const BLOCKS: Endpoint = Endpoint::new(
    "/1.1/blocks/ids.json?count=5000&stringify_ids=true",
    "cursor",
);

/// Resolve the authenticated account's id.
///
/// One GET, no pagination. Resolved once per invocation; every paged
/// operation takes the result as input.
pub async fn self_id(client: &ApiClient) -> Result<String> {
    let identity: VerifyCredentials = client.get_json(VERIFY_CREDENTIALS).await?;
    Ok(identity.id)
}

/// Fetch the raw verify-credentials response body
pub async fn verify_credentials_raw(client: &ApiClient) -> Result<String> {
    client.get_raw(VERIFY_CREDENTIALS).await
}

/// Fetch the complete following list, in server order (newest first)
pub async fn following(client: &ApiClient, account_id: &str) -> Result<Vec<Follow>> {
    fetch_all::<FollowListResponse>(client, &FOLLOWING, account_id).await
}

/// Fetch a complete id list (followers, mutes or blocks)
pub async fn list_ids(
    client: &ApiClient,
    endpoint: &Endpoint,
    account_id: &str,
) -> Result<Vec<String>> {
    fetch_all::<IdListResponse>(client, endpoint, account_id).await
}
