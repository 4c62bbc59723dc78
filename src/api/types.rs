//! Wire shapes
//!
//! Serde mirrors of the response envelopes, bit-exact where compatibility
//! matters, each paged shape normalized via its [`Paged`] impl.

use crate::pagination::{Continuation, Page, Paged};
use serde::Deserialize;

/// Identity envelope from verify-credentials
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyCredentials {
    /// Account id; `id_str` on the legacy surface, `id` on the stable one
    #[serde(rename = "id_str", alias = "id")]
    pub id: String,
}

/// Numeric-cursor id-list envelope (v1.1 followers/mutes/blocks)
#[derive(Debug, Clone, Deserialize)]
pub struct IdListResponse {
    /// Ids delivered on this page
    #[serde(default)]
    pub ids: Vec<String>,
    /// Cursor; zero on the final page
    pub next_cursor: i64,
    /// String twin of the cursor; absent on some terminal pages
    #[serde(default)]
    pub next_cursor_str: String,
}

impl Paged for IdListResponse {
    type Item = String;

    fn into_page(self) -> Page<String> {
        Page {
            items: self.ids,
            continuation: Continuation::Cursor {
                next_cursor: self.next_cursor,
                next_cursor_str: self.next_cursor_str,
            },
        }
    }
}

/// One followed account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Follow {
    /// Account id
    pub id: String,
    /// Handle at fetch time
    pub username: String,
}

/// Pagination metadata of the token-based envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultMeta {
    /// Number of results on this page
    #[serde(default)]
    pub result_count: u64,
    /// Token for the next page; absent or empty on the final page
    #[serde(default)]
    pub next_token: String,
}

/// Token-based relationship-list envelope (v2 following)
///
/// `data` is omitted entirely when a page is empty, and `meta.next_token`
/// is omitted on the last page; both default.
#[derive(Debug, Clone, Deserialize)]
pub struct FollowListResponse {
    /// Followed accounts on this page
    #[serde(default)]
    pub data: Vec<Follow>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: ResultMeta,
}

impl Paged for FollowListResponse {
    type Item = Follow;

    fn into_page(self) -> Page<Follow> {
        Page {
            items: self.data,
            continuation: Continuation::Token {
                next_token: self.meta.next_token,
            },
        }
    }
}
