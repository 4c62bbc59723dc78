//! Pagination types and traits

use crate::template;
use serde::de::DeserializeOwned;

/// Continuation marker carried between pages
///
/// Tagged variant per paging protocol, each with its own terminal reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// Numeric cursor with its string twin (v1.1 id lists).
    ///
    /// The numeric form decides termination; the string form is what gets
    /// echoed into the next request. The server keeps the two in agreement.
    Cursor {
        /// Cursor as delivered in `next_cursor`; zero means no next page
        next_cursor: i64,
        /// Literal value to send back as the `cursor` parameter
        next_cursor_str: String,
    },

    /// Opaque token (v2 relationship lists); empty means no next page
    Token {
        /// Literal value to send back as the pagination parameter
        next_token: String,
    },
}

impl Continuation {
    /// Check whether the server signalled completion
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Cursor { next_cursor, .. } => *next_cursor == 0,
            Self::Token { next_token } => next_token.is_empty(),
        }
    }

    /// The value to carry into the next request, or `None` on the final page
    pub fn carry(&self) -> Option<&str> {
        if self.is_terminal() {
            return None;
        }
        match self {
            Self::Cursor {
                next_cursor_str, ..
            } => Some(next_cursor_str),
            Self::Token { next_token } => Some(next_token),
        }
    }
}

/// One decoded server response: its items plus the continuation marker
#[derive(Debug)]
pub struct Page<T> {
    /// Result items in server-delivered order
    pub items: Vec<T>,
    /// Marker deciding whether and how to request the next page
    pub continuation: Continuation,
}

/// Contract a wire shape implements to take part in pagination
///
/// Purely structural: map the protocol-specific response into "sequence of
/// items" + "continuation marker" so the driver loop stays protocol-agnostic.
pub trait Paged: DeserializeOwned {
    /// Item type contributed to the aggregate
    type Item;

    /// Split the decoded response into items and continuation
    fn into_page(self) -> Page<Self::Item>;
}

/// A paged endpoint: URL template plus the name of its pagination parameter
///
/// The path may contain an `:id` placeholder for the account id and must
/// already carry a query string (the continuation parameter is appended with
/// `&`). The parameter is absent from the first request entirely, which is
/// what distinguishes "first page" from "explicit empty continuation".
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// URL template, absolute or relative to the client's base URL
    pub path: &'static str,
    /// Query parameter name the protocol uses for its continuation value
    pub cursor_param: &'static str,
}

impl Endpoint {
    /// Define an endpoint
    pub const fn new(path: &'static str, cursor_param: &'static str) -> Self {
        Self { path, cursor_param }
    }

    /// Build the URL for one page request.
    ///
    /// `continuation` is `None` for the first request and the previous
    /// page's carried value afterwards.
    pub fn page_url(&self, account_id: &str, continuation: Option<&str>) -> String {
        match continuation {
            None => template::expand(self.path, &[("id", account_id)]),
            Some(value) => {
                let base = format!("{}&{}=:next", self.path, self.cursor_param);
                template::expand(&base, &[("id", account_id), ("next", value)])
            }
        }
    }
}
