//! # flock
//!
//! Export your Twitter/X social graph from the command line: following,
//! followers, mutes, blocks and account identity, fetched to exhaustion and
//! printed deterministically.
//!
//! The interesting part is the pagination engine. The API speaks two
//! incompatible paging protocols — v1.1 id lists carry a numeric cursor with
//! a string twin, v2 relationship lists carry an opaque token — and both are
//! normalized behind one continuation-marker sum type so the driver loop is
//! written once.
//!
//! ```rust,ignore
//! use flock::api;
//! use flock::config::Credentials;
//! use flock::http::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> flock::Result<()> {
//!     let client = ApiClient::new(Credentials::from_env()?);
//!     let id = api::self_id(&client).await?;
//!     let followers = api::list_ids(&client, &api::FOLLOWERS, &id).await?;
//!     println!("{} followers", followers.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! cli ──► api ──► pagination (driver + continuation) ──► http ──► auth
//!  │                                                      │
//!  └──► output (natural sort / chronological reversal)    └──► config
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Credential loading from the environment
pub mod config;

/// OAuth 1.0a request signing
pub mod auth;

/// Signed HTTP client
pub mod http;

/// Endpoint template expansion
pub mod template;

/// Pagination driver and continuation markers
pub mod pagination;

/// Concrete endpoints and operations
pub mod api;

/// Output rendering
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
