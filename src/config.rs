//! Credential loading
//!
//! The four OAuth 1.0a secrets are sourced from the process environment.
//! Loading happens once at startup, before any network activity; a missing
//! (or empty) variable is fatal.

use crate::error::{Error, Result};
use std::env;

/// Environment variable holding the consumer key
pub const CONSUMER_KEY_VAR: &str = "TWITTER_CONSUMER_KEY";
/// Environment variable holding the consumer secret
pub const CONSUMER_SECRET_VAR: &str = "TWITTER_CONSUMER_SECRET";
/// Environment variable holding the access token
pub const ACCESS_TOKEN_VAR: &str = "TWITTER_ACCESS_TOKEN";
/// Environment variable holding the access token secret
pub const TOKEN_SECRET_VAR: &str = "TWITTER_TOKEN_SECRET";

/// The four per-account secrets required to sign requests
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Application consumer key
    pub consumer_key: String,
    /// Application consumer secret
    pub consumer_secret: String,
    /// User access token
    pub access_token: String,
    /// User access token secret
    pub token_secret: String,
}

impl Credentials {
    /// Load credentials from the environment.
    ///
    /// An unset or empty variable fails with the variable's name so the user
    /// knows which secret to export.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            consumer_key: require(CONSUMER_KEY_VAR)?,
            consumer_secret: require(CONSUMER_SECRET_VAR)?,
            access_token: require(ACCESS_TOKEN_VAR)?,
            token_secret: require(TOKEN_SECRET_VAR)?,
        })
    }
}

fn require(var: &'static str) -> Result<String> {
    match env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::missing_credential(var)),
    }
}
