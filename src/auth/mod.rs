//! Request signing
//!
//! OAuth 1.0a (HMAC-SHA1) signing for API requests. The `Signer` turns a
//! method + URL into an `Authorization` header value; it owns the four
//! per-account secrets and nothing else ever inspects them.

mod signer;

pub use signer::Signer;
