//! HTTP client module
//!
//! One signed GET per call, no retries, no backoff: the first failure is the
//! final answer. Non-200 responses surface the full response body for
//! diagnosis; a successful body is captured once into an owned buffer and
//! decoded from there.

mod client;

pub use client::{ApiClient, ApiClientConfig};
