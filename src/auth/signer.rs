//! OAuth 1.0a request signer
//!
//! Implements the HMAC-SHA1 signature scheme: collect the request's query
//! parameters and the oauth_* protocol parameters, percent-encode and sort
//! them, sign the canonical base string, and render the whole thing as an
//! `Authorization: OAuth ...` header.

use crate::config::Credentials;
use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// RFC 3986 unreserved characters stay literal; everything else is escaped.
const STRICT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Signs outgoing requests with the account's OAuth 1.0a credentials
#[derive(Debug, Clone)]
pub struct Signer {
    keys: Credentials,
}

impl Signer {
    /// Create a signer from loaded credentials
    pub fn new(keys: Credentials) -> Self {
        Self { keys }
    }

    /// Build the `Authorization` header value for one request.
    ///
    /// Each call produces a fresh nonce and timestamp; the signature covers
    /// the method, the URL without its query, and the combined query +
    /// oauth parameters.
    pub fn authorization(&self, method: &str, url: &str) -> Result<String> {
        self.authorization_with(method, url, &nonce(), Utc::now().timestamp())
    }

    pub(crate) fn authorization_with(
        &self,
        method: &str,
        url: &str,
        nonce: &str,
        timestamp: i64,
    ) -> Result<String> {
        let timestamp = timestamp.to_string();
        let parsed = Url::parse(url)?;

        let oauth_params = [
            ("oauth_consumer_key", self.keys.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", self.keys.access_token.as_str()),
            ("oauth_version", OAUTH_VERSION),
        ];

        // Query pairs arrive percent-decoded from the Url parser and are
        // re-encoded with the strict set, as the signature scheme requires.
        let mut pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
            .collect();
        pairs.extend(
            oauth_params
                .iter()
                .map(|&(k, v)| (k.to_string(), percent_encode(v))),
        );
        pairs.sort();

        let param_string = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut base_url = parsed;
        base_url.set_query(None);
        base_url.set_fragment(None);
        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(base_url.as_str()),
            percent_encode(&param_string)
        );

        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.keys.consumer_secret),
            percent_encode(&self.keys.token_secret)
        );
        let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(base_string.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        let mut header_params: Vec<(&str, String)> = oauth_params
            .iter()
            .map(|&(k, v)| (k, v.to_string()))
            .collect();
        header_params.push(("oauth_signature", signature));
        header_params.sort();

        let fields = header_params
            .iter()
            .map(|(k, v)| format!("{k}=\"{}\"", percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("OAuth {fields}"))
    }
}

/// Percent-encode with the strict RFC 3986 set
pub(crate) fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, STRICT).to_string()
}

/// Random 32-character alphanumeric nonce
pub(crate) fn nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}
