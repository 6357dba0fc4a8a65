//! Requester identity from request headers.
//!
//! An upstream proxy may attach a JSON-encoded [`Account`] in a header.
//! A missing header, an empty value, `null`, or an undecodable value all mean
//! an anonymous request; none of them fail the request.

use axum::http::{HeaderMap, HeaderName};
use wk_site::Account;

/// Decode an identity header value.
fn decode_identity(raw: &[u8]) -> Result<Option<Account>, serde_json::Error> {
    if raw.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(raw)
}

/// Read the requester identity, collapsing decode failures to anonymous.
pub(crate) fn parse_identity(headers: &HeaderMap, header: &HeaderName) -> Option<Account> {
    let raw = headers.get(header)?;
    decode_identity(raw.as_bytes()).unwrap_or_else(|e| {
        tracing::debug!(header = %header, error = %e, "Ignoring undecodable identity header");
        None
    })
}
