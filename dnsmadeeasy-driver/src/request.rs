//! Snapshot of a request as it went out on the wire, kept for debug output.

use std::fmt;

use crate::error::Result;
use crate::headers::parse_request_headers;
use crate::types::Headers;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequestView {
    pub method: String,
    pub url: String,
    pub version: String,
    pub headers: Headers,
    /// JSON payload as sent.
    pub body: Option<String>,
    pub raw_headers: String,
}

impl RawRequestView {
    /// Build the view from the request head reported by the transport.
    pub fn parse(request_head: &str, body: Option<String>) -> Result<Self> {
        let head = parse_request_headers(request_head)?;
        Ok(Self {
            method: head.method,
            url: head.url,
            version: head.version,
            headers: head.headers,
            body,
            raw_headers: request_head.trim().to_string(),
        })
    }
}

impl fmt::Display for RawRequestView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}
