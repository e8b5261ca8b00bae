//! The seam between the dispatcher and the network.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::HttpMethod;

/// One outbound call, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    /// Absolute URL, base plus expanded path.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON payload.
    pub body: Option<String>,
    /// `false` only for the sandbox host.
    pub verify_tls: bool,
    /// Total timeout for the whole round trip.
    pub timeout: Duration,
}

impl TransportRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// Status line, header lines, blank line, body.
    pub raw: String,
    /// Request line and the request header lines actually sent.
    pub request_head: String,
    pub elapsed: Duration,
}

/// Performs one HTTP round trip.
///
/// Implementations must not retry. Any failure before a response is read is reported
/// as [`DriverError::Transport`](crate::DriverError::Transport).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Render the request line and header lines in wire form.
///
/// `target` is the request target (path and query). Ends with the blank line.
pub fn render_request_head(
    method: HttpMethod,
    target: &str,
    version: &str,
    headers: &[(String, String)],
) -> String {
    let mut head = format!("{method} {target} HTTP/{version}\r\n");
    for (name, value) in headers {
        head.push_str(name);
        head.push_str(": ");
        head.push_str(value);
        head.push_str("\r\n");
    }
    head.push_str("\r\n");
    head
}

/// Request target (path plus query) of an absolute URL.
pub fn request_target(url: &str) -> &str {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    match after_scheme.find('/') {
        Some(i) => &after_scheme[i..],
        None => "/",
    }
}

/// Host part (authority) of an absolute URL.
pub fn request_host(url: &str) -> &str {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    after_scheme
        .find('/')
        .map_or(after_scheme, |i| &after_scheme[..i])
}
