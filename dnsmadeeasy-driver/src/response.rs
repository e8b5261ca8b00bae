//! Parsed view of a raw response.

use std::time::Duration;

use crate::error::Result;
use crate::headers::parse_response_headers;
use crate::json_repair::repair;
use crate::message::split_message;
use crate::status::reason_phrase;
use crate::types::{Headers, HttpMethod};

/// One response, parsed from the transport's raw text.
///
/// `body` is trimmed and has already gone through JSON repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponseView {
    pub version: String,
    pub status_code: u16,
    pub headers: Headers,
    pub body: String,
    pub raw_headers: String,
    pub elapsed: Duration,
}

impl RawResponseView {
    /// Parse a raw response produced for a `method` request.
    pub fn parse(raw: &str, method: HttpMethod, elapsed: Duration) -> Result<Self> {
        let message = split_message(raw, method)?;
        let head = parse_response_headers(message.headers)?;
        let body = repair(message.body.trim()).into_owned();

        Ok(Self {
            version: head.version,
            status_code: head.status_code,
            headers: head.headers,
            body,
            raw_headers: message.headers.to_string(),
            elapsed,
        })
    }

    /// Reason phrase for the status code.
    pub fn status(&self) -> Option<&'static str> {
        reason_phrase(self.status_code)
    }

    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.status_code)
    }
}
