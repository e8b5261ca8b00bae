//! Splits a raw HTTP response into its header block and body.

use crate::error::{DriverError, Result};
use crate::types::HttpMethod;
use crate::utils::log_sanitizer::truncate_for_log;

/// Interim response prepended to bulk-insert responses.
const CONTINUE_PREAMBLE: &str = "HTTP/1.1 100 Continue";
const HEADER_BARRIER: &str = "\r\n\r\n";

/// Header block and raw body of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage<'a> {
    pub headers: &'a str,
    pub body: &'a str,
}

/// Split `message` at the first blank line.
///
/// A leading `HTTP/1.1 100 Continue` line and leading whitespace are dropped. When no
/// blank line exists, responses to methods that may omit a body (PUT, DELETE) are
/// treated as headers only; anything else is malformed. The body is returned as-is.
pub fn split_message(message: &str, method: HttpMethod) -> Result<RawMessage<'_>> {
    let message = strip_continue(message).trim_start();

    let (headers, body) = match message.find(HEADER_BARRIER) {
        Some(border) => (
            &message[..border],
            &message[border + HEADER_BARRIER.len()..],
        ),
        None if method.omits_body() => (message.trim_end(), ""),
        None => {
            log::error!(
                "[dnsmadeeasy] No header/body separator in {method} response: {}",
                truncate_for_log(message)
            );
            return Err(DriverError::MalformedResponse(
                "Got an invalid response from the server".to_string(),
            ));
        }
    };

    Ok(RawMessage { headers, body })
}

/// Remove the `100 Continue` status line and the single line-break character after it.
fn strip_continue(message: &str) -> &str {
    message
        .strip_prefix(CONTINUE_PREAMBLE)
        .and_then(|rest| rest.strip_prefix(['\r', '\n']))
        .unwrap_or(message)
}
