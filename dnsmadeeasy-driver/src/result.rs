//! The uniform outcome of every dispatched call.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::response::RawResponseView;

pub const REQUEST_ID_HEADER: &str = "x-dnsme-requestId";
pub const REQUESTS_REMAINING_HEADER: &str = "x-dnsme-requestsRemaining";
pub const REQUEST_LIMIT_HEADER: &str = "x-dnsme-requestLimit";

/// Used when a failed response carries no error list.
pub const NO_ERROR_MESSAGE: &str = "An error occurred, however, no error message was given. Use the response body, HTTP status code and URL to help troubleshoot the issue.";

/// Success flag, rate-limit metadata and decoded body of one call.
///
/// `body` is only set on success and `errors` only on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResult {
    pub success: bool,
    pub status_code: u16,
    pub errors: Vec<String>,
    pub request_id: Option<String>,
    pub requests_remaining: Option<u32>,
    pub request_limit: Option<u32>,
    /// Decoded JSON document; `None` on failure or when the body did not decode.
    pub body: Option<Value>,
}

impl ApiResult {
    /// Normalize a parsed response.
    pub fn from_response(response: &RawResponseView) -> Self {
        let decoded = serde_json::from_str::<Value>(&response.body).ok();
        if decoded.is_none() && !response.body.is_empty() {
            log::debug!(
                "[dnsmadeeasy] Response body is not JSON (HTTP {})",
                response.status_code
            );
        }

        let (success, errors, body) = if response.is_error() {
            let mut errors = decoded.as_ref().map(extract_errors).unwrap_or_default();
            if errors.is_empty() {
                errors.push(NO_ERROR_MESSAGE.to_string());
            }
            (false, errors, None)
        } else {
            (true, Vec::new(), decoded)
        };

        let headers = &response.headers;
        Self {
            success,
            status_code: response.status_code,
            errors,
            request_id: headers.get(REQUEST_ID_HEADER).map(str::to_string),
            requests_remaining: parse_count(
                headers.get(REQUESTS_REMAINING_HEADER),
                REQUESTS_REMAINING_HEADER,
            ),
            request_limit: parse_count(headers.get(REQUEST_LIMIT_HEADER), REQUEST_LIMIT_HEADER),
            body,
        }
    }

    /// Turn a failed result into an error; successful results pass through.
    pub fn into_result(self) -> Result<Self, ResultError> {
        if self.success {
            Ok(self)
        } else {
            Err(ResultError { result: self })
        }
    }
}

impl fmt::Display for ApiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "HTTP {}: OK", self.status_code)
        } else {
            write!(f, "HTTP {}: {}", self.status_code, self.errors.join("; "))
        }
    }
}

/// A failed [`ApiResult`] raised as an error.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{result}")]
pub struct ResultError {
    result: ApiResult,
}

impl ResultError {
    pub fn result(&self) -> &ApiResult {
        &self.result
    }

    pub fn into_inner(self) -> ApiResult {
        self.result
    }

    pub fn status_code(&self) -> u16 {
        self.result.status_code
    }
}

/// Pull the provider's `error` field: a list of messages or a single message.
fn extract_errors(document: &Value) -> Vec<String> {
    match document.get("error") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn parse_count(value: Option<&str>, header: &str) -> Option<u32> {
    let value = value?;
    match value.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            log::warn!("[dnsmadeeasy] Non-numeric {header} header: {value}");
            None
        }
    }
}
