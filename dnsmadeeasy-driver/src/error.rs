use serde::Serialize;
use thiserror::Error;

use crate::result::ResultError;

/// Unified error type for every dispatched call.
///
/// Only failures that prevent a well-formed [`ApiResult`](crate::ApiResult) from being
/// built end up here. API-level failures (HTTP 4xx/5xx with a parseable response) are
/// reported through `ApiResult::success` instead, unless the caller opts in with
/// [`ApiResult::into_result`](crate::ApiResult::into_result).
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum DriverError {
    /// The API key or the secret key is missing at signing time.
    #[error("Authentication configuration error: {0}")]
    AuthConfiguration(String),

    /// The transport failed before a response could be read (DNS, connect, TLS, timeout).
    ///
    /// Never retried.
    #[error("Transport error {code} ({kind}): {message}")]
    Transport {
        /// Failure category.
        kind: TransportErrorKind,
        /// Numeric transport code, see [`TransportErrorKind::code`].
        code: u16,
        /// Message reported by the transport.
        message: String,
    },

    /// The raw response could not be split into header block and body, or its
    /// first line did not look like an HTTP start line.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request payload could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A call argument was rejected before anything was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A failed API result, raised on request.
    #[error(transparent)]
    Api(#[from] ResultError),
}

impl DriverError {
    /// Build a transport error for the given kind.
    pub fn transport(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            code: kind.code(),
            message: message.into(),
        }
    }

    /// Transport code carried by [`DriverError::Transport`], if any.
    pub fn transport_code(&self) -> Option<u16> {
        match self {
            Self::Transport { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Category of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransportErrorKind {
    /// Host resolution or TCP connect failed.
    Connect,
    /// The total timeout elapsed.
    Timeout,
    /// TLS handshake or certificate verification failed.
    Tls,
    /// The request could not be built or sent.
    Request,
    /// The response body could not be read.
    Body,
}

impl TransportErrorKind {
    /// Stable numeric code. Numbers follow libcurl's error numbering.
    pub const fn code(self) -> u16 {
        match self {
            Self::Request => 3,
            Self::Connect => 7,
            Self::Timeout => 28,
            Self::Tls => 35,
            Self::Body => 56,
        }
    }
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Tls => "tls",
            Self::Request => "request",
            Self::Body => "body",
        };
        f.write_str(name)
    }
}

/// Convenience type alias for `Result<T, DriverError>`.
pub type Result<T> = std::result::Result<T, DriverError>;
