//! # dnsmadeeasy-driver
//!
//! Request/response pipeline for the DNS Made Easy v2.0 REST API.
//!
//! Every call goes through the same steps:
//!
//! 1. expand the path template (`/dns/managed{?rows,page}`) with the call's parameters;
//! 2. sign the call with the three `x-dnsme-*` headers (HMAC-SHA1 over a GMT timestamp);
//! 3. send it through a [`Transport`], which returns the raw response text;
//! 4. split the raw text into header block and body, parse the status line and headers,
//!    and repair the provider's unquoted-key JSON;
//! 5. normalize everything into an [`ApiResult`].
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnsmadeeasy_driver::{Configuration, RestDriver, UriParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Configuration::new("api-key", "secret-key", true);
//!     let driver = RestDriver::new(config)?;
//!
//!     let params = UriParams::new().with("rows", Some(10));
//!     let result = driver.get("/dns/managed{?rows,page}", &params).await?;
//!     if result.success {
//!         println!("{:?}", result.body);
//!     } else {
//!         eprintln!("{result}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! API-level failures (HTTP 4xx/5xx) are **not** errors: they come back as an
//! [`ApiResult`] with `success == false` and a non-empty `errors` list. Use
//! [`ApiResult::into_result`] to turn them into a [`ResultError`].
//!
//! [`DriverError`] covers what prevents a result from being built:
//!
//! - [`DriverError::AuthConfiguration`]: API key or secret key missing at call time
//! - [`DriverError::Transport`]: DNS, connect, TLS or timeout failure (never retried)
//! - [`DriverError::MalformedResponse`]: the response could not be parsed
//! - [`DriverError::InvalidArgument`]: a call argument was rejected before sending

mod config;
mod debug;
mod driver;
mod error;
mod headers;
mod http_client;
mod json_repair;
mod message;
mod request;
mod response;
mod result;
mod sign;
mod status;
mod transport;
mod types;
mod uri_template;
mod utils;

pub use config::{Configuration, DEFAULT_TIMEOUT_SECS, PRODUCTION_URL, SANDBOX_URL};
pub use debug::{DebugRenderer, LogRenderer, render_exchange};
pub use driver::RestDriver;
pub use error::{DriverError, Result, TransportErrorKind};
pub use headers::{RequestHead, ResponseHead, parse_request_headers, parse_response_headers};
pub use http_client::ReqwestTransport;
pub use json_repair::repair;
pub use message::{RawMessage, split_message};
pub use request::RawRequestView;
pub use response::RawResponseView;
pub use result::{
    ApiResult, NO_ERROR_MESSAGE, REQUEST_ID_HEADER, REQUEST_LIMIT_HEADER,
    REQUESTS_REMAINING_HEADER, ResultError,
};
pub use sign::{
    API_KEY_HEADER, AuthHeaders, HMAC_HEADER, REQUEST_DATE_HEADER, hmac_sha1_hex, sign, sign_at,
};
pub use status::reason_phrase;
pub use transport::{Transport, TransportRequest, TransportResponse, render_request_head};
pub use types::{Headers, HttpMethod};
pub use uri_template::{UriParams, expand};

pub use utils::log_sanitizer;
