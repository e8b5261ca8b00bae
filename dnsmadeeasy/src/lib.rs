//! # dnsmadeeasy
//!
//! Client for the DNS Made Easy v2.0 REST API.
//!
//! [`Client`] owns the configuration and the request driver; resources are reached
//! through typed accessors that borrow it:
//!
//! | Accessor | API path |
//! |----------|----------|
//! | [`Client::domains`] | `/dns/managed` |
//! | [`Client::records`] | `/dns/managed/{id}/records` |
//! | [`Client::soa_records`] | `/dns/soa` |
//! | [`Client::templates`] | `/dns/template` |
//! | [`Client::template_records`] | `/dns/template/{id}/records` |
//! | [`Client::transfer_acl`] | `/dns/transferAcl` |
//! | [`Client::folders`] | `/security/folder` |
//! | [`Client::usage`] | `/usageApi/queriesApi` |
//! | [`Client::failover`] | `/monitor/{id}` |
//! | [`Client::secondary`] | `/dns/secondary` |
//! | [`Client::secondary_records`] | `/dns/secondary/{id}/records` |
//! | [`Client::vanity_dns`] | `/dns/vanity` |
//! | [`Client::ip_sets`] | `/dns/secondary/ipSet` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnsmadeeasy::Client;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key", "your-secret-key", true)?;
//!
//!     let created = client.domains().add(&["example.com"], &json!(null)).await?;
//!     if !created.success {
//!         eprintln!("{created}");
//!     }
//!
//!     let domains = client.domains().get_all(Some(50), None).await?;
//!     println!(
//!         "{:?} requests left of {:?}",
//!         domains.requests_remaining, domains.request_limit
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every resource method returns [`Result<ApiResult>`](ApiResult). An API-level
//! failure (HTTP 4xx/5xx) is an `Ok` result with `success == false`; call
//! [`ApiResult::into_result`] to raise it. [`DriverError`] is reserved for missing
//! credentials, transport failures and unparsable responses.

mod client;
pub mod resources;

pub use client::{Client, ClientBuilder};

pub use dnsmadeeasy_driver::{
    ApiResult, Configuration, DebugRenderer, DriverError, HttpMethod, LogRenderer,
    PRODUCTION_URL, RawRequestView, RawResponseView, ReqwestTransport, RestDriver, Result,
    ResultError, SANDBOX_URL, Transport, TransportErrorKind, TransportRequest,
    TransportResponse, UriParams, render_exchange,
};
