//! Default transport backed by `reqwest`.
//!
//! reqwest hands back a parsed response; the raw message (status line, header lines,
//! blank line, body) is rebuilt from it so that every transport feeds the same parser.

use std::error::Error as _;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, Version};

use crate::error::{DriverError, Result, TransportErrorKind};
use crate::transport::{
    Transport, TransportRequest, TransportResponse, render_request_head, request_host,
    request_target,
};
use crate::types::HttpMethod;
use crate::utils::log_sanitizer::truncate_for_log;

const JSON: &str = "application/json";

/// `reqwest` transport with one certificate-verifying client and one that skips
/// verification, used for the sandbox host only.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    verifying: Client,
    insecure: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Ok(Self {
            verifying: build_client(true)?,
            insecure: build_client(false)?,
        })
    }

    fn client(&self, verify_tls: bool) -> &Client {
        if verify_tls {
            &self.verifying
        } else {
            &self.insecure
        }
    }
}

/// 创建 HTTP Client（无连接超时，总超时按请求设置）
fn build_client(verify_tls: bool) -> Result<Client> {
    let mut defaults = HeaderMap::new();
    defaults.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
    defaults.insert(ACCEPT, HeaderValue::from_static(JSON));

    let builder = Client::builder().default_headers(defaults);
    #[cfg(any(feature = "native-tls", feature = "rustls"))]
    let builder = builder.danger_accept_invalid_certs(!verify_tls);
    #[cfg(not(any(feature = "native-tls", feature = "rustls")))]
    let _ = verify_tls;

    builder.build().map_err(|e| {
        DriverError::transport(
            TransportErrorKind::Request,
            format!("Failed to create HTTP client: {e}"),
        )
    })
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        let client = self.client(request.verify_tls);

        let mut builder = client
            .request(to_reqwest_method(request.method), &request.url)
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let built = builder
            .build()
            .map_err(|e| DriverError::transport(TransportErrorKind::Request, e.to_string()))?;
        let request_head = head_of(&built, request.method, &request.url);

        let started = Instant::now();
        let response = client.execute(built).await.map_err(|e| {
            let kind = classify(&e);
            log::error!("[dnsmadeeasy] {} {} failed: {e}", request.method, request.url);
            DriverError::transport(kind, error_chain(&e))
        })?;

        let status_line = status_line(&response);
        let header_lines = header_lines(&response);
        let body = response.text().await.map_err(|e| {
            let kind = if e.is_timeout() {
                TransportErrorKind::Timeout
            } else {
                TransportErrorKind::Body
            };
            DriverError::transport(kind, format!("Failed to read response body: {e}"))
        })?;
        let elapsed = started.elapsed();

        log::debug!(
            "[dnsmadeeasy] Response Body: {}",
            truncate_for_log(&body)
        );

        Ok(TransportResponse {
            raw: format!("{status_line}\r\n{header_lines}\r\n{body}"),
            request_head,
            elapsed,
        })
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

/// Request line plus the headers that go out, including the client defaults and Host.
fn head_of(built: &reqwest::Request, method: HttpMethod, url: &str) -> String {
    let mut headers = vec![("Host".to_string(), request_host(url).to_string())];
    for (name, value) in built.headers() {
        headers.push((
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        ));
    }
    for (name, value) in [(CONTENT_TYPE, JSON), (ACCEPT, JSON)] {
        if !built.headers().contains_key(&name) {
            headers.push((name.as_str().to_string(), value.to_string()));
        }
    }
    render_request_head(
        method,
        request_target(url),
        version_str(built.version()),
        &headers,
    )
}

fn status_line(response: &Response) -> String {
    let status = response.status();
    let reason = status.canonical_reason().unwrap_or("");
    format!(
        "HTTP/{} {} {reason}",
        version_str(response.version()),
        status.as_u16()
    )
}

/// Each header as `name: value\r\n`.
fn header_lines(response: &Response) -> String {
    let mut lines = String::new();
    for (name, value) in response.headers() {
        lines.push_str(name.as_str());
        lines.push_str(": ");
        lines.push_str(&String::from_utf8_lossy(value.as_bytes()));
        lines.push_str("\r\n");
    }
    lines
}

fn classify(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if mentions_tls(error) {
        TransportErrorKind::Tls
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else {
        TransportErrorKind::Request
    }
}

const TLS_MARKERS: [&str; 5] = ["certificate", "tls", "ssl", "handshake", "corrupt message"];

/// reqwest does not expose TLS failures as a category; look through the source chain.
fn mentions_tls(error: &dyn std::error::Error) -> bool {
    let mut source = error.source();
    while let Some(inner) = source {
        let text = inner.to_string().to_ascii_lowercase();
        if TLS_MARKERS.iter().any(|marker| text.contains(marker)) {
            return true;
        }
        source = inner.source();
    }
    false
}

/// The error and its sources joined with `: `.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
