//! Human-readable rendering of a request/response pair.

use std::fmt::Write as _;

use crate::request::RawRequestView;
use crate::response::RawResponseView;
use crate::types::Headers;
use crate::utils::log_sanitizer::{is_credential_header, mask_secret};

/// Consumer of every exchange made while debug mode is on.
///
/// Renderers only observe; they cannot change the call's outcome.
pub trait DebugRenderer: Send + Sync {
    fn render(&self, request: &RawRequestView, response: &RawResponseView);
}

/// Writes [`render_exchange`] output through `log::info!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRenderer;

impl DebugRenderer for LogRenderer {
    fn render(&self, request: &RawRequestView, response: &RawResponseView) {
        log::info!("{}", render_exchange(request, response));
    }
}

/// Plain-text rendering of one exchange. Credential headers are masked.
pub fn render_exchange(request: &RawRequestView, response: &RawResponseView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "==== Request ====");
    let _ = writeln!(out, "{} {} HTTP/{}", request.method, request.url, request.version);
    write_headers(&mut out, &request.headers);
    if let Some(body) = &request.body {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", pretty(body));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "==== Response ====");
    let _ = writeln!(
        out,
        "HTTP/{} {} {}",
        response.version,
        response.status_code,
        response.status().unwrap_or("Unknown")
    );
    write_headers(&mut out, &response.headers);
    if !response.body.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", pretty(&response.body));
    }
    let _ = write!(out, "\nElapsed: {} ms", response.elapsed.as_millis());

    out
}

fn write_headers(out: &mut String, headers: &Headers) {
    for (name, value) in headers.iter() {
        if is_credential_header(name) {
            let _ = writeln!(out, "{name}: {}", mask_secret(value));
        } else {
            let _ = writeln!(out, "{name}: {value}");
        }
    }
}

/// Pretty-printed JSON, or the text itself when it is not JSON.
fn pretty(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| text.to_string())
}
