//! Parsing of request and response header blocks.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DriverError, Result};
use crate::types::Headers;

static REQUEST_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(GET|POST|PUT|DELETE|HEAD|TRACE|OPTIONS|PATCH)\s+(\S+)\s+HTTP/(\S+)").ok()
});

static STATUS_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^HTTP/(\S+)\s+(\d{3})\b").ok());

/// Parsed request header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    pub method: String,
    pub url: String,
    pub version: String,
    pub headers: Headers,
}

/// Parsed response header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub version: String,
    pub status_code: u16,
    pub headers: Headers,
}

/// Parse `METHOD url HTTP/version` followed by header lines.
pub fn parse_request_headers(text: &str) -> Result<RequestHead> {
    let (first, rest) = start_line(text)?;

    let caps = REQUEST_LINE
        .as_ref()
        .and_then(|re| re.captures(first))
        .ok_or_else(|| malformed("request line", first))?;

    Ok(RequestHead {
        method: caps[1].to_string(),
        url: caps[2].to_string(),
        version: caps[3].to_string(),
        headers: parse_header_lines(rest),
    })
}

/// Parse `HTTP/version code [reason]` followed by header lines.
pub fn parse_response_headers(text: &str) -> Result<ResponseHead> {
    let (first, rest) = start_line(text)?;

    let caps = STATUS_LINE
        .as_ref()
        .and_then(|re| re.captures(first))
        .ok_or_else(|| malformed("status line", first))?;
    let status_code = caps[2]
        .parse::<u16>()
        .map_err(|_| malformed("status code", first))?;

    Ok(ResponseHead {
        version: caps[1].to_string(),
        status_code,
        headers: parse_header_lines(rest),
    })
}

/// First non-empty line and the remaining lines.
fn start_line(text: &str) -> Result<(&str, std::str::Lines<'_>)> {
    let mut lines = text.lines();
    loop {
        let Some(line) = lines.next() else {
            return Err(DriverError::MalformedResponse(
                "empty header block".to_string(),
            ));
        };
        let line = line.trim();
        if !line.is_empty() {
            return Ok((line, lines));
        }
    }
}

fn parse_header_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Headers {
    let mut headers = Headers::new();
    for line in lines.map(str::trim).filter(|l| !l.is_empty()) {
        match line.split_once(':') {
            Some((name, value)) => headers.insert(name.trim(), value.trim()),
            None => log::debug!("[dnsmadeeasy] Skipping header line without colon: {line}"),
        }
    }
    headers
}

fn malformed(what: &str, line: &str) -> DriverError {
    DriverError::MalformedResponse(format!("unexpected {what}: {line}"))
}
