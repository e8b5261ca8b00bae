//! Log sanitization utilities
//!
//! Keeps credentials and large payloads out of debug/error logs.

use crate::sign::{API_KEY_HEADER, HMAC_HEADER};

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible.
const VISIBLE_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` bytes with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential, keeping only a short prefix.
///
/// `1c1a3c91-4770-...` becomes `1c1a****`; values too short to keep a prefix are
/// fully masked.
pub fn mask_secret(s: &str) -> String {
    if s.chars().count() <= VISIBLE_PREFIX * 2 {
        return "****".to_string();
    }
    let prefix: String = s.chars().take(VISIBLE_PREFIX).collect();
    format!("{prefix}****")
}

/// Whether a header carries a credential that must be masked before display.
pub fn is_credential_header(name: &str) -> bool {
    name.eq_ignore_ascii_case(API_KEY_HEADER) || name.eq_ignore_ascii_case(HMAC_HEADER)
}
