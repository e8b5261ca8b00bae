//! Repair of the provider's unquoted-key JSON.
//!
//! Some error responses arrive as `{error: ["..."]}`. Only that shape is handled; this
//! is not a relaxed JSON parser.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static BAREWORD_KEY: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(\w+):").ok());

/// Quote every `word:` in `text` unless `text` already parses as JSON.
///
/// Single pass; valid JSON is returned untouched.
pub fn repair(text: &str) -> Cow<'_, str> {
    if serde_json::from_str::<serde_json::Value>(text).is_ok() {
        return Cow::Borrowed(text);
    }

    match BAREWORD_KEY.as_ref() {
        Some(re) => re.replace_all(text, "\"${1}\":"),
        None => Cow::Borrowed(text),
    }
}
