//! DNS Made Easy HMAC-SHA1 request authentication

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::config::Configuration;
use crate::error::{DriverError, Result};

type HmacSha1 = Hmac<Sha1>;

pub const API_KEY_HEADER: &str = "x-dnsme-apiKey";
pub const REQUEST_DATE_HEADER: &str = "x-dnsme-requestDate";
pub const HMAC_HEADER: &str = "x-dnsme-hmac";

/// `Wed, 22 May 2013 06:37:08 GMT`
const REQUEST_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// The three authentication headers attached to every call.
///
/// Recomputed for each dispatch; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub api_key: String,
    pub request_date: String,
    pub hmac: String,
}

impl AuthHeaders {
    /// Header name/value pairs in wire order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            (API_KEY_HEADER.to_string(), self.api_key.clone()),
            (REQUEST_DATE_HEADER.to_string(), self.request_date.clone()),
            (HMAC_HEADER.to_string(), self.hmac.clone()),
        ]
    }
}

/// Sign a request made now.
pub fn sign(config: &Configuration) -> Result<AuthHeaders> {
    sign_at(config.api_key(), config.secret_key(), Utc::now())
}

/// Sign a request made at `now`.
///
/// The HMAC is computed over exactly the string sent in the date header.
pub fn sign_at(api_key: &str, secret_key: &str, now: DateTime<Utc>) -> Result<AuthHeaders> {
    if api_key.is_empty() || secret_key.is_empty() {
        return Err(DriverError::AuthConfiguration(
            "An API key and a secret key are required to make calls to the API".to_string(),
        ));
    }

    let request_date = now.format(REQUEST_DATE_FORMAT).to_string();
    let hmac = hmac_sha1_hex(secret_key.as_bytes(), request_date.as_bytes())?;

    Ok(AuthHeaders {
        api_key: api_key.to_string(),
        request_date,
        hmac,
    })
}

/// Lowercase hex HMAC-SHA1 of `data` keyed by `key`.
pub fn hmac_sha1_hex(key: &[u8], data: &[u8]) -> Result<String> {
    let mut mac = HmacSha1::new_from_slice(key)
        .map_err(|e| DriverError::AuthConfiguration(format!("invalid secret key: {e}")))?;
    mac.update(data);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
