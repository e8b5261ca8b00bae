//! Driver configuration: credentials, target environment and debug switch.

use std::env;
use std::time::Duration;

/// Production API base URL.
pub const PRODUCTION_URL: &str = "https://api.dnsmadeeasy.com/V2.0";
/// Sandbox API base URL.
pub const SANDBOX_URL: &str = "https://api.sandbox.dnsmadeeasy.com/V2.0";

/// Total request timeout (seconds). No separate connect timeout is applied.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Credentials and switches shared by every call of one client.
///
/// Credentials are not validated here: a configuration without keys can be built and
/// inspected, but signing (and therefore every dispatch) fails with
/// [`DriverError::AuthConfiguration`](crate::DriverError::AuthConfiguration).
#[derive(Clone)]
pub struct Configuration {
    api_key: String,
    secret_key: String,
    use_sandbox: bool,
    debug: bool,
    timeout: Duration,
}

impl Configuration {
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        use_sandbox: bool,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            use_sandbox,
            debug: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Build a configuration from `DNSME_API_KEY`, `DNSME_SECRET_KEY`,
    /// `DNSME_SANDBOX` and `DNSME_DEBUG`.
    ///
    /// Missing keys become empty strings.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            env::var("DNSME_API_KEY").unwrap_or_default(),
            env::var("DNSME_SECRET_KEY").unwrap_or_default(),
            env_flag("DNSME_SANDBOX"),
        );
        config.debug = env_flag("DNSME_DEBUG");
        config
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn is_sandbox(&self) -> bool {
        self.use_sandbox
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_sandbox(&mut self, value: bool) {
        self.use_sandbox = value;
    }

    pub fn set_debug(&mut self, value: bool) {
        self.debug = value;
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Base URL for the selected environment.
    pub fn base_url(&self) -> &'static str {
        if self.use_sandbox {
            SANDBOX_URL
        } else {
            PRODUCTION_URL
        }
    }

    /// Whether the server certificate must be verified.
    ///
    /// The sandbox host serves a certificate that does not validate, so verification is
    /// switched off for the sandbox only. This weakens transport security for sandbox
    /// traffic; production traffic is always verified.
    pub fn verify_tls(&self) -> bool {
        !self.use_sandbox
    }
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("use_sandbox", &self.use_sandbox)
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
