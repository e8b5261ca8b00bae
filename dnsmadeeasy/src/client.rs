//! Client facade: owns the driver and hands out resource accessors.

use std::sync::Arc;
use std::time::Duration;

use dnsmadeeasy_driver::{
    Configuration, DebugRenderer, LogRenderer, ReqwestTransport, RestDriver, Result, Transport,
};

use crate::resources::{
    Domains, Failover, Folders, IpSets, Records, Secondary, SecondaryRecords, SoaRecords,
    TemplateRecords, Templates, TransferAcl, Usage, VanityDns,
};

/// DNS Made Easy API client.
///
/// # Construction
///
/// ```rust,no_run
/// use dnsmadeeasy::Client;
///
/// # fn main() -> dnsmadeeasy::Result<()> {
/// let client = Client::builder("your-api-key", "your-secret-key")
///     .sandbox(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    driver: RestDriver,
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    config: Configuration,
    transport: Option<Arc<dyn Transport>>,
    renderer: Option<Arc<dyn DebugRenderer>>,
}

impl ClientBuilder {
    fn new(config: Configuration) -> Self {
        Self {
            config,
            transport: None,
            renderer: None,
        }
    }

    /// Target the sandbox instead of production (default: production).
    #[must_use]
    pub fn sandbox(mut self, value: bool) -> Self {
        self.config.set_sandbox(value);
        self
    }

    /// Render every exchange through the debug renderer (default: off).
    #[must_use]
    pub fn debug(mut self, value: bool) -> Self {
        self.config.set_debug(value);
        self
    }

    /// Total timeout per call (default: 300s).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.set_timeout(timeout);
        self
    }

    /// Replace the default `reqwest` transport.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the default log renderer.
    #[must_use]
    pub fn debug_renderer(mut self, renderer: Arc<dyn DebugRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Build the [`Client`]. Fails only if the default HTTP client cannot be created.
    pub fn build(self) -> Result<Client> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };
        let renderer: Arc<dyn DebugRenderer> = match self.renderer {
            Some(renderer) => renderer,
            None => Arc::new(LogRenderer),
        };
        Ok(Client {
            driver: RestDriver::with_parts(self.config, transport, renderer),
        })
    }
}

impl Client {
    /// Client with the default transport and renderer.
    ///
    /// Credentials are checked on each call, not here.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        use_sandbox: bool,
    ) -> Result<Self> {
        Self::builder(api_key, secret_key).sandbox(use_sandbox).build()
    }

    /// Client configured from `DNSME_API_KEY`, `DNSME_SECRET_KEY`, `DNSME_SANDBOX` and
    /// `DNSME_DEBUG`.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::new(Configuration::from_env()).build()
    }

    pub fn builder(api_key: impl Into<String>, secret_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(Configuration::new(api_key, secret_key, false))
    }

    /// Switch between sandbox and production for subsequent calls.
    pub fn use_sandbox(&mut self, value: bool) {
        self.driver.config_mut().set_sandbox(value);
    }

    /// Switch debug rendering on or off for subsequent calls.
    pub fn debug(&mut self, value: bool) {
        self.driver.config_mut().set_debug(value);
    }

    pub fn config(&self) -> &Configuration {
        self.driver.config()
    }

    /// The underlying driver, for paths no resource covers.
    pub fn driver(&self) -> &RestDriver {
        &self.driver
    }

    pub fn domains(&self) -> Domains<'_> {
        Domains::new(&self.driver)
    }

    pub fn records(&self) -> Records<'_> {
        Records::new(&self.driver)
    }

    pub fn soa_records(&self) -> SoaRecords<'_> {
        SoaRecords::new(&self.driver)
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates::new(&self.driver)
    }

    pub fn template_records(&self) -> TemplateRecords<'_> {
        TemplateRecords::new(&self.driver)
    }

    pub fn transfer_acl(&self) -> TransferAcl<'_> {
        TransferAcl::new(&self.driver)
    }

    pub fn folders(&self) -> Folders<'_> {
        Folders::new(&self.driver)
    }

    pub fn usage(&self) -> Usage<'_> {
        Usage::new(&self.driver)
    }

    pub fn failover(&self) -> Failover<'_> {
        Failover::new(&self.driver)
    }

    pub fn secondary(&self) -> Secondary<'_> {
        Secondary::new(&self.driver)
    }

    pub fn secondary_records(&self) -> SecondaryRecords<'_> {
        SecondaryRecords::new(&self.driver)
    }

    pub fn vanity_dns(&self) -> VanityDns<'_> {
        VanityDns::new(&self.driver)
    }

    pub fn ip_sets(&self) -> IpSets<'_> {
        IpSets::new(&self.driver)
    }
}
