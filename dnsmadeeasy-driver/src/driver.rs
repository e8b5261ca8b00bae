//! The request dispatcher.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::Configuration;
use crate::debug::{DebugRenderer, LogRenderer};
use crate::error::{DriverError, Result};
use crate::http_client::ReqwestTransport;
use crate::request::RawRequestView;
use crate::response::RawResponseView;
use crate::result::ApiResult;
use crate::sign::sign;
use crate::transport::{Transport, TransportRequest};
use crate::types::HttpMethod;
use crate::uri_template::{UriParams, expand};
use crate::utils::log_sanitizer::truncate_for_log;

const JSON: &str = "application/json";

/// Signs, sends and normalizes every call of one client.
///
/// Holds no per-call state: concurrent dispatches through a shared reference are
/// independent of each other.
pub struct RestDriver {
    config: Configuration,
    transport: Arc<dyn Transport>,
    renderer: Arc<dyn DebugRenderer>,
}

impl RestDriver {
    /// Driver with the default `reqwest` transport and the log renderer.
    pub fn new(config: Configuration) -> Result<Self> {
        Ok(Self::with_parts(
            config,
            Arc::new(ReqwestTransport::new()?),
            Arc::new(LogRenderer),
        ))
    }

    pub fn with_parts(
        config: Configuration,
        transport: Arc<dyn Transport>,
        renderer: Arc<dyn DebugRenderer>,
    ) -> Self {
        Self {
            config,
            transport,
            renderer,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    pub fn set_renderer(&mut self, renderer: Arc<dyn DebugRenderer>) {
        self.renderer = renderer;
    }

    /// Run one call against `template` expanded with `params`.
    ///
    /// API-level failures (4xx/5xx) come back as an [`ApiResult`] with `success ==
    /// false`. Missing credentials, transport failures, unparsable responses and
    /// unserializable payloads are errors.
    pub async fn dispatch<B>(
        &self,
        template: &str,
        params: &UriParams,
        method: HttpMethod,
        body: Option<&B>,
    ) -> Result<ApiResult>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.base_url(), expand(template, params));
        let auth = sign(&self.config)?;

        let payload = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| DriverError::Serialization(e.to_string()))?;

        let mut headers = vec![
            ("Content-Type".to_string(), JSON.to_string()),
            ("Accept".to_string(), JSON.to_string()),
        ];
        headers.extend(auth.to_pairs());

        log::debug!("[dnsmadeeasy] {method} {url}");
        if let Some(payload) = &payload {
            log::debug!("[dnsmadeeasy] Request Body: {}", truncate_for_log(payload));
        }

        let sent = self
            .transport
            .execute(TransportRequest {
                method,
                url,
                headers,
                body: payload.clone(),
                verify_tls: self.config.verify_tls(),
                timeout: self.config.timeout(),
            })
            .await?;

        let response = RawResponseView::parse(&sent.raw, method, sent.elapsed)?;
        log::debug!(
            "[dnsmadeeasy] Response Status: {} ({} ms)",
            response.status_code,
            response.elapsed.as_millis()
        );

        if self.config.is_debug() {
            match RawRequestView::parse(&sent.request_head, payload) {
                Ok(request) => self.renderer.render(&request, &response),
                Err(e) => log::warn!("[dnsmadeeasy] Cannot render request for debug output: {e}"),
            }
        }

        Ok(ApiResult::from_response(&response))
    }

    pub async fn get(&self, template: &str, params: &UriParams) -> Result<ApiResult> {
        self.dispatch::<Value>(template, params, HttpMethod::Get, None)
            .await
    }

    pub async fn post<B>(&self, template: &str, params: &UriParams, body: &B) -> Result<ApiResult>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(template, params, HttpMethod::Post, Some(body))
            .await
    }

    pub async fn put<B>(&self, template: &str, params: &UriParams, body: &B) -> Result<ApiResult>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(template, params, HttpMethod::Put, Some(body))
            .await
    }

    pub async fn delete(&self, template: &str, params: &UriParams) -> Result<ApiResult> {
        self.dispatch::<Value>(template, params, HttpMethod::Delete, None)
            .await
    }

    /// DELETE carrying a payload, used by the bulk deletes.
    pub async fn delete_with<B>(
        &self,
        template: &str,
        params: &UriParams,
        body: &B,
    ) -> Result<ApiResult>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(template, params, HttpMethod::Delete, Some(body))
            .await
    }
}

impl std::fmt::Debug for RestDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestDriver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
