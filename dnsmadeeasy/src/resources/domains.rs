//! Managed domains

use dnsmadeeasy_driver::{ApiResult, RestDriver, Result, UriParams};
use serde_json::{Value, json};

use super::{item_id, listed_items, merge_config, page_params};

/// `/dns/managed`
pub struct Domains<'a> {
    driver: &'a RestDriver,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get_all(&self, rows: Option<u32>, page: Option<u32>) -> Result<ApiResult> {
        self.driver
            .get("/dns/managed{?rows,page}", &page_params(rows, page))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<ApiResult> {
        self.driver
            .get(&format!("/dns/managed/{id}"), &UriParams::new())
            .await
    }

    /// Create one or more domains; `config` (an object or `null`) is merged into the
    /// payload.
    pub async fn add(&self, names: &[&str], config: &Value) -> Result<ApiResult> {
        let data = merge_config("names", json!(names), config)?;
        self.driver
            .post("/dns/managed/", &UriParams::new(), &data)
            .await
    }

    pub async fn delete(&self, ids: &[u64]) -> Result<ApiResult> {
        self.driver
            .delete_with("/dns/managed/", &UriParams::new(), ids)
            .await
    }

    /// Delete every domain of the account in one bulk call.
    ///
    /// `None` when the account holds no domains.
    pub async fn delete_all(&self) -> Result<Option<ApiResult>> {
        let items = listed_items(self.get_all(None, None).await?)?;
        let ids: Vec<u64> = items.iter().filter_map(item_id).collect();
        if ids.is_empty() {
            log::debug!("[dnsmadeeasy] No domains to delete");
            return Ok(None);
        }
        self.delete(&ids).await.map(Some)
    }

    /// Apply `config` to one or more domains.
    pub async fn update(&self, ids: &[u64], config: &Value) -> Result<ApiResult> {
        let data = merge_config("ids", json!(ids), config)?;
        self.driver
            .put("/dns/managed", &UriParams::new(), &data)
            .await
    }

    pub async fn get_record_by_name(
        &self,
        id: u64,
        record_name: &str,
        record_type: &str,
    ) -> Result<ApiResult> {
        let params = UriParams::new()
            .with("recordName", Some(record_name))
            .with("type", Some(record_type));
        self.driver
            .get(&format!("/dns/managed/{id}/records{{?recordName,type}}"), &params)
            .await
    }
}
