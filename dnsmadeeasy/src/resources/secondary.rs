//! Secondary domains

use dnsmadeeasy_driver::{ApiResult, RestDriver, Result, UriParams};
use serde_json::{Value, json};

use super::{merge_config, page_params};

/// `/dns/secondary`
pub struct Secondary<'a> {
    driver: &'a RestDriver,
}

impl<'a> Secondary<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get_all(&self, rows: Option<u32>, page: Option<u32>) -> Result<ApiResult> {
        self.driver
            .get("/dns/secondary{?rows,page}", &page_params(rows, page))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<ApiResult> {
        self.driver
            .get(&format!("/dns/secondary/{id}"), &UriParams::new())
            .await
    }

    /// Create one or more secondary domains; `config` usually carries `ipSetId`.
    pub async fn add(&self, names: &[&str], config: &Value) -> Result<ApiResult> {
        let data = merge_config("names", json!(names), config)?;
        self.driver
            .post("/dns/secondary/", &UriParams::new(), &data)
            .await
    }

    pub async fn delete(&self, ids: &[u64]) -> Result<ApiResult> {
        self.driver
            .delete_with("/dns/secondary/", &UriParams::new(), ids)
            .await
    }

    pub async fn update(&self, ids: &[u64], config: &Value) -> Result<ApiResult> {
        let data = merge_config("ids", json!(ids), config)?;
        self.driver
            .put("/dns/secondary", &UriParams::new(), &data)
            .await
    }
}
