//! Record templates

use dnsmadeeasy_driver::{ApiResult, RestDriver, Result, UriParams};
use serde::Serialize;

use super::page_params;

/// `/dns/template`
pub struct Templates<'a> {
    driver: &'a RestDriver,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get_all(&self, rows: Option<u32>, page: Option<u32>) -> Result<ApiResult> {
        self.driver
            .get("/dns/template{?rows,page}", &page_params(rows, page))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<ApiResult> {
        self.driver
            .get(&format!("/dns/template/{id}"), &UriParams::new())
            .await
    }

    pub async fn add<B: Serialize + ?Sized>(&self, config: &B) -> Result<ApiResult> {
        self.driver
            .post("/dns/template", &UriParams::new(), config)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<ApiResult> {
        self.driver
            .delete(&format!("/dns/template/{id}"), &UriParams::new())
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: u64, data: &B) -> Result<ApiResult> {
        self.driver
            .put(&format!("/dns/template/{id}"), &UriParams::new(), data)
            .await
    }
}
