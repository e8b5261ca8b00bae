//! IP sets used by secondary DNS

use dnsmadeeasy_driver::{ApiResult, RestDriver, Result, UriParams};
use serde::Serialize;

use super::page_params;

/// `/dns/secondary/ipSet`
pub struct IpSets<'a> {
    driver: &'a RestDriver,
}

impl<'a> IpSets<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get_all(&self, rows: Option<u32>, page: Option<u32>) -> Result<ApiResult> {
        self.driver
            .get("/dns/secondary/ipSet{?rows,page}", &page_params(rows, page))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<ApiResult> {
        self.driver
            .get(&format!("/dns/secondary/ipSet/{id}"), &UriParams::new())
            .await
    }

    pub async fn add<B: Serialize + ?Sized>(&self, config: &B) -> Result<ApiResult> {
        self.driver
            .post("/dns/secondary/ipSet", &UriParams::new(), config)
            .await
    }

    /// Bulk delete; ids travel in the body.
    pub async fn delete(&self, ids: &[u64]) -> Result<ApiResult> {
        self.driver
            .delete_with("/dns/secondary/ipSet", &UriParams::new(), ids)
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: u64, config: &B) -> Result<ApiResult> {
        self.driver
            .put(&format!("/dns/secondary/ipSet/{id}"), &UriParams::new(), config)
            .await
    }
}
