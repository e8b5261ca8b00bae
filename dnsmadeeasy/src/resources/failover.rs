//! Failover and system monitoring

use dnsmadeeasy_driver::{ApiResult, RestDriver, Result, UriParams};
use serde::Serialize;

/// `/monitor/{recordId}`
pub struct Failover<'a> {
    driver: &'a RestDriver,
}

impl<'a> Failover<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get(&self, record_id: u64) -> Result<ApiResult> {
        self.driver
            .get(&format!("/monitor/{record_id}"), &UriParams::new())
            .await
    }

    pub async fn delete(&self, record_id: u64) -> Result<ApiResult> {
        self.driver
            .delete(&format!("/monitor/{record_id}"), &UriParams::new())
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        record_id: u64,
        data: &B,
    ) -> Result<ApiResult> {
        self.driver
            .put(&format!("/monitor/{record_id}"), &UriParams::new(), data)
            .await
    }
}
