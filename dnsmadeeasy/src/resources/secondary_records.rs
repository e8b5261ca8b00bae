//! Records of a secondary domain

use dnsmadeeasy_driver::{ApiResult, RestDriver, Result, UriParams};
use serde::Serialize;

use super::{ids_params, page_params};

/// `/dns/secondary/{domainId}/records`
pub struct SecondaryRecords<'a> {
    driver: &'a RestDriver,
}

impl<'a> SecondaryRecords<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get_all(
        &self,
        domain_id: u64,
        rows: Option<u32>,
        page: Option<u32>,
    ) -> Result<ApiResult> {
        self.driver
            .get(
                &format!("/dns/secondary/{domain_id}/records{{?rows,page}}"),
                &page_params(rows, page),
            )
            .await
    }

    pub async fn get(&self, domain_id: u64, record_id: u64) -> Result<ApiResult> {
        self.driver
            .get(
                &format!("/dns/secondary/{domain_id}/records/{record_id}"),
                &UriParams::new(),
            )
            .await
    }

    pub async fn add<B: Serialize + ?Sized>(
        &self,
        domain_id: u64,
        config: &B,
    ) -> Result<ApiResult> {
        self.driver
            .post(
                &format!("/dns/secondary/{domain_id}/records"),
                &UriParams::new(),
                config,
            )
            .await
    }

    pub async fn delete(&self, domain_id: u64, record_id: u64) -> Result<ApiResult> {
        self.driver
            .delete(
                &format!("/dns/secondary/{domain_id}/records/{record_id}"),
                &UriParams::new(),
            )
            .await
    }

    pub async fn delete_multi(&self, domain_id: u64, record_ids: &[u64]) -> Result<ApiResult> {
        self.driver
            .delete(
                &format!("/dns/secondary/{domain_id}/records{{?ids}}"),
                &ids_params(record_ids)?,
            )
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        domain_id: u64,
        record_id: u64,
        data: &B,
    ) -> Result<ApiResult> {
        self.driver
            .put(
                &format!("/dns/secondary/{domain_id}/records/{record_id}"),
                &UriParams::new(),
                data,
            )
            .await
    }
}
