//! Records of a template

use dnsmadeeasy_driver::{ApiResult, RestDriver, Result, UriParams};
use serde::Serialize;

use super::ids_params;

/// `/dns/template/{templateId}/records`
pub struct TemplateRecords<'a> {
    driver: &'a RestDriver,
}

impl<'a> TemplateRecords<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get_by_type(
        &self,
        template_id: u64,
        record_type: &str,
        rows: Option<u32>,
        page: Option<u32>,
    ) -> Result<ApiResult> {
        let params = UriParams::new()
            .with("type", Some(record_type))
            .with("rows", rows)
            .with("page", page);
        self.driver
            .get(
                &format!("/dns/template/{template_id}/records{{?type,rows,page}}"),
                &params,
            )
            .await
    }

    pub async fn add<B: Serialize + ?Sized>(
        &self,
        template_id: u64,
        config: &B,
    ) -> Result<ApiResult> {
        self.driver
            .post(
                &format!("/dns/template/{template_id}/records"),
                &UriParams::new(),
                config,
            )
            .await
    }

    pub async fn delete(&self, template_id: u64, record_id: u64) -> Result<ApiResult> {
        self.driver
            .delete(
                &format!("/dns/template/{template_id}/records/{record_id}"),
                &UriParams::new(),
            )
            .await
    }

    pub async fn delete_multi(&self, template_id: u64, record_ids: &[u64]) -> Result<ApiResult> {
        self.driver
            .delete(
                &format!("/dns/template/{template_id}/records{{?ids}}"),
                &ids_params(record_ids)?,
            )
            .await
    }

    /// Replace every record of the template with `records`.
    pub async fn replace_all<B: Serialize + ?Sized>(
        &self,
        template_id: u64,
        records: &B,
    ) -> Result<ApiResult> {
        self.driver
            .put(
                &format!("/dns/template/{template_id}/records"),
                &UriParams::new(),
                records,
            )
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        template_id: u64,
        record_id: u64,
        data: &B,
    ) -> Result<ApiResult> {
        self.driver
            .put(
                &format!("/dns/template/{template_id}/records/{record_id}"),
                &UriParams::new(),
                data,
            )
            .await
    }
}
