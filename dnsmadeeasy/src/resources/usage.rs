//! Query usage reports

use dnsmadeeasy_driver::{ApiResult, RestDriver, Result, UriParams};

use super::page_params;

/// `/usageApi/queriesApi`
pub struct Usage<'a> {
    driver: &'a RestDriver,
}

impl<'a> Usage<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get_all(&self, rows: Option<u32>, page: Option<u32>) -> Result<ApiResult> {
        self.driver
            .get("/usageApi/queriesApi{?rows,page}", &page_params(rows, page))
            .await
    }

    pub async fn get_by_month(&self, year: u32, month: u32) -> Result<ApiResult> {
        self.driver
            .get(
                &format!("/usageApi/queriesApi/{year}/{month}"),
                &UriParams::new(),
            )
            .await
    }

    pub async fn get_by_month_for_domain(
        &self,
        year: u32,
        month: u32,
        domain_id: u64,
    ) -> Result<ApiResult> {
        self.driver
            .get(
                &format!("/usageApi/queriesApi/{year}/{month}/managed/{domain_id}"),
                &UriParams::new(),
            )
            .await
    }

    pub async fn get_by_month_for_secondary(
        &self,
        year: u32,
        month: u32,
        secondary_id: u64,
    ) -> Result<ApiResult> {
        self.driver
            .get(
                &format!("/usageApi/queriesApi/{year}/{month}/secondary/{secondary_id}"),
                &UriParams::new(),
            )
            .await
    }
}
