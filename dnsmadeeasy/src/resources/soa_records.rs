//! Custom SOA records

use dnsmadeeasy_driver::{ApiResult, RestDriver, Result, UriParams};
use serde::Serialize;

use super::{item_id, listed_items, page_params};

/// `/dns/soa`
pub struct SoaRecords<'a> {
    driver: &'a RestDriver,
}

impl<'a> SoaRecords<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get_all(&self, rows: Option<u32>, page: Option<u32>) -> Result<ApiResult> {
        self.driver
            .get("/dns/soa{?rows,page}", &page_params(rows, page))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<ApiResult> {
        self.driver
            .get(&format!("/dns/soa/{id}"), &UriParams::new())
            .await
    }

    pub async fn add<B: Serialize + ?Sized>(&self, config: &B) -> Result<ApiResult> {
        self.driver.post("/dns/soa", &UriParams::new(), config).await
    }

    pub async fn delete(&self, id: u64) -> Result<ApiResult> {
        self.driver
            .delete(&format!("/dns/soa/{id}"), &UriParams::new())
            .await
    }

    /// Delete every SOA record, one call per record (the API has no bulk delete here).
    ///
    /// Returns how many deletes succeeded. A transport failure stops the loop and is
    /// returned as is; deletes issued before it are not rolled back, and their count
    /// is only logged.
    pub async fn delete_all(&self) -> Result<usize> {
        let items = listed_items(self.get_all(None, None).await?)?;
        let mut deleted = 0;
        for id in items.iter().filter_map(item_id) {
            let result = match self.delete(id).await {
                Ok(result) => result,
                Err(e) => {
                    log::error!(
                        "[dnsmadeeasy] Stopped deleting SOA records after {deleted} deletes: {e}"
                    );
                    return Err(e);
                }
            };
            if result.success {
                deleted += 1;
            } else {
                log::warn!("[dnsmadeeasy] Failed to delete SOA record {id}: {result}");
            }
        }
        Ok(deleted)
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: u64, data: &B) -> Result<ApiResult> {
        self.driver
            .put(&format!("/dns/soa/{id}"), &UriParams::new(), data)
            .await
    }
}
