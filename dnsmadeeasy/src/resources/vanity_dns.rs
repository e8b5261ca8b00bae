//! Vanity name server configurations

use dnsmadeeasy_driver::{ApiResult, RestDriver, Result, UriParams};
use serde::Serialize;
use serde_json::Value;

use super::{item_id, listed_items, page_params};

/// `/dns/vanity`
pub struct VanityDns<'a> {
    driver: &'a RestDriver,
}

impl<'a> VanityDns<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get_all(&self, rows: Option<u32>, page: Option<u32>) -> Result<ApiResult> {
        self.driver
            .get("/dns/vanity{?rows,page}", &page_params(rows, page))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<ApiResult> {
        self.driver
            .get(&format!("/dns/vanity/{id}"), &UriParams::new())
            .await
    }

    pub async fn add<B: Serialize + ?Sized>(&self, config: &B) -> Result<ApiResult> {
        self.driver
            .post("/dns/vanity", &UriParams::new(), config)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<ApiResult> {
        self.driver
            .delete(&format!("/dns/vanity/{id}"), &UriParams::new())
            .await
    }

    /// Delete every account-owned configuration. Public (system) configurations are
    /// skipped.
    ///
    /// Returns how many deletes succeeded. A transport failure stops the loop and is
    /// returned as is; deletes issued before it are not rolled back, and their count
    /// is only logged.
    pub async fn delete_all(&self) -> Result<usize> {
        let items = listed_items(self.get_all(None, None).await?)?;
        let mut deleted = 0;
        for item in items.iter().filter(|item| !is_public(item)) {
            let Some(id) = item_id(item) else { continue };
            let result = match self.delete(id).await {
                Ok(result) => result,
                Err(e) => {
                    log::error!(
                        "[dnsmadeeasy] Stopped deleting vanity configs after {deleted} deletes: {e}"
                    );
                    return Err(e);
                }
            };
            if result.success {
                deleted += 1;
            } else {
                log::warn!("[dnsmadeeasy] Failed to delete vanity config {id}: {result}");
            }
        }
        Ok(deleted)
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: u64, data: &B) -> Result<ApiResult> {
        self.driver
            .put(&format!("/dns/vanity/{id}"), &UriParams::new(), data)
            .await
    }
}

fn is_public(item: &Value) -> bool {
    item.get("public").and_then(Value::as_bool).unwrap_or(false)
}
