//! Records of a managed domain

use dnsmadeeasy_driver::{ApiResult, DriverError, RestDriver, Result, UriParams};
use serde_json::{Value, json};

use super::ids_params;

/// TTL applied when a new record does not set one.
pub const DEFAULT_TTL: u32 = 1800;
/// Global traffic director location applied when a new record does not set one.
pub const DEFAULT_GTD_LOCATION: &str = "DEFAULT";

/// `/dns/managed/{domainId}/records`
pub struct Records<'a> {
    driver: &'a RestDriver,
}

impl<'a> Records<'a> {
    pub(crate) fn new(driver: &'a RestDriver) -> Self {
        Self { driver }
    }

    pub async fn get_all(
        &self,
        domain_id: u64,
        record_type: Option<&str>,
        rows: Option<u32>,
        page: Option<u32>,
    ) -> Result<ApiResult> {
        let params = UriParams::new()
            .with("type", record_type)
            .with("rows", rows)
            .with("page", page);
        self.driver
            .get(
                &format!("/dns/managed/{domain_id}/records{{?type,rows,page}}"),
                &params,
            )
            .await
    }

    pub async fn get(&self, domain_id: u64, record_id: u64) -> Result<ApiResult> {
        self.driver
            .get(
                &format!("/dns/managed/{domain_id}/records/{record_id}"),
                &UriParams::new(),
            )
            .await
    }

    /// Create one record. `ttl` and `gtdLocation` default to 1800 and `DEFAULT`.
    pub async fn add(&self, domain_id: u64, record: &Value) -> Result<ApiResult> {
        let record = with_defaults(record)?;
        self.driver
            .post(
                &format!("/dns/managed/{domain_id}/records"),
                &UriParams::new(),
                &record,
            )
            .await
    }

    /// Create several records in one call, defaults applied to each.
    pub async fn add_multi(&self, domain_id: u64, records: &[Value]) -> Result<ApiResult> {
        let records = records
            .iter()
            .map(with_defaults)
            .collect::<Result<Vec<_>>>()?;
        self.driver
            .post(
                &format!("/dns/managed/{domain_id}/records/createMulti"),
                &UriParams::new(),
                &records,
            )
            .await
    }

    pub async fn delete(&self, domain_id: u64, record_id: u64) -> Result<ApiResult> {
        self.driver
            .delete(
                &format!("/dns/managed/{domain_id}/records/{record_id}"),
                &UriParams::new(),
            )
            .await
    }

    /// Delete several records; ids travel as repeated `ids=` query pairs.
    ///
    /// An empty `record_ids` fails with [`DriverError::InvalidArgument`] and sends
    /// nothing.
    pub async fn delete_multi(&self, domain_id: u64, record_ids: &[u64]) -> Result<ApiResult> {
        self.driver
            .delete(
                &format!("/dns/managed/{domain_id}/records{{?ids}}"),
                &ids_params(record_ids)?,
            )
            .await
    }

    pub async fn update(
        &self,
        domain_id: u64,
        record_id: u64,
        data: &Value,
    ) -> Result<ApiResult> {
        self.driver
            .put(
                &format!("/dns/managed/{domain_id}/records/{record_id}"),
                &UriParams::new(),
                data,
            )
            .await
    }

    /// Update several records; each entry carries its own `id`.
    pub async fn update_multi(&self, domain_id: u64, records: &[Value]) -> Result<ApiResult> {
        self.driver
            .put(
                &format!("/dns/managed/{domain_id}/records/updateMulti"),
                &UriParams::new(),
                records,
            )
            .await
    }
}

/// Defaults first, then the record's own fields.
fn with_defaults(record: &Value) -> Result<Value> {
    let Value::Object(fields) = record else {
        return Err(DriverError::Serialization(format!(
            "record must be a JSON object, got {record}"
        )));
    };
    let mut merged = json!({"ttl": DEFAULT_TTL, "gtdLocation": DEFAULT_GTD_LOCATION});
    if let Value::Object(map) = &mut merged {
        for (k, v) in fields {
            map.insert(k.clone(), v.clone());
        }
    }
    Ok(merged)
}
