//! 资源层：每个资源把方法映射到固定的 API 路径
//!
//! Every method returns the driver's result unmodified.

mod domains;
mod failover;
mod folders;
mod ip_sets;
mod records;
mod secondary;
mod secondary_records;
mod soa_records;
mod template_records;
mod templates;
mod transfer_acl;
mod usage;
mod vanity_dns;

pub use domains::Domains;
pub use failover::Failover;
pub use folders::Folders;
pub use ip_sets::IpSets;
pub use records::{DEFAULT_GTD_LOCATION, DEFAULT_TTL, Records};
pub use secondary::Secondary;
pub use secondary_records::SecondaryRecords;
pub use soa_records::SoaRecords;
pub use template_records::TemplateRecords;
pub use templates::Templates;
pub use transfer_acl::TransferAcl;
pub use usage::Usage;
pub use vanity_dns::VanityDns;

use dnsmadeeasy_driver::{ApiResult, DriverError, Result, UriParams};
use serde_json::{Map, Value};

/// `{?rows,page}` parameters.
pub(crate) fn page_params(rows: Option<u32>, page: Option<u32>) -> UriParams {
    UriParams::new().with("rows", rows).with("page", page)
}

/// `{?ids}` parameters. An empty list is rejected: without `ids` the collection
/// path itself would be deleted.
pub(crate) fn ids_params(ids: &[u64]) -> Result<UriParams> {
    if ids.is_empty() {
        return Err(DriverError::InvalidArgument(
            "at least one record id is required".to_string(),
        ));
    }
    Ok(UriParams::new().with_all("ids", ids))
}

/// `{"<key>": items, ..config}`; keys in `config` override `key`.
pub(crate) fn merge_config(key: &str, items: Value, config: &Value) -> Result<Value> {
    let mut data = Map::new();
    data.insert(key.to_string(), items);
    match config {
        Value::Null => {}
        Value::Object(extra) => {
            for (k, v) in extra {
                data.insert(k.clone(), v.clone());
            }
        }
        other => {
            return Err(DriverError::Serialization(format!(
                "config must be a JSON object, got {other}"
            )));
        }
    }
    Ok(Value::Object(data))
}

/// Items under `data` of a successful listing; a failed listing becomes an error.
pub(crate) fn listed_items(listing: ApiResult) -> Result<Vec<Value>> {
    let listing = listing.into_result()?;
    let items = listing
        .body
        .and_then(|mut body| match body.get_mut("data").map(Value::take) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        })
        .unwrap_or_default();
    Ok(items)
}

pub(crate) fn item_id(item: &Value) -> Option<u64> {
    item.get("id").and_then(Value::as_u64)
}
