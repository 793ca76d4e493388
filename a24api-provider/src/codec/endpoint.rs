//! Endpoint paths of the DNS service.

use urlencoding::encode;

use crate::types::RecordKind;

/// Root path segment of the DNS service.
pub const SERVICE_ROOT: &str = "dns";
/// API version suffix.
const VERSION: &str = "v1";

/// `GET /dns/domains/v1`
pub fn list_domains() -> String {
    format!("/{SERVICE_ROOT}/domains/{VERSION}")
}

/// `GET /dns/{domain}/records/v1`
pub fn list_records(domain: &str) -> String {
    format!("/{SERVICE_ROOT}/{}/records/{VERSION}", encode(domain))
}

/// `POST`/`PUT /dns/{domain}/{kind}/v1`, kind in lowercase.
pub fn record(domain: &str, kind: RecordKind) -> String {
    format!(
        "/{SERVICE_ROOT}/{}/{}/{VERSION}",
        encode(domain),
        kind.as_str().to_ascii_lowercase()
    )
}

/// `DELETE /dns/{domain}/{hashId}/v1`
pub fn delete_record(domain: &str, hash_id: &str) -> String {
    format!(
        "/{SERVICE_ROOT}/{}/{}/{VERSION}",
        encode(domain),
        encode(hash_id)
    )
}
