//! Response bodies to typed values.
//!
//! Record listings are heterogeneous arrays. Each element is dispatched on its
//! `type` key into [`RecordData`], one variant per [`RecordKind`]. Elements
//! whose type is not a known kind are skipped; any other decode failure
//! rejects the whole body.

use std::fmt;

use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::schema::{self, RecordSchema};
use crate::types::RecordKind;

/// A DNS record as returned by the record listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Provider-assigned record identifier.
    pub hash_id: String,
    /// Record name (`"@"` for the apex).
    pub name: String,
    /// Time to live in seconds.
    pub ttl: f64,
    /// Kind-specific fields.
    #[serde(flatten)]
    pub data: RecordData,
}

/// Kind-specific record fields, tagged by the `type` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum RecordData {
    A {
        ip: String,
    },
    Aaaa {
        ip: String,
    },
    Cname {
        alias: String,
    },
    Txt {
        text: String,
    },
    Ns {
        #[serde(rename = "nameServer")]
        name_server: String,
    },
    Sshfp {
        algorithm: f64,
        #[serde(rename = "fingerprintType")]
        fingerprint_type: f64,
        /// Fingerprint, hex encoded.
        text: String,
    },
    Srv {
        priority: f64,
        weight: f64,
        port: f64,
        target: String,
    },
    Tlsa {
        #[serde(rename = "certificateUsage")]
        certificate_usage: f64,
        selector: f64,
        #[serde(rename = "matchingType")]
        matching_type: f64,
        hash: String,
    },
    Caa {
        flags: f64,
        tag: String,
        #[serde(rename = "caaValue")]
        caa_value: String,
    },
    Mx {
        priority: f64,
        mailserver: String,
    },
}

/// One rendered cell value of a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// Text shown in double quotes.
    Quoted(&'a str),
    /// Rendered in shortest round-trip form (`3600`, `0.5`).
    Number(f64),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Quoted(s) => write!(f, "\"{s}\""),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl RecordData {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::A { .. } => RecordKind::A,
            Self::Aaaa { .. } => RecordKind::Aaaa,
            Self::Cname { .. } => RecordKind::Cname,
            Self::Txt { .. } => RecordKind::Txt,
            Self::Ns { .. } => RecordKind::Ns,
            Self::Sshfp { .. } => RecordKind::Sshfp,
            Self::Srv { .. } => RecordKind::Srv,
            Self::Tlsa { .. } => RecordKind::Tlsa,
            Self::Caa { .. } => RecordKind::Caa,
            Self::Mx { .. } => RecordKind::Mx,
        }
    }

    /// Value stored under the wire key `key`, or `None` if this kind has no
    /// such field. `name` and `ttl` live on [`DnsRecord`].
    pub fn value(&self, key: &str) -> Option<FieldValue<'_>> {
        use FieldValue::{Number, Quoted, Text};

        let value = match (self, key) {
            (Self::A { ip } | Self::Aaaa { ip }, "ip") => Text(ip),
            (Self::Cname { alias }, "alias") => Text(alias),
            // TXT 的内容带引号显示
            (Self::Txt { text }, "text") => Quoted(text),
            (Self::Ns { name_server }, "nameServer") => Text(name_server),
            (Self::Sshfp { algorithm, .. }, "algorithm") => Number(*algorithm),
            (Self::Sshfp { fingerprint_type, .. }, "fingerprintType") => Number(*fingerprint_type),
            (Self::Sshfp { text, .. }, "text") => Text(text),
            (Self::Srv { priority, .. } | Self::Mx { priority, .. }, "priority") => {
                Number(*priority)
            }
            (Self::Srv { weight, .. }, "weight") => Number(*weight),
            (Self::Srv { port, .. }, "port") => Number(*port),
            (Self::Srv { target, .. }, "target") => Text(target),
            (Self::Tlsa { certificate_usage, .. }, "certificateUsage") => {
                Number(*certificate_usage)
            }
            (Self::Tlsa { selector, .. }, "selector") => Number(*selector),
            (Self::Tlsa { matching_type, .. }, "matchingType") => Number(*matching_type),
            (Self::Tlsa { hash, .. }, "hash") => Text(hash),
            (Self::Caa { flags, .. }, "flags") => Number(*flags),
            (Self::Caa { tag, .. }, "tag") => Text(tag),
            (Self::Caa { caa_value, .. }, "caaValue") => Text(caa_value),
            (Self::Mx { mailserver, .. }, "mailserver") => Text(mailserver),
            _ => return None,
        };
        Some(value)
    }
}

impl<'a> FieldValue<'a> {
    /// Underlying text, without quotes. `None` for numbers.
    pub fn as_str(self) -> Option<&'a str> {
        match self {
            Self::Text(s) | Self::Quoted(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl DnsRecord {
    pub fn kind(&self) -> RecordKind {
        self.data.kind()
    }

    pub fn schema(&self) -> &'static RecordSchema {
        schema::lookup(self.kind())
    }

    /// Any field by wire key, including `name` and `ttl`.
    pub fn value(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "name" => Some(FieldValue::Text(&self.name)),
            "ttl" => Some(FieldValue::Number(self.ttl)),
            _ => self.data.value(key),
        }
    }

    /// The value the value filter is matched against: the schema's primary field.
    pub fn primary_value(&self) -> &str {
        self.value(self.schema().primary)
            .and_then(FieldValue::as_str)
            .unwrap_or_default()
    }

    /// Report row in the schema's column order.
    pub fn row(&self, domain: &str) -> Vec<String> {
        self.schema()
            .columns()
            .into_iter()
            .map(|column| match column {
                "domain" => domain.to_string(),
                "hashId" => self.hash_id.clone(),
                "type" => self.kind().to_string(),
                key => self.value(key).map(|v| v.to_string()).unwrap_or_default(),
            })
            .collect()
    }
}

/// Decode a domain listing: a JSON array of names.
pub fn decode_domains(raw: &str) -> Result<Vec<String>> {
    serde_json::from_str(raw).map_err(|e| {
        log::error!("Domain listing decode failed: {e}");
        ApiError::malformed(e)
    })
}

/// Decode a record listing, skipping elements of unknown type.
pub fn decode_records(raw: &str) -> Result<Vec<DnsRecord>> {
    let items: Vec<serde_json::Value> = serde_json::from_str(raw).map_err(|e| {
        log::error!("Record listing decode failed: {e}");
        ApiError::malformed(e)
    })?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record_type = item
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| ApiError::malformed(format!("record {index} has no string 'type'")))?;

        if RecordKind::from_wire(record_type).is_none() {
            log::debug!("Skipping record {index} of unsupported type {record_type}");
            continue;
        }

        let record: DnsRecord = serde_json::from_value(item)
            .map_err(|e| ApiError::malformed(format!("record {index}: {e}")))?;
        records.push(record);
    }
    Ok(records)
}
