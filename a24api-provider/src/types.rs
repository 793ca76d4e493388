use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ============ Record Kinds ============

/// DNS record kind supported by the API.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// SSH public key fingerprint record.
    Sshfp,
    /// Service locator record.
    Srv,
    /// TLS certificate association record.
    Tlsa,
    /// Certificate Authority Authorization record.
    Caa,
    /// Mail exchange record.
    Mx,
}

impl RecordKind {
    /// Every supported kind, in the order the API documents them.
    pub const ALL: [Self; 10] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Txt,
        Self::Ns,
        Self::Sshfp,
        Self::Srv,
        Self::Tlsa,
        Self::Caa,
        Self::Mx,
    ];

    /// Uppercase wire name (`"AAAA"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Sshfp => "SSHFP",
            Self::Srv => "SRV",
            Self::Tlsa => "TLSA",
            Self::Caa => "CAA",
            Self::Mx => "MX",
        }
    }

    /// Exact match against the wire name, as found in response bodies.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse, for command-line input.
impl FromStr for RecordKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(&s.to_ascii_uppercase()).ok_or_else(|| ApiError::UnsupportedRecordType {
            record_type: s.to_string(),
        })
    }
}

// ============ Field Specs ============

/// How a positional argument is converted before it is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Passed through unchanged.
    String,
    /// Must parse as a signed integer.
    Integer,
}

impl FieldKind {
    /// Validate `raw` and return its canonical wire form.
    ///
    /// Numbers are re-rendered, so `"+0600"` becomes `"600"`.
    pub fn normalize(self, raw: &str) -> std::result::Result<String, String> {
        match self {
            Self::String => Ok(raw.to_string()),
            Self::Integer => raw
                .trim()
                .parse::<i64>()
                .map(|value| value.to_string())
                .map_err(|_| format!("expected an integer, got '{raw}'")),
        }
    }
}

/// One entry of a record schema: a wire key and its value kind.
///
/// The field's argument position is its index in the schema plus the
/// encoder's offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key used in requests and responses.
    pub key: &'static str,
    /// Value conversion applied when encoding.
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn string(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::String,
        }
    }

    pub const fn integer(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Integer,
        }
    }
}

// ============ Requests ============

/// Whether a record body is for a new record or an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    Create,
    /// Carries a leading `hashId` argument.
    Update,
}

/// JSON body of a create/update call: wire key to string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordRequest {
    fields: BTreeMap<String, String>,
}

impl RecordRequest {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flat JSON object of string values, keys sorted.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        )
    }
}

/// HTTP method of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully planned API call, handed to a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path below the endpoint, e.g. `/dns/example.com/a/v1`.
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// Status and undecoded body of an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

// ============ Output ============

/// How a successful response body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Pretty-printed JSON, unfiltered.
    Json,
    /// Column-aligned text table.
    #[default]
    Inline,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "inline" => Ok(Self::Inline),
            other => Err(format!("unknown output format '{other}' (expected json or inline)")),
        }
    }
}

/// Address family used by the HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    /// Whatever the resolver returns.
    #[default]
    Any,
    /// IPv4 only.
    V4,
    /// IPv6 only.
    V6,
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Self::Any),
            "tcp4" => Ok(Self::V4),
            "tcp6" => Ok(Self::V6),
            other => Err(format!("unknown network '{other}' (expected tcp, tcp4 or tcp6)")),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Any => "tcp",
            Self::V4 => "tcp4",
            Self::V6 => "tcp6",
        })
    }
}
