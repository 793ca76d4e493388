//! Service/function/positional arguments to a planned API call.
//!
//! Planning validates and encodes everything up front, so a [`Command`]
//! always maps to exactly one well-formed request.

use std::fmt;
use std::str::FromStr;

use crate::codec::encoder::{self, HASH_ID_KEY};
use crate::codec::{ResponseShape, endpoint};
use crate::error::{ApiError, Result};
use crate::types::{ApiRequest, HttpMethod, RecordAction, RecordKind, RecordRequest};

/// API service addressed by an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Dns,
}

impl Service {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dns => "dns",
        }
    }
}

impl FromStr for Service {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dns" => Ok(Self::Dns),
            other => Err(ApiError::UnsupportedOperation {
                service: other.to_string(),
                function: String::new(),
            }),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Function within a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    List,
    Create,
    Update,
    Delete,
}

impl Function {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for Function {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(Self::List),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(ApiError::UnsupportedOperation {
                service: Service::Dns.to_string(),
                function: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated DNS call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListDomains,
    ListRecords {
        domain: String,
    },
    Create {
        domain: String,
        kind: RecordKind,
        body: RecordRequest,
    },
    /// `body` carries the `hashId` of the record being replaced.
    Update {
        domain: String,
        kind: RecordKind,
        body: RecordRequest,
    },
    Delete {
        domain: String,
        hash_id: String,
    },
}

fn required<'a>(positional: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    positional
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| ApiError::MissingArgument {
            name: name.to_string(),
        })
}

fn reject_surplus(function: Function, positional: &[String], allowed: usize) -> Result<()> {
    match positional.get(allowed) {
        Some(extra) => Err(ApiError::UnexpectedArgument {
            function: function.to_string(),
            argument: extra.clone(),
        }),
        None => Ok(()),
    }
}

impl Command {
    /// Validate `positional` for `function` and build the command.
    ///
    /// Positional layouts:
    /// - list: `[domain?]`
    /// - create: `[domain, kind, fields...]`
    /// - update: `[domain, hashId, kind, fields...]`
    /// - delete: `[domain, hashId]`
    pub fn plan(service: Service, function: Function, positional: &[String]) -> Result<Self> {
        match service {
            Service::Dns => Self::plan_dns(function, positional),
        }
    }

    fn plan_dns(function: Function, positional: &[String]) -> Result<Self> {
        match function {
            Function::List => {
                reject_surplus(function, positional, 1)?;
                Ok(match positional.first() {
                    Some(domain) => Self::ListRecords {
                        domain: domain.clone(),
                    },
                    None => Self::ListDomains,
                })
            }
            Function::Create | Function::Update => {
                let action = if function == Function::Create {
                    RecordAction::Create
                } else {
                    RecordAction::Update
                };
                let domain = required(positional, encoder::DOMAIN_POSITION, "domain")?;
                if action == RecordAction::Update {
                    required(positional, encoder::HASH_ID_POSITION, HASH_ID_KEY)?;
                }
                let kind: RecordKind =
                    required(positional, encoder::kind_position(action), "type")?.parse()?;
                let body = encoder::encode(kind, action, positional)?;
                let domain = domain.to_string();

                Ok(match action {
                    RecordAction::Create => Self::Create { domain, kind, body },
                    RecordAction::Update => Self::Update { domain, kind, body },
                })
            }
            Function::Delete => {
                let domain = required(positional, encoder::DOMAIN_POSITION, "domain")?;
                let hash_id = required(positional, encoder::HASH_ID_POSITION, HASH_ID_KEY)?;
                reject_surplus(function, positional, encoder::HASH_ID_POSITION + 1)?;
                Ok(Self::Delete {
                    domain: domain.to_string(),
                    hash_id: hash_id.to_string(),
                })
            }
        }
    }

    pub const fn service(&self) -> Service {
        Service::Dns
    }

    pub const fn function(&self) -> Function {
        match self {
            Self::ListDomains | Self::ListRecords { .. } => Function::List,
            Self::Create { .. } => Function::Create,
            Self::Update { .. } => Function::Update,
            Self::Delete { .. } => Function::Delete,
        }
    }

    /// Method, path and body of the call.
    pub fn to_request(&self) -> ApiRequest {
        let (method, path, body) = match self {
            Self::ListDomains => (HttpMethod::Get, endpoint::list_domains(), None),
            Self::ListRecords { domain } => (HttpMethod::Get, endpoint::list_records(domain), None),
            Self::Create { domain, kind, body } => (
                HttpMethod::Post,
                endpoint::record(domain, *kind),
                Some(body.to_json()),
            ),
            Self::Update { domain, kind, body } => (
                HttpMethod::Put,
                endpoint::record(domain, *kind),
                Some(body.to_json()),
            ),
            Self::Delete { domain, hash_id } => (
                HttpMethod::Delete,
                endpoint::delete_record(domain, hash_id),
                Some(serde_json::json!({ HASH_ID_KEY: hash_id })),
            ),
        };
        ApiRequest { method, path, body }
    }

    /// Shape of a successful response body, for listings only.
    pub fn response_shape(&self) -> Option<ResponseShape> {
        match self {
            Self::ListDomains => Some(ResponseShape::DomainList),
            Self::ListRecords { domain } => Some(ResponseShape::RecordList {
                domain: domain.clone(),
            }),
            Self::Create { .. } | Self::Update { .. } | Self::Delete { .. } => None,
        }
    }
}
