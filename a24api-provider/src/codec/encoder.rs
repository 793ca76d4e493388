//! Positional arguments to request body.
//!
//! Positional arguments arrive as `[domain, kind, fields...]` for create and
//! `[domain, hashId, kind, fields...]` for update. Field `i` of the kind's
//! schema is read at `field_offset(action) + i`.

use crate::error::{ApiError, Result};
use crate::schema;
use crate::types::{RecordAction, RecordKind, RecordRequest};

/// Position of the domain argument.
pub const DOMAIN_POSITION: usize = 0;
/// Position of the `hashId` argument on update.
pub const HASH_ID_POSITION: usize = 1;
/// First field position on create: after domain and kind.
pub const FIELD_OFFSET: usize = 2;
/// Update takes a leading `hashId` that shifts every later position by one.
pub const UPDATE_SHIFT: usize = 1;

/// Wire key of the record identifier.
pub const HASH_ID_KEY: &str = "hashId";

pub const fn field_offset(action: RecordAction) -> usize {
    match action {
        RecordAction::Create => FIELD_OFFSET,
        RecordAction::Update => FIELD_OFFSET + UPDATE_SHIFT,
    }
}

/// Position of the record type argument.
pub const fn kind_position(action: RecordAction) -> usize {
    field_offset(action) - 1
}

/// Build the request body for `kind` from the full positional list.
///
/// On update the body also carries `hashId`, taken from
/// [`HASH_ID_POSITION`]. Missing values and non-numeric values for numeric
/// fields fail with [`ApiError::InvalidFieldValue`]; surplus arguments with
/// [`ApiError::InvalidArgumentCount`].
pub fn encode(
    kind: RecordKind,
    action: RecordAction,
    positional: &[String],
) -> Result<RecordRequest> {
    let schema = schema::lookup(kind);
    let offset = field_offset(action);

    let supplied = positional.len().saturating_sub(offset);
    if supplied > schema.arity() {
        return Err(ApiError::InvalidArgumentCount {
            kind,
            expected: schema.arity(),
            actual: supplied,
        });
    }

    let mut request = RecordRequest::default();

    if action == RecordAction::Update {
        let hash_id = positional
            .get(HASH_ID_POSITION)
            .ok_or_else(|| ApiError::MissingArgument {
                name: HASH_ID_KEY.to_string(),
            })?;
        request.insert(HASH_ID_KEY, hash_id.as_str());
    }

    for (index, field) in schema.fields.iter().enumerate() {
        let raw = positional
            .get(offset + index)
            .ok_or_else(|| ApiError::InvalidFieldValue {
                kind,
                field: field.key.to_string(),
                detail: "missing value".to_string(),
            })?;
        let value = field
            .kind
            .normalize(raw)
            .map_err(|detail| ApiError::InvalidFieldValue {
                kind,
                field: field.key.to_string(),
                detail,
            })?;
        request.insert(field.key, value);
    }

    log::debug!("Encoded {kind} {action:?} body with {} field(s)", request.len());
    Ok(request)
}
