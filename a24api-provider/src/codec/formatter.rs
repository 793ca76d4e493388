//! Response body to report text.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::decoder::{decode_domains, decode_records};
use super::filter::FilterSet;
use super::table::Table;
use crate::error::{ApiError, Result};
use crate::types::OutputMode;

/// Indentation used for JSON output.
const JSON_INDENT: &[u8] = b"    ";

/// What a listing body is expected to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseShape {
    /// `["example.com", ...]`
    DomainList,
    /// `[{"hashId": ..., "type": ...}, ...]` for one domain.
    RecordList {
        /// Shown in the first report column.
        domain: String,
    },
}

/// Render a listing body.
///
/// JSON mode re-indents the body and ignores `filters`. Inline mode decodes
/// the body according to `shape` and renders an aligned table of the rows
/// that pass `filters`. Nothing is rendered if decoding fails.
pub fn format(
    raw: &str,
    shape: &ResponseShape,
    filters: &FilterSet,
    mode: OutputMode,
) -> Result<String> {
    match mode {
        OutputMode::Json => pretty_json(raw),
        OutputMode::Inline => match shape {
            ResponseShape::DomainList => render_domains(raw, filters),
            ResponseShape::RecordList { domain } => render_records(raw, domain, filters),
        },
    }
}

/// Re-indent a JSON body, keeping key order. A blank body renders empty.
pub fn pretty_json(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Ok(String::new());
    }

    let value: serde_json::Value = serde_json::from_str(raw).map_err(ApiError::malformed)?;
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    value
        .serialize(&mut serializer)
        .map_err(ApiError::malformed)?;
    let mut text = String::from_utf8(out).map_err(ApiError::malformed)?;
    text.push('\n');
    Ok(text)
}

fn render_domains(raw: &str, filters: &FilterSet) -> Result<String> {
    let domains = decode_domains(raw)?;
    let mut table = Table::new();
    for domain in domains.into_iter().filter(|d| filters.matches_name(d)) {
        table.push_row(vec![domain]);
    }
    Ok(table.render())
}

fn render_records(raw: &str, domain: &str, filters: &FilterSet) -> Result<String> {
    let records = decode_records(raw)?;
    let mut table = Table::new();
    for record in &records {
        if !filters.matches_type(record.kind().as_str()) {
            continue;
        }
        if filters.matches_name(&record.name) && filters.matches_value(record.primary_value()) {
            table.push_row(record.row(domain));
        }
    }
    log::debug!(
        "Rendered {} of {} record(s) for {domain}",
        table.len(),
        records.len()
    );
    Ok(table.render())
}
