//! Regex filters for the inline record report.

use regex::Regex;

use crate::error::{ApiError, Result};

/// Optional name/type/value regexes for the inline report.
///
/// An absent filter matches everything. Matching is unanchored, as with
/// `Regex::is_match`; use `^...$` for whole-value matches.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    name: Option<Regex>,
    record_type: Option<Regex>,
    value: Option<Regex>,
}

fn compile(filter: &str, pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|e| ApiError::InvalidFilter {
                filter: filter.to_string(),
                pattern: p.to_string(),
                detail: e.to_string(),
            })
        })
        .transpose()
}

fn is_match(filter: Option<&Regex>, text: &str) -> bool {
    filter.is_none_or(|re| re.is_match(text))
}

impl FilterSet {
    pub fn new(name: Option<&str>, record_type: Option<&str>, value: Option<&str>) -> Result<Self> {
        Ok(Self {
            name: compile("name", name)?,
            record_type: compile("type", record_type)?,
            value: compile("value", value)?,
        })
    }

    pub fn matches_name(&self, name: &str) -> bool {
        is_match(self.name.as_ref(), name)
    }

    pub fn matches_type(&self, record_type: &str) -> bool {
        is_match(self.record_type.as_ref(), record_type)
    }

    pub fn matches_value(&self, value: &str) -> bool {
        is_match(self.value.as_ref(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.record_type.is_none() && self.value.is_none()
    }
}
