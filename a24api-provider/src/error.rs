use serde::Serialize;
use thiserror::Error;

use crate::types::RecordKind;

/// Unified error type for schema lookup, request encoding, response decoding
/// and transport.
///
/// Every variant is terminal for the current invocation. Nothing is retried:
/// validation failures are raised before any network call, decode and
/// transport failures after it.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// The record type string does not name one of the supported kinds.
    #[error("Unsupported record type: {record_type}")]
    UnsupportedRecordType {
        /// The rejected type string, as supplied.
        record_type: String,
    },

    /// A positional argument is missing or cannot be converted to the
    /// field's declared value kind.
    #[error("Invalid value for {kind} field '{field}': {detail}")]
    InvalidFieldValue {
        /// Record kind being encoded.
        kind: RecordKind,
        /// Wire key of the offending field.
        field: String,
        /// What is wrong with the value.
        detail: String,
    },

    /// More positional arguments were supplied than the record kind declares.
    #[error("{kind} record takes {expected} argument(s) after the type, got {actual}")]
    InvalidArgumentCount {
        /// Record kind being encoded.
        kind: RecordKind,
        /// Arity declared by the record schema.
        expected: usize,
        /// Number of arguments actually supplied.
        actual: usize,
    },

    /// A leading positional argument (domain, hash id, record type) is absent.
    #[error("Missing argument: <{name}>")]
    MissingArgument {
        /// Placeholder name of the argument.
        name: String,
    },

    /// A positional argument was supplied that the function does not take.
    #[error("Unexpected argument for {function}: {argument}")]
    UnexpectedArgument {
        /// Function that received the argument.
        function: String,
        /// The surplus argument.
        argument: String,
    },

    /// The service/function pair is not implemented.
    #[error("Unsupported operation: {service} {function}")]
    UnsupportedOperation {
        /// Requested service.
        service: String,
        /// Requested function.
        function: String,
    },

    /// A name/type/value filter is not a valid regular expression.
    #[error("Invalid {filter} filter '{pattern}': {detail}")]
    InvalidFilter {
        /// Which filter (`name`, `type` or `value`).
        filter: String,
        /// The rejected pattern.
        pattern: String,
        /// Regex compiler message.
        detail: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("{}Malformed response: {detail}", status_prefix(.status, .code_text))]
    MalformedResponse {
        /// HTTP status of the response, once known.
        status: Option<u16>,
        /// Translated status code text, once known.
        code_text: Option<String>,
        /// Decoder message.
        detail: String,
    },

    /// The HTTP transport failed before a response was read.
    #[error("Transport failure: {detail}")]
    TransportFailure {
        /// Error details from the HTTP client.
        detail: String,
    },

    /// A configuration value cannot be used (bad network, unusable token).
    #[error("Configuration error: {detail}")]
    Config {
        /// What is wrong.
        detail: String,
    },
}

fn status_prefix(status: &Option<u16>, code_text: &Option<String>) -> String {
    match (status, code_text) {
        (Some(status), Some(text)) => format!("{status} {text}: "),
        (Some(status), None) => format!("{status}: "),
        _ => String::new(),
    }
}

impl ApiError {
    /// Shortcut for a decode failure whose status is not known yet.
    pub fn malformed(detail: impl ToString) -> Self {
        Self::MalformedResponse {
            status: None,
            code_text: None,
            detail: detail.to_string(),
        }
    }

    /// Attach the HTTP status and its translated text to a
    /// [`MalformedResponse`](Self::MalformedResponse). Other variants pass
    /// through untouched.
    #[must_use]
    pub fn with_status(self, status: u16, code_text: &str) -> Self {
        match self {
            Self::MalformedResponse { detail, .. } => Self::MalformedResponse {
                status: Some(status),
                code_text: Some(code_text.to_string()),
                detail,
            },
            other => other,
        }
    }

    /// Whether the error stems from user input rather than the remote side,
    /// used for log level selection.
    ///
    /// Returns `true` for errors that should be logged at `warn`, `false`
    /// for those that should be logged at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedRecordType { .. }
                | Self::InvalidFieldValue { .. }
                | Self::InvalidArgumentCount { .. }
                | Self::MissingArgument { .. }
                | Self::UnexpectedArgument { .. }
                | Self::UnsupportedOperation { .. }
                | Self::InvalidFilter { .. }
                | Self::Config { .. }
        )
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
