//! Executes a planned [`Command`] over a [`Transport`] and renders the result.

use crate::codec::{FilterSet, format, pretty_json};
use crate::command::Command;
use crate::error::Result;
use crate::status_codes;
use crate::traits::Transport;
use crate::types::OutputMode;
use crate::utils::log_sanitizer::truncate_for_log;

/// Process exit status of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Usage, validation, transport or decode failure.
    Failure,
    /// The API answered with a non-2xx status.
    ApiError,
}

impl ExitStatus {
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::ApiError => 2,
        }
    }
}

/// Everything needed for one run.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: Command,
    pub output: OutputMode,
    /// Applied to inline listings only.
    pub filters: FilterSet,
}

/// Rendered text and exit status of a completed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub status: ExitStatus,
}

pub struct DnsService<T> {
    transport: T,
}

impl<T: Transport> DnsService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Send the call and render the response.
    ///
    /// A non-2xx status is not an error: it yields the status line
    /// `"<status> <CODE>"` with [`ExitStatus::ApiError`]. Mutations in inline
    /// mode print the same status line on success. Decode failures carry the
    /// status and its code text.
    pub async fn run(&self, invocation: &Invocation) -> Result<Outcome> {
        let command = &invocation.command;
        let request = command.to_request();
        let raw = self.transport.send(&request).await?;

        let code_text = status_codes::translate(
            raw.status,
            command.service().as_str(),
            command.function().as_str(),
        );
        let status_line = format!("{} {code_text}\n", raw.status);

        if !raw.is_success() {
            log::warn!(
                "{} {} returned {} {code_text}: {}",
                request.method,
                request.path,
                raw.status,
                truncate_for_log(&raw.body)
            );
            return Ok(Outcome {
                output: status_line,
                status: ExitStatus::ApiError,
            });
        }

        let output = match (command.response_shape(), invocation.output) {
            (Some(shape), mode) => format(&raw.body, &shape, &invocation.filters, mode),
            (None, OutputMode::Json) => pretty_json(&raw.body),
            (None, OutputMode::Inline) => Ok(status_line),
        }
        .map_err(|e| e.with_status(raw.status, code_text))?;

        Ok(Outcome {
            output,
            status: ExitStatus::Success,
        })
    }
}
