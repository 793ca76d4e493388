//! # a24api-provider
//!
//! Client library for the Active24 DNS REST API: a schema-driven codec
//! between positional command-line arguments and JSON record bodies, and
//! between record listings and a filterable text report.
//!
//! ## Supported Record Types
//!
//! | Type | Fields after `name`, `ttl` |
//! |------|----------------------------|
//! | A, AAAA | `ip` |
//! | CNAME | `alias` |
//! | TXT | `text` |
//! | NS | `nameServer` |
//! | SSHFP | `algorithm`, `fingerprintType`, `text` |
//! | SRV | `priority`, `weight`, `port`, `target` |
//! | TLSA | `certificateUsage`, `selector`, `matchingType`, `hash` |
//! | CAA | `flags`, `tag`, `caaValue` |
//! | MX | `priority`, `mailserver` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use a24api_provider::{
//!     ApiClient, ClientOptions, Command, DnsService, FilterSet, Function, Invocation,
//!     OutputMode, Service,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ClientOptions {
//!         endpoint: "https://sandboxapi.active24.com".to_string(),
//!         token: "123456qwerty-ok".to_string(),
//!         ..ClientOptions::default()
//!     })?;
//!
//!     let positional = ["example.com", "MX", "@", "3600", "10", "mail.example.com"]
//!         .map(String::from);
//!     let invocation = Invocation {
//!         command: Command::plan(Service::Dns, Function::Create, &positional)?,
//!         output: OutputMode::Inline,
//!         filters: FilterSet::default(),
//!     };
//!
//!     let outcome = DnsService::new(client).run(&invocation).await?;
//!     print!("{}", outcome.output);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Everything returns [`Result<T, ApiError>`](ApiError). Input errors
//! ([`ApiError::is_expected`]) are raised while planning, before any network
//! call. A non-2xx response is not an error: [`DnsService::run`] reports it
//! as a status line with [`ExitStatus::ApiError`].

pub mod codec;
mod command;
mod error;
mod http_client;
pub mod schema;
mod service;
pub mod status_codes;
mod traits;
mod types;
mod utils;

pub use codec::{FilterSet, ResponseShape};
pub use command::{Command, Function, Service};
pub use error::{ApiError, Result};
pub use http_client::{ApiClient, ClientOptions, DEFAULT_TIMEOUT_SECS};
pub use schema::RecordSchema;
pub use service::{DnsService, ExitStatus, Invocation, Outcome};
pub use traits::Transport;
pub use types::{
    ApiRequest, FieldKind, FieldSpec, HttpMethod, Network, OutputMode, RawResponse, RecordAction,
    RecordKind, RecordRequest,
};

pub use utils::log_sanitizer;
