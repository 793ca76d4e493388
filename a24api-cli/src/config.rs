//! Layered client configuration.
//!
//! Sources, highest precedence first: config file, command line,
//! environment, built-in defaults. Empty values never override a lower
//! layer. The result is built once and not changed afterwards.

use std::path::{Path, PathBuf};
use std::time::Duration;

use a24api_provider::{ApiError, ClientOptions, DEFAULT_TIMEOUT_SECS, Network};
use anyhow::Context;
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_ENDPOINT: &str = "https://sandboxapi.active24.com";
/// Token accepted by the sandbox endpoint.
pub const DEFAULT_TOKEN: &str = "123456qwerty-ok";
pub const CONFIG_FILE_NAME: &str = "a24api-conf.json";

pub const ENV_ENDPOINT: &str = "A24API_ENDPOINT";
pub const ENV_TOKEN: &str = "A24API_TOKEN";
pub const ENV_CONFIG: &str = "A24API_CONFIG";

/// Settings from one source. Unset fields defer to lower layers.
///
/// Also the shape of the config file: a flat JSON object of strings.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Layer {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    /// `tcp`, `tcp4` or `tcp6`.
    pub network: Option<String>,
    /// Seconds.
    pub timeout: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Layer {
    /// Environment layer, read through `lookup`.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            endpoint: lookup(ENV_ENDPOINT),
            token: lookup(ENV_TOKEN),
            ..Self::default()
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        let network = if cli.ipv4 {
            Some(Network::V4.to_string())
        } else if cli.ipv6 {
            Some(Network::V6.to_string())
        } else {
            None
        };
        Self {
            endpoint: cli.endpoint.clone(),
            token: cli.token.clone(),
            network,
            timeout: cli.timeout.map(|t| t.to_string()),
        }
    }

    /// Read a config file. A missing file yields `None`.
    pub fn from_file(path: &Path) -> anyhow::Result<Option<Self>> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read {}", path.display()));
            }
        };
        let layer = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!("Loaded config file {}", path.display());
        Ok(Some(layer))
    }

    /// `self` over `lower`: each field keeps its own non-empty value or
    /// falls back to `lower`'s.
    #[must_use]
    pub fn over(self, lower: Self) -> Self {
        Self {
            endpoint: non_empty(self.endpoint).or_else(|| non_empty(lower.endpoint)),
            token: non_empty(self.token).or_else(|| non_empty(lower.token)),
            network: non_empty(self.network).or_else(|| non_empty(lower.network)),
            timeout: non_empty(self.timeout).or_else(|| non_empty(lower.timeout)),
        }
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub token: String,
    pub network: Network,
    pub timeout: Duration,
}

impl Config {
    /// Fill gaps in `layer` with defaults and validate it.
    pub fn from_layer(layer: Layer) -> a24api_provider::Result<Self> {
        let network = match layer.network {
            Some(network) => network
                .parse()
                .map_err(|detail| ApiError::Config { detail })?,
            None => Network::default(),
        };
        let timeout = match layer.timeout {
            Some(timeout) => parse_timeout(&timeout)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        Ok(Self {
            endpoint: layer.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            token: layer.token.unwrap_or_else(|| DEFAULT_TOKEN.to_string()),
            network,
            timeout,
        })
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            endpoint: self.endpoint.clone(),
            token: self.token.clone(),
            network: self.network,
            timeout: self.timeout,
        }
    }
}

fn parse_timeout(raw: &str) -> a24api_provider::Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ApiError::Config {
            detail: format!("timeout must be a positive number of seconds, got '{raw}'"),
        }),
    }
}

/// `a24api-conf.json` in the directory of the running executable.
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(CONFIG_FILE_NAME)
}

/// Config file location: `-c`, then `A24API_CONFIG`, then the default.
pub fn config_path(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    cli.config
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| non_empty(lookup(ENV_CONFIG)).map(PathBuf::from))
        .unwrap_or_else(default_config_path)
}

/// Resolve the configuration for this run.
pub fn load(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
    let path = config_path(cli, &lookup);
    let file = Layer::from_file(&path)?.unwrap_or_default();
    let layer = file
        .over(Layer::from_cli(cli))
        .over(Layer::from_env(&lookup));
    let config = Config::from_layer(layer)?;
    tracing::debug!(
        "Endpoint {} over {} (timeout {}s)",
        config.endpoint,
        config.network,
        config.timeout.as_secs()
    );
    Ok(config)
}
