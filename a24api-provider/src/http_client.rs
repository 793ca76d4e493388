//! reqwest-backed [`Transport`] for the Active24 REST API.
//!
//! One request per call, no retry. The client sends JSON with a bearer token
//! and hands back the status and body untouched; interpreting them is left
//! to the caller.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method};

use crate::error::{ApiError, Result};
use crate::traits::Transport;
use crate::types::{ApiRequest, HttpMethod, Network, RawResponse};
use crate::utils::log_sanitizer::{mask_token, truncate_for_log};

/// 默认请求超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// 连接超时上限（秒）
const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;

const JSON_CONTENT: &str = "application/json";

/// Settings for [`ApiClient::new`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL, e.g. `https://sandboxapi.active24.com`.
    pub endpoint: String,
    pub token: String,
    pub network: Network,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            token: String::new(),
            network: Network::Any,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP client bound to one endpoint and token.
pub struct ApiClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl ApiClient {
    /// Build the underlying HTTP client.
    ///
    /// `Network::V4`/`V6` bind the client to the unspecified local address of
    /// that family, so only that family is used to connect.
    pub fn new(options: ClientOptions) -> Result<Self> {
        HeaderValue::from_str(&format!("Bearer {}", options.token)).map_err(|e| {
            ApiError::Config {
                detail: format!("token cannot be sent as a header: {e}"),
            }
        })?;

        let connect_timeout = options
            .timeout
            .min(Duration::from_secs(MAX_CONNECT_TIMEOUT_SECS));
        let builder = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(options.timeout);
        let builder = match options.network {
            Network::Any => builder,
            Network::V4 => builder.local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            Network::V6 => builder.local_address(IpAddr::V6(Ipv6Addr::UNSPECIFIED)),
        };
        let client = builder.build().map_err(|e| ApiError::Config {
            detail: format!("failed to create HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            endpoint: options.endpoint.trim_end_matches('/').to_string(),
            token: options.token,
        })
    }
}

fn to_reqwest(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        let url = format!("{}{}", self.endpoint, request.path);
        log::debug!("{} {url}", request.method);
        log::debug!("Authorization: Bearer {}", mask_token(&self.token));

        let mut builder = self
            .client
            .request(to_reqwest(request.method), &url)
            .header(CONTENT_TYPE, JSON_CONTENT)
            .header(ACCEPT, JSON_CONTENT)
            .bearer_auth(&self.token);
        if let Some(body) = &request.body {
            log::debug!("Request Body: {}", truncate_for_log(&body.to_string()));
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            let detail = if e.is_timeout() {
                format!("request timed out: {e}")
            } else {
                e.to_string()
            };
            log::error!("{} {url} failed: {detail}", request.method);
            ApiError::TransportFailure { detail }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::TransportFailure {
                detail: format!("failed to read response body: {e}"),
            })?;
        // 不做有损替换：非 UTF-8 的响应体直接视为格式错误
        let body = String::from_utf8(bytes.to_vec()).map_err(|e| {
            log::error!("{} {url} returned a non UTF-8 body (status {status})", request.method);
            ApiError::malformed(format!("response body is not valid UTF-8: {e}"))
        })?;
        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(RawResponse::new(status, body))
    }
}
