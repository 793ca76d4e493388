use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ApiRequest, RawResponse};

/// 发送已规划的 API 请求
///
/// A transport performs exactly one round trip per call. Non-2xx statuses
/// are returned as [`RawResponse`]s, not errors; only failures before a
/// response is read map to [`ApiError::TransportFailure`](crate::ApiError).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        (**self).send(request).await
    }
}
