//! Active24 sandbox 集成测试
//!
//! 运行方式:
//! ```bash
//! A24API_TOKEN=123456qwerty-ok A24API_TEST_DOMAIN=example.com \
//!     cargo test -p a24api-provider --test sandbox_test -- --ignored --nocapture
//! ```

mod common;

use std::time::Duration;

use a24api_provider::{ApiClient, ClientOptions, DnsService, ExitStatus, Function, OutputMode};
use common::invocation;

const SANDBOX_ENDPOINT: &str = "https://sandboxapi.active24.com";

fn sandbox_client() -> ApiClient {
    ApiClient::new(ClientOptions {
        endpoint: SANDBOX_ENDPOINT.to_string(),
        token: std::env::var("A24API_TOKEN").unwrap_or_default(),
        timeout: Duration::from_secs(30),
        ..ClientOptions::default()
    })
    .expect("创建 HTTP 客户端失败")
}

#[tokio::test]
#[ignore]
async fn test_sandbox_list_domains() {
    skip_if_no_env!("A24API_TOKEN");

    let service = DnsService::new(sandbox_client());
    let outcome = service
        .run(&invocation(Function::List, &[], OutputMode::Inline))
        .await
        .expect("list domains 调用失败");

    assert_eq!(outcome.status, ExitStatus::Success, "{}", outcome.output);
    println!("✓ list domains:\n{}", outcome.output);
}

#[tokio::test]
#[ignore]
async fn test_sandbox_list_records() {
    skip_if_no_env!("A24API_TOKEN", "A24API_TEST_DOMAIN");

    let domain = std::env::var("A24API_TEST_DOMAIN").unwrap_or_default();
    let service = DnsService::new(sandbox_client());
    let outcome = service
        .run(&invocation(Function::List, &[domain.as_str()], OutputMode::Inline))
        .await
        .expect("list records 调用失败");

    assert_eq!(outcome.status, ExitStatus::Success, "{}", outcome.output);
    println!("✓ list records:\n{}", outcome.output);
}
