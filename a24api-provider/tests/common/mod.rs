//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use a24api_provider::{
    ApiError, ApiRequest, Command, FilterSet, Function, Invocation, OutputMode, RawResponse,
    Result, Service, Transport,
};
use async_trait::async_trait;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// Transport answering from a queue of canned responses, in order.
///
/// Records every request it receives. Running out of responses is a
/// transport failure.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(RawResponse::new(status, body));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        self.sent.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ApiError::TransportFailure {
                detail: "no scripted response left".to_string(),
            })
    }
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

pub fn invocation(function: Function, values: &[&str], output: OutputMode) -> Invocation {
    Invocation {
        command: Command::plan(Service::Dns, function, &args(values)).unwrap(),
        output,
        filters: FilterSet::default(),
    }
}
