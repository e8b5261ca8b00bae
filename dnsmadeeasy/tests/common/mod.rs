//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::VecDeque;
use std::env;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dnsmadeeasy::{
    Client, DriverError, HttpMethod, Result, SANDBOX_URL, Transport, TransportErrorKind,
    TransportRequest, TransportResponse,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 未预设应答时返回的默认应答
const DEFAULT_REPLY: &str = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nx-dnsme-requestsRemaining: 149\r\nx-dnsme-requestLimit: 150\r\n\r\n{}";

/// 预设应答：原始报文或传输失败
#[derive(Debug)]
enum Reply {
    Raw(String),
    Fail(TransportErrorKind),
}

/// 记录请求、按顺序回放应答的 Transport
#[derive(Debug, Default)]
pub struct RecordingTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    pub fn reply(&self, status_line: &str, body: &str) -> &Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(Reply::Raw(format!(
                "{status_line}\r\nContent-Type: application/json\r\n\r\n{body}"
            )));
        }
        self
    }

    pub fn fail(&self, kind: TransportErrorKind) -> &Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(Reply::Fail(kind));
        }
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<TransportRequest> {
        self.requests().pop()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        let request_head = format!("{} {} HTTP/1.1\r\n", request.method, request.url);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        let reply = self.replies.lock().ok().and_then(|mut r| r.pop_front());
        let raw = match reply {
            Some(Reply::Raw(raw)) => raw,
            Some(Reply::Fail(kind)) => {
                return Err(DriverError::transport(kind, "scripted failure"));
            }
            None => DEFAULT_REPLY.to_string(),
        };
        Ok(TransportResponse {
            raw,
            request_head,
            elapsed: Duration::from_millis(5),
        })
    }
}

/// 沙箱客户端 + 记录用 Transport
pub fn sandbox_client() -> (Client, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let client = Client::builder("test-api-key", "test-secret-key")
        .sandbox(true)
        .transport(transport.clone())
        .build()
        .unwrap();
    (client, transport)
}

/// 沙箱下的完整 URL
pub fn url(path: &str) -> String {
    format!("{SANDBOX_URL}{path}")
}

/// 断言最后一次请求的方法与路径，返回该请求
pub fn assert_last(
    transport: &RecordingTransport,
    method: HttpMethod,
    path: &str,
) -> TransportRequest {
    let request = transport.last().unwrap();
    assert_eq!(request.method, method, "method of {}", request.url);
    assert_eq!(request.url, url(path));
    request
}

/// 请求体解析为 JSON
pub fn body_of(request: &TransportRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().unwrap_or("null")).unwrap()
}

/// 生成唯一的测试域名
pub fn generate_test_domain() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("test-{}.example.com", &uuid.to_string()[..8])
}

/// 从环境变量创建沙箱客户端
pub fn live_client() -> Option<Client> {
    let api_key = env::var("DNSME_API_KEY").ok()?;
    let secret_key = env::var("DNSME_SECRET_KEY").ok()?;
    Client::new(api_key, secret_key, true).ok()
}
