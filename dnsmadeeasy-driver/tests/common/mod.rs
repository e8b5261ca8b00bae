//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dnsmadeeasy_driver::{
    Configuration, DebugRenderer, DriverError, RawRequestView, RawResponseView, RestDriver,
    Result, Transport, TransportErrorKind, TransportRequest, TransportResponse,
    render_request_head,
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

/// 预设的一次应答
#[derive(Debug, Clone)]
pub enum Reply {
    Raw(String),
    Fail(TransportErrorKind, String),
}

/// 按顺序回放预设应答并记录每个请求的 Transport
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个原始 HTTP 应答
    pub fn reply(&self, raw: impl Into<String>) -> &Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(Reply::Raw(raw.into()));
        }
        self
    }

    /// 追加一个传输层失败
    pub fn fail(&self, kind: TransportErrorKind, message: &str) -> &Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(Reply::Fail(kind, message.to_string()));
        }
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests().pop()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        let request_head = render_request_head(
            request.method,
            &request.url,
            "1.1",
            &request.headers,
        );
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let next = self.replies.lock().ok().and_then(|mut r| r.pop_front());
        match next {
            Some(Reply::Raw(raw)) => Ok(TransportResponse {
                raw,
                request_head,
                elapsed: Duration::from_millis(12),
            }),
            Some(Reply::Fail(kind, message)) => Err(DriverError::transport(kind, message)),
            None => Err(DriverError::transport(
                TransportErrorKind::Connect,
                "no scripted reply left",
            )),
        }
    }
}

/// 记录渲染次数的 `DebugRenderer`
#[derive(Debug, Default)]
pub struct CountingRenderer {
    pub rendered: Mutex<Vec<(String, u16)>>,
}

impl DebugRenderer for CountingRenderer {
    fn render(&self, request: &RawRequestView, response: &RawResponseView) {
        if let Ok(mut rendered) = self.rendered.lock() {
            rendered.push((request.to_string(), response.status_code));
        }
    }
}

impl CountingRenderer {
    pub fn count(&self) -> usize {
        self.rendered.lock().map(|r| r.len()).unwrap_or_default()
    }
}

/// 构造 `HTTP/1.1 <status>` 原始应答
pub fn raw_response(status_line: &str, body: &str) -> String {
    format!(
        "{status_line}\r\nServer: Apache-Coyote/1.1\r\nx-dnsme-requestId: 918f36f1-45f1-4bdc-8d55-a6f26a3db73b\r\nx-dnsme-requestsRemaining: 148\r\nx-dnsme-requestLimit: 150\r\nContent-Type: application/json\r\nDate: Wed, 22 May 2013 06:37:08 GMT\r\n\r\n{body}"
    )
}

/// 测试上下文 - 封装 Driver、脚本化 Transport 与渲染器
pub struct TestContext {
    pub driver: RestDriver,
    pub transport: Arc<ScriptedTransport>,
    pub renderer: Arc<CountingRenderer>,
}

impl TestContext {
    pub fn new(config: Configuration) -> Self {
        let transport = Arc::new(ScriptedTransport::new());
        let renderer = Arc::new(CountingRenderer::default());
        let driver = RestDriver::with_parts(config, transport.clone(), renderer.clone());
        Self {
            driver,
            transport,
            renderer,
        }
    }

    /// 使用沙箱凭证创建上下文
    pub fn sandbox() -> Self {
        Self::new(Configuration::new(
            "1c1a3c91-4770-4ce7-96f4-54c0eb0e457a",
            "c9b5625f-9834-4ff8-baba-4ed5f32cae55",
            true,
        ))
    }
}
