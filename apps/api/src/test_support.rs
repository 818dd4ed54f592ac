//! Helpers shared by the handler tests.

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::Config;
use crate::llm_client::{ChatCompletion, ChatCompletionRequest, LlmError};
use crate::routes::build_app;
use crate::state::AppState;

/// What the fake completion backend answers with.
pub enum FakeReply {
    Text(&'static str),
    Status(u16, &'static str),
}

/// Records every request it receives and answers with a canned reply.
pub struct FakeCompletion {
    reply: FakeReply,
    pub calls: Mutex<Vec<(String, ChatCompletionRequest)>>,
}

impl FakeCompletion {
    pub fn new(reply: FakeReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatCompletion for FakeCompletion {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), request.clone()));
        match &self.reply {
            FakeReply::Text(text) => Ok(text.to_string()),
            FakeReply::Status(status, message) => Err(LlmError::Api {
                status: *status,
                message: message.to_string(),
            }),
        }
    }
}

/// Router over a fake backend. `api_key` of `None` simulates a missing credential.
pub fn app(llm: Arc<FakeCompletion>, api_key: Option<&str>, scratch_dir: &Path) -> Router {
    let mut config = Config::for_tests(scratch_dir.to_path_buf());
    config.groq_api_key = api_key.map(str::to_string);
    build_app(AppState { llm, config }, Router::new())
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends `req` through `app` and returns the status and JSON body.
pub async fn send_json(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Shared buffer the test subscriber writes formatted events into.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// `info`-level events on the current thread, captured while this is alive.
pub struct CapturedLogs {
    buffer: LogBuffer,
    _guard: DefaultGuard,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.0.lock().unwrap()).into_owned()
    }
}

pub fn capture_logs() -> CapturedLogs {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    CapturedLogs {
        buffer,
        _guard: tracing::subscriber::set_default(subscriber),
    }
}
