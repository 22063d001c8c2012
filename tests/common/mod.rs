use async_trait::async_trait;
use comagic::core::kernel::{RpcRequest, RpcTransport};
use comagic::ComagicError;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Handler = Box<dyn Fn(&RpcRequest) -> Value + Send + Sync>;

/// In-memory transport answering every envelope through a closure
pub struct ScriptedTransport {
    handler: Handler,
    requests: Mutex<Vec<RpcRequest>>,
}

impl ScriptedTransport {
    pub fn new(handler: impl Fn(&RpcRequest) -> Value + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers `login.user` with `tok-1`, `tok-2`, ... and everything else
    /// through `handler`
    pub fn with_login(handler: impl Fn(&RpcRequest) -> Value + Send + Sync + 'static) -> Self {
        let logins = Arc::new(AtomicUsize::new(0));
        Self::new(move |request| {
            if request.method == "login.user" {
                let n = logins.fetch_add(1, Ordering::SeqCst) + 1;
                login_ok(&format!("tok-{}", n))
            } else {
                handler(request)
            }
        })
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls_to(&self, method: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.method == method)
            .count()
    }
}

impl std::fmt::Debug for ScriptedTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedTransport")
            .field("requests", &self.requests.lock().unwrap().len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RpcTransport for ScriptedTransport {
    async fn post(&self, _url: &str, request: &RpcRequest) -> Result<Value, ComagicError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok((self.handler)(request))
    }
}

pub fn login_ok(token: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": "login",
        "result": {"data": {"access_token": token, "expire_at": 1_700_000_000}}
    })
}

pub fn result(data: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": "req", "result": {"data": data}})
}

pub fn error(code: i64, message: &str, data: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": "req",
        "error": {"code": code, "message": message, "data": data}
    })
}

pub fn expired() -> Value {
    error(-32001, "Access token has been expired", Value::Null)
}
