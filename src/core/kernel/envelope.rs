use crate::core::errors::{ComagicError, ProtocolError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const JSONRPC_VERSION: &str = "2.0";

/// Request envelope as posted to the API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: String,
    pub method: String,
    pub params: Map<String, Value>,
}

impl RpcRequest {
    /// Replace the embedded token, e.g. after re-authentication
    pub fn set_access_token(&mut self, access_token: &str) {
        self.params.insert(
            "access_token".to_string(),
            Value::String(access_token.to_string()),
        );
    }

    pub fn access_token(&self) -> Option<&str> {
        self.params.get("access_token").and_then(Value::as_str)
    }
}

/// Assembles the `params` object of one call.
///
/// `None` means "not supplied" and the key is left out; any `Some`, including
/// `0`, `false`, `[]` or `{}`, is sent.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    verb: String,
    resource: String,
    user_id: Option<i64>,
    params: Map<String, Value>,
    error: Option<String>,
}

impl RequestBuilder {
    pub fn new(verb: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            resource: resource.into(),
            user_id: None,
            params: Map::new(),
            error: None,
        }
    }

    /// `<verb>.<resource>`
    pub fn method(&self) -> String {
        format!("{}.{}", self.verb, self.resource)
    }

    /// Act on behalf of a sub-account user
    pub fn user_id(mut self, user_id: Option<i64>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Add a key when a value was supplied
    pub fn param<T: Serialize>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self = self.require(key, value);
        }
        self
    }

    /// Add a key unconditionally
    pub fn require<T: Serialize>(mut self, key: &str, value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.params.insert(key.to_string(), value);
            }
            Err(e) => {
                self.error
                    .get_or_insert_with(|| format!("cannot encode parameter '{}': {}", key, e));
            }
        }
        self
    }

    /// Merge every non-null member of a serialized payload struct
    pub fn payload<T: Serialize>(mut self, payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(Value::Object(fields)) => {
                for (key, value) in fields {
                    if !value.is_null() {
                        self.params.insert(key, value);
                    }
                }
            }
            Ok(other) => {
                let method = self.method();
                self.error.get_or_insert_with(|| {
                    format!("payload for {} must be an object, got {}", method, other)
                });
            }
            Err(e) => {
                self.error
                    .get_or_insert_with(|| format!("cannot encode payload: {}", e));
            }
        }
        self
    }

    /// Produce the envelope, adding `access_token` and `user_id` to `params`.
    ///
    /// `access_token` is `None` only for `login.user`.
    pub fn build(
        self,
        access_token: Option<&str>,
        request_id: String,
    ) -> Result<RpcRequest, ComagicError> {
        if let Some(error) = self.error {
            return Err(ComagicError::Params(error));
        }

        let method = self.method();
        let mut params = Map::new();
        if let Some(token) = access_token {
            params.insert(
                "access_token".to_string(),
                Value::String(token.to_string()),
            );
        }
        if let Some(user_id) = self.user_id {
            params.insert("user_id".to_string(), Value::from(user_id));
        }
        params.extend(self.params);

        Ok(RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: request_id,
            method,
            params,
        })
    }
}

/// Response envelope: either `result` or `error`
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<ProtocolError>,
}

impl RpcResponse {
    pub fn into_result(self) -> Result<Value, ProtocolError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.result
            .map(unwrap_data)
            .ok_or_else(|| ProtocolError::transport("response has neither result nor error"))
    }
}

/// List endpoints wrap their payload as `{"data": [...]}`, singular ones don't
pub fn unwrap_data(result: Value) -> Value {
    match result {
        Value::Object(mut object) if object.contains_key("data") => {
            object.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
