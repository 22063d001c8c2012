use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Code used for every failure that happens before a server error object
/// could be read: connection problems, unreadable bodies, malformed payloads.
pub const TRANSPORT_ERROR_CODE: i64 = 502;

/// Code the API returns when the session token is no longer valid.
pub const SESSION_EXPIRED_CODE: i64 = -32001;

/// Error object as reported by the API, or synthesized for transport failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ProtocolError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// A failure of the HTTP exchange itself rather than of the remote call
    pub fn transport(cause: impl fmt::Display) -> Self {
        Self::new(TRANSPORT_ERROR_CODE, cause.to_string())
    }

    pub const fn is_session_expired(&self) -> bool {
        self.code == SESSION_EXPIRED_CODE
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code: {}, message: {}, data: ", self.code, self.message)?;
        match &self.data {
            Some(data) => write!(f, "{}", data),
            None => write!(f, "None"),
        }
    }
}

impl std::error::Error for ProtocolError {}

#[derive(Error, Debug)]
pub enum ComagicError {
    /// Remote or transport failure. Carries the server's `{code, message, data}`.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Caller input rejected before any request was sent.
    #[error("{0}")]
    Params(String),
}

impl ComagicError {
    pub fn params(message: impl Into<String>) -> Self {
        Self::Params(message.into())
    }

    pub fn transport(cause: impl fmt::Display) -> Self {
        Self::Protocol(ProtocolError::transport(cause))
    }

    /// Server-side or transport code, if this is a protocol error
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::Protocol(err) => Some(err.code),
            Self::Params(_) => None,
        }
    }

    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::Protocol(err) if err.is_session_expired())
    }
}

impl From<reqwest::Error> for ComagicError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err)
    }
}

impl From<serde_json::Error> for ComagicError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(err)
    }
}

impl From<crate::core::config::ConfigError> for ComagicError {
    fn from(err: crate::core::config::ConfigError) -> Self {
        Self::Params(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn server_error_object_maps_field_for_field() {
        let raw = json!({"code": -32602, "message": "Invalid params", "data": {"field": "limit"}});
        let err: ProtocolError = serde_json::from_value(raw).unwrap();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Invalid params");
        assert_eq!(err.data, Some(json!({"field": "limit"})));
    }

    #[test]
    fn server_error_without_message_keeps_its_code() {
        let err: ProtocolError = serde_json::from_value(json!({"code": -32603})).unwrap();
        assert_eq!(err.code, -32603);
        assert_eq!(err.message, "");
        assert_eq!(err.data, None);
    }

    #[test]
    fn display_matches_code_message_data_layout() {
        let err = ProtocolError::new(-32001, "Session expired");
        assert_eq!(
            err.to_string(),
            "Code: -32001, message: Session expired, data: None"
        );
        assert!(err.is_session_expired());
    }

    #[test]
    fn json_failures_classify_as_transport_errors() {
        let parse_err = serde_json::from_str::<Value>("<html>").unwrap_err();
        let err = ComagicError::from(parse_err);
        assert_eq!(err.code(), Some(TRANSPORT_ERROR_CODE));
        assert!(!err.is_session_expired());
    }

    #[test]
    fn params_error_has_no_code() {
        let err = ComagicError::params("billing_state not in [active, manual_lock]");
        assert_eq!(err.code(), None);
        assert_eq!(err.to_string(), "billing_state not in [active, manual_lock]");
    }
}
