use crate::core::config::{ComagicConfig, Credentials};
use crate::core::errors::{ComagicError, ProtocolError};
use crate::core::kernel::envelope::{RequestBuilder, RpcRequest, RpcResponse};
use crate::core::kernel::rest::RpcTransport;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Upper bound on submissions of one envelope, counting the first.
pub const MAX_ATTEMPTS: u32 = 4;

/// Live connection to the API: transport, endpoint and the current token.
///
/// Every call that may refresh the token takes `&mut self`, so a session is
/// driven by one caller at a time. Share it across tasks only behind a lock.
pub struct Session<T: RpcTransport> {
    transport: T,
    api_url: String,
    credentials: Credentials,
    access_token: Secret<String>,
    request_counter: u64,
}

impl<T: RpcTransport> std::fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api_url", &self.api_url)
            .field("can_reauthenticate", &self.can_reauthenticate())
            .field("request_counter", &self.request_counter)
            .finish_non_exhaustive()
    }
}

impl<T: RpcTransport> Session<T> {
    /// Open a session, logging in unless a token was supplied
    pub async fn open(transport: T, config: &ComagicConfig) -> Result<Self, ComagicError> {
        config.validate()?;

        let access_token = match &config.credentials {
            Credentials::Token(token) => token.clone(),
            Credentials::Login { .. } => Secret::new(String::new()),
        };

        let mut session = Self {
            transport,
            api_url: config.api_url(),
            credentials: config.credentials.clone(),
            access_token,
            request_counter: 0,
        };

        if session.can_reauthenticate() {
            session.authenticate().await?;
        }

        Ok(session)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Current session token (use carefully - exposes secret)
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    pub const fn can_reauthenticate(&self) -> bool {
        matches!(self.credentials, Credentials::Login { .. })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exchange login and password for a fresh token via `login.user`
    #[instrument(skip(self), fields(url = %self.api_url))]
    pub async fn authenticate(&mut self) -> Result<(), ComagicError> {
        let Credentials::Login { login, password } = &self.credentials else {
            return Err(ComagicError::params(
                "session was opened with a token; there are no credentials to log in with",
            ));
        };

        let builder = RequestBuilder::new("login", "user")
            .require("login", login)
            .require("password", password.expose_secret());
        let request_id = self.next_request_id(&builder);
        let request = builder.build(None, request_id)?;

        let result = self.send_once(&request).await?;
        let token = result
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| ProtocolError::transport("login.user result has no access_token"))?;

        self.access_token = Secret::new(token.to_string());
        info!("Obtained session token");
        Ok(())
    }

    /// Send one operation, re-authenticating on session expiry.
    ///
    /// The same envelope is resubmitted with the refreshed token, at most
    /// `MAX_ATTEMPTS` submissions in total.
    #[instrument(skip(self, builder), fields(method = %builder.method()))]
    pub async fn call(&mut self, builder: RequestBuilder) -> Result<Value, ComagicError> {
        let request_id = self.next_request_id(&builder);
        let mut request = builder.build(Some(self.access_token()), request_id)?;

        let mut attempt = 1;
        loop {
            match self.send_once(&request).await {
                Err(err)
                    if err.is_session_expired()
                        && attempt < MAX_ATTEMPTS
                        && self.can_reauthenticate() =>
                {
                    warn!(attempt, "Session token expired, logging in again");
                    self.authenticate().await?;
                    request.set_access_token(self.access_token());
                    attempt += 1;
                }
                outcome => return outcome,
            }
        }
    }

    async fn send_once(&self, request: &RpcRequest) -> Result<Value, ComagicError> {
        debug!(method = %request.method, id = %request.id, "Sending request");
        let body = self.transport.post(&self.api_url, request).await?;
        let response: RpcResponse = serde_json::from_value(body)?;
        Ok(response.into_result()?)
    }

    fn next_request_id(&mut self, builder: &RequestBuilder) -> String {
        self.request_counter += 1;
        format!(
            "req_{}_{}_{}",
            builder.method().replace('.', "_"),
            chrono::Utc::now().timestamp_millis(),
            self.request_counter
        )
    }
}
