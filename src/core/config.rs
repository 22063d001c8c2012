use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};
use std::env;

pub const COMAGIC_API_URL: &str = "https://dataapi.comagic.ru/v2.0";
pub const UIS_API_URL: &str = "https://dataapi.uiscom.ru/v2.0";

/// How the client obtains its session token
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Exchanged for a token through `login.user`, and again whenever it expires
    Login {
        login: String,
        password: Secret<String>,
    },
    /// Used as-is; never refreshed
    Token(Secret<String>),
}

#[derive(Debug, Clone)]
pub struct ComagicConfig {
    pub credentials: Credentials,
    pub use_alternate_host: bool,
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ComagicConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ComagicConfig", 5)?;
        match &self.credentials {
            Credentials::Login { login, .. } => {
                state.serialize_field("login", login)?;
                state.serialize_field("password", "[REDACTED]")?;
            }
            Credentials::Token(_) => {
                state.serialize_field("token", "[REDACTED]")?;
            }
        }
        state.serialize_field("use_alternate_host", &self.use_alternate_host)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("timeout_seconds", &self.timeout_seconds)?;
        state.end()
    }
}

impl ComagicConfig {
    /// Authenticate with account login and password
    #[must_use]
    pub fn with_login(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::Login {
            login: login.into(),
            password: Secret::new(password.into()),
        })
    }

    /// Use a pre-issued access token, skipping `login.user`
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::Token(Secret::new(token.into())))
    }

    fn from_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            use_alternate_host: false,
            base_url: None,
            timeout_seconds: 30,
        }
    }

    /// Build from loosely supplied parameters.
    ///
    /// Exactly one of `login` + `password` or `token` must be present; empty
    /// strings count as missing.
    pub fn from_parts(
        login: Option<String>,
        password: Option<String>,
        token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let login = login.filter(|s| !s.is_empty());
        let password = password.filter(|s| !s.is_empty());
        let token = token.filter(|s| !s.is_empty());

        match (login, password, token) {
            (Some(login), Some(password), None) => Ok(Self::with_login(login, password)),
            (None, None, Some(token)) => Ok(Self::with_token(token)),
            (None, None, None) => Err(ConfigError::MissingCredentials),
            (_, _, Some(_)) => Err(ConfigError::AmbiguousCredentials),
            _ => Err(ConfigError::IncompleteLogin),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_LOGIN` and `{PREFIX}_PASSWORD`, or `{PREFIX}_TOKEN`
    /// - `{PREFIX}_UIS` (optional, defaults to false)
    /// - `{PREFIX}_BASE_URL` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let var = |name: &str| env::var(format!("{}_{}", prefix, name)).ok();

        let mut config = Self::from_parts(var("LOGIN"), var("PASSWORD"), var("TOKEN"))?;

        config.use_alternate_host = var("UIS")
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);
        config.base_url = var("BASE_URL");

        Ok(config)
    }

    /// Create configuration from .env file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // no file, fall back to the process environment
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// `from_env_file` when the `env-file` feature is on, `from_env` otherwise
    pub fn load(prefix: &str) -> Result<Self, ConfigError> {
        #[cfg(feature = "env-file")]
        {
            Self::from_env_file(prefix)
        }
        #[cfg(not(feature = "env-file"))]
        {
            Self::from_env(prefix)
        }
    }

    /// Select the UIS host instead of the CoMagic one
    #[must_use]
    pub const fn use_alternate_host(mut self, use_alternate_host: bool) -> Self {
        self.use_alternate_host = use_alternate_host;
        self
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Endpoint every envelope is posted to
    pub fn api_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            if self.use_alternate_host {
                UIS_API_URL.to_string()
            } else {
                COMAGIC_API_URL.to_string()
            }
        })
    }

    pub fn has_login(&self) -> bool {
        matches!(self.credentials, Credentials::Login { .. })
    }

    /// Pre-issued token, if configured (use carefully - exposes secret)
    pub fn token(&self) -> Option<&str> {
        match &self.credentials {
            Credentials::Token(token) => Some(token.expose_secret()),
            Credentials::Login { .. } => None,
        }
    }

    /// Reject credentials that cannot authenticate: an empty token, or a
    /// login with an empty half
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.credentials {
            Credentials::Token(token) if token.expose_secret().is_empty() => {
                Err(ConfigError::MissingCredentials)
            }
            Credentials::Token(_) => Ok(()),
            Credentials::Login { login, password } => {
                match (login.is_empty(), password.expose_secret().is_empty()) {
                    (false, false) => Ok(()),
                    (true, true) => Err(ConfigError::MissingCredentials),
                    _ => Err(ConfigError::IncompleteLogin),
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("miss auth params login and password or token")]
    MissingCredentials,

    #[error("both login/password and token supplied; use exactly one")]
    AmbiguousCredentials,

    #[error("login and password must be supplied together")]
    IncompleteLogin,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn login_and_password_select_login_credentials() {
        let config = ComagicConfig::from_parts(some("user"), some("secret"), None).unwrap();
        assert!(config.has_login());
        assert_eq!(config.token(), None);
    }

    #[test]
    fn token_alone_is_accepted() {
        let config = ComagicConfig::from_parts(None, None, some("abc")).unwrap();
        assert_eq!(config.token(), Some("abc"));
    }

    #[test]
    fn construction_requires_exactly_one_credential_kind() {
        assert!(matches!(
            ComagicConfig::from_parts(None, None, None),
            Err(ConfigError::MissingCredentials)
        ));
        assert!(matches!(
            ComagicConfig::from_parts(some("user"), None, None),
            Err(ConfigError::IncompleteLogin)
        ));
        assert!(matches!(
            ComagicConfig::from_parts(some("user"), some("secret"), some("abc")),
            Err(ConfigError::AmbiguousCredentials)
        ));
        assert!(matches!(
            ComagicConfig::from_parts(Some(String::new()), Some(String::new()), None),
            Err(ConfigError::MissingCredentials)
        ));
    }

    #[test]
    fn empty_credentials_from_direct_constructors_are_rejected() {
        assert!(matches!(
            ComagicConfig::with_token("").validate(),
            Err(ConfigError::MissingCredentials)
        ));
        assert!(matches!(
            ComagicConfig::with_login("", "").validate(),
            Err(ConfigError::MissingCredentials)
        ));
        assert!(matches!(
            ComagicConfig::with_login("user", "").validate(),
            Err(ConfigError::IncompleteLogin)
        ));
        assert!(matches!(
            ComagicConfig::with_login("", "secret").validate(),
            Err(ConfigError::IncompleteLogin)
        ));
        assert!(ComagicConfig::with_login("user", "secret").validate().is_ok());
        assert!(ComagicConfig::with_token("abc").validate().is_ok());
    }

    #[test]
    fn load_reads_process_environment() {
        env::set_var("COMAGIC_LOAD_CHECK_TOKEN", "abc");
        env::set_var("COMAGIC_LOAD_CHECK_UIS", "true");
        let config = ComagicConfig::load("comagic_load_check").unwrap();
        assert_eq!(config.token(), Some("abc"));
        assert_eq!(config.api_url(), UIS_API_URL);
    }

    #[test]
    fn host_selection() {
        assert_eq!(ComagicConfig::with_token("t").api_url(), COMAGIC_API_URL);
        assert_eq!(
            ComagicConfig::with_token("t").use_alternate_host(true).api_url(),
            UIS_API_URL
        );
        assert_eq!(
            ComagicConfig::with_token("t")
                .use_alternate_host(true)
                .base_url("http://127.0.0.1:9000")
                .api_url(),
            "http://127.0.0.1:9000"
        );
    }

    #[test]
    fn serialization_redacts_secrets() {
        let json = serde_json::to_string(&ComagicConfig::with_login("user", "hunter2")).unwrap();
        assert!(json.contains("\"login\":\"user\""));
        assert!(!json.contains("hunter2"));

        let json = serde_json::to_string(&ComagicConfig::with_token("abc")).unwrap();
        assert!(!json.contains("abc"));
    }
}
