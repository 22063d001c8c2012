//! Transport kernel for the JSON-RPC Data API.
//!
//! Three layers, leaf-first:
//!
//! - [`envelope`]: builds request envelopes and unwraps responses
//! - [`rest`]: posts envelopes over HTTP (`RpcTransport`, `ReqwestTransport`)
//! - [`session`]: owns the session token and re-authenticates on expiry
//!
//! ```rust,no_run
//! use comagic::core::config::ComagicConfig;
//! use comagic::core::kernel::{RequestBuilder, ReqwestTransport, RestClientConfig, Session};
//!
//! # async fn example() -> Result<(), comagic::ComagicError> {
//! let config = ComagicConfig::with_login("login", "password");
//! let transport = ReqwestTransport::new(RestClientConfig::default())?;
//! let mut session = Session::open(transport, &config).await?;
//!
//! let tags = session
//!     .call(RequestBuilder::new("get", "tags").param("limit", Some(10)))
//!     .await?;
//! println!("{}", tags);
//! # Ok(())
//! # }
//! ```
pub mod envelope;
pub mod rest;
pub mod session;

// Re-export key types for convenience
pub use envelope::{unwrap_data, RequestBuilder, RpcRequest, RpcResponse};
pub use rest::{ReqwestTransport, RestClientBuilder, RestClientConfig, RpcTransport};
pub use session::{Session, MAX_ATTEMPTS};
