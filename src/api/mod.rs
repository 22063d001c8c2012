//! Endpoint facade: one method per remote operation, grouped by resource.
//!
//! Every method builds its `params`, goes through the session (and its
//! re-authentication loop) and maps the unwrapped result onto a record.

pub mod account;
pub mod campaigns;
pub mod contacts;
pub mod customers;
pub mod employees;
pub mod models;
pub mod payloads;
pub mod reports;
pub mod scenarios;
pub mod schedules;
pub mod sip_lines;
pub mod sites;
pub mod tags;
pub mod virtual_numbers;

use crate::core::config::ComagicConfig;
use crate::core::errors::ComagicError;
use crate::core::kernel::{
    RequestBuilder, ReqwestTransport, RestClientBuilder, RestClientConfig, RpcTransport, Session,
};
use crate::core::record::{Record, Records};
use crate::core::types::{ListOptions, ReportOptions};
use serde_json::Value;
use tracing::instrument;

/// Client for the CoMagic / UIS Data API
#[derive(Debug)]
pub struct Comagic<T: RpcTransport = ReqwestTransport> {
    session: Session<T>,
}

impl Comagic<ReqwestTransport> {
    /// Connect over HTTPS, logging in first when the config carries a login
    pub async fn new(config: ComagicConfig) -> Result<Self, ComagicError> {
        let rest_config = RestClientConfig::default().with_timeout(config.timeout_seconds);
        let transport = RestClientBuilder::new(rest_config).build()?;
        Self::with_transport(transport, &config).await
    }
}

impl<T: RpcTransport> Comagic<T> {
    pub async fn with_transport(transport: T, config: &ComagicConfig) -> Result<Self, ComagicError> {
        Ok(Self {
            session: Session::open(transport, config).await?,
        })
    }

    pub const fn session(&self) -> &Session<T> {
        &self.session
    }

    /// Send a prepared builder and return the unwrapped result as-is
    pub async fn execute(&mut self, builder: RequestBuilder) -> Result<Value, ComagicError> {
        self.session.call(builder).await
    }

    #[instrument(skip(self, options))]
    pub(crate) async fn list<R: Record>(
        &mut self,
        resource: &str,
        options: ListOptions<R>,
    ) -> Result<Records<R>, ComagicError> {
        let builder = options.apply(RequestBuilder::new("get", resource));
        Records::from_result(self.session.call(builder).await?)
    }

    #[instrument(skip(self, options))]
    pub(crate) async fn report<R: Record>(
        &mut self,
        resource: &str,
        options: ReportOptions<R>,
    ) -> Result<Records<R>, ComagicError> {
        let builder = options.apply(RequestBuilder::new("get", resource));
        Records::from_result(self.session.call(builder).await?)
    }
}

/// Map a result that describes one object; a list yields its first element
pub(crate) fn single<R: Record>(result: &Value, method: &str) -> Result<R, ComagicError> {
    match result {
        Value::Array(items) => items.first().map_or_else(
            || Err(ComagicError::transport(format!("{} returned an empty list", method))),
            R::from_raw,
        ),
        other => R::from_raw(other),
    }
}
