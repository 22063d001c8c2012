pub mod api;
pub mod core;

pub use api::models;
pub use api::payloads;
pub use api::Comagic;
pub use crate::core::config::{ComagicConfig, ConfigError, Credentials};
pub use crate::core::errors::{ComagicError, ProtocolError};
pub use crate::core::record::{Field, Record, Records};
pub use crate::core::types::*;
