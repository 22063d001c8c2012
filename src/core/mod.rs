pub mod config;
pub mod errors;
pub mod kernel;
pub mod record;
pub mod types;
