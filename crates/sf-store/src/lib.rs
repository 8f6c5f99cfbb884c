//! Persistence layer for sf-core space fields: a single-slot SQLite store
//! plus the optional config file for layout tunables.

pub mod config;
pub mod error;
pub mod schema;
pub mod store;

pub use config::{EngineConfig, default_base_dir};
pub use error::{Result, StoreError};
pub use store::{MODEL_KEY, Store};
