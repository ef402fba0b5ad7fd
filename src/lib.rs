//! Property listing views: owner dashboard, search panel and team gallery,
//! backed by a remote property store.

pub mod config;
pub mod models;
pub mod notify;
pub mod query;
pub mod render;
pub mod store;
pub mod views;

pub use config::AppConfig;
pub use models::{Property, UserId};
pub use store::{HttpPropertyStore, PropertyStore, StoreConfig, StoreError};
