pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use error::StoreError;
pub use http::HttpPropertyStore;
pub use traits::PropertyStore;
pub use types::StoreConfig;
