use crate::models::Property;
use crate::store::error::StoreError;
use async_trait::async_trait;

/// Remote collection of property records
///
/// Every view talks to the store through this trait, so the HTTP client can be
/// swapped for an in-memory store in tests. Each call is a single attempt.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Read the entire collection, in the order the store returns it
    async fn fetch_all(&self) -> Result<Vec<Property>, StoreError>;

    /// Delete one record by identifier
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Name of the backing store, used in logs
    fn source_name(&self) -> &str;
}
