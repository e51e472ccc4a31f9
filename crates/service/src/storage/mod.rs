//! Storage abstractions for the address collection.
//!
//! The HTTP layer never touches a path directly: it is handed a
//! `CollectionStore` that loads and stores the whole ordered collection.

use async_trait::async_trait;

use crate::address::Address;
use crate::errors::ServiceError;

pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;

/// Whole-collection persistence handle.
/// Implementations can be file-backed, in-memory, or remote.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Read the full collection in stored order.
    async fn load(&self) -> Result<Vec<Address>, ServiceError>;
    /// Replace the full collection.
    async fn store(&self, addresses: &[Address]) -> Result<(), ServiceError>;
}
