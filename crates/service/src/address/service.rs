use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use serde_json::Value;

use super::{id, Address, ID_FIELD};
use crate::errors::ServiceError;
use crate::storage::CollectionStore;

/// The five operations over the address collection.
///
/// Every call loads the collection from the store. Mutations hold `writer`
/// across their load-modify-store cycle so at most one writer is in flight;
/// reads never take it.
pub struct AddressService {
    store: Arc<dyn CollectionStore>,
    writer: Mutex<()>,
}

impl AddressService {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store, writer: Mutex::new(()) }
    }

    /// List all addresses in stored order.
    pub async fn list(&self) -> Result<Vec<Address>, ServiceError> {
        self.store.load().await
    }

    /// First address whose id matches `raw_id`.
    pub async fn get(&self, raw_id: &str) -> Result<Option<Address>, ServiceError> {
        let addresses = self.store.load().await?;
        Ok(addresses.into_iter().find(|a| id::record_matches(a, raw_id)))
    }

    /// Append a new address with a server-assigned id; any client `id` is overwritten.
    pub async fn create(&self, mut fields: Address) -> Result<Address, ServiceError> {
        let _guard = self.writer.lock().await;
        let mut addresses = self.store.load().await?;
        let new_id = id::next_id(&addresses);
        fields.insert(ID_FIELD.to_string(), new_id.into());
        addresses.push(fields.clone());
        self.store.store(&addresses).await?;
        info!(id = new_id, count = addresses.len(), "created address");
        Ok(fields)
    }

    /// Replace the matching address wholesale; the stored `id` value is kept as is.
    pub async fn update(&self, raw_id: &str, mut fields: Address) -> Result<Address, ServiceError> {
        let _guard = self.writer.lock().await;
        let mut addresses = self.store.load().await?;
        let index = id::position(&addresses, raw_id).ok_or_else(|| ServiceError::not_found("address"))?;
        let stored_id = addresses[index].get(ID_FIELD).cloned().unwrap_or(Value::Null);
        fields.insert(ID_FIELD.to_string(), stored_id);
        addresses[index] = fields.clone();
        self.store.store(&addresses).await?;
        info!(id = raw_id, "updated address");
        Ok(fields)
    }

    /// Remove the matching address; returns whether one existed.
    pub async fn delete(&self, raw_id: &str) -> Result<bool, ServiceError> {
        let _guard = self.writer.lock().await;
        let mut addresses = self.store.load().await?;
        let Some(index) = id::position(&addresses, raw_id) else {
            debug!(id = raw_id, "delete of unknown address");
            return Ok(false);
        };
        addresses.remove(index);
        self.store.store(&addresses).await?;
        info!(id = raw_id, count = addresses.len(), "deleted address");
        Ok(true)
    }
}
