use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CollectionStore;
use crate::address::Address;
use crate::errors::ServiceError;

/// In-memory collection store.
///
/// Stands in for the file in tests; read and write failures can be switched
/// on to exercise the error paths of callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Vec<Address>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_addresses(addresses: Vec<Address>) -> Self {
        Self { inner: RwLock::new(addresses), ..Self::default() }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current contents, bypassing the failure switches.
    pub async fn snapshot(&self) -> Vec<Address> {
        self.inner.read().await.clone()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Address>, ServiceError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ServiceError::Read("simulated read failure".into()));
        }
        Ok(self.inner.read().await.clone())
    }

    async fn store(&self, addresses: &[Address]) -> Result<(), ServiceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ServiceError::Write("simulated write failure".into()));
        }
        *self.inner.write().await = addresses.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failure_switches_toggle() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        store.store(&[Address::new()]).await?;
        assert_eq!(store.load().await?.len(), 1);

        store.fail_reads(true);
        assert!(matches!(store.load().await, Err(ServiceError::Read(_))));
        store.fail_reads(false);

        store.fail_writes(true);
        assert!(matches!(store.store(&[]).await, Err(ServiceError::Write(_))));
        assert_eq!(store.snapshot().await.len(), 1);
        Ok(())
    }
}
