use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::store::{Store, StoreError};

/// Cloneable handle to a store shared between callers.
///
/// The store itself assumes one logical actor, so every handle funnels
/// through a single reader-writer lock: mutations are exclusive, reads may
/// overlap. A poisoned lock is recovered rather than propagated — every
/// operation validates before mutating, so a panic can never leave the
/// tree half-updated.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    pub fn new() -> Self {
        SharedStore {
            inner: Arc::new(RwLock::new(Store::new())),
        }
    }

    pub fn mkdir(&self, path: &str) -> Result<(), StoreError> {
        self.write_lock().mkdir(path)
    }

    pub fn write_file(&self, path: &str, content: impl Into<String>) -> Result<(), StoreError> {
        self.write_lock().write_file(path, content)
    }

    pub fn read_file(&self, path: &str) -> Result<String, StoreError> {
        self.read_lock().read_file(path)
    }

    pub fn ls(&self, path: &str) -> Result<Vec<String>, StoreError> {
        self.read_lock().ls(path)
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
