use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::EventStore;
use crate::utils::error::AppError;

/// Shared application state handed to every handler.
///
/// The store is owned here and nowhere else; handlers take the lock once per
/// request so each operation sees and leaves a consistent collection.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<RwLock<EventStore>>,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, EventStore>, AppError> {
        self.store
            .read()
            .map_err(|_| AppError::InternalServerError("event store lock poisoned (read)".into()))
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, EventStore>, AppError> {
        self.store
            .write()
            .map_err(|_| AppError::InternalServerError("event store lock poisoned (write)".into()))
    }
}
