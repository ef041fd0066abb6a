//! Shared application state

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::services::{CommandService, Shutdown};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::CharacterStore;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// Characters loaded at startup. Handlers take the read lock; anything that
    /// mutates an inventory must take the write lock.
    pub store: Arc<RwLock<CharacterStore>>,
    pub shutdown: Shutdown,
    // Application services
    pub command_service: CommandService,
}

impl AppState {
    pub fn new(config: AppConfig, store: CharacterStore) -> Self {
        let store = Arc::new(RwLock::new(store));
        let shutdown = Shutdown::new();
        let command_service = CommandService::new(store.clone(), shutdown.clone());

        Self {
            config,
            store,
            shutdown,
            command_service,
        }
    }
}
