// Application state module
// Shared state handed to every connection task

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;
use crate::store::Store;

/// Application state
pub struct AppState {
    pub config: Config,
    /// In-memory resource tables shared by all controllers
    pub store: Arc<Store>,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            store: Arc::new(Store::new()),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
