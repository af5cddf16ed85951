//! Application context shared across route handlers.
//!
//! [`AppContext`] is cloned into every handler via Axum state. It holds the
//! process's single [`PhotoStore`] and the configuration it was built from,
//! both behind `Arc`s so clones are cheap.

use std::sync::Arc;

use pb_core::config::Config;
use pb_store::PhotoStore;

#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<PhotoStore>,
    pub config: Arc<Config>,
}

impl AppContext {
    /// Build a context with a fresh, empty store sized from `config`.
    pub fn new(config: Config) -> Self {
        let store = PhotoStore::with_capacity(config.store.initial_capacity);
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
