use std::sync::Arc;

use crate::config::Config;
use crate::db::store::SharedStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: SharedStore, config: Arc<Config>) -> Self {
        Self { store, config }
    }
}
