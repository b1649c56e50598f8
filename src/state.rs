//! Shared application state for all routes.

use crate::store::CadastroStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CadastroStore>,
}

impl AppState {
    pub fn new(store: impl CadastroStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
