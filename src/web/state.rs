use std::sync::Arc;

use crate::database::ActivityRegistry;

/// Shared handler state. Cloning shares the same registry.
#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Arc<ActivityRegistry>,
}

impl AppState {
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
