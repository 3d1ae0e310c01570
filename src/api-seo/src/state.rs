use std::sync::Arc;

use core_seo::DiscoveryProvider;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<DiscoveryProvider>,
}

impl AppState {
    pub fn new(provider: Arc<DiscoveryProvider>) -> Self {
        Self { provider }
    }
}
