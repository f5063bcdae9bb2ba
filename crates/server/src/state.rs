use std::sync::Arc;

use service::store::Store;
use service::{FruitService, ProviderService};

/// Handles shared by all handlers; both orchestrators sit on the same store.
#[derive(Clone)]
pub struct AppState {
    pub providers: Arc<ProviderService>,
    pub fruits: Arc<FruitService>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            providers: Arc::new(ProviderService::new(Arc::clone(&store))),
            fruits: Arc::new(FruitService::new(store)),
        }
    }
}
