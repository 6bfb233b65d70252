use std::sync::Arc;

use ordex_order::OrderOrchestrator;
use ordex_store::OrderStore;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<OrderOrchestrator>,
    pub store: Arc<OrderStore>,
}
