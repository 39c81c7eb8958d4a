use std::sync::Arc;
use store::RiskRepository;

#[derive(Clone)]
pub struct AppState {
    pub risks: Arc<RiskRepository>,
}

impl AppState {
    pub fn new(risks: RiskRepository) -> Self {
        Self {
            risks: Arc::new(risks),
        }
    }
}
