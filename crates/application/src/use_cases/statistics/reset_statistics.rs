use crate::ports::StatisticsStore;
use std::sync::Arc;
use tracing::info;

/// Use case: discard all collected statistics
pub struct ResetStatisticsUseCase {
    store: Arc<dyn StatisticsStore>,
}

impl ResetStatisticsUseCase {
    pub fn new(store: Arc<dyn StatisticsStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> usize {
        let cleared = self.store.drain().await.len();
        info!(cleared, "Statistics reset");
        cleared
    }
}
