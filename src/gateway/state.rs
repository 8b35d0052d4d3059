use std::sync::Arc;

use crate::orchestrator::Prioritizer;
use crate::project::Project;
use crate::reorder::RankingStrategy;

#[derive(Clone)]
pub struct HandlerState {
    pub prioritizer: Prioritizer,

    pub catalog: Arc<Vec<Project>>,

    pub model_name: Arc<str>,

    pub strategy: RankingStrategy,
}

impl HandlerState {
    pub fn new(
        prioritizer: Prioritizer,
        catalog: Vec<Project>,
        model_name: impl Into<Arc<str>>,
        strategy: RankingStrategy,
    ) -> Self {
        Self {
            prioritizer,
            catalog: Arc::new(catalog),
            model_name: model_name.into(),
            strategy,
        }
    }
}

impl std::fmt::Debug for HandlerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerState")
            .field("prioritizer", &self.prioritizer)
            .field("catalog_len", &self.catalog.len())
            .field("model_name", &self.model_name)
            .field("strategy", &self.strategy)
            .finish()
    }
}
