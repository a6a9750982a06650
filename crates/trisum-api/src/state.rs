use std::sync::Arc;

use crate::config::Config;
use crate::service::Summarizer;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    pub fn new(config: Config, summarizer: Summarizer) -> Self {
        Self {
            config: Arc::new(config),
            summarizer: Arc::new(summarizer),
        }
    }
}
