use crate::config::Config;
use engine::BetProcessor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub processor: Arc<BetProcessor>,
}

impl AppState {
    pub fn new(config: Config, processor: Arc<BetProcessor>) -> Self {
        Self {
            config: Arc::new(config),
            processor,
        }
    }
}
