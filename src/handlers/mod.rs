pub mod catalog;
pub mod estimate;
pub mod health;
pub mod metrics_handler;

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::config::Config;
use crate::pricing::Estimator;

/// Shared state for the estimate routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ArcSwap<Config>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Estimator for the currently loaded profile
    pub fn estimator(&self) -> Estimator {
        Estimator::new(self.config.load().profile.clone())
    }
}
