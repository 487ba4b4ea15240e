//! Shared application state.
//!
//! Holds the process-wide storage handle, built once at startup and reused
//! by every request.

use std::sync::Arc;

use visitor_core::CounterStore;

use crate::config::VisitorConfig;
use crate::obs::VisitorMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<dyn CounterStore>,
}

struct AppStateInner {
    cfg: VisitorConfig,
    metrics: VisitorMetrics,
}

impl AppState {
    pub fn new(cfg: VisitorConfig, store: Arc<dyn CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: VisitorMetrics::default(),
            }),
            store,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.inner.cfg.storage.table_name
    }

    pub fn store(&self) -> Arc<dyn CounterStore> {
        Arc::clone(&self.store)
    }

    pub fn metrics(&self) -> &VisitorMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }
}
