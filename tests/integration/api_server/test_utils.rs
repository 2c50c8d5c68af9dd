//! Test utilities for API server integration tests

use axum_test::TestServer;
use signaldesk::core::http::{create_router, AppState};
use signaldesk::metrics::Metrics;
use signaldesk::strategies::StrategyRegistry;
use std::sync::Arc;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    pub async fn new() -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState::new(StrategyRegistry::new(), metrics.clone());

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server, metrics }
    }
}
