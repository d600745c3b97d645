use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::evaluation::session::EvaluationSession;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// The most recent evaluation. A single record, overwritten on every
    /// successful evaluate call and read by the improve endpoint.
    pub session: Arc<RwLock<Option<EvaluationSession>>>,
}

impl AppState {
    pub fn new(llm: LlmClient, config: Config) -> Self {
        Self {
            llm,
            config,
            session: Arc::new(RwLock::new(None)),
        }
    }
}
