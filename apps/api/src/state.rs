use std::sync::Arc;

use crate::analysis::provider::AnalysisProvider;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analysis backend. Default: the Gemini `LlmClient`.
    pub provider: Arc<dyn AnalysisProvider>,
    pub config: Config,
}
