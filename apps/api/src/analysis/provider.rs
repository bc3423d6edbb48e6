//! Analysis provider — the seam between the request handler and the
//! external text-generation service.
//!
//! `AppState` holds an `Arc<dyn AnalysisProvider>`; production wires in
//! `LlmClient`, tests wire in fakes.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};

/// Turns an assembled prompt into the provider's raw text reply.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl AnalysisProvider for LlmClient {
    async fn analyze(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(prompt).await
    }
}
