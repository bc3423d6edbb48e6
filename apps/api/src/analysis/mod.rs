pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod provider;

use bytes::Bytes;

/// A resume file as received in one request. Never stored.
#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Bytes,
    pub file_name: Option<String>,
    /// Declared by the client; logged but not enforced.
    pub content_type: Option<String>,
}

/// Validated form input for a single analysis request.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub resume: Upload,
    pub job_description: String,
}
