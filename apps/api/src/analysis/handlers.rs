//! Axum route handler for the resume analysis endpoint.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::extract::extract_upload;
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::provider::AnalysisProvider;
use crate::analysis::{AnalyzeRequest, Upload};
use crate::errors::AppError;
use crate::state::AppState;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Input(e.body_text()))?;
    let request = read_analyze_form(&mut multipart).await?;
    let analysis = run_analysis(state.provider.as_ref(), request).await?;
    Ok(Json(AnalyzeResponse { analysis }))
}

/// Extract → assemble prompt → invoke provider. The provider's text is
/// returned untouched.
pub async fn run_analysis(
    provider: &dyn AnalysisProvider,
    request: AnalyzeRequest,
) -> Result<String, AppError> {
    let AnalyzeRequest {
        resume,
        job_description,
    } = request;

    info!(
        "Analyzing resume {:?} ({} bytes, declared type {:?})",
        resume.file_name.as_deref().unwrap_or("<unnamed>"),
        resume.bytes.len(),
        resume.content_type.as_deref().unwrap_or("unknown"),
    );

    let resume_text = extract_upload(resume.bytes).await?;
    let prompt = build_analysis_prompt(&resume_text, &job_description);
    debug!("Assembled analysis prompt ({} chars)", prompt.len());

    Ok(provider.analyze(&prompt).await?)
}

/// Reads the `resume` file and `job_description` text out of the form.
/// Other fields are skipped; a repeated field keeps its last value.
async fn read_analyze_form(multipart: &mut Multipart) -> Result<AnalyzeRequest, AppError> {
    let mut resume: Option<Upload> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Input(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().map(str::to_owned);
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Input(format!("Failed to read field '{RESUME_FIELD}': {e}"))
                })?;
                resume = Some(Upload {
                    bytes,
                    file_name,
                    content_type,
                });
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                let text = field.text().await.map_err(|e| {
                    AppError::Input(format!(
                        "Failed to read field '{JOB_DESCRIPTION_FIELD}': {e}"
                    ))
                })?;
                job_description = Some(text);
            }
            other => debug!("Ignoring unexpected form field {other:?}"),
        }
    }

    Ok(AnalyzeRequest {
        resume: resume.ok_or_else(|| missing_field(RESUME_FIELD))?,
        job_description: job_description.ok_or_else(|| missing_field(JOB_DESCRIPTION_FIELD))?,
    })
}

fn missing_field(name: &str) -> AppError {
    AppError::Input(format!("Missing required field: {name}"))
}
