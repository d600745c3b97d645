//! Axum route handlers for the evaluation API.

use std::io::Write;
use std::path::{Path, PathBuf};

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::evaluation::evaluator::evaluate_resume;
use crate::evaluation::improver::improve_resume;
use crate::evaluation::report::Verdict;
use crate::evaluation::{MISSING_JOB_DESCRIPTION, MISSING_RESUME};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub report: String,
    pub status: String,
    pub similarity_score: f64,
    pub verdict: Verdict,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub improved_resume: String,
    pub download_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub similarity_score: f64,
    pub verdict: Verdict,
    pub resume_chars: usize,
    pub job_description_chars: usize,
    pub evaluated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/evaluate
///
/// Multipart form: `resume` file part (PDF or DOCX), `job_description` text
/// part. Runs the full pipeline and replaces the retained session.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EvaluateResponse>, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        // `bytes()`/`text()` consume the field, so copy the metadata out first
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?;
                resume = Some((file_name, data));
            }
            "job_description" => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?;
            }
            _ => {}
        }
    }

    let (file_name, data) = resume
        .filter(|(_, data)| !data.is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_RESUME.to_string()))?;
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(MISSING_JOB_DESCRIPTION.to_string()));
    }

    // Stage the upload under its original extension so the extractor can
    // dispatch on it.
    let staged = stage_upload(&file_name, &data).map_err(AppError::Internal)?;

    let outcome = evaluate_resume(
        &state.llm,
        state.config.pass_threshold,
        staged.path(),
        &job_description,
    )
    .await?;

    *state.session.write().await = Some(outcome.session);

    Ok(Json(EvaluateResponse {
        report: outcome.report,
        status: outcome.status,
        similarity_score: outcome.similarity,
        verdict: outcome.verdict,
    }))
}

/// POST /api/v1/improve
///
/// Rewrites the most recently evaluated resume. 409 if nothing has been
/// evaluated yet.
pub async fn handle_improve(
    State(state): State<AppState>,
) -> Result<Json<ImproveResponse>, AppError> {
    let session = state
        .session
        .read()
        .await
        .clone()
        .ok_or(AppError::EvaluationRequired)?;

    let outcome = improve_resume(&state.llm, &session).await?;

    Ok(Json(ImproveResponse {
        improved_resume: outcome.improved_resume,
        download_path: outcome.download_path,
    }))
}

/// GET /api/v1/session
///
/// Snapshot of the last evaluation without echoing the full texts back.
pub async fn handle_get_session(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let guard = state.session.read().await;
    let session = guard
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No evaluation has been run yet".to_string()))?;

    Ok(Json(SessionSnapshot {
        similarity_score: session.similarity,
        verdict: session.verdict,
        resume_chars: session.resume_text.chars().count(),
        job_description_chars: session.job_description.chars().count(),
        evaluated_at: session.evaluated_at,
    }))
}

/// Writes uploaded bytes to a temp file that keeps the upload's extension.
fn stage_upload(file_name: &str, data: &[u8]) -> anyhow::Result<tempfile::NamedTempFile> {
    let suffix = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    let mut file = tempfile::Builder::new()
        .prefix("resume_upload_")
        .suffix(&suffix)
        .tempfile()?;
    file.write_all(data)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::evaluation::session::EvaluationSession;
    use crate::evaluation::IMPROVE_REQUIRES_EVALUATION;
    use crate::llm_client::LlmClient;

    fn test_state() -> AppState {
        let config = Config {
            openai_api_key: "test-key".to_string(),
            openai_api_url: "http://127.0.0.1:1/v1/chat/completions".to_string(),
            openai_model: "gpt-4".to_string(),
            pass_threshold: 0.30,
            port: 0,
            rust_log: "info".to_string(),
        };
        let llm = LlmClient::new(
            config.openai_api_url.clone(),
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        );
        AppState::new(llm, config)
    }

    #[test]
    fn test_stage_upload_keeps_extension() {
        let staged = stage_upload("My Resume.PDF", b"%PDF-1.4").unwrap();
        let name = staged.path().file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("resume_upload_"), "name was {name}");
        assert!(name.ends_with(".PDF"), "name was {name}");
        assert_eq!(std::fs::read(staged.path()).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn test_stage_upload_without_extension() {
        let staged = stage_upload("resume", b"bytes").unwrap();
        let name = staged.path().file_name().unwrap().to_string_lossy();
        assert!(!name.contains('.'), "name was {name}");
    }

    #[tokio::test]
    async fn test_improve_before_evaluate_is_rejected() {
        let state = test_state();
        let err = handle_improve(State(state)).await.unwrap_err();
        assert!(matches!(err, AppError::EvaluationRequired));
        // The response body carries the fixed guidance string
        assert_eq!(
            IMPROVE_REQUIRES_EVALUATION,
            "Please run an evaluation first before generating improvements."
        );
    }

    #[tokio::test]
    async fn test_session_endpoint_reports_latest_evaluation() {
        let state = test_state();
        *state.session.write().await = Some(EvaluationSession::new(
            "resume text".to_string(),
            "job description".to_string(),
            0.5,
            Verdict::Pass,
        ));

        let Json(snapshot) = handle_get_session(State(state)).await.unwrap();
        assert_eq!(snapshot.similarity_score, 0.5);
        assert_eq!(snapshot.verdict, Verdict::Pass);
        assert_eq!(snapshot.resume_chars, "resume text".len());
    }

    #[tokio::test]
    async fn test_session_overwrite_reflects_latest_pair() {
        let state = test_state();
        *state.session.write().await = Some(EvaluationSession::new(
            "first resume".to_string(),
            "first jd".to_string(),
            0.2,
            Verdict::Fail,
        ));
        *state.session.write().await = Some(EvaluationSession::new(
            "second resume".to_string(),
            "second jd".to_string(),
            0.6,
            Verdict::Pass,
        ));

        let guard = state.session.read().await;
        let session = guard.as_ref().unwrap();
        assert_eq!(session.job_description, "second jd");
        assert_eq!(session.verdict, Verdict::Pass);
    }
}
