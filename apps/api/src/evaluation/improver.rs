//! Rewriter — produces an improved resume from the retained session and
//! writes it to a downloadable plain-text file.

use std::io::Write;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::evaluation::prompts::{
    IMPROVE_MAX_TOKENS, IMPROVE_PROMPT_TEMPLATE, IMPROVE_SYSTEM, IMPROVE_TEMPERATURE,
};
use crate::evaluation::session::EvaluationSession;
use crate::llm_client::LlmClient;

#[derive(Debug)]
pub struct ImproveOutcome {
    pub improved_resume: String,
    pub download_path: Option<PathBuf>,
}

/// Rewrites the session's resume against its job description. On LLM failure
/// the error text is returned in place of the resume and no file is written.
pub async fn improve_resume(
    llm: &LlmClient,
    session: &EvaluationSession,
) -> Result<ImproveOutcome, AppError> {
    let prompt = IMPROVE_PROMPT_TEMPLATE
        .replace("{job_description}", &session.job_description)
        .replace("{resume_text}", &session.resume_text);

    let improved = match llm
        .complete(
            IMPROVE_SYSTEM,
            &prompt,
            IMPROVE_MAX_TOKENS,
            IMPROVE_TEMPERATURE,
        )
        .await
    {
        Ok(text) => text,
        Err(e) => {
            warn!("resume rewrite failed: {e}");
            return Ok(ImproveOutcome {
                improved_resume: format!("Error generating improved resume: {e}"),
                download_path: None,
            });
        }
    };

    let path = write_download_file(&improved).map_err(AppError::Internal)?;
    info!(path = %path.display(), "improved resume written");

    Ok(ImproveOutcome {
        improved_resume: improved,
        download_path: Some(path),
    })
}

/// Persists the rewritten resume to a temp file the caller can serve for
/// download. The file is deliberately kept; cleanup is left to the OS temp
/// directory policy.
fn write_download_file(contents: &str) -> anyhow::Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("improved_resume_")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(contents.as_bytes())?;
    let (_, path) = file.keep()?;
    Ok(path)
}
