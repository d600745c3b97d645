//! Scorer/Reporter — the evaluate pipeline.
//!
//! Validate → extract → score → LLM analysis → markdown report. An LLM
//! failure is embedded in the report text rather than failing the request;
//! only validation and extraction failures surface as errors.

use std::path::Path;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::evaluation::prompts::{
    EVALUATION_MAX_TOKENS, EVALUATION_PROMPT_TEMPLATE, EVALUATION_SYSTEM, EVALUATION_TEMPERATURE,
};
use crate::evaluation::report::{classify, render_report, Verdict};
use crate::evaluation::session::EvaluationSession;
use crate::evaluation::{EVALUATION_COMPLETE_STATUS, MISSING_JOB_DESCRIPTION};
use crate::llm_client::LlmClient;
use crate::similarity::similarity_score;

#[derive(Debug)]
pub struct EvaluationOutcome {
    pub report: String,
    pub status: String,
    pub similarity: f64,
    pub verdict: Verdict,
    pub session: EvaluationSession,
}

/// Runs the full evaluation pipeline against an uploaded resume file and a
/// job description. The returned session is the caller's to persist.
pub async fn evaluate_resume(
    llm: &LlmClient,
    pass_threshold: f64,
    resume_path: &Path,
    job_description: &str,
) -> Result<EvaluationOutcome, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(MISSING_JOB_DESCRIPTION.to_string()));
    }

    let resume_text = crate::extractor::extract(resume_path)?;

    let similarity = similarity_score(&resume_text, job_description);
    let verdict = classify(similarity, pass_threshold);
    info!(similarity, ?verdict, "resume scored against job description");

    let prompt = EVALUATION_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_text}", &resume_text)
        .replace("{similarity_score}", &format!("{similarity:.3}"));

    // The raw analysis (or the error) is embedded verbatim in the report.
    let analysis = match llm
        .complete(
            EVALUATION_SYSTEM,
            &prompt,
            EVALUATION_MAX_TOKENS,
            EVALUATION_TEMPERATURE,
        )
        .await
    {
        Ok(text) => text,
        Err(e) => {
            warn!("evaluation call failed, embedding error in report: {e}");
            format!("Error getting GPT-4 evaluation: {e}")
        }
    };

    let report = render_report(verdict, similarity, pass_threshold, &analysis);

    let session = EvaluationSession::new(
        resume_text,
        job_description.to_string(),
        similarity,
        verdict,
    );

    Ok(EvaluationOutcome {
        report,
        status: EVALUATION_COMPLETE_STATUS.to_string(),
        similarity,
        verdict,
        session,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::report::DEFAULT_PASS_THRESHOLD;
    use crate::extractor::ExtractionError;
    use std::io::Write;

    /// An LLM client pointed at a closed port: every call fails fast with a
    /// connection error, exercising the inline-error path without a network.
    fn unreachable_llm() -> LlmClient {
        LlmClient::new(
            "http://127.0.0.1:1/v1/chat/completions".to_string(),
            "test-key".to_string(),
            "gpt-4".to_string(),
        )
    }

    fn docx_fixture(paragraphs: &[&str]) -> tempfile::NamedTempFile {
        use docx_rs::{Docx, Paragraph, Run};

        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();

        let mut file = tempfile::Builder::new()
            .suffix(".docx")
            .tempfile()
            .unwrap();
        file.write_all(buf.get_ref()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_blank_job_description_short_circuits() {
        let file = docx_fixture(&["Python developer"]);
        let err = evaluate_resume(
            &unreachable_llm(),
            DEFAULT_PASS_THRESHOLD,
            file.path(),
            "   \n ",
        )
        .await
        .unwrap_err();

        match err {
            AppError::Validation(msg) => assert_eq!(msg, MISSING_JOB_DESCRIPTION),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unsupported_file_short_circuits_scoring() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"plain text resume").unwrap();

        let err = evaluate_resume(
            &unreachable_llm(),
            DEFAULT_PASS_THRESHOLD,
            file.path(),
            "Looking for a Python backend engineer",
        )
        .await
        .unwrap_err();

        match err {
            AppError::Extraction(ExtractionError::UnsupportedFormat) => {}
            other => panic!("expected unsupported format, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_llm_failure_is_embedded_in_report() {
        let file = docx_fixture(&["Python developer with 5 years experience in backend systems"]);
        let outcome = evaluate_resume(
            &unreachable_llm(),
            DEFAULT_PASS_THRESHOLD,
            file.path(),
            "Looking for a Python backend engineer",
        )
        .await
        .unwrap();

        assert!(outcome
            .report
            .contains("Error getting GPT-4 evaluation: "));
        assert!(outcome.report.starts_with("## ATS Resume Evaluation Results"));
        assert_eq!(outcome.status, EVALUATION_COMPLETE_STATUS);
    }

    #[tokio::test]
    async fn test_session_captures_both_texts_and_score() {
        let file = docx_fixture(&["Python developer with 5 years experience in backend systems"]);
        let jd = "Looking for a Python backend engineer";
        let outcome = evaluate_resume(&unreachable_llm(), DEFAULT_PASS_THRESHOLD, file.path(), jd)
            .await
            .unwrap();

        assert!(outcome.session.resume_text.contains("Python developer"));
        assert_eq!(outcome.session.job_description, jd);
        assert!(outcome.session.similarity > 0.0);
        assert_eq!(outcome.session.similarity, outcome.similarity);
        assert_eq!(outcome.session.verdict, outcome.verdict);
    }

    #[tokio::test]
    async fn test_report_embeds_three_decimal_score() {
        let file = docx_fixture(&["rust engineer"]);
        let outcome = evaluate_resume(
            &unreachable_llm(),
            DEFAULT_PASS_THRESHOLD,
            file.path(),
            "rust engineer",
        )
        .await
        .unwrap();

        // Identical vocabulary: score 1.0, rendered as 1.000, a pass
        assert!(outcome.report.contains("Similarity Score: 1.000"));
        assert_eq!(outcome.verdict, Verdict::Pass);
    }
}
