use chrono::{DateTime, Utc};

use crate::evaluation::report::Verdict;

/// The result record retained between an evaluation and a later rewrite.
/// Exactly one lives in `AppState`; every successful evaluation replaces it.
#[derive(Debug, Clone)]
pub struct EvaluationSession {
    pub resume_text: String,
    pub job_description: String,
    pub similarity: f64,
    pub verdict: Verdict,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationSession {
    pub fn new(
        resume_text: String,
        job_description: String,
        similarity: f64,
        verdict: Verdict,
    ) -> Self {
        Self {
            resume_text,
            job_description,
            similarity,
            verdict,
            evaluated_at: Utc::now(),
        }
    }
}
