//! The evaluation pipeline: extract → score → LLM analysis → report, plus the
//! follow-up resume rewrite driven by the retained session.

pub mod evaluator;
pub mod handlers;
pub mod improver;
pub mod prompts;
pub mod report;
pub mod session;

/// Guidance strings returned for user-correctable preconditions.
pub const MISSING_RESUME: &str = "Please upload a resume file.";
pub const MISSING_JOB_DESCRIPTION: &str = "Please provide a job description.";
pub const IMPROVE_REQUIRES_EVALUATION: &str =
    "Please run an evaluation first before generating improvements.";

/// Status line returned alongside a completed evaluation report.
pub const EVALUATION_COMPLETE_STATUS: &str =
    "Evaluation completed! You can now generate an improved resume.";
