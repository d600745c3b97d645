//! Verdict classification and the markdown report template.

use serde::Serialize;

/// Default pass threshold; overridable via the `PASS_THRESHOLD` env variable.
pub const DEFAULT_PASS_THRESHOLD: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn marker(&self) -> &'static str {
        match self {
            Verdict::Pass => "\u{2705} PASS",
            Verdict::Fail => "\u{274C} FAIL",
        }
    }
}

/// A score at or above the threshold passes; the boundary itself is a pass.
pub fn classify(score: f64, threshold: f64) -> Verdict {
    if score >= threshold {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

/// Assembles the final markdown report: verdict marker, the score to three
/// decimals, and the analysis text (or inline LLM error) verbatim.
pub fn render_report(verdict: Verdict, score: f64, threshold: f64, analysis: &str) -> String {
    format!(
        "## ATS Resume Evaluation Results\n\
         \n\
         ### {}\n\
         **Similarity Score: {:.3} (Threshold: {:.2})**\n\
         \n\
         ### Detailed Analysis\n\
         {}\n",
        verdict.marker(),
        score,
        threshold,
        analysis
    )
}
