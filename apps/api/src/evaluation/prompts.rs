// All LLM prompt constants for the evaluation module, with the per-call
// output bounds and sampling temperatures that go with them.

/// System prompt for the evaluation call.
pub const EVALUATION_SYSTEM: &str = "You are an expert ATS analyzer and resume consultant \
    with extensive experience in recruitment and resume optimization.";

/// Evaluation prompt template.
/// Replace: {job_description}, {resume_text}, {similarity_score}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"As an expert ATS analyzer and resume consultant, please evaluate how well this resume matches the job description.

Job Description:
{job_description}

Resume:
{resume_text}

Cosine Similarity Score: {similarity_score}

Please provide:
1. Overall ATS Score (0-100)
2. Key strengths of the resume
3. Missing keywords and skills
4. Specific improvement recommendations
5. ATS optimization suggestions

Format your response clearly with headings and bullet points."#;

/// Low temperature: the evaluation should be near-deterministic.
pub const EVALUATION_MAX_TOKENS: u32 = 1500;
pub const EVALUATION_TEMPERATURE: f32 = 0.3;

/// System prompt for the rewrite call.
pub const IMPROVE_SYSTEM: &str = "You are an expert resume writer and ATS optimization \
    specialist with proven success in helping candidates get interviews.";

/// Rewrite prompt template.
/// Replace: {job_description}, {resume_text}
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"As an expert resume writer and ATS optimization specialist, please rewrite and improve this resume to better match the job description.

Job Description:
{job_description}

Original Resume:
{resume_text}

Please:
1. Incorporate relevant keywords from the job description
2. Restructure content for better ATS compatibility
3. Enhance bullet points with quantifiable achievements
4. Optimize formatting and sections
5. Maintain factual accuracy while improving presentation
6. Add relevant skills that align with the job requirements

Provide the complete improved resume in a professional format."#;

/// The rewrite returns a full document, so it gets a larger output bound and
/// a moderately higher temperature than the evaluation.
pub const IMPROVE_MAX_TOKENS: u32 = 2000;
pub const IMPROVE_TEMPERATURE: f32 = 0.4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_template_has_all_placeholders() {
        for placeholder in ["{job_description}", "{resume_text}", "{similarity_score}"] {
            assert!(
                EVALUATION_PROMPT_TEMPLATE.contains(placeholder),
                "missing {placeholder}"
            );
        }
    }

    #[test]
    fn test_improve_template_has_all_placeholders() {
        for placeholder in ["{job_description}", "{resume_text}"] {
            assert!(
                IMPROVE_PROMPT_TEMPLATE.contains(placeholder),
                "missing {placeholder}"
            );
        }
    }
}
