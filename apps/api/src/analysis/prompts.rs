// Resume analysis prompt template.

/// Recruitment-analysis prompt. The section headers are requested from the
/// model but never parsed back out of its reply.
const ANALYSIS_PROMPT: &str = r#"
You are a professional Recruitment AI Agent.
Analyze the match between the Job Description and the Resume provided.

JOB DESCRIPTION:
{job_description}

RESUME TEXT:
{resume_text}

Make sure that the response is crisp but accurate.
Please provide the output in this EXACT format:
OVERALL MATCH: [Percentage]%

TECHNICAL GAP ANALYSIS:
- [List specific missing hard skills]

SOFT SKILLS & QUALIFICATIONS:
[Mention gaps]

AI IMPROVEMENT PLAN:
- [Actionable steps]

GRAMMAR & PROFESSIONALISM:
- [Score out of 10]
"#;

const JOB_DESCRIPTION_SLOT: &str = "{job_description}";
const RESUME_TEXT_SLOT: &str = "{resume_text}";

/// Fills the analysis template with the job description and resume text.
///
/// Both inputs are inserted verbatim in one pass over the template, so input
/// text that happens to look like a slot is never expanded again.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    let (head, rest) = split_once(ANALYSIS_PROMPT, JOB_DESCRIPTION_SLOT);
    let (middle, tail) = split_once(rest, RESUME_TEXT_SLOT);

    let mut prompt = String::with_capacity(
        ANALYSIS_PROMPT.len() + resume_text.len() + job_description.len(),
    );
    prompt.push_str(head);
    prompt.push_str(job_description);
    prompt.push_str(middle);
    prompt.push_str(resume_text);
    prompt.push_str(tail);
    prompt
}

// Slots are compile-time constants of the template; a missing slot leaves the
// remainder empty rather than failing.
fn split_once<'a>(text: &'a str, slot: &str) -> (&'a str, &'a str) {
    text.split_once(slot).unwrap_or((text, ""))
}
