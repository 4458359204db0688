// All LLM prompt constants for the skills module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for skill enrichment. It enforces a bare JSON array.
pub const ENRICH_SYSTEM: &str = "You are an expert technical recruiter. \
    You extract skills from resumes and job descriptions. \
    You MUST respond with a JSON array of strings only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Enrichment prompt template. Replace `{text}` before sending.
pub const ENRICH_PROMPT_TEMPLATE: &str = r#"Extract all key skills, technologies, and qualifications from the following text.
Return the result as a clean JSON array of strings, like ["Skill A", "Skill B", "Technology C"].

Rules:
- One entry per distinct skill; use the shortest common name ("PostgreSQL", not "experience with PostgreSQL databases")
- Include soft skills only when the text names them explicitly
- Do NOT invent skills that are not supported by the text

TEXT:
{text}"#;

/// Classification prompt template.
/// Replace: {skills_json}, {job_text}
pub const CLASSIFY_PROMPT_TEMPLATE: &str = r#"Classify each skill below by how the job description treats it.

Return a JSON object with this EXACT schema (no extra fields):
{
  "required": ["python"],
  "preferred": ["kubernetes"],
  "soft": ["communication"]
}

Rules:
- "required": the job uses mandatory language for it ("required", "must have", "you will need", minimum years)
- "preferred": the job uses optional language ("preferred", "nice to have", "bonus", "a plus")
- "soft": interpersonal or non-technical skills (communication, leadership, teamwork, ...)
- Put every skill in exactly ONE bucket
- Use the skill strings EXACTLY as given; do not rename, merge or add skills
- When the job text gives no signal for a technical skill, put it in "required"

SKILLS:
{skills_json}

JOB DESCRIPTION:
{job_text}"#;
