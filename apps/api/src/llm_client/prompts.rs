// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Fills `{name}` placeholders in a prompt template in a single pass.
/// Substituted values are never scanned for placeholders; unknown placeholders are kept.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let substitution = tail[1..].find('}').and_then(|key_len| {
            let key = &tail[1..=key_len];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (key_len, *value))
        });
        match substitution {
            Some((key_len, value)) => {
                out.push_str(value);
                rest = &tail[key_len + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_every_placeholder() {
        let out = fill_template(
            "A={a}; B={b}; A again={a}",
            &[("a", "1"), ("b", "two")],
        );
        assert_eq!(out, "A=1; B=two; A again=1");
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        assert_eq!(fill_template("{x} {y}", &[("x", "ok")]), "ok {y}");
    }

    #[test]
    fn test_fill_template_does_not_expand_placeholders_inside_values() {
        let out = fill_template(
            "skills={skills_json} job={job_text}",
            &[("skills_json", r#"["{job_text}"]"#), ("job_text", "JD")],
        );
        assert_eq!(out, r#"skills=["{job_text}"] job=JD"#);
    }

    #[test]
    fn test_fill_template_keeps_literal_json_braces() {
        let out = fill_template("{\n  \"required\": []\n}\n{text}", &[("text", "T")]);
        assert_eq!(out, "{\n  \"required\": []\n}\nT");
    }
}
