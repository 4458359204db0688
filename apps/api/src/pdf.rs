//! Résumé PDF → plain text.
//!
//! `pdf-extract` is CPU-bound, so extraction runs inside `tokio::task::spawn_blocking`.

use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;

pub async fn extract_text_from_pdf(content: Bytes) -> Result<String, AppError> {
    if content.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let joined =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&content)).await;

    let text = match joined {
        Ok(extracted) => {
            extracted.map_err(|e| AppError::Validation(format!("Could not process PDF: {e}")))?
        }
        // pdf-extract panics on some malformed documents (e.g. undefined fonts).
        Err(e) if e.is_panic() => {
            warn!("PDF extraction panicked: {e}");
            return Err(AppError::Validation(
                "Could not process PDF: malformed or unsupported document".to_string(),
            ));
        }
        Err(e) => {
            return Err(AppError::Internal(anyhow::anyhow!(
                "spawn_blocking failed in PDF extraction: {e}"
            )))
        }
    };

    Ok(collapse_whitespace(&text))
}

/// Joins all whitespace runs (including page breaks) into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rejects source text that is too short to score meaningfully.
pub fn require_min_text(field: &str, text: &str, min_chars: usize) -> Result<(), AppError> {
    let len = text.trim().chars().count();
    if len == 0 {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    if len < min_chars {
        return Err(AppError::Validation(format!(
            "{field} is too short ({len} characters, minimum {min_chars})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  Jane  Doe\n\nRust\tEngineer \x0c Page 2 "),
            "Jane Doe Rust Engineer Page 2"
        );
    }

    #[test]
    fn test_require_min_text_rejects_empty() {
        let err = require_min_text("job_description", "   ", 10).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("cannot be empty")));
    }

    #[test]
    fn test_require_min_text_rejects_short() {
        let err = require_min_text("resume_text", "Rust dev", 20).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("resume_text") && m.contains("8 characters")));
    }

    #[test]
    fn test_require_min_text_accepts_long_enough() {
        assert!(require_min_text("resume_text", "Senior Rust engineer", 20).is_ok());
    }

    #[tokio::test]
    async fn test_empty_pdf_is_rejected() {
        let err = extract_text_from_pdf(Bytes::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    /// Single-page PDF with correct xref offsets whose content stream uses a font
    /// that the page never declares.
    fn pdf_with_undefined_font() -> Vec<u8> {
        let content = "BT /F9 12 Tf (Hello) Tj ET";
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
        }
        let xref_at = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.into_bytes()
    }

    #[tokio::test]
    async fn test_non_pdf_bytes_are_rejected() {
        let err = extract_text_from_pdf(Bytes::from_static(b"definitely not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_pdf_with_undefined_font_is_a_validation_error() {
        let err = extract_text_from_pdf(Bytes::from(pdf_with_undefined_font()))
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::Validation(ref m) if m.starts_with("Could not process PDF")),
            "{err:?}"
        );
    }
}
