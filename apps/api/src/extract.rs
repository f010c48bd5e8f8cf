//! Text extraction for uploaded resume documents.
//!
//! Everything happens in memory; uploads never touch disk. PDF extraction is
//! CPU-bound, so callers run this inside `tokio::task::spawn_blocking`.

use thiserror::Error;

/// Upload formats accepted at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Txt,
    Doc,
    Docx,
}

impl DocumentKind {
    /// Derives the kind from a filename extension, case-insensitive.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::Txt),
            "doc" => Some(DocumentKind::Doc),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Extraction failures, mapped to HTTP errors at the handler boundary.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse document: {0}")]
    ParseFailure(String),
}

/// Extracts plain text from an uploaded document.
///
/// DOC/DOCX pass upload validation (they are standard resume formats) but
/// cannot be extracted yet; the error tells the caller the workaround.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::ParseFailure(e.to_string())),
        DocumentKind::Txt => Ok(String::from_utf8_lossy(bytes).into_owned()),
        DocumentKind::Doc | DocumentKind::Docx => Err(ExtractError::UnsupportedFormat(
            "DOC/DOCX extraction is not available; convert the resume to PDF or plain text"
                .to_string(),
        )),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_filename_is_case_insensitive() {
        assert_eq!(DocumentKind::from_filename("Resume.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("notes.TXT"), Some(DocumentKind::Txt));
        assert_eq!(DocumentKind::from_filename("cv.DocX"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_filename("old.doc"), Some(DocumentKind::Doc));
    }

    #[test]
    fn test_unknown_extensions_are_rejected() {
        assert_eq!(DocumentKind::from_filename("resume.rtf"), None);
        assert_eq!(DocumentKind::from_filename("resume.pdf.exe"), None);
        assert_eq!(DocumentKind::from_filename("no_extension"), None);
    }

    #[test]
    fn test_txt_passes_through() {
        let text = extract_text(DocumentKind::Txt, b"plain resume text").unwrap();
        assert_eq!(text, "plain resume text");
    }

    #[test]
    fn test_txt_decodes_invalid_utf8_lossily() {
        let text = extract_text(DocumentKind::Txt, &[b'o', b'k', 0xff]).unwrap();
        assert!(text.starts_with("ok"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_doc_formats_report_unsupported() {
        let err = extract_text(DocumentKind::Docx, b"whatever").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_garbage_pdf_reports_parse_failure() {
        let err = extract_text(DocumentKind::Pdf, b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::ParseFailure(_)));
    }
}
