//! Resume text extraction — dispatches on the lowercase file extension.
//!
//! PDF via pdf-extract (page-by-page, newline-joined), DOCX via docx-rs
//! (paragraph/run walk). Everything else is rejected with a fixed message.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No file provided")]
    NoFile,

    #[error("Unsupported file format. Please upload PDF or DOCX files only.")]
    UnsupportedFormat,

    #[error("Error extracting PDF: {0}")]
    Pdf(String),

    #[error("Error extracting DOCX: {0}")]
    Docx(String),
}

/// Extracts plain text from a resume file based on its extension.
pub fn extract(path: &Path) -> Result<String, ExtractionError> {
    if path.as_os_str().is_empty() {
        return Err(ExtractionError::NoFile);
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => extract_pdf(path),
        "docx" => extract_docx(path),
        _ => Err(ExtractionError::UnsupportedFormat),
    }
}

fn extract_pdf(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    // pdf-extract (via its font handling) can panic on malformed glyph data,
    // so the call is fenced with catch_unwind.
    let pages = match catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    })) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(ExtractionError::Pdf(e.to_string())),
        Err(_) => {
            return Err(ExtractionError::Pdf(
                "parser panicked, likely a malformed font".to_string(),
            ))
        }
    };

    Ok(pages.join("\n").trim().to_string())
}

fn extract_docx(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractionError::Docx(e.to_string()))?;
    let doc = docx_rs::read_docx(&bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &doc.document.children {
        collect_document_text(child, &mut text);
    }

    Ok(text.trim().to_string())
}

fn collect_document_text(element: &docx_rs::DocumentChild, output: &mut String) {
    if let docx_rs::DocumentChild::Paragraph(paragraph) = element {
        for child in &paragraph.children {
            match child {
                docx_rs::ParagraphChild::Run(run) => collect_run_text(run, output),
                docx_rs::ParagraphChild::Hyperlink(link) => {
                    for nested in &link.children {
                        if let docx_rs::ParagraphChild::Run(run) = nested {
                            collect_run_text(run, output);
                        }
                    }
                }
                _ => {}
            }
        }
        output.push('\n');
    }
}

fn collect_run_text(run: &docx_rs::Run, output: &mut String) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text) => output.push_str(&text.text),
            docx_rs::RunChild::Tab(_) => output.push(' '),
            docx_rs::RunChild::Break(_) => output.push('\n'),
            _ => {}
        }
    }
}
