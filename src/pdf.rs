use std::path::Path;

use crate::error::{Result, SlikError};

/// Read the text of a report. `.txt` files are taken as already-extracted
/// text; anything else is decoded as PDF.
pub fn load_document_text(path: &Path) -> Result<String> {
    let is_text = path
        .extension()
        .map_or(false, |e| e.eq_ignore_ascii_case("txt"));
    if is_text {
        return Ok(std::fs::read_to_string(path)?);
    }
    let bytes = std::fs::read(path)?;
    pdf_text(&bytes)
}

#[cfg(feature = "pdf")]
pub fn pdf_text(bytes: &[u8]) -> Result<String> {
    let pages = extract_pages(bytes)?;
    tracing::debug!(pages = pages.len(), "decoded PDF");
    Ok(join_pages(&pages))
}

#[cfg(not(feature = "pdf"))]
pub fn pdf_text(_bytes: &[u8]) -> Result<String> {
    Err(SlikError::UnsupportedInput(
        "PDF support not compiled in; pass extracted text as a .txt file".to_string(),
    ))
}

/// `pdf_extract` can panic on malformed files, so the call is fenced.
#[cfg(feature = "pdf")]
fn extract_pages(bytes: &[u8]) -> Result<Vec<String>> {
    use std::panic::{self, AssertUnwindSafe};

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(SlikError::Pdf(format!("text extraction failed: {e}"))),
        Err(_) => Err(SlikError::Pdf("text extraction panicked (malformed document)".to_string())),
    }
}

/// Each non-empty page is prefixed with a newline so headers at the top of
/// a page still start a line.
fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        text.push('\n');
        text.push_str(page);
    }
    text
}
