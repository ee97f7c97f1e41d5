use crate::extraction::DocumentError;

/// Extracts the text layer of a PDF. CPU-bound: call from `spawn_blocking`.
///
/// Scanned, image-only PDFs have no text layer and come back empty.
pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| DocumentError::Format(format!("PDF text extraction failed: {e}")))
}
