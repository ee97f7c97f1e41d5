//! Document extraction: resume file in, plain text out.
//!
//! Format is decided by magic bytes first and the file extension second.
//! Binary decoders run on the blocking pool so a slow or panicking decoder
//! never stalls the runtime.

pub mod docx;
pub mod pdf;

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::models::ResumeText;

const PDF_MAGIC: &[u8] = b"%PDF-";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE2_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
/// Some producers put junk before the PDF header; readers accept it within the first KiB.
const PDF_HEADER_WINDOW: usize = 1024;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// Missing or unreadable file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unsupported, mislabelled or corrupt document.
    #[error("Unsupported or corrupt document: {0}")]
    Format(String),

    #[error("Reading {} timed out after {timeout:?}", path.display())]
    Timeout { path: PathBuf, timeout: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Detects the format of `bytes`. `file_name` is only a hint; magic bytes win.
    ///
    /// A PDF header is accepted at offset 0. Further into the first KiB it only
    /// counts when the name says `.pdf` or the bytes are not text, so a plain
    /// resume that mentions `%PDF-` stays plain text.
    pub fn detect(bytes: &[u8], file_name: Option<&str>) -> Result<Self, DocumentError> {
        let extension = file_name
            .and_then(|name| Path::new(name).extension())
            .map(|ext| ext.to_string_lossy().to_lowercase());

        if bytes.starts_with(PDF_MAGIC) {
            return Ok(Self::Pdf);
        }
        if has_pdf_header_after_junk(bytes)
            && (extension.as_deref() == Some("pdf") || std::str::from_utf8(bytes).is_err())
        {
            return Ok(Self::Pdf);
        }
        if bytes.starts_with(ZIP_MAGIC) {
            return Ok(Self::Docx);
        }
        if bytes.starts_with(OLE2_MAGIC) {
            return Err(DocumentError::Format(
                "legacy .doc (OLE2) documents are not supported; save as .docx or .pdf"
                    .to_string(),
            ));
        }

        match extension.as_deref() {
            Some("pdf") => Err(DocumentError::Format(
                "file has a .pdf extension but no PDF header".to_string(),
            )),
            Some("docx") => Err(DocumentError::Format(
                "file has a .docx extension but is not a ZIP package".to_string(),
            )),
            Some("doc") => Err(DocumentError::Format(
                "legacy .doc documents are not supported; save as .docx or .pdf".to_string(),
            )),
            Some("txt" | "text" | "md") | None => Ok(Self::PlainText),
            Some(other) => Err(DocumentError::Format(format!(
                "unsupported file extension '.{other}'"
            ))),
        }
    }
}

fn has_pdf_header_after_junk(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(PDF_HEADER_WINDOW)]
        .windows(PDF_MAGIC.len())
        .any(|window| window == PDF_MAGIC)
}

/// Reads resume documents from disk or memory and decodes them to text.
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    read_timeout: Duration,
    max_bytes: usize,
}

impl DocumentExtractor {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            read_timeout: config.read_timeout,
            max_bytes: config.max_document_bytes,
        }
    }

    /// Reads `path` under the configured deadline, then decodes it.
    ///
    /// At most `max_bytes + 1` bytes are read, so devices and pipes that never
    /// end are still bounded. FIFOs are read through the reactor, which lets the
    /// deadline cancel a read that is waiting on a writer.
    pub async fn extract(&self, path: &Path) -> Result<ResumeText, DocumentError> {
        let io_err = |source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        };
        let limit = (self.max_bytes as u64).saturating_add(1);

        let read = async {
            let metadata = tokio::fs::metadata(path).await.map_err(io_err)?;
            if metadata.len() > self.max_bytes as u64 {
                return Err(self.too_large(metadata.len()));
            }
            let bytes = read_limited(path, is_fifo(&metadata), limit)
                .await
                .map_err(io_err)?;
            Ok::<Vec<u8>, DocumentError>(bytes)
        };

        let bytes = tokio::time::timeout(self.read_timeout, read)
            .await
            .map_err(|_| DocumentError::Timeout {
                path: path.to_path_buf(),
                timeout: self.read_timeout,
            })??;

        let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        self.extract_bytes(bytes, file_name.as_deref()).await
    }

    /// Decodes an in-memory document (uploads, stdin).
    pub async fn extract_bytes(
        &self,
        bytes: Vec<u8>,
        file_name: Option<&str>,
    ) -> Result<ResumeText, DocumentError> {
        if bytes.len() > self.max_bytes {
            return Err(self.too_large(bytes.len() as u64));
        }

        let format = DocumentFormat::detect(&bytes, file_name)?;
        let raw = match format {
            DocumentFormat::Pdf => decode_blocking(bytes, pdf::extract_text).await?,
            DocumentFormat::Docx => decode_blocking(bytes, docx::extract_text).await?,
            DocumentFormat::PlainText => decode_plain_text(bytes)?,
        };
        let text = normalize(&raw);

        debug!(
            "Decoded {:?} document ({} chars)",
            format,
            text.chars().count()
        );
        if text.trim().is_empty() {
            warn!("Document decoded to empty text (format: {format:?})");
        }

        Ok(ResumeText::from(text))
    }

    fn too_large(&self, len: u64) -> DocumentError {
        DocumentError::Format(format!(
            "document is {len} bytes, larger than the {} byte limit",
            self.max_bytes
        ))
    }
}

async fn read_limited(path: &Path, fifo: bool, limit: u64) -> std::io::Result<Vec<u8>> {
    if fifo {
        return read_pipe(path, limit).await;
    }
    let mut bytes = Vec::new();
    let file = tokio::fs::File::open(path).await?;
    file.take(limit).read_to_end(&mut bytes).await?;
    Ok(bytes)
}

#[cfg(unix)]
async fn read_pipe(path: &Path, limit: u64) -> std::io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let pipe = tokio::net::unix::pipe::OpenOptions::new().open_receiver(path)?;
    pipe.take(limit).read_to_end(&mut bytes).await?;
    Ok(bytes)
}

#[cfg(not(unix))]
async fn read_pipe(_path: &Path, _limit: u64) -> std::io::Result<Vec<u8>> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "named pipes are only supported on unix",
    ))
}

#[cfg(unix)]
fn is_fifo(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::FileTypeExt;
    metadata.file_type().is_fifo()
}

#[cfg(not(unix))]
fn is_fifo(_metadata: &std::fs::Metadata) -> bool {
    false
}

async fn decode_blocking(
    bytes: Vec<u8>,
    decode: fn(&[u8]) -> Result<String, DocumentError>,
) -> Result<String, DocumentError> {
    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| DocumentError::Format(format!("document decoder crashed: {e}")))?
}

fn decode_plain_text(bytes: Vec<u8>) -> Result<String, DocumentError> {
    let text = String::from_utf8(bytes)
        .map_err(|e| DocumentError::Format(format!("text document is not valid UTF-8: {e}")))?;
    if let Some(rest) = text.strip_prefix('\u{feff}') {
        return Ok(rest.to_string());
    }
    Ok(text)
}

/// Unifies line endings and non-breaking spaces so every decoder yields the same shape.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{a0}', " ")
}
