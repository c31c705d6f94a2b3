//! Plain-text extraction from uploaded resumes.
//!
//! PDF goes through `pdf-extract`; DOCX paragraphs are read from
//! `word/document.xml`; text files are read as UTF-8. Legacy `.doc` files are
//! rejected. This is blocking work and must run inside
//! `tokio::task::spawn_blocking`.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

const DOCX_BODY: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    Unsupported(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),

    #[error("Uploaded file is not UTF-8 text")]
    NotText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Pdf,
    Text,
    Docx,
    LegacyWord,
    Unknown,
}

fn classify(file_name: Option<&str>, content_type: Option<&str>) -> FileKind {
    let name = file_name.unwrap_or_default().to_ascii_lowercase();
    let mime = content_type.unwrap_or_default().to_ascii_lowercase();

    if name.ends_with(".pdf") || mime == "application/pdf" {
        FileKind::Pdf
    } else if name.ends_with(".docx") || mime.contains("wordprocessingml") {
        FileKind::Docx
    } else if name.ends_with(".doc") || mime == "application/msword" {
        FileKind::LegacyWord
    } else if name.ends_with(".txt") || name.ends_with(".md") || mime.starts_with("text/") {
        FileKind::Text
    } else {
        FileKind::Unknown
    }
}

pub fn extract_text(
    file_name: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<String, ExtractError> {
    match classify(file_name, content_type) {
        FileKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string())),
        FileKind::Text => Ok(String::from_utf8_lossy(bytes).into_owned()),
        FileKind::Docx => extract_docx(bytes),
        FileKind::LegacyWord => Err(ExtractError::Unsupported(
            "Legacy .doc files are not supported; save as DOCX or PDF".to_string(),
        )),
        FileKind::Unknown => String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::NotText),
    }
}

fn docx_error(err: impl std::fmt::Display) -> ExtractError {
    ExtractError::Docx(err.to_string())
}

/// Paragraph text of a DOCX archive, one line per paragraph.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;

    Ok(docx_paragraphs(&xml)?.join("\n"))
}

/// Walks WordprocessingML: text lives in `<w:t>` runs inside `<w:p>` paragraphs.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(docx_error)? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape().map_err(docx_error)?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
