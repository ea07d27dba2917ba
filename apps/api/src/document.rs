//! Resume document extraction — turns uploaded PDF / DOCX / TXT bytes into plain text.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::AppError;

/// Extracts plain text from an uploaded file, dispatching on its extension.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, AppError> {
    let filename_lower = filename.to_lowercase();

    if filename_lower.ends_with(".pdf") {
        extract_pdf(bytes)
    } else if filename_lower.ends_with(".docx") {
        extract_docx(bytes)
    } else if filename_lower.ends_with(".txt") {
        Ok(extract_txt(bytes))
    } else {
        Err(AppError::UnsupportedFormat(format!(
            "Unsupported file format: {filename}"
        )))
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Validation(format!("Could not read PDF: {e}")))?;

    // pdf-extract separates pages with form feeds.
    Ok(text
        .split('\u{c}')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Reads `word/document.xml` from the archive and emits one line per `<w:p>` paragraph.
fn extract_docx(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::Validation(format!("Could not read DOCX as ZIP: {e}")))?;

    let mut doc_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| AppError::Validation("Invalid DOCX: missing word/document.xml".to_string()))?
        .read_to_string(&mut doc_xml)
        .map_err(|e| AppError::Validation(format!("Could not read document.xml: {e}")))?;

    let mut reader = Reader::from_str(&doc_xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => current.clear(),
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"tab" => current.push('\t'),
                b"br" => current.push('\n'),
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                if let Ok(text) = e.unescape() {
                    current.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(AppError::Validation(format!("DOCX XML parse error: {e}"))),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}

/// UTF-8 decode, dropping invalid sequences.
fn extract_txt(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_txt_extraction() {
        let text = extract_text(b"Summary\nRust engineer", "resume.TXT").unwrap();
        assert_eq!(text, "Summary\nRust engineer");
    }

    #[test]
    fn test_txt_drops_invalid_utf8() {
        let text = extract_text(b"Rust\xff engineer", "resume.txt").unwrap();
        assert_eq!(text, "Rust engineer");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = extract_text(b"hello", "resume.rtf").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(msg) if msg.contains("resume.rtf")));
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Summary</w:t></w:r></w:p>
    <w:p><w:r><w:t>Built </w:t></w:r><w:r><w:t>APIs &amp; tools</w:t></w:r></w:p>
  </w:body>
</w:document>"#;
        let text = extract_text(&build_docx(xml), "cv.docx").unwrap();
        assert_eq!(text, "Summary\nBuilt APIs & tools");
    }

    #[test]
    fn test_docx_without_document_xml_is_rejected() {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("other.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.finish().unwrap();
        }
        let err = extract_text(&cursor.into_inner(), "cv.docx").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
