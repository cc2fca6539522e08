use crate::domain::document::DocumentError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the body paragraphs of a DOCX file, joined with `\n` in document order.
/// An empty document yields an empty string.
pub fn extract_paragraphs(bytes: &[u8]) -> Result<String, DocumentError> {
    let xml = read_document_part(bytes)?;
    let paragraphs = parse_paragraphs(&xml)?;

    tracing::debug!(paragraph_count = paragraphs.len(), "DOCX text extraction complete");
    Ok(paragraphs.join("\n"))
}

fn read_document_part(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|error| DocumentError::CorruptDocument(format!("not a DOCX archive: {error}")))?;
    let mut entry = archive.by_name(DOCUMENT_PART).map_err(|_| {
        DocumentError::CorruptDocument(format!("DOCX archive has no {DOCUMENT_PART}"))
    })?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|error| DocumentError::CorruptDocument(format!("unreadable {DOCUMENT_PART}: {error}")))?;
    Ok(xml)
}

/// Collect the text of every top-level body paragraph. Paragraph text is the
/// concatenation of its runs, with tabs and breaks kept as `\t` and `\n`.
/// Paragraphs nested in tables or text boxes are not part of the body flow and are
/// skipped, along with their runs.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>, DocumentError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut table_depth = 0usize;
    let mut text_box_depth = 0usize;
    let mut in_text = false;

    loop {
        let in_body = table_depth == 0 && text_box_depth == 0;

        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"txbxContent" => text_box_depth += 1,
                b"p" if in_body => current = Some(String::new()),
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) if in_body => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"tab" => push_text(&mut current, "\t"),
                b"br" | b"cr" => push_text(&mut current, "\n"),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text && in_body => {
                let text = e.unescape().map_err(|error| {
                    DocumentError::CorruptDocument(format!("invalid text in {DOCUMENT_PART}: {error}"))
                })?;
                push_text(&mut current, &text);
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" if in_body => {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                }
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"txbxContent" => text_box_depth = text_box_depth.saturating_sub(1),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(error) => {
                return Err(DocumentError::CorruptDocument(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {error}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_text(current: &mut Option<String>, text: &str) {
    if let Some(paragraph) = current.as_mut() {
        paragraph.push_str(text);
    }
}
