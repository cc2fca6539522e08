use anyhow::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use std::io::{Cursor, Write};

/// In-memory documents uploaded by the e2e tests
pub struct TestFixtures;

impl TestFixtures {
    /// A PDF with one page per entry, each page showing its text in Courier
    pub fn pdf_with_pages(pages: &[&str]) -> Result<Vec<u8>> {
        let mut document = lopdf::Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = document.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
            ];
            if !text.is_empty() {
                operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => Object::Integer(pages.len() as i64),
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        Ok(bytes)
    }

    /// A minimal DOCX whose body holds one paragraph per entry
    pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Result<Vec<u8>> {
        let body: String = paragraphs
            .iter()
            .map(|text| {
                if text.is_empty() {
                    "<w:p/>".to_string()
                } else {
                    format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, text)
                }
            })
            .collect();
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            body
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("word/document.xml", options)?;
        writer.write_all(xml.as_bytes())?;
        Ok(writer.finish()?.into_inner())
    }

    /// Minimal MP3 frame header followed by padding
    pub fn mp3_bytes() -> Vec<u8> {
        vec![
            0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
            0x00, 0x00, 0x00, 0x00, // Some padding
        ]
    }
}
