use std::fs::File;
use std::io::Read;
use std::path::Path;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;
use crate::core::error::{Error, Result};
use crate::extract::extractor::Extractor;
use crate::extract::format::DocumentFormat;

const DOCUMENT_PART: &str = "word/document.xml";

/// `.docx` files: paragraph text of the main document part, one line per
/// paragraph
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl Extractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let file = File::open(path)
            .map_err(|e| Error::unreadable(format!("{}: {}", path.display(), e)))?;
        let mut archive = ZipArchive::new(file)?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)?
            .read_to_string(&mut xml)
            .map_err(|e| Error::unreadable(format!("{}: {}", DOCUMENT_PART, e)))?;

        paragraphs_text(&xml)
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn clone_box(&self) -> Box<dyn Extractor> {
        Box::new(DocxExtractor)
    }
}

/// Collect `w:t` runs per `w:p` paragraph and join paragraphs with `\n`
pub fn paragraphs_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if e.name().as_ref() == b"w:t" {
                    in_text = true;
                }
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                b"w:p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(e) if in_text => current.push_str(&e.unescape()?),
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;
    use crate::core::error::ErrorKind;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Bu kitob</w:t></w:r><w:r><w:t xml:space="preserve"> va daftar</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>O‘zbek</w:t><w:tab/><w:t>tili &amp; adabiyoti</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn write_docx(path: &Path, parts: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        for (name, contents) in parts {
            zip.start_file(*name, FileOptions::default()).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_paragraphs_text() {
        let text = paragraphs_text(BODY).unwrap();
        assert_eq!(text, "Bu kitob va daftar\n\nO‘zbek\ttili & adabiyoti");
    }

    #[test]
    fn test_extract_docx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hujjat.docx");
        write_docx(&path, &[("[Content_Types].xml", "<Types/>"), (DOCUMENT_PART, BODY)]);

        let text = DocxExtractor.extract(&path).unwrap();
        assert_eq!(text, "Bu kitob va daftar\n\nO‘zbek\ttili & adabiyoti");
    }

    #[test]
    fn test_missing_document_part_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hujjat.docx");
        write_docx(&path, &[("word/styles.xml", "<w:styles/>")]);

        let err = DocxExtractor.extract(&path).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unreadable);
    }

    #[test]
    fn test_not_a_zip_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hujjat.docx");
        std::fs::write(&path, "plain text pretending to be docx").unwrap();

        let err = DocxExtractor.extract(&path).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unreadable);
    }
}
