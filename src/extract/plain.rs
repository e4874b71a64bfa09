use std::fs;
use std::path::Path;
use crate::core::error::{Error, Result};
use crate::extract::extractor::Extractor;
use crate::extract::format::DocumentFormat;

/// `.txt` files, read whole as UTF-8
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl Extractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)
            .map_err(|e| Error::unreadable(format!("{}: {}", path.display(), e)))?;

        String::from_utf8(bytes)
            .map_err(|e| Error::unreadable(format!("{}: not valid UTF-8 ({})", path.display(), e)))
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::PlainText
    }

    fn name(&self) -> &str {
        "plain_text"
    }

    fn clone_box(&self) -> Box<dyn Extractor> {
        Box::new(PlainTextExtractor)
    }
}
