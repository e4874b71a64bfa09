pub mod docx;
pub mod extractor;
pub mod format;
pub mod pdf;
pub mod plain;

use std::collections::HashMap;
use std::path::Path;
use log::debug;
use crate::core::error::{Error, Result};
use crate::extract::docx::DocxExtractor;
use crate::extract::extractor::Extractor;
use crate::extract::format::{DocumentFormat, UNSUPPORTED_FORMAT_MESSAGE};
use crate::extract::pdf::PdfExtractor;
use crate::extract::plain::PlainTextExtractor;

/// Extractors keyed by the format they handle
pub struct ExtractorRegistry {
    extractors: HashMap<DocumentFormat, Box<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Registry with plain text, docx and pdf support
    pub fn new() -> Self {
        let mut registry = ExtractorRegistry::empty();
        registry.register(Box::new(PlainTextExtractor));
        registry.register(Box::new(DocxExtractor));
        registry.register(Box::new(PdfExtractor));
        registry
    }

    pub fn empty() -> Self {
        ExtractorRegistry {
            extractors: HashMap::new(),
        }
    }

    /// Replaces any extractor already registered for the same format
    pub fn register(&mut self, extractor: Box<dyn Extractor>) {
        self.extractors.insert(extractor.format(), extractor);
    }

    pub fn get(&self, format: DocumentFormat) -> Option<&dyn Extractor> {
        self.extractors.get(&format).map(|e| &**e)
    }

    /// Pick the extractor from the file extension and run it
    pub fn extract_file(&self, path: &Path) -> Result<String> {
        let format = DocumentFormat::from_path(path)?;
        self.extract_as(format, path)
    }

    /// Run the extractor for `format` regardless of the file's own extension
    pub fn extract_as(&self, format: DocumentFormat, path: &Path) -> Result<String> {
        let extractor = self
            .get(format)
            .ok_or_else(|| Error::unsupported_format(UNSUPPORTED_FORMAT_MESSAGE))?;

        debug!("Extracting {} with {}", path.display(), extractor.name());
        extractor.extract(path)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ExtractorRegistry {
    fn clone(&self) -> Self {
        ExtractorRegistry {
            extractors: self
                .extractors
                .iter()
                .map(|(format, extractor)| (*format, extractor.clone_box()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_dispatch_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Matn.TXT");
        fs::write(&path, "Bu kitob").unwrap();

        let registry = ExtractorRegistry::new();
        assert_eq!(registry.extract_file(&path).unwrap(), "Bu kitob");
        assert_eq!(registry.get(DocumentFormat::Docx).unwrap().name(), "docx");
    }

    #[test]
    fn test_unsupported_extension_is_not_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matn.rtf");
        fs::write(&path, "{\\rtf1 Bu kitob}").unwrap();

        let err = ExtractorRegistry::new().extract_file(&path).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_unregistered_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matn.txt");
        fs::write(&path, "Bu kitob").unwrap();

        let mut registry = ExtractorRegistry::empty();
        assert!(registry.extract_file(&path).unwrap_err().is_unsupported_format());

        registry.register(Box::new(PlainTextExtractor));
        let cloned = registry.clone();
        assert_eq!(cloned.extract_file(&path).unwrap(), "Bu kitob");
    }

    #[test]
    fn test_extract_as_ignores_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.bin");
        fs::write(&path, "salom").unwrap();

        let registry = ExtractorRegistry::new();
        assert_eq!(registry.extract_as(DocumentFormat::PlainText, &path).unwrap(), "salom");
    }
}
