use std::fmt;
use std::path::Path;
use crate::core::error::{Error, Result};

pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file format. Please use .txt, .docx, or .pdf.";

/// Document formats text can be extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    PlainText,
    Docx,
    Pdf,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 3] = [
        DocumentFormat::PlainText,
        DocumentFormat::Docx,
        DocumentFormat::Pdf,
    ];

    /// Case-insensitive, with or without the leading dot
    pub fn from_extension(extension: &str) -> Result<Self> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        DocumentFormat::ALL
            .into_iter()
            .find(|format| format.extension() == extension)
            .ok_or_else(|| Error::unsupported_format(UNSUPPORTED_FORMAT_MESSAGE))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(extension) => DocumentFormat::from_extension(extension),
            None => Err(Error::unsupported_format(UNSUPPORTED_FORMAT_MESSAGE)),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::PlainText => "txt",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("maqola.txt")).unwrap(), DocumentFormat::PlainText);
        assert_eq!(DocumentFormat::from_path(Path::new("/tmp/Hisobot.DOCX")).unwrap(), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_path(Path::new("kitob.v2.pdf")).unwrap(), DocumentFormat::Pdf);
    }

    #[test]
    fn test_unsupported() {
        for name in ["notes.odt", "README", "archive.txt.gz", ".docx"] {
            let err = DocumentFormat::from_path(Path::new(name)).unwrap_err();
            assert!(err.is_unsupported_format(), "{}", name);
            assert_eq!(err.context, UNSUPPORTED_FORMAT_MESSAGE);
        }
    }

    #[test]
    fn test_from_extension_accepts_leading_dot() {
        assert_eq!(DocumentFormat::from_extension(".pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::Docx.to_string(), ".docx");
    }
}
