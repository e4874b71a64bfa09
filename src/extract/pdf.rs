use std::any::Any;
use std::panic;
use std::path::Path;
use crate::core::error::{Error, Result};
use crate::extract::extractor::Extractor;
use crate::extract::format::DocumentFormat;

/// `.pdf` files, text of every page in reading order
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl Extractor for PdfExtractor {
    /// `pdf_extract` panics on some malformed documents (a page using a font
    /// its resources never define, for one); those surface as `Unreadable`.
    fn extract(&self, path: &Path) -> Result<String> {
        match panic::catch_unwind(|| pdf_extract::extract_text(path)) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(Error::unreadable(format!("{}: {}", path.display(), e))),
            Err(payload) => Err(Error::unreadable(format!(
                "{}: malformed PDF ({})",
                path.display(),
                panic_message(payload.as_ref())
            ))),
        }
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn clone_box(&self) -> Box<dyn Extractor> {
        Box::new(PdfExtractor)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown error"
    }
}
