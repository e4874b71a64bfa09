use std::path::Path;
use crate::core::error::Result;
use crate::extract::format::DocumentFormat;

/// Turns a document on disk into plain text
pub trait Extractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String>;

    fn format(&self) -> DocumentFormat;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Extractor>;
}
