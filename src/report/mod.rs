pub mod json;
pub mod text;

use std::fs;
use std::path::PathBuf;
use log::info;
use crate::core::error::Result;
use crate::core::types::AnalysisResult;

pub const JSON_FILE_NAME: &str = "output.json";
pub const TEXT_FILE_NAME: &str = "output.txt";

/// Paths written by [`ReportWriter::write_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedReport {
    pub json_path: PathBuf,
    pub text_path: PathBuf,
}

/// Persists analysis results under a fixed output directory.
/// Each write replaces the previous file of the same name.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ReportWriter {
            output_dir: output_dir.into(),
        }
    }

    pub fn write_json(&self, result: &AnalysisResult) -> Result<PathBuf> {
        let path = self.prepare(JSON_FILE_NAME)?;
        fs::write(&path, json::to_json(result)?)?;
        Ok(path)
    }

    pub fn write_text(&self, result: &AnalysisResult) -> Result<PathBuf> {
        let path = self.prepare(TEXT_FILE_NAME)?;
        fs::write(&path, text::render(result))?;
        Ok(path)
    }

    pub fn write_all(&self, result: &AnalysisResult) -> Result<PersistedReport> {
        let report = PersistedReport {
            text_path: self.write_text(result)?,
            json_path: self.write_json(result)?,
        };
        info!(
            "Results written to {} and {}",
            report.text_path.display(),
            report.json_path.display()
        );
        Ok(report)
    }

    fn prepare(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(self.output_dir.join(file_name))
    }
}
