use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use crate::core::error::Result;
use crate::core::types::AnalysisResult;

/// Pretty-printed JSON, four-space indent, non-ASCII written as-is
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    result.serialize(&mut serializer)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn from_json(json: &str) -> Result<AnalysisResult> {
    Ok(serde_json::from_str(json)?)
}
