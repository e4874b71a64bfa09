use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use log::{debug, info};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::AnalysisResult;
use crate::extract::format::DocumentFormat;
use crate::server::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health))
        .route("/analyze/", post(analyze))
        .route("/stop-words/", get(stop_words))
        .route("/stop-words/reload/", post(reload_stop_words))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    #[serde(rename = "Output file", skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StopWordsResponse {
    #[serde(rename = "Stop words")]
    pub stop_words: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    #[serde(rename = "Stop words")]
    pub stop_words: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn stop_words(State(state): State<Arc<AppState>>) -> Json<StopWordsResponse> {
    let engine = state.engine();
    Json(StopWordsResponse {
        stop_words: engine.stop_words().iter().map(String::from).collect(),
    })
}

async fn reload_stop_words(State(state): State<Arc<AppState>>) -> Result<Json<ReloadResponse>> {
    let reload_state = Arc::clone(&state);
    let count = tokio::task::spawn_blocking(move || reload_state.reload_stop_words())
        .await
        .map_err(|e| Error::new(ErrorKind::Internal, e.to_string()))??;

    Ok(Json(ReloadResponse { stop_words: count }))
}

struct Upload {
    file_name: String,
    bytes: Bytes,
}

#[derive(Default)]
struct AnalyzeForm {
    text: Option<String>,
    upload: Option<Upload>,
    save_output: bool,
}

impl AnalyzeForm {
    async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = AnalyzeForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "text" => form.text = Some(field.text().await?),
                "file" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    // browsers send an empty part for an untouched file input
                    if !file_name.is_empty() || !bytes.is_empty() {
                        form.upload = Some(Upload { file_name, bytes });
                    }
                }
                "save_output" => form.save_output = parse_flag(&field.text().await?)?,
                other => debug!("Ignoring form field {:?}", other),
            }
        }

        Ok(form)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(Error::invalid_input(format!("save_output: not a boolean: {:?}", other))),
    }
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>> {
    let form = AnalyzeForm::read(multipart).await?;

    let text = match (form.upload, form.text) {
        (Some(upload), _) => extract_upload(&state, upload).await?,
        (None, Some(text)) if !text.is_empty() => text,
        _ => return Err(Error::invalid_input("Either 'text' or 'file' must be provided.")),
    };

    let result = state.engine().analyze(&text);

    let output_file = if form.save_output {
        let reports = state.reports.clone();
        let to_save = result.clone();
        let report = tokio::task::spawn_blocking(move || reports.write_all(&to_save))
            .await
            .map_err(|e| Error::new(ErrorKind::Internal, e.to_string()))??;
        Some(report.json_path.display().to_string())
    } else {
        None
    };

    Ok(Json(AnalyzeResponse { result, output_file }))
}

/// File name prefix of spooled uploads
pub const UPLOAD_PREFIX: &str = "uztext-upload-";

/// Spool the upload into a temp file named with its extension and extract it.
/// The temp file is removed when the blocking task finishes, either way.
async fn extract_upload(state: &Arc<AppState>, upload: Upload) -> Result<String> {
    let format = DocumentFormat::from_path(Path::new(&upload.file_name))?;
    info!("Extracting upload {:?} ({} bytes)", upload.file_name, upload.bytes.len());

    let state = Arc::clone(state);
    let extracted = tokio::task::spawn_blocking(move || -> Result<String> {
        let suffix = format!(".{}", format.extension());
        let mut builder = tempfile::Builder::new();
        builder.prefix(UPLOAD_PREFIX).suffix(&suffix);

        let mut temp = match &state.config.upload_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                builder.tempfile_in(dir)?
            }
            None => builder.tempfile()?,
        };
        temp.write_all(&upload.bytes)?;
        temp.flush()?;

        state.extractors.extract_as(format, temp.path())
    })
    .await
    .map_err(|e| Error::new(ErrorKind::Internal, e.to_string()))?;

    extracted.map_err(|e| match e.kind {
        ErrorKind::UnsupportedFormat => e,
        _ => Error::unreadable(format!("Error reading file: {}", e.context)),
    })
}
