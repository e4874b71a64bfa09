use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use serde::Serialize;
use crate::core::error::{Error, ErrorKind};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub fn status_code(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::UnsupportedFormat => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ErrorKind::Io
        | ErrorKind::Parse
        | ErrorKind::InvalidArgument
        | ErrorKind::Unreadable
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = status_code(self.kind);
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        (status, Json(ErrorBody { detail: self.context })).into_response()
    }
}

impl From<MultipartError> for Error {
    fn from(err: MultipartError) -> Self {
        Error::invalid_input(format!("Malformed form data: {}", err.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(status_code(ErrorKind::InvalidInput), StatusCode::BAD_REQUEST);
        assert_eq!(status_code(ErrorKind::UnsupportedFormat), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(status_code(ErrorKind::Unreadable), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_uses_kind() {
        let response = Error::invalid_input("missing").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
