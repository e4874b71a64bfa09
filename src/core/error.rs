use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    InvalidArgument,
    InvalidInput,
    UnsupportedFormat,
    Unreadable,
    Internal,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn invalid_input(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::InvalidInput, context.into())
    }

    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::InvalidArgument, context.into())
    }

    /// Extension is not one of the formats an extractor exists for
    pub fn unsupported_format(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::UnsupportedFormat, context.into())
    }

    /// File was found but its contents could not be turned into text
    pub fn unreadable(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::Unreadable, context.into())
    }

    pub fn is_unsupported_format(&self) -> bool {
        self.kind == ErrorKind::UnsupportedFormat
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            context: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Parse,
            context: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error {
            kind: ErrorKind::Unreadable,
            context: format!("docx container: {}", err),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error {
            kind: ErrorKind::Unreadable,
            context: format!("docx body: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
