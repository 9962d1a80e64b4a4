use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Io,
    InvalidPath,
    PermissionDenied,
    FileAlreadyExists,
    InvalidMarkdown,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::Io => "Io",
            ErrorKind::InvalidPath => "InvalidPath",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::FileAlreadyExists => "FileAlreadyExists",
            ErrorKind::InvalidMarkdown => "InvalidMarkdown",
            ErrorKind::Unknown => "Unknown",
        }
    }

    // Host-reported kinds outside the known set degrade to Unknown rather
    // than being rejected outright; the message survives either way.
    fn from_wire(name: &str) -> Self {
        match name {
            "FileNotFound" => ErrorKind::FileNotFound,
            "Io" => ErrorKind::Io,
            "InvalidPath" => ErrorKind::InvalidPath,
            "PermissionDenied" => ErrorKind::PermissionDenied,
            "FileAlreadyExists" => ErrorKind::FileAlreadyExists,
            "InvalidMarkdown" => ErrorKind::InvalidMarkdown,
            _ => ErrorKind::Unknown,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct AppError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        AppError {
            kind,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        AppError::new(ErrorKind::Unknown, message)
    }

    /// Normalizes a raw rejection value from the command host into an
    /// `AppError`. Precedence: bare string, typed object carrying both
    /// fields, object carrying a message only, then a generic fallback.
    pub fn from_rejection(raw: Value) -> Self {
        match raw {
            Value::String(message) => AppError::unknown(message),
            Value::Object(fields) => {
                let kind = fields
                    .get("type")
                    .and_then(Value::as_str)
                    .filter(|name| !name.is_empty());
                let message = fields.get("message").filter(|value| truthy(value));
                match (kind, message) {
                    (Some(kind), Some(message)) => {
                        AppError::new(ErrorKind::from_wire(kind), stringify(message))
                    }
                    (_, Some(message)) => AppError::unknown(stringify(message)),
                    _ => AppError::unknown(UNKNOWN_ERROR_MESSAGE),
                }
            }
            _ => AppError::unknown(UNKNOWN_ERROR_MESSAGE),
        }
    }
}

// Mirrors the host side's notion of a usable field: null, false, zero and
// the empty string all count as absent.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
