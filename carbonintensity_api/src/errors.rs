//! Error types for the API client.

use serde_json::{json, Value};

/// Errors that can occur when rendering or executing an API call.
///
/// Every failure is returned as a value; the client never panics on a bad
/// response or an unreachable host.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A path parameter was empty, missing, or could not be encoded.
    #[error("Encoding error: {0}")]
    Encoding(String),
    /// The API answered with something other than `200 OK`.
    #[error("HTTP Error: {status}")]
    Http { status: u16, body: String },
    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("Transport error: {0}")]
    Transport(String),
    /// The response body was not valid JSON.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Machine-usable classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Encoding,
    Http,
    Transport,
    Decode,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Encoding => "EncodingError",
            ErrorKind::Http => "HttpError",
            ErrorKind::Transport => "TransportError",
            ErrorKind::Decode => "DecodeError",
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Encoding(_) => ErrorKind::Encoding,
            Error::Http { .. } => ErrorKind::Http,
            Error::Transport(_) => ErrorKind::Transport,
            Error::Decode(_) => ErrorKind::Decode,
        }
    }

    /// The HTTP status code, for [`Error::Http`] only.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Renders the error as `{"error": "<message>", "success": false, "kind": "<kind>"}`.
    pub fn to_error_object(&self) -> Value {
        json!({
            "error": self.to_string(),
            "kind": self.kind().as_str(),
            "success": false,
        })
    }
}
