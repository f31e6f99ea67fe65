//! Path rendering: turns an endpoint template plus caller values into a
//! percent-encoded request path.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::endpoint::{Method, Operation, Segment};
use crate::Error;

/// Everything outside the RFC 3986 unreserved set gets encoded, `/` included,
/// so a value always stays inside its own segment.
const DATA: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Headers sent with every request. `User-Agent` comes from the client config.
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("accept", "application/json"),
    ("content-type", "application/json"),
];

/// Percent-encodes a single path parameter.
///
/// `.` and `..` are rejected: URL parsing collapses dot segments, encoded or
/// not, so they cannot be carried as data.
pub fn encode_segment(value: &str) -> Result<String, Error> {
    if value.is_empty() {
        return Err(Error::Encoding("parameter value must not be empty".to_string()));
    }
    if value == "." || value == ".." {
        return Err(Error::Encoding(format!(
            "'{}' cannot be used as a path parameter",
            value
        )));
    }
    Ok(utf8_percent_encode(value, DATA).to_string())
}

/// Joins `segments` with `/`, filling parameter slots from `params` in order.
///
/// Fails with [`Error::Encoding`] when a value is empty or when the number
/// of values does not match the number of slots.
pub fn render_path(segments: &[Segment], params: &[&str]) -> Result<String, Error> {
    let mut values = params.iter();
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        match segment {
            Segment::Literal(lit) => path.push_str(lit),
            Segment::Param(kind) => {
                let value = values.next().ok_or_else(|| {
                    Error::Encoding(format!("missing value for '{}'", kind.name()))
                })?;
                let encoded = encode_segment(value).map_err(|e| match e {
                    Error::Encoding(reason) => {
                        Error::Encoding(format!("{}: {}", kind.name(), reason))
                    }
                    other => other,
                })?;
                path.push_str(&encoded);
            }
        }
    }
    let extra = values.count();
    if extra > 0 {
        return Err(Error::Encoding(format!(
            "{} unexpected parameter value(s)",
            extra
        )));
    }
    if path.is_empty() {
        path.push('/');
    }
    Ok(path)
}

/// A fully resolved request: method and encoded path, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRequest {
    pub method: Method,
    pub path: String,
}

impl RenderedRequest {
    /// Renders `operation` with `params`. Same inputs, same output.
    pub fn new(operation: Operation, params: &[&str]) -> Result<Self, Error> {
        let endpoint = operation.endpoint();
        let path = render_path(endpoint.segments, params)?;
        Ok(Self {
            method: endpoint.method,
            path,
        })
    }

    /// A `GET` for an already-built path.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
        }
    }
}
