use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for TLV operations
///
/// Every variant except `BadArgument` records how many input bytes were
/// consumed before the malformed element was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TlvError {
    #[error("Unexpected end of input after {consumed} bytes: {message}")]
    UnexpectedEnd { message: String, consumed: usize },

    #[error("Bad tag after {consumed} bytes: {message}")]
    BadTag { message: String, consumed: usize },

    #[error("Bad length after {consumed} bytes: {message}")]
    BadLength { message: String, consumed: usize },

    #[error("Bad argument: {0}")]
    BadArgument(String),
}

impl TlvError {
    pub fn unexpected_end(consumed: usize, message: impl Into<String>) -> Self {
        TlvError::UnexpectedEnd {
            message: message.into(),
            consumed,
        }
    }

    pub fn bad_tag(consumed: usize, message: impl Into<String>) -> Self {
        TlvError::BadTag {
            message: message.into(),
            consumed,
        }
    }

    pub fn bad_length(consumed: usize, message: impl Into<String>) -> Self {
        TlvError::BadLength {
            message: message.into(),
            consumed,
        }
    }

    /// Status kind matching this error
    pub fn kind(&self) -> StatusKind {
        match self {
            TlvError::UnexpectedEnd { .. } => StatusKind::UnexpectedEnd,
            TlvError::BadTag { .. } => StatusKind::BadTag,
            TlvError::BadLength { .. } => StatusKind::BadLength,
            TlvError::BadArgument(_) => StatusKind::BadArgument,
        }
    }

    /// Number of bytes consumed before the error was detected
    pub fn consumed(&self) -> usize {
        match self {
            TlvError::UnexpectedEnd { consumed, .. }
            | TlvError::BadTag { consumed, .. }
            | TlvError::BadLength { consumed, .. } => *consumed,
            TlvError::BadArgument(_) => 0,
        }
    }

    /// Human-readable description without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            TlvError::UnexpectedEnd { message, .. }
            | TlvError::BadTag { message, .. }
            | TlvError::BadLength { message, .. }
            | TlvError::BadArgument(message) => message,
        }
    }

    /// Shift the consumed count by `offset` bytes
    ///
    /// Used when an error raised against a sub-slice has to be reported
    /// relative to the enclosing buffer.
    pub fn offset_by(self, offset: usize) -> Self {
        match self {
            TlvError::UnexpectedEnd { message, consumed } => TlvError::UnexpectedEnd {
                message,
                consumed: consumed + offset,
            },
            TlvError::BadTag { message, consumed } => TlvError::BadTag {
                message,
                consumed: consumed + offset,
            },
            TlvError::BadLength { message, consumed } => TlvError::BadLength {
                message,
                consumed: consumed + offset,
            },
            e @ TlvError::BadArgument(_) => e,
        }
    }
}

/// Result type alias for TLV operations
pub type TlvResult<T> = Result<T, TlvError>;

/// Outcome classification of a parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    Ok,
    UnexpectedEnd,
    BadTag,
    BadLength,
    BadArgument,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusKind::Ok => "OK",
            StatusKind::UnexpectedEnd => "UnexpectedEnd",
            StatusKind::BadTag => "BadTag",
            StatusKind::BadLength => "BadLength",
            StatusKind::BadArgument => "BadArgument",
        };
        f.write_str(name)
    }
}

/// Flattened parse outcome for diagnostics
///
/// `consumed` is the number of bytes read successfully: the whole element
/// (or series) on success, or the bytes read before the failing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    kind: StatusKind,
    message: Option<String>,
    consumed: usize,
}

impl Status {
    pub fn ok(consumed: usize) -> Self {
        Self {
            kind: StatusKind::Ok,
            message: None,
            consumed,
        }
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_ok(&self) -> bool {
        self.kind == StatusKind::Ok
    }
}

impl From<&TlvError> for Status {
    fn from(err: &TlvError) -> Self {
        Self {
            kind: err.kind(),
            message: Some(err.message().to_string()),
            consumed: err.consumed(),
        }
    }
}

impl From<TlvError> for Status {
    fn from(err: TlvError) -> Self {
        Status::from(&err)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) if !self.is_ok() => write!(f, "{}: {}", self.kind, message),
            _ => write!(f, "{}", self.kind),
        }
    }
}
