//! Purpose: Define the single error taxonomy returned by every client call.
//! Exports: `Error`, `ErrorKind`, `DecodeFailure`, `to_exit_code`.
//! Role: Shared by transport, client, strict decoder, and the CLI.
//! Invariants: Exactly three kinds (transport, upstream, decode); never conflated.
//! Invariants: A `Decode` error always carries a `DecodeFailure`.
//! Invariants: Upstream errors carry the HTTP status they were raised for.
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Request construction or send failed before any status was received.
    Transport,
    /// The upstream answered with a non-200 status.
    Upstream,
    /// The response body did not match the expected schema.
    Decode,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodeFailure {
    /// A key declared by the target record was absent from the payload.
    MissingField(String),
    /// The payload (or a nested record) was not a JSON object.
    MalformedPayload,
    /// Every key was present but a value had the wrong shape or type.
    StructuralMismatch,
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeFailure::MissingField(field) => write!(f, "missing field `{field}`"),
            DecodeFailure::MalformedPayload => f.write_str("malformed payload"),
            DecodeFailure::StructuralMismatch => f.write_str("structural mismatch"),
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    status: Option<u16>,
    decode: Option<DecodeFailure>,
    path: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            status: None,
            decode: None,
            path: None,
            source: None,
        }
    }

    /// Upstream error for a non-200 response, message rendered as `"<code> <reason>"`.
    pub fn upstream(status: u16, reason: &str) -> Self {
        let message = if reason.is_empty() {
            status.to_string()
        } else {
            format!("{status} {reason}")
        };
        Self::new(ErrorKind::Upstream)
            .with_status(status)
            .with_message(message)
    }

    pub fn decode(failure: DecodeFailure) -> Self {
        let mut err = Self::new(ErrorKind::Decode);
        err.decode = Some(failure);
        err
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn decode_failure(&self) -> Option<&DecodeFailure> {
        self.decode.as_ref()
    }

    /// Name of the absent key when this is a `MissingField` decode error.
    pub fn missing_field(&self) -> Option<&str> {
        match &self.decode {
            Some(DecodeFailure::MissingField(field)) => Some(field),
            _ => None,
        }
    }

    /// JSON path of the record that failed to decode (empty string is the root).
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(failure) = &self.decode {
            write!(f, ": {failure}")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(path) = self.path.as_deref().filter(|path| !path.is_empty()) {
            write!(f, " (path: {path})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Transport => 3,
        ErrorKind::Upstream => 4,
        ErrorKind::Decode => 5,
    }
}
