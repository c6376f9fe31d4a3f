use hyper::StatusCode;
use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

#[derive(Debug)]
pub enum ErrorKind {
    Serialization,
    BuildingRequest,
    Sending,
    ChunkingResponse,
    Response { status: StatusCode, bytes: Vec<u8> },
    Deserialize { bytes: Vec<u8> },
}

/// The three ways a call can go wrong, as seen by the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// The request envelope could not be encoded.
    Serialization,
    /// The exchange with the endpoint could not be completed.
    Transport,
    /// The endpoint answered, but not with a 200 carrying a decodable envelope.
    Protocol,
}

#[derive(Debug)]
pub struct AidboxError {
    pub(super) method: String,
    pub(super) source: Option<Box<dyn StdError + Send + Sync>>,
    pub(super) kind: ErrorKind,
}

impl AidboxError {
    #[must_use]
    pub fn from_parts(
        method: impl Into<String>,
        kind: ErrorKind,
        source: Option<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            method: method.into(),
            source,
            kind,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self.kind {
            ErrorKind::Serialization => ErrorClass::Serialization,
            ErrorKind::BuildingRequest | ErrorKind::Sending | ErrorKind::ChunkingResponse => {
                ErrorClass::Transport
            }
            ErrorKind::Response { .. } | ErrorKind::Deserialize { .. } => ErrorClass::Protocol,
        }
    }

    /// The HTTP status of the response, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self.kind {
            ErrorKind::Response { status, .. } => Some(status),
            ErrorKind::Deserialize { .. } => Some(StatusCode::OK),
            _ => None,
        }
    }

    /// The raw response body, when one was received.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        match &self.kind {
            ErrorKind::Response { bytes, .. } | ErrorKind::Deserialize { bytes } => Some(bytes),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_source(self) -> Option<Box<dyn StdError + Send + Sync>> {
        self.source
    }

    #[must_use]
    pub fn into_parts(self) -> (ErrorKind, Option<Box<dyn StdError + Send + Sync>>) {
        (self.kind, self.source)
    }
}

impl Display for AidboxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let method = &self.method;
        match &self.kind {
            ErrorKind::Serialization => write!(f, "failed to encode the {method} request")?,
            ErrorKind::BuildingRequest => write!(f, "failed to build the {method} request")?,
            ErrorKind::Sending => write!(f, "sending the {method} request failed")?,
            ErrorKind::ChunkingResponse => write!(f, "reading the {method} response failed")?,
            ErrorKind::Response { status, bytes } => {
                let body = String::from_utf8_lossy(bytes);
                return write!(f, "{method} failed with {status}; body: {body}");
            }
            ErrorKind::Deserialize { bytes } => {
                let body = String::from_utf8_lossy(bytes);
                write!(f, "failed to decode the {method} response; body: {body}")?;
            }
        }
        match &self.source {
            Some(err) => write!(f, " - {err}"),
            None => Ok(()),
        }
    }
}

impl StdError for AidboxError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn StdError + 'static))
    }
}
