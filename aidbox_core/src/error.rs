use aidbox_client::error::AidboxError;
use aidbox_models::id::LicenseId;
use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

use crate::config::ConfigError;

#[derive(Debug)]
pub struct ProviderError {
    source: Option<Box<dyn StdError + Send + Sync>>,
    kind: ErrorKind,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// The provider configuration could not be resolved.
    Config,
    /// A call to the portal failed.
    Client { method: String },
    /// The prior state carries no license id.
    MissingId,
    /// The portal answered a read with a different license.
    IdMismatch {
        expected: LicenseId,
        returned: LicenseId,
    },
    /// An import was requested with an empty id.
    EmptyImportId,
    /// The plan changes attributes that can only be set when the license is issued.
    RequiresReplace { attributes: Vec<&'static str> },
}

impl ProviderError {
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[must_use]
    pub fn into_source(self) -> Option<Box<dyn StdError + Send + Sync>> {
        self.source
    }

    #[must_use]
    pub fn into_parts(self) -> (ErrorKind, Option<Box<dyn StdError + Send + Sync>>) {
        (self.kind, self.source)
    }

    #[must_use]
    pub fn from_parts(kind: ErrorKind, source: Option<Box<dyn StdError + Send + Sync>>) -> Self {
        Self { source, kind }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            ErrorKind::Config => f.write_str("configuration error: ")?,
            ErrorKind::Client { .. } => f.write_str("aidbox error: ")?,
            ErrorKind::MissingId => f.write_str("the license state has no id")?,
            ErrorKind::IdMismatch { expected, returned } => {
                write!(f, "asked for license {expected} but the portal returned {returned}")?;
            }
            ErrorKind::EmptyImportId => f.write_str("cannot import a license without an id")?,
            ErrorKind::RequiresReplace { attributes } => write!(
                f,
                "{} cannot be changed on an issued license",
                attributes.join(", ")
            )?,
        }
        match &self.source {
            Some(err) => Display::fmt(&err, f),
            None => Ok(()),
        }
    }
}

impl StdError for ProviderError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn StdError + 'static))
    }
}

impl From<AidboxError> for ProviderError {
    fn from(err: AidboxError) -> Self {
        Self {
            kind: ErrorKind::Client {
                method: err.method().to_string(),
            },
            source: Some(Box::new(err)),
        }
    }
}

impl From<ConfigError> for ProviderError {
    fn from(err: ConfigError) -> Self {
        Self {
            source: Some(Box::new(err)),
            kind: ErrorKind::Config,
        }
    }
}
