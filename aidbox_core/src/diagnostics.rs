use aidbox_models::rpc::{GET_LICENSE, ISSUE_LICENSE, REMOVE_LICENSE};
use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

use crate::{
    config::ConfigError,
    error::{ErrorKind, ProviderError},
};

/// An error message for the end user, split into a short summary and a detailed explanation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl From<&ProviderError> for Diagnostic {
    fn from(err: &ProviderError) -> Self {
        let summary = match err.kind() {
            ErrorKind::Config => {
                let missing_token = StdError::source(err)
                    .and_then(|source| source.downcast_ref::<ConfigError>())
                    .is_some_and(|source| matches!(source, ConfigError::MissingToken));
                if missing_token {
                    "No Token Provided"
                } else {
                    "Invalid Provider Configuration"
                }
            }
            ErrorKind::Client { method } => match method.as_str() {
                ISSUE_LICENSE => "Unable to Issue License",
                GET_LICENSE => "Unable to Read License",
                REMOVE_LICENSE => "Unable to Delete License",
                _ => "Client Error",
            },
            ErrorKind::MissingId => "Missing License Id",
            ErrorKind::IdMismatch { .. } => "Unexpected License Returned",
            ErrorKind::EmptyImportId => "Invalid Import Id",
            ErrorKind::RequiresReplace { .. } => "License Requires Replacement",
        };
        Diagnostic::new(summary, err.to_string())
    }
}

impl From<ProviderError> for Diagnostic {
    fn from(err: ProviderError) -> Self {
        Diagnostic::from(&err)
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.summary, self.detail)
    }
}
