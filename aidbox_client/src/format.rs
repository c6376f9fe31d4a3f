use serde::{de::DeserializeOwned, Serialize};
use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Encoding used for the envelopes on the wire.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WireFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Debug)]
pub struct UnknownFormat(pub String);

impl WireFormat {
    /// Value sent in both `Content-Type` and `Accept`.
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            WireFormat::Yaml => "text/yaml",
            WireFormat::Json => "application/json",
        }
    }

    pub fn encode<T: Serialize>(
        self,
        value: &T,
    ) -> Result<Vec<u8>, Box<dyn StdError + Send + Sync>> {
        match self {
            WireFormat::Yaml => Ok(serde_yaml::to_string(value)?.into_bytes()),
            WireFormat::Json => Ok(serde_json::to_vec(value)?),
        }
    }

    pub fn decode<T: DeserializeOwned>(
        self,
        bytes: &[u8],
    ) -> Result<T, Box<dyn StdError + Send + Sync>> {
        match self {
            WireFormat::Yaml => Ok(serde_yaml::from_slice(bytes)?),
            WireFormat::Json => Ok(serde_json::from_slice(bytes)?),
        }
    }
}

impl FromStr for WireFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(WireFormat::Yaml),
            "json" => Ok(WireFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl Display for WireFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            WireFormat::Yaml => f.write_str("yaml"),
            WireFormat::Json => f.write_str("json"),
        }
    }
}

impl Display for UnknownFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "unknown wire format `{}`, expected `yaml` or `json`", self.0)
    }
}

impl StdError for UnknownFormat {}
