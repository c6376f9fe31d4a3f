use aidbox_client::{
    format::{UnknownFormat, WireFormat},
    DEFAULT_ENDPOINT,
};
use serde::Deserialize;
use std::{
    error::Error as StdError,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};

pub const TOKEN_ENV: &str = "AIDBOX_TOKEN";

/// Provider block as written by the user. Every attribute is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProviderConfigInput {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// Fully resolved provider configuration. Built once when the provider is configured.
#[derive(Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub token: String,
    pub format: WireFormat,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingToken,
    Format(UnknownFormat),
}

impl ProviderConfig {
    /// Resolves the configuration against the process environment.
    pub fn from_env(input: ProviderConfigInput) -> Result<Self, ConfigError> {
        Self::resolve(input, |key| std::env::var(key).ok())
    }

    /// Resolves the configuration.
    ///
    /// The endpoint falls back to [`DEFAULT_ENDPOINT`]. The token is taken from the input, then
    /// from [`TOKEN_ENV`] through `env`; if neither is set the configuration is rejected.
    pub fn resolve<F>(input: ProviderConfigInput, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = non_empty(input.endpoint).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let token = non_empty(input.token)
            .or_else(|| non_empty(env(TOKEN_ENV)))
            .ok_or(ConfigError::MissingToken)?;
        let format = match non_empty(input.format) {
            Some(format) => format.parse::<WireFormat>().map_err(ConfigError::Format)?,
            None => WireFormat::default(),
        };

        Ok(Self {
            endpoint,
            token,
            format,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("format", &self.format)
            .finish()
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigError::MissingToken => write!(
                f,
                "no token provided, set `token` in the provider configuration or the {TOKEN_ENV} environment variable"
            ),
            ConfigError::Format(err) => Display::fmt(err, f),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::MissingToken => None,
            ConfigError::Format(err) => Some(err),
        }
    }
}
