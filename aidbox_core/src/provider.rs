use aidbox_client::AidboxClient;
use std::sync::Arc;

use crate::{
    config::{ProviderConfig, ProviderConfigInput},
    error::ProviderError,
    license::LicenseResource,
    schema::{provider_schema, Schema},
};

pub const TYPE_NAME: &str = "aidbox";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderMetadata {
    pub type_name: &'static str,
    pub version: String,
    pub resources: Vec<&'static str>,
}

/// Entry point of the provider: resolves its configuration and hands out configured resources.
#[derive(Clone, Debug)]
pub struct AidboxProvider {
    version: String,
}

impl AidboxProvider {
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    #[must_use]
    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: TYPE_NAME,
            version: self.version.clone(),
            resources: vec![crate::license::TYPE_NAME],
        }
    }

    #[must_use]
    pub fn schema(&self) -> Schema {
        provider_schema()
    }

    /// Resolves the provider block against the process environment and builds the client.
    ///
    /// A missing token fails here, before any resource operation runs.
    pub fn configure(&self, input: ProviderConfigInput) -> Result<LicenseResource, ProviderError> {
        let config = ProviderConfig::from_env(input)?;
        Ok(self.configure_with(&config))
    }

    #[must_use]
    pub fn configure_with(&self, config: &ProviderConfig) -> LicenseResource {
        tracing::debug!(
            endpoint = %config.endpoint,
            format = %config.format,
            "configuring provider"
        );
        let client = AidboxClient::with_format(&config.endpoint, &config.token, config.format);
        LicenseResource::new(Arc::new(client))
    }
}
