mod create;
mod delete;
mod import;
mod read;
mod update;

pub use create::create_license;
pub use delete::delete_license;
pub use import::import_license;
pub use read::read_license;
pub use update::update_license;

use aidbox_client::LicenseApi;
use std::sync::Arc;

use crate::{
    error::ProviderError,
    schema::{license_schema, Schema},
    state::{LicensePlan, LicenseState},
};

pub const TYPE_NAME: &str = "aidbox_license";

/// The `aidbox_license` resource. Every verb makes at most one call through the injected API.
#[derive(Clone)]
pub struct LicenseResource {
    api: Arc<dyn LicenseApi>,
}

impl LicenseResource {
    #[must_use]
    pub fn new(api: Arc<dyn LicenseApi>) -> Self {
        Self { api }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    #[must_use]
    pub fn schema(&self) -> Schema {
        license_schema()
    }

    pub async fn create(&self, plan: &LicensePlan) -> Result<LicenseState, ProviderError> {
        create_license(self.api.as_ref(), plan).await
    }

    pub async fn read(&self, prior: &LicenseState) -> Result<LicenseState, ProviderError> {
        read_license(self.api.as_ref(), prior).await
    }

    pub async fn update(
        &self,
        prior: &LicenseState,
        plan: &LicensePlan,
    ) -> Result<LicenseState, ProviderError> {
        update_license(self.api.as_ref(), prior, plan).await
    }

    pub async fn delete(&self, prior: &LicenseState) -> Result<(), ProviderError> {
        delete_license(self.api.as_ref(), prior).await
    }

    pub fn import(&self, id: &str) -> Result<LicenseState, ProviderError> {
        import_license(id)
    }
}
