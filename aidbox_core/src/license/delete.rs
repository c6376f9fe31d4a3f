use aidbox_client::LicenseApi;

use crate::{
    error::{ErrorKind, ProviderError},
    state::LicenseState,
};

/// Removes the license from the portal.
#[tracing::instrument(skip_all, fields(license_id = ?prior.id))]
pub async fn delete_license(
    api: &dyn LicenseApi,
    prior: &LicenseState,
) -> Result<(), ProviderError> {
    let Some(id) = prior.license_id() else {
        return Err(ProviderError::from_parts(ErrorKind::MissingId, None));
    };

    api.delete_license(id).await?;
    tracing::debug!("removed license");
    Ok(())
}
