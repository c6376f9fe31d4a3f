use aidbox_client::LicenseApi;

use crate::{
    error::{ErrorKind, ProviderError},
    state::LicenseState,
};

/// Re-fetches a license and returns the prior state overwritten with the server's view.
#[tracing::instrument(skip_all, fields(license_id = ?prior.id))]
pub async fn read_license(
    api: &dyn LicenseApi,
    prior: &LicenseState,
) -> Result<LicenseState, ProviderError> {
    let Some(id) = prior.license_id() else {
        return Err(ProviderError::from_parts(ErrorKind::MissingId, None));
    };

    let response = api.get_license(id).await?;
    let returned = &response.license.id;
    if !returned.is_empty() && returned != id {
        tracing::error!(expected = %id, returned = %returned, "portal returned another license");
        return Err(ProviderError::from_parts(
            ErrorKind::IdMismatch {
                expected: id.clone(),
                returned: returned.clone(),
            },
            None,
        ));
    }

    let mut state = prior.clone();
    state.refresh(response);

    if &state != prior {
        tracing::debug!("license drifted from the recorded state");
    }
    Ok(state)
}
