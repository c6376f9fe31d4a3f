use aidbox_models::id::LicenseId;

use crate::{
    error::{ErrorKind, ProviderError},
    state::LicenseState,
};

/// Seeds state with an id. The portal is not consulted; the next read fills in the rest.
pub fn import_license(id: &str) -> Result<LicenseState, ProviderError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ProviderError::from_parts(ErrorKind::EmptyImportId, None));
    }
    tracing::debug!(license_id = id, "importing license");
    Ok(LicenseState::imported(LicenseId::new(id)))
}
