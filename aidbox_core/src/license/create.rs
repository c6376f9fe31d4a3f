use aidbox_client::LicenseApi;

use crate::{
    error::ProviderError,
    state::{LicensePlan, LicenseState},
};

/// Issues a new license. Nothing is returned unless the portal accepted the request.
#[tracing::instrument(skip_all, fields(name = %plan.name, kind = %plan.kind))]
pub async fn create_license(
    api: &dyn LicenseApi,
    plan: &LicensePlan,
) -> Result<LicenseState, ProviderError> {
    let product = plan.product();
    tracing::debug!(product, "issuing license");

    let response = api.issue_license(&plan.name, product, &plan.kind).await?;
    tracing::debug!(license_id = %response.license.id, "issued license");

    Ok(LicenseState::issued(plan, response))
}
