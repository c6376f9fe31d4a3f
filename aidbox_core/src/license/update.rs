use aidbox_client::LicenseApi;

use crate::{
    error::{ErrorKind, ProviderError},
    license::read_license,
    schema::license_schema,
    state::{LicensePlan, LicenseState},
};

/// The portal has no call that modifies an issued license, so an update only succeeds when the
/// plan leaves every replace-only attribute alone. The state is then re-synchronized from the
/// server.
#[tracing::instrument(skip_all, fields(license_id = ?prior.id))]
pub async fn update_license(
    api: &dyn LicenseApi,
    prior: &LicenseState,
    plan: &LicensePlan,
) -> Result<LicenseState, ProviderError> {
    let changed = changed_attributes(prior, plan);
    if !changed.is_empty() {
        tracing::debug!(?changed, "refusing in-place update");
        return Err(ProviderError::from_parts(
            ErrorKind::RequiresReplace {
                attributes: changed,
            },
            None,
        ));
    }

    read_license(api, prior).await
}

fn changed_attributes(prior: &LicenseState, plan: &LicensePlan) -> Vec<&'static str> {
    license_schema()
        .replace_attributes()
        .filter(|attribute| {
            let (recorded, planned) = match *attribute {
                "name" => (prior.name.as_deref(), Some(plan.name.as_str())),
                "type" => (prior.kind.as_deref(), Some(plan.kind.as_str())),
                // Leaving the product out of the plan keeps whatever was issued.
                "product" => (
                    prior.product.as_deref(),
                    plan.product
                        .as_deref()
                        .filter(|product| !product.is_empty())
                        .or(prior.product.as_deref()),
                ),
                _ => return false,
            };
            recorded != planned
        })
        .collect()
}
