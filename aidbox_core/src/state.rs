use aidbox_models::{
    id::LicenseId,
    license::{License, LicenseResponse},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRODUCT: &str = "aidbox";

/// Desired configuration of a license.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct LicensePlan {
    pub name: String,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Persisted attributes of an `aidbox_license`. Unknown values are `None`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct LicenseState {
    pub id: Option<LicenseId>,
    pub name: Option<String>,
    pub product: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub expiration: Option<String>,
    pub status: Option<String>,
    pub max_instances: Option<i64>,
    pub creator_id: Option<String>,
    pub project_id: Option<String>,
    pub offline: Option<bool>,
    pub created: Option<String>,
    pub meta_last_updated: Option<String>,
    pub meta_created_at: Option<String>,
    pub meta_version_id: Option<String>,
    pub issuer: Option<String>,
    pub info_hosting: Option<String>,
    pub jwt: Option<String>,
}

impl LicensePlan {
    /// The product to request, `aidbox` when none was configured.
    #[must_use]
    pub fn product(&self) -> &str {
        match self.product.as_deref() {
            Some(product) if !product.is_empty() => product,
            _ => DEFAULT_PRODUCT,
        }
    }
}

impl LicenseState {
    /// State for a freshly issued license. The user-supplied attributes come from the plan.
    #[must_use]
    pub fn issued(plan: &LicensePlan, response: LicenseResponse) -> Self {
        let mut state = Self {
            id: Some(response.license.id.clone()),
            name: Some(plan.name.clone()),
            product: Some(plan.product().to_string()),
            kind: Some(plan.kind.clone()),
            jwt: Some(response.jwt),
            ..Self::default()
        };
        state.apply_computed(response.license);
        state
    }

    /// State holding nothing but an id, as produced by an import.
    #[must_use]
    pub fn imported(id: LicenseId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Overwrites every attribute except the id with the server's view of the license.
    ///
    /// The JWT is only filled in when none is known yet.
    pub fn refresh(&mut self, response: LicenseResponse) {
        self.name = Some(response.license.name.clone());
        self.product = Some(response.license.product.clone());
        self.kind = Some(response.license.kind.clone());
        let known = self.jwt.as_deref().is_some_and(|jwt| !jwt.is_empty());
        if !known && !response.jwt.is_empty() {
            self.jwt = Some(response.jwt);
        }
        self.apply_computed(response.license);
    }

    fn apply_computed(&mut self, license: License) {
        self.expiration = Some(license.expiration);
        self.status = Some(license.status);
        self.max_instances = Some(license.max_instances);
        self.creator_id = Some(license.creator.id);
        self.project_id = Some(license.project.id);
        self.offline = Some(license.offline);
        self.created = Some(license.created);
        self.meta_last_updated = Some(license.meta.last_updated);
        self.meta_created_at = Some(license.meta.created_at);
        self.meta_version_id = Some(license.meta.version_id);
        self.issuer = Some(license.issuer);
        self.info_hosting = Some(license.info.hosting);
    }

    /// The id, if one is known and non-empty.
    #[must_use]
    pub fn license_id(&self) -> Option<&LicenseId> {
        self.id.as_ref().filter(|id| !id.is_empty())
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
