use serde::{Deserialize, Serialize};

use crate::id::{identifier, LicenseId};

/// A license as the portal returns it.
///
/// Everything except `id` is computed by the server, and any field the server leaves out
/// decodes to its zero value.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct License {
    pub id: LicenseId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub product: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub expiration: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "max-instances", alias = "maxInstances", default)]
    pub max_instances: i64,
    #[serde(default)]
    pub creator: Reference,
    #[serde(default)]
    pub project: Reference,
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub info: Info,
    #[serde(default)]
    pub additional: Additional,
}

/// Pointer to another portal resource, used for the creator and the project.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Reference {
    #[serde(default, deserialize_with = "identifier")]
    pub id: String,
    #[serde(rename = "resourceType", default)]
    pub resource_type: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Meta {
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "versionId", default, deserialize_with = "identifier")]
    pub version_id: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Info {
    #[serde(default)]
    pub hosting: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Additional {
    #[serde(rename = "expiration-days", alias = "expirationDays", default)]
    pub expiration_days: i64,
    #[serde(
        rename = "box-url",
        alias = "boxUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub box_url: Option<String>,
}

/// A license paired with the JWT the portal signed for it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LicenseResponse {
    pub license: License,
    pub jwt: String,
}
