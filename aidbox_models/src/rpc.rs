use serde::{Deserialize, Serialize};

use crate::license::{License, LicenseResponse};

pub const ISSUE_LICENSE: &str = "portal.portal/issue-license";
pub const GET_LICENSE: &str = "portal.portal/get-license";
pub const REMOVE_LICENSE: &str = "portal.portal/remove-license";

/// The `{method, params}` envelope every call is sent in.
#[derive(Debug, Deserialize, Serialize)]
pub struct RpcRequest<P> {
    pub method: String,
    pub params: P,
}

#[derive(Debug, Serialize)]
pub struct IssueLicenseParams<'a> {
    pub token: &'a str,
    pub name: &'a str,
    pub product: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
}

/// Params for the calls that address an existing license.
#[derive(Debug, Serialize)]
pub struct LicenseIdParams<'a> {
    pub token: &'a str,
    pub id: &'a str,
}

/// The `{result: {license, jwt}}` envelope of a successful call.
#[derive(Debug, Deserialize, Serialize)]
pub struct RpcResponse {
    pub result: LicenseResult,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LicenseResult {
    pub license: License,
    #[serde(default)]
    pub jwt: String,
}

impl From<RpcResponse> for LicenseResponse {
    fn from(response: RpcResponse) -> Self {
        LicenseResponse {
            license: response.result.license,
            jwt: response.result.jwt,
        }
    }
}
