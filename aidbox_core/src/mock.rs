use aidbox_client::{
    error::{AidboxError, ErrorKind},
    LicenseApi,
};
use aidbox_models::{
    id::LicenseId,
    license::{License, LicenseResponse},
    rpc::{GET_LICENSE, ISSUE_LICENSE, REMOVE_LICENSE},
};
use async_trait::async_trait;
use hyper::StatusCode;
use std::sync::Mutex;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    Issue {
        name: String,
        product: String,
        kind: String,
    },
    Get(LicenseId),
    Delete(LicenseId),
}

/// In-memory portal holding at most one license. Fails every call when `failing` is set.
/// With `any_id` set, reads return the stored license whatever id was asked for.
#[derive(Default)]
pub struct MockApi {
    pub license: Mutex<Option<LicenseResponse>>,
    pub calls: Mutex<Vec<Call>>,
    pub failing: Option<(StatusCode, &'static str)>,
    pub any_id: bool,
}

impl MockApi {
    pub fn with_license(response: LicenseResponse) -> Self {
        Self {
            license: Mutex::new(Some(response)),
            ..Self::default()
        }
    }

    pub fn answering(response: LicenseResponse) -> Self {
        Self {
            any_id: true,
            ..Self::with_license(response)
        }
    }

    pub fn failing(status: StatusCode, body: &'static str) -> Self {
        Self {
            failing: Some((status, body)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, method: &str) -> Result<(), AidboxError> {
        match self.failing {
            Some((status, body)) => Err(AidboxError::from_parts(
                method,
                ErrorKind::Response {
                    status,
                    bytes: body.as_bytes().to_vec(),
                },
                None,
            )),
            None => Ok(()),
        }
    }

    fn not_found(method: &str) -> AidboxError {
        AidboxError::from_parts(
            method,
            ErrorKind::Response {
                status: StatusCode::NOT_FOUND,
                bytes: b"license not found".to_vec(),
            },
            None,
        )
    }
}

pub fn issued(id: &str, name: &str, product: &str, kind: &str) -> LicenseResponse {
    LicenseResponse {
        license: License {
            id: LicenseId::new(id),
            name: name.into(),
            product: product.into(),
            kind: kind.into(),
            status: "active".into(),
            max_instances: 5,
            expiration: "2030-01-01T00:00:00Z".into(),
            ..License::default()
        },
        jwt: "abc.def.ghi".into(),
    }
}

#[async_trait]
impl LicenseApi for MockApi {
    async fn issue_license(
        &self,
        name: &str,
        product: &str,
        kind: &str,
    ) -> Result<LicenseResponse, AidboxError> {
        self.calls.lock().unwrap().push(Call::Issue {
            name: name.into(),
            product: product.into(),
            kind: kind.into(),
        });
        self.check(ISSUE_LICENSE)?;
        let response = issued("lic-1", name, product, kind);
        *self.license.lock().unwrap() = Some(response.clone());
        Ok(response)
    }

    async fn get_license(&self, id: &LicenseId) -> Result<LicenseResponse, AidboxError> {
        self.calls.lock().unwrap().push(Call::Get(id.clone()));
        self.check(GET_LICENSE)?;
        self.license
            .lock()
            .unwrap()
            .clone()
            .filter(|response| self.any_id || &response.license.id == id)
            .ok_or_else(|| Self::not_found(GET_LICENSE))
    }

    async fn delete_license(&self, id: &LicenseId) -> Result<(), AidboxError> {
        self.calls.lock().unwrap().push(Call::Delete(id.clone()));
        self.check(REMOVE_LICENSE)?;
        let mut license = self.license.lock().unwrap();
        if license.as_ref().is_some_and(|response| &response.license.id == id) {
            *license = None;
            Ok(())
        } else {
            Err(Self::not_found(REMOVE_LICENSE))
        }
    }
}
