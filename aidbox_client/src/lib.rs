#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod error;
pub mod format;

use aidbox_models::{
    id::LicenseId,
    license::LicenseResponse,
    rpc::{
        IssueLicenseParams, LicenseIdParams, RpcRequest, RpcResponse, GET_LICENSE, ISSUE_LICENSE,
        REMOVE_LICENSE,
    },
};
use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::{
    body::Bytes,
    header::{HeaderValue, ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    http::response::Parts,
    Method, Request, StatusCode,
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client as HyperClient},
    rt::TokioExecutor,
};
use serde::Serialize;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use error::{AidboxError, ErrorKind};
use format::WireFormat;

pub const DEFAULT_ENDPOINT: &str = "https://aidbox.app/rpc";

/// The license operations the portal offers.
///
/// Resources hold this instead of a concrete client so the transport can be swapped out.
#[async_trait]
pub trait LicenseApi: Send + Sync {
    async fn issue_license(
        &self,
        name: &str,
        product: &str,
        kind: &str,
    ) -> Result<LicenseResponse, AidboxError>;

    async fn get_license(&self, id: &LicenseId) -> Result<LicenseResponse, AidboxError>;

    async fn delete_license(&self, id: &LicenseId) -> Result<(), AidboxError>;
}

#[derive(Clone)]
pub struct AidboxClient {
    client: HyperClient<HttpsConnector<HttpConnector>, Full<Bytes>>,
    endpoint: String,
    token: String,
    format: WireFormat,
}

impl AidboxClient {
    #[must_use]
    pub fn new(endpoint: &str, token: &str) -> Self {
        Self::with_format(endpoint, token, WireFormat::default())
    }

    #[must_use]
    pub fn with_format(endpoint: &str, token: &str, format: WireFormat) -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        let client = HyperClient::builder(TokioExecutor::new()).build(connector);
        Self {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
            format,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub const fn format(&self) -> WireFormat {
        self.format
    }

    /// Issues a new license.
    ///
    /// # Errors
    ///
    /// See [`AidboxError`] for details.
    pub async fn issue_license(
        &self,
        name: &str,
        product: &str,
        kind: &str,
    ) -> Result<LicenseResponse, AidboxError> {
        let params = IssueLicenseParams {
            token: &self.token,
            name,
            product,
            kind,
        };
        let bytes = self.call(ISSUE_LICENSE, params).await?;
        self.decode(ISSUE_LICENSE, bytes)
    }

    /// Fetches the current server-side view of a license.
    ///
    /// # Errors
    ///
    /// See [`AidboxError`] for details.
    pub async fn get_license(&self, id: &LicenseId) -> Result<LicenseResponse, AidboxError> {
        let params = LicenseIdParams {
            token: &self.token,
            id: id.as_str(),
        };
        let bytes = self.call(GET_LICENSE, params).await?;
        self.decode(GET_LICENSE, bytes)
    }

    /// Removes a license. The response body is not inspected beyond the status.
    ///
    /// # Errors
    ///
    /// See [`AidboxError`] for details.
    pub async fn delete_license(&self, id: &LicenseId) -> Result<(), AidboxError> {
        let params = LicenseIdParams {
            token: &self.token,
            id: id.as_str(),
        };
        self.call(REMOVE_LICENSE, params).await?;
        Ok(())
    }

    /// Sends `{method, params}` to the endpoint and returns the raw body of a 200 response.
    ///
    /// # Errors
    ///
    /// See [`AidboxError`] for details.
    pub async fn call<P: Serialize>(
        &self,
        method: &str,
        params: P,
    ) -> Result<Vec<u8>, AidboxError> {
        let envelope = RpcRequest {
            method: method.to_string(),
            params,
        };
        let body = self.format.encode(&envelope).map_err(|source| {
            tracing::error!(method, err = %source, "failed to encode request");
            AidboxError::from_parts(method, ErrorKind::Serialization, Some(source))
        })?;

        let media_type = HeaderValue::from_static(self.format.media_type());
        let request = Request::builder()
            .uri(self.endpoint.as_str())
            .method(Method::POST)
            .header(CONTENT_TYPE, media_type.clone())
            .header(ACCEPT, media_type)
            .header(CONTENT_LENGTH, body.len())
            .body(Full::new(Bytes::from(body)))
            .map_err(|source| {
                tracing::error!(method, err = %source, "failed to build request");
                AidboxError::from_parts(method, ErrorKind::BuildingRequest, Some(Box::new(source)))
            })?;

        tracing::debug!(method, endpoint = %self.endpoint, format = %self.format, "calling aidbox");
        let (parts, bytes) = self.request(method, request).await?;
        tracing::trace!(method, status = %parts.status);

        if parts.status != StatusCode::OK {
            tracing::error!(
                method,
                status = %parts.status,
                body = %String::from_utf8_lossy(&bytes),
                "aidbox returned an error"
            );
            return Err(AidboxError::from_parts(
                method,
                ErrorKind::Response {
                    status: parts.status,
                    bytes,
                },
                None,
            ));
        }

        Ok(bytes)
    }

    fn decode(&self, method: &str, bytes: Vec<u8>) -> Result<LicenseResponse, AidboxError> {
        match self.format.decode::<RpcResponse>(&bytes) {
            Ok(response) => Ok(response.into()),
            Err(source) => {
                tracing::error!(method, err = %source, "failed to decode response");
                Err(AidboxError::from_parts(
                    method,
                    ErrorKind::Deserialize { bytes },
                    Some(source),
                ))
            }
        }
    }

    async fn request(
        &self,
        method: &str,
        request: Request<Full<Bytes>>,
    ) -> Result<(Parts, Vec<u8>), AidboxError> {
        let res = self.client.request(request).await.map_err(|source| {
            tracing::error!(method, err = %source, "sending request failed");
            AidboxError::from_parts(method, ErrorKind::Sending, Some(Box::new(source)))
        })?;

        let (parts, body) = res.into_parts();
        let bytes = body
            .collect()
            .await
            .map_err(|source| {
                AidboxError::from_parts(method, ErrorKind::ChunkingResponse, Some(Box::new(source)))
            })?
            .to_bytes();

        Ok((parts, bytes.into()))
    }
}

#[async_trait]
impl LicenseApi for AidboxClient {
    async fn issue_license(
        &self,
        name: &str,
        product: &str,
        kind: &str,
    ) -> Result<LicenseResponse, AidboxError> {
        AidboxClient::issue_license(self, name, product, kind).await
    }

    async fn get_license(&self, id: &LicenseId) -> Result<LicenseResponse, AidboxError> {
        AidboxClient::get_license(self, id).await
    }

    async fn delete_license(&self, id: &LicenseId) -> Result<(), AidboxError> {
        AidboxClient::delete_license(self, id).await
    }
}

impl Debug for AidboxClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AidboxClient")
            .field("endpoint", &self.endpoint)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
