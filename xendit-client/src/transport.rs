//! Authenticated HTTP transport.
//!
//! Every request goes to the credentials' base URL with HTTP Basic auth
//! (API key as username, empty password) and a JSON content type. One attempt
//! per call; network failures are returned as-is.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use tracing::debug;

use xendit_types::Credentials;

use crate::ClientError;

/// Status and body of a response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET and POST requests on behalf of a set of credentials.
#[derive(Debug, Clone)]
pub struct Transport {
    pub(crate) credentials: Credentials,
    pub(crate) http: Client,
}

impl Transport {
    pub fn new(credentials: Credentials, http: Client) -> Self {
        Self { credentials, http }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sends a GET request with the given query parameters.
    #[tracing::instrument(skip(self, query, headers), fields(method = "GET"))]
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
        headers: &[(&str, String)],
    ) -> Result<RawResponse, ClientError> {
        let mut req = self.http.get(self.url(path, None)?);
        if !query.is_empty() {
            req = req.query(query);
        }
        self.execute(req, headers).await
    }

    /// Sends a GET request for one resource of a collection.
    ///
    /// `id` is percent-encoded as a single path segment, so reserved
    /// characters in it cannot change the path or add a query.
    #[tracing::instrument(skip(self, headers), fields(method = "GET"))]
    pub async fn get_resource(
        &self,
        path: &str,
        id: &str,
        headers: &[(&str, String)],
    ) -> Result<RawResponse, ClientError> {
        let req = self.http.get(self.url(path, Some(id))?);
        self.execute(req, headers).await
    }

    /// Sends a POST request with `body` serialized as JSON text.
    #[tracing::instrument(skip(self, headers, body), fields(method = "POST"))]
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        headers: &[(&str, String)],
        body: &B,
    ) -> Result<RawResponse, ClientError> {
        let body = serde_json::to_vec(body)?;
        let req = self.http.post(self.url(path, None)?).body(body);
        self.execute(req, headers).await
    }

    async fn execute(
        &self,
        req: RequestBuilder,
        headers: &[(&str, String)],
    ) -> Result<RawResponse, ClientError> {
        let req = req
            .headers(merge_headers(headers)?)
            .basic_auth(self.credentials.api_key(), Some(""));

        debug!("sending request");
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        debug!(status, "received response");

        Ok(RawResponse { status, body })
    }

    fn url(&self, path: &str, id: Option<&str>) -> Result<Url, ClientError> {
        let base_url = self.credentials.base_url();
        let invalid = || ClientError::InvalidBaseUrl {
            base_url: base_url.to_string(),
        };

        let mut url = Url::parse(&format!("{}/{}", base_url, path.trim_start_matches('/')))
            .map_err(|_| invalid())?;
        if let Some(id) = id {
            url.path_segments_mut().map_err(|_| invalid())?.push(id);
        }
        Ok(url)
    }
}

/// Default JSON content type, overridden by any caller header of the same name.
fn merge_headers(custom: &[(&str, String)]) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in custom {
        let header_name = HeaderName::from_bytes(name.as_bytes())?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeaderValue {
                name: (*name).to_string(),
            })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}
