//! `reqwest` implementation of the session transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use session::http::{JSON_CONTENT_TYPE, bearer, endpoint_url};
use session::{ApiError, ApiResponse, Method, Transport};
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport rooted at `base_url` (scheme and host of the backend).
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, endpoint: &str) -> String {
        endpoint_url(&self.base_url, endpoint)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<ApiResponse, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse::new(status, body))
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        debug!(%method, endpoint, "api request");
        let mut request = self
            .client
            .request(http_method(method), self.url(endpoint))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, bearer(token));
        }
        if let Some(body) = body {
            request = request.body(body);
        }
        self.send(request).await
    }

    async fn upload(&self, endpoint: &str, bytes: Vec<u8>, token: Option<&str>) -> Result<ApiResponse, ApiError> {
        debug!(endpoint, len = bytes.len(), "api upload");
        let mut request = self.client.put(self.url(endpoint)).body(bytes);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, bearer(token));
        }
        self.send(request).await
    }
}
