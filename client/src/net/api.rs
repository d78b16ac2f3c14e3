//! Fetch-backed [`Transport`] for the backend REST API.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net` against the same origin
//! under `/api/v1`.
//! Native builds and tests: every call returns [`ApiError::Unavailable`]
//! since there is no fetch implementation to drive.
//!
//! ERROR HANDLING
//! ==============
//! Only transport failures become errors; non-2xx responses are returned
//! so callers can apply their own success policy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::http::{ApiError, ApiResponse, Method, Transport};

/// Backend origin. Empty means same origin as the page.
#[cfg(any(test, feature = "csr"))]
const API_ORIGIN: &str = "";

#[cfg(any(test, feature = "csr"))]
fn request_url(endpoint: &str) -> String {
    session::http::endpoint_url(API_ORIGIN, endpoint)
}

#[cfg(feature = "csr")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "csr")]
fn builder(method: Method, url: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Patch => Request::patch(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

#[cfg(feature = "csr")]
async fn read_response(resp: gloo_net::http::Response) -> Result<ApiResponse, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(ApiResponse::new(status, body))
}

/// HTTP client used by every page. Stateless; construct where needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use session::http::{JSON_CONTENT_TYPE, bearer};

            let url = request_url(endpoint);
            let mut req = builder(method, &url).header("Content-Type", JSON_CONTENT_TYPE);
            if let Some(token) = token {
                req = req.header("Authorization", &bearer(token));
            }
            let resp = match body {
                Some(body) => req.body(body).map_err(network_error)?.send().await,
                None => req.send().await,
            }
            .map_err(network_error)?;
            read_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, endpoint, body, token);
            Err(ApiError::Unavailable)
        }
    }

    async fn upload(&self, endpoint: &str, body: Vec<u8>, token: Option<&str>) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = request_url(endpoint);
            let mut req = gloo_net::http::Request::put(&url);
            if let Some(token) = token {
                req = req.header("Authorization", &session::http::bearer(token));
            }
            let payload = js_sys::Uint8Array::from(body.as_slice());
            let resp = req
                .body(payload)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            read_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (endpoint, body, token);
            Err(ApiError::Unavailable)
        }
    }
}
