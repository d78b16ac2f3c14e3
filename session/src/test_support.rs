//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::http::{ApiError, ApiResponse, Method, Transport};
use crate::storage::{SessionStorage, StorageError};
use crate::types::User;

/// A request as seen by [`MockTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Vec<u8>>,
    pub token: Option<String>,
}

/// Scripted transport: pops one canned reply per call and records the call.
/// Once the script runs dry every call fails with a network error.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new(replies: Vec<Result<ApiResponse, ApiError>>) -> Self {
        Self { replies: Mutex::new(replies.into()), calls: Mutex::new(Vec::new()) }
    }

    pub fn status(status: u16, body: &str) -> Result<ApiResponse, ApiError> {
        Ok(ApiResponse::new(status, body))
    }

    pub fn network_error() -> Result<ApiResponse, ApiError> {
        Err(ApiError::Network("connection refused".to_owned()))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: RecordedCall) -> Result<ApiResponse, ApiError> {
        self.calls.lock().unwrap().push(call);
        self.replies.lock().unwrap().pop_front().unwrap_or_else(Self::network_error)
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        self.next(RecordedCall {
            method,
            endpoint: endpoint.to_owned(),
            body: body.map(String::into_bytes),
            token: token.map(str::to_owned),
        })
    }

    async fn upload(&self, endpoint: &str, body: Vec<u8>, token: Option<&str>) -> Result<ApiResponse, ApiError> {
        self.next(RecordedCall {
            method: Method::Put,
            endpoint: endpoint.to_owned(),
            body: Some(body),
            token: token.map(str::to_owned),
        })
    }
}

/// Storage that rejects writes to one key.
#[derive(Default)]
pub struct FailingStorage {
    pub inner: crate::storage::MemoryStorage,
    pub fail_key: &'static str,
}

impl SessionStorage for FailingStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.fail_key {
            return Err(StorageError::Write { key: key.to_owned(), message: "quota exceeded".to_owned() });
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

pub fn sample_user() -> User {
    User {
        id: Some("user:alice".to_owned()),
        name: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        admin: true,
        password: None,
        firstname: Some("Alice".to_owned()),
        lastname: None,
    }
}

pub fn sample_user_json() -> String {
    serde_json::to_string(&sample_user()).unwrap()
}
