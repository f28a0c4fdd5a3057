//! HTTP transport types and the shared request specification.
//!
//! # Design
//! Requests and responses are plain data. `WebEndpoint` builds `HttpRequest`
//! values from a `RequestSpec` and executes them; the resulting
//! `HttpResponse` carries the status assertion (`expect_status`) and typed
//! extraction (`json`) that every endpoint operation chains onto. Keeping
//! the response as data means assertion failures can report the full body.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP method for a request. The REST surface only uses these three verbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// An HTTP request described as plain data, built by `WebEndpoint`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Returned by `WebEndpoint` after executing an `HttpRequest`. Endpoint
/// operations assert on it with [`HttpResponse::expect_status`] and extract
/// typed payloads with [`HttpResponse::json`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Assert the response status, returning the response for further
    /// extraction when it matches.
    ///
    /// The comparison is exact: expecting 404 and receiving 404 succeeds.
    pub fn expect_status(self, expected: u16) -> Result<Self, ApiError> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(ApiError::UnexpectedStatus {
                expected,
                actual: self.status,
                body: self.body,
            })
        }
    }

    /// Deserialize the JSON body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Base request configuration shared by all endpoints built from it:
/// the API's base URL plus default headers sent with every request.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: Vec::new(),
        }
    }

    /// Add a default header sent with every request built from this spec.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Absolute URL for a resource path such as `/comments/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}
