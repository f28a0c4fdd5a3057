//! Shared HTTP helper behind every resource endpoint.
//!
//! # Design
//! `WebEndpoint` owns the `RequestSpec` and a `ureq::Agent` configured to
//! report 4xx/5xx responses as data rather than `Err`, so status
//! interpretation stays with the caller's `expect_status`. Each verb helper
//! builds an `HttpRequest` (absolute URL, default headers, JSON body) and
//! executes it in one shot. Resource endpoints compose this instead of
//! inheriting from it.

use serde::Serialize;
use ureq::Agent;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestSpec};

/// Issues one-shot HTTP requests described by a `RequestSpec`.
#[derive(Clone)]
pub struct WebEndpoint {
    spec: RequestSpec,
    agent: Agent,
}

impl WebEndpoint {
    pub fn new(spec: RequestSpec) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { spec, agent }
    }

    pub fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.execute(self.build(HttpMethod::Get, path, None))
    }

    pub fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        self.execute(self.build(HttpMethod::Post, path, Some(body)))
    }

    pub fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        self.execute(self.build(HttpMethod::Put, path, Some(body)))
    }

    fn build(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = self.spec.headers().to_vec();
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        HttpRequest {
            method,
            url: self.spec.url(path),
            headers,
            body,
        }
    }

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let result = match method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&url);
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&url);
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.send(body.unwrap_or_default().as_bytes())
            }
            HttpMethod::Put => {
                let mut builder = self.agent.put(&url);
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.send(body.unwrap_or_default().as_bytes())
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
