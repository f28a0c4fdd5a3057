//! Synchronous endpoint wrappers for the placeholder REST API.
//!
//! # Overview
//! Per-resource endpoints (`CommentEndpoint`, `UserEndpoint`) issue one-shot
//! HTTP requests, assert the response status code, and deserialize JSON
//! bodies into DTOs. Test suites construct a [`RequestSpec`] once (base URL
//! plus default headers) and hand it to each endpoint.
//!
//! # Design
//! - Every operation comes in two variants: a typed happy path with the
//!   resource's expected status baked in (create expects 201, everything
//!   else 200), and an `*_expecting` variant that takes the expected status
//!   and returns the checked `HttpResponse` for further extraction.
//! - A status mismatch is the framework's one assertion failure:
//!   `ApiError::UnexpectedStatus` carries the expected code, the actual
//!   code, and the body.
//! - `WebEndpoint` is the shared transport all resource endpoints compose;
//!   it owns a `ureq::Agent` with status-as-error disabled so non-2xx
//!   responses come back as data.

pub mod comment;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod types;
pub mod user;

pub use comment::CommentEndpoint;
pub use endpoint::WebEndpoint;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestSpec};
pub use types::{Address, CommentDto, Company, Geo, UserDto};
pub use user::UserEndpoint;
