//! Endpoint wrapper for the `/comments` resource.
//!
//! Every operation comes in two variants: the typed happy path with the
//! resource's expected status baked in, and an `*_expecting` variant that
//! takes the expected status and returns the checked [`HttpResponse`] for
//! further extraction.

use tracing::info;

use crate::endpoint::WebEndpoint;
use crate::error::ApiError;
use crate::http::{HttpResponse, RequestSpec};
use crate::types::CommentDto;

const COMMENTS_PATH: &str = "/comments";

#[derive(Clone)]
pub struct CommentEndpoint {
    endpoint: WebEndpoint,
}

impl CommentEndpoint {
    pub fn new(spec: RequestSpec) -> Self {
        Self {
            endpoint: WebEndpoint::new(spec),
        }
    }

    /// Create a comment and return the created resource. Expects 201.
    pub fn create(&self, comment: &CommentDto) -> Result<CommentDto, ApiError> {
        self.create_expecting(comment, 201)?.json()
    }

    /// Create a comment, asserting `expected` as the response status.
    pub fn create_expecting(
        &self,
        comment: &CommentDto,
        expected: u16,
    ) -> Result<HttpResponse, ApiError> {
        info!("create new comment");
        self.endpoint
            .post(COMMENTS_PATH, comment)?
            .expect_status(expected)
    }

    /// Update the comment with `id` and return the updated resource.
    /// Expects 200.
    pub fn update(&self, id: i64, comment: &CommentDto) -> Result<CommentDto, ApiError> {
        self.update_expecting(id, comment, 200)?.json()
    }

    /// Update the comment with `id`, asserting `expected` as the response
    /// status.
    pub fn update_expecting(
        &self,
        id: i64,
        comment: &CommentDto,
        expected: u16,
    ) -> Result<HttpResponse, ApiError> {
        info!("update comment by id [{id}]");
        self.endpoint
            .put(&comment_path(id), comment)?
            .expect_status(expected)
    }

    /// Fetch the comment with `id`. Expects 200.
    pub fn get_by_id(&self, id: i64) -> Result<CommentDto, ApiError> {
        self.get_by_id_expecting(id, 200)?.json()
    }

    /// Fetch the comment with `id`, asserting `expected` as the response
    /// status.
    pub fn get_by_id_expecting(&self, id: i64, expected: u16) -> Result<HttpResponse, ApiError> {
        info!("get comment by id [{id}]");
        self.endpoint.get(&comment_path(id))?.expect_status(expected)
    }

    /// Fetch all comments. Expects 200.
    pub fn get_all(&self) -> Result<Vec<CommentDto>, ApiError> {
        self.get_all_expecting(200)?.json()
    }

    /// Fetch all comments, asserting `expected` as the response status.
    pub fn get_all_expecting(&self, expected: u16) -> Result<HttpResponse, ApiError> {
        info!("get all comments");
        self.endpoint.get(COMMENTS_PATH)?.expect_status(expected)
    }
}

fn comment_path(id: i64) -> String {
    format!("{COMMENTS_PATH}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_path_appends_id() {
        assert_eq!(comment_path(17), "/comments/17");
    }
}
