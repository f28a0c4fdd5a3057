//! Endpoint wrapper for the `/users` resource.

use tracing::info;

use crate::endpoint::WebEndpoint;
use crate::error::ApiError;
use crate::http::{HttpResponse, RequestSpec};
use crate::types::UserDto;

const USERS_PATH: &str = "/users";

#[derive(Clone)]
pub struct UserEndpoint {
    endpoint: WebEndpoint,
}

impl UserEndpoint {
    pub fn new(spec: RequestSpec) -> Self {
        Self {
            endpoint: WebEndpoint::new(spec),
        }
    }

    /// Create a user and return the created resource. Expects 201.
    pub fn create(&self, user: &UserDto) -> Result<UserDto, ApiError> {
        self.create_expecting(user, 201)?.json()
    }

    /// Create a user, asserting `expected` as the response status.
    pub fn create_expecting(
        &self,
        user: &UserDto,
        expected: u16,
    ) -> Result<HttpResponse, ApiError> {
        info!("create new user");
        self.endpoint
            .post(USERS_PATH, user)?
            .expect_status(expected)
    }

    /// Update the user with `id` and return the updated resource.
    /// Expects 200.
    pub fn update(&self, id: i64, user: &UserDto) -> Result<UserDto, ApiError> {
        self.update_expecting(id, user, 200)?.json()
    }

    /// Update the user with `id`, asserting `expected` as the response
    /// status.
    pub fn update_expecting(
        &self,
        id: i64,
        user: &UserDto,
        expected: u16,
    ) -> Result<HttpResponse, ApiError> {
        info!("update user by id [{id}]");
        self.endpoint
            .put(&user_path(id), user)?
            .expect_status(expected)
    }

    /// Fetch the user with `id`. Expects 200.
    pub fn get_by_id(&self, id: i64) -> Result<UserDto, ApiError> {
        self.get_by_id_expecting(id, 200)?.json()
    }

    /// Fetch the user with `id`, asserting `expected` as the response
    /// status.
    pub fn get_by_id_expecting(&self, id: i64, expected: u16) -> Result<HttpResponse, ApiError> {
        info!("get user by id [{id}]");
        self.endpoint.get(&user_path(id))?.expect_status(expected)
    }

    /// Fetch all users. Expects 200.
    pub fn get_all(&self) -> Result<Vec<UserDto>, ApiError> {
        self.get_all_expecting(200)?.json()
    }

    /// Fetch all users, asserting `expected` as the response status.
    pub fn get_all_expecting(&self, expected: u16) -> Result<HttpResponse, ApiError> {
        info!("get all users");
        self.endpoint.get(USERS_PATH)?.expect_status(expected)
    }
}

fn user_path(id: i64) -> String {
    format!("{USERS_PATH}/{id}")
}
