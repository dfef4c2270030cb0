//! Trait abstraction for the users resource to enable mocking in tests

use super::ApiError;
use crate::state::User;
use async_trait::async_trait;

/// CRUD operations against the remote users collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// `GET /users`: the full collection
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// `POST /users`: returns the stored record with its assigned id
    async fn create_user(&self, user: &User) -> Result<User, ApiError>;

    /// `PUT /users/{id}`: the response body is not used
    async fn update_user(&self, id: u64, user: &User) -> Result<(), ApiError>;

    /// `DELETE /users/{id}`
    async fn delete_user(&self, id: u64) -> Result<(), ApiError>;
}
