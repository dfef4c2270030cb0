//! Client side of the remote users resource

mod client;
mod error;
mod traits;

pub use client::{HttpUsersClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use traits::UsersApi;

#[cfg(test)]
pub use traits::MockUsersApi;
