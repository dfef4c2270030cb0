//! HTTP client for the users resource
//!
//! Thin reqwest wrapper: builds member URLs, maps transport failures, non-2xx
//! statuses and undecodable bodies into [`ApiError`].

use super::{ApiError, UsersApi};
use crate::state::User;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

/// Default collection endpoint
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/users";

const USER_AGENT: &str = concat!("users-tui/", env!("CARGO_PKG_VERSION"));

/// Client for one users collection endpoint
#[derive(Debug, Clone)]
pub struct HttpUsersClient {
    client: Client,
    /// Collection URL without a trailing slash
    base_url: String,
}

impl HttpUsersClient {
    /// Create a client for the collection at `base_url`
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The collection URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn member_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Send a request and reject anything that is not a 2xx answer
async fn send(
    method: &'static str,
    url: &str,
    request: RequestBuilder,
) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|source| ApiError::Transport {
        method,
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}

#[async_trait]
impl UsersApi for HttpUsersClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.base_url.as_str();
        let response = send("GET", url, self.client.get(url)).await?;
        let users: Vec<User> = response.json().await.map_err(|source| ApiError::Decode {
            method: "GET",
            url: url.to_string(),
            source,
        })?;
        tracing::debug!("Fetched {} users from {url}", users.len());
        Ok(users)
    }

    async fn create_user(&self, user: &User) -> Result<User, ApiError> {
        let url = self.base_url.as_str();
        let response = send("POST", url, self.client.post(url).json(user)).await?;
        response.json().await.map_err(|source| ApiError::Decode {
            method: "POST",
            url: url.to_string(),
            source,
        })
    }

    async fn update_user(&self, id: u64, user: &User) -> Result<(), ApiError> {
        let url = self.member_url(id);
        send("PUT", &url, self.client.put(&url).json(user)).await?;
        Ok(())
    }

    async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        let url = self.member_url(id);
        send("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }
}
