//! Failures of calls against the users resource

use thiserror::Error;

/// A request that did not produce a usable answer.
///
/// Every variant is a network or server failure from the caller's point of
/// view. Callers log it and leave their state as it was.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never got an HTTP response (DNS, connect, TLS, IO)
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// The response body was not the expected JSON
    #[error("{method} {url} returned an unreadable body: {source}")]
    Decode {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status of the failed call, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::Status {
            method: "PUT",
            url: "http://localhost/users/1".to_string(),
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "PUT http://localhost/users/1 returned HTTP 500"
        );
        assert_eq!(err.status(), Some(500));
    }
}
