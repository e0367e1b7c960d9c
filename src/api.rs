//! HTTP client for the authd REST API
//!
//! WASM builds talk to the service with `gloo-net`. Native builds return
//! canned responses parsed through the same envelopes, so behavior tests
//! run without a browser.

use serde::Deserialize;
use thiserror::Error;

use crate::models::session::Session;
use crate::models::user::{NewUser, User};

/// Errors surfaced by API calls
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("request rejected: status {0}")]
    Rejected(u16),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Response envelope for `GET /users`
#[derive(Debug, Deserialize)]
struct UserListResponse {
    users: Vec<User>,
}

/// Response envelope for `GET /sessions`
#[derive(Debug, Deserialize)]
struct SessionListResponse {
    sessions: Vec<Session>,
}

/// Fetch all users (`GET /users`)
pub async fn fetch_users() -> ApiResult<Vec<User>> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::get("/users")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Rejected(response.status()));
        }
        let body = response
            .json::<UserListResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.users)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let canned = r#"{"users":[{"id":"1","name":"admin","isAdmin":true}]}"#;
        serde_json::from_str::<UserListResponse>(canned)
            .map(|body| body.users)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Create a user (`POST /users`)
pub async fn create_user(new_user: &NewUser) -> ApiResult<()> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::post("/users")
            .json(new_user)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Rejected(response.status()));
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = new_user;
        Ok(())
    }
}

/// Fetch all sessions (`GET /sessions`)
pub async fn fetch_sessions() -> ApiResult<Vec<Session>> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::get("/sessions")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Rejected(response.status()));
        }
        let body = response
            .json::<SessionListResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.sessions)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let canned = r#"{
            "sessions": [{
                "id": "a1b2",
                "userId": "1",
                "deviceData": {"ip": "127.0.0.1", "userAgent": "Mozilla/5.0"},
                "created": "2024-05-01T09:30:00Z"
            }]
        }"#;
        serde_json::from_str::<SessionListResponse>(canned)
            .map(|body| body.sessions)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Delete a session (`DELETE /sessions/{id}`)
pub async fn delete_session(id: &str) -> ApiResult<()> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let url = format!("/sessions/{}", id);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Rejected(response.status()));
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        Ok(())
    }
}
