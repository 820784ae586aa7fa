//! Auth Endpoints

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, Me, SignupRequest};

use super::{get_json, post_json};

pub async fn signup(req: &SignupRequest<'_>) -> Result<serde_json::Value, ApiError> {
    post_json("/auth/signup", req).await
}

pub async fn login(req: &LoginRequest<'_>) -> Result<LoginResponse, ApiError> {
    post_json("/auth/login", req).await
}

/// Validate the token and read back who it belongs to
pub async fn me(token: &str) -> Result<Me, ApiError> {
    get_json("/auth/me", Some(token)).await
}
