//! Backend API
//!
//! REST bindings to the lost-and-found backend, organized by domain.

mod auth;
mod items;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::config;
use crate::error::ApiError;

// Re-export all public items
pub use auth::*;
pub use items::*;

fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Non-2xx becomes an error carrying the server detail
async fn check(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("{} returned {}", resp.url(), status);
    Err(ApiError::from_response(status, &body))
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = check(resp).await?;
    resp.json::<T>().await.map_err(ApiError::from)
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    let url = config().url(path);
    log::debug!("GET {}", url);
    let resp = with_bearer(Request::get(&url), token).send().await?;
    decode(resp).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = config().url(path);
    log::debug!("POST {}", url);
    let resp = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Build(e.to_string()))?
        .send()
        .await?;
    decode(resp).await
}

/// POST without a body; the response body is ignored beyond its status
async fn post_empty(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    let url = config().url(path);
    log::debug!("POST {}", url);
    let resp = with_bearer(Request::post(&url), token).send().await?;
    check(resp).await.map(|_| ())
}

async fn post_form(path: &str, token: Option<&str>, form: web_sys::FormData) -> Result<serde_json::Value, ApiError> {
    let url = config().url(path);
    log::debug!("POST (multipart) {}", url);
    let resp = with_bearer(Request::post(&url), token)
        .body(form)
        .map_err(|e| ApiError::Build(e.to_string()))?
        .send()
        .await?;
    decode(resp).await
}
