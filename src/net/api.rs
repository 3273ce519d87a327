//! HTTP execution against the remote recipes API.
//!
//! Client-side (hydrate): real calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`ApiError::Unavailable`] since the recipes API is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `Result` instead of panics so a failed action degrades
//! UI behavior without crashing hydration. Responses outside 2xx map to
//! [`ApiError::Status`]; redirects are followed by the browser before a
//! status ever reaches this layer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::request::{ApiRequest, Method};
use super::types::{CreateRecipeBody, RecipeItem, UpdateRecipeBody};
use crate::config::AppConfig;

/// Failure modes of one API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("server returned {status} for {method} {url}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    #[error("invalid response payload: {0}")]
    Payload(String),
    #[error("not available on server")]
    Unavailable,
}

/// `GET /recipes` URL scoped to one user.
///
/// The email is interpolated verbatim (no percent-encoding); the server
/// maps `' '` back to `'+'` itself.
pub fn recipes_list_url(base_url: &str, user_email: &str) -> String {
    format!("{base_url}/recipes?user_email={user_email}")
}

/// `POST /recipes` URL.
pub fn recipes_create_url(base_url: &str) -> String {
    format!("{base_url}/recipes")
}

/// Per-item URL for PATCH/DELETE, scoped to one user.
pub fn recipe_item_url(base_url: &str, recipe_id: &str, user_email: &str) -> String {
    format!("{base_url}/recipes/{recipe_id}?user_email={user_email}")
}

/// Fetch all recipes for `user_email`, replacing nothing on failure.
pub async fn fetch_recipes(
    config: &AppConfig,
    token: &str,
    user_email: &str,
) -> Result<Vec<RecipeItem>, ApiError> {
    let url = recipes_list_url(&config.api_base_url, user_email);
    #[cfg(feature = "hydrate")]
    {
        let response = execute(&ApiRequest::new(Method::Get, &url, token, None)).await?;
        response
            .json::<Vec<RecipeItem>>()
            .await
            .map_err(|e| ApiError::Payload(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token);
        Err(ApiError::Unavailable)
    }
}

/// Create a recipe and return the server's echo of the stored item.
pub async fn create_recipe(
    config: &AppConfig,
    token: &str,
    body: &CreateRecipeBody,
) -> Result<RecipeItem, ApiError> {
    let url = recipes_create_url(&config.api_base_url);
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::to_value(body).map_err(|e| ApiError::Payload(e.to_string()))?;
        let response = execute(&ApiRequest::new(Method::Post, &url, token, Some(payload))).await?;
        response
            .json::<RecipeItem>()
            .await
            .map_err(|e| ApiError::Payload(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token, body);
        Err(ApiError::Unavailable)
    }
}

/// Patch changed fields of a recipe and return the updated item.
pub async fn update_recipe(
    config: &AppConfig,
    token: &str,
    recipe_id: &str,
    user_email: &str,
    body: &UpdateRecipeBody,
) -> Result<RecipeItem, ApiError> {
    let url = recipe_item_url(&config.api_base_url, recipe_id, user_email);
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::to_value(body).map_err(|e| ApiError::Payload(e.to_string()))?;
        let response =
            execute(&ApiRequest::new(Method::Patch, &url, token, Some(payload))).await?;
        response
            .json::<RecipeItem>()
            .await
            .map_err(|e| ApiError::Payload(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token, body);
        Err(ApiError::Unavailable)
    }
}

/// Delete a recipe. The response body is ignored; status decides.
pub async fn delete_recipe(
    config: &AppConfig,
    token: &str,
    recipe_id: &str,
    user_email: &str,
) -> Result<(), ApiError> {
    let url = recipe_item_url(&config.api_base_url, recipe_id, user_email);
    #[cfg(feature = "hydrate")]
    {
        execute(&ApiRequest::new(Method::Delete, &url, token, None)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token);
        Err(ApiError::Unavailable)
    }
}

/// Send one described request and return its response if the status is 2xx.
#[cfg(feature = "hydrate")]
async fn execute(request: &ApiRequest) -> Result<gloo_net::http::Response, ApiError> {
    let mut builder = match request.method {
        Method::Get => gloo_net::http::Request::get(&request.url),
        Method::Post => gloo_net::http::Request::post(&request.url),
        Method::Patch => gloo_net::http::Request::patch(&request.url),
        Method::Delete => gloo_net::http::Request::delete(&request.url),
    };
    for (name, value) in request.headers() {
        builder = builder.header(name, &value);
    }

    let ready = match &request.body {
        Some(body) => {
            let text =
                serde_json::to_string(body).map_err(|e| ApiError::Payload(e.to_string()))?;
            builder
                .body(text)
                .map_err(|e| ApiError::Network(e.to_string()))?
        }
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let response = ready
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status {
            method: request.method.as_str(),
            url: request.url.clone(),
            status: response.status(),
        });
    }
    Ok(response)
}
