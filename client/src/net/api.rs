//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result<_, String>` outputs instead of panics. The
//! error string is the server's `{"error": ...}` message when one was sent,
//! so provider messages such as "Invalid login credentials" reach the page
//! unchanged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, CitySummary, Place, SignUpRequest, User};
#[cfg(feature = "hydrate")]
use super::types::SignInRequest;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiError;

#[cfg(feature = "hydrate")]
const PLACES_ENDPOINT: &str = "/api/places";

/// Query pairs for `/api/places`. A blank city lists every place.
#[cfg(any(test, feature = "hydrate"))]
fn places_query(city: &str) -> Vec<(&'static str, String)> {
    let city = city.trim();
    if city.is_empty() { Vec::new() } else { vec![("city", city.to_owned())] }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .map(|e| e.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(failure_message(status, &body));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the itinerary places for `city` from `/api/places`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not parse.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn fetch_places(city: &str) -> Result<Vec<Place>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PLACES_ENDPOINT)
            .query(places_query(city))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the supported cities from `/api/cities`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not parse.
pub async fn fetch_cities() -> Result<Vec<CitySummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/cities")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns the server's error message (provider messages pass through).
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn sign_up(request: &SignUpRequest) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Sign in via `POST /api/auth/signin`.
///
/// # Errors
///
/// Returns the server's error message (provider messages pass through).
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn sign_in(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = SignInRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/signin")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Revoke the session via `POST /api/auth/signout`.
///
/// # Errors
///
/// Returns the server's error message if the provider refuses.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn sign_out(token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signout")
            .header("Authorization", &bearer_value(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(failure_message(status, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the user behind `token` from `/api/auth/me`.
/// Returns `None` if the token is stale or on the server.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &bearer_value(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
