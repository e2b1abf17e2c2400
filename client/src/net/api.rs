//! REST helpers for the dashboard's data endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since panels only fetch
//! after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`; the string is shown verbatim in
//! the panel next to a retry button. Payloads are decoded through
//! `records::parse_list`, so an out-of-range percentage or missing id is a
//! readable error instead of a broken card.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{Alert, BusinessInsight, Model, Pattern, Prediction, Resource};
use serde::{Deserialize, Serialize};

pub const API_PREFIX: &str = "/api";

/// Fallback when `/api/config` is unreachable.
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Map settings served by `/api/config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub tile_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { tile_url: DEFAULT_TILE_URL.to_owned() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn resource_endpoint(resource: Resource) -> String {
    format!("{API_PREFIX}/{}", resource.segment())
}

/// Build the message shown for a non-2xx response. Uses the server's
/// `{"error": "..."}` body when present.
#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(resource: Resource, status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.trim().is_empty() => {
            format!("{resource} request failed ({status}): {}", parsed.error)
        }
        _ => format!("{resource} request failed ({status})"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_list<T>(resource: Resource, bytes: &[u8]) -> Result<Vec<T>, String>
where
    T: serde::de::DeserializeOwned + records::Validate,
{
    records::parse_list(bytes).map_err(|e| format!("{resource} payload rejected: {e}"))
}

async fn fetch_list<T>(resource: Resource) -> Result<Vec<T>, String>
where
    T: serde::de::DeserializeOwned + records::Validate,
{
    #[cfg(feature = "hydrate")]
    {
        let url = resource_endpoint(resource);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{resource} request failed: {e}"))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_failed_message(resource, resp.status(), &body));
        }
        let bytes = resp.binary().await.map_err(|e| e.to_string())?;
        decode_list(resource, &bytes)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(format!("{resource} not available on server"))
    }
}

/// `GET /api/models`
pub async fn fetch_models() -> Result<Vec<Model>, String> {
    fetch_list(Resource::Models).await
}

/// `GET /api/patterns`
pub async fn fetch_patterns() -> Result<Vec<Pattern>, String> {
    fetch_list(Resource::Patterns).await
}

/// `GET /api/predictions`
pub async fn fetch_predictions() -> Result<Vec<Prediction>, String> {
    fetch_list(Resource::Predictions).await
}

/// `GET /api/alerts`
pub async fn fetch_alerts() -> Result<Vec<Alert>, String> {
    fetch_list(Resource::Alerts).await
}

/// `GET /api/insights`
pub async fn fetch_business_insights() -> Result<Vec<BusinessInsight>, String> {
    fetch_list(Resource::Insights).await
}

/// Fetch map settings from `/api/config`. Returns `None` on any failure;
/// callers fall back to [`ClientConfig::default`].
pub async fn fetch_config() -> Option<ClientConfig> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{API_PREFIX}/config"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ClientConfig>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
