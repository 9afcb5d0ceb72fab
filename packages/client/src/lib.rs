#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! HTTP client for the upstream statistics service.
//!
//! The upstream service computes viewport trends, aggregates, and boundary
//! descriptions; this crate fetches them. [`StatsService`] is the seam the
//! narration server programs against, so tests can substitute an in-process
//! implementation.

mod http;
mod retry;

pub use http::HttpStatsService;

use access_map_trends_models::{TrendsPayload, Viewport};
use async_trait::async_trait;
use serde::Deserialize;

/// Errors that can occur when talking to the upstream statistics service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status code.
    #[error("upstream returned HTTP {status}")]
    Status {
        /// The status code returned.
        status: reqwest::StatusCode,
    },

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response JSON was missing a required field.
    #[error("missing field `{field}` in upstream response")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}

/// The place the map is currently centered on, from the upstream reverse
/// geocoder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CenterLocation {
    /// State name.
    pub state: String,
    /// County name, present at county zoom and finer.
    #[serde(default)]
    pub county: Option<String>,
}

/// Upstream statistics service operations.
///
/// One logical request per viewport change; implementations must be safe
/// to share across handler invocations.
#[async_trait]
pub trait StatsService: Send + Sync {
    /// Fetches the trends payload for a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails after retries or the
    /// response cannot be decoded.
    async fn stats_in_view(
        &self,
        viewport: Viewport,
        zoom: f64,
        value_column: &str,
    ) -> Result<TrendsPayload, ClientError>;

    /// Fetches the boundary description for a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails after retries or the
    /// response cannot be decoded.
    async fn reverse_geocode(&self, viewport: Viewport, zoom: f64) -> Result<String, ClientError>;

    /// Resolves the place the map center falls in, for movement
    /// announcements.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails after retries or the
    /// response cannot be decoded.
    async fn locate_center(
        &self,
        lat: f64,
        lon: f64,
        zoom: f64,
    ) -> Result<CenterLocation, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_location_tolerates_missing_county() {
        let location: CenterLocation =
            serde_json::from_str(r#"{"state":"Kansas"}"#).unwrap();
        assert_eq!(location.state, "Kansas");
        assert!(location.county.is_none());
    }

    #[test]
    fn center_location_with_county() {
        let location: CenterLocation =
            serde_json::from_str(r#"{"state":"Washington","county":"King County"}"#).unwrap();
        assert_eq!(location.county.as_deref(), Some("King County"));
    }
}
