#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the narration server.
//!
//! These types are serialized to JSON for the REST API consumed by the
//! map frontend. They are separate from the upstream wire types in
//! `access_map_trends_models` to allow independent evolution of the API
//! contract.

use access_map_dataset::DatasetDefinition;
use access_map_trends_models::{GeoLevel, NarrationResult, Viewport};
use serde::{Deserialize, Serialize};

/// Query parameters for the narration endpoint.
///
/// Screen-edge names match the frontend's fetch URLs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationQuery {
    /// Longitude of the left screen edge.
    pub screen_left: f64,
    /// Longitude of the right screen edge.
    pub screen_right: f64,
    /// Latitude of the top screen edge.
    pub screen_top: f64,
    /// Latitude of the bottom screen edge.
    pub screen_bottom: f64,
    /// Current map zoom level.
    pub zoom: f64,
    /// Dataset id (e.g. `"walk"`).
    pub dataset: String,
}

impl NarrationQuery {
    /// The viewport described by the query.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        Viewport::new(
            self.screen_left,
            self.screen_right,
            self.screen_top,
            self.screen_bottom,
        )
    }
}

/// Query parameters for the boundary endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryQuery {
    /// Longitude of the left screen edge.
    pub screen_left: f64,
    /// Longitude of the right screen edge.
    pub screen_right: f64,
    /// Latitude of the top screen edge.
    pub screen_top: f64,
    /// Latitude of the bottom screen edge.
    pub screen_bottom: f64,
    /// Current map zoom level.
    pub zoom: f64,
}

impl BoundaryQuery {
    /// The viewport described by the query.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        Viewport::new(
            self.screen_left,
            self.screen_right,
            self.screen_top,
            self.screen_bottom,
        )
    }
}

/// A narration as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNarration {
    /// HTML fragment describing the trends in the view.
    pub trend: String,
    /// Boundary description of the view.
    pub geocode: String,
    /// Geographic level the narration was produced at.
    pub level: GeoLevel,
}

impl ApiNarration {
    /// Combines a narration with the level it was produced at.
    #[must_use]
    pub fn from_result(result: NarrationResult, level: GeoLevel) -> Self {
        Self {
            trend: result.trend,
            geocode: result.geocode,
            level,
        }
    }
}

/// A configured dataset as listed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDataset {
    /// Dataset id.
    pub id: String,
    /// Narration label.
    pub label: String,
    /// Upstream value column.
    pub value_column: String,
}

impl From<&DatasetDefinition> for ApiDataset {
    fn from(dataset: &DatasetDefinition) -> Self {
        Self {
            id: dataset.id.clone(),
            label: dataset.label.clone(),
            value_column: dataset.value_column.clone(),
        }
    }
}

/// Boundary description response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiBoundary {
    /// Human-readable boundary description.
    pub response: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Acknowledgement for a logged interaction event.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogAck {
    /// Always `"ok"`.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_query_uses_screen_edge_names() {
        let query: NarrationQuery = serde_json::from_str(
            r#"{
                "screenLeft": -122.5,
                "screenRight": -121.8,
                "screenTop": 47.8,
                "screenBottom": 47.3,
                "zoom": 6.5,
                "dataset": "walk"
            }"#,
        )
        .unwrap();
        assert_eq!(query.dataset, "walk");
        let viewport = query.viewport();
        assert!((viewport.left - -122.5).abs() < f64::EPSILON);
        assert!((viewport.bottom - 47.3).abs() < f64::EPSILON);
    }

    #[test]
    fn api_dataset_copies_the_listing_fields() {
        let dataset = access_map_dataset::registry::find("walk").unwrap();
        let api: ApiDataset = (&dataset).into();
        assert_eq!(api.id, "walk");
        assert_eq!(api.value_column, "walk_to_wo");
        assert!(api.label.contains("walk to work"));
    }

    #[test]
    fn api_narration_serializes_level_lowercase() {
        let api = ApiNarration {
            trend: "<p>x</p>".to_string(),
            geocode: String::new(),
            level: GeoLevel::County,
        };
        let json = serde_json::to_string(&api).unwrap();
        assert!(json.contains("\"level\":\"county\""));
    }
}
