#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Config-driven dataset definitions.
//!
//! [`DatasetDefinition`] captures everything unique about a narrated
//! dataset in a serializable config struct: the upstream value column, the
//! narration label, the label vocabulary, the numeric rendering, and the
//! zoom thresholds that pick the geographic level. The source variants of
//! this system hardcoded three mutually inconsistent threshold sets; here
//! every threshold lives in config, never in code.

pub mod registry;

use access_map_narrator::Vocabulary;
use access_map_trends_models::GeoLevel;
use serde::Deserialize;

/// A complete, config-driven dataset definition.
///
/// Loaded from TOML files embedded at compile time (see [`registry`]).
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetDefinition {
    /// Unique identifier (e.g. `"walk"`).
    pub id: String,
    /// Column name the upstream statistics service selects on
    /// (e.g. `"walk_to_wo"`).
    pub value_column: String,
    /// Lowercase noun phrase used in narration sentences
    /// (e.g. `"percentage of people who walk to work"`).
    pub label: String,
    /// Map type noun for the overview sentence. Defaults to
    /// `"choropleth map"`.
    #[serde(default = "default_map_type")]
    pub map_type: String,
    /// Which region phrase table to narrate with.
    pub vocabulary: Vocabulary,
    /// How raw values are rendered with their unit.
    pub format: ValueFormat,
    /// Zoom thresholds resolving the geographic level.
    pub thresholds: GeoThresholds,
}

fn default_map_type() -> String {
    "choropleth map".to_string()
}

/// How a dataset renders a raw numeric value for narration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueFormat {
    /// A proportion in [0, 1], rendered as a percentage
    /// (`0.31` → `"31.0%"`).
    Percentage {
        /// Decimal places.
        precision: usize,
    },
    /// A raw magnitude, optionally followed by a unit phrase
    /// (`13.4` → `"13.4 people per square mile"`).
    Absolute {
        /// Decimal places.
        precision: usize,
        /// Unit phrase appended after the number.
        #[serde(default)]
        unit: Option<String>,
    },
}

impl ValueFormat {
    /// Renders a raw value as narration text.
    #[must_use]
    pub fn render(&self, value: f64) -> String {
        match self {
            Self::Percentage { precision } => {
                format!("{:.prec$}%", value * 100.0, prec = *precision)
            }
            Self::Absolute { precision, unit } => unit.as_ref().map_or_else(
                || format!("{value:.prec$}", prec = *precision),
                |unit| format!("{value:.prec$} {unit}", prec = *precision),
            ),
        }
    }
}

/// Zoom thresholds mapping the numeric zoom level to a [`GeoLevel`].
///
/// Levels activate at their `*_min_zoom` and stay active until a finer
/// level takes over; below `county_min_zoom` the map is at state level.
/// Datasets without tract-level data simply omit `tract_min_zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoThresholds {
    /// Zoom at which county-level data becomes active.
    pub county_min_zoom: f64,
    /// Zoom at which tract-level data becomes active, if the dataset
    /// has a tract tier.
    #[serde(default)]
    pub tract_min_zoom: Option<f64>,
}

impl GeoThresholds {
    /// Resolves the geographic level for a zoom value.
    #[must_use]
    pub fn resolve(&self, zoom: f64) -> GeoLevel {
        if self.tract_min_zoom.is_some_and(|tract| zoom >= tract) {
            GeoLevel::Tract
        } else if zoom >= self.county_min_zoom {
            GeoLevel::County
        } else {
            GeoLevel::State
        }
    }

    /// Whether this dataset has tract-level data at all.
    #[must_use]
    pub const fn has_tract_tier(&self) -> bool {
        self.tract_min_zoom.is_some()
    }

    /// The next finer level below `level`, if this dataset provides one.
    #[must_use]
    pub fn finer(&self, level: GeoLevel) -> Option<GeoLevel> {
        match level {
            GeoLevel::State => Some(GeoLevel::County),
            GeoLevel::County => self.tract_min_zoom.map(|_| GeoLevel::Tract),
            GeoLevel::Tract => None,
        }
    }
}

/// Parses a dataset definition from TOML.
///
/// # Errors
///
/// Returns a deserialization error if the TOML is malformed or missing
/// required fields.
pub fn parse_dataset_toml(toml_str: &str) -> Result<DatasetDefinition, toml::de::Error> {
    toml::from_str(toml_str)
}
