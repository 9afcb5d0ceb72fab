#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Viewport region taxonomy and trend payload types.
//!
//! This crate defines the canonical spatial-partition taxonomy used across
//! the entire access-map system, plus the wire shapes exchanged with the
//! upstream statistics service. The narrator, dataset registry, client, and
//! server all share these types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One of the 13 spatial partitions of the current map viewport.
///
/// The first nine variants are the cells of a 3x3 grid over the viewport in
/// reading order. The last four are linear patterns describing trends that
/// run across the viewport rather than being confined to one cell.
///
/// `Ord` follows declaration order, which is the order the upstream
/// statistics service emits regions in. Iterating a `BTreeMap` keyed by
/// [`RegionKey`] therefore reproduces the upstream emission order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum RegionKey {
    /// Top-left grid cell.
    #[serde(rename = "NW")]
    #[strum(serialize = "NW")]
    Nw,
    /// Top-center grid cell.
    #[serde(rename = "N")]
    #[strum(serialize = "N")]
    N,
    /// Top-right grid cell.
    #[serde(rename = "NE")]
    #[strum(serialize = "NE")]
    Ne,
    /// Middle-left grid cell.
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    W,
    /// Center grid cell.
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    C,
    /// Middle-right grid cell.
    #[serde(rename = "E")]
    #[strum(serialize = "E")]
    E,
    /// Bottom-left grid cell.
    #[serde(rename = "SW")]
    #[strum(serialize = "SW")]
    Sw,
    /// Bottom-center grid cell.
    #[serde(rename = "S")]
    #[strum(serialize = "S")]
    S,
    /// Bottom-right grid cell.
    #[serde(rename = "SE")]
    #[strum(serialize = "SE")]
    Se,
    /// Trend running from the top-left corner to the bottom-right corner.
    #[serde(rename = "left_diagonal")]
    #[strum(serialize = "left_diagonal")]
    LeftDiagonal,
    /// Trend running from the bottom-left corner to the top-right corner.
    #[serde(rename = "right_diagonal")]
    #[strum(serialize = "right_diagonal")]
    RightDiagonal,
    /// Trend running horizontally through the center row.
    #[serde(rename = "horizontal")]
    #[strum(serialize = "horizontal")]
    Horizontal,
    /// Trend running vertically through the center column.
    #[serde(rename = "vertical")]
    #[strum(serialize = "vertical")]
    Vertical,
}

impl RegionKey {
    /// Returns `true` for the four linear patterns (diagonals, horizontal,
    /// vertical).
    ///
    /// Linear-pattern phrases are grammatically self-contained ("diagonally
    /// from X to Y") and take no article when joined into a sentence; grid
    /// cells take "in the" / "the".
    #[must_use]
    pub const fn is_linear_pattern(self) -> bool {
        matches!(
            self,
            Self::LeftDiagonal | Self::RightDiagonal | Self::Horizontal | Self::Vertical
        )
    }

    /// Returns all variants in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Nw,
            Self::N,
            Self::Ne,
            Self::W,
            Self::C,
            Self::E,
            Self::Sw,
            Self::S,
            Self::Se,
            Self::LeftDiagonal,
            Self::RightDiagonal,
            Self::Horizontal,
            Self::Vertical,
        ]
    }
}

/// Per-region trend evidence from the upstream statistics service.
///
/// Each list holds the grid-cell names that contributed to a detected
/// pattern. A region is considered high (or low) when the corresponding
/// list is non-empty; both may be non-empty at once and the two conditions
/// are treated independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendEntry {
    /// Cells contributing to a detected high pattern.
    #[serde(default)]
    pub high: Vec<String>,
    /// Cells contributing to a detected low pattern.
    #[serde(default)]
    pub low: Vec<String>,
}

impl TrendEntry {
    /// Whether this region is part of a detected high pattern.
    #[must_use]
    pub fn is_high(&self) -> bool {
        !self.high.is_empty()
    }

    /// Whether this region is part of a detected low pattern.
    #[must_use]
    pub fn is_low(&self) -> bool {
        !self.low.is_empty()
    }
}

/// An extremum (minimum or maximum) reported by the upstream service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    /// Display name of the place holding the extremum (e.g. "King County").
    pub text: String,
    /// The extremum value, in the dataset's raw units.
    pub value: f64,
    /// The viewport region containing the extremum, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<RegionKey>,
}

/// The full per-viewport statistics response from the upstream service.
///
/// Regions absent from `trends` are neither high nor low. `min`, `max`,
/// and `average` may be individually absent (partial data); narration
/// substitutes "not available" rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendsPayload {
    /// Per-region trend evidence, keyed by region in canonical order.
    #[serde(default)]
    pub trends: BTreeMap<RegionKey, TrendEntry>,
    /// Minimum value in view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Extremum>,
    /// Maximum value in view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Extremum>,
    /// Average value in view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    /// Opaque boundary description for the current view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocode: Option<String>,
}

/// The geographic granularity the map is currently displaying.
///
/// Resolved from the numeric zoom level by a per-dataset threshold
/// configuration; the narrator only ever sees the resolved level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GeoLevel {
    /// State-level data.
    State,
    /// County-level data.
    County,
    /// Census-tract-level data.
    Tract,
}

impl GeoLevel {
    /// The geographic noun used in narration sentences.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::County => "county",
            Self::Tract => "census tract",
        }
    }

    /// The next coarser level, if any.
    #[must_use]
    pub const fn coarser(self) -> Option<Self> {
        match self {
            Self::State => None,
            Self::County => Some(Self::State),
            Self::Tract => Some(Self::County),
        }
    }
}

/// Display bounds of the continental United States, as shown by the map
/// widget. Viewport queries are clamped to this box before being sent
/// upstream.
pub const CONTINENTAL_US: MapBounds = MapBounds {
    west: -128.0,
    south: 22.0,
    east: -64.0,
    north: 52.0,
};

/// A geographic bounding box in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

/// The visible map viewport, expressed in screen-edge terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Longitude of the left screen edge.
    pub left: f64,
    /// Longitude of the right screen edge.
    pub right: f64,
    /// Latitude of the top screen edge.
    pub top: f64,
    /// Latitude of the bottom screen edge.
    pub bottom: f64,
}

impl Viewport {
    /// Creates a viewport from its four screen edges.
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Clamps each edge to the given display bounds.
    ///
    /// A viewport that is panned or zoomed past the edge of the displayed
    /// area would otherwise ask the upstream service about regions with no
    /// data.
    #[must_use]
    pub fn clamp(self, bounds: &MapBounds) -> Self {
        Self {
            left: self.left.max(bounds.west),
            right: self.right.min(bounds.east),
            top: self.top.min(bounds.north),
            bottom: self.bottom.max(bounds.south),
        }
    }
}

/// The narration produced for one viewport: the trend text shown in the
/// detail view and the boundary description shown in the boundary view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationResult {
    /// HTML fragment describing the trends in the current view.
    pub trend: String,
    /// Boundary description, passed through from the upstream service.
    pub geocode: String,
}
