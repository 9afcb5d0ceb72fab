//! Region label vocabularies.
//!
//! Two fixed phrase tables exist: a screen-relative vocabulary ("top-left")
//! and a compass vocabulary ("Northwest"). A deployment selects one per
//! dataset; the tables are never mixed within a narration.

use access_map_trends_models::RegionKey;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Which phrase table to narrate regions with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Vocabulary {
    /// Screen-relative phrases: "top-left", "bottom", "diagonally from
    /// top-left to bottom-right".
    Screen,
    /// Compass phrases: "Northwest", "South", "diagonally from Northwest
    /// to Southeast".
    Compass,
}

impl Vocabulary {
    /// Returns the display phrase for a region.
    ///
    /// Total over the closed [`RegionKey`] enumeration.
    #[must_use]
    pub const fn label(self, key: RegionKey) -> &'static str {
        match self {
            Self::Screen => match key {
                RegionKey::Nw => "top-left",
                RegionKey::N => "top",
                RegionKey::Ne => "top-right",
                RegionKey::W => "left",
                RegionKey::C => "center",
                RegionKey::E => "right",
                RegionKey::Sw => "bottom-left",
                RegionKey::S => "bottom",
                RegionKey::Se => "bottom-right",
                RegionKey::LeftDiagonal => "diagonally from top-left to bottom-right",
                RegionKey::RightDiagonal => "diagonally from bottom-left to top-right",
                RegionKey::Horizontal => "horizontally through the center",
                RegionKey::Vertical => "vertically through the center",
            },
            Self::Compass => match key {
                RegionKey::Nw => "Northwest",
                RegionKey::N => "North",
                RegionKey::Ne => "Northeast",
                RegionKey::W => "West",
                RegionKey::C => "Central",
                RegionKey::E => "East",
                RegionKey::Sw => "Southwest",
                RegionKey::S => "South",
                RegionKey::Se => "Southeast",
                RegionKey::LeftDiagonal => "diagonally from Northwest to Southeast",
                RegionKey::RightDiagonal => "diagonally from Southwest to Northeast",
                RegionKey::Horizontal => "horizontally across the center",
                RegionKey::Vertical => "vertically through the center",
            },
        }
    }
}
