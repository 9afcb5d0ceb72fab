//! User-facing display text.
//!
//! Every string assistive technology reads, outside the trend narration
//! itself: overview and boundary blocks, zoom hints, movement
//! announcements, help, and the status fallbacks. All builders are pure;
//! the shell decides when to show which.

use access_map_trends_models::GeoLevel;

use crate::state::{PanDirection, ZoomDirection};

/// A completed map movement, for announcement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapMovement {
    /// The map was panned with an arrow key.
    Panned(PanDirection),
    /// The map was zoomed with `+`/`-`.
    Zoomed(ZoomDirection),
}

/// The opening sentence of the overview.
#[must_use]
pub fn overview_sentence(map_type: &str, dataset_label: &str, level: GeoLevel) -> String {
    format!(
        "This is a {map_type} of {dataset_label} in the US at a {} level.",
        level.noun()
    )
}

/// The overview block shown after a data fetch completes.
#[must_use]
pub fn overview_block(trend_html: &str) -> String {
    format!(
        "<p>In the current view: </p>{trend_html}\
         <p>Press l to hear the boundary of the current view.</p>\
         <p>Press m to interact with the map.</p>"
    )
}

/// The detail block shown by the `i` shortcut.
#[must_use]
pub fn detail_block(trend_html: &str) -> String {
    format!("{trend_html}<p>Press k to go back.</p>")
}

/// The boundary block shown by the `l` shortcut.
#[must_use]
pub fn boundary_block(geocode: &str) -> String {
    format!(
        "<p>{geocode}</p>\
         <p>Press b to go back.</p>\
         <p>Press m to interact with the map.</p>"
    )
}

/// Tells the user which levels zooming reaches from the current one.
///
/// `has_tract_tier` comes from the dataset's threshold configuration;
/// datasets without tract data bottom out at county level.
#[must_use]
pub fn zoom_hint(level: GeoLevel, has_tract_tier: bool) -> String {
    let mut hint = format!("You are currently at {} level.", level.noun());
    if let Some(coarser) = level.coarser() {
        hint.push_str(&format!(
            " Zoom out to interact with the data at {} level.",
            coarser.noun()
        ));
    }
    let finer = match level {
        GeoLevel::State => Some(GeoLevel::County),
        GeoLevel::County if has_tract_tier => Some(GeoLevel::Tract),
        GeoLevel::County | GeoLevel::Tract => None,
    };
    if let Some(finer) = finer {
        hint.push_str(&format!(
            " Zoom in to interact with the data at {} level.",
            finer.noun()
        ));
    }
    hint
}

/// Announces a completed pan or zoom, naming the place now at center.
///
/// At county zoom and finer the county is named when known; at state zoom
/// only the state is.
#[must_use]
pub fn movement_announcement(
    movement: MapMovement,
    level: GeoLevel,
    state: &str,
    county: Option<&str>,
) -> String {
    let place = match (level, county) {
        (GeoLevel::County | GeoLevel::Tract, Some(county)) => format!("{county}, {state}"),
        _ => state.to_string(),
    };
    match movement {
        MapMovement::Zoomed(direction) => format!(
            "Zoomed {direction}, now at {} level, centered on {place}.",
            level.noun()
        ),
        MapMovement::Panned(direction) => format!("Moved {direction}, centered on {place}."),
    }
}

/// The movement block: announcement plus the detail hint.
#[must_use]
pub fn movement_block(
    movement: MapMovement,
    level: GeoLevel,
    state: &str,
    county: Option<&str>,
) -> String {
    format!(
        "<p>{}</p><p>Press i to get more information.</p>",
        movement_announcement(movement, level, state, county)
    )
}

/// The shortcut-key help text, shown by the `h` shortcut.
#[must_use]
pub const fn help_message() -> &'static str {
    "<p>Shortcut keys.</p>\
     <p>Press i to learn about data trends in the current view.</p>\
     <p>Press l to learn about the boundary of the current view.</p>\
     <p>Press m to interact with the map.</p>\
     <p>Use arrow keys to navigate the map up, down, left, right.</p>\
     <p>Use + or - to zoom in or out.</p>\
     <p>Press h to hear the shortcut keys any time.</p>"
}

/// Shown while a narration request is in flight.
#[must_use]
pub const fn loading_message() -> &'static str {
    "<p>Information is loading...</p>"
}

/// Shown when a narration request fails.
#[must_use]
pub const fn error_message() -> &'static str {
    "<p>Error loading information. Please try again.</p>"
}

/// Shown when a narration request times out.
#[must_use]
pub const fn timeout_message() -> &'static str {
    "<p>Trend information is temporarily unavailable.</p>"
}

/// Shown when the user asks for a view whose data has not arrived yet.
#[must_use]
pub const fn data_pending_message() -> &'static str {
    "<p>Data not available yet. Please wait...</p>"
}
