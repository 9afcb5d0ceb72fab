//! Interaction-event record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One keystroke interaction, as posted to the session log endpoint.
///
/// This is the interface shape only; events are emitted through the
/// logging facade and never stored by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Opaque user identifier.
    pub user_id: String,
    /// Session identifier, fresh per page load.
    pub session_id: String,
    /// When the keystroke happened.
    pub timestamp: DateTime<Utc>,
    /// The DOM key name pressed.
    pub key_stroke: String,
    /// Map zoom level at the time of the keystroke.
    pub zoom_level: f64,
    /// Map center longitude.
    pub lng: f64,
    /// Map center latitude.
    pub lat: f64,
    /// The narration text on screen at the time of the keystroke.
    pub stats: String,
}

/// Generates a fresh session identifier.
#[must_use]
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
