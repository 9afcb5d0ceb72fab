#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Display-layer contract for the accessible map viewer.
//!
//! Everything assistive-technology clients rely on outside the narration
//! math itself: the three-state view machine driven by keyboard shortcuts,
//! the response gate that keeps stale narration from overwriting newer
//! results, the status/help/announcement text, and the interaction-event
//! record shape. The source implementation kept all of this in mutable
//! module globals; here it is explicit state threaded through the shell.

mod event;
mod gate;
mod state;
pub mod text;

pub use event::{InteractionEvent, new_session_id};
pub use gate::ResponseGate;
pub use state::{Effect, KeyAction, PanDirection, Transition, ViewState, ZoomDirection};
