#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web narration server for the accessible map frontend.
//!
//! Bridges the map frontend and the upstream statistics service: fetches
//! per-viewport trend payloads, runs the narration engine over them with
//! the requested dataset's configuration, and serves the results as JSON
//! alongside the static frontend files.

pub mod handlers;

use std::sync::Arc;

use access_map_client::StatsService;
use access_map_dataset::{DatasetDefinition, registry};

/// Shared application state.
pub struct AppState {
    /// Upstream statistics service.
    pub stats: Arc<dyn StatsService>,
    /// Configured datasets.
    pub datasets: Vec<DatasetDefinition>,
}

impl AppState {
    /// Creates state over the given statistics service with the embedded
    /// dataset registry.
    #[must_use]
    pub fn new(stats: Arc<dyn StatsService>) -> Self {
        Self {
            stats,
            datasets: registry::all_datasets(),
        }
    }

    /// Looks up a configured dataset by id.
    #[must_use]
    pub fn find_dataset(&self, id: &str) -> Option<&DatasetDefinition> {
        self.datasets.iter().find(|dataset| dataset.id == id)
    }
}
