//! Dataset registry — loads all dataset definitions from embedded TOML
//! configs.
//!
//! Each `.toml` file in `packages/dataset/datasets/` is baked into the
//! binary at compile time via [`include_str!`]. Adding a new dataset is as
//! simple as creating a new TOML file and adding it to the list below.

use crate::{DatasetDefinition, parse_dataset_toml};

/// TOML configs embedded at compile time.
const DATASET_TOMLS: &[(&str, &str)] = &[
    ("density", include_str!("../datasets/density.toml")),
    ("walk", include_str!("../datasets/walk.toml")),
    ("transit", include_str!("../datasets/transit.toml")),
    ("income", include_str!("../datasets/income.toml")),
];

/// Total number of configured datasets (used in tests).
#[cfg(test)]
const EXPECTED_DATASET_COUNT: usize = 4;

/// Returns all configured dataset definitions, parsed from embedded TOML.
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time guarantee
/// since the configs are embedded).
#[must_use]
pub fn all_datasets() -> Vec<DatasetDefinition> {
    DATASET_TOMLS
        .iter()
        .map(|(name, toml)| {
            parse_dataset_toml(toml).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

/// Looks up a dataset definition by id.
#[must_use]
pub fn find(id: &str) -> Option<DatasetDefinition> {
    all_datasets().into_iter().find(|dataset| dataset.id == id)
}

/// Looks up a dataset definition by upstream value column.
#[must_use]
pub fn find_by_value_column(value_column: &str) -> Option<DatasetDefinition> {
    all_datasets()
        .into_iter()
        .find(|dataset| dataset.value_column == value_column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_all_datasets() {
        let datasets = all_datasets();
        assert_eq!(datasets.len(), EXPECTED_DATASET_COUNT);
    }

    #[test]
    fn dataset_ids_are_unique() {
        let datasets = all_datasets();
        let mut ids: Vec<&str> = datasets.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EXPECTED_DATASET_COUNT);
    }

    #[test]
    fn value_columns_are_unique() {
        let datasets = all_datasets();
        let mut columns: Vec<&str> = datasets.iter().map(|d| d.value_column.as_str()).collect();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), EXPECTED_DATASET_COUNT);
    }

    #[test]
    fn all_datasets_have_required_fields() {
        for dataset in &all_datasets() {
            assert!(!dataset.id.is_empty(), "dataset id is empty");
            assert!(
                !dataset.value_column.is_empty(),
                "{}: no value column",
                dataset.id
            );
            assert!(!dataset.label.is_empty(), "{}: no label", dataset.id);
            assert!(!dataset.map_type.is_empty(), "{}: no map type", dataset.id);
        }
    }

    #[test]
    fn walk_and_transit_have_no_tract_tier() {
        assert!(!find("walk").unwrap().thresholds.has_tract_tier());
        assert!(!find("transit").unwrap().thresholds.has_tract_tier());
    }

    #[test]
    fn density_and_income_have_tract_tiers() {
        assert!(find("density").unwrap().thresholds.has_tract_tier());
        assert!(find("income").unwrap().thresholds.has_tract_tier());
    }

    #[test]
    fn finds_by_value_column() {
        let dataset = find_by_value_column("walk_to_wo").unwrap();
        assert_eq!(dataset.id, "walk");
        assert!(find_by_value_column("no_such_co").is_none());
    }
}
