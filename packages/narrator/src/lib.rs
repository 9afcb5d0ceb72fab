#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spatial-trend narration engine.
//!
//! Turns a per-viewport trends payload into grammatically correct,
//! screen-reader-friendly prose: which regions are statistically high or
//! low, plus average and extremum sentences. Pure and synchronous; the
//! same inputs always produce byte-identical output.

mod list;
mod vocabulary;

pub use list::format_region_list;
pub use vocabulary::Vocabulary;

use access_map_trends_models::{Extremum, GeoLevel, NarrationResult, RegionKey, TrendsPayload};

/// Builds the full narration for one viewport.
///
/// `dataset_label` is the lowercase noun phrase for the dataset (e.g.
/// "population density"); `format_value` renders a raw value with its
/// unit ("31.0%", "13.4 people per square mile").
///
/// Sentence order is fixed: high regions, low regions, average, maximum,
/// minimum. A missing extremum or average becomes a "not available"
/// sentence rather than an error, so partial upstream data still narrates.
pub fn narrate<F>(
    payload: &TrendsPayload,
    level: GeoLevel,
    dataset_label: &str,
    vocabulary: Vocabulary,
    format_value: F,
) -> NarrationResult
where
    F: Fn(f64) -> String,
{
    let highs: Vec<RegionKey> = payload
        .trends
        .iter()
        .filter(|(_, entry)| entry.is_high())
        .map(|(key, _)| *key)
        .collect();
    let lows: Vec<RegionKey> = payload
        .trends
        .iter()
        .filter(|(_, entry)| entry.is_low())
        .map(|(key, _)| *key)
        .collect();

    let high_sentence = trend_sentence(&highs, "high", dataset_label, vocabulary);
    let low_sentence = trend_sentence(&lows, "low", dataset_label, vocabulary);

    let average_sentence = payload.average.map_or_else(
        || format!("The average {dataset_label} is not available."),
        |value| format!("The average {dataset_label} is {}.", format_value(value)),
    );

    let max_sentence = extremum_sentence(
        payload.max.as_ref(),
        "highest",
        level,
        dataset_label,
        vocabulary,
        &format_value,
    );
    let min_sentence = extremum_sentence(
        payload.min.as_ref(),
        "lowest",
        level,
        dataset_label,
        vocabulary,
        &format_value,
    );

    let trend = [
        high_sentence,
        low_sentence,
        average_sentence,
        max_sentence,
        min_sentence,
    ]
    .iter()
    .map(|sentence| format!("<p>{sentence}</p>"))
    .collect();

    NarrationResult {
        trend,
        geocode: payload.geocode.clone().unwrap_or_default(),
    }
}

/// The high-regions or low-regions sentence.
fn trend_sentence(
    regions: &[RegionKey],
    direction: &str,
    dataset_label: &str,
    vocabulary: Vocabulary,
) -> String {
    if regions.is_empty() {
        format!("No regions with particularly {direction} {dataset_label}.")
    } else {
        format!(
            "{} is {direction} {}.",
            capitalize_first(dataset_label),
            format_region_list(regions, vocabulary)
        )
    }
}

/// The maximum or minimum sentence.
///
/// When the upstream service attributes the extremum to a viewport region,
/// the region is named; when the extremum is absent entirely the sentence
/// degrades to "not available".
fn extremum_sentence<F>(
    extremum: Option<&Extremum>,
    superlative: &str,
    level: GeoLevel,
    dataset_label: &str,
    vocabulary: Vocabulary,
    format_value: &F,
) -> String
where
    F: Fn(f64) -> String,
{
    let noun = level.noun();
    extremum.map_or_else(
        || format!("The {noun} with the {superlative} {dataset_label} is not available."),
        |extremum| {
            let location = extremum
                .section
                .map(|section| format!("located in the {}, ", vocabulary.label(section)))
                .unwrap_or_default();
            format!(
                "The {noun} with the {superlative} {dataset_label} is {}, {location}with {}.",
                extremum.text,
                format_value(extremum.value)
            )
        },
    )
}

/// Uppercases the first character of a phrase.
fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
