#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Socioeconomic metrics engine: the embedded household survey dataset
//! and its derived vulnerability indicators.
//!
//! Mirrors the geographic engine: the table is baked into the binary,
//! parsed once, enriched by pure functions, and exposed as `&'static`
//! read-only slices.

pub mod dataset;
pub mod derive;
pub mod export;
pub mod zones;

use std::sync::LazyLock;

use hazard_map_socioeconomic_models::{SocioeconomicRecord, SocioeconomicWithDerived};

pub use dataset::{DatasetError, parse_households_toml};
pub use derive::{compute_derived, enrich};
pub use export::{table_columns, to_geojson};
pub use zones::aggregate_by_zone;

static RECORDS: LazyLock<Vec<SocioeconomicRecord>> = LazyLock::new(|| {
    let households = dataset::load_households();
    log::debug!("Loaded {} household survey records", households.len());
    households
});

static WITH_DERIVED: LazyLock<Vec<SocioeconomicWithDerived>> =
    LazyLock::new(|| RECORDS.iter().map(derive::enrich).collect());

/// The raw household table, loaded once per process.
#[must_use]
pub fn records() -> &'static [SocioeconomicRecord] {
    &RECORDS
}

/// The household table enriched with derived vulnerability indicators.
#[must_use]
pub fn with_derived() -> &'static [SocioeconomicWithDerived] {
    &WITH_DERIVED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_embedded_dataset() {
        assert_eq!(records().len(), 16);
        assert_eq!(with_derived().len(), records().len());
    }

    #[test]
    fn every_household_scores_within_bounds() {
        for row in with_derived() {
            assert!((0.0..=100.0).contains(&row.derived.vulnerability_score));
            assert!(row.derived.income_per_capita.is_finite());
        }
    }

    #[test]
    fn zone_aggregation_conserves_dataset_totals() {
        let zones = aggregate_by_zone(with_derived());
        let total: u32 = zones.iter().map(|z| z.households).sum();
        assert_eq!(total as usize, records().len());
    }
}
