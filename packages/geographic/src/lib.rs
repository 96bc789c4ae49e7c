#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Geographic metrics engine: the embedded erosion/sediment site dataset
//! and its derived hazard indicators.
//!
//! The survey table is baked into the binary and parsed once; derived
//! indicators are computed by pure functions and memoized per process.
//! Consumers only ever see `&'static` read-only slices — nothing in this
//! crate mutates a record after startup.

pub mod dataset;
pub mod derive;
pub mod export;
pub mod zones;

use std::sync::LazyLock;

use hazard_map_geographic_models::{GeographicRecord, GeographicWithDerived};

pub use dataset::{DatasetError, parse_sites_toml};
pub use derive::{compute_derived, enrich};
pub use export::{table_columns, to_geojson};
pub use zones::aggregate_by_zone;

static RECORDS: LazyLock<Vec<GeographicRecord>> = LazyLock::new(|| {
    let sites = dataset::load_sites();
    log::debug!("Loaded {} geographic survey sites", sites.len());
    sites
});

static WITH_DERIVED: LazyLock<Vec<GeographicWithDerived>> =
    LazyLock::new(|| RECORDS.iter().map(derive::enrich).collect());

/// The raw site table, loaded once per process.
#[must_use]
pub fn records() -> &'static [GeographicRecord] {
    &RECORDS
}

/// The site table enriched with derived hazard indicators.
#[must_use]
pub fn with_derived() -> &'static [GeographicWithDerived] {
    &WITH_DERIVED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_embedded_dataset() {
        assert_eq!(records().len(), 14);
        assert_eq!(with_derived().len(), records().len());
    }

    #[test]
    fn every_site_scores_within_bounds() {
        for row in with_derived() {
            assert!((0.0..=100.0).contains(&row.derived.hazard_score));
            assert!((0.0..=1.0).contains(&row.derived.variability_index));
        }
    }

    #[test]
    fn zone_aggregation_conserves_dataset_totals() {
        let zones = aggregate_by_zone(with_derived());
        let total_sites: u32 = zones.iter().map(|z| z.sites).sum();
        assert_eq!(total_sites as usize, records().len());

        let aggregate_erosion: f64 = zones.iter().map(|z| z.total_erosion_sum).sum();
        let raw_erosion: f64 = records().iter().map(|r| r.erosion_sum).sum();
        assert!((aggregate_erosion - raw_erosion).abs() < 1e-9);
    }
}
