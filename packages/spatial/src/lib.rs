#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! In-memory spatial index for site matching.
//!
//! Builds an exact-match index keyed by coordinates rounded to 6 decimal
//! places (~0.1 m) and provides a nearest-neighbor fallback over the full
//! site list by great-circle distance. Used by the unified-point join to
//! attach survey sites to household records. The site lists are small
//! (tens of entries), so the fallback is a plain linear scan.

use std::collections::HashMap;

/// Mean Earth radius in meters used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Multiplier that folds a coordinate to 6 decimal places for exact keys.
const KEY_SCALE: f64 = 1_000_000.0;

/// A coordinate rounded to 6 decimal places, usable as a hash key.
pub type CoordKey = (i64, i64);

/// Rounds a coordinate pair to 6 decimal places (~0.1 m precision).
///
/// Two points that differ only below this precision produce the same key
/// and are treated as the same physical location.
#[must_use]
pub fn coord_key(lat: f64, lng: f64) -> CoordKey {
    #[allow(clippy::cast_possible_truncation)]
    let fold = |v: f64| (v * KEY_SCALE).round() as i64;
    (fold(lat), fold(lng))
}

/// Great-circle distance in meters between two WGS84 coordinates.
#[must_use]
pub fn haversine_distance_m(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Pre-built lookup index over an ordered list of site coordinates.
///
/// Constructed once per join. `exact` resolves coordinates that round to
/// the same 6-decimal key; `nearest_within` scans all sites by haversine
/// distance for the near-miss case.
pub struct SiteIndex {
    by_key: HashMap<CoordKey, usize>,
    coords: Vec<(f64, f64)>,
}

impl SiteIndex {
    /// Builds the index from `(lat, lng)` pairs, keeping list order.
    ///
    /// If two sites fold to the same rounded key, the first one wins so
    /// that lookups stay deterministic.
    #[must_use]
    pub fn build(coords: &[(f64, f64)]) -> Self {
        let mut by_key = HashMap::with_capacity(coords.len());
        for (i, &(lat, lng)) in coords.iter().enumerate() {
            by_key.entry(coord_key(lat, lng)).or_insert(i);
        }
        log::debug!("Built site index over {} coordinates", coords.len());

        Self {
            by_key,
            coords: coords.to_vec(),
        }
    }

    /// Number of indexed sites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Looks up a site whose coordinates round to the same 6-decimal key.
    #[must_use]
    pub fn exact(&self, lat: f64, lng: f64) -> Option<usize> {
        self.by_key.get(&coord_key(lat, lng)).copied()
    }

    /// Finds the nearest site by great-circle distance, accepting it only
    /// within `max_m` meters.
    ///
    /// Returns the site's list index and its distance. Ties resolve to the
    /// lowest index, so repeated lookups are deterministic.
    #[must_use]
    pub fn nearest_within(&self, lat: f64, lng: f64, max_m: f64) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (i, &(site_lat, site_lng)) in self.coords.iter().enumerate() {
            let distance = haversine_distance_m(lat, lng, site_lat, site_lng);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((i, distance)),
            }
        }

        best.filter(|&(_, distance)| distance <= max_m)
    }
}
