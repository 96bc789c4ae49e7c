//! Embedded site dataset — loads the survey table from TOML baked into
//! the binary at compile time via [`include_str!`].
//!
//! The raw TOML rows are snake_case and converted into the camelCase
//! model type here, so the data file stays spreadsheet-friendly while the
//! serialized API contract stays stable.

use hazard_map_geographic_models::GeographicRecord;
use serde::Deserialize;

/// The survey table embedded at compile time.
const SITES_TOML: &str = include_str!("../datasets/sites.toml");

/// Number of rows in the embedded table (used in tests).
#[cfg(test)]
const EXPECTED_SITE_COUNT: usize = 14;

/// Errors that can occur while parsing a site table.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The TOML document could not be deserialized.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct SiteTable {
    sites: Vec<RawSite>,
}

/// One row of the TOML table, in file field order.
#[derive(Debug, Deserialize)]
struct RawSite {
    zone: String,
    department: String,
    lat: f64,
    lng: f64,
    erosion_sum: f64,
    erosion_mean: f64,
    erosion_std: f64,
    sediment_sum: f64,
    sediment_mean: f64,
    sediment_std: f64,
}

impl From<RawSite> for GeographicRecord {
    fn from(raw: RawSite) -> Self {
        Self {
            zone: raw.zone,
            department: raw.department,
            lat: raw.lat,
            lng: raw.lng,
            erosion_sum: raw.erosion_sum,
            erosion_mean: raw.erosion_mean,
            erosion_std: raw.erosion_std,
            sediment_sum: raw.sediment_sum,
            sediment_mean: raw.sediment_mean,
            sediment_std: raw.sediment_std,
        }
    }
}

/// Parses a site table from TOML text.
///
/// # Errors
///
/// Returns [`DatasetError::Toml`] if the document is malformed or a row
/// is missing a field.
pub fn parse_sites_toml(toml_text: &str) -> Result<Vec<GeographicRecord>, DatasetError> {
    let table: SiteTable = toml::from_str(toml_text)?;
    Ok(table.sites.into_iter().map(Into::into).collect())
}

/// Parses the embedded site table.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (this is a compile-time
/// guarantee since the table is baked into the binary).
#[must_use]
pub fn load_sites() -> Vec<GeographicRecord> {
    parse_sites_toml(SITES_TOML).unwrap_or_else(|e| panic!("Failed to parse sites.toml: {e}"))
}
