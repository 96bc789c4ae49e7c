#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Erosion/sediment survey site types and derived hazard indicators.
//!
//! A [`GeographicRecord`] is one surveyed site along a torrentera: its
//! coordinate, zone, and the six summary statistics produced by the field
//! campaign (sum, mean, and standard deviation for the erosion and
//! sedimentation processes). Derived indicators are computed on top of a
//! record and attached as [`GeographicDerived`]; records themselves are
//! never mutated.

use hazard_map_risk_models::RiskCategory;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Which physical process dominates at a site.
///
/// Classified from the erosion/sediment magnitudes with a 10% margin;
/// sites where neither process clearly dominates read as `mixto`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Dominance {
    /// Material loss dominates.
    #[serde(rename = "erosión")]
    #[strum(serialize = "erosión")]
    Erosion,
    /// Material deposition dominates.
    #[serde(rename = "sedimentación")]
    #[strum(serialize = "sedimentación")]
    Sedimentation,
    /// Neither process exceeds the other by more than the margin.
    #[serde(rename = "mixto")]
    #[strum(serialize = "mixto")]
    Mixed,
}

/// A surveyed torrentera site with its raw erosion/sediment statistics.
///
/// Loaded once from the embedded dataset at startup; immutable for the
/// process lifetime. Erosion values are signed (negative = net material
/// loss), sedimentation values are positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicRecord {
    /// Zone (community/association) the site belongs to.
    pub zone: String,
    /// Department name (e.g. "Arequipa").
    pub department: String,
    /// Latitude in decimal degrees (WGS84).
    pub lat: f64,
    /// Longitude in decimal degrees (WGS84).
    pub lng: f64,
    /// Total erosion over the survey period (signed).
    pub erosion_sum: f64,
    /// Mean per-interval erosion (signed).
    pub erosion_mean: f64,
    /// Standard deviation of the erosion measurements.
    pub erosion_std: f64,
    /// Total sedimentation over the survey period.
    pub sediment_sum: f64,
    /// Mean per-interval sedimentation.
    pub sediment_mean: f64,
    /// Standard deviation of the sedimentation measurements.
    pub sediment_std: f64,
}

/// Hazard indicators derived from one [`GeographicRecord`].
///
/// Recomputed from the raw statistics by a pure function; carrying these
/// alongside the record (rather than caching them inside it) keeps the
/// raw table authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicDerived {
    /// `|erosion_sum|`.
    pub erosion_magnitude: f64,
    /// `|sediment_sum|`.
    pub sediment_magnitude: f64,
    /// Signed sum `sediment_sum + erosion_sum`; negative means the site
    /// loses material overall.
    pub net_balance: f64,
    /// Dominant physical process.
    pub dominance: Dominance,
    /// Measurement variability in [0, 1].
    pub variability_index: f64,
    /// Composite physical hazard score in [0, 100].
    pub hazard_score: f64,
    /// Category from the hazard score via the shared breakpoints.
    pub risk_category: RiskCategory,
}

/// A site together with its derived indicators, as exposed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicWithDerived {
    /// The raw survey record.
    #[serde(flatten)]
    pub record: GeographicRecord,
    /// Indicators computed from the record.
    #[serde(flatten)]
    pub derived: GeographicDerived,
}

/// Zone-level aggregate over geographic sites.
///
/// The risk category is recomputed from the averaged hazard score, not
/// averaged over member categories, so a zone's category need not match
/// any single member's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoZoneAggregate {
    /// Zone display name (first-seen spelling).
    pub zone: String,
    /// Number of surveyed sites in the zone.
    pub sites: u32,
    /// Sum of member `erosion_sum` values.
    pub total_erosion_sum: f64,
    /// Sum of member `sediment_sum` values.
    pub total_sediment_sum: f64,
    /// Mean of member `erosion_mean` values.
    pub avg_erosion_mean: f64,
    /// Mean of member `sediment_mean` values.
    pub avg_sediment_mean: f64,
    /// Mean of member variability indices.
    pub avg_variability: f64,
    /// Mean of member hazard scores.
    pub avg_hazard_score: f64,
    /// Category of the averaged hazard score.
    pub risk_category: RiskCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_labels_match_data_contract() {
        assert_eq!(Dominance::Erosion.to_string(), "erosión");
        assert_eq!(Dominance::Sedimentation.to_string(), "sedimentación");
        assert_eq!(Dominance::Mixed.to_string(), "mixto");
        assert_eq!("mixto".parse::<Dominance>().unwrap(), Dominance::Mixed);
    }
}
