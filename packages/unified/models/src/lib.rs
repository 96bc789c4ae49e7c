#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Unified map point types joining site and household data.
//!
//! A [`UnifiedPoint`] merges one household record and/or one survey site
//! that share (approximately) a coordinate. The optional `socio`/`geo`
//! sides are plain values — absence means "no match found", which is a
//! valid join outcome, not an error.

use hazard_map_geographic_models::{Dominance, GeographicWithDerived};
use hazard_map_risk_models::RiskCategory;
use hazard_map_socioeconomic_models::SocioeconomicWithDerived;
use serde::{Deserialize, Serialize};

/// How the loss thresholds were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdBasis {
    /// 33rd/66th percentiles of the observed loss distribution.
    Percentile,
    /// Static fallback used when too few finite losses exist.
    Static,
}

/// Loss-risk classification cut points, PEN.
///
/// Losses below `low` classify `bajo`, below `high` classify `medio`,
/// and everything else `alto`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LossThresholds {
    /// Upper bound (exclusive) of the `bajo` band.
    pub low: f64,
    /// Upper bound (exclusive) of the `medio` band.
    pub high: f64,
    /// Whether the cut points are data-driven or the static fallback.
    pub basis: ThresholdBasis,
}

/// One map-ready point per physical site, joining both datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedPoint {
    /// Household id when a household anchors the point, else a
    /// deterministic `geo-<index>` id.
    pub id: String,
    /// Latitude in decimal degrees (WGS84).
    pub lat: f64,
    /// Longitude in decimal degrees (WGS84).
    pub lng: f64,
    /// Zone of the anchoring record.
    pub zone: String,
    /// Department of the anchoring record.
    pub department: String,
    /// Estimated housing loss, PEN; 0 for geo-only points.
    pub estimated_loss_housing: f64,
    /// Loss-risk category: threshold-classified for households,
    /// inferred from the hazard score for geo-only points.
    pub loss_risk: RiskCategory,
    /// The household side, when present.
    pub socio: Option<SocioeconomicWithDerived>,
    /// The site side, when present.
    pub geo: Option<GeographicWithDerived>,
}

/// Tooltip details bundled with a [`MapImpactPoint`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDetails {
    /// Zone of the anchoring record.
    pub zone: String,
    /// Department of the anchoring record.
    pub department: String,
    /// Estimated housing loss, PEN.
    pub estimated_loss_housing: f64,
    /// Physical hazard score, when a site is attached.
    pub hazard_score: Option<f64>,
    /// Dominant process label, when a site is attached.
    pub dominance: Option<Dominance>,
    /// Vulnerability score, when a household is attached.
    pub vulnerability_score: Option<f64>,
    /// Income per capita, when a household is attached.
    pub income_per_capita: Option<f64>,
    /// Household size, when a household is attached.
    pub household_size: Option<u32>,
}

/// Flat map-marker contract consumed by the rendering layer.
///
/// The engine knows nothing about any map library; this is plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapImpactPoint {
    /// Stable point id.
    pub id: String,
    /// Latitude in decimal degrees (WGS84).
    pub lat: f64,
    /// Longitude in decimal degrees (WGS84).
    pub lng: f64,
    /// Marker severity, equal to the point's loss-risk category.
    pub severity: RiskCategory,
    /// Tooltip payload.
    pub details: ImpactDetails,
}
