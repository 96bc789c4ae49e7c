#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Unified point engine: joins the geographic and socioeconomic datasets
//! into one map-ready point per physical site.
//!
//! The join runs once per process over the embedded datasets and is
//! memoized; consumers read `&'static` slices. Loss-risk classification
//! is data-driven — thresholds come from the observed housing-loss
//! distribution (see [`thresholds`]).

pub mod impact;
pub mod join;
pub mod thresholds;

use std::sync::LazyLock;

use hazard_map_unified_models::{LossThresholds, MapImpactPoint, UnifiedPoint};

pub use impact::to_map_impact_points;
pub use join::{JOIN_RADIUS_M, build_unified_points};

static LOSS_THRESHOLDS: LazyLock<LossThresholds> = LazyLock::new(|| {
    let losses: Vec<f64> = hazard_map_socioeconomic::records()
        .iter()
        .map(|r| r.estimated_loss_housing)
        .collect();
    thresholds::from_losses(&losses)
});

static UNIFIED_POINTS: LazyLock<Vec<UnifiedPoint>> = LazyLock::new(|| {
    let points = join::build_unified_points(
        hazard_map_socioeconomic::with_derived(),
        hazard_map_geographic::with_derived(),
        &LOSS_THRESHOLDS,
    );
    let geo_only = points.iter().filter(|p| p.socio.is_none()).count();
    log::debug!(
        "Joined {} unified points ({} households, {geo_only} geo-only sites)",
        points.len(),
        points.len() - geo_only,
    );
    points
});

/// Loss-risk thresholds for the embedded datasets, computed once.
#[must_use]
pub fn loss_thresholds() -> &'static LossThresholds {
    &LOSS_THRESHOLDS
}

/// The unified point set for the embedded datasets, joined once.
#[must_use]
pub fn unified_points() -> &'static [UnifiedPoint] {
    &UNIFIED_POINTS
}

/// Looks up a unified point by id.
#[must_use]
pub fn unified_point_by_id(id: &str) -> Option<&'static UnifiedPoint> {
    UNIFIED_POINTS.iter().find(|p| p.id == id)
}

/// Map markers for the memoized unified point set.
#[must_use]
pub fn map_impact_points() -> Vec<MapImpactPoint> {
    impact::to_map_impact_points(unified_points())
}
