//! Flat projection of unified points for the map renderer.

use hazard_map_unified_models::{ImpactDetails, MapImpactPoint, UnifiedPoint};

/// Projects unified points to the flat marker contract.
///
/// Total function: every point maps to exactly one marker whose severity
/// is the point's loss-risk category.
#[must_use]
pub fn to_map_impact_points(points: &[UnifiedPoint]) -> Vec<MapImpactPoint> {
    points
        .iter()
        .map(|point| MapImpactPoint {
            id: point.id.clone(),
            lat: point.lat,
            lng: point.lng,
            severity: point.loss_risk,
            details: ImpactDetails {
                zone: point.zone.clone(),
                department: point.department.clone(),
                estimated_loss_housing: point.estimated_loss_housing,
                hazard_score: point.geo.as_ref().map(|g| g.derived.hazard_score),
                dominance: point.geo.as_ref().map(|g| g.derived.dominance),
                vulnerability_score: point
                    .socio
                    .as_ref()
                    .map(|s| s.derived.vulnerability_score),
                income_per_capita: point.socio.as_ref().map(|s| s.derived.income_per_capita),
                household_size: point.socio.as_ref().map(|s| s.record.household_size),
            },
        })
        .collect()
}
