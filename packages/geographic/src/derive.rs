//! Per-site derived hazard indicators.
//!
//! All functions here are pure and total: the scale constants are
//! empirically chosen from the 2023-2024 campaign data, and every
//! intermediate value passes through the guarded arithmetic in
//! [`hazard_map_risk_models::score`], so pathological inputs normalize to
//! plausible numbers instead of propagating.

use hazard_map_geographic_models::{
    Dominance, GeographicDerived, GeographicRecord, GeographicWithDerived,
};
use hazard_map_risk_models::RiskCategory;
use hazard_map_risk_models::score::{clamp_score, finite_or_zero, unit_ratio};

/// Scale that saturates the erosion-intensity sub-score (mean, m/interval).
pub const EROSION_MEAN_SCALE: f64 = 0.0035;

/// Scale that saturates the sediment-intensity sub-score (mean, m/interval).
pub const SEDIMENT_MEAN_SCALE: f64 = 0.002;

/// Scale that saturates the combined-magnitude sub-score (m³ over the period).
pub const MAGNITUDE_SCALE: f64 = 120.0;

/// Scale that saturates the variability sub-score (summed stds).
pub const VARIABILITY_SCALE: f64 = 0.05;

/// Relative margin by which one process must exceed the other to dominate.
pub const DOMINANCE_MARGIN: f64 = 0.1;

/// Weight of the erosion-intensity sub-score in the hazard composite.
pub const WEIGHT_EROSION_INTENSITY: f64 = 35.0;

/// Weight of the sediment-intensity sub-score in the hazard composite.
pub const WEIGHT_SEDIMENT_INTENSITY: f64 = 25.0;

/// Weight of the variability sub-score in the hazard composite.
pub const WEIGHT_VARIABILITY: f64 = 20.0;

/// Weight of the combined-magnitude sub-score in the hazard composite.
pub const WEIGHT_MAGNITUDE: f64 = 20.0;

/// Computes the derived hazard indicators for one site.
#[must_use]
pub fn compute_derived(record: &GeographicRecord) -> GeographicDerived {
    let erosion_sum = finite_or_zero(record.erosion_sum);
    let sediment_sum = finite_or_zero(record.sediment_sum);

    let erosion_magnitude = erosion_sum.abs();
    let sediment_magnitude = sediment_sum.abs();
    let net_balance = sediment_sum + erosion_sum;

    let dominance = classify_dominance(erosion_magnitude, sediment_magnitude);

    let erosion_intensity = unit_ratio(record.erosion_mean, EROSION_MEAN_SCALE);
    let sediment_intensity = unit_ratio(record.sediment_mean, SEDIMENT_MEAN_SCALE);
    let magnitude = unit_ratio(erosion_magnitude + sediment_magnitude, MAGNITUDE_SCALE);
    let variability_index = unit_ratio(
        finite_or_zero(record.erosion_std).abs() + finite_or_zero(record.sediment_std).abs(),
        VARIABILITY_SCALE,
    );

    let hazard_score = clamp_score(
        WEIGHT_EROSION_INTENSITY * erosion_intensity
            + WEIGHT_SEDIMENT_INTENSITY * sediment_intensity
            + WEIGHT_VARIABILITY * variability_index
            + WEIGHT_MAGNITUDE * magnitude,
    );

    GeographicDerived {
        erosion_magnitude,
        sediment_magnitude,
        net_balance,
        dominance,
        variability_index,
        hazard_score,
        risk_category: RiskCategory::from_score(hazard_score),
    }
}

/// Attaches derived indicators to a record.
#[must_use]
pub fn enrich(record: &GeographicRecord) -> GeographicWithDerived {
    GeographicWithDerived {
        derived: compute_derived(record),
        record: record.clone(),
    }
}

/// Three-way dominance classification with a 10% margin.
fn classify_dominance(erosion_magnitude: f64, sediment_magnitude: f64) -> Dominance {
    if erosion_magnitude > sediment_magnitude * (1.0 + DOMINANCE_MARGIN) {
        Dominance::Erosion
    } else if sediment_magnitude > erosion_magnitude * (1.0 + DOMINANCE_MARGIN) {
        Dominance::Sedimentation
    } else {
        Dominance::Mixed
    }
}
