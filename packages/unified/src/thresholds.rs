//! Data-driven loss-risk thresholds.
//!
//! The cut points adapt to the scale of the observed housing-loss
//! distribution instead of being fixed guesses: with enough finite
//! samples they are the 33rd/66th percentiles, mirroring the score
//! breakpoints one level up. A static fallback covers degenerate
//! distributions.

use hazard_map_risk_models::RiskCategory;
use hazard_map_risk_models::score::finite_or_zero;
use hazard_map_unified_models::{LossThresholds, ThresholdBasis};

/// Minimum number of finite loss values required for percentile cut
/// points; below this the static fallback applies.
pub const PERCENTILE_MIN_SAMPLE: usize = 4;

/// Percentile of the loss distribution bounding the `bajo` band.
pub const LOW_PERCENTILE: f64 = 0.33;

/// Percentile of the loss distribution bounding the `medio` band.
pub const HIGH_PERCENTILE: f64 = 0.66;

/// Static `bajo`/`medio` cut point, PEN.
pub const STATIC_LOW: f64 = 200.0;

/// Static `medio`/`alto` cut point, PEN.
pub const STATIC_HIGH: f64 = 500.0;

/// Computes loss thresholds from a loss distribution.
///
/// Non-finite values are dropped; if fewer than
/// [`PERCENTILE_MIN_SAMPLE`] remain, the static cut points are used.
#[must_use]
pub fn from_losses(losses: &[f64]) -> LossThresholds {
    let mut finite: Vec<f64> = losses.iter().copied().filter(|v| v.is_finite()).collect();

    if finite.len() < PERCENTILE_MIN_SAMPLE {
        return LossThresholds {
            low: STATIC_LOW,
            high: STATIC_HIGH,
            basis: ThresholdBasis::Static,
        };
    }

    finite.sort_by(f64::total_cmp);

    LossThresholds {
        low: percentile(&finite, LOW_PERCENTILE),
        high: percentile(&finite, HIGH_PERCENTILE),
        basis: ThresholdBasis::Percentile,
    }
}

/// Classifies a loss value against the thresholds.
///
/// `bajo` below `low`, `medio` below `high`, else `alto` — the same
/// half-open shape as the score breakpoints. Non-finite losses read
/// as 0.
#[must_use]
pub fn classify(loss: f64, thresholds: &LossThresholds) -> RiskCategory {
    let loss = finite_or_zero(loss);
    if loss < thresholds.low {
        RiskCategory::Bajo
    } else if loss < thresholds.high {
        RiskCategory::Medio
    } else {
        RiskCategory::Alto
    }
}

/// Percentile of an ascending-sorted slice by linear interpolation
/// between order statistics (`rank = p * (n - 1)`).
///
/// Returns 0 for an empty slice.
#[must_use]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = rank.floor() as usize;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (rank - rank.floor()) * (sorted[upper] - sorted[lower])
    }
}
