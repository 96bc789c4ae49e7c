#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Risk category taxonomy and shared scoring primitives.
//!
//! This crate defines the canonical three-level risk classification used
//! across the entire hazard-map system. Every 0-100 composite score —
//! hazard, vulnerability, zone averages, and the geo-only loss inference —
//! is mapped to a category through the single [`RiskCategory::from_score`]
//! breakpoint function so that all scoring paths stay consistent.

pub mod score;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Composite score at or above this value classifies as [`RiskCategory::Medio`].
pub const MEDIO_BREAKPOINT: f64 = 33.0;

/// Composite score at or above this value classifies as [`RiskCategory::Alto`].
pub const ALTO_BREAKPOINT: f64 = 66.0;

/// Three-level risk classification, in ascending order of severity.
///
/// The serialized labels (`bajo`/`medio`/`alto`) are the data contract
/// consumed by the map and table frontends and must not change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskCategory {
    /// Composite score below 33.
    Bajo,
    /// Composite score in [33, 66).
    Medio,
    /// Composite score of 66 or above.
    Alto,
}

impl RiskCategory {
    /// Classifies a 0-100 composite score using the fixed 33/66 breakpoints.
    ///
    /// Non-finite scores fall through to [`Self::Bajo`], consistent with the
    /// guarded arithmetic in [`score`] that keeps NaN out of composites.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= ALTO_BREAKPOINT {
            Self::Alto
        } else if score >= MEDIO_BREAKPOINT {
            Self::Medio
        } else {
            Self::Bajo
        }
    }

    /// Returns all variants in ascending severity order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Bajo, Self::Medio, Self::Alto]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_half_open() {
        assert_eq!(RiskCategory::from_score(0.0), RiskCategory::Bajo);
        assert_eq!(RiskCategory::from_score(32.999), RiskCategory::Bajo);
        assert_eq!(RiskCategory::from_score(33.0), RiskCategory::Medio);
        assert_eq!(RiskCategory::from_score(65.999), RiskCategory::Medio);
        assert_eq!(RiskCategory::from_score(66.0), RiskCategory::Alto);
        assert_eq!(RiskCategory::from_score(100.0), RiskCategory::Alto);
    }

    #[test]
    fn breakpoint_consistency_over_score_range() {
        let mut s = 0.0;
        while s <= 100.0 {
            let category = RiskCategory::from_score(s);
            assert_eq!(category == RiskCategory::Alto, s >= ALTO_BREAKPOINT);
            assert_eq!(
                category == RiskCategory::Medio,
                (MEDIO_BREAKPOINT..ALTO_BREAKPOINT).contains(&s)
            );
            assert_eq!(category == RiskCategory::Bajo, s < MEDIO_BREAKPOINT);
            s += 0.25;
        }
    }

    #[test]
    fn non_finite_scores_classify_low() {
        assert_eq!(RiskCategory::from_score(f64::NAN), RiskCategory::Bajo);
        assert_eq!(
            RiskCategory::from_score(f64::NEG_INFINITY),
            RiskCategory::Bajo
        );
    }

    #[test]
    fn categories_order_by_severity() {
        assert!(RiskCategory::Bajo < RiskCategory::Medio);
        assert!(RiskCategory::Medio < RiskCategory::Alto);
    }

    #[test]
    fn serialized_labels_match_data_contract() {
        assert_eq!(RiskCategory::Bajo.to_string(), "bajo");
        assert_eq!(RiskCategory::Medio.to_string(), "medio");
        assert_eq!(RiskCategory::Alto.to_string(), "alto");
        assert_eq!("alto".parse::<RiskCategory>().unwrap(), RiskCategory::Alto);
    }
}
