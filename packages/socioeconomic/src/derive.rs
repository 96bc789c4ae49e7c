//! Per-household derived vulnerability indicators.
//!
//! Pure and total, like the geographic equivalent. Ratios divide by the
//! household size floored at 1, so an (invalid) zero-member row still
//! produces a number instead of a NaN.

use hazard_map_risk_models::RiskCategory;
use hazard_map_risk_models::score::{clamp_score, clamp_unit, finite_or_zero};
use hazard_map_socioeconomic_models::{
    DerivedIndicators, SocioeconomicRecord, SocioeconomicWithDerived,
};

/// Monthly income per capita (PEN) at which the income-deficiency
/// sub-score reaches 0.
pub const INCOME_REFERENCE: f64 = 1500.0;

/// Weight of income deficiency in the vulnerability composite.
pub const WEIGHT_INCOME: f64 = 30.0;

/// Weight of the dependents ratio in the vulnerability composite.
pub const WEIGHT_DEPENDENTS: f64 = 20.0;

/// Weight of the elders ratio in the vulnerability composite.
pub const WEIGHT_ELDERS: f64 = 10.0;

/// Weight of the chronic-condition ratio in the vulnerability composite.
pub const WEIGHT_CHRONIC: f64 = 15.0;

/// Weight of the no-insurance flag in the vulnerability composite.
pub const WEIGHT_NO_INSURANCE: f64 = 15.0;

/// Weight of the illiteracy ratio in the vulnerability composite.
pub const WEIGHT_ILLITERACY: f64 = 10.0;

/// Weight of the higher-education ratio; the only mitigating term.
pub const WEIGHT_HIGHER_EDUCATION: f64 = 5.0;

/// Computes the derived vulnerability indicators for one household.
#[must_use]
pub fn compute_derived(record: &SocioeconomicRecord) -> DerivedIndicators {
    let dependents = record.elders_65 + record.children_under_10;
    let total_employment = record.employed_formal + record.employed_informal;
    let has_insurance = record.insured_members > 0;

    let size = f64::from(record.household_size.max(1));
    let income_per_capita = finite_or_zero(record.monthly_income) / size;

    let income_deficiency = clamp_unit(1.0 - income_per_capita / INCOME_REFERENCE);
    let dependents_ratio = clamp_unit(f64::from(dependents) / size);
    let elders_ratio = clamp_unit(f64::from(record.elders_65) / size);
    let chronic_ratio = clamp_unit(f64::from(record.chronic_conditions) / size);
    let no_insurance = if has_insurance { 0.0 } else { 1.0 };
    let illiteracy_ratio = clamp_unit(f64::from(record.illiterate_members) / size);
    let higher_education_ratio = clamp_unit(f64::from(record.higher_education_members) / size);

    let vulnerability_score = clamp_score(
        WEIGHT_INCOME * income_deficiency
            + WEIGHT_DEPENDENTS * dependents_ratio
            + WEIGHT_ELDERS * elders_ratio
            + WEIGHT_CHRONIC * chronic_ratio
            + WEIGHT_NO_INSURANCE * no_insurance
            + WEIGHT_ILLITERACY * illiteracy_ratio
            - WEIGHT_HIGHER_EDUCATION * higher_education_ratio,
    );

    DerivedIndicators {
        dependents,
        total_employment,
        has_insurance,
        income_per_capita,
        vulnerability_score,
        risk_category: RiskCategory::from_score(vulnerability_score),
    }
}

/// Attaches derived indicators to a record.
#[must_use]
pub fn enrich(record: &SocioeconomicRecord) -> SocioeconomicWithDerived {
    SocioeconomicWithDerived {
        derived: compute_derived(record),
        record: record.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn household(size: u32, income: f64) -> SocioeconomicRecord {
        SocioeconomicRecord {
            id: "H-99".to_string(),
            zone: "Polanco".to_string(),
            department: "Arequipa".to_string(),
            lat: -16.38,
            lng: -71.52,
            household_size: size,
            children_under_10: 0,
            elders_65: 0,
            school_age_children: 0,
            chronic_conditions: 0,
            illiterate_members: 0,
            higher_education_members: 0,
            employed_formal: 0,
            employed_informal: 0,
            insured_members: 0,
            years_in_residence: 10,
            monthly_income: income,
            estimated_loss_housing: 0.0,
        }
    }

    #[test]
    fn computes_known_household() {
        let record = SocioeconomicRecord {
            children_under_10: 2,
            elders_65: 1,
            chronic_conditions: 1,
            higher_education_members: 1,
            employed_formal: 1,
            employed_informal: 1,
            ..household(5, 900.0)
        };
        let d = compute_derived(&record);

        assert_eq!(d.dependents, 3);
        assert_eq!(d.total_employment, 2);
        assert!(!d.has_insurance);
        assert!((d.income_per_capita - 180.0).abs() < 1e-12);
        // 30*0.88 + 20*0.6 + 10*0.2 + 15*0.2 + 15*1 + 10*0 - 5*0.2
        assert!((d.vulnerability_score - 57.4).abs() < 1e-9);
        assert_eq!(d.risk_category, RiskCategory::Medio);
    }

    #[test]
    fn household_size_floors_at_one() {
        let d = compute_derived(&household(0, 1200.0));
        assert!((d.income_per_capita - 1200.0).abs() < 1e-12);
    }

    #[test]
    fn wealthy_insured_household_scores_low() {
        let record = SocioeconomicRecord {
            insured_members: 4,
            higher_education_members: 2,
            employed_formal: 2,
            ..household(4, 6000.0)
        };
        let d = compute_derived(&record);
        assert!(d.vulnerability_score.abs() < f64::EPSILON, "negative terms clamp to 0");
        assert_eq!(d.risk_category, RiskCategory::Bajo);
    }

    #[test]
    fn destitute_household_scores_high() {
        let record = SocioeconomicRecord {
            children_under_10: 3,
            elders_65: 2,
            chronic_conditions: 5,
            illiterate_members: 5,
            ..household(5, 0.0)
        };
        let d = compute_derived(&record);
        // 30 + 20 + 10*0.4 + 15 + 15 + 10 = 94; within bounds, no clamp hit.
        assert!((d.vulnerability_score - 94.0).abs() < 1e-9);
        assert_eq!(d.risk_category, RiskCategory::Alto);
    }

    #[test]
    fn non_finite_income_never_poisons_the_score() {
        let d = compute_derived(&household(4, f64::NAN));
        assert!(d.income_per_capita.abs() < f64::EPSILON);
        assert!(d.vulnerability_score.is_finite());

        let d = compute_derived(&household(4, f64::INFINITY));
        assert!((0.0..=100.0).contains(&d.vulnerability_score));
    }

    #[test]
    fn derivation_is_deterministic() {
        let record = SocioeconomicRecord {
            children_under_10: 1,
            insured_members: 2,
            ..household(6, 1340.0)
        };
        let first = compute_derived(&record);
        let second = compute_derived(&record);
        assert_eq!(first, second);
        assert!(
            first.vulnerability_score.to_bits() == second.vulnerability_score.to_bits()
        );
    }
}
