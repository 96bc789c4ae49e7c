#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Household survey types and derived vulnerability indicators.
//!
//! A [`SocioeconomicRecord`] is one surveyed household near a torrentera:
//! composition counts, health/education counts, employment, income, and
//! the field team's estimate of housing loss under a landslide event.
//! Derived indicators are attached as [`DerivedIndicators`]; raw records
//! are never mutated.

use hazard_map_risk_models::RiskCategory;
use serde::{Deserialize, Serialize};

/// A surveyed household with its raw questionnaire values.
///
/// Loaded once from the embedded dataset at startup; immutable for the
/// process lifetime. Counts are member counts within the household;
/// monetary values are PEN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocioeconomicRecord {
    /// Unique household identifier (e.g. "H-07").
    pub id: String,
    /// Zone (community/association) the household belongs to.
    pub zone: String,
    /// Department name (e.g. "Arequipa").
    pub department: String,
    /// Latitude in decimal degrees (WGS84).
    pub lat: f64,
    /// Longitude in decimal degrees (WGS84).
    pub lng: f64,
    /// Total household members.
    pub household_size: u32,
    /// Members under 10 years old.
    pub children_under_10: u32,
    /// Members 65 or older.
    pub elders_65: u32,
    /// Members currently enrolled in school.
    pub school_age_children: u32,
    /// Members with a diagnosed chronic condition.
    pub chronic_conditions: u32,
    /// Members unable to read and write.
    pub illiterate_members: u32,
    /// Members with completed higher education.
    pub higher_education_members: u32,
    /// Members in formal employment.
    pub employed_formal: u32,
    /// Members in informal employment.
    pub employed_informal: u32,
    /// Members covered by any health insurance.
    pub insured_members: u32,
    /// Years the household has lived at this location.
    pub years_in_residence: u32,
    /// Total monthly household income, PEN.
    pub monthly_income: f64,
    /// Estimated housing loss under a landslide event, PEN.
    pub estimated_loss_housing: f64,
}

/// Vulnerability indicators derived from one [`SocioeconomicRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedIndicators {
    /// Elders plus young children.
    pub dependents: u32,
    /// Formal plus informal employed members.
    pub total_employment: u32,
    /// Whether any member has health insurance.
    pub has_insurance: bool,
    /// Monthly income divided by household size (floored at 1).
    pub income_per_capita: f64,
    /// Composite socioeconomic vulnerability score in [0, 100].
    pub vulnerability_score: f64,
    /// Category from the vulnerability score via the shared breakpoints.
    pub risk_category: RiskCategory,
}

/// A household together with its derived indicators, as exposed to
/// consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocioeconomicWithDerived {
    /// The raw survey record.
    #[serde(flatten)]
    pub record: SocioeconomicRecord,
    /// Indicators computed from the record.
    #[serde(flatten)]
    pub derived: DerivedIndicators,
}

/// Zone-level aggregate over households.
///
/// As with the geographic aggregate, the risk category comes from the
/// averaged vulnerability score rather than averaging member categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocioZoneAggregate {
    /// Zone display name (first-seen spelling).
    pub zone: String,
    /// Number of surveyed households in the zone.
    pub households: u32,
    /// Mean household size.
    pub avg_household_size: f64,
    /// Mean monthly income, PEN.
    pub avg_monthly_income: f64,
    /// Mean income per capita, PEN.
    pub avg_income_per_capita: f64,
    /// Fraction of households with any insurance coverage, in [0, 1].
    pub insurance_coverage: f64,
    /// Mean vulnerability score.
    pub avg_vulnerability_score: f64,
    /// Category of the averaged vulnerability score.
    pub risk_category: RiskCategory,
}
