//! Embedded household dataset — loads the survey table from TOML baked
//! into the binary at compile time via [`include_str!`].
//!
//! As with the site dataset, raw TOML rows are snake_case and converted
//! into the camelCase model type here.

use hazard_map_socioeconomic_models::SocioeconomicRecord;
use serde::Deserialize;

/// The survey table embedded at compile time.
const HOUSEHOLDS_TOML: &str = include_str!("../datasets/households.toml");

/// Number of rows in the embedded table (used in tests).
#[cfg(test)]
const EXPECTED_HOUSEHOLD_COUNT: usize = 16;

/// Errors that can occur while parsing a household table.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The TOML document could not be deserialized.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct HouseholdTable {
    households: Vec<RawHousehold>,
}

/// One row of the TOML table, in file field order.
#[derive(Debug, Deserialize)]
struct RawHousehold {
    id: String,
    zone: String,
    department: String,
    lat: f64,
    lng: f64,
    household_size: u32,
    children_under_10: u32,
    elders_65: u32,
    school_age_children: u32,
    chronic_conditions: u32,
    illiterate_members: u32,
    higher_education_members: u32,
    employed_formal: u32,
    employed_informal: u32,
    insured_members: u32,
    years_in_residence: u32,
    monthly_income: f64,
    estimated_loss_housing: f64,
}

impl From<RawHousehold> for SocioeconomicRecord {
    fn from(raw: RawHousehold) -> Self {
        Self {
            id: raw.id,
            zone: raw.zone,
            department: raw.department,
            lat: raw.lat,
            lng: raw.lng,
            household_size: raw.household_size,
            children_under_10: raw.children_under_10,
            elders_65: raw.elders_65,
            school_age_children: raw.school_age_children,
            chronic_conditions: raw.chronic_conditions,
            illiterate_members: raw.illiterate_members,
            higher_education_members: raw.higher_education_members,
            employed_formal: raw.employed_formal,
            employed_informal: raw.employed_informal,
            insured_members: raw.insured_members,
            years_in_residence: raw.years_in_residence,
            monthly_income: raw.monthly_income,
            estimated_loss_housing: raw.estimated_loss_housing,
        }
    }
}

/// Parses a household table from TOML text.
///
/// # Errors
///
/// Returns [`DatasetError::Toml`] if the document is malformed or a row
/// is missing a field.
pub fn parse_households_toml(toml_text: &str) -> Result<Vec<SocioeconomicRecord>, DatasetError> {
    let table: HouseholdTable = toml::from_str(toml_text)?;
    Ok(table.households.into_iter().map(Into::into).collect())
}

/// Parses the embedded household table.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (this is a compile-time
/// guarantee since the table is baked into the binary).
#[must_use]
pub fn load_households() -> Vec<SocioeconomicRecord> {
    parse_households_toml(HOUSEHOLDS_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse households.toml: {e}"))
}
