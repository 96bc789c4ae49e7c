//! Zone-level aggregation of household indicators.
//!
//! Same grouping contract as the geographic aggregation: normalized zone
//! keys, first-seen display spelling, first-seen output order, and a risk
//! category recomputed from the averaged score.

use std::collections::HashMap;

use hazard_map_risk_models::RiskCategory;
use hazard_map_socioeconomic_models::{SocioZoneAggregate, SocioeconomicWithDerived};

/// Normalized grouping key for a zone name.
fn zone_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Groups enriched households by zone and aggregates their indicators.
#[must_use]
pub fn aggregate_by_zone(rows: &[SocioeconomicWithDerived]) -> Vec<SocioZoneAggregate> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<&SocioeconomicWithDerived>> = HashMap::new();

    for row in rows {
        let key = zone_key(&row.record.zone);
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(row);
    }

    order
        .iter()
        .map(|key| aggregate_zone(&groups[key]))
        .collect()
}

fn aggregate_zone(members: &[&SocioeconomicWithDerived]) -> SocioZoneAggregate {
    let households = u32::try_from(members.len()).unwrap_or(u32::MAX);
    let count = f64::from(households);

    let mut size_sum = 0.0;
    let mut income_sum = 0.0;
    let mut per_capita_sum = 0.0;
    let mut insured_households = 0u32;
    let mut vulnerability_sum = 0.0;

    for row in members {
        size_sum += f64::from(row.record.household_size);
        income_sum += row.record.monthly_income;
        per_capita_sum += row.derived.income_per_capita;
        if row.derived.has_insurance {
            insured_households += 1;
        }
        vulnerability_sum += row.derived.vulnerability_score;
    }

    let avg_vulnerability_score = vulnerability_sum / count;

    SocioZoneAggregate {
        zone: members[0].record.zone.trim().to_string(),
        households,
        avg_household_size: size_sum / count,
        avg_monthly_income: income_sum / count,
        avg_income_per_capita: per_capita_sum / count,
        insurance_coverage: f64::from(insured_households) / count,
        avg_vulnerability_score,
        risk_category: RiskCategory::from_score(avg_vulnerability_score),
    }
}
