//! Zone-level aggregation of site indicators.
//!
//! Zone names come from free-text survey sheets, so grouping normalizes
//! the key (trim, collapse whitespace, case-fold) instead of comparing
//! raw strings — a stray space or casing difference must not split a
//! zone. The first-seen trimmed spelling is kept as the display name and
//! zones are emitted in first-seen order.

use std::collections::HashMap;

use hazard_map_geographic_models::{GeoZoneAggregate, GeographicWithDerived};
use hazard_map_risk_models::RiskCategory;

/// Normalized grouping key for a zone name.
fn zone_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Groups enriched sites by zone and aggregates their indicators.
///
/// Raw sums are conserved exactly (summed in input order); derived means
/// are arithmetic averages, and the zone's risk category is recomputed
/// from the averaged hazard score rather than averaged over member
/// categories.
#[must_use]
pub fn aggregate_by_zone(rows: &[GeographicWithDerived]) -> Vec<GeoZoneAggregate> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<&GeographicWithDerived>> = HashMap::new();

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

fn aggregate_zone(members: &[&GeographicWithDerived]) -> GeoZoneAggregate {
    let sites = u32::try_from(members.len()).unwrap_or(u32::MAX);
    let count = f64::from(sites);

    let mut total_erosion_sum = 0.0;
    let mut total_sediment_sum = 0.0;
    let mut erosion_mean_sum = 0.0;
    let mut sediment_mean_sum = 0.0;
    let mut variability_sum = 0.0;
    let mut hazard_sum = 0.0;

    for row in members {
        total_erosion_sum += row.record.erosion_sum;
        total_sediment_sum += row.record.sediment_sum;
        erosion_mean_sum += row.record.erosion_mean;
        sediment_mean_sum += row.record.sediment_mean;
        variability_sum += row.derived.variability_index;
        hazard_sum += row.derived.hazard_score;
    }

    let avg_hazard_score = hazard_sum / count;

    GeoZoneAggregate {
        zone: members[0].record.zone.trim().to_string(),
        sites,
        total_erosion_sum,
        total_sediment_sum,
        avg_erosion_mean: erosion_mean_sum / count,
        avg_sediment_mean: sediment_mean_sum / count,
        avg_variability: variability_sum / count,
        avg_hazard_score,
        risk_category: RiskCategory::from_score(avg_hazard_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::enrich;
    use hazard_map_geographic_models::GeographicRecord;

    fn site(zone: &str, erosion_sum: f64, erosion_mean: f64) -> GeographicRecord {
        GeographicRecord {
            zone: zone.to_string(),
            department: "Arequipa".to_string(),
            lat: -16.39,
            lng: -71.52,
            erosion_sum,
            erosion_mean,
            erosion_std: 0.01,
            sediment_sum: 10.0,
            sediment_mean: 0.001,
            sediment_std: 0.005,
        }
    }

    #[test]
    fn conserves_site_counts_and_raw_sums() {
        let rows: Vec<_> = [
            site("San Lázaro", -48.6, -0.0027),
            site("San Lázaro", -52.3, -0.0029),
            site("Chilina", -35.4, -0.0019),
        ]
        .iter()
        .map(enrich)
        .collect();

        let zones = aggregate_by_zone(&rows);
        assert_eq!(zones.len(), 2);

        let total_sites: u32 = zones.iter().map(|z| z.sites).sum();
        assert_eq!(total_sites as usize, rows.len());

        let san_lazaro = &zones[0];
        assert_eq!(san_lazaro.zone, "San Lázaro");
        assert_eq!(san_lazaro.sites, 2);
        assert!((san_lazaro.total_erosion_sum - (-48.6 + -52.3)).abs() < 1e-12);
        assert!((san_lazaro.avg_erosion_mean - (-0.0028)).abs() < 1e-12);
    }

    #[test]
    fn emits_zones_in_first_seen_order() {
        let rows: Vec<_> = [
            site("Paucarpata", -10.0, -0.001),
            site("Chilina", -20.0, -0.001),
            site("Paucarpata", -30.0, -0.001),
            site("Miraflores", -40.0, -0.001),
        ]
        .iter()
        .map(enrich)
        .collect();

        let names: Vec<_> = aggregate_by_zone(&rows).into_iter().map(|z| z.zone).collect();
        assert_eq!(names, ["Paucarpata", "Chilina", "Miraflores"]);
    }

    #[test]
    fn merges_zone_spellings_differing_in_case_and_whitespace() {
        let rows: Vec<_> = [
            site("San Lázaro", -10.0, -0.001),
            site("  san  lázaro ", -20.0, -0.001),
        ]
        .iter()
        .map(enrich)
        .collect();

        let zones = aggregate_by_zone(&rows);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].zone, "San Lázaro");
        assert_eq!(zones[0].sites, 2);
    }

    #[test]
    fn zone_category_comes_from_averaged_score() {
        // One calm and one saturated site: members classify bajo and alto,
        // while their average lands in medio.
        let calm = enrich(&GeographicRecord {
            erosion_std: 0.0,
            sediment_std: 0.0,
            sediment_sum: 0.5,
            sediment_mean: 0.0,
            ..site("Los Incas", -0.5, 0.0)
        });
        let violent = enrich(&GeographicRecord {
            erosion_std: 0.03,
            sediment_std: 0.03,
            sediment_sum: 60.0,
            sediment_mean: 0.002,
            ..site("Los Incas", -60.0, -0.0035)
        });
        assert_eq!(calm.derived.risk_category, RiskCategory::Bajo);
        assert_eq!(violent.derived.risk_category, RiskCategory::Alto);

        let zones = aggregate_by_zone(&[calm.clone(), violent.clone()]);
        let expected =
            (calm.derived.hazard_score + violent.derived.hazard_score) / 2.0;
        assert!((zones[0].avg_hazard_score - expected).abs() < 1e-12);
        assert_eq!(zones[0].risk_category, RiskCategory::from_score(expected));
        assert_eq!(zones[0].risk_category, RiskCategory::Medio);
    }
}
