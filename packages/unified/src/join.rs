//! Coordinate join of the household and site datasets.
//!
//! Each household resolves to at most one survey site: an exact match on
//! the 6-decimal coordinate key, or the nearest site by great-circle
//! distance within [`JOIN_RADIUS_M`]. Sites that no household claims are
//! emitted as standalone geo-only points, so every record of both
//! datasets appears in exactly one output point.

use hazard_map_geographic_models::GeographicWithDerived;
use hazard_map_risk_models::RiskCategory;
use hazard_map_socioeconomic_models::SocioeconomicWithDerived;
use hazard_map_spatial::SiteIndex;
use hazard_map_unified_models::{LossThresholds, UnifiedPoint};

use crate::thresholds;

/// Maximum distance at which a household still attaches to a site.
pub const JOIN_RADIUS_M: f64 = 150.0;

/// Joins the two datasets into unified points.
///
/// Pure and deterministic: output order is households in input order
/// followed by unclaimed sites in input order. The memoized process-wide
/// set in the crate root is built from exactly this function.
#[must_use]
pub fn build_unified_points(
    households: &[SocioeconomicWithDerived],
    sites: &[GeographicWithDerived],
    loss_thresholds: &LossThresholds,
) -> Vec<UnifiedPoint> {
    let coords: Vec<(f64, f64)> = sites
        .iter()
        .map(|s| (s.record.lat, s.record.lng))
        .collect();
    let index = SiteIndex::build(&coords);

    let mut used = vec![false; sites.len()];
    let mut points = Vec::with_capacity(households.len());

    for household in households {
        let matched = index
            .exact(household.record.lat, household.record.lng)
            .or_else(|| {
                index
                    .nearest_within(household.record.lat, household.record.lng, JOIN_RADIUS_M)
                    .map(|(i, _)| i)
            });

        if let Some(i) = matched {
            used[i] = true;
        }

        points.push(UnifiedPoint {
            id: household.record.id.clone(),
            lat: household.record.lat,
            lng: household.record.lng,
            zone: household.record.zone.clone(),
            department: household.record.department.clone(),
            estimated_loss_housing: household.record.estimated_loss_housing,
            loss_risk: thresholds::classify(
                household.record.estimated_loss_housing,
                loss_thresholds,
            ),
            socio: Some(household.clone()),
            geo: matched.map(|i| sites[i].clone()),
        });
    }

    for (i, site) in sites.iter().enumerate() {
        if used[i] {
            continue;
        }
        // No housing-loss figure exists for an unclaimed site, so its
        // loss risk is inferred from the physical hazard score.
        points.push(UnifiedPoint {
            id: format!("geo-{i}"),
            lat: site.record.lat,
            lng: site.record.lng,
            zone: site.record.zone.clone(),
            department: site.record.department.clone(),
            estimated_loss_housing: 0.0,
            loss_risk: RiskCategory::from_score(site.derived.hazard_score),
            socio: None,
            geo: Some(site.clone()),
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_map_geographic_models::GeographicRecord;
    use hazard_map_socioeconomic_models::SocioeconomicRecord;
    use hazard_map_unified_models::ThresholdBasis;

    fn site(zone: &str, lat: f64, lng: f64, erosion_mean: f64) -> GeographicWithDerived {
        hazard_map_geographic::enrich(&GeographicRecord {
            zone: zone.to_string(),
            department: "Arequipa".to_string(),
            lat,
            lng,
            erosion_sum: -30.0,
            erosion_mean,
            erosion_std: 0.01,
            sediment_sum: 20.0,
            sediment_mean: 0.001,
            sediment_std: 0.006,
        })
    }

    fn household(id: &str, lat: f64, lng: f64, loss: f64) -> SocioeconomicWithDerived {
        hazard_map_socioeconomic::enrich(&SocioeconomicRecord {
            id: id.to_string(),
            zone: "San Lázaro".to_string(),
            department: "Arequipa".to_string(),
            lat,
            lng,
            household_size: 4,
            children_under_10: 1,
            elders_65: 1,
            school_age_children: 1,
            chronic_conditions: 0,
            illiterate_members: 0,
            higher_education_members: 0,
            employed_formal: 1,
            employed_informal: 1,
            insured_members: 1,
            years_in_residence: 12,
            monthly_income: 1100.0,
            estimated_loss_housing: loss,
        })
    }

    fn static_thresholds() -> LossThresholds {
        LossThresholds {
            low: 200.0,
            high: 500.0,
            basis: ThresholdBasis::Static,
        }
    }

    #[test]
    fn exact_coordinates_attach_the_site() {
        let sites = [site("San Lázaro", -16.394_224, -71.525_843, -0.002)];
        let households = [household("H-01", -16.394_224, -71.525_843, 600.0)];

        let points = build_unified_points(&households, &sites, &static_thresholds());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].id, "H-01");
        assert!(points[0].geo.is_some());
        assert_eq!(points[0].loss_risk, RiskCategory::Alto);
    }

    #[test]
    fn near_coordinates_attach_within_join_radius() {
        // Household ~111 m north of the site.
        let sites = [site("Chilina", -16.374_903, -71.529_841, -0.002)];
        let households = [household("H-01", -16.373_903, -71.529_841, 100.0)];

        let points = build_unified_points(&households, &sites, &static_thresholds());
        assert!(points[0].geo.is_some());
        // The site is claimed, so no geo-only point follows.
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn distant_households_stay_unmatched_and_site_is_emitted_standalone() {
        // Household ~556 m away from the only site.
        let sites = [site("Polanco", -16.383_415, -71.518_226, -0.002)];
        let households = [household("H-01", -16.388_415, -71.518_226, 100.0)];

        let points = build_unified_points(&households, &sites, &static_thresholds());
        assert_eq!(points.len(), 2);

        assert_eq!(points[0].id, "H-01");
        assert!(points[0].geo.is_none());
        assert!(points[0].socio.is_some());

        assert_eq!(points[1].id, "geo-0");
        assert!(points[1].socio.is_none());
        assert!(points[1].estimated_loss_housing.abs() < f64::EPSILON);
    }

    #[test]
    fn geo_only_points_infer_risk_from_hazard_score() {
        let quiet = site("Paucarpata", -16.425_873, -71.501_392, -0.0001);
        let violent = site("Miraflores", -16.389_674, -71.509_228, -0.0035);
        assert_eq!(quiet.derived.risk_category, RiskCategory::Bajo);
        assert_eq!(violent.derived.risk_category, RiskCategory::Medio);

        let points =
            build_unified_points(&[], &[quiet.clone(), violent.clone()], &static_thresholds());
        assert_eq!(points.len(), 2);
        // Without a housing-loss figure the loss risk mirrors the
        // physical hazard category, not the loss thresholds.
        assert_eq!(points[0].loss_risk, RiskCategory::Bajo);
        assert_eq!(points[1].loss_risk, RiskCategory::Medio);
    }

    #[test]
    fn output_counts_households_plus_unclaimed_sites() {
        let sites = [
            site("San Lázaro", -16.394_224, -71.525_843, -0.002),
            site("Chilina", -16.377_512, -71.531_267, -0.002),
            site("Polanco", -16.383_415, -71.518_226, -0.002),
        ];
        let households = [
            household("H-01", -16.394_224, -71.525_843, 600.0),
            household("H-02", -16.399_873, -71.522_418, 0.0),
        ];

        let points = build_unified_points(&households, &sites, &static_thresholds());
        // 2 households + 2 unclaimed sites.
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn join_is_deterministic() {
        let sites = [
            site("San Lázaro", -16.394_224, -71.525_843, -0.002),
            site("Chilina", -16.377_512, -71.531_267, -0.002),
        ];
        let households = [
            household("H-01", -16.394_224, -71.525_843, 600.0),
            household("H-02", -16.379_841, -71.536_972, 0.0),
        ];

        let first = build_unified_points(&households, &sites, &static_thresholds());
        let second = build_unified_points(&households, &sites, &static_thresholds());
        assert_eq!(first, second);
    }
}
