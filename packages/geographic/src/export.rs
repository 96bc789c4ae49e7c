//! Read-only projections for external consumers: GeoJSON for the map
//! layer and column metadata for generic table/CSV rendering.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use hazard_map_geographic_models::GeographicWithDerived;
use hazard_map_table_models::{ColumnSpec, ValueFormat};

/// Column metadata for the enriched site table, in display order.
///
/// Keys match the camelCase field names of the serialized
/// [`GeographicWithDerived`] rows.
#[must_use]
pub const fn table_columns() -> &'static [ColumnSpec] {
    &[
        ColumnSpec {
            key: "zone",
            header: "Zona",
            format: ValueFormat::Text,
        },
        ColumnSpec {
            key: "department",
            header: "Departamento",
            format: ValueFormat::Text,
        },
        ColumnSpec {
            key: "lat",
            header: "Latitud",
            format: ValueFormat::Coordinate,
        },
        ColumnSpec {
            key: "lng",
            header: "Longitud",
            format: ValueFormat::Coordinate,
        },
        ColumnSpec {
            key: "erosionSum",
            header: "Erosión total (m³)",
            format: ValueFormat::Decimal { places: 1 },
        },
        ColumnSpec {
            key: "erosionMean",
            header: "Erosión media (m)",
            format: ValueFormat::Decimal { places: 4 },
        },
        ColumnSpec {
            key: "erosionStd",
            header: "Desv. est. erosión",
            format: ValueFormat::Decimal { places: 4 },
        },
        ColumnSpec {
            key: "sedimentSum",
            header: "Sedimentación total (m³)",
            format: ValueFormat::Decimal { places: 1 },
        },
        ColumnSpec {
            key: "sedimentMean",
            header: "Sedimentación media (m)",
            format: ValueFormat::Decimal { places: 4 },
        },
        ColumnSpec {
            key: "sedimentStd",
            header: "Desv. est. sedimentación",
            format: ValueFormat::Decimal { places: 4 },
        },
        ColumnSpec {
            key: "erosionMagnitude",
            header: "Magnitud de erosión (m³)",
            format: ValueFormat::Decimal { places: 1 },
        },
        ColumnSpec {
            key: "sedimentMagnitude",
            header: "Magnitud de sedimentación (m³)",
            format: ValueFormat::Decimal { places: 1 },
        },
        ColumnSpec {
            key: "netBalance",
            header: "Balance neto (m³)",
            format: ValueFormat::Decimal { places: 1 },
        },
        ColumnSpec {
            key: "dominance",
            header: "Proceso dominante",
            format: ValueFormat::Category,
        },
        ColumnSpec {
            key: "variabilityIndex",
            header: "Índice de variabilidad",
            format: ValueFormat::Decimal { places: 2 },
        },
        ColumnSpec {
            key: "hazardScore",
            header: "Índice de peligro",
            format: ValueFormat::Decimal { places: 1 },
        },
        ColumnSpec {
            key: "riskCategory",
            header: "Categoría de riesgo",
            format: ValueFormat::Category,
        },
    ]
}

/// Projects enriched sites to a GeoJSON `FeatureCollection`.
///
/// Coordinates are passed through as-is (the survey data is already
/// WGS84) in `[lng, lat]` order; the full enriched row becomes the
/// feature's properties.
#[must_use]
pub fn to_geojson(rows: &[GeographicWithDerived]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: rows
            .iter()
            .map(|row| Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![
                    row.record.lng,
                    row.record.lat,
                ]))),
                id: None,
                properties: properties(row),
                foreign_members: None,
            })
            .collect(),
        foreign_members: None,
    }
}

/// Serializes a row into a GeoJSON properties object.
///
/// All derived values are guarded finite, so serialization cannot fail
/// in practice; a hypothetical failure yields an empty properties bag
/// rather than a dropped feature.
fn properties(row: &GeographicWithDerived) -> Option<JsonObject> {
    match serde_json::to_value(row) {
        Ok(serde_json::Value::Object(map)) => Some(map),
        _ => None,
    }
}
