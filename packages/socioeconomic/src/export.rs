//! Read-only projections for external consumers: GeoJSON for the map
//! layer and column metadata for generic table/CSV rendering.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use hazard_map_socioeconomic_models::SocioeconomicWithDerived;
use hazard_map_table_models::{ColumnSpec, ValueFormat};

/// Column metadata for the enriched household table, in display order.
///
/// Keys match the camelCase field names of the serialized
/// [`SocioeconomicWithDerived`] rows.
#[must_use]
pub const fn table_columns() -> &'static [ColumnSpec] {
    &[
        ColumnSpec {
            key: "id",
            header: "Código",
            format: ValueFormat::Text,
        },
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
            key: "householdSize",
            header: "Miembros del hogar",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "childrenUnder10",
            header: "Niños menores de 10",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "elders65",
            header: "Adultos mayores de 65",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "schoolAgeChildren",
            header: "Miembros escolarizados",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "chronicConditions",
            header: "Con enfermedad crónica",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "illiterateMembers",
            header: "Sin alfabetizar",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "higherEducationMembers",
            header: "Con educación superior",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "employedFormal",
            header: "Empleo formal",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "employedInformal",
            header: "Empleo informal",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "insuredMembers",
            header: "Con seguro de salud",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "yearsInResidence",
            header: "Años de residencia",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "monthlyIncome",
            header: "Ingreso mensual (S/)",
            format: ValueFormat::Currency,
        },
        ColumnSpec {
            key: "estimatedLossHousing",
            header: "Pérdida estimada de vivienda (S/)",
            format: ValueFormat::Currency,
        },
        ColumnSpec {
            key: "dependents",
            header: "Dependientes",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "totalEmployment",
            header: "Miembros empleados",
            format: ValueFormat::Integer,
        },
        ColumnSpec {
            key: "hasInsurance",
            header: "Hogar asegurado",
            format: ValueFormat::Text,
        },
        ColumnSpec {
            key: "incomePerCapita",
            header: "Ingreso per cápita (S/)",
            format: ValueFormat::Currency,
        },
        ColumnSpec {
            key: "vulnerabilityScore",
            header: "Índice de vulnerabilidad",
            format: ValueFormat::Decimal { places: 1 },
        },
        ColumnSpec {
            key: "riskCategory",
            header: "Categoría de riesgo",
            format: ValueFormat::Category,
        },
    ]
}

/// Projects enriched households to a GeoJSON `FeatureCollection`.
///
/// Same contract as the geographic projection: `[lng, lat]` point
/// features carrying the full enriched row as properties.
#[must_use]
pub fn to_geojson(rows: &[SocioeconomicWithDerived]) -> FeatureCollection {
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
fn properties(row: &SocioeconomicWithDerived) -> Option<JsonObject> {
    match serde_json::to_value(row) {
        Ok(serde_json::Value::Object(map)) => Some(map),
        _ => None,
    }
}
