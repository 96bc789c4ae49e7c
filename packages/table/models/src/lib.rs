#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Column-configuration metadata for generic table rendering.
//!
//! Each dataset crate exports a static list of [`ColumnSpec`]s describing
//! its enriched rows. Table views and the CSV exporter consume this
//! metadata to render arbitrary datasets generically — the engine never
//! formats cells itself.

use serde::Serialize;

/// How a table/export consumer should format a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// Free text, rendered as-is.
    Text,
    /// Whole number.
    Integer,
    /// Fixed-point decimal.
    Decimal {
        /// Number of digits after the decimal point.
        places: u8,
    },
    /// Latitude/longitude in decimal degrees (6 places).
    Coordinate,
    /// Monetary amount in PEN.
    Currency,
    /// One of the categorical labels (risk category, dominance).
    Category,
}

/// Metadata for one column of a dataset's tabular view.
///
/// `key` is the camelCase field name as it appears in the serialized row,
/// so a consumer can index into the row JSON directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Serialized field name (e.g. `"hazardScore"`).
    pub key: &'static str,
    /// Human-readable column header.
    pub header: &'static str,
    /// Formatting hint for the consumer.
    pub format: ValueFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORE_COLUMN: ColumnSpec = ColumnSpec {
        key: "hazardScore",
        header: "Índice de peligro",
        format: ValueFormat::Decimal { places: 1 },
    };

    #[test]
    fn specs_are_const_constructible() {
        assert_eq!(SCORE_COLUMN.key, "hazardScore");
        assert_eq!(SCORE_COLUMN.format, ValueFormat::Decimal { places: 1 });
    }

    #[test]
    fn decimal_places_participate_in_equality() {
        assert_ne!(
            ValueFormat::Decimal { places: 1 },
            ValueFormat::Decimal { places: 4 }
        );
    }
}
