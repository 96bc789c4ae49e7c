#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for inspecting the hazard-map engine.
//!
//! Every subcommand prints one engine output as JSON (or GeoJSON) to
//! stdout, exactly as the dashboard frontend would consume it. There is
//! no mutation anywhere — the engine is read-only after startup.

use clap::{Parser, Subcommand, ValueEnum};

/// Which of the two survey datasets a subcommand operates on.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Dataset {
    /// Erosion/sediment survey sites.
    Geographic,
    /// Household survey records.
    Socioeconomic,
}

#[derive(Parser)]
#[command(name = "hazard_map_cli", about = "Hazard map engine inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the enriched geographic site table
    Sites,
    /// Print the enriched household table
    Households,
    /// Print zone-level aggregates for a dataset
    Zones {
        /// Dataset to aggregate
        #[arg(long, value_enum)]
        dataset: Dataset,
    },
    /// Print the unified point set produced by the coordinate join
    Unified,
    /// Print the flat map-marker projection
    Impact,
    /// Print the loss-risk thresholds in effect
    Thresholds,
    /// Print a dataset as a GeoJSON `FeatureCollection`
    Geojson {
        /// Dataset to project
        #[arg(long, value_enum)]
        dataset: Dataset,
    },
    /// Print the column metadata a table/CSV consumer would use
    Columns {
        /// Dataset whose columns to print
        #[arg(long, value_enum)]
        dataset: Dataset,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let json = match cli.command {
        Commands::Sites => serde_json::to_string_pretty(hazard_map_geographic::with_derived())?,
        Commands::Households => {
            serde_json::to_string_pretty(hazard_map_socioeconomic::with_derived())?
        }
        Commands::Zones { dataset } => match dataset {
            Dataset::Geographic => serde_json::to_string_pretty(
                &hazard_map_geographic::aggregate_by_zone(hazard_map_geographic::with_derived()),
            )?,
            Dataset::Socioeconomic => {
                serde_json::to_string_pretty(&hazard_map_socioeconomic::aggregate_by_zone(
                    hazard_map_socioeconomic::with_derived(),
                ))?
            }
        },
        Commands::Unified => {
            let points = hazard_map_unified::unified_points();
            log::debug!("Rendering {} unified points", points.len());
            serde_json::to_string_pretty(points)?
        }
        Commands::Impact => {
            serde_json::to_string_pretty(&hazard_map_unified::map_impact_points())?
        }
        Commands::Thresholds => {
            serde_json::to_string_pretty(hazard_map_unified::loss_thresholds())?
        }
        Commands::Geojson { dataset } => match dataset {
            Dataset::Geographic => serde_json::to_string_pretty(
                &hazard_map_geographic::to_geojson(hazard_map_geographic::with_derived()),
            )?,
            Dataset::Socioeconomic => serde_json::to_string_pretty(
                &hazard_map_socioeconomic::to_geojson(hazard_map_socioeconomic::with_derived()),
            )?,
        },
        Commands::Columns { dataset } => match dataset {
            Dataset::Geographic => {
                serde_json::to_string_pretty(hazard_map_geographic::table_columns())?
            }
            Dataset::Socioeconomic => {
                serde_json::to_string_pretty(hazard_map_socioeconomic::table_columns())?
            }
        },
    };

    println!("{json}");

    Ok(())
}
