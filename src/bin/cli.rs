// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geoframe Kernel CLI

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use geoframe::builder::{
    EnclosureBuilder, EnclosureConfig, RubikBlockBuilder, RubikBlockConfig, RubikBuilder,
    RubikConfig, WorldBuilder, WorldConfig,
};
use geoframe::geometry::Geometry;
use geoframe::kernel::Kernel;
use geoframe::units::Length;

#[derive(Parser)]
#[command(name = "geoframe")]
#[command(about = "Geoframe - detector geometry description kernel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit the registry summary as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the Rubik's cube world
    Rubik {
        /// Block edge length (quantity literal)
        #[arg(long, default_value = "1cm")]
        size: String,

        /// Clearance between blocks
        #[arg(long, default_value = "1mm")]
        gap: String,

        /// World cube edge length
        #[arg(long, default_value = "1m")]
        world_size: String,
    },

    /// Assemble a detector enclosure of stacked layers
    Enclosure {
        /// Enclosure half-extents
        #[arg(long, default_value = "1m")]
        dx: String,
        #[arg(long, default_value = "1m")]
        dy: String,
        #[arg(long, default_value = "1m")]
        dz: String,

        /// Layer edge lengths, comma separated
        #[arg(long, default_value = "2cm,4cm")]
        layers: String,

        /// How many times the layer stack repeats
        #[arg(long, default_value = "2")]
        repetitions: u32,

        /// Auxiliary key=value pair on the enclosure volume (repeatable)
        #[arg(long)]
        aux: Vec<String>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Rubik {
            size,
            gap,
            world_size,
        } => rubik_command(size, gap, world_size, cli.json, cli.verbose)?,
        Commands::Enclosure {
            dx,
            dy,
            dz,
            layers,
            repetitions,
            aux,
        } => enclosure_command(dx, dy, dz, layers, *repetitions, aux, cli.json, cli.verbose)?,
        Commands::Version => {
            println!("Geoframe Kernel v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn rubik_command(size: &str, gap: &str, world_size: &str, json: bool, verbose: bool) -> Result<()> {
    let size = Length::parse(size)?;
    let gap = Length::parse(gap)?;
    let world_size = Length::parse(world_size)?;

    let mut kernel = Kernel::new();
    for (name, location) in [
        ("corner_block", "corner"),
        ("edge_block", "edge"),
        ("center_block", "center"),
    ] {
        kernel.add_builder(
            Box::new(RubikBlockBuilder::with_config(
                name,
                RubikBlockConfig {
                    location: location.to_string(),
                    material: "Plastic".to_string(),
                    size,
                },
            )),
            &[],
        )?;
    }
    kernel.add_builder(
        Box::new(RubikBuilder::with_config(
            "rubik",
            RubikConfig {
                material: "Air".to_string(),
                gap,
            },
        )),
        &["corner_block", "edge_block", "center_block"],
    )?;
    kernel.add_builder(
        Box::new(WorldBuilder::with_config(
            "world",
            WorldConfig {
                material: "Air".to_string(),
                size: world_size,
            },
        )),
        &["rubik"],
    )?;

    let assembly = kernel.construct()?;
    report(assembly.geometry(), "world_volume", json, verbose)
}

#[allow(clippy::too_many_arguments)]
fn enclosure_command(
    dx: &str,
    dy: &str,
    dz: &str,
    layers: &str,
    repetitions: u32,
    aux: &[String],
    json: bool,
    verbose: bool,
) -> Result<()> {
    let dx = Length::parse(dx)?;
    let dy = Length::parse(dy)?;
    let dz = Length::parse(dz)?;

    let aux = aux
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("aux pair `{}` is not key=value", pair))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut kernel = Kernel::new();
    let mut layer_names = Vec::new();
    for (index, literal) in layers.split(',').enumerate() {
        let size = Length::parse(literal.trim())?;
        let name = format!("layer{}", index);
        kernel.add_builder(
            Box::new(RubikBlockBuilder::with_config(
                &name,
                RubikBlockConfig {
                    location: "layer".to_string(),
                    material: "Plastic".to_string(),
                    size,
                },
            )),
            &[],
        )?;
        layer_names.push(name);
    }

    let layer_refs: Vec<&str> = layer_names.iter().map(String::as_str).collect();
    kernel.add_builder(
        Box::new(EnclosureBuilder::with_config(
            "enclosure",
            EnclosureConfig {
                material: "Air".to_string(),
                dx,
                dy,
                dz,
                repetitions,
                aux,
            },
        )),
        &layer_refs,
    )?;

    let assembly = kernel.construct()?;
    report(assembly.geometry(), "enclosure_LV", json, verbose)
}

fn report(geom: &Geometry, top: &str, json: bool, verbose: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&geom.summary())?);
        return Ok(());
    }

    let summary = geom.summary();
    println!("{}", "═".repeat(60).bright_black());
    println!("{}", "Geometry Summary".bold());
    println!("{}", "═".repeat(60).bright_black());
    println!("  {} {}", "Top Volume:".bright_black(), top.cyan());
    println!(
        "  {} {}",
        "Shapes:".bright_black(),
        summary.shapes.to_string().cyan()
    );
    println!(
        "  {} {}",
        "Volumes:".bright_black(),
        summary.volumes.to_string().cyan()
    );
    println!(
        "  {} {}",
        "Placements:".bright_black(),
        summary.placements.to_string().cyan()
    );
    println!(
        "  {} {} / {}",
        "Positions / Rotations:".bright_black(),
        summary.positions.to_string().cyan(),
        summary.rotations.to_string().cyan()
    );
    println!(
        "  {} {} elements, {} mixtures",
        "Materials:".bright_black(),
        summary.elements.to_string().cyan(),
        summary.mixtures.to_string().cyan()
    );

    if verbose {
        println!("{}", "─".repeat(60).bright_black());
        for volume in geom.volumes() {
            println!(
                "  {} {} ({} placements)",
                "volume".green(),
                volume.name,
                volume.placements.len()
            );
            for placement in &volume.placements {
                let place = geom.placement(placement)?;
                match &place.position {
                    Some(position) => {
                        let pos = geom.position(position)?;
                        println!(
                            "    {} {} -> {} at ({}, {}, {})",
                            "place".blue(),
                            place.name,
                            place.volume,
                            pos.x,
                            pos.y,
                            pos.z
                        );
                    }
                    None => {
                        println!(
                            "    {} {} -> {} at origin",
                            "place".blue(),
                            place.name,
                            place.volume
                        );
                    }
                }
            }
        }
    }

    println!("{}", "═".repeat(60).bright_black());
    Ok(())
}
