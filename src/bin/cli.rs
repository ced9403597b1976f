// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Trackriser CLI

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use trackriser::{
    assemble, io, render, AssemblyOptions, Connector, RenderConfig, RiserHeight, RiserParams,
    SegmentLength, TrackStandard, Trackmaster, WoodTrack,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Standard {
    Wood,
    Trackmaster,
}

#[derive(Parser)]
#[command(name = "trackriser")]
#[command(about = "Parametric riser generator for wooden toy train track", long_about = None)]
struct Cli {
    /// Connector at the left (y = 0) end
    #[arg(long, value_enum, default_value = "female")]
    left: Connector,

    /// Connector at the right end
    #[arg(long, value_enum, default_value = "male")]
    right: Connector,

    /// Track segment length in mm
    #[arg(long, value_enum, default_value = "auto")]
    length: SegmentLength,

    /// Riser column height in mm
    #[arg(long, value_enum, default_value = "auto")]
    height: RiserHeight,

    /// Track connector standard
    #[arg(long, value_enum, default_value = "wood")]
    standard: Standard,

    /// Add print-support wedges under the connectors
    #[arg(long)]
    supports: bool,

    /// Circle facet count
    #[arg(long, default_value_t = 48)]
    segments: u32,

    /// Output STL file
    #[arg(short, long, value_name = "FILE", default_value = "riser.stl")]
    output: String,

    /// Also dump the composed CSG tree as JSON
    #[arg(long, value_name = "FILE")]
    dump_tree: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let params = RiserParams::from_options(cli.length, cli.height, cli.left, cli.right);
    let options = AssemblyOptions {
        supports: cli.supports,
    };
    let cfg = RenderConfig {
        segments: cli.segments,
        ..RenderConfig::default()
    };

    let standard: &dyn TrackStandard = match cli.standard {
        Standard::Wood => &WoodTrack,
        Standard::Trackmaster => &Trackmaster,
    };

    if cli.verbose {
        println!(
            "Composing riser: length {} mm, height {} mm, {:?}/{:?}",
            params.length, params.height, params.left, params.right
        );
    }

    if let Some(ref tree_path) = cli.dump_tree {
        let tree = assemble(standard, &params, &options, &cfg);
        io::export_tree_json(&tree, tree_path)?;
        if cli.verbose {
            println!("Tree: {tree_path}");
        }
    }

    let start = std::time::Instant::now();
    let mesh = render(standard, &params, &options, &cfg)?;
    let render_time = start.elapsed();

    if cli.verbose {
        println!("Rendered in {render_time:.2?}");
        println!("Vertices: {}", mesh.vertex_count());
        println!("Triangles: {}", mesh.triangle_count());
    }

    io::export_stl(&mesh, &cli.output)?;

    println!("{} {}", "Exported".green(), cli.output);
    Ok(())
}
