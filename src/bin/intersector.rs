// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Intersector CLI
//!
//! - `find`: read records and print the numbers of intersecting objects
//! - `generate`: write a file of random well-formed triangles

use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use intersector::{
    FinderConfig, GeneratorParams, IntersectionFinder, ObjectStorage, RawRecord, SearchStrategy,
    TrianglesGenerator,
    io::{read_records, read_records_from_path},
};

#[derive(Parser, Debug)]
#[command(name = "intersector")]
#[command(about = "Find intersecting points, segments and triangles in 3D", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report every object that intersects another one
    Find(FindArgs),
    /// Write random non-degenerate triangles in the record format
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct FindArgs {
    /// Record file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Test every pair instead of partitioning by planes
    #[arg(long)]
    brute_force: bool,

    /// Print search statistics to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output record file
    #[arg(short, long)]
    output: PathBuf,

    /// Number of triangles (default: 2000)
    #[arg(short, long)]
    count: Option<usize>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

fn run_find(args: FindArgs) -> Result<()> {
    let records: Vec<RawRecord<f64>> = match &args.input {
        Some(path) => read_records_from_path(path)
            .with_context(|| format!("Failed to read records from {}", path.display()))?,
        None => read_records(io::stdin().lock()).context("Failed to read records from stdin")?,
    };

    let storage = ObjectStorage::classify(&records).context("Failed to classify records")?;
    let strategy = if args.brute_force {
        SearchStrategy::BruteForce
    } else {
        SearchStrategy::PlanePartition
    };
    let config = FinderConfig::default().with_strategy(strategy).with_stats(args.stats);
    let result = IntersectionFinder::with_config(storage, config).compute_intersections()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for number in result.intersecting_numbers() {
        writeln!(out, "{number}")?;
    }
    out.flush()?;

    if let Some(stats) = result.stats() {
        eprintln!(
            "Objects: {} ({} triangles, {} segments, {} points)",
            result.objects_num(),
            result.triangles_num(),
            result.segments_num(),
            result.points_num()
        );
        eprintln!("Triangle splits: {}", stats.triangle_splits);
        eprintln!("  non-positive only: {}", stats.non_positive_only);
        eprintln!("  non-negative only: {}", stats.non_negative_only);
        eprintln!("  both sides: {}", stats.both_sides);
        eprintln!("Linear scans: {}", stats.linear_scans);
        eprintln!("Pair tests: {}", stats.pair_tests);
    }
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let mut params = GeneratorParams::default();
    if let Some(count) = args.count {
        params = params.with_count(count);
    }
    if let Some(seed) = args.seed {
        params = params.with_seed(seed);
    }

    let mut generator = TrianglesGenerator::new(params)?;
    let written = generator
        .generate_to_path(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    eprintln!("Wrote {written} triangles to {}", args.output.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Find(args) => run_find(args),
        Commands::Generate(args) => run_generate(args),
    }
}
