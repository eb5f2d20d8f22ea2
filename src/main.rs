// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Facet computation console.

use std::io;
use std::process;

use clap::Parser;

use planar_facets::console::{parse_edge, Console};
use planar_facets::facet;
use planar_facets::graph::Graph;

/// Compute the facets of a connected planar graph.
///
/// With `--vertices`, the graph is taken from the command line and the
/// facet listing is printed once. Without arguments, an interactive
/// console reads graphs from stdin until quit.
#[derive(Parser)]
#[command(name = "facets", version)]
struct Cli {
    /// Number of vertices; vertices are numbered 0..N-1 (one-shot mode).
    #[arg(long)]
    vertices: Option<usize>,

    /// An edge `U,V`; repeat once per edge (one-shot mode).
    #[arg(long = "edge", value_parser = parse_edge)]
    edges: Vec<(usize, usize)>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.vertices {
        Some(vertices) => one_shot(vertices, &cli.edges),
        None => interactive(),
    };
    if let Err(error) = result {
        eprintln!("error: {error}");
        process::exit(1);
    }
}

fn one_shot(vertices: usize, edges: &[(usize, usize)]) -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::from_edges(vertices, edges)?;
    for (index, facet) in facet::facets(&graph)?.iter().enumerate() {
        println!("facet {index}: {facet}");
    }
    Ok(())
}

fn interactive() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
