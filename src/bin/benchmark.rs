use std::env;
use std::time::{Duration, Instant};

use indexed_dijkstra::graph::generators::{random_graph, sample_graph};
use indexed_dijkstra::graph::{DirectedGraph, Graph, VertexId};
use indexed_dijkstra::{Dijkstra, ShortestPathAlgorithm};
use log::info;
use rayon::prelude::*;
use serde::Serialize;

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    /// Largest random graph to generate
    max_vertices: usize,
    /// Average number of edges per vertex
    edge_factor: f64,
    /// Seed for graph generation
    seed: u64,
    /// Number of sources run in parallel on each graph
    sources: usize,
    /// Largest edge weight
    max_weight: u32,
    /// Print a JSON report instead of a table
    json: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_vertices: 200_000,
            edge_factor: 2.0,
            seed: 42,
            sources: 4,
            max_weight: 100,
            json: false,
        }
    }
}

impl BenchmarkConfig {
    /// Reads `benchmark [max_vertices] [edge_factor] [seed] [--json]`, keeping
    /// the default for anything missing or unparsable
    fn from_args() -> Self {
        let mut config = Self::default();
        let mut positional = Vec::new();

        for arg in env::args().skip(1) {
            if arg == "--json" {
                config.json = true;
            } else {
                positional.push(arg);
            }
        }

        if let Some(value) = positional.first().and_then(|v| v.parse().ok()) {
            config.max_vertices = value;
        }
        if let Some(value) = positional.get(1).and_then(|v| v.parse().ok()) {
            config.edge_factor = value;
        }
        if let Some(value) = positional.get(2).and_then(|v| v.parse().ok()) {
            config.seed = value;
        }

        config
    }
}

#[derive(Debug, Serialize)]
struct RunReport {
    source: usize,
    reachable: usize,
    millis: f64,
}

#[derive(Debug, Serialize)]
struct GraphReport {
    vertices: usize,
    edges: usize,
    runs: Vec<RunReport>,
}

// Runs Dijkstra from several sources of the same graph at once
fn benchmark_graph(
    graph: &DirectedGraph<u32>,
    sources: &[VertexId],
) -> indexed_dijkstra::Result<GraphReport> {
    let dijkstra = Dijkstra::new();

    let runs = sources
        .par_iter()
        .map(|&source| -> indexed_dijkstra::Result<RunReport> {
            let start = Instant::now();
            let result = dijkstra.compute_shortest_paths(graph, source)?;
            let elapsed: Duration = start.elapsed();
            Ok(RunReport {
                source: source.index(),
                reachable: result.reachable_count(),
                millis: elapsed.as_secs_f64() * 1000.0,
            })
        })
        .collect::<indexed_dijkstra::Result<Vec<_>>>()?;

    Ok(GraphReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        runs,
    })
}

fn print_sample() -> indexed_dijkstra::Result<()> {
    let (graph, source) = sample_graph()?;
    let dijkstra = Dijkstra::new().with_heap_verification(true);
    let result = dijkstra.compute_shortest_paths(&graph, source)?;

    println!("Sample graph from {}:", graph.label(source));
    for (vertex, key, parent) in result.settled() {
        match parent {
            Some(parent) => println!(
                "  {} = {:<3} via {}",
                graph.label(vertex),
                key,
                graph.label(parent)
            ),
            None => println!("  {} = {}", graph.label(vertex), key),
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = BenchmarkConfig::from_args();
    info!("Benchmark configuration: {:?}", config);

    if !config.json {
        print_sample()?;
    }

    let mut sizes = Vec::new();
    let mut size = 1_000;
    while size <= config.max_vertices {
        sizes.push(size);
        size *= 10;
    }

    let mut reports = Vec::new();
    for &size in &sizes {
        info!("Generating random graph with {} vertices", size);
        let graph = random_graph(size, config.edge_factor, config.max_weight, config.seed)?;
        let step = (size / config.sources.max(1)).max(1);
        let sources: Vec<VertexId> = (0..size)
            .step_by(step)
            .take(config.sources)
            .map(VertexId)
            .collect();

        reports.push(benchmark_graph(&graph, &sources)?);
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("\n=====================================================");
    println!("Dijkstra with indexed min-heap, edge factor {}", config.edge_factor);
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<8} | {:<10} | {:<12}",
        "Vertices", "Edges", "Source", "Reachable", "Time (ms)"
    );
    println!("-----------------------------------------------------");
    for report in &reports {
        for run in &report.runs {
            println!(
                "{:<10} | {:<10} | {:<8} | {:<10} | {:<12.2}",
                report.vertices, report.edges, run.source, run.reachable, run.millis
            );
        }
    }

    Ok(())
}
