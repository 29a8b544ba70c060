//! Command handlers.
//!
//! Each handler runs one algorithm and returns the rendered output, text or
//! JSON, so it can be tested without capturing stdout.

use crate::cli::{Cli, Command, GraphAction, PrimesAction};
use crate::config::{CliConfig, MstAlgorithm, OutputFormat};
use crate::config_handlers::handle_config_command;
use crate::error::{Error, Result};
use algokit_graph::{EdgeList, PathResult, UndirectedGraph, WeightedEdge};
use algokit_sorting::SortAlgorithm;
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

/// Graphs loaded from edge-list files.
pub type FileGraph = UndirectedGraph<String, u64>;

// ============================================================================
// Dispatch
// ============================================================================

/// Runs the parsed command line and returns the text to print.
///
/// `--format` overrides the configured output format.
pub fn run(cli: &Cli, config: &CliConfig) -> Result<String> {
    let format = cli.format.unwrap_or(config.output.format);
    tracing::debug!(command = ?cli.command, ?format, "running command");

    match &cli.command {
        Command::Primes { action } => match action {
            PrimesAction::Sieve { n } => primes_sieve(*n, format),
            PrimesAction::Factor { n } => primes_factor(*n, format),
            PrimesAction::Check { n } => primes_check(*n, format),
        },
        Command::Fib { n } => fib(*n, format),
        Command::Knapsack {
            capacity,
            values,
            weights,
            unbounded,
        } => knapsack(*capacity, values, weights.as_deref(), *unbounded, format),
        Command::Lcs { a, b, substring } => lcs(a, b, *substring, format),
        Command::EditDistance { a, b } => edit_distance(a, b, format),
        Command::ClosestPair { values } => closest_pair(values, format),
        Command::Sort { algorithm, values } => sort(algorithm, values.clone(), format),
        Command::Graph { action } => graph(action, config, format),
        Command::Config { action } => handle_config_command(cli.config.as_deref(), action),
    }
}

fn render<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce(&T) -> String) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

fn join<T: Display>(items: impl IntoIterator<Item = T>, separator: &str) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

// ============================================================================
// Number theory
// ============================================================================

/// `primes sieve N`
pub fn primes_sieve(n: usize, format: OutputFormat) -> Result<String> {
    let primes = algokit_math::prime_sieve(n)?;
    render(format, &primes, |p| join(p, " "))
}

#[derive(Serialize)]
struct Factorization {
    n: u64,
    factors: Vec<u64>,
}

/// `primes factor N`
pub fn primes_factor(n: u64, format: OutputFormat) -> Result<String> {
    let factors = algokit_math::prime_factors(n)?.collect();
    render(format, &Factorization { n, factors }, |f| {
        format!("{}: {}", f.n, join(&f.factors, " "))
    })
}

#[derive(Serialize)]
struct Primality {
    n: u64,
    prime: bool,
}

/// `primes check N`
pub fn primes_check(n: u64, format: OutputFormat) -> Result<String> {
    let prime = algokit_math::is_prime(n);
    render(format, &Primality { n, prime }, |p| {
        if p.prime {
            format!("{} is prime", p.n)
        } else {
            format!("{} is not prime", p.n)
        }
    })
}

#[derive(Serialize)]
struct FibonacciTerm {
    n: usize,
    value: u128,
}

/// `fib N`
pub fn fib(n: usize, format: OutputFormat) -> Result<String> {
    let value = algokit_math::fibonacci(n)?;
    render(format, &FibonacciTerm { n, value }, |t| t.value.to_string())
}

// ============================================================================
// Dynamic programming
// ============================================================================

/// `knapsack --capacity C --values ... [--weights ...] [--unbounded]`
pub fn knapsack(
    capacity: usize,
    values: &[u64],
    weights: Option<&[u64]>,
    unbounded: bool,
    format: OutputFormat,
) -> Result<String> {
    if unbounded {
        let best = algokit_dp::knapsack_with_repetition(capacity, values, weights)?;
        render(format, &best, |b| {
            format!("value: {}\ncounts: {}", b.value, join(&b.counts, ", "))
        })
    } else {
        let best = algokit_dp::knapsack_without_repetition(capacity, values, weights)?;
        render(format, &best, |b| {
            format!("value: {}\nitems: {}", b.value, join(&b.items, ", "))
        })
    }
}

#[derive(Serialize)]
struct CommonPart {
    kind: &'static str,
    result: String,
    length: usize,
}

/// `lcs A B [--substring]`
pub fn lcs(a: &str, b: &str, substring: bool, format: OutputFormat) -> Result<String> {
    let (kind, result) = if substring {
        ("substring", algokit_dp::longest_common_substring(a, b))
    } else {
        ("subsequence", algokit_dp::longest_common_subsequence(a, b))
    };
    let length = result.chars().count();
    render(format, &CommonPart { kind, result, length }, |c| c.result.clone())
}

#[derive(Serialize)]
struct Distance<'a> {
    a: &'a str,
    b: &'a str,
    distance: usize,
}

/// `edit-distance A B`
pub fn edit_distance(a: &str, b: &str, format: OutputFormat) -> Result<String> {
    let distance = algokit_dp::edit_distance(a, b);
    render(format, &Distance { a, b, distance }, |d| d.distance.to_string())
}

// ============================================================================
// Geometry and sorting
// ============================================================================

#[derive(Serialize)]
struct ClosestValues {
    pair: (i128, i128),
    distance: i128,
}

/// `closest-pair VALUES...`
pub fn closest_pair(values: &[i64], format: OutputFormat) -> Result<String> {
    // Widened so the gap between extreme i64 values cannot overflow.
    let wide: Vec<i128> = values.iter().map(|&v| i128::from(v)).collect();
    let (low, high) = algokit_geometry::closest_pair_line(&wide)?;
    let result = ClosestValues {
        pair: (low, high),
        distance: high - low,
    };
    render(format, &result, |c| {
        format!("{} {} (distance {})", c.pair.0, c.pair.1, c.distance)
    })
}

#[derive(Serialize)]
struct Sorted {
    algorithm: String,
    values: Vec<i64>,
}

/// `sort [--algorithm A] VALUES...`
pub fn sort(algorithm: &str, mut values: Vec<i64>, format: OutputFormat) -> Result<String> {
    let algorithm: SortAlgorithm = algorithm.parse()?;
    algorithm.sort(&mut values);
    let sorted = Sorted {
        algorithm: algorithm.to_string(),
        values,
    };
    render(format, &sorted, |s| join(&s.values, " "))
}

// ============================================================================
// Graphs
// ============================================================================

/// Loads a graph from a `.json` or `.toml` edge-list file.
pub fn load_graph(path: &str) -> Result<FileGraph> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;

    let records: EdgeList<String, u64> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content)?,
        Some("toml") => toml::from_str(&content)?,
        _ => {
            return Err(Error::UnsupportedFormat {
                path: path.to_string(),
            });
        }
    };
    let graph = UndirectedGraph::from_records(records);
    tracing::info!(
        path,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

fn graph(action: &GraphAction, config: &CliConfig, format: OutputFormat) -> Result<String> {
    match action {
        GraphAction::Mst {
            file,
            algorithm,
            start,
        } => {
            let algorithm = algorithm.unwrap_or(config.graph.mst_algorithm);
            graph_mst(&load_graph(file)?, algorithm, start.as_deref(), format)
        }
        GraphAction::Path { file, from, to } => graph_path(&load_graph(file)?, from, to, format),
        GraphAction::Bfs { file, start } => graph_search(&load_graph(file)?, start, false, format),
        GraphAction::Dfs { file, start } => graph_search(&load_graph(file)?, start, true, format),
        GraphAction::Components { file } => graph_components(&load_graph(file)?, format),
    }
}

#[derive(Serialize)]
struct SpanningTree {
    algorithm: MstAlgorithm,
    total_weight: u64,
    edges: Vec<WeightedEdge<String, u64>>,
}

/// `graph mst FILE [--algorithm A] [--start V]`
pub fn graph_mst(
    graph: &FileGraph,
    algorithm: MstAlgorithm,
    start: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let tree = match (algorithm, start) {
        (MstAlgorithm::Prim, Some(start)) => algokit_graph::prim(graph, &start.to_string())?,
        (MstAlgorithm::Prim, None) => graph.minimum_spanning_tree()?,
        (MstAlgorithm::Kruskal, start) => {
            if start.is_some() {
                tracing::warn!("--start is ignored by kruskal");
            }
            graph.kruskal()?
        }
    };
    let result = SpanningTree {
        algorithm,
        total_weight: tree.total_weight()?,
        edges: tree.to_records().edges,
    };
    render(format, &result, |t| {
        let mut lines: Vec<String> = t
            .edges
            .iter()
            .map(|e| format!("{} -- {} ({})", e.from, e.to, e.weight))
            .collect();
        lines.push(format!("total weight: {}", t.total_weight));
        lines.join("\n")
    })
}

/// `graph path FILE FROM TO`
pub fn graph_path(graph: &FileGraph, from: &str, to: &str, format: OutputFormat) -> Result<String> {
    let result: PathResult<String, u64> = graph.shortest_path(&from.to_string(), &to.to_string())?;
    render(format, &result, |r| {
        if r.found {
            format!("{} (total weight {})", r.path.join(" -> "), r.total_weight)
        } else {
            format!("no path from {from} to {to}")
        }
    })
}

#[derive(Serialize)]
struct Visit {
    order: &'static str,
    start: String,
    vertices: Vec<String>,
}

/// `graph bfs|dfs FILE START`
pub fn graph_search(
    graph: &FileGraph,
    start: &str,
    depth_first: bool,
    format: OutputFormat,
) -> Result<String> {
    let start = start.to_string();
    let (order, vertices) = if depth_first {
        ("dfs", graph.dfs(&start)?.cloned().collect())
    } else {
        ("bfs", graph.bfs(&start)?.cloned().collect())
    };
    render(format, &Visit { order, start, vertices }, |v| v.vertices.join(" "))
}

/// `graph components FILE`
pub fn graph_components(graph: &FileGraph, format: OutputFormat) -> Result<String> {
    let components = algokit_graph::connected_components(graph);
    render(format, &components, |c| {
        c.iter()
            .map(|component| component.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

// ============================================================================
// Tests
// ============================================================================
