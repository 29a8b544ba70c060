//! Whole command lines through `Cli` parsing and `run`.

use algokit_cli::{Cli, CliConfig, run};
use clap::Parser;

fn exec(args: &[&str]) -> algokit_cli::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("algokit").chain(args.iter().copied())).unwrap();
    run(&cli, &CliConfig::default())
}

const ROADS: &str = r#"
vertices = ["Svalbard"]

[[edges]]
from = "Oslo"
to = "Hamar"
weight = 125

[[edges]]
from = "Hamar"
to = "Lillehammer"
weight = 62

[[edges]]
from = "Oslo"
to = "Lillehammer"
weight = 200

[[edges]]
from = "Lillehammer"
to = "Trondheim"
weight = 340
"#;

#[test]
fn test_number_commands() {
    assert_eq!(exec(&["primes", "sieve", "10"]).unwrap(), "2 3 5 7");
    assert_eq!(exec(&["primes", "factor", "360"]).unwrap(), "360: 2 2 2 3 3 5");
    assert_eq!(exec(&["fib", "0"]).unwrap(), "1");
}

#[test]
fn test_json_flag_overrides_config() {
    let out = exec(&["--format", "json", "primes", "check", "97"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["prime"], true);
}

#[test]
fn test_knapsack_without_weights() {
    let out = exec(&["knapsack", "--capacity", "7", "--values", "3,4,5"]).unwrap();
    assert_eq!(out, "value: 7\nitems: 0, 1");
}

#[test]
fn test_sort_with_negative_values() {
    let out = exec(&["sort", "--algorithm", "heap", "5", "-3", "0", "-10"]).unwrap();
    assert_eq!(out, "-10 -3 0 5");
}

#[test]
fn test_graph_commands_on_toml_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("roads.toml");
    std::fs::write(&path, ROADS).unwrap();
    let file = path.to_str().unwrap();

    assert_eq!(
        exec(&["graph", "path", file, "Oslo", "Trondheim"]).unwrap(),
        "Oslo -> Hamar -> Lillehammer -> Trondheim (total weight 527)"
    );
    assert_eq!(
        exec(&["graph", "components", file]).unwrap(),
        "Oslo Hamar Lillehammer Trondheim\nSvalbard"
    );
    assert_eq!(
        exec(&["graph", "bfs", file, "Oslo"]).unwrap(),
        "Oslo Hamar Lillehammer Trondheim"
    );

    let forest = exec(&["graph", "mst", file, "--algorithm", "kruskal"]).unwrap();
    assert!(forest.ends_with("total weight: 527"));

    // Prim needs every vertex reachable, and Svalbard is not.
    assert!(exec(&["graph", "mst", file]).is_err());
}
