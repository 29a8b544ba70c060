//! Configuration files driving command defaults.

use algokit_cli::{Cli, CliConfig, run};
use clap::Parser;

fn exec_with_config(config_path: &str, args: &[&str]) -> algokit_cli::Result<String> {
    let argv = ["algokit", "--config", config_path].into_iter().chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).unwrap();
    let config = CliConfig::load(cli.config.as_deref())?;
    run(&cli, &config)
}

#[test]
fn test_init_set_get_cycle() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let p = path.to_str().unwrap();

    let out = exec_with_config(p, &["config", "init", "--file", p]).unwrap();
    assert!(out.contains("created"));
    assert_eq!(exec_with_config(p, &["config", "get", "output.format"]).unwrap(), "text");

    exec_with_config(p, &["config", "set", "output.format", "json"]).unwrap();
    assert_eq!(exec_with_config(p, &["config", "get", "output.format"]).unwrap(), "json");

    // The configured format now applies to every command.
    let out = exec_with_config(p, &["edit-distance", "flaw", "lawn"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["distance"], 2);
}

#[test]
fn test_configured_mst_algorithm() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[graph]\nmst_algorithm = \"kruskal\"\n").unwrap();
    let graph = dir.path().join("g.json");
    std::fs::write(
        &graph,
        r#"{"edges": [{"from": "a", "to": "b", "weight": 1}, {"from": "c", "to": "d", "weight": 2}]}"#,
    )
    .unwrap();

    // Disconnected, so only the configured kruskal succeeds.
    let out = exec_with_config(
        config.to_str().unwrap(),
        &["graph", "mst", graph.to_str().unwrap()],
    )
    .unwrap();
    assert!(out.ends_with("total weight: 3"));

    let err = exec_with_config(
        config.to_str().unwrap(),
        &["graph", "mst", graph.to_str().unwrap(), "--algorithm", "prim"],
    );
    assert!(err.is_err());
}
