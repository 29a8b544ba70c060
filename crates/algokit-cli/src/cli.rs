//! Command-line argument definitions.

use crate::config::{MstAlgorithm, OutputFormat};
use clap::{Parser, Subcommand};

/// Algokit: run classical algorithms from the command line
#[derive(Parser, Debug)]
#[command(name = "algokit", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (defaults to the configured format)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// What to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prime numbers
    Primes {
        /// Prime action
        #[command(subcommand)]
        action: PrimesAction,
    },

    /// The n-th Fibonacci number (counting from fib(0) = 1)
    Fib {
        /// Index into the sequence
        n: usize,
    },

    /// Solve a knapsack problem
    Knapsack {
        /// Knapsack capacity
        #[arg(long)]
        capacity: usize,
        /// Item values, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        values: Vec<u64>,
        /// Item weights, comma separated (default: each item weighs its value)
        #[arg(long, value_delimiter = ',')]
        weights: Option<Vec<u64>>,
        /// Allow taking an item more than once
        #[arg(long)]
        unbounded: bool,
    },

    /// Longest common subsequence of two strings
    Lcs {
        /// First string
        a: String,
        /// Second string
        b: String,
        /// Find the longest common contiguous substring instead
        #[arg(long)]
        substring: bool,
    },

    /// Levenshtein distance between two strings
    EditDistance {
        /// First string
        a: String,
        /// Second string
        b: String,
    },

    /// Closest pair among integers on a line
    ClosestPair {
        /// The values
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Sort integers
    Sort {
        /// Sorting algorithm: insertion, merge, quick or heap
        #[arg(short, long, default_value = "merge")]
        algorithm: String,
        /// The values
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Graph algorithms over a JSON or TOML edge-list file
    Graph {
        /// Graph action
        #[command(subcommand)]
        action: GraphAction,
    },

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `primes` subcommands.
#[derive(Subcommand, Debug)]
pub enum PrimesAction {
    /// All primes up to N
    Sieve {
        /// Upper bound (inclusive)
        n: usize,
    },
    /// Prime factorization of N
    Factor {
        /// Number to factor (at least 2)
        n: u64,
    },
    /// Whether N is prime
    Check {
        /// Number to test
        n: u64,
    },
}

/// `graph` subcommands.
#[derive(Subcommand, Debug)]
pub enum GraphAction {
    /// Minimum spanning tree
    Mst {
        /// Graph file
        file: String,
        /// Algorithm (defaults to the configured one)
        #[arg(short, long, value_enum)]
        algorithm: Option<MstAlgorithm>,
        /// Start vertex for Prim (defaults to the first vertex)
        #[arg(long)]
        start: Option<String>,
    },
    /// Shortest path between two vertices
    Path {
        /// Graph file
        file: String,
        /// Source vertex
        from: String,
        /// Target vertex
        to: String,
    },
    /// Breadth-first visiting order
    Bfs {
        /// Graph file
        file: String,
        /// Start vertex
        start: String,
    },
    /// Depth-first visiting order
    Dfs {
        /// Graph file
        file: String,
        /// Start vertex
        start: String,
    },
    /// Connected components
    Components {
        /// Graph file
        file: String,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Get a value by dotted key
    Get {
        /// Dotted key, e.g. output.format
        key: String,
    },
    /// Set a value by dotted key
    Set {
        /// Dotted key, e.g. graph.mst_algorithm
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Where to write it (defaults to the platform config dir)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
