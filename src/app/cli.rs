use clap::Parser;
use std::path::PathBuf;

use crate::graph::DEFAULT_SEED;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Searches undirected multigraphs for Eulerian circuits.", long_about = None)]
pub struct Cli {
    /// Files holding one or more graph descriptions (vertex count, then the adjacency matrix)
    pub graph_files: Vec<PathBuf>,

    /// Expected number of graphs with an Eulerian circuit, one value per file, in file order
    #[clap(short, long = "expected", value_name = "N")]
    pub expected: Vec<usize>,

    /// Also test randomly generated graphs with this many vertices
    #[clap(long, value_name = "VERTICES")]
    pub random: Option<usize>,

    /// Maximum number of parallel edges between two vertices in random graphs
    #[clap(long, default_value_t = 1, value_name = "N")]
    pub max_parallel: u32,

    /// Number of random graphs to generate
    #[clap(long, default_value_t = 1, value_name = "N")]
    pub count: usize,

    /// Seed for random graph generation
    #[clap(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Do not print the circuits that were found
    #[clap(long)]
    pub hide_circuit: bool,

    /// Also report whether each graph is connected
    #[clap(long)]
    pub connectivity: bool,

    /// Write the report to this file as well as to the console
    #[clap(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Verbose log file
    #[clap(long, default_value = "euler.log", value_name = "PATH")]
    pub log_file: PathBuf,

    /// Suppress verbose output, only printing the final summary.
    #[clap(short, long)]
    pub quiet: bool,
}
