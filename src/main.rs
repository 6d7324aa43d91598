use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use grapetree_cluster::cluster::metrics::calculate_sweep_metrics;
use grapetree_cluster::config::{Config, DEFAULT_HYPOTHETICAL_PREFIX, DEFAULT_SENTINEL};
use grapetree_cluster::data::grapetree::load_graph_document;
use grapetree_cluster::{assemble_table, storage, ClusterSweep, GraphBuilder};

#[derive(Parser, Debug)]
#[clap(
    name = "grapetree-cluster",
    about = "Single-linkage cluster table for every distance in a GrapeTree graph"
)]
struct Cli {
    /// Path to input GrapeTree JSON file
    input: PathBuf,

    /// Path of the tab-separated cluster table to write
    output: PathBuf,

    /// Also write a JSON summary of per-threshold cluster metrics
    #[clap(long)]
    summary: Option<PathBuf>,

    /// Sample names with this prefix are left out of the table
    #[clap(long, default_value = DEFAULT_HYPOTHETICAL_PREFIX)]
    hypothetical_prefix: String,

    /// Reserved sample name left out of the table
    #[clap(long, default_value = DEFAULT_SENTINEL)]
    sentinel: String,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config {
        threads: args.threads,
        ..Config::new(args.hypothetical_prefix, args.sentinel)
    };

    let num_threads = config.worker_threads();
    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Input: {}", args.input.display());
    log::info!("Output: {}", args.output.display());

    // 1. Load data
    let document = load_graph_document(&args.input)?;

    // 2. Build graph
    let graph = GraphBuilder::from_document(&document)?;

    // 3. Sweep thresholds
    let assignments = ClusterSweep::new(&graph, &config).run();
    if assignments.is_empty() {
        log::warn!("Graph has no edges; the table will have no threshold columns");
    }

    // 4. Assemble and save
    let table = assemble_table(&assignments);
    storage::save_table(&table, &config, &args.output)?;

    if let Some(summary) = &args.summary {
        let metrics = calculate_sweep_metrics(&assignments);
        storage::save_summary(&graph, &table, &metrics, summary)?;
    }

    log::info!("Cluster table written to {}", args.output.display());

    Ok(())
}
