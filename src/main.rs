use clap::{Parser, Subcommand};
use reasoning_graph::model::{self, PresentationOptions};
use reasoning_graph::{Result, diagnostics, graph, log};
use tracing::Level;

#[derive(Parser)]
#[command(name = "reasoning-graph-viz")]
#[command(about = "Reasoning graph viewer: log reconciliation and presentation records", long_about = None)]
struct Cli {
    /// Log debug details (accepted events, cycle breaks).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write node/edge presentation records as JSON for a renderer.
    Render {
        #[arg(long)]
        log: String,

        #[arg(short = 'o', long)]
        out: String,

        /// Base node size before the per-reference increment.
        #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(10..=50))]
        node_size: u32,
    },
    /// Print graph statistics.
    Stats {
        #[arg(long)]
        log: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Commands::Render {
            log,
            out,
            node_size,
        } => {
            // 1) Reconcile the log into the final graph.
            let Some(graph) = load_graph(&log)?.into_graph() else {
                return Ok(());
            };

            // 2) Levels.
            let levels = graph::compute_levels(&graph);

            // 3) Presentation records.
            let opts = PresentationOptions {
                base_size: node_size,
                ..PresentationOptions::default()
            };
            let presentation = model::build_presentation(&graph, &levels, &opts);

            // 4) Write JSON.
            let json = serde_json::to_string_pretty(&presentation)?;
            std::fs::write(&out, json)?;
            println!("Wrote {}", out);
        }
        Commands::Stats { log } => {
            let reconciled = load_graph(&log)?;
            let skipped = reconciled.skipped.len();
            let Some(snapshot) = reconciled.snapshot else {
                return Ok(());
            };

            let graph = &snapshot.graph;
            let levels = graph::compute_levels(graph);
            let edges = model::build_edges(graph).len();
            let stats = model::graph_stats(graph, &levels, edges);

            println!("source:            {} (line {})", snapshot.kind, snapshot.line);
            println!("nodes:             {}", stats.nodes);
            println!("references:        {}", stats.references);
            println!("root nodes:        {}", stats.roots);
            println!("refutations:       {}", stats.refutations);
            println!("edges:             {}", stats.edges);
            println!("dangling premises: {}", stats.dangling_premises);
            println!("max level:         {}", stats.max_level);
            println!("skipped records:   {}", skipped);
        }
    }

    Ok(())
}

fn load_graph(path: &str) -> Result<log::Reconciliation> {
    let reconciled = log::parse_log_file(path)?;
    if reconciled.snapshot.is_none() {
        diagnostics::warn(format!(
            "Could not find graph data in {}. Looking for SystemFinishEvent or GraphMergeEvent with graph data.",
            path
        ));
    }
    Ok(reconciled)
}
