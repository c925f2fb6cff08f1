//! Trains a sigmoid network on a small dataset and prints its predictions.
//!
//! Run with:
//!   cargo run --release -- --dataset xor
//!   cargo run --release -- --dataset full-adder --epochs 20000
//!   cargo run --release -- --config run.json --data samples.json
//!
//! The per-epoch error goes to stdout (thin it out with `--report-every`);
//! tracing output goes to stderr and is filtered by `--log-level`.

use clap::Parser;
use tracing::{info, Level};

use sigmanet::{report, train_loop_with, Dataset, NetworkSpec, TrainConfig};

#[derive(Parser, Debug)]
#[command(name = "sigmanet")]
#[command(about = "Train a feed-forward sigmoid network with online backpropagation", long_about = None)]
struct Cli {
    /// Network spec as JSON (topology, learning rate, seed, init)
    #[arg(short, long)]
    config: Option<String>,

    /// Built-in dataset: xor or full-adder
    #[arg(short, long, default_value = "xor")]
    dataset: String,

    /// JSON file with [{"input": [...], "target": [...]}, ...]; overrides --dataset
    #[arg(long)]
    data: Option<String>,

    /// Comma-separated widths, input first (e.g. 2,2,1)
    #[arg(short, long, value_delimiter = ',')]
    topology: Option<Vec<usize>>,

    #[arg(short, long, default_value_t = 50_000)]
    epochs: usize,

    #[arg(long)]
    learning_rate: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Print the summed squared error to stdout every N epochs (0 prints only the last)
    #[arg(long, default_value_t = 1)]
    report_every: usize,

    /// Also log the summed squared error every N epochs (stderr, at info level)
    #[arg(long, default_value_t = 1000)]
    log_every: usize,

    #[arg(long, default_value = "info")]
    log_level: Level,

    /// Print the effective network spec as JSON and exit
    #[arg(long)]
    print_spec: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> sigmanet::Result<()> {
    let dataset = match &cli.data {
        Some(path) => Dataset::load_json(path)?,
        None => Dataset::builtin(&cli.dataset)?,
    };

    let mut spec = match &cli.config {
        Some(path) => NetworkSpec::load_json(path)?,
        None => default_spec(&cli, &dataset),
    };
    if let Some(topology) = cli.topology.clone() {
        spec.topology = topology;
    }
    if let Some(lr) = cli.learning_rate {
        spec.learning_rate = lr;
    }
    if let Some(seed) = cli.seed {
        spec.seed = seed;
    }
    spec.validate()?;

    if cli.print_spec {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    let config = TrainConfig::new(cli.epochs).with_log_every(cli.log_every);
    let mut network = spec.build()?;
    info!(name = %spec.name, seed = spec.seed, "network ready");

    let report_every = cli.report_every;
    train_loop_with(&mut network, &dataset, &config, |stats| {
        let due = report_every > 0 && stats.epoch % report_every == 0;
        if due || stats.epoch == stats.total_epochs {
            println!("{}", report::format_epoch(stats));
        }
    })?;

    println!("\nPredictions:");
    print!("{}", report::format_predictions(&mut network, &dataset)?);
    Ok(())
}

/// Topology for a run without a config file: the shapes the classic exercises
/// used for the built-in datasets, otherwise one hidden layer as wide as the input.
fn default_spec(cli: &Cli, dataset: &Dataset) -> NetworkSpec {
    let (name, topology) = match (cli.data.is_some(), cli.dataset.as_str()) {
        (false, "full-adder") | (false, "full_adder") => ("full-adder", vec![3, 3, 2, 2]),
        (false, "xor") => ("xor", vec![2, 2, 1]),
        _ => (
            "custom",
            vec![dataset.input_size(), dataset.input_size(), dataset.target_size()],
        ),
    };
    NetworkSpec { name: name.into(), topology, ..NetworkSpec::default() }
}
