//! Full adder on a 3 → 3 → 2 → 2 sigmoid network.
//!
//! Outputs are `[sum, carry]` of the three input bits.
//!
//! Run with:
//!   cargo run --example full_adder --release

use sigmanet::{report, train_loop, Dataset, NetworkSpec, TrainConfig};

fn main() -> sigmanet::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let spec = NetworkSpec {
        name: "full-adder".into(),
        topology: vec![3, 3, 2, 2],
        ..NetworkSpec::default()
    };
    let mut network = spec.build()?;
    let data = Dataset::full_adder();

    let config = TrainConfig::new(50_000).with_log_every(5_000);
    let history = train_loop(&mut network, &data, &config)?;
    let first = history.first().map(|s| s.sse).unwrap_or_default();
    let last = history.last().map(|s| s.sse).unwrap_or_default();
    println!("sse: {first:.6} -> {last:.6}");

    println!("\nPredictions:");
    print!("{}", report::format_predictions(&mut network, &data)?);
    Ok(())
}
