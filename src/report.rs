//! Human-readable run output. Not meant to be parsed.

use crate::error::Result;
use crate::network::network::Network;
use crate::train::dataset::Dataset;
use crate::train::epoch_stats::EpochStats;

/// `epoch 120/50000: sse = 0.981234`
pub fn format_epoch(stats: &EpochStats) -> String {
    format!("epoch {}/{}: sse = {:.6}", stats.epoch, stats.total_epochs, stats.sse)
}

/// One line per example: inputs, predicted outputs (4 decimals) and target.
pub fn format_predictions(network: &mut Network, dataset: &Dataset) -> Result<String> {
    dataset.check_against(network)?;
    let mut out = String::new();
    for example in dataset {
        let prediction = network.predict(&example.input)?;
        out.push_str(&format!(
            "{} -> [{}] (target {})\n",
            format_vec(&example.input),
            prediction.iter().map(|p| format!("{p:.4}")).collect::<Vec<_>>().join(", "),
            format_vec(&example.target),
        ));
    }
    Ok(out)
}

fn format_vec(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
