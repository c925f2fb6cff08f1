use std::time::Instant;

use tracing::{info, trace, warn};

use crate::error::Result;
use crate::network::network::Network;
use crate::train::dataset::Dataset;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs and returns one `EpochStats`
/// per completed epoch.
///
/// Examples are presented in dataset order every epoch; there is no
/// shuffling. Configuration and dataset widths are validated before the first
/// update.
pub fn train_loop(
    network: &mut Network,
    dataset: &Dataset,
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    train_loop_with(network, dataset, config, |_| {})
}

/// Same as [`train_loop`], but hands every epoch's stats to `on_epoch` as soon
/// as the epoch finishes, independent of the log level.
pub fn train_loop_with<F>(
    network: &mut Network,
    dataset: &Dataset,
    config: &TrainConfig,
    mut on_epoch: F,
) -> Result<Vec<EpochStats>>
where
    F: FnMut(&EpochStats),
{
    config.validate()?;
    dataset.check_against(network)?;

    if !dataset.targets_in_unit_range() {
        warn!("some targets fall outside [0, 1] and can never be reached by a sigmoid output");
    }

    info!(
        topology = ?network.topology(),
        examples = dataset.len(),
        epochs = config.epochs,
        learning_rate = network.learning_rate(),
        "training started"
    );

    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let sse = train_epoch(network, dataset)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        let stats = EpochStats { epoch, total_epochs: config.epochs, sse, elapsed_ms };
        trace!(epoch, sse, "epoch finished");
        if epoch % config.log_every == 0 || epoch == config.epochs {
            info!("{}", crate::report::format_epoch(&stats));
        }
        on_epoch(&stats);
        history.push(stats);
    }

    Ok(history)
}
