pub mod dataset;
pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;

pub use dataset::{Dataset, TrainingExample};
pub use trainer::{evaluate, train_epoch};
pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use loop_fn::{train_loop, train_loop_with};
