pub mod error;
pub mod activation;
pub mod init;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod report;

// Convenience re-exports
pub use error::{Error, Result};
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use init::initializer::Initializer;
pub use layers::{dense::Layer, unit::Unit};
pub use network::network::{Activations, Deltas, Network};
pub use network::spec::NetworkSpec;
pub use loss::sse::SseLoss;
pub use optim::sgd::Sgd;
pub use train::{
    dataset::{Dataset, TrainingExample},
    epoch_stats::EpochStats,
    loop_fn::{train_loop, train_loop_with},
    train_config::TrainConfig,
    trainer::{evaluate, train_epoch},
};
