pub mod network;
pub mod spec;

pub use network::{Activations, Deltas, Network};
pub use spec::NetworkSpec;
