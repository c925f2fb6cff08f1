use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a unit's weights and bias are drawn at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initializer {
    /// Every weight and the bias drawn independently and uniformly from [-1, 1).
    #[default]
    Uniform,
    /// Every parameter set to zero. Consumes no randomness.
    Zeros,
}

impl Initializer {
    /// Produces `(weights, bias)` for a unit with `input_size` inputs.
    ///
    /// Weights are drawn in input order, then the bias, so a fixed seed and a
    /// fixed construction order always yield the same parameters.
    pub fn unit_params<R: Rng + ?Sized>(&self, input_size: usize, rng: &mut R) -> (Vec<f64>, f64) {
        match self {
            Initializer::Uniform => {
                let weights = (0..input_size).map(|_| uniform(rng)).collect();
                let bias = uniform(rng);
                (weights, bias)
            }
            Initializer::Zeros => (vec![0.0; input_size], 0.0),
        }
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}
