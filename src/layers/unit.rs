use rand::Rng;

use crate::activation::sigmoid::{sigmoid, sigmoid_derivative};
use crate::error::{check_width, Result};
use crate::init::initializer::Initializer;

/// A single sigmoid node: a weight per input plus a bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    weights: Vec<f64>,
    bias: f64,
    last_output: Option<f64>,
}

impl Unit {
    pub fn new(weights: Vec<f64>, bias: f64) -> Unit {
        Unit { weights, bias, last_output: None }
    }

    /// Draws a fresh unit with `input_size` weights from `rng`.
    pub fn init<R: Rng + ?Sized>(input_size: usize, init: Initializer, rng: &mut R) -> Unit {
        let (weights, bias) = init.unit_params(input_size, rng);
        Unit::new(weights, bias)
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Replaces the parameters; the weight count must stay the same.
    pub fn set_parameters(&mut self, weights: Vec<f64>, bias: f64) -> Result<()> {
        check_width("weights", self.weights.len(), weights.len())?;
        self.weights = weights;
        self.bias = bias;
        Ok(())
    }

    /// Weighted sum `bias + Σ w·x`, before the sigmoid.
    pub fn pre_activation(&self, inputs: &[f64]) -> Result<f64> {
        check_width("input", self.weights.len(), inputs.len())?;
        Ok(self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias, |sum, (w, x)| sum + w * x))
    }

    /// Computes `sigmoid(bias + Σ w·x)` and caches it as the last output.
    pub fn activate(&mut self, inputs: &[f64]) -> Result<f64> {
        let output = sigmoid(self.pre_activation(inputs)?);
        self.last_output = Some(output);
        Ok(output)
    }

    /// Output of the most recent `activate`, if any.
    pub fn last_output(&self) -> Option<f64> {
        self.last_output
    }

    /// `y·(1-y)` for the cached output `y`; `None` before the first `activate`.
    pub fn derivative(&self) -> Option<f64> {
        self.last_output.map(sigmoid_derivative)
    }

    /// `w += lr·δ·x` for every weight, then `b += lr·δ`.
    pub(crate) fn adjust(&mut self, inputs: &[f64], delta: f64, learning_rate: f64) {
        for (w, x) in self.weights.iter_mut().zip(inputs) {
            *w += learning_rate * delta * x;
        }
        self.bias += learning_rate * delta;
    }
}
