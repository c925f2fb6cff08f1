use crate::error::{check_width, Error, Result};
use crate::layers::dense::Layer;

/// Plain online gradient step: no momentum, no decay, no batching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    /// Fails unless `learning_rate` is finite and strictly positive.
    pub fn new(learning_rate: f64) -> Result<Sgd> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be a positive finite number, got {learning_rate}"
            )));
        }
        Ok(Sgd { learning_rate })
    }

    /// Applies one update to `layer`.
    ///
    /// `inputs` is the vector that fed the layer during the forward pass and
    /// `deltas` holds one error signal per unit.
    pub fn step(&self, layer: &mut Layer, inputs: &[f64], deltas: &[f64]) -> Result<()> {
        check_width("layer input", layer.input_size(), inputs.len())?;
        check_width("delta", layer.size(), deltas.len())?;
        for (unit, &delta) in layer.units_mut().iter_mut().zip(deltas) {
            unit.adjust(inputs, delta, self.learning_rate);
        }
        Ok(())
    }
}
