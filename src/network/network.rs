use rand::Rng;
use tracing::debug;

use crate::activation::sigmoid::sigmoid_derivative;
use crate::error::{check_width, Error, Result};
use crate::init::initializer::Initializer;
use crate::layers::dense::Layer;
use crate::loss::sse::SseLoss;
use crate::optim::sgd::Sgd;

/// Outputs recorded during one forward pass.
///
/// `layer(0)` is the external input; `layer(l + 1)` is what network layer `l`
/// produced. Immutable once built, so the backward pass and the update read
/// exactly the values the forward pass saw.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    layers: Vec<Vec<f64>>,
}

impl Activations {
    pub fn input(&self) -> &[f64] {
        &self.layers[0]
    }

    pub fn output(&self) -> &[f64] {
        self.layers.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn layer(&self, index: usize) -> &[f64] {
        &self.layers[index]
    }

    /// Number of recorded vectors, input included.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Per-unit error signals, one vector per network layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Deltas {
    layers: Vec<Vec<f64>>,
}

impl Deltas {
    pub fn layer(&self, index: usize) -> &[f64] {
        &self.layers[index]
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// A stack of sigmoid layers trained one example at a time.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    input_size: usize,
    optimizer: Sgd,
}

impl Network {
    /// Builds a network from a topology such as `[2, 2, 1]`.
    ///
    /// The first entry is the input width and gets no layer of its own. Units
    /// are initialized layer by layer, unit by unit, from `rng`.
    pub fn new<R: Rng + ?Sized>(
        topology: &[usize],
        learning_rate: f64,
        init: Initializer,
        rng: &mut R,
    ) -> Result<Network> {
        validate_topology(topology)?;
        let optimizer = Sgd::new(learning_rate)?;
        let layers = topology
            .windows(2)
            .map(|pair| Layer::new(pair[1], pair[0], init, rng))
            .collect::<Result<Vec<_>>>()?;

        debug!(?topology, learning_rate, ?init, "built network");
        Ok(Network { layers, input_size: topology[0], optimizer })
    }

    /// Wraps hand-assembled layers, checking that their widths chain.
    pub fn from_layers(input_size: usize, layers: Vec<Layer>, learning_rate: f64) -> Result<Network> {
        if layers.is_empty() {
            return Err(Error::Topology("a network needs at least one layer".into()));
        }
        if input_size == 0 {
            return Err(Error::Topology("input width must be at least 1".into()));
        }
        let optimizer = Sgd::new(learning_rate)?;

        let mut expected = input_size;
        for (i, layer) in layers.iter().enumerate() {
            if layer.size() == 0 {
                return Err(Error::Topology(format!("layer {i} has no units")));
            }
            if layer.input_size() != expected {
                return Err(Error::Topology(format!(
                    "layer {i} reads {} inputs but receives {expected}",
                    layer.input_size()
                )));
            }
            expected = layer.size();
        }

        Ok(Network { layers, input_size, optimizer })
    }

    /// Input width followed by each layer's width.
    pub fn topology(&self) -> Vec<usize> {
        std::iter::once(self.input_size)
            .chain(self.layers.iter().map(Layer::size))
            .collect()
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map(Layer::size).unwrap_or(0)
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Replaces the parameters of one unit without changing any width.
    pub fn set_unit_parameters(
        &mut self,
        layer: usize,
        unit: usize,
        weights: Vec<f64>,
        bias: f64,
    ) -> Result<()> {
        let depth = self.layers.len();
        self.layers
            .get_mut(layer)
            .ok_or_else(|| Error::Topology(format!("layer {layer} out of range for a network of {depth}")))?
            .set_unit_parameters(unit, weights, bias)
    }

    /// Runs every layer in order and returns the final layer's outputs.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        check_width("input", self.input_size, input.len())?;
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// Like `forward`, but keeps every intermediate vector.
    pub fn forward_pass(&mut self, input: &[f64]) -> Result<Activations> {
        check_width("input", self.input_size, input.len())?;
        let mut layers = Vec::with_capacity(self.layers.len() + 1);
        layers.push(input.to_vec());
        for layer in &mut self.layers {
            let out = layer.forward(&layers[layers.len() - 1])?;
            layers.push(out);
        }
        Ok(Activations { layers })
    }

    /// Computes every unit's delta from a forward snapshot and a target.
    ///
    /// Output layer: `(t - y)·y·(1-y)`. Hidden layers, last to first:
    /// `(Σ_j w_ji·δ_j)·y·(1-y)` over the fully computed next layer. Reads the
    /// current weights and never modifies them.
    pub fn backward(&self, activations: &Activations, target: &[f64]) -> Result<Deltas> {
        self.check_activations(activations)?;
        check_width("target", self.output_size(), target.len())?;

        let n = self.layers.len();
        let mut deltas: Vec<Vec<f64>> = vec![Vec::new(); n];

        let output = activations.output();
        deltas[n - 1] = SseLoss::error(output, target)
            .into_iter()
            .zip(output)
            .map(|(error, &y)| error * sigmoid_derivative(y))
            .collect();

        for l in (0..n - 1).rev() {
            let next = &self.layers[l + 1];
            let next_deltas = &deltas[l + 1];
            let layer_deltas: Vec<f64> = activations
                .layer(l + 1)
                .iter()
                .enumerate()
                .map(|(i, &y)| {
                    let error = next
                        .units()
                        .iter()
                        .zip(next_deltas)
                        .fold(0.0, |sum, (unit, &d)| sum + unit.weights()[i] * d);
                    error * sigmoid_derivative(y)
                })
                .collect();
            deltas[l] = layer_deltas;
        }

        Ok(Deltas { layers: deltas })
    }

    /// Applies the update for one example using the snapshot that produced `deltas`.
    pub fn apply(&mut self, activations: &Activations, deltas: &Deltas) -> Result<()> {
        self.check_activations(activations)?;
        check_width("delta layers", self.layers.len(), deltas.len())?;
        for (l, layer) in self.layers.iter().enumerate() {
            check_width("delta", layer.size(), deltas.layer(l).len())?;
        }

        let optimizer = self.optimizer;
        for (l, layer) in self.layers.iter_mut().enumerate() {
            optimizer.step(layer, activations.layer(l), deltas.layer(l))?;
        }
        Ok(())
    }

    /// One online gradient step on a single example.
    ///
    /// Returns the output the network produced before the update. Widths are
    /// checked up front; on error no parameter changes.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<Vec<f64>> {
        check_width("input", self.input_size, input.len())?;
        check_width("target", self.output_size(), target.len())?;

        let activations = self.forward_pass(input)?;
        let deltas = self.backward(&activations, target)?;
        self.apply(&activations, &deltas)?;
        Ok(activations.output().to_vec())
    }

    /// Forward pass with no update.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.forward(input)
    }

    fn check_activations(&self, activations: &Activations) -> Result<()> {
        check_width("activation layers", self.layers.len() + 1, activations.len())?;
        check_width("input", self.input_size, activations.input().len())?;
        for (l, layer) in self.layers.iter().enumerate() {
            check_width("activation", layer.size(), activations.layer(l + 1).len())?;
        }
        Ok(())
    }
}

/// A topology needs an input width and at least one layer, all non-zero.
pub fn validate_topology(topology: &[usize]) -> Result<()> {
    if topology.len() < 2 {
        return Err(Error::Topology(format!(
            "need an input width and at least one layer, got {topology:?}"
        )));
    }
    if let Some(pos) = topology.iter().position(|&w| w == 0) {
        return Err(Error::Topology(format!("width at position {pos} is zero in {topology:?}")));
    }
    Ok(())
}
