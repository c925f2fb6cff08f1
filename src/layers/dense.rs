use rand::Rng;

use crate::error::{check_width, Error, Result};
use crate::init::initializer::Initializer;
use crate::layers::unit::Unit;

/// A fully connected layer: `size` units that all read the same `input_size` inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    units: Vec<Unit>,
    input_size: usize,
}

impl Layer {
    /// Builds `size` units, drawing each unit's parameters from `rng` in order.
    ///
    /// Both widths must be at least 1.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        init: Initializer,
        rng: &mut R,
    ) -> Result<Layer> {
        if size == 0 {
            return Err(Error::Topology("a layer needs at least one unit".into()));
        }
        if input_size == 0 {
            return Err(Error::Topology("units need at least one input".into()));
        }
        let units = (0..size)
            .map(|_| Unit::init(input_size, init, rng))
            .collect();
        Ok(Layer { units, input_size })
    }

    /// Assembles a layer from existing units, which must all share one input width.
    pub fn from_units(units: Vec<Unit>) -> Result<Layer> {
        let input_size = match units.first() {
            Some(unit) => unit.input_size(),
            None => return Err(Error::Topology("a layer needs at least one unit".into())),
        };
        if input_size == 0 {
            return Err(Error::Topology("units need at least one input".into()));
        }
        if let Some(pos) = units.iter().position(|u| u.input_size() != input_size) {
            return Err(Error::Topology(format!(
                "unit {pos} reads {} inputs but unit 0 reads {input_size}",
                units[pos].input_size()
            )));
        }
        Ok(Layer { units, input_size })
    }

    /// Number of units, i.e. the width of this layer's output.
    pub fn size(&self) -> usize {
        self.units.len()
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub(crate) fn units_mut(&mut self) -> &mut [Unit] {
        &mut self.units
    }

    /// Replaces the parameters of unit `index`, keeping its input width.
    pub fn set_unit_parameters(&mut self, index: usize, weights: Vec<f64>, bias: f64) -> Result<()> {
        let size = self.units.len();
        let unit = self
            .units
            .get_mut(index)
            .ok_or_else(|| Error::Topology(format!("unit {index} out of range for a layer of {size}")))?;
        unit.set_parameters(weights, bias)
    }

    /// Activates every unit on `input`; outputs come back in unit order.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        check_width("input", self.input_size, input.len())?;
        self.units.iter_mut().map(|unit| unit.activate(input)).collect()
    }

    /// Cached outputs of the last `forward`, or `None` if any unit has not run yet.
    pub fn last_outputs(&self) -> Option<Vec<f64>> {
        self.units.iter().map(Unit::last_output).collect()
    }
}
