use serde::{Deserialize, Serialize};

use crate::error::{check_width, Error, Result};
use crate::network::network::Network;

/// One `(input, target)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> TrainingExample {
        TrainingExample { input, target }
    }
}

/// A fixed, ordered, non-empty set of examples with uniform widths.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    examples: Vec<TrainingExample>,
}

impl Dataset {
    /// Fails if `examples` is empty or any example's widths differ from the first one's.
    pub fn new(examples: Vec<TrainingExample>) -> Result<Dataset> {
        let first = examples
            .first()
            .ok_or_else(|| Error::InvalidConfig("dataset has no examples".into()))?;
        let (input_size, target_size) = (first.input.len(), first.target.len());
        if input_size == 0 || target_size == 0 {
            return Err(Error::InvalidConfig("examples need non-empty input and target".into()));
        }
        for example in &examples {
            check_width("input", input_size, example.input.len())?;
            check_width("target", target_size, example.target.len())?;
        }
        Ok(Dataset { examples })
    }

    /// Builds a dataset from parallel `(input, target)` rows.
    pub fn from_pairs(pairs: &[(&[f64], &[f64])]) -> Result<Dataset> {
        Dataset::new(
            pairs
                .iter()
                .map(|(input, target)| TrainingExample::new(input.to_vec(), target.to_vec()))
                .collect(),
        )
    }

    /// The four XOR cases, two inputs to one output.
    pub fn xor() -> Dataset {
        let rows: [([f64; 2], f64); 4] = [
            ([0.0, 0.0], 0.0),
            ([0.0, 1.0], 1.0),
            ([1.0, 0.0], 1.0),
            ([1.0, 1.0], 0.0),
        ];
        Dataset {
            examples: rows
                .iter()
                .map(|(input, target)| TrainingExample::new(input.to_vec(), vec![*target]))
                .collect(),
        }
    }

    /// One-bit full adder: three input bits to `[sum, carry]`.
    pub fn full_adder() -> Dataset {
        let mut examples = Vec::with_capacity(8);
        for c in 0..2 {
            for (a, b) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
                let total = a + b + c;
                examples.push(TrainingExample::new(
                    vec![a as f64, b as f64, c as f64],
                    vec![(total % 2) as f64, (total / 2) as f64],
                ));
            }
        }
        Dataset { examples }
    }

    /// Looks up a built-in dataset by name (`xor`, `full-adder`).
    pub fn builtin(name: &str) -> Result<Dataset> {
        match name {
            "xor" => Ok(Dataset::xor()),
            "full-adder" | "full_adder" => Ok(Dataset::full_adder()),
            other => Err(Error::InvalidConfig(format!("unknown dataset '{other}'"))),
        }
    }

    /// Reads a JSON array of `{"input": [...], "target": [...]}` objects.
    pub fn load_json(path: &str) -> Result<Dataset> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let examples: Vec<TrainingExample> = serde_json::from_reader(reader)?;
        Dataset::new(examples)
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainingExample> {
        self.examples.iter()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn input_size(&self) -> usize {
        self.examples[0].input.len()
    }

    pub fn target_size(&self) -> usize {
        self.examples[0].target.len()
    }

    /// Checks the widths against `network` once, before any training.
    pub fn check_against(&self, network: &Network) -> Result<()> {
        check_width("input", network.input_size(), self.input_size())?;
        check_width("target", network.output_size(), self.target_size())
    }

    /// True when every target lies in `[0, 1]`, the range a sigmoid can reach.
    pub fn targets_in_unit_range(&self) -> bool {
        self.examples
            .iter()
            .flat_map(|e| e.target.iter())
            .all(|t| (0.0..=1.0).contains(t))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TrainingExample;
    type IntoIter = std::slice::Iter<'a, TrainingExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
