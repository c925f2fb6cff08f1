use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::init::initializer::Initializer;
use crate::network::network::{validate_topology, Network};

/// Everything needed to build a network reproducibly.
///
/// Describes the architecture and the hyperparameters of a run, never trained
/// weights: building the same spec twice yields identical networks because
/// the random source is seeded from `seed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name, used in log output.
    pub name: String,
    /// Input width followed by each layer's width, e.g. `[2, 2, 1]`.
    pub topology: Vec<usize>,
    pub learning_rate: f64,
    pub seed: u64,
    #[serde(default)]
    pub init: Initializer,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            name: "xor".into(),
            topology: vec![2, 2, 1],
            learning_rate: 0.1,
            seed: 42,
            init: Initializer::Uniform,
        }
    }
}

impl NetworkSpec {
    pub fn validate(&self) -> Result<()> {
        validate_topology(&self.topology)?;
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Validates the spec, seeds a fresh `StdRng` and builds the network.
    pub fn build(&self) -> Result<Network> {
        self.validate()?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        Network::new(&self.topology, self.learning_rate, self.init, &mut rng)
    }

    pub fn input_size(&self) -> usize {
        self.topology.first().copied().unwrap_or(0)
    }

    pub fn output_size(&self) -> usize {
        self.topology.last().copied().unwrap_or(0)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_xor_setup() {
        let spec = NetworkSpec::default();
        assert_eq!(spec.topology, vec![2, 2, 1]);
        assert_eq!(spec.learning_rate, 0.1);
        assert_eq!(spec.input_size(), 2);
        assert_eq!(spec.output_size(), 1);
    }

    #[test]
    fn build_is_reproducible() {
        let spec = NetworkSpec { topology: vec![3, 4, 2], ..NetworkSpec::default() };
        let a = spec.build().unwrap();
        let b = spec.build().unwrap();
        assert_eq!(a.layers(), b.layers());
        assert_eq!(a.learning_rate(), 0.1);
    }

    #[test]
    fn different_seeds_give_different_parameters() {
        let a = NetworkSpec::default().build().unwrap();
        let b = NetworkSpec { seed: 43, ..NetworkSpec::default() }.build().unwrap();
        assert_ne!(a.layers(), b.layers());
    }

    #[test]
    fn validate_catches_bad_hyperparameters() {
        let bad_lr = NetworkSpec { learning_rate: 0.0, ..NetworkSpec::default() };
        assert!(matches!(bad_lr.validate(), Err(Error::InvalidConfig(_))));

        let bad_topology = NetworkSpec { topology: vec![2], ..NetworkSpec::default() };
        assert!(matches!(bad_topology.build(), Err(Error::Topology(_))));
    }

    #[test]
    fn init_defaults_to_uniform_when_missing() {
        let json = r#"{"name":"n","topology":[2,1],"learning_rate":0.5,"seed":1}"#;
        let spec: NetworkSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.init, Initializer::Uniform);

        let zeros = r#"{"name":"n","topology":[2,1],"learning_rate":0.5,"seed":1,"init":"zeros"}"#;
        let spec: NetworkSpec = serde_json::from_str(zeros).unwrap();
        assert_eq!(spec.init, Initializer::Zeros);
    }
}
