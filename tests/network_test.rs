//! Forward, backward and update behaviour of whole networks.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sigmanet::{sigmoid, Error, Initializer, Layer, Network, NetworkSpec, Unit};

fn zero_network(topology: &[usize]) -> Network {
    let mut rng = StdRng::seed_from_u64(0);
    Network::new(topology, 0.1, Initializer::Zeros, &mut rng).unwrap()
}

fn snapshot(net: &Network) -> Vec<(Vec<f64>, f64)> {
    net.layers()
        .iter()
        .flat_map(|layer| layer.units().iter().map(|u| (u.weights().to_vec(), u.bias())))
        .collect()
}

#[test]
fn zero_parameters_give_one_half_everywhere() {
    let mut net = zero_network(&[3, 4, 2, 5]);
    for input in [[0.0, 0.0, 0.0], [1.0, -2.0, 3.5], [100.0, 7.0, -0.25]] {
        let out = net.forward(&input).unwrap();
        assert_eq!(out, vec![0.5; 5]);
        for layer in net.layers() {
            assert!(layer.units().iter().all(|u| u.last_output() == Some(0.5)));
        }
    }
}

#[test]
fn unit_derivative_matches_output_identity() {
    let mut net = NetworkSpec::default().build().unwrap();
    net.forward(&[0.8, -0.3]).unwrap();
    for layer in net.layers() {
        for unit in layer.units() {
            let y = unit.last_output().unwrap();
            assert!(y != 0.5);
            assert_eq!(unit.derivative(), Some(y * (1.0 - y)));
        }
    }
}

#[test]
fn single_layer_step_matches_closed_form() {
    let (w0, w1, b) = (0.4, -0.6, 0.1);
    let (lr, target) = (0.5, 1.0);
    let input = [1.0, 0.5];

    let layer = Layer::from_units(vec![Unit::new(vec![w0, w1], b)]).unwrap();
    let mut net = Network::from_layers(2, vec![layer], lr).unwrap();

    let output = sigmoid(b + w0 * input[0] + w1 * input[1]);
    let grad = (target - output) * output * (1.0 - output);

    let produced = net.train(&input, &[target]).unwrap();
    assert_relative_eq!(produced[0], output, epsilon = 1e-15);

    let unit = &net.layers()[0].units()[0];
    assert_relative_eq!(unit.weights()[0], w0 + lr * grad * input[0], epsilon = 1e-12);
    assert_relative_eq!(unit.weights()[1], w1 + lr * grad * input[1], epsilon = 1e-12);
    assert_relative_eq!(unit.bias(), b + lr * grad, epsilon = 1e-12);
}

#[test]
fn no_hidden_layers_is_a_single_layer() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut net = Network::new(&[3, 2], 0.3, Initializer::Uniform, &mut rng).unwrap();
    let mut layer = net.layers()[0].clone();
    let input = [0.2, -0.4, 0.9];
    let target = [1.0, 0.0];

    assert_eq!(net.forward(&input).unwrap(), layer.forward(&input).unwrap());

    let acts = net.forward_pass(&input).unwrap();
    let deltas = net.backward(&acts, &target).unwrap();
    assert_eq!(deltas.len(), 1);

    let outputs = layer.forward(&input).unwrap();
    for (i, &y) in outputs.iter().enumerate() {
        let delta = (target[i] - y) * (y * (1.0 - y));
        assert_eq!(deltas.layer(0)[i], delta);
        let unit = &layer.units()[i];
        let weights: Vec<f64> = unit
            .weights()
            .iter()
            .zip(&input)
            .map(|(w, x)| w + 0.3 * delta * x)
            .collect();
        let bias = unit.bias() + 0.3 * delta;
        layer.set_unit_parameters(i, weights, bias).unwrap();
    }

    net.apply(&acts, &deltas).unwrap();
    for (a, b) in net.layers()[0].units().iter().zip(layer.units()) {
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.bias(), b.bias());
    }
}

#[test]
fn short_target_fails_without_mutation() {
    let mut net = NetworkSpec { topology: vec![2, 3, 2], ..NetworkSpec::default() }
        .build()
        .unwrap();
    let before = snapshot(&net);

    let err = net.train(&[1.0, 0.0], &[1.0]).unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch { what: "target", expected: 2, actual: 1 }
    ));
    assert_eq!(snapshot(&net), before);
}

#[test]
fn long_input_fails_without_mutation() {
    let mut net = NetworkSpec::default().build().unwrap();
    let before = snapshot(&net);
    assert!(net.train(&[1.0, 0.0, 1.0], &[1.0]).is_err());
    assert!(net.predict(&[1.0]).is_err());
    assert_eq!(snapshot(&net), before);
}

#[test]
fn predict_does_not_change_parameters() {
    let mut net = NetworkSpec::default().build().unwrap();
    let before = snapshot(&net);
    let first = net.predict(&[0.0, 1.0]).unwrap();
    let second = net.predict(&[0.0, 1.0]).unwrap();
    assert_eq!(first, second);
    assert_eq!(snapshot(&net), before);
}

#[test]
fn saturated_sums_are_tolerated() {
    let layer = Layer::from_units(vec![Unit::new(vec![1000.0], 0.0)]).unwrap();
    let mut net = Network::from_layers(1, vec![layer], 0.1).unwrap();
    let out = net.train(&[1.0], &[0.0]).unwrap();
    assert_eq!(out, vec![1.0]);
    assert!(snapshot(&net).iter().all(|(w, b)| w[0].is_finite() && b.is_finite()));
}

#[test]
fn hand_built_layers_need_positive_widths() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        Layer::new(0, 2, Initializer::Uniform, &mut rng),
        Err(Error::Topology(_))
    ));
    assert!(matches!(
        Layer::new(1, 0, Initializer::Uniform, &mut rng),
        Err(Error::Topology(_))
    ));

    let hidden = Layer::new(2, 2, Initializer::Uniform, &mut rng).unwrap();
    let output = Layer::new(1, 2, Initializer::Uniform, &mut rng).unwrap();
    let mut net = Network::from_layers(2, vec![hidden, output], 0.1).unwrap();
    assert_eq!(net.topology(), vec![2, 2, 1]);
    assert!(net.predict(&[1.0, 1.0]).is_ok());
}

#[test]
fn unit_swaps_are_refused_so_backward_stays_total() {
    let mut net = NetworkSpec::default().build().unwrap();
    let acts = net.forward_pass(&[1.0, 0.0]).unwrap();
    let before = snapshot(&net);

    let err = net.set_unit_parameters(1, 0, vec![1.0], 0.0).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { what: "weights", expected: 2, actual: 1 }));
    assert_eq!(snapshot(&net), before);

    assert!(net.backward(&acts, &[1.0]).is_ok());
}
