use crate::{
    error::Result,
    loss::sse::SseLoss,
    network::network::Network,
    train::dataset::Dataset,
};

/// One epoch of online training: every example once, in dataset order.
///
/// Returns `Σ (target - predict(input))²` over all examples, where each
/// prediction is taken right after that example's own update. Widths are
/// checked before the first update, so a mismatched dataset changes nothing.
pub fn train_epoch(network: &mut Network, dataset: &Dataset) -> Result<f64> {
    dataset.check_against(network)?;

    let mut total_error = 0.0;
    for example in dataset {
        network.train(&example.input, &example.target)?;
        let output = network.predict(&example.input)?;
        total_error += SseLoss::loss(&output, &example.target);
    }

    Ok(total_error)
}

/// Summed squared error of the current parameters, without training.
pub fn evaluate(network: &mut Network, dataset: &Dataset) -> Result<f64> {
    dataset.check_against(network)?;

    let mut total_error = 0.0;
    for example in dataset {
        let output = network.predict(&example.input)?;
        total_error += SseLoss::loss(&output, &example.target);
    }

    Ok(total_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::spec::NetworkSpec;

    #[test]
    fn mismatched_dataset_is_rejected_before_any_update() {
        let mut net = NetworkSpec::default().build().unwrap();
        let before = net.layers().to_vec();
        assert!(train_epoch(&mut net, &Dataset::full_adder()).is_err());
        assert_eq!(net.layers(), &before[..]);
    }

    #[test]
    fn one_epoch_moves_the_error() {
        let mut net = NetworkSpec::default().build().unwrap();
        let xor = Dataset::xor();
        let before = evaluate(&mut net, &xor).unwrap();
        let during = train_epoch(&mut net, &xor).unwrap();
        assert!(during.is_finite() && during > 0.0);
        assert_ne!(evaluate(&mut net, &xor).unwrap(), before);
    }
}
