/// Sum of squared errors, the metric reported after every epoch.
pub struct SseLoss;

impl SseLoss {
    /// Scalar SSE: Σ (expected - predicted)²
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (y - p).powi(2))
            .sum()
    }

    /// Per-output error signal before the sigmoid factor: expected - predicted
    pub fn error(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| y - p)
            .collect()
    }
}
