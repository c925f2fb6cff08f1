use std::f64::consts::E;

/// Logistic function `1 / (1 + e^-x)`.
///
/// Saturates naturally towards 0 and 1 for large `|x|`; no clamping is applied.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed through its own output `y = sigmoid(x)`.
pub fn sigmoid_derivative(output: f64) -> f64 {
    output * (1.0 - output)
}
