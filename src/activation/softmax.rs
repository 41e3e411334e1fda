use log::warn;

use crate::config::NumericConfig;
use crate::error::{NumericError, Result};
use crate::math::matrix::Matrix;

/// Softmax with the default config: `R[i] = exp(L[i] - max(L)) / sum_j exp(L[j] - max(L))`.
///
/// Mathematically identical to the textbook `exp(L[i]) / sum_j exp(L[j])`,
/// but large logits no longer overflow.
pub fn softmax(logits: &[f64]) -> Result<Vec<f64>> {
    softmax_with(logits, &NumericConfig::default())
}

/// Softmax under an explicit config.
///
/// With `config.stabilize == false` this is the unshifted formula: logits
/// above ~709 overflow `exp()`, and when every logit is below ~-745 all
/// exponentials underflow to 0 and the sum divides by zero. Either way the
/// affected entries come back NaN and a warning is logged.
///
/// # Errors
/// - `EmptyInput` for an empty slice (the sum of exponentials would be 0).
/// - `NonFinite` for any NaN or infinite logit.
pub fn softmax_with(logits: &[f64], config: &NumericConfig) -> Result<Vec<f64>> {
    if logits.is_empty() {
        return Err(NumericError::EmptyInput);
    }
    if let Some((index, &value)) = logits.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(NumericError::NonFinite { index, value });
    }

    let shift = if config.stabilize {
        logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    } else {
        0.0
    };

    let exps: Vec<f64> = logits.iter().map(|x| (x - shift).exp()).collect();
    let sum: f64 = exps.iter().sum();

    if !sum.is_finite() {
        warn!("softmax: sum of exponentials overflowed ({} logits, unstabilized)", logits.len());
    } else if sum == 0.0 {
        warn!("softmax: sum of exponentials underflowed to 0 ({} logits, unstabilized)", logits.len());
    }

    Ok(exps.into_iter().map(|e| e / sum).collect())
}

/// Softmax as a vector-valued activation: forward pass plus Jacobian.
pub struct Softmax;

impl Softmax {
    /// Forward pass with the default config.
    pub fn function(logits: &[f64]) -> Result<Vec<f64>> {
        softmax(logits)
    }

    /// Jacobian of softmax expressed in its own outputs:
    ///   J[i][j] = s_i · (δ_ij − s_j)
    ///
    /// `probabilities` is the forward output `s`, shape [n]; result is n × n.
    pub fn jacobian(probabilities: &[f64]) -> Matrix {
        let n = probabilities.len();
        let mut res = Matrix::zeros(n, n);
        for (i, si) in probabilities.iter().enumerate() {
            for (j, sj) in probabilities.iter().enumerate() {
                let delta = if i == j { 1.0 } else { 0.0 };
                res.data[i][j] = si * (delta - sj);
            }
        }
        res
    }

    /// Gradient w.r.t. the logits given `upstream` = ∂L/∂s.
    ///
    /// The Jacobian is symmetric, so Jᵀ·g == J·g.
    pub fn backward(probabilities: &[f64], upstream: &[f64]) -> Result<Vec<f64>> {
        Softmax::jacobian(probabilities).mul_vec(upstream)
    }
}
