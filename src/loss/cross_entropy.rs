use log::debug;

use crate::config::{NumericConfig, ProbabilityPolicy};
use crate::error::{NumericError, Result};

/// Binary cross-entropy summed over all positions, default config:
///   L = -sum(Y[i]·ln(P[i]) + (1 - Y[i])·ln(1 - P[i]))
///
/// `labels` are usually 0/1 but any real is accepted; `predictions` are
/// probabilities. An empty pair gives 0.
pub fn cross_entropy(labels: &[f64], predictions: &[f64]) -> Result<f64> {
    cross_entropy_with(labels, predictions, &NumericConfig::default())
}

/// Cross-entropy under an explicit config; `config.probability` decides what
/// happens to predictions at or beyond 0 and 1.
///
/// Terms are accumulated first and the total negated once.
///
/// # Errors
/// - `LengthMismatch` when the slices differ in length.
/// - `NonFinite` for any NaN or infinite label or prediction.
/// - `InvalidEpsilon` for a `Clamp` epsilon outside (0, 0.5).
/// - `Domain` under `ProbabilityPolicy::Reject` for any prediction outside (0, 1).
pub fn cross_entropy_with(labels: &[f64], predictions: &[f64], config: &NumericConfig) -> Result<f64> {
    check_inputs(labels, predictions, config)?;

    let mut sum = 0.0;
    let mut clamped = 0usize;
    for (index, (y, p)) in labels.iter().zip(predictions.iter()).enumerate() {
        let q = guard(index, *p, config.probability)?;
        if q != *p {
            clamped += 1;
        }
        sum += y * q.ln() + (1.0 - y) * (1.0 - q).ln();
    }

    if clamped > 0 {
        debug!("cross_entropy: clamped {clamped} of {} predictions", predictions.len());
    }

    // `0.0 - sum` rather than `-sum`: an empty input gives +0, not -0.
    Ok(0.0 - sum)
}

/// Binary cross-entropy in the `loss` / `derivative` pairing used across
/// the crate. Arguments are `(predicted, expected)`.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Summed loss; same value as `cross_entropy(expected, predicted)`.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        cross_entropy(expected, predicted)
    }

    /// Loss averaged over positions; 0 for empty input.
    pub fn mean(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        let total = CrossEntropyLoss::loss(predicted, expected)?;
        if predicted.is_empty() {
            return Ok(0.0);
        }
        Ok(total / predicted.len() as f64)
    }

    /// Per-output gradient ∂L/∂P[i] = (P[i] - Y[i]) / (P[i] · (1 - P[i])),
    /// with P guarded by the default policy.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Result<Vec<f64>> {
        CrossEntropyLoss::derivative_with(predicted, expected, &NumericConfig::default())
    }

    /// Gradient under an explicit config. Under `Raw`, P at 0 or 1 gives inf/NaN.
    pub fn derivative_with(predicted: &[f64], expected: &[f64], config: &NumericConfig) -> Result<Vec<f64>> {
        check_inputs(expected, predicted, config)?;
        predicted.iter().zip(expected.iter())
            .enumerate()
            .map(|(index, (p, y))| {
                let q = guard(index, *p, config.probability)?;
                Ok((q - y) / (q * (1.0 - q)))
            })
            .collect()
    }
}

/// Shape, finiteness and config checks shared by loss and derivative.
/// Runs before the probability policy, which would otherwise mask NaN.
fn check_inputs(labels: &[f64], predictions: &[f64], config: &NumericConfig) -> Result<()> {
    if labels.len() != predictions.len() {
        return Err(NumericError::LengthMismatch {
            labels: labels.len(),
            predictions: predictions.len(),
        });
    }
    for (index, (y, p)) in labels.iter().zip(predictions.iter()).enumerate() {
        if !y.is_finite() {
            return Err(NumericError::NonFinite { index, value: *y });
        }
        if !p.is_finite() {
            return Err(NumericError::NonFinite { index, value: *p });
        }
    }
    config.validate()
}

/// Applies the probability policy to one prediction.
fn guard(index: usize, p: f64, policy: ProbabilityPolicy) -> Result<f64> {
    match policy {
        ProbabilityPolicy::Clamp { epsilon } => Ok(p.max(epsilon).min(1.0 - epsilon)),
        ProbabilityPolicy::Raw => Ok(p),
        ProbabilityPolicy::Reject => {
            if p > 0.0 && p < 1.0 {
                Ok(p)
            } else {
                Err(NumericError::Domain { index, value: p })
            }
        }
    }
}
