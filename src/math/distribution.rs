use rand::Rng;

use crate::error::{NumericError, Result};

/// Index of the largest element, or `None` for an empty slice.
/// Ties go to the first maximum; NaN entries never win.
pub fn argmax(v: &[f64]) -> Option<usize> {
    v.iter()
        .enumerate()
        .filter(|(_, x)| !x.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (i, &x)| match best {
            Some((_, b)) if b >= x => best,
            _ => Some((i, x)),
        })
        .map(|(i, _)| i)
}

/// Draws a class index from a probability vector (e.g. a softmax output).
///
/// Weights need not sum to exactly 1; the draw is scaled by their total.
/// Negative or non-finite weights are rejected.
pub fn sample_index<R: Rng + ?Sized>(probabilities: &[f64], rng: &mut R) -> Result<usize> {
    if probabilities.is_empty() {
        return Err(NumericError::EmptyInput);
    }
    for (index, &value) in probabilities.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(NumericError::Domain { index, value });
        }
    }

    let total: f64 = probabilities.iter().sum();
    let mut threshold = rng.gen::<f64>() * total;
    for (i, p) in probabilities.iter().enumerate() {
        if threshold < *p {
            return Ok(i);
        }
        threshold -= p;
    }

    // Rounding can leave a sliver past the last bucket.
    Ok(probabilities.iter().rposition(|p| *p > 0.0).unwrap_or(probabilities.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn argmax_picks_first_maximum() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[0.5, 0.5]), Some(0));
        assert_eq!(argmax(&[0.2, 0.9, 0.1, 0.9]), Some(1));
        assert_eq!(argmax(&[]), None);
        assert_eq!(argmax(&[f64::NAN, 0.3]), Some(1));
    }

    #[test]
    fn sample_index_follows_point_mass() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sample_index(&[0.0, 1.0, 0.0], &mut rng).unwrap(), 1);
        }
    }

    #[test]
    fn sample_index_roughly_matches_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let probs = [0.2, 0.8];
        let draws = 10_000;
        let ones = (0..draws)
            .filter(|_| sample_index(&probs, &mut rng).unwrap() == 1)
            .count();
        let freq = ones as f64 / draws as f64;
        assert!((freq - 0.8).abs() < 0.03, "frequency {freq}");
    }

    #[test]
    fn sample_index_rejects_bad_weights() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(sample_index(&[], &mut rng).unwrap_err(), NumericError::EmptyInput);
        assert_eq!(
            sample_index(&[0.5, -0.1], &mut rng).unwrap_err(),
            NumericError::Domain { index: 1, value: -0.1 }
        );
    }
}
