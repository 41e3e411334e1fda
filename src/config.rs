use serde::{Serialize, Deserialize};

use crate::error::{NumericError, Result};

/// Default clamp margin for probabilities fed to `log()`.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// How cross-entropy treats predicted probabilities at the (0, 1) boundary.
///
/// - `Clamp`  — clamp into `[epsilon, 1 - epsilon]` before taking logs.
/// - `Raw`    — evaluate the formula unguarded; `p == 0` or `p == 1` yields
///              an infinite or NaN loss.
/// - `Reject` — fail with `NumericError::Domain` for any `p` outside (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ProbabilityPolicy {
    Clamp { epsilon: f64 },
    Raw,
    Reject,
}

impl Default for ProbabilityPolicy {
    fn default() -> Self {
        ProbabilityPolicy::Clamp { epsilon: DEFAULT_EPSILON }
    }
}

/// Numeric behaviour shared by `softmax_with` and `cross_entropy_with`.
///
/// Missing fields fall back to their defaults, so `{}` is a valid config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericConfig {
    /// Subtract `max(L)` before exponentiating in softmax.
    #[serde(default = "default_stabilize")]
    pub stabilize: bool,
    #[serde(default)]
    pub probability: ProbabilityPolicy,
}

fn default_stabilize() -> bool {
    true
}

impl Default for NumericConfig {
    fn default() -> Self {
        NumericConfig {
            stabilize: true,
            probability: ProbabilityPolicy::default(),
        }
    }
}

impl NumericConfig {
    /// The unguarded textbook formulas: no max-subtraction, no clamping.
    pub fn reference() -> Self {
        NumericConfig {
            stabilize: false,
            probability: ProbabilityPolicy::Raw,
        }
    }

    /// Checks that a `Clamp` epsilon lies in (0, 0.5); anything else would
    /// either disable clamping or collapse every prediction to one value.
    pub fn validate(&self) -> Result<()> {
        if let ProbabilityPolicy::Clamp { epsilon } = self.probability {
            if !(epsilon > 0.0 && epsilon < 0.5) {
                return Err(NumericError::InvalidEpsilon { epsilon });
            }
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file previously written by `save_json`.
    /// A config that fails `validate()` is reported as `InvalidData`.
    pub fn load_json(path: &str) -> std::io::Result<NumericConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NumericConfig = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        config.validate()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }
}
