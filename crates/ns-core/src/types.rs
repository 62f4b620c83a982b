//! Common data types for NextStat

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default number of candidate draws a rejection sampler may consume
/// before reporting [`Error::Convergence`].
pub const DEFAULT_MAX_REJECTIONS: u64 = 1 << 20;

/// Sampling engine configuration.
///
/// Missing fields fall back to [`SamplerConfig::default`] when deserialized,
/// so `{"seed": 7}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Seed of the uniform generator
    pub seed: u64,

    /// Upper bound on candidate draws per rejection-sampled variate
    pub max_rejections: u64,
}

impl SamplerConfig {
    /// Create a configuration with the given seed and default budget
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// Check the configuration for values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_rejections == 0 {
            return Err(Error::Validation("max_rejections must be > 0, got 0".into()));
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { seed: 0, max_rejections: DEFAULT_MAX_REJECTIONS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: SamplerConfig = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.max_rejections, DEFAULT_MAX_REJECTIONS);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let cfg = SamplerConfig { seed: 1, max_rejections: 0 };
        assert!(cfg.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_with_seed() {
        let cfg = SamplerConfig::with_seed(9);
        assert_eq!(cfg, SamplerConfig { seed: 9, max_rejections: DEFAULT_MAX_REJECTIONS });
    }
}
