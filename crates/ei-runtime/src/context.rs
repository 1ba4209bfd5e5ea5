use std::path::Path;

use ei_core::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Evaluation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl EvalConfig {
    /// Load settings from a JSON file, e.g. `{"seed": 42}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// State threaded through one evaluation: the random source consumed by
/// observations.
#[derive(Debug, Clone)]
pub struct EvalContext {
    rng: StdRng,
    seed: Option<u64>,
}

impl EvalContext {
    /// Context seeded from the operating system.
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng(), seed: None }
    }

    /// Deterministic context.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), seed: Some(seed) }
    }

    /// Context built from [`EvalConfig`].
    pub fn from_config(config: &EvalConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    /// Seed this context was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Random source.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_contexts_agree() {
        let mut a = EvalContext::seeded(5);
        let mut b = EvalContext::from_config(&EvalConfig { seed: Some(5) });
        let xs: Vec<f64> = (0..8).map(|_| a.rng().random()).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.rng().random()).collect();
        assert_eq!(xs, ys);
        assert_eq!(b.seed(), Some(5));
    }

    #[test]
    fn test_config_defaults() {
        let config: EvalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EvalConfig::default());
        assert_eq!(EvalContext::from_config(&config).seed(), None);
    }

    #[test]
    fn test_config_from_file() {
        let path = std::env::temp_dir().join(format!("ei-runtime-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"seed": 17}"#).unwrap();
        let config = EvalConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.seed, Some(17));
    }

    #[test]
    fn test_config_missing_file_is_io_error() {
        let err = EvalConfig::from_json_file("/nonexistent/ei-runtime/config.json").unwrap_err();
        assert!(matches!(err, ei_core::Error::Io(_)));
    }
}
