use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::factorial::Engine;
use crate::namebook::Checker;

/// Defaults for both drills, overridable from `kata.toml` and then from the
/// command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Largest accepted factorial input.
    pub max_n: u64,
    /// Default factorial engine.
    pub engine: Engine,
    /// Default name-list checker.
    pub checker: Checker,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_n: 2000,
            engine: Engine::Limbs,
            checker: Checker::Trie,
        }
    }
}

/// Config as stored in kata.toml.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    max_n: Option<u64>,
    engine: Option<Engine>,
    checker: Option<Checker>,
}

impl Config {
    /// Load config with the following precedence:
    /// 1. CLI overrides (applied by the caller after this method)
    /// 2. kata.toml in the working directory
    /// 3. Defaults
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Config::default();

        let kata_toml = root.join("kata.toml");
        if kata_toml.exists() {
            let content = std::fs::read_to_string(&kata_toml)?;
            let file_config: FileConfig =
                toml::from_str(&content).map_err(|e| Error::ConfigParse {
                    path: kata_toml,
                    message: e.to_string(),
                })?;
            config.apply_file_config(&file_config);
        }

        Ok(config)
    }

    fn apply_file_config(&mut self, fc: &FileConfig) {
        if let Some(v) = fc.max_n {
            self.max_n = v;
        }
        if let Some(v) = fc.engine {
            self.engine = v;
        }
        if let Some(v) = fc.checker {
            self.checker = v;
        }
    }
}
