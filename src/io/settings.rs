use crate::defaults::*;
use anyhow::{Context, Result};
use dish_decoherence::DecoherenceConfiguration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_verbose() -> i8 {
    VERBOSE
}
fn default_number_of_cores() -> usize {
    NUMBER_OF_CORES
}
fn default_parallelization() -> ParallelizationConfig {
    ParallelizationConfig {
        number_of_cores: default_number_of_cores(),
    }
}

/// Global settings of a run, read from the file "dish.toml"
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Configuration {
    #[serde(default = "default_verbose")]
    pub verbose: i8,
    #[serde(default = "default_parallelization")]
    pub parallelization: ParallelizationConfig,
    #[serde(default)]
    pub decoherence: DecoherenceConfiguration,
}

impl Configuration {
    /// Reads the configuration from `path`. If the file does not exist the default
    /// settings are used and written to `path`, so that the user can see all options.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file_exists: bool = path.exists();
        let config_string: String = if file_exists {
            fs::read_to_string(path)
                .with_context(|| format!("Unable to read config file {}", path.display()))?
        } else {
            String::new()
        };
        let config: Self = toml::from_str(&config_string)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        if !file_exists {
            let config_string: String =
                toml::to_string(&config).context("Unable to serialize the configuration")?;
            fs::write(path, config_string)
                .with_context(|| format!("Unable to write config file {}", path.display()))?;
        }
        Ok(config)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ParallelizationConfig {
    #[serde(default = "default_number_of_cores")]
    pub number_of_cores: usize,
}

impl Default for ParallelizationConfig {
    fn default() -> Self {
        default_parallelization()
    }
}
