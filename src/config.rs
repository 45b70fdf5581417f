//! Engine configuration and its YAML persistence.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```yaml
//! decimals: 3
//! histogram_bins: 10
//! ```

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};

pub const DEFAULT_DECIMALS: u32 = 2;
pub const DEFAULT_HISTOGRAM_BINS: usize = 24;
pub const MAX_DECIMALS: u32 = 10;

/// Tokens read as missing values, matching what common dataframe readers
/// treat as NA by default.
pub const DEFAULT_NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilerConfig {
    pub decimals: u32,
    pub histogram_bins: usize,
    pub missing_label: String,
    pub na_tokens: Vec<String>,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            missing_label: "<missing>".to_string(),
            na_tokens: DEFAULT_NA_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ProfilerConfig {
    pub fn from_yaml_str(text: &str) -> ProfileResult<Self> {
        let config: ProfilerConfig =
            serde_yaml::from_str(text).map_err(|err| ProfileError::Config {
                message: err.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening config file {path:?}"))?;
        let reader = BufReader::new(file);
        let config: ProfilerConfig =
            serde_yaml::from_reader(reader).context("Parsing profiler config YAML")?;
        config
            .validate()
            .with_context(|| format!("Validating config file {path:?}"))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("Creating config file {path:?}"))?;
        serde_yaml::to_writer(file, self).context("Writing profiler config YAML")
    }

    pub fn validate(&self) -> ProfileResult<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(ProfileError::Config {
                message: format!(
                    "decimals must be at most {MAX_DECIMALS}, got {}",
                    self.decimals
                ),
            });
        }
        if self.histogram_bins == 0 {
            return Err(ProfileError::Config {
                message: "histogram_bins must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
