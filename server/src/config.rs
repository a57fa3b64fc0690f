use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

use crate::simulation::DEFAULT_POINT_COUNT;

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_point_count() -> usize {
    DEFAULT_POINT_COUNT
}

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory probed for the optional terrain rasters.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Number of points sampled on each ring.
    #[serde(default = "default_point_count")]
    pub point_count: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        Self::from_iter(std::env::vars())
    }

    fn from_iter<I>(vars: I) -> anyhow::Result<Config>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Config = envy::prefixed("FIRELINE_")
            .from_iter(vars)
            .context("Invalid config. Optional env vars: FIRELINE_DATA_DIR, FIRELINE_POINT_COUNT")?;

        if config.point_count == 0 {
            anyhow::bail!("FIRELINE_POINT_COUNT must be at least 1");
        }
        Ok(config)
    }
}
