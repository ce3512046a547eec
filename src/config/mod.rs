use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{ReportError, Result},
    utils::persistence::{load_json, save_json},
};

const APP_DIR: &str = "report_core";
const CACHE_DIR: &str = "cache";
const CONFIG_FILE: &str = "config.json";

/// Tunables for report assembly and caching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Days between two net-worth samples.
    #[serde(default = "ReportConfig::default_net_worth_step_days")]
    pub net_worth_step_days: u32,
    /// Ranges spanning more whole months than this are reported per year.
    #[serde(default = "ReportConfig::default_yearly_threshold_months")]
    pub yearly_threshold_months: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory for the file-backed cache. Defaults to `<data dir>/report_core/cache`.
    pub cache_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            net_worth_step_days: Self::default_net_worth_step_days(),
            yearly_threshold_months: Self::default_yearly_threshold_months(),
            cache_dir: None,
        }
    }
}

impl ReportConfig {
    pub fn default_net_worth_step_days() -> u32 {
        7
    }

    pub fn default_yearly_threshold_months() -> u32 {
        12
    }

    pub fn validate(&self) -> Result<()> {
        if self.net_worth_step_days == 0 {
            return Err(ReportError::InvalidConfig(
                "net_worth_step_days must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn resolve_cache_dir(&self) -> PathBuf {
        if let Some(path) = &self.cache_dir {
            return path.clone();
        }

        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(APP_DIR).join(CACHE_DIR)
    }
}

/// Loads and saves [`ReportConfig`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Manager for `<base>/config.json`.
    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(base.join(CONFIG_FILE))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<ReportConfig> {
        let config = if self.config_path.exists() {
            load_json(&self.config_path)?
        } else {
            ReportConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &ReportConfig) -> Result<()> {
        config.validate()?;
        save_json(config, &self.config_path)
    }
}
