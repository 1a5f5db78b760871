//! Configuration (appforge.yaml)
//!
//! Lookup order: explicit `--config` path, `./appforge.yaml`, then
//! `<config dir>/appforge/appforge.yaml`. A missing file means defaults;
//! a missing explicit path is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, config_invalid, config_not_found, config_parse_failed, config_read_failed};

/// Config filename
pub const CONFIG_FILE: &str = "appforge.yaml";

pub const DEFAULT_TITLE: &str = "AI App Generator";

pub const DEFAULT_OUTPUT: &str = "appforge.html";

/// Settings read from appforge.yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForgeConfig {
    /// Page title and heading
    pub title: String,

    /// Where the rendered page is written
    pub output: PathBuf,

    /// Fixed RNG seed for reproducible selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Remove the previous template's stylesheet and script on each mount
    pub cleanup_on_remount: bool,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            cleanup_on_remount: false,
        }
    }
}

impl ForgeConfig {
    /// Parse configuration from YAML; an empty document yields defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(config_invalid("title cannot be empty"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(config_invalid("output path cannot be empty"));
        }
        Ok(())
    }

    /// Load using the standard lookup order relative to `cwd`
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(config_not_found(path.display().to_string()));
            }
            return Self::load_file(path);
        }

        let candidates = std::iter::once(cwd.join(CONFIG_FILE))
            .chain(dirs::config_dir().map(|dir| dir.join("appforge").join(CONFIG_FILE)));
        for candidate in candidates {
            if candidate.is_file() {
                return Self::load_file(&candidate);
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| config_read_failed(&shown, e.to_string()))?;
        let config = Self::from_yaml(&content).map_err(|e| match e {
            crate::error::AppForgeError::ConfigParseFailed { reason, .. } => {
                config_parse_failed(&shown, reason)
            }
            other => other,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
