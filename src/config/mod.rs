//! Configuration file handling for podstatic
//!
//! `podstatic.yaml` lists the pods to build statically:
//!
//! ```yaml
//! libraries:
//!   - LibA
//!   - name: Firebase
//!     modularHeaders: true
//! ```
//!
//! Files ending in `.json` are read as JSON with the same shape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::podfile::LibraryEntry;

/// Default configuration file name, looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "podstatic.yaml";

/// Contents of `podstatic.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodstaticConfig {
    /// Pods to force to static linking
    #[serde(default)]
    pub libraries: Vec<LibraryEntry>,
}

impl PodstaticConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, picking the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(error::config::not_found(path.display().to_string()));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, e))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };

        // Attach the path to parse errors coming from the serde conversions
        parsed.map_err(|e| match e {
            error::PodstaticError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Load `podstatic.yaml` from `dir` if it exists
    pub fn load_default(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.libraries.iter().enumerate() {
            if entry.name().trim().is_empty() {
                return Err(error::config::invalid(format!(
                    "library #{} has an empty name",
                    index + 1
                )));
            }
        }
        Ok(())
    }

    /// Append entries after the ones already configured
    pub fn extend(&mut self, entries: impl IntoIterator<Item = LibraryEntry>) {
        self.libraries.extend(entries);
    }
}
