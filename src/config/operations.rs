//! Config loading and utility operations.

use super::model::Config;
use crate::error::{Result, TemplateError};
use crate::values::MAX_PLACEHOLDERS;
use std::path::Path;
use tracing::{debug, warn};

/// Config file picked up from the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tinytpl.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TemplateError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), values = config.values.len(), "loaded config");
        Ok(config)
    }

    /// Load an explicitly named config, or the default file if it exists.
    ///
    /// A missing default file is not an error; a missing explicit one is.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            TemplateError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        config.warn_unreachable_values();
        Ok(config)
    }

    /// Validate config values.
    ///
    /// `line_ending` and `log_level` are closed enums checked while parsing.
    /// Values must not contain NUL, since expanded lines are NUL-terminated.
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.values.iter().position(|v| v.contains('\0')) {
            return Err(TemplateError::UserError(format!(
                "config validation failed: values[{}] contains a NUL byte",
                index
            )));
        }

        Ok(())
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TemplateError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Replace configured values with command-line ones, if any were given.
    pub fn with_values(mut self, values: Vec<String>) -> Self {
        if !values.is_empty() {
            self.values = values;
        }
        self
    }

    fn warn_unreachable_values(&self) {
        if self.values.len() > MAX_PLACEHOLDERS {
            warn!(
                "config lists {} values but only $0..$9 can be referenced",
                self.values.len()
            );
        }
    }
}
