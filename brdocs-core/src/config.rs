//! Configuration management for `brdocs-core`.
//!
//! Settings are read from YAML. An embedded default ships with the crate and a
//! user file can be merged on top of it with [`merge_config`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::dispatch::Operation;
use crate::formatters::FormatMode;

/// Top-level settings consumed by the [`Dispatcher`](crate::dispatch::Dispatcher).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// How formatters reduce input to digits. `None` means the built-in default (strict).
    pub format_mode: Option<FormatMode>,
    /// Operation identifiers (any accepted alias) that dispatch must reject as unsupported.
    pub disabled_operations: Vec<String>,
}

impl ValidatorConfig {
    /// Loads settings from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ValidatorConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        debug!(
            "Loaded config from {}: format_mode={:?}, {} disabled operation(s).",
            path.display(),
            config.format_mode,
            config.disabled_operations.len()
        );
        Ok(config)
    }

    /// Loads the settings embedded in the crate.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default.yaml");
        serde_yml::from_str(default_yaml).context("Failed to parse default configuration")
    }

    pub fn effective_format_mode(&self) -> FormatMode {
        self.format_mode.unwrap_or_default()
    }

    /// Resolves `disabled_operations` to operations. Unknown names are logged and skipped.
    pub fn disabled_set(&self) -> HashSet<Operation> {
        let mut set = HashSet::new();
        for name in &self.disabled_operations {
            match name.parse::<Operation>() {
                Ok(op) => {
                    set.insert(op);
                }
                Err(_) => warn!("Operation '{}' in `disabled_operations` does not exist.", name),
            }
        }
        set
    }
}

/// Merges a user configuration over the defaults.
///
/// A format mode set by the user wins; disabled operations are the union of both lists.
pub fn merge_config(default_config: ValidatorConfig, user_config: Option<ValidatorConfig>) -> ValidatorConfig {
    let Some(user_cfg) = user_config else {
        return default_config;
    };

    let mut merged = default_config;
    if let Some(mode) = user_cfg.format_mode {
        debug!("Overriding format mode with user value: {:?}", mode);
        merged.format_mode = Some(mode);
    }
    for name in user_cfg.disabled_operations {
        if !merged.disabled_operations.contains(&name) {
            merged.disabled_operations.push(name);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_is_strict_with_nothing_disabled() {
        let config = ValidatorConfig::load_default().unwrap();
        assert_eq!(config.effective_format_mode(), FormatMode::Strict);
        assert!(config.disabled_operations.is_empty());
    }

    #[test]
    fn merge_prefers_user_mode_and_unions_disabled() {
        let default_config = ValidatorConfig {
            format_mode: Some(FormatMode::Strict),
            disabled_operations: vec!["validateCep".into()],
        };
        let user = ValidatorConfig {
            format_mode: Some(FormatMode::Lenient),
            disabled_operations: vec!["validateCep".into(), "formatCpf".into()],
        };
        let merged = merge_config(default_config, Some(user));
        assert_eq!(merged.effective_format_mode(), FormatMode::Lenient);
        assert_eq!(merged.disabled_operations, vec!["validateCep", "formatCpf"]);
    }

    #[test]
    fn merge_without_user_config_keeps_defaults() {
        let default_config = ValidatorConfig::load_default().unwrap();
        assert_eq!(merge_config(default_config.clone(), None), default_config);
    }

    #[test]
    fn disabled_set_skips_unknown_names() {
        let config = ValidatorConfig {
            format_mode: None,
            disabled_operations: vec!["validarCep".into(), "doesNotExist".into()],
        };
        let set = config.disabled_set();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Operation::ValidateCep));
    }
}
