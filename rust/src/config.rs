//! Configuration loader. A small JSON file selects how negative offsets are
//! handled and how rotated values are joined on output. Every key is optional;
//! a missing file path means the built-in defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::DEFAULT_SEPARATOR;
use crate::rotation::NegativeOffsetPolicy;

/// Environment variable consulted when no config path is given explicitly.
pub const CONFIG_ENV_VAR: &str = "ROTATIONS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file unreadable: {0}")]
    Io(String),
    #[error("config parse failed: {0}")]
    Parse(String),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    #[serde(rename = "negativeOffset")]
    pub negative_offset: NegativeOffsetPolicy,
    pub separator: String,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            negative_offset: NegativeOffsetPolicy::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl RotationConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::Invalid("separator must not be empty".to_string()));
        }
        if self.separator.chars().any(|c| c.is_ascii_digit() || c == '-') {
            return Err(ConfigError::Invalid(format!(
                "separator {:?} would blur the rendered numbers",
                self.separator
            )));
        }
        Ok(self)
    }
}

/// Reads and validates the JSON configuration at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<RotationConfig, ConfigError> {
    let path = path.as_ref();
    let raw_json = fs::read_to_string(path).map_err(|e| ConfigError::Io(format!("{e}")))?;
    let config: RotationConfig =
        serde_json::from_str(&raw_json).map_err(|e| ConfigError::Parse(format!("{e}")))?;
    let config = config.validate()?;
    info!("loaded config from {}", path.display());
    debug!("{config:?}");
    Ok(config)
}

/// Picks the explicit path when given, otherwise the one named by
/// `ROTATIONS_CONFIG`, otherwise nothing.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Loads the resolved config, falling back to defaults when no path applies.
pub fn load_or_default(explicit: Option<&Path>) -> Result<RotationConfig, ConfigError> {
    match resolve_config_path(explicit) {
        Some(path) => load_config(path),
        None => {
            debug!("no config path given, using defaults");
            Ok(RotationConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        load_config, load_or_default, resolve_config_path, ConfigError, RotationConfig,
        CONFIG_ENV_VAR,
    };
    use crate::rotation::NegativeOffsetPolicy;
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn write_config(payload: &serde_json::Value) -> NamedTempFile {
        let file = NamedTempFile::new().expect("temp file");
        fs::write(file.path(), serde_json::to_vec(payload).unwrap()).unwrap();
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(&json!({
            "negativeOffset": "rotate-left",
            "separator": ","
        }));

        let config = load_config(file.path()).expect("config should load");
        assert_eq!(config.negative_offset, NegativeOffsetPolicy::RotateLeft);
        assert_eq!(config.separator, ",");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let file = write_config(&json!({}));
        let config = load_config(file.path()).expect("config should load");
        assert_eq!(config, RotationConfig::default());
        assert_eq!(config.negative_offset, NegativeOffsetPolicy::Reject);
        assert_eq!(config.separator, " ");
    }

    #[test]
    fn rejects_unknown_policy() {
        let file = write_config(&json!({ "negativeOffset": "wrap-around" }));
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_unusable_separators() {
        for separator in ["", "0", "-"] {
            let file = write_config(&json!({ "separator": separator }));
            let err = load_config(file.path()).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "separator {separator:?}");
        }
    }

    #[test]
    fn reports_missing_file() {
        let err = load_config("/definitely/not/here/rotations.json").unwrap_err();
        assert!(format!("{err}").contains("config file unreadable"));
    }

    #[test]
    fn explicit_path_wins() {
        let file = write_config(&json!({ "separator": "\t" }));
        let resolved = resolve_config_path(Some(file.path())).expect("explicit path");
        assert_eq!(resolved, file.path());

        let config = load_or_default(Some(file.path())).expect("config should load");
        assert_eq!(config.separator, "\t");
    }

    // Every case touching the environment variable lives in this one test so
    // parallel tests never observe each other's values.
    #[test]
    fn falls_back_to_environment_variable() {
        let file = write_config(&json!({ "negativeOffset": "rotate-left", "separator": ";" }));
        let other = write_config(&json!({ "separator": "," }));

        std::env::set_var(CONFIG_ENV_VAR, file.path());
        assert_eq!(resolve_config_path(None).expect("env path"), file.path());
        let config = load_or_default(None).expect("config should load");
        assert_eq!(config.negative_offset, NegativeOffsetPolicy::RotateLeft);
        assert_eq!(config.separator, ";");

        let config = load_or_default(Some(other.path())).expect("config should load");
        assert_eq!(config.separator, ",");

        std::env::set_var(CONFIG_ENV_VAR, "");
        assert!(resolve_config_path(None).is_none());
        assert_eq!(load_or_default(None).expect("defaults"), RotationConfig::default());

        std::env::set_var(CONFIG_ENV_VAR, "/definitely/not/here/rotations.json");
        assert!(matches!(load_or_default(None), Err(ConfigError::Io(_))));

        std::env::remove_var(CONFIG_ENV_VAR);
        assert!(resolve_config_path(None).is_none());
        assert_eq!(load_or_default(None).expect("defaults"), RotationConfig::default());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_or_default(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
