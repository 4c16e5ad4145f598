//! Tool configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, WhittleError};

/// Default config file name, looked up in the current working directory.
pub const DEFAULT_CONFIG_FILE: &str = "whittle.yaml";

/// Configuration for generation runs.
///
/// This struct represents the contents of `whittle.yaml`. Unknown fields in
/// the YAML are ignored for forward compatibility. The API key is never read
/// from here; it comes from the environment only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model identifier sent with each generation request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible API (default: the OpenAI endpoint).
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Directory holding the reference documents (default: "Docs").
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Request timeout in seconds. Unset waits as long as the service takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_docs_dir() -> String {
    "Docs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            docs_dir: default_docs_dir(),
            request_timeout_seconds: None,
        }
    }
}

impl Config {
    /// Load config from a YAML file. Fails if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            WhittleError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults when the file
    /// does not exist. Other read errors still fail.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(WhittleError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility. An empty document yields the defaults, matching a
    /// missing file.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| WhittleError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `model` must be non-empty
    /// - `api_base` must be non-empty
    /// - `request_timeout_seconds`, when set, must be positive
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(WhittleError::Config(
                "config validation failed: model must be non-empty".to_string(),
            ));
        }

        if self.api_base.trim().is_empty() {
            return Err(WhittleError::Config(
                "config validation failed: api_base must be non-empty".to_string(),
            ));
        }

        if self.request_timeout_seconds == Some(0) {
            return Err(WhittleError::Config(
                "config validation failed: request_timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// The request timeout as a duration, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = Config::from_yaml("").unwrap();

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.api_base, "https://api.openai.com/v1");
        assert_eq!(config.docs_dir, "Docs");
        assert_eq!(config.request_timeout_seconds, None);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("model: gpt-4o\n").unwrap();

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.docs_dir, "Docs");
    }

    #[test]
    fn parses_all_fields() {
        let yaml = "model: local-llm\n\
                    api_base: http://localhost:8080/v1\n\
                    docs_dir: Documentation\n\
                    request_timeout_seconds: 120\n";

        let config = Config::from_yaml(yaml).unwrap();

        assert_eq!(config.model, "local-llm");
        assert_eq!(config.api_base, "http://localhost:8080/v1");
        assert_eq!(config.docs_dir, "Documentation");
        assert_eq!(config.request_timeout_seconds, Some(120));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = Config::from_yaml("model: gpt-4o\nfuture_feature: true\n").unwrap();

        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let result = Config::from_yaml("model: [unclosed");

        assert!(result.is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Config::from_yaml("request_timeout_seconds: 0\n").unwrap_err();

        assert!(err.to_string().contains("request_timeout_seconds"));
    }

    #[test]
    fn empty_model_is_rejected() {
        let err = Config::from_yaml("model: \"\"\n").unwrap_err();

        assert!(err.to_string().contains("model"));
    }

    #[test]
    fn load_reads_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "model: from-file\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.model, "from-file");
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = Config::load(temp_dir.path().join("absent.yaml")).unwrap_err();

        assert!(matches!(err, WhittleError::Config(_)));
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let config = Config::load_or_default(temp_dir.path().join("absent.yaml")).unwrap();

        assert_eq!(config.model, "gpt-4o-mini");
    }

    #[test]
    fn load_or_default_still_rejects_bad_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "model: [unclosed").unwrap();

        assert!(Config::load_or_default(&path).is_err());
    }

    #[test]
    fn request_timeout_maps_to_duration() {
        let mut config = Config::default();
        assert_eq!(config.request_timeout(), None);

        config.request_timeout_seconds = Some(90);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(90)));
    }
}
