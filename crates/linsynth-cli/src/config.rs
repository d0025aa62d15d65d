//! CLI configuration.
//!
//! Values come from, highest precedence first:
//! 1. command-line flags (applied by the commands)
//! 2. `LINSYNTH_*` environment variables
//! 3. the YAML file given by `--config`, else `~/.linsynth/config.yaml`
//! 4. built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use linsynth_synth::SynthesisMethod;

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for `synth` and `compare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Engine name: "pmh", "gaussian" or "kms"
    #[serde(default = "default_method")]
    pub method: String,

    /// PMH section size; the engine picks one from `n` when unset
    #[serde(default)]
    pub section_size: Option<usize>,

    /// Replay-check every synthesized circuit
    #[serde(default)]
    pub verify: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_method() -> String {
    SynthesisMethod::default().as_str().to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            section_size: None,
            verify: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// `~/.linsynth/config.yaml`, if a home directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".linsynth").join("config.yaml"))
}

impl Config {
    /// Parse a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse YAML configuration text.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(contents)?)
    }

    /// Load the file (explicit path, else the default location if present),
    /// apply environment overrides and validate.
    pub fn load(config_file: Option<&str>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                if !Path::new(path).exists() {
                    bail!("Config file not found: {path}");
                }
                Self::from_file(path)?
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Self::default(),
            },
        };

        let config = config.merge_env_from(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `LINSYNTH_*` overrides. Only variables that `lookup` returns
    /// replace the current values.
    pub fn merge_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LINSYNTH_METHOD") {
            self.synthesis.method = v;
        }
        if let Some(v) = lookup("LINSYNTH_SECTION_SIZE") {
            let size = v
                .parse()
                .with_context(|| format!("LINSYNTH_SECTION_SIZE is not a number: {v}"))?;
            self.synthesis.section_size = Some(size);
        }
        if let Some(v) = lookup("LINSYNTH_VERIFY") {
            self.synthesis.verify = match v.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => bail!("LINSYNTH_VERIFY must be true or false, got: {other}"),
            };
        }
        if let Some(v) = lookup("LINSYNTH_LOG_LEVEL") {
            self.logging.level = v;
        }
        Ok(self)
    }

    /// Reject unknown engines, a zero section size and unknown log levels.
    pub fn validate(&self) -> Result<()> {
        self.method()?;

        if self.synthesis.section_size == Some(0) {
            bail!("section_size must be greater than 0");
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => bail!("Invalid log level: {other}"),
        }

        Ok(())
    }

    /// The configured engine.
    pub fn method(&self) -> Result<SynthesisMethod> {
        Ok(self.synthesis.method.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.synthesis.method, "pmh");
        assert_eq!(config.synthesis.section_size, None);
        assert!(!config.synthesis.verify);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("synthesis:\n  section_size: 3\n").unwrap();
        assert_eq!(config.synthesis.section_size, Some(3));
        assert_eq!(config.synthesis.method, "pmh");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "synthesis:\n  method: kms\n  verify: true\nlogging:\n  level: debug\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.method().unwrap(), SynthesisMethod::Kms);
        assert!(config.synthesis.verify);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_overrides_file() {
        let config = Config::from_yaml("synthesis:\n  method: kms\n").unwrap();
        let config = config
            .merge_env_from(env(&[
                ("LINSYNTH_METHOD", "gaussian"),
                ("LINSYNTH_SECTION_SIZE", "4"),
                ("LINSYNTH_VERIFY", "true"),
                ("LINSYNTH_LOG_LEVEL", "info"),
            ]))
            .unwrap();
        assert_eq!(config.method().unwrap(), SynthesisMethod::Gaussian);
        assert_eq!(config.synthesis.section_size, Some(4));
        assert!(config.synthesis.verify);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_absent_env_leaves_values() {
        let config = Config::default().merge_env_from(env(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_env_values() {
        assert!(
            Config::default()
                .merge_env_from(env(&[("LINSYNTH_SECTION_SIZE", "two")]))
                .is_err()
        );
        assert!(
            Config::default()
                .merge_env_from(env(&[("LINSYNTH_VERIFY", "maybe")]))
                .is_err()
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.synthesis.method = "bogus".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.synthesis.section_size = Some(0);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "synthesis:\n  method: gaussian\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.method().unwrap(), SynthesisMethod::Gaussian);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load(Some("/nonexistent/linsynth.yaml")).is_err());
    }
}
