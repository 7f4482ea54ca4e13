use markweave_engine::MessageLevel;
use markweave_engine::extensions;
use markweave_engine::parsing::ExtensionBundle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown extension bundle '{name}', expected one of: {}", extensions::AVAILABLE.join(", "))]
    UnknownExtension { name: String },

    #[error("Invalid input pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read input path: {source}")]
    InputReadError { source: glob::GlobError },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parsing: ParsingConfig,
    pub highlighting: HighlightingConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Extension bundles by name, in registration order.
    pub extensions: Vec<String>,
    /// Invalid elements at or above this level fail a document check.
    pub failure_level: MessageLevel,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            extensions: extensions::AVAILABLE.iter().map(|s| s.to_string()).collect(),
            failure_level: MessageLevel::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightingConfig {
    pub enabled: bool,
}

impl Default for HighlightingConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Glob patterns; `~` and environment variables are expanded.
    pub patterns: Vec<String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markweave");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Instantiates the configured extension bundles. `highlighting` is
    /// skipped when highlighting is disabled.
    pub fn bundles(&self) -> Result<Vec<Box<dyn ExtensionBundle>>, ConfigError> {
        self.parsing
            .extensions
            .iter()
            .filter(|name| self.highlighting.enabled || !name.eq_ignore_ascii_case("highlighting"))
            .map(|name| {
                extensions::by_name(name)
                    .ok_or_else(|| ConfigError::UnknownExtension { name: name.clone() })
            })
            .collect()
    }

    /// Files matched by the input patterns, sorted and deduplicated.
    pub fn input_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut files = Vec::new();
        for pattern in &self.input.patterns {
            let expanded = Self::expand_pattern(pattern);
            let paths = glob::glob(&expanded).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            for path in paths {
                let path = path.map_err(|source| ConfigError::InputReadError { source })?;
                if path.is_file() {
                    files.push(path);
                }
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    fn expand_pattern(pattern: &str) -> String {
        match shellexpand::full(pattern) {
            Ok(expanded) => expanded.into_owned(),
            Err(_) => pattern.to_string(),
        }
    }
}
