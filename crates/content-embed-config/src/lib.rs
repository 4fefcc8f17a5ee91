use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
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
}

/// Output format for rendered documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Email,
    Mdx,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Text,
        OutputFormat::Html,
        OutputFormat::Email,
        OutputFormat::Mdx,
        OutputFormat::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Email => "email",
            OutputFormat::Mdx => "mdx",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(OutputFormat::as_str).collect();
                format!("unknown format {s:?}, expected one of: {}", known.join(", "))
            })
    }
}

/// A keyword-selected block kind, as written in `[[blocks]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockConfig {
    pub kind: String,
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accepted: Vec<String>,
    pub property: String,
    pub label: String,
}

impl BlockConfig {
    pub fn teacher_profile() -> Self {
        let teachers = vec!["filip".to_string(), "ahilleas".to_string()];
        Self {
            kind: "teacher-profile".to_string(),
            aliases: teachers.clone(),
            accepted: teachers,
            property: "teacherInput".to_string(),
            label: "Teacher profile".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Format used by batch mode when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Register the built-in YouTube `video` block
    #[serde(default = "default_true")]
    pub video_embeds: bool,
    /// Keyword blocks, registered in order before `video`
    #[serde(default = "default_blocks")]
    pub blocks: Vec<BlockConfig>,
}

fn default_true() -> bool {
    true
}

fn default_blocks() -> Vec<BlockConfig> {
    vec![BlockConfig::teacher_profile()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            video_embeds: true,
            blocks: default_blocks(),
        }
    }
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
        let config_dir = shellexpand::tilde("~/.config/content-embed");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expand `~` and environment variables in a user-supplied path
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
