use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Which files a directory walk picks up.
#[derive(Debug, Deserialize, Clone)]
pub struct ScanConfig {
    /// File extensions (without the dot) treated as templates.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names never descended into.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { extensions: default_extensions(), exclude: default_exclude() }
    }
}

fn default_extensions() -> Vec<String> {
    ["md", "txt", "prompt"].into_iter().map(String::from).collect()
}

fn default_exclude() -> Vec<String> {
    [".git", "node_modules", "target"].into_iter().map(String::from).collect()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// File the configuration was read from; `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub scan: ScanConfig,
}
