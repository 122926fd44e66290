//! Configuration types for CRUD da Justica

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory created under the platform data dir
pub const APP_DIR_NAME: &str = "crud-da-justica";

/// Default data file name
pub const HERO_DATA_FILE: &str = "heroData.json";

/// Which storage backend the host wires behind the repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// JSON lines file, persisted across runs
    #[default]
    Json,
    /// Growable array, lost when the process exits
    Memory,
}

impl std::str::FromStr for BackendKind {
    type Err = crate::JusticaError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | "file" => Ok(Self::Json),
            "memory" | "virtual" => Ok(Self::Memory),
            other => Err(crate::JusticaError::Config(format!(
                "Unknown backend '{}'. Expected one of: json, memory",
                other
            ))),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Application configuration (config.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: BackendKind,

    /// Data file for the JSON backend. Defaults to the platform data dir.
    #[serde(default)]
    pub hero_data_file: Option<PathBuf>,

    /// Slots reserved up front by the memory backend
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_initial_capacity() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            hero_data_file: None,
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` when given, else from the default location.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/crud-da-justica/config.json`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join("config.json"))
    }

    /// The data file to open: configured path, or the platform default
    pub fn data_file_path(&self) -> crate::Result<PathBuf> {
        if let Some(path) = &self.hero_data_file {
            return Ok(path.clone());
        }

        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME).join(HERO_DATA_FILE))
            .ok_or_else(|| {
                crate::JusticaError::Config(
                    "No platform data directory; set heroDataFile".to_string(),
                )
            })
    }
}
