use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::io;

/// Settings that feed the scaffolder. Every field can come from a JSON
/// file passed with `--config`; missing fields fall back to the built-ins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldConfig {
    #[serde(default = "default_skills_root")]
    pub skills_root: PathBuf,

    #[serde(default = "default_author")]
    pub author: String,

    #[serde(default = "default_license")]
    pub license: String,

    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            skills_root: default_skills_root(),
            author: default_author(),
            license: default_license(),
            version: default_version(),
        }
    }
}

/// Per-invocation overrides from CLI flags. `None` keeps the loaded value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub skills_root: Option<PathBuf>,
    pub author: Option<String>,
    pub license: Option<String>,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_skills_root() -> PathBuf {
    PathBuf::from("skills")
}

fn default_author() -> String {
    "Dmytro Zarezenko".to_string()
}

fn default_license() -> String {
    "MIT".to_string()
}

fn default_version() -> String {
    "0.1".to_string()
}

// =============================================================================
// Loading
// =============================================================================

/// Load config from an explicit JSON file.
pub fn load_config_from_file(path: &Path) -> Result<ScaffoldConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Built-ins, then the optional file, then CLI overrides.
pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<ScaffoldConfig> {
    let mut config = match file {
        Some(path) => load_config_from_file(path)?,
        None => ScaffoldConfig::default(),
    };

    if let Some(root) = overrides.skills_root {
        config.skills_root = root;
    }
    if let Some(author) = overrides.author {
        config.author = author;
    }
    if let Some(license) = overrides.license {
        config.license = license;
    }

    Ok(config)
}
