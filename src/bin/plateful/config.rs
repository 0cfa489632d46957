use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration stored in plateful.toml next to where the CLI runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatefulConfig {
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Path of the JSON store file.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "plateful.json".to_string()
}

impl PlatefulConfig {
    /// Loads plateful.toml from the current directory when present, falling
    /// back to defaults. An explicit `--store` path always wins over both.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("plateful.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn store_path(&self, override_path: Option<&str>) -> PathBuf {
        PathBuf::from(override_path.unwrap_or(&self.store.path))
    }
}
