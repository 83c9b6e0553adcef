use crate::error::{Result, StockroomError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILENAME: &str = "products.json";

/// Configuration for stockroom, stored as config.json next to the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockroomConfig {
    /// Filename of the catalog file (e.g. "products.json")
    #[serde(default = "default_data_filename")]
    pub data_filename: String,
}

fn default_data_filename() -> String {
    DEFAULT_DATA_FILENAME.to_string()
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            data_filename: DEFAULT_DATA_FILENAME.to_string(),
        }
    }
}

impl StockroomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockroomError::Io)?;
        let config: StockroomConfig =
            serde_json::from_str(&content).map_err(StockroomError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockroomError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockroomError::Serialization)?;
        fs::write(config_path, content).map_err(StockroomError::Io)?;
        Ok(())
    }

    /// Resolve the catalog file path inside `data_dir`.
    pub fn data_file<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.data_filename)
    }
}

/// The user-wide default directory for catalog data, per platform
/// conventions (e.g. `~/.local/share/stockroom` on Linux).
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "stockroom").map(|dirs| dirs.data_dir().to_path_buf())
}
