use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::backend::DEFAULT_BACKEND_URL;
use crate::errors::AppError;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";
const BACKEND_URL_VAR: &str = "BILLSPLIT_BACKEND_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, AppError> {
        let base = dirs::config_dir()
            .map(|dir| dir.join("billsplit"))
            .ok_or_else(|| AppError::Config("no configuration directory available".into()))?;
        Self::from_base(base)
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Result<Self, AppError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, AppError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Loads the stored configuration, then applies the environment
    /// override for the backend origin.
    pub fn load(&self) -> Result<Config, AppError> {
        let mut config = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)?
        } else {
            Config::default()
        };
        if let Ok(url) = std::env::var(BACKEND_URL_VAR) {
            if url.trim().is_empty() {
                warn!("{BACKEND_URL_VAR} is set but empty, keeping {}", config.backend_url);
            } else {
                config.backend_url = url;
            }
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_dir(path: &Path) -> Result<(), AppError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), AppError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_the_default() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            backend_url: "http://10.0.0.5:8000".into(),
        };
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.backend_url, "http://10.0.0.5:8000");
        assert!(manager.path().exists());
    }

    #[test]
    fn environment_variable_overrides_the_file() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        manager
            .save(&Config {
                backend_url: "http://from-file:8000".into(),
            })
            .unwrap();

        std::env::set_var(BACKEND_URL_VAR, "http://from-env:8000");
        let loaded = manager.load().unwrap();
        std::env::remove_var(BACKEND_URL_VAR);

        assert_eq!(loaded.backend_url, "http://from-env:8000");
    }
}
