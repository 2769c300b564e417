//! # Application Configuration
//!
//! Settings live in a single YAML file, `settings.yaml`, at the root of the
//! data directory. A missing file is created with defaults on first load.
//!
//! ```yaml
//! invoices_file: invoices.json
//! transactions_file: transactions.json
//! inventory_file: inventory.json
//! currency_suffix: VND
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::DataFiles;

pub const SETTINGS_FILE_NAME: &str = "settings.yaml";

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "MISA_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub invoices_file: String,
    pub transactions_file: String,
    pub inventory_file: String,
    /// Appended to every formatted amount
    pub currency_suffix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let files = DataFiles::default();
        Self {
            invoices_file: files.invoices,
            transactions_file: files.transactions,
            inventory_file: files.inventory,
            currency_suffix: "VND".to_string(),
        }
    }
}

impl AppConfig {
    /// Load settings from `path`, writing the defaults there if it does not exist
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let yaml_content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            let config: AppConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Invalid settings file {}", path.display()))?;
            debug!("Loaded settings from {:?}", path);
            Ok(config)
        } else {
            let config = AppConfig::default();
            config.save(path)?;
            info!("Created default settings at {:?}", path);
            Ok(config)
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let yaml_content = serde_yaml::to_string(self)?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    pub fn data_files(&self) -> DataFiles {
        DataFiles {
            invoices: self.invoices_file.clone(),
            transactions: self.transactions_file.clone(),
            inventory: self.inventory_file.clone(),
        }
    }
}

/// Pick the data directory: an explicit choice (flag or environment) first,
/// then the platform data directory, then `./misa-data`.
pub fn resolve_data_directory(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }

    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("misa"),
        None => PathBuf::from("misa-data"),
    }
}

/// Default location of the settings file for a data directory
pub fn settings_path(data_directory: &Path) -> PathBuf {
    data_directory.join(SETTINGS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = settings_path(temp_dir.path());

        let config = AppConfig::load_or_create(&path).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("invoices_file: invoices.json"));
        assert!(written.contains("currency_suffix: VND"));
    }

    #[test]
    fn test_load_existing_partial_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = settings_path(temp_dir.path());
        fs::write(&path, "currency_suffix: USD\ninventory_file: kho.json\n").unwrap();

        let config = AppConfig::load_or_create(&path).unwrap();

        assert_eq!(config.currency_suffix, "USD");
        assert_eq!(config.inventory_file, "kho.json");
        // Missing keys fall back to defaults
        assert_eq!(config.invoices_file, "invoices.json");
        assert_eq!(config.data_files().inventory, "kho.json");
    }

    #[test]
    fn test_invalid_settings_are_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = settings_path(temp_dir.path());
        fs::write(&path, "currency_suffix: [unclosed").unwrap();

        let err = AppConfig::load_or_create(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid settings file"));
    }

    #[test]
    fn test_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.yaml");
        let config = AppConfig {
            currency_suffix: "EUR".to_string(),
            ..AppConfig::default()
        };

        config.save(&path).unwrap();

        assert_eq!(AppConfig::load_or_create(&path).unwrap(), config);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_resolve_data_directory_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/ledger");
        assert_eq!(resolve_data_directory(Some(explicit.clone())), explicit);

        let fallback = resolve_data_directory(None);
        assert!(fallback.ends_with("misa") || fallback.ends_with("misa-data"));
    }
}
