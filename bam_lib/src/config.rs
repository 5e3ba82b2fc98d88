//! Subscription key storage.
//!
//! Keys live in a small TOML file with a single `[api_keys]` table holding one
//! entry per service. The file is created with empty values on first use and
//! rewritten in full on every update.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use bam_api::Service;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the key file location.
pub const CONFIG_ENV_VAR: &str = "BAM_CONFIG";
/// Key file used when [`CONFIG_ENV_VAR`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "bam.toml";

/// Errors from reading or writing the key file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// One subscription key per service. All three are always present; an empty
/// string means "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeys {
    #[serde(default)]
    pub marche_adjud_des_bt: String,
    #[serde(default)]
    pub marche_des_changes: String,
    #[serde(default)]
    pub marche_obligataire: String,
}

impl ApiKeys {
    pub fn get(&self, service: Service) -> &str {
        match service {
            Service::TreasuryBillAuctions => &self.marche_adjud_des_bt,
            Service::ForeignExchange => &self.marche_des_changes,
            Service::BondMarket => &self.marche_obligataire,
        }
    }

    pub fn set(&mut self, service: Service, key: &str) {
        let slot = match service {
            Service::TreasuryBillAuctions => &mut self.marche_adjud_des_bt,
            Service::ForeignExchange => &mut self.marche_des_changes,
            Service::BondMarket => &mut self.marche_obligataire,
        };
        *slot = key.to_string();
    }

    /// Applies an update, skipping empty values.
    pub fn apply(&mut self, update: &KeyUpdate) {
        for service in Service::ALL {
            let key = update.get(service);
            if !key.is_empty() {
                self.set(service, key);
            }
        }
    }
}

impl fmt::Display for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for service in Service::ALL {
            writeln!(f, "{} = \"{}\"", service.config_key(), self.get(service))?;
        }
        Ok(())
    }
}

/// Keys to change. Empty fields leave the stored key untouched.
#[derive(Debug, Clone, Default)]
pub struct KeyUpdate {
    pub marche_adjud_des_bt: String,
    pub marche_des_changes: String,
    pub marche_obligataire: String,
}

impl KeyUpdate {
    fn get(&self, service: Service) -> &str {
        match service {
            Service::TreasuryBillAuctions => &self.marche_adjud_des_bt,
            Service::ForeignExchange => &self.marche_des_changes,
            Service::BondMarket => &self.marche_obligataire,
        }
    }

    pub fn is_empty(&self) -> bool {
        Service::ALL.iter().all(|s| self.get(*s).is_empty())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api_keys: ApiKeys,
}

/// File-backed key store. Not synchronized: callers serialize updates.
#[derive(Debug)]
pub struct KeyStore {
    path: PathBuf,
    keys: ApiKeys,
}

impl KeyStore {
    /// Location from `$BAM_CONFIG`, falling back to `bam.toml` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Opens the key file, creating it with empty keys if it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        initiate_config_file(&path)?;
        let keys = load_keys(&path)?;
        Ok(Self { path, keys })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn keys(&self) -> &ApiKeys {
        &self.keys
    }

    /// Writes the non-empty keys of `update` to disk and reloads the store.
    pub fn update(&mut self, update: &KeyUpdate) -> Result<&ApiKeys, ConfigError> {
        let mut keys = load_keys(&self.path)?;
        keys.apply(update);
        write_config(&self.path, &ConfigFile { api_keys: keys })?;
        self.keys = load_keys(&self.path)?;
        tracing::info!("Updated subscription keys in {}", self.path.display());
        Ok(&self.keys)
    }

    /// Re-reads the key file, discarding the in-memory copy.
    pub fn reload(&mut self) -> Result<&ApiKeys, ConfigError> {
        self.keys = load_keys(&self.path)?;
        Ok(&self.keys)
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn initiate_config_file(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    tracing::info!("Creating empty key file at {}", path.display());
    write_config(path, &ConfigFile::default())
}

fn load_keys(path: &Path) -> Result<ApiKeys, ConfigError> {
    let content = fs::read_to_string(path).map_err(io_error(path))?;
    let file: ConfigFile = toml::from_str(&content)?;
    Ok(file.api_keys)
}

fn write_config(path: &Path, config: &ConfigFile) -> Result<(), ConfigError> {
    let content = toml::to_string(config)?;
    fs::write(path, content).map_err(io_error(path))
}
