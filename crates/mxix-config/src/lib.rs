//! Configuration for the `mxix` CLI.
//!
//! A TOML file layered under `MXIX_` environment variables, plus admin
//! password resolution and translation to `mxix_core::StoreOptions`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use mxix_core::{DEFAULT_ADMIN_PASSWORD, FileStorage, KeyPolicy, StoreOptions};

/// Fallback env var for the admin password when `admin.password_env` is
/// unset or names a variable that isn't set.
pub const ADMIN_PASSWORD_ENV: &str = "MXIX_ADMIN_PASSWORD";

const OUTPUT_FORMATS: &[&str] = &["table", "json", "json-compact", "yaml", "plain"];
const COLOR_MODES: &[&str] = &["auto", "always", "never"];

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("unknown config key '{key}'")]
    UnknownKey { key: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Directory holding the persisted content slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// What to do with colliding ids on add/update.
    #[serde(default)]
    pub key_policy: KeyPolicy,

    #[serde(default)]
    pub admin: AdminSettings,

    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AdminSettings {
    /// Admin password (plaintext, prefer `password_env`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Environment variable name containing the admin password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

impl Config {
    /// Data directory from config, or the platform default.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(data_dir)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::default().with_key_policy(self.key_policy)
    }

    /// File-backed slot storage rooted at [`resolved_data_dir`](Self::resolved_data_dir).
    pub fn open_storage(&self) -> FileStorage {
        FileStorage::new(self.resolved_data_dir())
    }

    /// Set a dotted key (e.g. `admin.password_env`) from its string form.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "data_dir" => self.data_dir = Some(PathBuf::from(value)),
            "key_policy" => {
                self.key_policy = value.parse().map_err(|_| ConfigError::Validation {
                    field: key.into(),
                    reason: format!("expected 'permissive' or 'unique', got '{value}'"),
                })?;
            }
            "admin.password" => self.admin.password = Some(value.into()),
            "admin.password_env" => self.admin.password_env = Some(value.into()),
            "defaults.output" => self.defaults.output = one_of(key, value, OUTPUT_FORMATS)?,
            "defaults.color" => self.defaults.color = one_of(key, value, COLOR_MODES)?,
            other => return Err(ConfigError::UnknownKey { key: other.into() }),
        }
        Ok(())
    }
}

fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<String, ConfigError> {
    if allowed.contains(&value) {
        Ok(value.into())
    } else {
        Err(ConfigError::Validation {
            field: field.into(),
            reason: format!("expected one of {}, got '{value}'", allowed.join(", ")),
        })
    }
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "mx-ix", "mxix")
}

fn home_fallback(parts: &[&str]) -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.extend(parts);
    p
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || home_fallback(&[".config", "mxix", "config.toml"]),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default directory for persisted content slots.
pub fn data_dir() -> PathBuf {
    project_dirs().map_or_else(
        || home_fallback(&[".local", "share", "mxix"]),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load config from `path` (if it exists) layered under `MXIX_` env vars.
///
/// Nested keys use a double underscore: `MXIX_ADMIN__PASSWORD_ENV`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("MXIX_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Admin password resolution ───────────────────────────────────────

/// Resolve the admin password from the process environment.
pub fn resolve_admin_password(admin: &AdminSettings) -> SecretString {
    resolve_admin_password_with(admin, |name| std::env::var(name).ok())
}

/// Resolution chain with an explicit env lookup:
///
/// 1. `admin.password_env` → env var lookup
/// 2. `MXIX_ADMIN_PASSWORD`
/// 3. Plaintext `admin.password`
/// 4. The built-in default
pub fn resolve_admin_password_with(
    admin: &AdminSettings,
    env: impl Fn(&str) -> Option<String>,
) -> SecretString {
    if let Some(val) = admin.password_env.as_deref().and_then(&env) {
        return SecretString::from(val);
    }
    if let Some(val) = env(ADMIN_PASSWORD_ENV) {
        return SecretString::from(val);
    }
    if let Some(ref pw) = admin.password {
        return SecretString::from(pw.clone());
    }
    SecretString::from(DEFAULT_ADMIN_PASSWORD.to_owned())
}
