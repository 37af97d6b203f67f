//! CLI configuration, a thin wrapper around `mxix_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--config, --data-dir, --output, --color).

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use mxix_config::{Config, resolve_admin_password, save_config_to};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Config file path: `--config` / `MXIX_CONFIG`, else the platform default.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(mxix_config::config_path)
}

/// Load the config file named by the global flags, layered with env vars,
/// then apply `--data-dir`.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = mxix_config::load_config_from(&config_path(global))?;
    if let Some(ref dir) = global.data_dir {
        cfg.data_dir = Some(dir.clone());
    }
    Ok(cfg)
}

/// Output format: flag > config `defaults.output` > table.
pub fn output_format(global: &GlobalOpts, cfg: &Config) -> OutputFormat {
    global
        .output
        .or_else(|| parse_value_enum(&cfg.defaults.output))
        .unwrap_or(OutputFormat::Table)
}

/// Color mode: flag > config `defaults.color` > auto.
pub fn color_mode(global: &GlobalOpts, cfg: &Config) -> ColorMode {
    global
        .color
        .or_else(|| parse_value_enum(&cfg.defaults.color))
        .unwrap_or(ColorMode::Auto)
}

fn parse_value_enum<T: ValueEnum>(value: &str) -> Option<T> {
    T::from_str(value, true).ok()
}
