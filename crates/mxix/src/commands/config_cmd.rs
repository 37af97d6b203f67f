//! Config subcommand handlers.

use std::fmt::Write;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Format config for display, masking the plaintext password.
fn format_config_redacted(cfg: &Config) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "data_dir = \"{}\"", cfg.resolved_data_dir().display());
    let _ = writeln!(out, "key_policy = \"{}\"", cfg.key_policy);
    let _ = writeln!(out);
    let _ = writeln!(out, "[admin]");
    if cfg.admin.password.is_some() {
        let _ = writeln!(out, "password = \"****\"");
    }
    if let Some(ref env) = cfg.admin.password_env {
        let _ = writeln!(out, "password_env = \"{env}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = write!(out, "color = \"{}\"", cfg.defaults.color);

    out
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            output::print_output(&format_config_redacted(&cfg), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            let path = config::config_path(global).display().to_string();
            output::print_output(&path, global.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            let path = config::config_path(global);
            // Edit the file's own contents, not the env-layered view.
            let mut cfg = if path.exists() {
                toml::from_str(&std::fs::read_to_string(&path)?).map_err(|e| {
                    CliError::Validation {
                        field: "config".into(),
                        reason: format!("{}: {e}", path.display()),
                    }
                })?
            } else {
                Config::default()
            };
            cfg.set_value(&key, &value)?;
            config::save_config_to(&cfg, &path)?;
            output::print_status(&format!("Set {key} in {}", path.display()), global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_plaintext_password() {
        let mut cfg = Config::default();
        cfg.set_value("admin.password", "hunter2").ok();
        cfg.set_value("data_dir", "/srv/mxix").ok();
        let shown = format_config_redacted(&cfg);
        assert!(shown.contains("password = \"****\""));
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("data_dir = \"/srv/mxix\""));
    }
}
