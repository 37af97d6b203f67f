//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use mxix_config::ConfigError;
use mxix_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────
    #[error("Admin session required")]
    #[diagnostic(
        code(mxix::auth_required),
        help(
            "Log in with: mxix admin login\n\
             Or pass --password (or MXIX_PASSWORD) for a single command."
        )
    )]
    AuthRequired,

    #[error("Invalid admin password")]
    #[diagnostic(
        code(mxix::auth_failed),
        help(
            "The password comes from admin.password_env, MXIX_ADMIN_PASSWORD,\n\
             or admin.password in the config file, in that order."
        )
    )]
    AuthFailed,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(mxix::not_found),
        help("Run: mxix {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{resource_type} '{identifier}' already exists")]
    #[diagnostic(
        code(mxix::conflict),
        help("IDs must be unique while key_policy is 'unique'. Use update to replace it.")
    )]
    Conflict {
        resource_type: String,
        identifier: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(mxix::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(mxix::config),
        help("Inspect the file with: mxix config show")
    )]
    Config(#[from] ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(mxix::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(mxix::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthRequired | Self::AuthFailed => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            Self::Config(_) | Self::Io(_) | Self::Json(_) => exit_code::GENERAL,
        }
    }

    pub fn not_found(resource_type: &str, identifier: &str) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
            list_command: format!("{resource_type}s list"),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DuplicateKey { collection, id } => CliError::Conflict {
                resource_type: collection,
                identifier: id,
            },
            CoreError::InvalidPassword => CliError::AuthFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::AuthRequired.exit_code(), exit_code::AUTH);
        let missing = CliError::not_found("location", "zzz");
        assert_eq!(missing.exit_code(), exit_code::NOT_FOUND);
        let dup = CoreError::DuplicateKey {
            collection: "service".into(),
            id: "peering".into(),
        };
        assert_eq!(CliError::from(dup).exit_code(), exit_code::CONFLICT);
        let bad_password = CliError::from(CoreError::InvalidPassword);
        assert_eq!(bad_password.exit_code(), exit_code::AUTH);
    }
}
