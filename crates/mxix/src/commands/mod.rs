//! Command dispatch: bridges CLI args -> content store calls -> output formatting.

pub mod admin;
pub mod config_cmd;
pub mod locations;
pub mod reset;
pub mod services;
pub mod stats;
pub mod util;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use mxix_core::{AdminGate, ContentStore, SlotStorage};

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Everything a content command needs, resolved once per invocation.
pub struct Context {
    pub store: ContentStore,
    pub gate: AdminGate,
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    pub yes: bool,
    password: Option<SecretString>,
}

impl Context {
    pub fn open(cfg: &Config, global: &GlobalOpts) -> Self {
        let storage: Arc<dyn SlotStorage> = Arc::new(cfg.open_storage());
        let store = ContentStore::open(Arc::clone(&storage), cfg.store_options());
        let gate = AdminGate::new(storage, config::resolve_admin_password(&cfg.admin));

        Self {
            store,
            gate,
            output: config::output_format(global, cfg),
            color: output::should_color(config::color_mode(global, cfg)),
            quiet: global.quiet,
            yes: global.yes,
            password: global.password.clone().map(SecretString::from),
        }
    }

    /// The `--password` flag, if one was given.
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Gate for mutations: a matching `--password`, or an open session.
    pub fn require_admin(&self) -> Result<(), CliError> {
        match self.password() {
            Some(pw) if self.gate.verify(pw) => Ok(()),
            Some(_) => Err(CliError::AuthFailed),
            None if self.gate.is_authenticated() => Ok(()),
            None => Err(CliError::AuthRequired),
        }
    }

    pub fn print(&self, rendered: &str) {
        output::print_output(rendered, self.quiet);
    }

    pub fn status(&self, message: &str) {
        output::print_status(message, self.quiet);
    }
}

/// Dispatch a content command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &Context) -> Result<(), CliError> {
    match cmd {
        Command::Locations(args) => locations::handle(ctx, args),
        Command::Services(args) => services::handle(ctx, args),
        Command::Stats(args) => stats::handle(ctx, args).await,
        Command::Admin(args) => admin::handle(ctx, args),
        Command::Reset => reset::handle(ctx),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
