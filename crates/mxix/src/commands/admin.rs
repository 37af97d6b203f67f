//! Admin session handlers.

use std::io::IsTerminal;

use serde::Serialize;

use crate::cli::{AdminArgs, AdminCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Serialize)]
struct SessionStatus {
    authenticated: bool,
}

fn prompt_password() -> Result<String, CliError> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "no --password given and stdin is not a terminal".into(),
        });
    }
    Ok(rpassword::prompt_password("Admin password: ")?)
}

pub fn handle(ctx: &Context, args: AdminArgs) -> Result<(), CliError> {
    match args.command {
        AdminCommand::Login => {
            let candidate = match ctx.password() {
                Some(pw) => pw.to_owned(),
                None => prompt_password()?,
            };
            ctx.gate.login(&candidate)?;
            ctx.status("Admin session opened");
            Ok(())
        }

        AdminCommand::Logout => {
            ctx.gate.logout();
            ctx.status("Admin session closed");
            Ok(())
        }

        AdminCommand::Status => {
            let status = SessionStatus {
                authenticated: ctx.gate.is_authenticated(),
            };
            let out = output::render_single(
                ctx.output,
                &status,
                |s| {
                    if s.authenticated {
                        "Logged in".into()
                    } else {
                        "Logged out".into()
                    }
                },
                |s| s.authenticated.to_string(),
            );
            ctx.print(&out);
            Ok(())
        }
    }
}
