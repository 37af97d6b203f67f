//! `mxix reset`: restore the built-in content.

use crate::error::CliError;

use super::{Context, util};

pub fn handle(ctx: &Context) -> Result<(), CliError> {
    ctx.require_admin()?;
    if !util::confirm(
        "reset",
        "Restore all locations, services, and stats to the built-in defaults?",
        ctx.yes,
    )? {
        return Ok(());
    }
    ctx.store.reset_to_defaults();
    ctx.status("Content reset to defaults");
    Ok(())
}
