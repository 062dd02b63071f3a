//! Update command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::form::{FormController, FormState};

use super::print_outcome;

/// Execute the update command.
///
/// Fills the form from the arguments, PUTs the item onto its item-scoped
/// endpoint, and prints the resulting form.
pub async fn execute(ctx: &CliContext, fields: FormState) -> Result<()> {
    let mut form = FormController::new(ctx.api());
    *form.state_mut() = fields;

    form.update().await;
    print_outcome(&form);
    Ok(())
}
