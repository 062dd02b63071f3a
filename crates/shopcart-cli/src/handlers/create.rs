//! Create command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::form::{FormController, FormState};

use super::print_outcome;

/// Execute the create command.
///
/// Fills the form from the arguments, posts the item into the customer's
/// cart, and prints the resulting form.
pub async fn execute(ctx: &CliContext, fields: FormState) -> Result<()> {
    let mut form = FormController::new(ctx.api());
    *form.state_mut() = fields;

    form.create().await;
    print_outcome(&form);
    Ok(())
}
