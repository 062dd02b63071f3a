//! Delete command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::form::FormController;

use super::print_outcome;

/// Execute the delete command.
///
/// An empty product identifier deletes the whole cart; a non-empty one
/// deletes that single item.
pub async fn execute(ctx: &CliContext, customer_id: String, product_id: String) -> Result<()> {
    let mut form = FormController::new(ctx.api());
    form.state_mut().customer_id = customer_id;
    form.state_mut().product_id = product_id;

    form.delete().await;
    print_outcome(&form);
    Ok(())
}
