//! Search command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::form::FormController;

use super::print_outcome;

/// Execute the search command.
///
/// The name and quantity filters apply when given; the raw price value
/// participates as a flag (the literal `true` adds `price=true`). Prints
/// the results table and the form, which holds the first result.
pub async fn execute(
    ctx: &CliContext,
    name: Option<String>,
    quantity: Option<String>,
    price: String,
) -> Result<()> {
    let mut form = FormController::new(ctx.api());
    form.state_mut().name = name.unwrap_or_default();
    form.state_mut().quantity = quantity.unwrap_or_default();
    form.state_mut().price = price;

    form.search().await;
    print_outcome(&form);
    Ok(())
}
