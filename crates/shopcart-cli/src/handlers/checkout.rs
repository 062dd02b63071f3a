//! Checkout command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::form::FormController;

use super::print_outcome;

/// Execute the checkout command.
///
/// Hits the `/checkout` suffix of the cart- or item-scoped path, chosen
/// by whether a product identifier was given.
pub async fn execute(ctx: &CliContext, customer_id: String, product_id: String) -> Result<()> {
    let mut form = FormController::new(ctx.api());
    form.state_mut().customer_id = customer_id;
    form.state_mut().product_id = product_id;

    form.checkout().await;
    print_outcome(&form);
    Ok(())
}
