//! Interactive console handler.
//!
//! A small read-eval loop over the same form controller the one-shot
//! commands use. Fields are edited with `set`, then operations run
//! against whatever the form currently holds, just like clicking the
//! buttons on the web page.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::form::{FormController, FormField};
use crate::presentation::render_form;
use crate::utils::input::prompt_line;

use super::print_outcome;

const HELP: &str = "\
Commands:
  set <field> <value>   set a form field (customer_id, product_id, name, quantity, price)
  show                  print the current form fields
  create                create the item held in the form
  update                update the item held in the form
  retrieve              retrieve the cart or item named by the id fields
  delete                delete the cart or item named by the id fields
  checkout              check out the cart or item named by the id fields
  search                search with the name, quantity, and price fields as filters
  clear                 reset every field
  help                  show this help
  quit                  leave the console";

/// Run the interactive console until `quit` or end of input.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let mut form = FormController::new(ctx.api());
    println!("ShopCart console. Type 'help' for commands.");

    loop {
        let Some(line) = prompt_line("shopcart>")? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let mut parts = line.splitn(3, ' ');
        let command = parts.next().unwrap_or_default();

        match command {
            "set" => {
                let field = parts.next().unwrap_or_default();
                let value = parts.next().unwrap_or_default();
                match field.parse::<FormField>() {
                    Ok(field) => form.state_mut().set(field, value),
                    Err(message) => println!("{message}"),
                }
            }
            "show" => print!("{}", render_form(form.state())),
            "create" => {
                form.create().await;
                print_outcome(&form);
            }
            "update" => {
                form.update().await;
                print_outcome(&form);
            }
            "retrieve" => {
                form.retrieve().await;
                print_outcome(&form);
            }
            "delete" => {
                form.delete().await;
                print_outcome(&form);
            }
            "checkout" => {
                form.checkout().await;
                print_outcome(&form);
            }
            "search" => {
                form.search().await;
                print_outcome(&form);
            }
            "clear" => form.clear(),
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}', type 'help' for commands"),
        }
    }

    Ok(())
}
