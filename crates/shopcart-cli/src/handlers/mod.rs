//! Command handlers.
//!
//! Each handler builds a form controller, runs one operation, and prints
//! the resulting form the way the web page would show it: the fields,
//! the results table when a search produced one, and the flash message.

pub mod checkout;
pub mod console;
pub mod create;
pub mod delete;
pub mod retrieve;
pub mod search;
pub mod update;

use crate::form::FormController;
use crate::presentation::{render_form, render_results};

/// Print the controller's fields, results, and flash message.
pub(crate) fn print_outcome(form: &FormController) {
    print!("{}", render_form(form.state()));
    if !form.results().is_empty() {
        println!();
        print!("{}", render_results(form.results()));
    }
    if !form.flash().is_empty() {
        println!();
        println!("{}", form.flash());
    }
}
