//! Output formatting for the CLI.

mod results;
mod tables;

pub use results::{render_form, render_results};
pub use tables::truncate_string;
