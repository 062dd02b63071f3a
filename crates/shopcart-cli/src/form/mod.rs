//! The form: field state, flash message, and the operation handlers.
//!
//! This is the terminal rendition of the service's admin form. The state
//! module holds the five named fields; the controller issues one REST
//! call per operation and applies the form's display contract to the
//! outcome.

mod controller;
mod state;

pub use controller::FormController;
pub use state::{FormField, FormState};
