//! Application module: the controller state the TUI draws and the runtime
//! mutates.
//!
//! `App` lives in `app::model`; the add-song form in `app::form`.

mod form;
mod model;

pub use form::*;
pub use model::*;
