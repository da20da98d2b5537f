//! UI Components
//!
//! Presentation layer: renders store state and dispatches transitions.

mod stats_bar;
mod todo_form;
mod todo_list;
mod todo_row;

pub use stats_bar::*;
pub use todo_form::*;
pub use todo_list::*;
pub use todo_row::*;
