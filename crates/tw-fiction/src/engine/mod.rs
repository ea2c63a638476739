//! Scripted behavior: precondition checks, effect execution, and item
//! command invocation.

mod action;
mod effect;
mod precondition;

pub use action::{invoke, list_commands};
pub use effect::apply;
pub use precondition::{PreconditionEngine, Reporting};
