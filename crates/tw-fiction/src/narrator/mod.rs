//! Narrator system for generating descriptive text.

mod output;
mod templates;

pub use output::Narration;
pub use templates::{Narrator, capitalize};
