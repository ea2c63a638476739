//! Intent classification and target matching.

mod intent;
mod matching;

pub use intent::{Intent, classify, normalize, resolve_direction, split_sequence};
pub use matching::{inventory_matches, location_match, special_command};
