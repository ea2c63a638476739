//! Bundled stories for Talewright.
//!
//! Stories are assembled in code against the [`tw_core`] builder API. Any of
//! them can be written out as JSON with [`tw_core::Story::to_json`] and used
//! as a starting point for a hand-authored story file.

mod castle;

pub use castle::action_castle;
