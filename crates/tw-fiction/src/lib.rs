//! Interactive fiction engine for Talewright.
//!
//! Turns one line of player input into world changes and narration. The
//! pieces, from the bottom up: [`GameState`] aggregates the world graph, the
//! inventory and the player's position; the [`engine`] module evaluates
//! preconditions and runs item effects; the [`parser`] classifies raw text
//! into an [`Intent`]; and [`GameSession`] ties them together turn by turn.

/// Session configuration.
pub mod config;
/// Preconditions, effects, and item command invocation.
pub mod engine;
/// Error types for the fiction engine.
pub mod error;
/// Text generation for descriptions and listings.
pub mod narrator;
/// Intent classification and target matching.
pub mod parser;
/// Turn-by-turn session management.
pub mod session;
/// The mutable game state aggregate.
pub mod state;

pub use config::SessionConfig;
pub use error::{FictionError, FictionResult};
pub use narrator::{Narration, Narrator};
pub use parser::{Intent, classify};
pub use session::{GameSession, Turn};
pub use state::GameState;
