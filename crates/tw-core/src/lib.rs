//! Core types for Talewright: locations, items, inventory, and the world graph.
//!
//! This crate defines the data model that authored stories are built from.
//! It holds no game logic beyond graph bookkeeping; precondition evaluation,
//! effect execution, and command interpretation live in `tw-fiction`. A
//! [`Story`] can be assembled programmatically or deserialized from JSON.

/// Canonical movement directions and their opposites.
pub mod direction;
/// Scripted effects attached to item commands.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// Arena identifiers for locations and items.
pub mod id;
/// The player's held items.
pub mod inventory;
/// Items and their command tables.
pub mod item;
/// Authoring lint for assembled stories.
pub mod lint;
/// Locations, exits, and blocks.
pub mod location;
/// Named predicates that gate actions and movement.
pub mod precondition;
/// A complete, playable story definition.
pub mod story;
/// The location graph that owns every location and item.
pub mod world;

/// Re-export direction types.
pub use direction::Direction;
/// Re-export effect types.
pub use effect::Effect;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export identifier types.
pub use id::{ItemId, LocationId};
/// Re-export the inventory container.
pub use inventory::Inventory;
/// Re-export item types.
pub use item::{Item, ItemAction};
/// Re-export location types.
pub use location::{Block, Exit, Location};
/// Re-export precondition types.
pub use precondition::{Conditions, Precondition};
/// Re-export the story definition.
pub use story::Story;
/// Re-export the world graph.
pub use world::WorldGraph;
