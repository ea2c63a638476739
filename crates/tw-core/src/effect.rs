//! Effects that a special item command can trigger.

use serde::{Deserialize, Serialize};

use crate::id::{ItemId, LocationId};

/// A composable world change run when an item command's preconditions hold.
///
/// Effects are plain data; the engine crate interprets them. Each one reports
/// whether it ends the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Put an item into the inventory unless it is already held.
    AddToInventory {
        /// Item to add.
        item: ItemId,
        /// Text shown when the item is added.
        success: String,
        /// Text shown when the item was already held.
        already_held: String,
    },
    /// Show some text.
    Describe {
        /// Text to show.
        text: String,
    },
    /// Remove an item from the inventory, or else from the current location.
    Destroy {
        /// Item to remove.
        item: ItemId,
        /// Text shown when something was removed.
        text: String,
    },
    /// Place an item into a location.
    CreateAt {
        /// Item to place.
        item: ItemId,
        /// Text shown after placing.
        text: String,
        /// Target location; the player's current location when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<LocationId>,
    },
    /// Show a closing message and end the game.
    EndGame {
        /// Closing message.
        message: String,
    },
    /// Run several effects in order.
    Sequence {
        /// Steps to run. Every step runs, even after one ends the game.
        steps: Vec<Effect>,
    },
}

impl Effect {
    /// Shorthand for [`Effect::AddToInventory`].
    pub fn add_to_inventory(
        item: ItemId,
        success: impl Into<String>,
        already_held: impl Into<String>,
    ) -> Self {
        Self::AddToInventory {
            item,
            success: success.into(),
            already_held: already_held.into(),
        }
    }

    /// Shorthand for [`Effect::Describe`].
    pub fn describe(text: impl Into<String>) -> Self {
        Self::Describe { text: text.into() }
    }

    /// Shorthand for [`Effect::Destroy`].
    pub fn destroy(item: ItemId, text: impl Into<String>) -> Self {
        Self::Destroy {
            item,
            text: text.into(),
        }
    }

    /// Create an item in whatever location the player is standing in.
    pub fn create(item: ItemId, text: impl Into<String>) -> Self {
        Self::CreateAt {
            item,
            text: text.into(),
            location: None,
        }
    }

    /// Create an item in a specific location.
    pub fn create_at(item: ItemId, text: impl Into<String>, location: LocationId) -> Self {
        Self::CreateAt {
            item,
            text: text.into(),
            location: Some(location),
        }
    }

    /// Shorthand for [`Effect::EndGame`].
    pub fn end_game(message: impl Into<String>) -> Self {
        Self::EndGame {
            message: message.into(),
        }
    }

    /// Combine several effects into one [`Effect::Sequence`].
    pub fn sequence(steps: impl IntoIterator<Item = Effect>) -> Self {
        Self::Sequence {
            steps: steps.into_iter().collect(),
        }
    }
}
