use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::{ItemId, LocationId};
use crate::precondition::Precondition;

/// A directed, named edge from one location to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Direction name the player uses to travel this edge.
    pub direction: String,
    /// Where the edge leads.
    pub target: LocationId,
    /// Optional text shown while travelling.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub travel_description: String,
}

/// An obstacle gating one direction of a location.
///
/// A block never removes the connection; it only stops traversal while its
/// preconditions are unmet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Text shown when the player runs into the obstacle.
    pub description: String,
    /// Preconditions that lift the block once all of them hold.
    #[serde(default)]
    pub preconditions: Vec<Precondition>,
}

/// A place the player can visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Short name of the location.
    pub name: String,
    /// Text shown when the player arrives or looks around.
    pub description: String,
    /// Whether entering this location ends the game.
    #[serde(default)]
    pub terminal: bool,
    /// Outgoing connections, in the order they were first registered.
    #[serde(default)]
    pub exits: Vec<Exit>,
    /// Items lying here, in the order they were placed.
    #[serde(default)]
    pub items: Vec<ItemId>,
    /// Obstacles keyed by direction name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub blocks: BTreeMap<String, Block>,
    /// Whether the player has been here.
    #[serde(default)]
    pub visited: bool,
}

impl Location {
    /// Create a non-terminal location.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            terminal: false,
            exits: Vec::new(),
            items: Vec::new(),
            blocks: BTreeMap::new(),
            visited: false,
        }
    }

    /// Mark the location as ending the game on arrival.
    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    /// Find the exit with the given direction name.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }

    /// Whether the item lies here.
    pub fn has_item(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// The block registered on a direction, if any.
    pub fn block(&self, direction: &str) -> Option<&Block> {
        self.blocks.get(direction)
    }

    /// Insert or overwrite an exit. An overwritten exit keeps its position.
    pub(crate) fn set_exit(&mut self, exit: Exit) {
        match self.exits.iter_mut().find(|e| e.direction == exit.direction) {
            Some(existing) => *existing = exit,
            None => self.exits.push(exit),
        }
    }

    pub(crate) fn remove_item(&mut self, item: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| *i != item);
        self.items.len() != before
    }
}
