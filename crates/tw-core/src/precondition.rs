//! Named predicates that gate item actions and movement blocks.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::{ItemId, LocationId};

/// A named boolean predicate evaluated against the current game state.
///
/// A set of preconditions is satisfied when every member is satisfied; the
/// empty set is always satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrecondition", into = "RawPrecondition")]
pub enum Precondition {
    /// The item is in the player's inventory.
    InventoryContains(ItemId),
    /// The player stands in exactly this location.
    InLocation(LocationId),
    /// The item lies in the current location. Failure is reported.
    LocationHasItem(ItemId),
    /// The item lies in the current location. Failure is not reported.
    LocationHasItemSilent(ItemId),
    /// A predicate kind this engine does not know. Always satisfied.
    Unrecognized {
        /// The kind name as authored.
        kind: String,
        /// The target index as authored, kept so the story survives a save.
        target: Option<usize>,
    },
}

impl Precondition {
    /// Build a precondition from its authored kind name and target index.
    ///
    /// Unknown kinds yield [`Precondition::Unrecognized`]; known kinds without a
    /// target are rejected.
    pub fn from_kind(kind: &str, target: Option<usize>) -> Result<Self, CoreError> {
        let require = |target: Option<usize>| {
            target.ok_or_else(|| {
                CoreError::InvalidPrecondition(format!("`{kind}` requires a target"))
            })
        };
        Ok(match kind {
            "inventory_contains" => Self::InventoryContains(ItemId(require(target)?)),
            "in_location" => Self::InLocation(LocationId(require(target)?)),
            "location_has_item" => Self::LocationHasItem(ItemId(require(target)?)),
            "location_has_item_silent" => Self::LocationHasItemSilent(ItemId(require(target)?)),
            other => Self::Unrecognized {
                kind: other.to_string(),
                target,
            },
        })
    }

    /// The authored kind name of this predicate.
    pub fn kind(&self) -> &str {
        match self {
            Self::InventoryContains(_) => "inventory_contains",
            Self::InLocation(_) => "in_location",
            Self::LocationHasItem(_) => "location_has_item",
            Self::LocationHasItemSilent(_) => "location_has_item_silent",
            Self::Unrecognized { kind, .. } => kind,
        }
    }

    fn target(&self) -> Option<usize> {
        match self {
            Self::InventoryContains(item)
            | Self::LocationHasItem(item)
            | Self::LocationHasItemSilent(item) => Some(item.index()),
            Self::InLocation(location) => Some(location.index()),
            Self::Unrecognized { target, .. } => *target,
        }
    }
}

/// Something that can decide whether a precondition set currently holds.
///
/// The world graph consults this when checking movement blocks; the engine
/// crate supplies the implementation backed by live game state.
pub trait Conditions {
    /// Returns true when every precondition in the set is satisfied.
    fn satisfied(&mut self, preconditions: &[Precondition]) -> bool;
}

/// Wire form of a precondition: `{"kind": "...", "target": n}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPrecondition {
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<usize>,
}

impl TryFrom<RawPrecondition> for Precondition {
    type Error = CoreError;

    fn try_from(raw: RawPrecondition) -> Result<Self, Self::Error> {
        Precondition::from_kind(&raw.kind, raw.target)
    }
}

impl From<Precondition> for RawPrecondition {
    fn from(precondition: Precondition) -> Self {
        Self {
            target: precondition.target(),
            kind: precondition.kind().to_string(),
        }
    }
}
