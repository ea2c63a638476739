use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a location inside a [`WorldGraph`](crate::WorldGraph).
///
/// Identifiers are arena indices handed out by the world graph; they are only
/// meaningful for the graph that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub usize);

/// Stable identifier of an item inside a [`WorldGraph`](crate::WorldGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub usize);

impl LocationId {
    /// The arena index backing this identifier.
    pub fn index(self) -> usize {
        self.0
    }
}

impl ItemId {
    /// The arena index backing this identifier.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "location#{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_index() {
        assert_eq!(LocationId(3).to_string(), "location#3");
        assert_eq!(ItemId(12).to_string(), "item#12");
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        assert_eq!(serde_json::to_string(&ItemId(7)).unwrap(), "7");
        let id: LocationId = serde_json::from_str("4").unwrap();
        assert_eq!(id, LocationId(4));
    }
}
