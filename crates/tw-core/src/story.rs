use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::{ItemId, LocationId};
use crate::world::WorldGraph;

/// A complete story: the assembled world plus where the player begins.
///
/// This is authored content, not a saved game. It carries no record of
/// play beyond whatever the author put into the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Title shown when the story starts.
    pub title: String,
    /// The world graph.
    pub world: WorldGraph,
    /// The location the player starts in.
    pub start: LocationId,
    /// Items the player carries from the start.
    #[serde(default)]
    pub starting_inventory: Vec<ItemId>,
}

impl Story {
    /// Wrap an assembled world. Fails if `start` is not part of it.
    pub fn new(title: impl Into<String>, world: WorldGraph, start: LocationId) -> CoreResult<Self> {
        world.location(start)?;
        Ok(Self {
            title: title.into(),
            world,
            start,
            starting_inventory: Vec::new(),
        })
    }

    /// Hand the player an item at the start of play.
    pub fn give(&mut self, item: ItemId) -> CoreResult<()> {
        self.world.item(item)?;
        if !self.starting_inventory.contains(&item) {
            self.starting_inventory.push(item);
        }
        Ok(())
    }

    /// Check that the start location and starting items exist.
    pub fn validate(&self) -> CoreResult<()> {
        self.world.location(self.start)?;
        for item in &self.starting_inventory {
            self.world.item(*item)?;
        }
        Ok(())
    }

    /// Parse a story from JSON and validate it.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let story: Story = serde_json::from_str(json)?;
        story.validate()?;
        Ok(story)
    }

    /// Serialize the story as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self).map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Effect;
    use crate::item::Item;
    use crate::location::Location;
    use crate::precondition::Precondition;

    fn small_story() -> Story {
        let mut world = WorldGraph::new();
        let cottage = world.add_location(Location::new("Cottage", "A small cottage."));
        let path = world.add_location(Location::new("Garden Path", "A garden path."));
        world.connect(cottage, "out", path, "").unwrap();
        let pole = world
            .add_item_at(Item::new("pole", "a fishing pole"), cottage)
            .unwrap();
        let lamp = world.add_item(Item::new("lamp", "a lamp"));
        world
            .register_action(
                lamp,
                "light lamp",
                Effect::describe("It glows."),
                vec![Precondition::InventoryContains(lamp)],
            )
            .unwrap();
        world
            .add_block(
                path,
                "north",
                "Brambles.",
                vec![Precondition::InventoryContains(pole)],
            )
            .unwrap();

        let mut story = Story::new("Tiny", world, cottage).unwrap();
        story.give(lamp).unwrap();
        story
    }

    #[test]
    fn new_rejects_unknown_start() {
        let err = Story::new("Empty", WorldGraph::new(), LocationId(0)).unwrap_err();
        assert!(matches!(err, CoreError::LocationNotFound(_)));
    }

    #[test]
    fn give_ignores_duplicates() {
        let mut story = small_story();
        let lamp = story.world.find_item("lamp").unwrap();
        story.give(lamp).unwrap();
        assert_eq!(story.starting_inventory, vec![lamp]);
    }

    #[test]
    fn json_preserves_the_whole_story() {
        let story = small_story();
        let json = story.to_json().unwrap();
        let parsed = Story::from_json(&json).unwrap();
        assert_eq!(parsed, story);
    }

    #[test]
    fn from_json_validates_references() {
        let mut story = small_story();
        story.starting_inventory.push(ItemId(99));
        let json = serde_json::to_string(&story).unwrap();
        let err = Story::from_json(&json).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(ItemId(99))));
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        let err = Story::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Format(_)));
    }
}
