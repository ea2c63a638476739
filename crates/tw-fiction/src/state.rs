//! The mutable game state: world, inventory, and the player's position.

use tracing::debug;
use tw_core::{Inventory, Item, ItemId, Location, LocationId, Story, WorldGraph};

use crate::error::FictionResult;

/// Everything that changes during play.
///
/// All mutation of item placement goes through this type so that an item is
/// always in at most one container: one location, the inventory, or neither.
#[derive(Debug, Clone)]
pub struct GameState {
    world: WorldGraph,
    inventory: Inventory,
    location: LocationId,
}

impl GameState {
    /// Start play in `start`, which is marked visited.
    pub fn new(mut world: WorldGraph, start: LocationId) -> FictionResult<Self> {
        world.mark_visited(start)?;
        Ok(Self {
            world,
            inventory: Inventory::new(),
            location: start,
        })
    }

    /// Start play from a story, handing over its starting inventory.
    pub fn from_story(story: Story) -> FictionResult<Self> {
        story.validate()?;
        let mut state = Self::new(story.world, story.start)?;
        for item in story.starting_inventory {
            state.give(item)?;
        }
        Ok(state)
    }

    /// The world graph.
    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    /// The player's inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// ID of the location the player is in.
    pub fn location_id(&self) -> LocationId {
        self.location
    }

    /// The location the player is in.
    pub fn current_location(&self) -> FictionResult<&Location> {
        Ok(self.world.location(self.location)?)
    }

    /// Look up an item.
    pub fn item(&self, id: ItemId) -> FictionResult<&Item> {
        Ok(self.world.item(id)?)
    }

    /// Whether the player carries the item, or another item keyed by the
    /// same name.
    pub fn is_in_inventory(&self, item: ItemId) -> bool {
        self.held(item).is_some()
    }

    /// Whether the item, or another item keyed by the same name, lies in the
    /// player's current location.
    pub fn location_has_item(&self, item: ItemId) -> bool {
        self.here(item).is_some()
    }

    /// Items the player can refer to: the current location's items in
    /// placement order, followed by the inventory in insertion order.
    pub fn items_in_scope(&self) -> FictionResult<Vec<ItemId>> {
        let here = self.current_location()?;
        Ok(here
            .items
            .iter()
            .copied()
            .chain(self.inventory.items())
            .collect())
    }

    /// Move an item into the inventory, taking it out of any location.
    pub fn give(&mut self, item: ItemId) -> FictionResult<()> {
        let name = self.world.item(item)?.name.clone();
        if let Some(from) = self.world.detach_item(item) {
            debug!(%item, %from, "item picked up");
        }
        if let Some(displaced) = self.inventory.insert(&name, item) {
            debug!(%displaced, %name, "same-name item displaced from inventory");
        }
        Ok(())
    }

    /// Move an item from the inventory to the current location.
    ///
    /// Returns false if the item was not carried.
    pub fn drop_item(&mut self, item: ItemId) -> FictionResult<bool> {
        if !self.inventory.remove(item) {
            return Ok(false);
        }
        self.place(self.location, item)?;
        Ok(true)
    }

    /// Remove the item keyed by this item's name from play: from the
    /// inventory if carried, otherwise from the current location.
    ///
    /// Returns false if it was in neither.
    pub fn destroy(&mut self, item: ItemId) -> FictionResult<bool> {
        if let Some(held) = self.held(item) {
            return Ok(self.inventory.remove(held));
        }
        match self.here(item) {
            Some(here) => Ok(self.world.remove_item(self.location, here)?),
            None => Ok(false),
        }
    }

    /// Put an item into a location, taking it out of the inventory or any
    /// other location first.
    pub fn create_at(&mut self, item: ItemId, location: LocationId) -> FictionResult<()> {
        self.world.location(location)?;
        self.inventory.remove(item);
        self.place(location, item)
    }

    /// Move the player and mark the destination visited.
    pub fn move_to(&mut self, location: LocationId) -> FictionResult<()> {
        self.world.mark_visited(location)?;
        debug!(from = %self.location, to = %location, "player moved");
        self.location = location;
        Ok(())
    }

    /// The carried item that shares this item's name.
    fn held(&self, item: ItemId) -> Option<ItemId> {
        let name = &self.world.item(item).ok()?.name;
        self.inventory.get(name)
    }

    /// The item here that shares this item's name.
    fn here(&self, item: ItemId) -> Option<ItemId> {
        let name = &self.world.item(item).ok()?.name;
        self.world.item_named_at(self.location, name)
    }

    fn place(&mut self, location: LocationId, item: ItemId) -> FictionResult<()> {
        if let Some(displaced) = self.world.place_item(location, item)? {
            debug!(%displaced, %location, "same-name item displaced from location");
        }
        Ok(())
    }
}
