use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::direction::Direction;
use crate::effect::Effect;
use crate::error::{CoreError, CoreResult};
use crate::id::{ItemId, LocationId};
use crate::item::Item;
use crate::location::{Block, Exit, Location};
use crate::precondition::{Conditions, Precondition};

/// The location graph. Owns every location and every item.
///
/// Locations and items live in arenas and refer to each other by
/// [`LocationId`] / [`ItemId`], so the graph may contain cycles without any
/// shared ownership. Item placement is tracked on the locations themselves;
/// an item that is in no location is either carried by the player or out of
/// play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldGraph {
    locations: Vec<Location>,
    items: Vec<Item>,
}

impl WorldGraph {
    /// Create an empty world graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------------

    /// Add a location. Returns its ID.
    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = LocationId(self.locations.len());
        self.locations.push(location);
        id
    }

    /// Get a location by ID.
    pub fn location(&self, id: LocationId) -> CoreResult<&Location> {
        self.locations
            .get(id.index())
            .ok_or(CoreError::LocationNotFound(id))
    }

    fn location_mut(&mut self, id: LocationId) -> CoreResult<&mut Location> {
        self.locations
            .get_mut(id.index())
            .ok_or(CoreError::LocationNotFound(id))
    }

    /// Iterate over all locations in creation order.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (LocationId(i), l))
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Find the first location with the given name (case-insensitive).
    pub fn find_location(&self, name: &str) -> Option<LocationId> {
        self.locations()
            .find(|(_, l)| l.name.eq_ignore_ascii_case(name))
            .map(|(id, _)| id)
    }

    /// Record that the player has been to a location.
    pub fn mark_visited(&mut self, id: LocationId) -> CoreResult<()> {
        self.location_mut(id)?.visited = true;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Add an item that starts out of play. Returns its ID.
    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = ItemId(self.items.len());
        self.items.push(item);
        id
    }

    /// Add an item and place it in a location.
    pub fn add_item_at(&mut self, item: Item, location: LocationId) -> CoreResult<ItemId> {
        self.location(location)?;
        let id = self.add_item(item);
        self.place_item(location, id)?;
        Ok(id)
    }

    /// Get an item by ID.
    pub fn item(&self, id: ItemId) -> CoreResult<&Item> {
        self.items.get(id.index()).ok_or(CoreError::ItemNotFound(id))
    }

    fn item_mut(&mut self, id: ItemId) -> CoreResult<&mut Item> {
        self.items
            .get_mut(id.index())
            .ok_or(CoreError::ItemNotFound(id))
    }

    /// Iterate over all items in creation order.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().enumerate().map(|(i, it)| (ItemId(i), it))
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Find the first item with the given name (case-insensitive).
    pub fn find_item(&self, name: &str) -> Option<ItemId> {
        self.items()
            .find(|(_, it)| it.name.eq_ignore_ascii_case(name))
            .map(|(id, _)| id)
    }

    // -----------------------------------------------------------------------
    // Connections
    // -----------------------------------------------------------------------

    /// Connect `from` to `to` through `direction`.
    ///
    /// A canonical direction is stored under its lowercase name and also wires
    /// the opposite direction on `to` back to `from` with no travel text. Any
    /// existing exit with the same name is overwritten, so the last call wins.
    /// Other direction names produce a one-way edge.
    pub fn connect(
        &mut self,
        from: LocationId,
        direction: &str,
        to: LocationId,
        travel_description: &str,
    ) -> CoreResult<()> {
        self.location(to)?;
        let canonical = Direction::parse(direction.trim());
        let name = canonical
            .map(|d| d.name().to_string())
            .unwrap_or_else(|| direction.trim().to_string());

        debug!(%from, %to, direction = %name, "connect");
        self.location_mut(from)?.set_exit(Exit {
            direction: name,
            target: to,
            travel_description: travel_description.to_string(),
        });

        if let Some(dir) = canonical {
            self.location_mut(to)?.set_exit(Exit {
                direction: dir.opposite().name().to_string(),
                target: from,
                travel_description: String::new(),
            });
        }
        Ok(())
    }

    /// Outgoing exits of a location, in registration order.
    pub fn exits(&self, location: LocationId) -> CoreResult<&[Exit]> {
        Ok(&self.location(location)?.exits)
    }

    // -----------------------------------------------------------------------
    // Item placement
    // -----------------------------------------------------------------------

    /// Put an item into a location.
    ///
    /// The item is first taken out of any other location, so it never lies in
    /// two places. If the location already holds a different item with the same
    /// name, that item is displaced (it leaves play) and returned. Placing an
    /// item where it already is changes nothing.
    pub fn place_item(&mut self, location: LocationId, item: ItemId) -> CoreResult<Option<ItemId>> {
        let name = self.item(item)?.name.clone();
        if self.location(location)?.has_item(item) {
            return Ok(None);
        }
        self.detach_item(item);

        let items = &self.items;
        let loc = self
            .locations
            .get_mut(location.index())
            .ok_or(CoreError::LocationNotFound(location))?;
        let same_name = loc
            .items
            .iter()
            .position(|other| items.get(other.index()).is_some_and(|o| o.name == name));

        match same_name {
            Some(pos) => Ok(Some(std::mem::replace(&mut loc.items[pos], item))),
            None => {
                loc.items.push(item);
                Ok(None)
            }
        }
    }

    /// Take an item out of a location. Removing an absent item is a no-op
    /// that returns false.
    pub fn remove_item(&mut self, location: LocationId, item: ItemId) -> CoreResult<bool> {
        Ok(self.location_mut(location)?.remove_item(item))
    }

    /// The item keyed by `name` in a location, if any.
    pub fn item_named_at(&self, location: LocationId, name: &str) -> Option<ItemId> {
        let loc = self.location(location).ok()?;
        loc.items
            .iter()
            .copied()
            .find(|id| self.item(*id).is_ok_and(|i| i.name == name))
    }

    /// The location an item currently lies in, if any.
    pub fn where_is(&self, item: ItemId) -> Option<LocationId> {
        self.locations()
            .find(|(_, l)| l.has_item(item))
            .map(|(id, _)| id)
    }

    /// Take an item out of whatever location holds it.
    pub fn detach_item(&mut self, item: ItemId) -> Option<LocationId> {
        let mut found = None;
        for (i, loc) in self.locations.iter_mut().enumerate() {
            if loc.remove_item(item) && found.is_none() {
                found = Some(LocationId(i));
            }
        }
        found
    }

    // -----------------------------------------------------------------------
    // Blocks
    // -----------------------------------------------------------------------

    /// Gate a direction of a location behind a set of preconditions.
    pub fn add_block(
        &mut self,
        location: LocationId,
        direction: &str,
        description: &str,
        preconditions: Vec<Precondition>,
    ) -> CoreResult<()> {
        let direction = Direction::parse(direction.trim())
            .map(|d| d.name().to_string())
            .unwrap_or_else(|| direction.trim().to_string());
        self.location_mut(location)?.blocks.insert(
            direction,
            Block {
                description: description.to_string(),
                preconditions,
            },
        );
        Ok(())
    }

    /// Whether travel in a direction is currently blocked.
    ///
    /// False when no block exists; otherwise true until `conditions` reports the
    /// block's preconditions as satisfied.
    pub fn is_blocked(
        &self,
        location: LocationId,
        direction: &str,
        conditions: &mut impl Conditions,
    ) -> CoreResult<bool> {
        match self.location(location)?.block(direction) {
            None => Ok(false),
            Some(block) => Ok(!conditions.satisfied(&block.preconditions)),
        }
    }

    /// The text of the block on a direction, or empty if there is none.
    pub fn block_description(&self, location: LocationId, direction: &str) -> CoreResult<&str> {
        Ok(self
            .location(location)?
            .block(direction)
            .map(|b| b.description.as_str())
            .unwrap_or(""))
    }

    // -----------------------------------------------------------------------
    // Item commands
    // -----------------------------------------------------------------------

    /// Register a special command on an item.
    pub fn register_action(
        &mut self,
        item: ItemId,
        phrase: &str,
        effect: Effect,
        preconditions: Vec<Precondition>,
    ) -> CoreResult<()> {
        self.item_mut(item)?.add_action(phrase, effect, preconditions);
        Ok(())
    }

    /// Verify that every item and location an effect names exists.
    pub fn check_effect(&self, effect: &Effect) -> CoreResult<()> {
        match effect {
            Effect::AddToInventory { item, .. } | Effect::Destroy { item, .. } => {
                self.item(*item)?;
            }
            Effect::CreateAt { item, location, .. } => {
                self.item(*item)?;
                if let Some(location) = location {
                    self.location(*location)?;
                }
            }
            Effect::Describe { .. } | Effect::EndGame { .. } => {}
            Effect::Sequence { steps } => {
                for step in steps {
                    self.check_effect(step)?;
                }
            }
        }
        Ok(())
    }

    /// The command phrases registered on an item.
    pub fn list_commands(&self, item: ItemId) -> CoreResult<Vec<&str>> {
        Ok(self.item(item)?.commands().collect())
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// Breadth-first walk over exits starting at `start`.
    ///
    /// Returns every reachable location once, in discovery order. Blocks are
    /// ignored; exits pointing at unknown IDs are skipped.
    pub fn traverse(&self, start: LocationId) -> CoreResult<Vec<LocationId>> {
        self.location(start)?;
        let mut seen = HashSet::from([start]);
        let mut frontier = VecDeque::from([start]);
        let mut order = Vec::new();

        while let Some(current) = frontier.pop_front() {
            order.push(current);
            for exit in self.exits(current)? {
                if self.location(exit.target).is_ok() && seen.insert(exit.target) {
                    frontier.push_back(exit.target);
                }
            }
        }
        Ok(order)
    }
}
