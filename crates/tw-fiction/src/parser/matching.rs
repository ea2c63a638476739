//! Target matching for item commands.
//!
//! Matching is by substring: an item is meant when its (case-folded) name
//! appears anywhere in the normalized command. `take the red rose` therefore
//! finds an item named `rose`, and `take roses` does too. When several items
//! match, the earliest one wins: location items in placement order, then the
//! inventory in insertion order.

use tw_core::ItemId;

use crate::error::FictionResult;
use crate::state::GameState;

/// The first item in the current location whose name appears in the command.
pub fn location_match(command: &str, state: &GameState) -> FictionResult<Option<ItemId>> {
    for id in &state.current_location()?.items {
        if mentions(command, &state.item(*id)?.name) {
            return Ok(Some(*id));
        }
    }
    Ok(None)
}

/// Every carried item whose name appears in the command, in inventory order.
pub fn inventory_matches(command: &str, state: &GameState) -> FictionResult<Vec<ItemId>> {
    let mut found = Vec::new();
    for id in state.inventory().items() {
        if mentions(command, &state.item(id)?.name) {
            found.push(id);
        }
    }
    Ok(found)
}

/// The first in-scope item defining a special command equal to the command.
pub fn special_command(command: &str, state: &GameState) -> FictionResult<Option<(ItemId, String)>> {
    for id in state.items_in_scope()? {
        if let Some(phrase) = state.item(id)?.commands().find(|p| *p == command) {
            return Ok(Some((id, phrase.to_string())));
        }
    }
    Ok(None)
}

fn mentions(command: &str, name: &str) -> bool {
    !name.is_empty() && command.contains(&name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_core::{Effect, Item, Location, WorldGraph};

    struct Fixture {
        state: GameState,
        rose: ItemId,
        red_rose: ItemId,
        pole: ItemId,
    }

    fn fixture() -> Fixture {
        let mut world = WorldGraph::new();
        let garden = world.add_location(Location::new("Garden", "A garden."));
        let rose = world
            .add_item_at(Item::new("Rose", "a rose"), garden)
            .unwrap();
        let red_rose = world
            .add_item_at(Item::new("red rose", "a red rose"), garden)
            .unwrap();
        let pole = world.add_item(Item::new("pole", "a fishing pole"));
        world
            .register_action(pole, "catch fish", Effect::describe("Nothing bites."), vec![])
            .unwrap();
        world
            .register_action(rose, "catch fish", Effect::describe("Roses can't fish."), vec![])
            .unwrap();
        let mut state = GameState::new(world, garden).unwrap();
        state.give(pole).unwrap();
        Fixture {
            state,
            rose,
            red_rose,
            pole,
        }
    }

    #[test]
    fn substring_match_prefers_placement_order() {
        let f = fixture();
        assert_eq!(location_match("take red rose", &f.state).unwrap(), Some(f.rose));
        assert_eq!(location_match("take roses", &f.state).unwrap(), Some(f.rose));
        assert_ne!(location_match("take red rose", &f.state).unwrap(), Some(f.red_rose));
    }

    #[test]
    fn no_location_match() {
        let f = fixture();
        assert_eq!(location_match("take tulip", &f.state).unwrap(), None);
    }

    #[test]
    fn inventory_matches_all() {
        let f = fixture();
        assert_eq!(inventory_matches("drop pole", &f.state).unwrap(), vec![f.pole]);
        assert!(inventory_matches("drop rose", &f.state).unwrap().is_empty());
    }

    #[test]
    fn special_command_checks_location_before_inventory() {
        let f = fixture();
        assert_eq!(
            special_command("catch fish", &f.state).unwrap(),
            Some((f.rose, "catch fish".to_string()))
        );
        assert_eq!(special_command("catch", &f.state).unwrap(), None);
    }

    #[test]
    fn empty_name_never_matches() {
        assert!(!mentions("anything", ""));
    }
}
