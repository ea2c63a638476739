//! Descriptions of locations, items, and the inventory.

use crate::error::FictionResult;
use crate::state::GameState;

use super::output::Narration;

/// Produces the standard descriptive text of a session.
#[derive(Debug, Clone)]
pub struct Narrator {
    print_commands: bool,
}

impl Narrator {
    /// Create a narrator. With `print_commands`, each visible item is followed
    /// by its special commands, one per tab-indented line.
    pub fn new(print_commands: bool) -> Self {
        Self { print_commands }
    }

    /// Full description of the current location: its text, the exits, and
    /// the items lying there.
    pub fn describe(&self, state: &GameState, out: &mut Narration) -> FictionResult<()> {
        self.describe_location(state, out)?;
        self.describe_exits(state, out)?;
        self.describe_items(state, out)
    }

    /// Just the current location's description text.
    pub fn describe_location(&self, state: &GameState, out: &mut Narration) -> FictionResult<()> {
        out.say(state.current_location()?.description.clone());
        Ok(())
    }

    /// `Exits: Out, North`, or nothing for a dead end.
    pub fn describe_exits(&self, state: &GameState, out: &mut Narration) -> FictionResult<()> {
        let here = state.current_location()?;
        if here.exits.is_empty() {
            return Ok(());
        }
        let names: Vec<String> = here.exits.iter().map(|e| capitalize(&e.direction)).collect();
        out.say(format!("Exits: {}", names.join(", ")));
        Ok(())
    }

    /// `You see:` followed by one line per item lying here.
    pub fn describe_items(&self, state: &GameState, out: &mut Narration) -> FictionResult<()> {
        let here = state.current_location()?;
        if here.items.is_empty() {
            return Ok(());
        }
        out.say("You see:");
        for id in &here.items {
            let item = state.item(*id)?;
            out.say(item.description.clone());
            if self.print_commands {
                for command in item.commands() {
                    out.say(format!("\t{command}"));
                }
            }
        }
        Ok(())
    }

    /// The inventory listing.
    pub fn inventory(&self, state: &GameState, out: &mut Narration) -> FictionResult<()> {
        if state.inventory().is_empty() {
            out.say("You don't have anything.");
            return Ok(());
        }
        let mut descriptions = Vec::with_capacity(state.inventory().len());
        for id in state.inventory().items() {
            descriptions.push(state.item(id)?.description.clone());
        }
        out.say(format!("You have: {}", descriptions.join(", ")));
        Ok(())
    }
}

/// Upper-case the first character of a direction or name.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_core::{Effect, Item, Location, WorldGraph};

    fn state() -> GameState {
        let mut world = WorldGraph::new();
        let cottage = world.add_location(Location::new("Cottage", "You are standing in a small cottage."));
        let garden = world.add_location(Location::new("Garden", "A garden."));
        world.connect(cottage, "out", garden, "").unwrap();
        let pole = world
            .add_item_at(Item::new("pole", "a fishing pole"), cottage)
            .unwrap();
        world
            .register_action(pole, "catch fish", Effect::describe("Nothing bites."), vec![])
            .unwrap();
        world
            .add_item_at(Item::new("bowl", "a bowl"), cottage)
            .unwrap();
        GameState::new(world, cottage).unwrap()
    }

    #[test]
    fn describe_lists_exits_items_and_commands() {
        let mut out = Narration::new();
        Narrator::new(true).describe(&state(), &mut out).unwrap();
        assert_eq!(
            out.lines(),
            [
                "You are standing in a small cottage.",
                "Exits: Out",
                "You see:",
                "a fishing pole",
                "\tcatch fish",
                "a bowl",
            ]
        );
    }

    #[test]
    fn describe_can_hide_commands() {
        let mut out = Narration::new();
        Narrator::new(false).describe(&state(), &mut out).unwrap();
        assert!(!out.lines().iter().any(|l| l.starts_with('\t')));
    }

    #[test]
    fn empty_inventory() {
        let mut out = Narration::new();
        Narrator::new(true).inventory(&state(), &mut out).unwrap();
        assert_eq!(out.lines(), ["You don't have anything."]);
    }

    #[test]
    fn inventory_lists_descriptions() {
        let mut s = state();
        let pole = s.world().find_item("pole").unwrap();
        let bowl = s.world().find_item("bowl").unwrap();
        s.give(pole).unwrap();
        s.give(bowl).unwrap();
        let mut out = Narration::new();
        Narrator::new(true).inventory(&s, &mut out).unwrap();
        assert_eq!(out.lines(), ["You have: a fishing pole, a bowl"]);
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("north"), "North");
        assert_eq!(capitalize(""), "");
    }
}
