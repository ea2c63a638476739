//! Effect execution.

use tracing::debug;
use tw_core::Effect;

use crate::error::FictionResult;
use crate::narrator::Narration;
use crate::state::GameState;

/// Run an effect against the game state.
///
/// Returns true if the effect ends the game. A sequence runs every step even
/// after one of them has ended the game; its result is true if any step's was.
pub fn apply(effect: &Effect, state: &mut GameState, out: &mut Narration) -> FictionResult<bool> {
    match effect {
        Effect::AddToInventory {
            item,
            success,
            already_held,
        } => {
            if state.is_in_inventory(*item) {
                out.say(already_held.clone());
            } else {
                state.give(*item)?;
                debug!(%item, "effect added item to inventory");
                out.say(success.clone());
            }
            Ok(false)
        }
        Effect::Describe { text } => {
            out.say(text.clone());
            Ok(false)
        }
        Effect::Destroy { item, text } => {
            if state.destroy(*item)? {
                debug!(%item, "effect destroyed item");
                out.say(text.clone());
            }
            Ok(false)
        }
        Effect::CreateAt {
            item,
            text,
            location,
        } => {
            let target = location.unwrap_or_else(|| state.location_id());
            state.create_at(*item, target)?;
            debug!(%item, location = %target, "effect created item");
            out.say(text.clone());
            Ok(false)
        }
        Effect::EndGame { message } => {
            debug!("effect ended the game");
            out.say(message.clone());
            Ok(true)
        }
        Effect::Sequence { steps } => {
            let mut ended = false;
            for step in steps {
                ended |= apply(step, state, out)?;
            }
            Ok(ended)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_core::{Item, ItemId, Location, LocationId, WorldGraph};

    struct Fixture {
        state: GameState,
        garden: LocationId,
        pole: ItemId,
        rose: ItemId,
        fish: ItemId,
    }

    fn fixture() -> Fixture {
        let mut world = WorldGraph::new();
        let cottage = world.add_location(Location::new("Cottage", "A cottage."));
        let garden = world.add_location(Location::new("Garden", "A garden."));
        let pole = world
            .add_item_at(Item::new("pole", "a fishing pole"), cottage)
            .unwrap();
        let rose = world
            .add_item_at(Item::new("rose", "a red rose"), garden)
            .unwrap();
        let fish = world.add_item(Item::new("fish", "a dead fish"));
        Fixture {
            state: GameState::new(world, cottage).unwrap(),
            garden,
            pole,
            rose,
            fish,
        }
    }

    #[test]
    fn describe_prints_text() {
        let mut f = fixture();
        let mut out = Narration::new();
        let ended = apply(&Effect::describe("Nothing happens."), &mut f.state, &mut out).unwrap();
        assert!(!ended);
        assert_eq!(out.lines(), ["Nothing happens."]);
    }

    #[test]
    fn add_to_inventory_once() {
        let mut f = fixture();
        let effect = Effect::add_to_inventory(f.fish, "You catch a fish.", "You already have a fish.");
        let mut out = Narration::new();
        apply(&effect, &mut f.state, &mut out).unwrap();
        apply(&effect, &mut f.state, &mut out).unwrap();
        assert!(f.state.is_in_inventory(f.fish));
        assert_eq!(out.lines(), ["You catch a fish.", "You already have a fish."]);
    }

    #[test]
    fn destroy_only_prints_when_something_was_removed() {
        let mut f = fixture();
        let mut out = Narration::new();
        apply(&Effect::destroy(f.rose, "The rose wilts."), &mut f.state, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(f.state.world().where_is(f.rose), Some(f.garden));

        apply(&Effect::destroy(f.pole, "The pole snaps."), &mut f.state, &mut out).unwrap();
        assert_eq!(out.lines(), ["The pole snaps."]);
        assert_eq!(f.state.world().where_is(f.pole), None);
    }

    #[test]
    fn create_defaults_to_current_location() {
        let mut f = fixture();
        let mut out = Narration::new();
        apply(&Effect::create(f.fish, "A fish flops out."), &mut f.state, &mut out).unwrap();
        assert!(f.state.location_has_item(f.fish));
        assert_eq!(out.lines(), ["A fish flops out."]);
    }

    #[test]
    fn create_at_explicit_location() {
        let mut f = fixture();
        let mut out = Narration::new();
        apply(&Effect::create_at(f.fish, "", f.garden), &mut f.state, &mut out).unwrap();
        assert_eq!(f.state.world().where_is(f.fish), Some(f.garden));
    }

    #[test]
    fn end_game_signals() {
        let mut f = fixture();
        let mut out = Narration::new();
        assert!(apply(&Effect::end_game("You win."), &mut f.state, &mut out).unwrap());
        assert_eq!(out.lines(), ["You win."]);
    }

    #[test]
    fn sequence_runs_every_step() {
        let mut f = fixture();
        let effect = Effect::sequence([
            Effect::describe("first"),
            Effect::end_game("over"),
            Effect::describe("last"),
        ]);
        let mut out = Narration::new();
        assert!(apply(&effect, &mut f.state, &mut out).unwrap());
        assert_eq!(out.lines(), ["first", "over", "last"]);
    }
}
