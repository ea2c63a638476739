//! Classifying a line of player input.

use tw_core::{Direction, ItemId, Location};

use crate::error::FictionResult;
use crate::state::GameState;

use super::matching::special_command;

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Several commands separated by commas, run in order.
    Sequence(Vec<String>),
    /// Travel along the exit with this name.
    Direction(String),
    /// Describe the current location again.
    Redescribe,
    /// Look closely at an item.
    Examine,
    /// Pick an item up.
    Take,
    /// Put an item down.
    Drop,
    /// List what the player carries.
    Inventory,
    /// An item's special command.
    Special {
        /// The item that defines the command.
        item: ItemId,
        /// The command phrase.
        phrase: String,
    },
    /// Nothing matched.
    Unresolved,
}

/// Trim and case-fold a command.
pub fn normalize(command: &str) -> String {
    command.trim().to_lowercase()
}

/// Split a comma-separated command into its non-empty, trimmed parts.
pub fn split_sequence(command: &str) -> Vec<String> {
    command
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a command. Rules are tried in a fixed order and the first match
/// wins, so `examine north tower` is a movement command.
pub fn classify(command: &str, state: &GameState) -> FictionResult<Intent> {
    let command = normalize(command);

    if command.contains(',') {
        return Ok(Intent::Sequence(split_sequence(&command)));
    }
    if let Some(direction) = resolve_direction(&command, state.current_location()?) {
        return Ok(Intent::Direction(direction));
    }
    if command == "look" || command == "l" {
        return Ok(Intent::Redescribe);
    }
    if command.contains("examine ") || command.starts_with("x ") {
        return Ok(Intent::Examine);
    }
    if command.contains("take ") || command.contains("get ") {
        return Ok(Intent::Take);
    }
    if command.contains("drop ") {
        return Ok(Intent::Drop);
    }
    if command.contains("inventory") || command == "i" {
        return Ok(Intent::Inventory);
    }
    if let Some((item, phrase)) = special_command(&command, state)? {
        return Ok(Intent::Special { item, phrase });
    }
    Ok(Intent::Unresolved)
}

/// Work out which exit a normalized command refers to, if any.
///
/// The compass directions are recognized by their one-letter abbreviation or
/// anywhere in the command; `up` and `down` must be the whole command; `go
/// out` and `go in` are prefixes. Anything else must name one of the
/// location's exits, optionally after `go `.
pub fn resolve_direction(command: &str, location: &Location) -> Option<String> {
    for direction in [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ] {
        if Direction::from_abbreviation(command) == Some(direction)
            || command.contains(direction.name())
        {
            return Some(direction.name().to_string());
        }
    }
    if command == "up" || command == "down" {
        return Some(command.to_string());
    }
    if command.starts_with("go out") {
        return Some(Direction::Out.name().to_string());
    }
    if command.starts_with("go in") {
        return Some(Direction::In.name().to_string());
    }
    let bare = command.strip_prefix("go ").unwrap_or(command);
    location
        .exits
        .iter()
        .find(|exit| {
            let name = exit.direction.to_lowercase();
            command == name || bare == name
        })
        .map(|exit| exit.direction.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_core::{Effect, Item, WorldGraph};

    fn state() -> GameState {
        let mut world = WorldGraph::new();
        let hall = world.add_location(Location::new("Hall", "A hall."));
        let tower = world.add_location(Location::new("Tower", "A tower."));
        world.connect(hall, "up", tower, "").unwrap();
        world.connect(hall, "Portal", tower, "").unwrap();
        let rose = world
            .add_item_at(Item::new("rose", "a red rose"), hall)
            .unwrap();
        world
            .register_action(rose, "smell rose", Effect::describe("Lovely."), vec![])
            .unwrap();
        GameState::new(world, hall).unwrap()
    }

    fn intent(command: &str) -> Intent {
        classify(command, &state()).unwrap()
    }

    fn direction(d: &str) -> Intent {
        Intent::Direction(d.to_string())
    }

    #[test]
    fn comma_makes_a_sequence() {
        assert_eq!(
            intent("take rose, , smell rose "),
            Intent::Sequence(vec!["take rose".to_string(), "smell rose".to_string()])
        );
    }

    #[test]
    fn compass_directions() {
        assert_eq!(intent("n"), direction("north"));
        assert_eq!(intent("  Go South "), direction("south"));
        assert_eq!(intent("walk east"), direction("east"));
        assert_eq!(intent("W"), direction("west"));
    }

    #[test]
    fn substring_direction_wins_over_later_rules() {
        assert_eq!(intent("examine north tower"), direction("north"));
    }

    #[test]
    fn vertical_and_door_directions() {
        assert_eq!(intent("up"), direction("up"));
        assert_eq!(intent("down"), direction("down"));
        assert_eq!(intent("go out"), direction("out"));
        assert_eq!(intent("go inside"), direction("in"));
    }

    #[test]
    fn named_exits() {
        assert_eq!(intent("portal"), direction("Portal"));
        assert_eq!(intent("go portal"), direction("Portal"));
        assert_eq!(intent("go up"), direction("up"));
    }

    #[test]
    fn builtin_verbs() {
        assert_eq!(intent("look"), Intent::Redescribe);
        assert_eq!(intent("l"), Intent::Redescribe);
        assert_eq!(intent("examine rose"), Intent::Examine);
        assert_eq!(intent("x rose"), Intent::Examine);
        assert_eq!(intent("take rose"), Intent::Take);
        assert_eq!(intent("get rose"), Intent::Take);
        assert_eq!(intent("drop rose"), Intent::Drop);
        assert_eq!(intent("inventory"), Intent::Inventory);
        assert_eq!(intent("i"), Intent::Inventory);
    }

    #[test]
    fn special_command_of_item_in_scope() {
        assert_eq!(
            intent("Smell Rose"),
            Intent::Special {
                item: tw_core::ItemId(0),
                phrase: "smell rose".to_string(),
            }
        );
    }

    #[test]
    fn unresolved() {
        assert_eq!(intent("dance"), Intent::Unresolved);
        assert_eq!(intent(""), Intent::Unresolved);
    }

    #[test]
    fn named_exit_must_exist_here() {
        let hall = Location::new("Hall", "A hall.");
        assert_eq!(resolve_direction("portal", &hall), None);
        assert_eq!(resolve_direction("go portal", &hall), None);
    }
}
