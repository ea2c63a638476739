//! Property tests for item containment in game sessions.
use proptest::prelude::*;
use tw_core::{Effect, Item, Location, Precondition, Story, WorldGraph};
use tw_fiction::{GameSession, SessionConfig};

fn story() -> Story {
    let mut world = WorldGraph::new();
    let hall = world.add_location(Location::new("Hall", "A hall."));
    let yard = world.add_location(Location::new("Yard", "A yard."));
    let shed = world.add_location(Location::new("Shed", "A shed."));
    world.connect(hall, "out", yard, "").unwrap();
    world.connect(yard, "east", shed, "").unwrap();

    let key = world.add_item_at(Item::new("key", "a key"), hall).unwrap();
    let box_ = world.add_item_at(Item::new("box", "a box"), yard).unwrap();
    let coin = world.add_item(Item::new("coin", "a coin"));
    let spare = world.add_item(Item::new("key", "a spare key"));
    world.add_item_at(Item::new("rock", "a rock"), shed).unwrap();

    world
        .register_action(
            box_,
            "open box",
            Effect::sequence([
                Effect::create(coin, "A coin falls out."),
                Effect::create(spare, "So does a key."),
            ]),
            vec![Precondition::InventoryContains(key)],
        )
        .unwrap();
    world
        .register_action(
            coin,
            "toss coin",
            Effect::destroy(coin, "The coin rolls away."),
            vec![],
        )
        .unwrap();

    Story::new("Containment", world, hall).unwrap()
}

fn command() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "take key",
        "take box",
        "take coin",
        "take rock",
        "drop key",
        "drop coin",
        "drop rock",
        "open box",
        "toss coin",
        "out",
        "in",
        "east",
        "west",
        "take key, out, open box",
    ])
}

proptest! {
    #[test]
    fn items_are_never_in_two_containers(
        commands in prop::collection::vec(command(), 1..30)
    ) {
        let mut session = GameSession::new(story(), SessionConfig::default()).unwrap();
        for command in commands {
            session.process(command).unwrap();

            let state = session.state();
            let world = state.world();
            for (id, _) in world.items() {
                let placements = world
                    .locations()
                    .filter(|(_, l)| l.items.contains(&id))
                    .count();
                let held = state.inventory().items().filter(|i| *i == id).count();
                prop_assert!(placements + held <= 1, "{} is in {} containers", id, placements + held);
            }
        }
    }

    #[test]
    fn inventory_never_holds_two_items_with_one_name(
        commands in prop::collection::vec(command(), 1..30)
    ) {
        let mut session = GameSession::new(story(), SessionConfig::default()).unwrap();
        for command in commands {
            session.process(command).unwrap();
            let names: Vec<&str> = session.state().inventory().entries().map(|(n, _)| n).collect();
            let mut unique = names.clone();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(names.len(), unique.len());
        }
    }
}
