//! Action Castle: rescue the princess, exorcise the ghost, claim the throne.

use tw_core::{CoreResult, Effect, Item, Location, Precondition, Story, WorldGraph};

const RUNES: &str = "The candle says 'The runes seem to be a spell of exorcism.'";

/// Build the Action Castle story.
///
/// The player starts in the cottage carrying an unlit lamp. The dungeon
/// stairs stay dark until the lamp is lit.
pub fn action_castle() -> CoreResult<Story> {
    let mut world = WorldGraph::new();

    // -----------------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------------

    let cottage = world.add_location(Location::new(
        "Cottage",
        "You are standing in a small cottage.",
    ));
    let garden_path = world.add_location(Location::new(
        "Garden Path",
        "You are standing on a lush garden path. There is a cottage here.",
    ));
    let fishing_pond = world.add_location(Location::new(
        "Fishing Pond",
        "You are at the edge of a small fishing pond.",
    ));
    let winding_path = world.add_location(Location::new(
        "Winding Path",
        "You are walking along a winding path. There is a tall tree here.",
    ));
    let tall_tree = world.add_location(Location::new(
        "Top of Tall Tree",
        "You are at the top of a tall tree.",
    ));
    let drawbridge = world.add_location(Location::new(
        "Drawbridge",
        "You are standing on one side of a drawbridge leading to ACTION CASTLE. There is a mean troll here.",
    ));
    let courtyard = world.add_location(Location::new(
        "Courtyard",
        "You are in the courtyard of ACTION CASTLE.",
    ));
    let tower_stairs = world.add_location(Location::new(
        "Tower Stairs",
        "You are climbing the stairs to the tower. There is a door with a lock on it.",
    ));
    let tower = world.add_location(Location::new("Tower", "You are inside a tower."));
    let dungeon_stairs = world.add_location(Location::new(
        "Dungeon Stairs",
        "You are climbing the stairs down to the dungeon. It is too dark to see!",
    ));
    let dungeon = world.add_location(Location::new("Dungeon", "You are in the dungeon."));
    let feasting_hall = world.add_location(Location::new(
        "Great Feasting Hall",
        "You stand inside the Great Feasting Hall.",
    ));
    let throne_room = world.add_location(Location::new(
        "Throne Room",
        "This is the throne room of ACTION CASTLE. There is an ornate golden throne here.",
    ));

    // -----------------------------------------------------------------------
    // Connections
    // -----------------------------------------------------------------------

    world.connect(cottage, "out", garden_path, "")?;

    world.connect(garden_path, "in", cottage, "")?;
    world.connect(garden_path, "north", winding_path, "")?;
    world.connect(garden_path, "south", fishing_pond, "")?;

    world.connect(fishing_pond, "north", garden_path, "")?;

    world.connect(winding_path, "up", tall_tree, "")?;
    world.connect(winding_path, "south", garden_path, "")?;
    world.connect(winding_path, "east", drawbridge, "")?;

    world.connect(tall_tree, "down", winding_path, "")?;

    world.connect(drawbridge, "west", winding_path, "")?;
    world.connect(drawbridge, "east", courtyard, "")?;

    world.connect(courtyard, "up", tower_stairs, "")?;
    world.connect(courtyard, "down", dungeon_stairs, "")?;
    world.connect(courtyard, "west", drawbridge, "")?;
    world.connect(courtyard, "east", feasting_hall, "")?;

    world.connect(tower_stairs, "down", courtyard, "")?;
    world.connect(tower_stairs, "up", tower, "")?;

    world.connect(tower, "down", tower_stairs, "")?;

    world.connect(dungeon_stairs, "down", dungeon, "")?;
    world.connect(dungeon_stairs, "up", courtyard, "")?;

    world.connect(dungeon, "up", dungeon_stairs, "")?;

    world.connect(feasting_hall, "west", courtyard, "")?;
    world.connect(feasting_hall, "east", throne_room, "")?;

    world.connect(throne_room, "west", feasting_hall, "")?;

    // -----------------------------------------------------------------------
    // Items that can be picked up
    // -----------------------------------------------------------------------

    let pole = world.add_item_at(
        Item::new("pole", "a fishing pole").with_examine_text("A SIMPLE FISHING POLE."),
        cottage,
    )?;
    world.add_item_at(
        Item::new("potion", "a poisonous potion")
            .with_examine_text("IT'S BRIGHT GREEN AND STEAMING.")
            .with_take_text(
                "As you near the potion, the fumes cause you to faint and lose the game. THE END.",
            )
            .terminal(),
        cottage,
    )?;
    let rosebush = world.add_item_at(
        Item::new("rosebush", "a rosebush")
            .with_examine_text("THE ROSEBUSH CONTAINS A SINGLE RED ROSE.  IT IS BEAUTIFUL."),
        garden_path,
    )?;
    let rose = world.add_item(Item::new("rose", "a red rose").with_examine_text("IT SMELLS GOOD."));
    let fish =
        world.add_item(Item::new("fish", "a dead fish").with_examine_text("IT SMELLS TERRIBLE."));
    let branch = world.add_item_at(
        Item::new("branch", "a dead branch").with_examine_text("it's a stout dead branch"),
        tall_tree,
    )?;
    let troll = world.add_item_at(
        Item::new("troll", "a troll")
            .with_examine_text("IT IS WARTY GREEN AND HUNGRY")
            .fixed(),
        drawbridge,
    )?;
    let unconscious_troll = world.add_item(
        Item::new("unconscious troll", "an unconscious troll is in the pond")
            .with_examine_text("HIS EYES ARE IN THE BACK OF HIS HEAD.")
            .fixed(),
    );
    let key = world.add_item(
        Item::new("key", "a key").with_examine_text("its a key that unlocks something"),
    );
    let candle = world.add_item_at(
        Item::new("candle", "a strange candle is here")
            .with_examine_text("the candle is covered in strange runes"),
        feasting_hall,
    )?;
    let lit_candle = world.add_item(
        Item::new("lit candle", "a lit candle is here")
            .with_examine_text("the candle gives off a strange, acrid-smelling smoke"),
    );
    let lamp = world.add_item(Item::new("lamp", "a lamp").with_examine_text("a simple lamp"));
    let lit_lamp =
        world.add_item(Item::new("lit lamp", "a lit lamp").with_examine_text("IT IS VERY BRIGHT"));

    // -----------------------------------------------------------------------
    // Scenery
    // -----------------------------------------------------------------------

    let pond = world.add_item_at(
        Item::new("pond", "a small fishing pond")
            .with_examine_text("THERE ARE FISH IN THE POND.")
            .fixed(),
        fishing_pond,
    )?;
    let crown =
        world.add_item(Item::new("crown", "A simple crown").with_examine_text("THERE IS A CROWN"));
    let guard = world.add_item_at(
        Item::new("guard", "a guard carrying a sword and a key")
            .with_examine_text("HE LOOKS AT YOU SUSPICIOUSLY.")
            .fixed(),
        courtyard,
    )?;
    let unconscious_guard = world.add_item(
        Item::new(
            "unconscious guard",
            "an unconscious guard is slumped against the wall",
        )
        .with_examine_text("HE HAS BITS OF BRANCH ON HIS UNIFORM.")
        .fixed(),
    );
    let ghost = world.add_item_at(
        Item::new("ghost", "a ghost is lurking")
            .with_examine_text("The ghost has bony, claw-like fingers and wears a crown.")
            .fixed(),
        dungeon,
    )?;
    let princess = world.add_item_at(
        Item::new("princess", "the princess is here")
            .with_examine_text("the princess is sad, beautiful and lonely. she awaits her prince.")
            .fixed(),
        tower,
    )?;
    let married_princess = world.add_item(
        Item::new("married princess", "the married princess is here")
            .with_examine_text("the princess is married to you now")
            .fixed(),
    );
    let revelers = world.add_item(
        Item::new(
            "revelers",
            "a group of revelers are celebrating their new king",
        )
        .with_examine_text("the revelers are very happy")
        .fixed(),
    );
    let subjects = world.add_item(
        Item::new(
            "courtiers, guards and other subjects",
            "the room is full of courtiers, guards and other subjects",
        )
        .with_examine_text("they are very happy")
        .fixed(),
    );
    let throne = world.add_item_at(
        Item::new("throne", "there is an ornate golden throne here.")
            .with_examine_text("the throne is ornate")
            .fixed(),
        throne_room,
    )?;
    let talking_princess = world.add_item(
        Item::new("princess", "the princess is now talking")
            .with_examine_text(
                "the princess is sad, beautiful and lonely and friendly. she awaits her prince.",
            )
            .fixed(),
    );
    let open_door = world.add_item(Item::new("door", "Door to the Courtyard").fixed());

    // -----------------------------------------------------------------------
    // Blocks
    // -----------------------------------------------------------------------

    world.add_block(
        drawbridge,
        "east",
        "There is a Troll blocking the path",
        vec![Precondition::LocationHasItem(unconscious_troll)],
    )?;
    world.add_block(
        courtyard,
        "east",
        "There is a Guard blocking the path",
        vec![Precondition::LocationHasItem(unconscious_guard)],
    )?;
    world.add_block(
        tower_stairs,
        "up",
        "The door is locked.",
        vec![Precondition::LocationHasItemSilent(open_door)],
    )?;
    world.add_block(
        dungeon_stairs,
        "down",
        "The dungeon is too dark to proceed.",
        vec![Precondition::InventoryContains(lit_lamp)],
    )?;

    // -----------------------------------------------------------------------
    // Special commands
    // -----------------------------------------------------------------------

    world.register_action(
        troll,
        "hit troll with branch",
        Effect::end_game("You have failed to attack the troll. GAME OVER"),
        vec![Precondition::InventoryContains(branch)],
    )?;
    world.register_action(
        troll,
        "give fish to troll",
        Effect::sequence([
            Effect::destroy(fish, "You feed the fish to troll."),
            Effect::destroy(troll, "The troll slumps over, unconscious."),
            Effect::create(
                unconscious_troll,
                "The troll's unconscious body lies on the ground.",
            ),
        ]),
        vec![
            Precondition::InventoryContains(fish),
            Precondition::LocationHasItem(troll),
        ],
    )?;

    world.register_action(
        key,
        "unlock door",
        Effect::create(open_door, "The door has opened."),
        vec![Precondition::InLocation(tower_stairs)],
    )?;

    world.register_action(
        princess,
        "give rose to princess",
        Effect::sequence([
            Effect::destroy(princess, "The princess opens up."),
            Effect::create(talking_princess, "The princess will now talk to you."),
        ]),
        vec![Precondition::InventoryContains(rose)],
    )?;

    world.register_action(
        guard,
        "hit guard with branch",
        Effect::sequence([
            Effect::destroy(
                branch,
                "You swing your branch against the guard. It shatters to pieces.",
            ),
            Effect::destroy(guard, "The guard slumps over, unconscious."),
            Effect::describe("His sword has fallen, but you may not take it."),
            Effect::create(
                unconscious_guard,
                "The guard's unconscious body lies on the ground.",
            ),
            Effect::create(key, "His key falls from his hand."),
        ]),
        vec![
            Precondition::InventoryContains(branch),
            Precondition::LocationHasItem(guard),
        ],
    )?;

    world.register_action(
        crown,
        "wear crown",
        Effect::sequence([
            Effect::destroy(unconscious_guard, "The guard wakes up."),
            Effect::create(guard, "The guard kneels on the floor to hail his new king."),
        ]),
        vec![Precondition::LocationHasItem(married_princess)],
    )?;

    world.register_action(
        rosebush,
        "pick rose",
        Effect::add_to_inventory(
            rose,
            "You pick the lone rose from the rosebush.",
            "You already picked the rose.",
        ),
        vec![],
    )?;
    world.register_action(rose, "smell rose", Effect::describe("It smells sweet."), vec![])?;
    world.register_action(
        pond,
        "catch fish",
        Effect::describe(
            "You reach into the pond and try to catch a fish with your hands, but they are too fast.",
        ),
        vec![],
    )?;
    world.register_action(
        pond,
        "catch fish with pole",
        Effect::add_to_inventory(
            fish,
            "You dip your hook into the pond and catch a fish.",
            "You weren't able to catch another fish.",
        ),
        vec![Precondition::InventoryContains(pole)],
    )?;
    world.register_action(
        fish,
        "eat fish",
        Effect::end_game(
            "That's disgusting! It's raw! And definitely not sashimi-grade! But you've won this version of the game. THE END.",
        ),
        vec![],
    )?;
    world.register_action(
        branch,
        "jump",
        Effect::end_game("You have jumped from the tall tree fatally to your end."),
        vec![],
    )?;

    for item in [candle, lit_candle] {
        for phrase in ["translate runes", "decipher runes", "read runes"] {
            world.register_action(item, phrase, Effect::describe(RUNES), vec![])?;
        }
    }
    world.register_action(
        candle,
        "light candle",
        Effect::sequence([
            Effect::destroy(candle, "You light the candle."),
            Effect::create(
                lit_candle,
                "The candle is giving off a strange, acrid-smelling smoke.",
            ),
            Effect::destroy(ghost, "The ghost flees!"),
            Effect::create(crown, "The ghost drops a golden crown."),
        ]),
        vec![
            Precondition::InventoryContains(candle),
            Precondition::InLocation(dungeon),
        ],
    )?;

    let talk = [
        (
            "talk to princess about ghost",
            "She says: 'My father haunts the dungeon as a restless spirit.'",
        ),
        (
            "talk to princess about crown",
            "She says: 'Only the rightful heir to the throne may wear it.'",
        ),
        (
            "talk to princess about herself",
            "She says: 'I cannot leave this tower until I am married!'",
        ),
        (
            "talk to princess about throne",
            "She says: 'Only the king may sit on the throne.'",
        ),
    ];
    for (phrase, reply) in talk {
        world.register_action(talking_princess, phrase, Effect::describe(reply), vec![])?;
    }
    world.register_action(
        talking_princess,
        "kiss princess",
        Effect::describe("Not until we're wed"),
        vec![Precondition::LocationHasItem(talking_princess)],
    )?;
    world.register_action(
        talking_princess,
        "marry princess",
        Effect::sequence([
            Effect::destroy(
                talking_princess,
                "The princess says: 'My father's crown! You have put his soul at rest and may now succeed him!'",
            ),
            Effect::create(
                married_princess,
                "The princess accepts your proposal and places the crown on your head.",
            ),
            Effect::create_at(
                revelers,
                "Revelers flood the Great Feasting Hall.",
                feasting_hall,
            ),
            Effect::create_at(
                subjects,
                "Courtiers, guards and other subjects cheer for you in the Throne Room.",
                throne_room,
            ),
        ]),
        vec![Precondition::InventoryContains(crown)],
    )?;

    world.register_action(
        throne,
        "sit on throne",
        Effect::end_game(
            "You sit on the ornate golden throne. The people cheer for the new ruler of... ACTION CASTLE!",
        ),
        vec![Precondition::LocationHasItem(subjects)],
    )?;

    world.register_action(
        lamp,
        "light lamp",
        Effect::sequence([
            Effect::destroy(lamp, "You light your lamp."),
            Effect::add_to_inventory(
                lit_lamp,
                "You can see in dark places now.",
                "The lamp is already lit.",
            ),
        ]),
        vec![Precondition::InventoryContains(lamp)],
    )?;

    let mut story = Story::new("Action Castle", world, cottage)?;
    story.give(lamp)?;
    Ok(story)
}
