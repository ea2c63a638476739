use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(story: Option<&Path>) -> Result<(), String> {
    let story = super::load_story(story)?;
    let world = &story.world;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Exits", "Items", "Description"]);

    for (id, location) in world.locations() {
        let mut name = location.name.clone();
        if id == story.start {
            name.push_str(" (start)");
        }
        if location.terminal {
            name.push_str(" (end)");
        }

        let exits: Vec<&str> = location
            .exits
            .iter()
            .map(|e| e.direction.as_str())
            .collect();
        let exits = if exits.is_empty() {
            "-".to_string()
        } else {
            exits.join(", ")
        };

        let desc = if location.description.chars().count() > 60 {
            let short: String = location.description.chars().take(57).collect();
            format!("{short}...")
        } else if location.description.is_empty() {
            "-".to_string()
        } else {
            location.description.clone()
        };

        table.add_row(vec![
            name,
            exits,
            location.items.len().to_string(),
            desc,
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} locations, {} items",
        world.location_count(),
        world.item_count()
    );

    Ok(())
}
