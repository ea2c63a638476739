use std::path::Path;

use colored::Colorize;
use tw_core::lint::lint;

pub fn run(story: Option<&Path>) -> Result<(), String> {
    let story = super::load_story(story)?;
    let warnings = lint(&story);

    if warnings.is_empty() {
        println!("  All checks passed for '{}'.", story.title);
    } else {
        for warning in &warnings {
            println!("  {} {warning}", "warning:".yellow());
        }
        println!();
        println!(
            "  {} warning{}",
            warnings.len(),
            if warnings.len() == 1 { "" } else { "s" }
        );
    }
    println!(
        "  {} locations, {} items",
        story.world.location_count(),
        story.world.item_count()
    );

    Ok(())
}
