use std::path::Path;

use tw_core::{LocationId, Story};
use tw_fiction::engine::{PreconditionEngine, Reporting};
use tw_fiction::narrator::capitalize;
use tw_fiction::{GameState, Narration};

/// One exit as seen from a player standing at its source.
struct Edge {
    from: LocationId,
    to: LocationId,
    direction: String,
    block: Option<String>,
}

pub fn run(story: Option<&Path>, format: &str) -> Result<(), String> {
    let story = super::load_story(story)?;
    let (nodes, edges) = walk(&story)?;

    match format {
        "text" => render_text(&story, &nodes, &edges),
        "dot" => print!("{}", render_dot(&story, &nodes, &edges)),
        _ => return Err(format!("unsupported format: \"{format}\". Use: text, dot")),
    }
    Ok(())
}

/// Breadth-first walk from the start. Block checks run against a preview
/// state standing at each location in turn, with diagnostics suppressed.
fn walk(story: &Story) -> Result<(Vec<LocationId>, Vec<Edge>), String> {
    let nodes = story.world.traverse(story.start).map_err(|e| e.to_string())?;
    let mut preview = GameState::from_story(story.clone()).map_err(|e| e.to_string())?;
    let mut edges = Vec::new();

    for &id in &nodes {
        preview.move_to(id).map_err(|e| e.to_string())?;
        let mut quiet = Narration::new();
        let mut conditions =
            PreconditionEngine::new(&preview, &mut quiet).with_reporting(Reporting::Quiet);

        for exit in preview.world().exits(id).map_err(|e| e.to_string())? {
            let blocked = preview
                .world()
                .is_blocked(id, &exit.direction, &mut conditions)
                .map_err(|e| e.to_string())?;
            let block = if blocked {
                let text = preview
                    .world()
                    .block_description(id, &exit.direction)
                    .map_err(|e| e.to_string())?;
                Some(text.to_string())
            } else {
                None
            };
            edges.push(Edge {
                from: id,
                to: exit.target,
                direction: exit.direction.clone(),
                block,
            });
        }
    }

    Ok((nodes, edges))
}

fn name(story: &Story, id: LocationId) -> String {
    story
        .world
        .location(id)
        .map(|l| l.name.clone())
        .unwrap_or_else(|_| id.to_string())
}

fn render_text(story: &Story, nodes: &[LocationId], edges: &[Edge]) {
    println!("  Map of '{}'", story.title);
    println!();

    for &id in nodes {
        println!("  [{}]", name(story, id));
        for edge in edges.iter().filter(|e| e.from == id) {
            let target = name(story, edge.to);
            match &edge.block {
                Some(block) => println!(
                    "    {} --> [{target}] [blocked: {block}]",
                    capitalize(&edge.direction)
                ),
                None => println!("    {} --> [{target}]", capitalize(&edge.direction)),
            }
        }
    }

    let blocked = edges.iter().filter(|e| e.block.is_some()).count();
    println!();
    println!(
        "  {} locations, {} exits ({blocked} blocked)",
        nodes.len(),
        edges.len()
    );
}

fn render_dot(story: &Story, nodes: &[LocationId], edges: &[Edge]) -> String {
    let mut out = String::new();
    out.push_str(&format!("digraph \"{}\" {{\n", escape(&story.title)));
    out.push_str("  node [color=lightblue2, style=filled];\n");

    for &id in nodes {
        let Ok(location) = story.world.location(id) else {
            continue;
        };
        let mut label = location.name.clone();
        let items: Vec<&str> = location
            .items
            .iter()
            .filter_map(|item| story.world.item(*item).ok())
            .map(|item| item.name.as_str())
            .collect();
        if !items.is_empty() {
            label.push_str(&format!("\nYou see: {}", items.join(", ")));
        }
        out.push_str(&format!("  n{} [label=\"{}\"];\n", id.index(), escape(&label)));
    }

    for edge in edges {
        let direction = capitalize(&edge.direction);
        let attrs = match &edge.block {
            Some(block) => format!(
                "label=\"{}\", style=dotted",
                escape(&format!("{direction}\n{block}"))
            ),
            None => format!("label=\"{}\"", escape(&direction)),
        };
        out.push_str(&format!(
            "  n{} -> n{} [{attrs}];\n",
            edge.from.index(),
            edge.to.index()
        ));
    }

    out.push_str("}\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
