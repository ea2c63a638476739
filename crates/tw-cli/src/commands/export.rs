use std::path::Path;

pub fn run(story: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let story = super::load_story(story)?;
    let json = story.to_json().map_err(|e| e.to_string())?;

    if let Some(path) = output {
        std::fs::write(path, format!("{json}\n"))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}
