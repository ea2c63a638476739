pub mod check;
pub mod export;
pub mod graph;
pub mod list;
pub mod play;

use std::path::Path;

use tracing::debug;
use tw_core::Story;

/// Load a story file, or build the bundled Action Castle when no path is
/// given.
fn load_story(path: Option<&Path>) -> Result<Story, String> {
    let Some(path) = path else {
        return tw_content::action_castle()
            .map_err(|e| format!("failed to build the bundled story: {e}"));
    };

    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let story =
        Story::from_json(&json).map_err(|e| format!("invalid story {}: {e}", path.display()))?;
    debug!(path = %path.display(), title = %story.title, "story loaded");
    Ok(story)
}
