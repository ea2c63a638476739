//! Item command invocation.

use tracing::debug;
use tw_core::ItemId;

use crate::error::{FictionError, FictionResult};
use crate::narrator::Narration;
use crate::state::GameState;

use super::effect::apply;
use super::precondition::PreconditionEngine;

/// Invoke a special command on an item.
///
/// Failing preconditions print their diagnostics and skip the effect. An
/// effect naming an item or location that does not exist is rejected before
/// any of it runs. Returns true if the effect ends the game.
pub fn invoke(
    state: &mut GameState,
    item: ItemId,
    phrase: &str,
    out: &mut Narration,
) -> FictionResult<bool> {
    let found = state.item(item)?;
    let action = found
        .action(phrase)
        .cloned()
        .ok_or_else(|| FictionError::UnknownAction {
            item: found.name.clone(),
            phrase: phrase.to_string(),
        })?;
    state.world().check_effect(&action.effect)?;

    if !PreconditionEngine::new(state, out).check(&action.preconditions) {
        debug!(%item, phrase, "action preconditions not met");
        return Ok(false);
    }
    debug!(%item, phrase, "action invoked");
    apply(&action.effect, state, out)
}

/// The special commands of an item, in registration order.
pub fn list_commands(state: &GameState, item: ItemId) -> FictionResult<Vec<String>> {
    Ok(state
        .world()
        .list_commands(item)?
        .into_iter()
        .map(str::to_string)
        .collect())
}
