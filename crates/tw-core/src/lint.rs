//! Offline checks for common authoring mistakes.
//!
//! The engine never validates a world during play: dangling exits,
//! misspelled precondition kinds and the like simply behave oddly. These
//! checks let an author find such problems before anyone plays.

use std::collections::HashSet;
use std::fmt;

use crate::effect::Effect;
use crate::id::{ItemId, LocationId};
use crate::precondition::Precondition;
use crate::story::Story;

/// A suspicious construct found in a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// No path of exits leads from the start to this location.
    Unreachable {
        /// Location name.
        location: String,
    },
    /// A block sits on a direction that has no exit.
    BlockWithoutExit {
        /// Location name.
        location: String,
        /// Blocked direction.
        direction: String,
    },
    /// An exit points at a location that does not exist.
    DanglingExit {
        /// Location name.
        location: String,
        /// Exit direction.
        direction: String,
    },
    /// An item lies in more than one location.
    MultiplyPlaced {
        /// Item name.
        item: String,
    },
    /// A precondition or effect refers to an ID that does not exist.
    DanglingReference {
        /// Where the reference was found.
        context: String,
    },
    /// A precondition kind the engine does not know; it will always pass.
    UnrecognizedPrecondition {
        /// Where the precondition was found.
        context: String,
        /// The authored kind name.
        kind: String,
    },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { location } => {
                write!(f, "location \"{location}\" cannot be reached from the start")
            }
            Self::BlockWithoutExit {
                location,
                direction,
            } => write!(
                f,
                "location \"{location}\" blocks \"{direction}\" but has no exit that way"
            ),
            Self::DanglingExit {
                location,
                direction,
            } => write!(
                f,
                "exit \"{direction}\" of \"{location}\" leads to a missing location"
            ),
            Self::MultiplyPlaced { item } => {
                write!(f, "item \"{item}\" lies in more than one location")
            }
            Self::DanglingReference { context } => {
                write!(f, "{context} refers to a missing location or item")
            }
            Self::UnrecognizedPrecondition { context, kind } => write!(
                f,
                "{context} uses unknown precondition \"{kind}\" (always passes)"
            ),
        }
    }
}

/// Run every check against a story.
pub fn lint(story: &Story) -> Vec<LintWarning> {
    let world = &story.world;
    let mut warnings = Vec::new();

    let reachable: HashSet<LocationId> = world
        .traverse(story.start)
        .map(|ids| ids.into_iter().collect())
        .unwrap_or_default();

    let mut placed: HashSet<ItemId> = HashSet::new();
    let mut reported: HashSet<ItemId> = HashSet::new();

    for (id, location) in world.locations() {
        if !reachable.contains(&id) {
            warnings.push(LintWarning::Unreachable {
                location: location.name.clone(),
            });
        }

        for exit in &location.exits {
            if world.location(exit.target).is_err() {
                warnings.push(LintWarning::DanglingExit {
                    location: location.name.clone(),
                    direction: exit.direction.clone(),
                });
            }
        }

        for (direction, block) in &location.blocks {
            if location.exit(direction).is_none() {
                warnings.push(LintWarning::BlockWithoutExit {
                    location: location.name.clone(),
                    direction: direction.clone(),
                });
            }
            let context = format!("block \"{direction}\" of \"{}\"", location.name);
            check_preconditions(story, &context, &block.preconditions, &mut warnings);
        }

        for item in &location.items {
            if !placed.insert(*item) && reported.insert(*item) {
                let item = world
                    .item(*item)
                    .map(|it| it.name.clone())
                    .unwrap_or_else(|_| item.to_string());
                warnings.push(LintWarning::MultiplyPlaced { item });
            }
        }
    }

    for (_, item) in world.items() {
        for action in &item.actions {
            let context = format!("command \"{}\" of \"{}\"", action.phrase, item.name);
            check_preconditions(story, &context, &action.preconditions, &mut warnings);
            if !effect_references_exist(story, &action.effect) {
                warnings.push(LintWarning::DanglingReference { context });
            }
        }
    }

    warnings
}

fn check_preconditions(
    story: &Story,
    context: &str,
    preconditions: &[Precondition],
    warnings: &mut Vec<LintWarning>,
) {
    for precondition in preconditions {
        let exists = match precondition {
            Precondition::InventoryContains(item)
            | Precondition::LocationHasItem(item)
            | Precondition::LocationHasItemSilent(item) => story.world.item(*item).is_ok(),
            Precondition::InLocation(location) => story.world.location(*location).is_ok(),
            Precondition::Unrecognized { kind, .. } => {
                warnings.push(LintWarning::UnrecognizedPrecondition {
                    context: context.to_string(),
                    kind: kind.clone(),
                });
                true
            }
        };
        if !exists {
            warnings.push(LintWarning::DanglingReference {
                context: context.to_string(),
            });
        }
    }
}

fn effect_references_exist(story: &Story, effect: &Effect) -> bool {
    story.world.check_effect(effect).is_ok()
}
