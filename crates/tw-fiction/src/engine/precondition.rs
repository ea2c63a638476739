//! Precondition evaluation against the live game state.

use tracing::warn;
use tw_core::{Conditions, ItemId, Precondition};

use crate::narrator::Narration;
use crate::state::GameState;

/// Whether failing predicates explain themselves to the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reporting {
    /// Failing non-silent predicates print a diagnostic line.
    #[default]
    Diagnostics,
    /// Nothing is printed. Used for previews outside of play.
    Quiet,
}

/// Evaluates precondition sets for one game state.
///
/// Every predicate in a set is evaluated, even after one has failed, so each
/// failing predicate gets to report its diagnostic.
pub struct PreconditionEngine<'a> {
    state: &'a GameState,
    out: &'a mut Narration,
    reporting: Reporting,
}

impl<'a> PreconditionEngine<'a> {
    /// Create an engine that reports diagnostics into `out`.
    pub fn new(state: &'a GameState, out: &'a mut Narration) -> Self {
        Self {
            state,
            out,
            reporting: Reporting::Diagnostics,
        }
    }

    /// Set the reporting mode.
    pub fn with_reporting(mut self, reporting: Reporting) -> Self {
        self.reporting = reporting;
        self
    }

    /// Whether every precondition holds. The empty set always holds.
    pub fn check(&mut self, preconditions: &[Precondition]) -> bool {
        let mut all = true;
        for precondition in preconditions {
            if !self.check_one(precondition) {
                all = false;
            }
        }
        all
    }

    fn check_one(&mut self, precondition: &Precondition) -> bool {
        let state = self.state;
        match precondition {
            Precondition::InventoryContains(item) => {
                let held = state.is_in_inventory(*item);
                if !held {
                    self.report(format!("You don't have the {}", item_name(state, *item)));
                }
                held
            }
            Precondition::InLocation(location) => {
                let here = state.location_id() == *location;
                if !here {
                    self.report("You aren't in the correct location".to_string());
                }
                here
            }
            Precondition::LocationHasItem(item) => {
                let present = state.location_has_item(*item);
                if !present {
                    self.report(format!("The {} isn't in this location", item_name(state, *item)));
                }
                present
            }
            Precondition::LocationHasItemSilent(item) => state.location_has_item(*item),
            Precondition::Unrecognized { kind, .. } => {
                warn!(%kind, "unrecognized precondition treated as satisfied");
                true
            }
        }
    }

    fn report(&mut self, line: String) {
        if self.reporting == Reporting::Diagnostics {
            self.out.say(line);
        }
    }
}

impl Conditions for PreconditionEngine<'_> {
    fn satisfied(&mut self, preconditions: &[Precondition]) -> bool {
        self.check(preconditions)
    }
}

fn item_name(state: &GameState, item: ItemId) -> String {
    state
        .item(item)
        .map(|i| i.name.clone())
        .unwrap_or_else(|_| item.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_core::{Item, Location, LocationId, WorldGraph};

    struct Fixture {
        state: GameState,
        garden: LocationId,
        pole: ItemId,
        rose: ItemId,
    }

    fn fixture() -> Fixture {
        let mut world = WorldGraph::new();
        let cottage = world.add_location(Location::new("Cottage", "A cottage."));
        let garden = world.add_location(Location::new("Garden", "A garden."));
        let pole = world
            .add_item_at(Item::new("pole", "a fishing pole"), cottage)
            .unwrap();
        let rose = world
            .add_item_at(Item::new("rose", "a red rose"), garden)
            .unwrap();
        Fixture {
            state: GameState::new(world, cottage).unwrap(),
            garden,
            pole,
            rose,
        }
    }

    #[test]
    fn empty_set_is_satisfied() {
        let f = fixture();
        let mut out = Narration::new();
        assert!(PreconditionEngine::new(&f.state, &mut out).check(&[]));
        assert!(out.is_empty());
    }

    #[test]
    fn satisfied_predicates_are_quiet() {
        let mut f = fixture();
        f.state.give(f.rose).unwrap();
        let mut out = Narration::new();
        let ok = PreconditionEngine::new(&f.state, &mut out).check(&[
            Precondition::InventoryContains(f.rose),
            Precondition::LocationHasItem(f.pole),
            Precondition::InLocation(f.state.location_id()),
        ]);
        assert!(ok);
        assert!(out.is_empty());
    }

    #[test]
    fn every_failure_reports() {
        let f = fixture();
        let mut out = Narration::new();
        let ok = PreconditionEngine::new(&f.state, &mut out).check(&[
            Precondition::InventoryContains(f.rose),
            Precondition::InLocation(f.garden),
            Precondition::LocationHasItem(f.rose),
        ]);
        assert!(!ok);
        assert_eq!(
            out.lines(),
            [
                "You don't have the rose",
                "You aren't in the correct location",
                "The rose isn't in this location",
            ]
        );
    }

    #[test]
    fn silent_predicate_fails_without_report() {
        let f = fixture();
        let mut out = Narration::new();
        let ok = PreconditionEngine::new(&f.state, &mut out)
            .check(&[Precondition::LocationHasItemSilent(f.rose)]);
        assert!(!ok);
        assert!(out.is_empty());
    }

    #[test]
    fn quiet_mode_suppresses_diagnostics() {
        let f = fixture();
        let mut out = Narration::new();
        let ok = PreconditionEngine::new(&f.state, &mut out)
            .with_reporting(Reporting::Quiet)
            .check(&[Precondition::InventoryContains(f.rose)]);
        assert!(!ok);
        assert!(out.is_empty());
    }

    #[test]
    fn unrecognized_fails_open() {
        let f = fixture();
        let mut out = Narration::new();
        let ok = PreconditionEngine::new(&f.state, &mut out).check(&[Precondition::Unrecognized {
            kind: "has_flag".to_string(),
            target: None,
        }]);
        assert!(ok);
    }
}
