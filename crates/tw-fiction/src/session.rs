//! Interactive fiction session management.

use tracing::{debug, warn};
use tw_core::{ItemId, Location, Story};

use crate::config::SessionConfig;
use crate::engine::{self, PreconditionEngine};
use crate::error::{FictionError, FictionResult};
use crate::narrator::{Narration, Narrator, capitalize};
use crate::parser::{Intent, classify, inventory_matches, location_match, normalize};
use crate::state::GameState;

/// The output of one processed line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    /// Narration, one entry per line.
    pub lines: Vec<String>,
    /// Whether the game is over after this turn.
    pub game_over: bool,
}

impl Turn {
    /// The narration joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// An interactive fiction session.
///
/// Owns the game state and drives it one line of input at a time. Each call
/// to [`GameSession::process`] classifies the line, dispatches it, and returns
/// everything the turn produced in a single [`Turn`].
#[derive(Debug)]
pub struct GameSession {
    title: String,
    state: GameState,
    config: SessionConfig,
    narrator: Narrator,
    opening: Vec<String>,
    history: Vec<String>,
    game_over: bool,
}

impl GameSession {
    /// Start a session. The opening description is produced immediately and
    /// available from [`GameSession::opening`].
    pub fn new(story: Story, config: SessionConfig) -> FictionResult<Self> {
        let title = story.title.clone();
        let state = GameState::from_story(story)?;
        let narrator = Narrator::new(config.print_commands);

        let mut out = Narration::new();
        narrator.describe(&state, &mut out)?;

        Ok(Self {
            title,
            state,
            config,
            narrator,
            opening: out.into_lines(),
            history: Vec::new(),
            game_over: false,
        })
    }

    /// The story title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The description shown when the session started.
    pub fn opening(&self) -> &[String] {
        &self.opening
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Processed commands, oldest first. Sequence parts are recorded after
    /// the line that contained them.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The location the player is in.
    pub fn current_location(&self) -> FictionResult<&Location> {
        self.state.current_location()
    }

    /// Whether the player carries the item, or another item keyed by the
    /// same name.
    pub fn is_in_inventory(&self, item: ItemId) -> bool {
        self.state.is_in_inventory(item)
    }

    /// Items the player can refer to: here first, then carried.
    pub fn items_in_scope(&self) -> FictionResult<Vec<ItemId>> {
        self.state.items_in_scope()
    }

    /// Process one line of player input.
    ///
    /// Once the game is over every further call returns an empty turn.
    pub fn process(&mut self, input: &str) -> FictionResult<Turn> {
        if self.game_over {
            return Ok(Turn {
                lines: Vec::new(),
                game_over: true,
            });
        }

        let mut out = Narration::new();
        if self.dispatch(input, &mut out)? {
            debug!("game over");
            self.game_over = true;
        }
        Ok(Turn {
            lines: out.into_lines(),
            game_over: self.game_over,
        })
    }

    /// Run one command. Returns true if it ended the game.
    fn dispatch(&mut self, input: &str, out: &mut Narration) -> FictionResult<bool> {
        let command = normalize(input);
        self.record(&command);

        let intent = classify(&command, &self.state)?;
        debug!(%command, ?intent, "classified");

        match intent {
            Intent::Sequence(parts) => self.do_sequence(&parts, out),
            Intent::Direction(direction) => self.do_move(&direction, out),
            Intent::Redescribe => {
                self.narrator.describe(&self.state, out)?;
                Ok(false)
            }
            Intent::Examine => {
                self.do_examine(&command, out)?;
                Ok(false)
            }
            Intent::Take => self.do_take(&command, out),
            Intent::Drop => {
                self.do_drop(&command, out)?;
                Ok(false)
            }
            Intent::Inventory => {
                self.narrator.inventory(&self.state, out)?;
                Ok(false)
            }
            Intent::Special { item, phrase } => self.do_special(item, &phrase, out),
            Intent::Unresolved => {
                out.say("I'm not sure what you want to do.");
                Ok(false)
            }
        }
    }

    fn record(&mut self, command: &str) {
        self.history.push(command.to_string());
        let limit = self.config.history_limit;
        if limit > 0 && self.history.len() > limit {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
    }

    fn do_sequence(&mut self, parts: &[String], out: &mut Narration) -> FictionResult<bool> {
        for part in parts {
            if self.dispatch(part, out)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn do_move(&mut self, direction: &str, out: &mut Narration) -> FictionResult<bool> {
        let here = self.state.location_id();
        let Some(exit) = self.state.current_location()?.exit(direction).cloned() else {
            out.say(format!("You can't go {} from here.", capitalize(direction)));
            return Ok(false);
        };

        let blocked = {
            let mut conditions = PreconditionEngine::new(&self.state, out);
            self.state.world().is_blocked(here, direction, &mut conditions)?
        };
        if blocked {
            debug!(%here, direction, "movement blocked");
            out.say(self.state.world().block_description(here, direction)?);
            return Ok(false);
        }

        self.state.move_to(exit.target)?;
        out.say(exit.travel_description);
        if self.state.current_location()?.terminal {
            self.narrator.describe_location(&self.state, out)?;
            return Ok(true);
        }
        self.narrator.describe(&self.state, out)?;
        Ok(false)
    }

    fn do_examine(&self, command: &str, out: &mut Narration) -> FictionResult<()> {
        let before = out.lines().len();
        if let Some(id) = location_match(command, &self.state)? {
            out.say(self.state.item(id)?.examine_text.clone());
        }
        for id in inventory_matches(command, &self.state)? {
            out.say(self.state.item(id)?.examine_text.clone());
        }
        if out.lines().len() == before {
            out.say("You don't see anything special.");
        }
        Ok(())
    }

    fn do_take(&mut self, command: &str, out: &mut Narration) -> FictionResult<bool> {
        if let Some(id) = location_match(command, &self.state)? {
            let item = self.state.item(id)?;
            if !item.gettable {
                out.say(format!("You cannot take the {}.", item.name));
                return Ok(false);
            }
            let text = item.take_text();
            let terminal = item.terminal;
            self.state.give(id)?;
            out.say(text);
            return Ok(terminal);
        }

        let held = inventory_matches(command, &self.state)?;
        if held.is_empty() {
            out.say("You can't find it.");
        }
        for id in held {
            out.say(format!("You already have the {}.", self.state.item(id)?.name));
        }
        Ok(false)
    }

    fn do_drop(&mut self, command: &str, out: &mut Narration) -> FictionResult<()> {
        let Some(id) = inventory_matches(command, &self.state)?.first().copied() else {
            out.say("You don't have that.");
            return Ok(());
        };
        let name = self.state.item(id)?.name.clone();
        self.state.drop_item(id)?;
        out.say(format!("You drop the {name}."));
        Ok(())
    }

    fn do_special(&mut self, item: ItemId, phrase: &str, out: &mut Narration) -> FictionResult<bool> {
        match engine::invoke(&mut self.state, item, phrase, out) {
            Err(FictionError::UnknownAction { item, phrase }) => {
                warn!(%item, %phrase, "unknown action");
                out.say(format!("Cannot perform the action {phrase}"));
                Ok(false)
            }
            other => other,
        }
    }
}
