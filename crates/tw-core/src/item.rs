use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::precondition::Precondition;

/// A special command registered on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAction {
    /// The exact command phrase, stored case-folded.
    pub phrase: String,
    /// What happens when the command runs.
    pub effect: Effect,
    /// Preconditions that must all hold for the effect to run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preconditions: Vec<Precondition>,
}

/// An object that can lie in a location or be carried by the player.
///
/// People and scenery are items too; they are simply not gettable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Name of the item; also its key inside a container.
    pub name: String,
    /// Short description shown in location listings and the inventory.
    pub description: String,
    /// Detailed text shown when the player examines the item.
    #[serde(default)]
    pub examine_text: String,
    /// Custom text shown when the item is taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_text: Option<String>,
    /// Whether the player can pick the item up.
    #[serde(default = "default_gettable")]
    pub gettable: bool,
    /// Whether possessing the item ends the game.
    #[serde(default)]
    pub terminal: bool,
    /// Special commands, in registration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ItemAction>,
}

fn default_gettable() -> bool {
    true
}

impl Item {
    /// Create a gettable item with the given name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            examine_text: String::new(),
            take_text: None,
            gettable: true,
            terminal: false,
            actions: Vec::new(),
        }
    }

    /// Set the examine text.
    pub fn with_examine_text(mut self, text: impl Into<String>) -> Self {
        self.examine_text = text.into();
        self
    }

    /// Set the text shown when the item is taken.
    pub fn with_take_text(mut self, text: impl Into<String>) -> Self {
        self.take_text = Some(text.into());
        self
    }

    /// Mark the item as scenery the player cannot pick up.
    pub fn fixed(mut self) -> Self {
        self.gettable = false;
        self
    }

    /// Mark the item as ending the game when taken.
    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    /// The text shown when the item is taken.
    pub fn take_text(&self) -> String {
        match &self.take_text {
            Some(text) if !text.is_empty() => text.clone(),
            _ => format!("You take the {}.", self.name),
        }
    }

    /// Register a special command, replacing any command with the same phrase.
    pub fn add_action(
        &mut self,
        phrase: &str,
        effect: Effect,
        preconditions: Vec<Precondition>,
    ) {
        let phrase = phrase.trim().to_lowercase();
        let action = ItemAction {
            phrase,
            effect,
            preconditions,
        };
        match self.actions.iter_mut().find(|a| a.phrase == action.phrase) {
            Some(existing) => *existing = action,
            None => self.actions.push(action),
        }
    }

    /// Look up a special command by its exact (case-folded) phrase.
    pub fn action(&self, phrase: &str) -> Option<&ItemAction> {
        let phrase = phrase.trim().to_lowercase();
        self.actions.iter().find(|a| a.phrase == phrase)
    }

    /// The phrases of all special commands, in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| a.phrase.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ItemId;

    #[test]
    fn take_text_defaults_to_generated_message() {
        let pole = Item::new("pole", "a fishing pole");
        assert_eq!(pole.take_text(), "You take the pole.");

        let potion = Item::new("potion", "a potion").with_take_text("The fumes overcome you.");
        assert_eq!(potion.take_text(), "The fumes overcome you.");
    }

    #[test]
    fn builder_flags() {
        let troll = Item::new("troll", "a troll").fixed();
        assert!(!troll.gettable);
        assert!(!troll.terminal);

        let crown = Item::new("crown", "a crown").terminal();
        assert!(crown.gettable);
        assert!(crown.terminal);
    }

    #[test]
    fn phrases_are_case_folded() {
        let mut rose = Item::new("rose", "a red rose");
        rose.add_action("Smell Rose", Effect::describe("It smells sweet."), vec![]);

        assert!(rose.action("smell rose").is_some());
        assert!(rose.action("SMELL ROSE").is_some());
        assert_eq!(rose.commands().collect::<Vec<_>>(), vec!["smell rose"]);
    }

    #[test]
    fn re_registering_a_phrase_replaces_it_in_place() {
        let mut candle = Item::new("candle", "a candle");
        candle.add_action("read runes", Effect::describe("first"), vec![]);
        candle.add_action("light candle", Effect::describe("lit"), vec![]);
        candle.add_action(
            "read runes",
            Effect::describe("second"),
            vec![Precondition::InventoryContains(ItemId(0))],
        );

        assert_eq!(
            candle.commands().collect::<Vec<_>>(),
            vec!["read runes", "light candle"]
        );
        let action = candle.action("read runes").unwrap();
        assert_eq!(action.effect, Effect::describe("second"));
        assert_eq!(action.preconditions.len(), 1);
    }

    #[test]
    fn missing_fields_use_defaults_when_deserializing() {
        let item: Item =
            serde_json::from_str(r#"{"name":"key","description":"a key"}"#).unwrap();
        assert!(item.gettable);
        assert!(!item.terminal);
        assert!(item.actions.is_empty());
        assert_eq!(item.take_text(), "You take the key.");
    }
}
