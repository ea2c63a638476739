use crate::id::ItemId;

/// The items the player is carrying, keyed by item name.
///
/// Holding two items with the same name is impossible: inserting an item whose
/// name is already taken displaces the previous holder of that name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    name: String,
    item: ItemId,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item under the given name.
    ///
    /// Returns the item that previously held that name, if it was a different
    /// one. A displaced item keeps its slot position; a fresh name is appended.
    pub fn insert(&mut self, name: &str, item: ItemId) -> Option<ItemId> {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.name == name) {
            let previous = std::mem::replace(&mut slot.item, item);
            return (previous != item).then_some(previous);
        }
        self.slots.retain(|s| s.item != item);
        self.slots.push(Slot {
            name: name.to_string(),
            item,
        });
        None
    }

    /// Remove an item. Returns false if it was not held.
    pub fn remove(&mut self, item: ItemId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.item != item);
        self.slots.len() != before
    }

    /// Whether the item is held.
    pub fn contains(&self, item: ItemId) -> bool {
        self.slots.iter().any(|s| s.item == item)
    }

    /// The item held under a name, if any.
    pub fn get(&self, name: &str) -> Option<ItemId> {
        self.slots.iter().find(|s| s.name == name).map(|s| s.item)
    }

    /// Held items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.slots.iter().map(|s| s.item)
    }

    /// Held items with the names they are keyed by.
    pub fn entries(&self) -> impl Iterator<Item = (&str, ItemId)> {
        self.slots.iter().map(|s| (s.name.as_str(), s.item))
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove() {
        let mut inv = Inventory::new();
        assert!(inv.is_empty());

        assert_eq!(inv.insert("pole", ItemId(0)), None);
        assert!(inv.contains(ItemId(0)));
        assert_eq!(inv.len(), 1);

        assert!(inv.remove(ItemId(0)));
        assert!(!inv.remove(ItemId(0)));
        assert!(inv.is_empty());
    }

    #[test]
    fn reinserting_the_same_item_is_idempotent() {
        let mut inv = Inventory::new();
        inv.insert("fish", ItemId(3));
        assert_eq!(inv.insert("fish", ItemId(3)), None);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn same_name_displaces_previous_item() {
        let mut inv = Inventory::new();
        inv.insert("lamp", ItemId(1));
        inv.insert("rose", ItemId(2));

        assert_eq!(inv.insert("lamp", ItemId(9)), Some(ItemId(1)));
        assert!(!inv.contains(ItemId(1)));
        assert_eq!(inv.get("lamp"), Some(ItemId(9)));
        assert_eq!(inv.get("candle"), None);
        assert_eq!(inv.items().collect::<Vec<_>>(), vec![ItemId(9), ItemId(2)]);
    }

    #[test]
    fn entries_preserve_insertion_order() {
        let mut inv = Inventory::new();
        inv.insert("lamp", ItemId(1));
        inv.insert("key", ItemId(4));
        let names: Vec<_> = inv.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["lamp", "key"]);
    }
}
