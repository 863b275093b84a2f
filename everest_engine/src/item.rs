//! Items and the containers that hold them.
//!
//! Items carry no identity beyond their name, and several identical instances
//! (e.g. a stack of oxygen tanks) may sit side by side. Holders are therefore
//! ordered multisets: `Vec<Item>`, never a set.

use everest_data::{ItemDef, ItemKind};

/// A single portable object in the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
    pub use_text: Option<String>,
    /// Set once the player has taken the item. Nothing keys on it.
    pub picked_up: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            use_text: None,
            picked_up: false,
        }
    }

    /// Expand a definition into `def.count` identical instances.
    pub fn instances_from_def(def: &ItemDef) -> impl Iterator<Item = Item> + '_ {
        (0..def.count).map(|_| Item {
            name: def.name.clone(),
            description: def.desc.clone(),
            kind: def.kind,
            use_text: def.use_text.clone(),
            picked_up: false,
        })
    }
}

/// Anything that owns an ordered collection of items.
pub trait ItemHolder {
    fn items(&self) -> &[Item];
    fn items_mut(&mut self) -> &mut Vec<Item>;

    fn add_item(&mut self, item: Item) {
        self.items_mut().push(item);
    }

    /// Remove and return the item at `index`, if there is one.
    fn remove_item(&mut self, index: usize) -> Option<Item> {
        let items = self.items_mut();
        (index < items.len()).then(|| items.remove(index))
    }

    fn count_kind(&self, kind: ItemKind) -> usize {
        self.items().iter().filter(|item| item.kind == kind).count()
    }

    fn has_kind(&self, kind: ItemKind) -> bool {
        self.items().iter().any(|item| item.kind == kind)
    }

    fn count_named(&self, name: &str) -> usize {
        self.items().iter().filter(|item| item.name == name).count()
    }

    /// Item names with stacked duplicates collapsed, in order of first appearance.
    /// e.g. `["Map", "Oxygen Tank (x3)"]`
    fn item_summary(&self) -> Vec<String> {
        let mut seen: Vec<(&str, usize)> = Vec::new();
        for item in self.items() {
            match seen.iter_mut().find(|(name, _)| *name == item.name) {
                Some((_, count)) => *count += 1,
                None => seen.push((item.name.as_str(), 1)),
            }
        }
        seen.into_iter()
            .map(|(name, count)| {
                if count > 1 {
                    format!("{name} (x{count})")
                } else {
                    name.to_string()
                }
            })
            .collect()
    }
}
