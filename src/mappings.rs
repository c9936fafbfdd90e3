//! Identifier remap tables: numeric registry ids to legacy string keys.
//!
//! ```
//! use na_via::Mappings;
//!
//! let mappings = Mappings::v1_20_3();
//! assert_eq!(mappings.enchantments.id_to_key(13), Some("minecraft:sharpness"));
//! assert_eq!(mappings.enchantments.id_to_key(500), None);
//! assert_eq!(mappings.map_decorations.key_to_id("red_x"), Some(26));
//! ```

mod attributes;
mod enchantments;
mod instruments;
mod map_decorations;

use std::collections::HashMap;

use crate::namespaced;

/// One registry: dense numeric ids, each with a namespaced key.
#[derive(Debug, Clone)]
pub struct IdentifierTable {
    name: &'static str,
    keys: &'static [&'static str],
    ids: HashMap<&'static str, i32>,
}

impl IdentifierTable {
    /// Builds a table whose id `n` is `keys[n]`.
    pub fn new(name: &'static str, keys: &'static [&'static str]) -> Self {
        let ids = keys
            .iter()
            .enumerate()
            .map(|(id, key)| (*key, id as i32))
            .collect();
        Self { name, keys, ids }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The key of `id`; `None` if this revision has no name for it.
    pub fn id_to_key(&self, id: i32) -> Option<&'static str> {
        usize::try_from(id)
            .ok()
            .and_then(|id| self.keys.get(id))
            .copied()
    }

    /// The id of `key`, with or without the `minecraft:` namespace.
    pub fn key_to_id(&self, key: &str) -> Option<i32> {
        self.ids.get(namespaced(key).as_ref()).copied()
    }
}

/// The identifier tables of one protocol revision.
#[derive(Debug, Clone)]
pub struct Mappings {
    pub enchantments: IdentifierTable,
    pub attributes: IdentifierTable,
    pub instruments: IdentifierTable,
    pub map_decorations: IdentifierTable,
}

impl Mappings {
    pub fn v1_20_3() -> Self {
        Self {
            enchantments: IdentifierTable::new("enchantments", &enchantments::ENCHANTMENTS_1_20_3),
            attributes: IdentifierTable::new("attributes", &attributes::ATTRIBUTES_1_20_3),
            instruments: IdentifierTable::new("instruments", &instruments::INSTRUMENTS_1_20_3),
            map_decorations: IdentifierTable::new(
                "map decorations",
                &map_decorations::MAP_DECORATIONS_1_20_3,
            ),
        }
    }

    pub fn tables(&self) -> [&IdentifierTable; 4] {
        [
            &self.enchantments,
            &self.attributes,
            &self.instruments,
            &self.map_decorations,
        ]
    }
}
