//! Structured item data to the legacy item tag.
//!
//! The converter is a fixed table with one optional rewriter per
//! [`DataKey`], built once by [`StructuredDataConverter::new`] and read-only
//! afterwards. A rewriter writes its key's payload into the destination
//! compound and nothing else.
//!
//! ```
//! use na_via::{
//!     Config, Enchantments, Mappings, StructuredData, StructuredDataContainer,
//!     StructuredDataConverter, keys,
//! };
//!
//! let converter = StructuredDataConverter::new(Mappings::v1_20_3(), &Config::default());
//!
//! let data: StructuredDataContainer = [
//!     StructuredData::of(keys::UNBREAKABLE, ()).hidden(),
//!     StructuredData::of(keys::ENCHANTMENTS, Enchantments::new().with(13, 3)).hidden(),
//! ]
//! .into_iter()
//! .collect();
//!
//! let tag = converter.to_tag(&data);
//! assert_eq!(tag.get_boolean("Unbreakable"), Some(true));
//! assert_eq!(tag.get_int("HideFlags"), Some(0x05));
//! ```

mod rewriters;

use rewriters::register_rewriters;

use tracing::{trace, warn};

use crate::{
    Config, DataKey, DataType, DataValue, Item, Mappings, OwnCompound, OwnList,
    StructuredData, StructuredDataContainer, StructuredDataKey,
};

type Rewriter = Box<dyn Fn(&Context<'_>, &DataValue, &mut OwnCompound) + Send + Sync>;

/// What a rewriter knows besides its payload.
pub struct Context<'a> {
    converter: &'a StructuredDataConverter,
    show_in_tooltip: bool,
    depth: usize,
}

impl Context<'_> {
    #[inline]
    pub fn mappings(&self) -> &Mappings {
        &self.converter.mappings
    }

    /// The tooltip visibility of the entry being converted.
    #[inline]
    pub fn show_in_tooltip(&self) -> bool {
        self.show_in_tooltip
    }

    /// Item nesting depth; 0 for a top-level item.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Writes `items` under `key` as legacy item compounds
    /// `{id, Count, tag}`, each `tag` converted with the full table.
    ///
    /// Past the configured nesting cap the key is omitted.
    pub fn put_item_list(&self, tag: &mut OwnCompound, key: &str, items: &[Item]) {
        let depth = self.depth + 1;
        if depth > self.converter.max_item_depth {
            warn!(
                key,
                depth,
                max = self.converter.max_item_depth,
                "nested items exceed the depth cap, omitting"
            );
            return;
        }
        let list = OwnList::from_compounds(items.iter().map(|item| {
            let mut saved = OwnCompound::new();
            saved.put_string("id", &self.converter.placeholder_item);
            saved.put_byte("Count", item.amount as i8);
            saved.put("tag", self.converter.to_tag_at(&item.data, depth));
            saved
        }));
        tag.put(key, list);
    }
}

/// Converts structured item data into the single legacy item tag.
pub struct StructuredDataConverter {
    rewriters: Vec<Option<Rewriter>>,
    mappings: Mappings,
    max_item_depth: usize,
    placeholder_item: String,
}

impl StructuredDataConverter {
    /// A converter with the rewriters of every supported key.
    pub fn new(mappings: Mappings, config: &Config) -> Self {
        let mut converter = Self::empty(mappings, config);
        register_rewriters(&mut converter);
        converter
    }

    /// A converter without rewriters.
    pub fn empty(mappings: Mappings, config: &Config) -> Self {
        Self {
            rewriters: (0..DataKey::COUNT).map(|_| None).collect(),
            mappings,
            max_item_depth: config.max_item_depth,
            placeholder_item: config.placeholder_item.clone(),
        }
    }

    /// Installs the rewriter for `key`.
    ///
    /// Each key is registered once; a second registration replaces the
    /// first and trips a debug assertion.
    pub fn register<T, F>(&mut self, key: StructuredDataKey<T>, rewriter: F)
    where
        T: DataType,
        F: Fn(&Context<'_>, &T, &mut OwnCompound) + Send + Sync + 'static,
    {
        let key = key.key();
        let slot = &mut self.rewriters[key.index()];
        debug_assert!(slot.is_none(), "{key} registered twice");
        *slot = Some(Box::new(move |context, value, tag| match T::from_value(value) {
            Some(value) => rewriter(context, value, tag),
            None => tracing::debug!(%key, "payload does not match its key, skipping"),
        }));
    }

    #[inline]
    pub fn has_converter(&self, key: DataKey) -> bool {
        self.rewriters[key.index()].is_some()
    }

    /// Number of keys with a rewriter.
    pub fn converter_count(&self) -> usize {
        self.rewriters.iter().filter(|slot| slot.is_some()).count()
    }

    #[inline]
    pub fn mappings(&self) -> &Mappings {
        &self.mappings
    }

    /// Writes one entry into `tag`.
    ///
    /// Empty entries and keys without a rewriter leave `tag` untouched.
    pub fn write_to_tag(&self, data: &StructuredData, tag: &mut OwnCompound) {
        self.write_at(data, tag, 0);
    }

    /// Converts a whole container into a fresh legacy tag.
    pub fn to_tag(&self, data: &StructuredDataContainer) -> OwnCompound {
        self.to_tag_at(data, 0)
    }

    fn to_tag_at(&self, data: &StructuredDataContainer, depth: usize) -> OwnCompound {
        let mut tag = OwnCompound::new();
        for entry in data {
            self.write_at(entry, &mut tag, depth);
        }
        tag
    }

    fn write_at(&self, data: &StructuredData, tag: &mut OwnCompound, depth: usize) {
        let Some(value) = data.value() else {
            return;
        };
        let Some(rewriter) = &self.rewriters[data.key().index()] else {
            trace!(key = %data.key(), "no converter registered");
            return;
        };
        let context = Context {
            converter: self,
            show_in_tooltip: data.show_in_tooltip(),
            depth,
        };
        rewriter(&context, value, tag);
    }
}

impl std::fmt::Debug for StructuredDataConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructuredDataConverter")
            .field("converters", &self.converter_count())
            .field("max_item_depth", &self.max_item_depth)
            .field("placeholder_item", &self.placeholder_item)
            .finish_non_exhaustive()
    }
}

/// Hide-flag bits of the legacy `HideFlags` field.
pub mod hide_flags {
    pub const ENCHANTMENTS: i32 = 0x01;
    pub const ATTRIBUTE_MODIFIERS: i32 = 0x02;
    pub const UNBREAKABLE: i32 = 0x04;
    /// Shared by stored enchantments and the additional tooltip.
    pub const ADDITIONAL: i32 = 0x20;
    pub const DYE: i32 = 0x40;
}

/// ORs `flag` into the `HideFlags` field of `tag`.
pub fn put_hide_flag(tag: &mut OwnCompound, flag: i32) {
    let flags = tag.get_int("HideFlags").unwrap_or(0);
    tag.put_int("HideFlags", flags | flag);
}
