//! Structured item data: keys, component payloads, and the item model they
//! attach to.
//!
//! ```
//! use na_via::{Enchantments, Item, StructuredData, keys};
//!
//! let mut item = Item::new(812, 1);
//! item.data.set(StructuredData::of(keys::DAMAGE, 12));
//! item.data.set(StructuredData::of(keys::ENCHANTMENTS, Enchantments::new().with(13, 5)).hidden());
//!
//! assert_eq!(item.data.len(), 2);
//! assert_eq!(item.data.get(keys::DAMAGE), Some(&12));
//! ```

mod component;
mod container;
mod key;

pub use component::*;
pub use container::*;
pub use key::*;

/// One structured data entry.
///
/// An empty entry marks its key as explicitly removed; it carries no payload
/// and produces no legacy output.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredData {
    key: DataKey,
    value: Option<DataValue>,
    show_in_tooltip: bool,
}

impl StructuredData {
    /// An entry holding `value`, shown in the tooltip.
    pub fn of<T: DataType>(key: StructuredDataKey<T>, value: T) -> Self {
        Self {
            key: key.key(),
            value: Some(value.into_value()),
            show_in_tooltip: true,
        }
    }

    pub fn empty(key: DataKey) -> Self {
        Self {
            key,
            value: None,
            show_in_tooltip: true,
        }
    }

    /// Sets the tooltip visibility of this entry.
    #[must_use]
    pub fn with_tooltip(mut self, show_in_tooltip: bool) -> Self {
        self.show_in_tooltip = show_in_tooltip;
        self
    }

    /// Shorthand for `with_tooltip(false)`.
    #[must_use]
    pub fn hidden(self) -> Self {
        self.with_tooltip(false)
    }

    #[inline]
    pub fn key(&self) -> DataKey {
        self.key
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    #[inline]
    pub fn show_in_tooltip(&self) -> bool {
        self.show_in_tooltip
    }

    /// The payload; `None` for empty entries.
    #[inline]
    pub fn value(&self) -> Option<&DataValue> {
        self.value.as_ref()
    }

    /// The payload as `T`, if the entry is non-empty and holds a `T`.
    pub fn get<T: DataType>(&self) -> Option<&T> {
        self.value.as_ref().and_then(T::from_value)
    }
}

/// A modern item stack: numeric id, count and structured data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub identifier: i32,
    pub amount: i32,
    pub data: StructuredDataContainer,
}

impl Item {
    pub fn new(identifier: i32, amount: i32) -> Self {
        Self {
            identifier,
            amount,
            data: StructuredDataContainer::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, data: StructuredData) -> Self {
        self.data.set(data);
        self
    }
}
