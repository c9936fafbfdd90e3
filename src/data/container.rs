use indexmap::IndexMap;

use crate::{DataKey, DataType, StructuredData, StructuredDataKey};

/// The structured data of one item, at most one entry per key, kept in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredDataContainer {
    data: IndexMap<DataKey, StructuredData>,
}

impl StructuredDataContainer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data`, returning the entry it replaces.
    pub fn set(&mut self, data: StructuredData) -> Option<StructuredData> {
        self.data.insert(data.key(), data)
    }

    /// Stores an empty entry for `key`.
    pub fn set_empty(&mut self, key: DataKey) -> Option<StructuredData> {
        self.set(StructuredData::empty(key))
    }

    #[inline]
    pub fn entry(&self, key: DataKey) -> Option<&StructuredData> {
        self.data.get(&key)
    }

    /// The payload under `key`, if present and non-empty.
    pub fn get<T: DataType>(&self, key: StructuredDataKey<T>) -> Option<&T> {
        self.entry(key.key()).and_then(StructuredData::get)
    }

    #[inline]
    pub fn contains(&self, key: DataKey) -> bool {
        self.data.contains_key(&key)
    }

    pub fn remove(&mut self, key: DataKey) -> Option<StructuredData> {
        self.data.shift_remove(&key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> indexmap::map::Values<'_, DataKey, StructuredData> {
        self.data.values()
    }
}

impl<'a> IntoIterator for &'a StructuredDataContainer {
    type Item = &'a StructuredData;
    type IntoIter = indexmap::map::Values<'a, DataKey, StructuredData>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.values()
    }
}

impl FromIterator<StructuredData> for StructuredDataContainer {
    fn from_iter<T: IntoIterator<Item = StructuredData>>(iter: T) -> Self {
        let mut container = Self::new();
        for data in iter {
            container.set(data);
        }
        container
    }
}
