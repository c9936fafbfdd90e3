use indexmap::IndexMap;

use crate::{OwnList, OwnValue};

/// A compound node: named children, kept in insertion order so that the
/// encoded form is deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OwnCompound {
    entries: IndexMap<String, OwnValue>,
}

macro_rules! put_scalar {
    ($($name:ident($type:ty)),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&mut self, key: &str, value: $type) {
                self.put(key, value);
            }
        )*
    };
}

impl OwnCompound {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a child, returning the node previously stored under `key`.
    #[inline]
    pub fn put(&mut self, key: &str, value: impl Into<OwnValue>) -> Option<OwnValue> {
        self.entries.insert(key.to_owned(), value.into())
    }

    put_scalar!(
        put_byte(i8),
        put_boolean(bool),
        put_short(i16),
        put_int(i32),
        put_long(i64),
        put_float(f32),
        put_double(f64),
        put_string(&str),
    );

    #[inline]
    pub fn get(&self, key: &str) -> Option<&OwnValue> {
        self.entries.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut OwnValue> {
        self.entries.get_mut(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes a child, keeping the order of the remaining ones.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<OwnValue> {
        self.entries.shift_remove(key)
    }

    /// Numeric child as `i32`; any numeric tag type qualifies.
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(OwnValue::as_number_i32)
    }

    /// Numeric child as `f64`; any numeric tag type qualifies.
    pub fn get_double(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(OwnValue::as_number_f64)
    }

    pub fn get_float(&self, key: &str) -> Option<f32> {
        self.get_double(key).map(|value| value as f32)
    }

    pub fn get_boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(OwnValue::as_byte).map(|value| value != 0)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OwnValue::as_str)
    }

    pub fn get_list(&self, key: &str) -> Option<&OwnList> {
        self.get(key).and_then(OwnValue::as_list)
    }

    pub fn get_compound(&self, key: &str) -> Option<&OwnCompound> {
        self.get(key).and_then(OwnValue::as_compound)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, OwnValue> {
        self.entries.iter()
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a OwnCompound {
    type Item = (&'a String, &'a OwnValue);
    type IntoIter = indexmap::map::Iter<'a, String, OwnValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<OwnValue>> FromIterator<(K, V)> for OwnCompound {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
