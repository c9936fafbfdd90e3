use crate::{Error, OwnCompound, OwnValue, Result, Tag, cold_path};

/// A homogeneous list node. An empty list may carry the `End` element type.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnList {
    element: Tag,
    values: Vec<OwnValue>,
}

impl Default for OwnList {
    fn default() -> Self {
        Self {
            element: Tag::End,
            values: Vec::new(),
        }
    }
}

impl OwnList {
    /// Creates an empty list of the given element type.
    #[inline]
    pub fn new(element: Tag) -> Self {
        Self {
            element,
            values: Vec::new(),
        }
    }

    /// Builds a list out of values that must all share one tag type.
    pub fn from_values(values: Vec<OwnValue>) -> Result<Self> {
        let element = values.first().map_or(Tag::End, OwnValue::tag_id);
        if let Some(mismatch) = values.iter().find(|value| value.tag_id() != element) {
            cold_path();
            return Err(Error::TagMismatch {
                expected: element.into(),
                actual: mismatch.tag_id().into(),
            });
        }
        Ok(Self { element, values })
    }

    pub fn from_strings<S: Into<String>>(strings: impl IntoIterator<Item = S>) -> Self {
        Self {
            element: Tag::String,
            values: strings
                .into_iter()
                .map(|s| OwnValue::String(s.into()))
                .collect(),
        }
    }

    pub fn from_compounds(compounds: impl IntoIterator<Item = OwnCompound>) -> Self {
        Self {
            element: Tag::Compound,
            values: compounds.into_iter().map(OwnValue::Compound).collect(),
        }
    }

    /// Appends a value. An `End`-typed list adopts the type of its first
    /// element; afterwards every element must match.
    pub fn push(&mut self, value: impl Into<OwnValue>) -> Result<()> {
        let value = value.into();
        let tag = value.tag_id();
        if self.element == Tag::End && self.values.is_empty() {
            self.element = tag;
        } else if tag != self.element {
            cold_path();
            return Err(Error::TagMismatch {
                expected: self.element.into(),
                actual: tag.into(),
            });
        }
        self.values.push(value);
        Ok(())
    }

    /// The element tag type.
    #[inline]
    pub fn element_tag(&self) -> Tag {
        self.element
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&OwnValue> {
        self.values.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut OwnValue> {
        self.values.get_mut(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, OwnValue> {
        self.values.iter()
    }

    /// Elements that are strings, in order.
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        self.values.iter().filter_map(OwnValue::as_str)
    }

    /// Elements that are compounds, in order.
    pub fn compounds(&self) -> impl Iterator<Item = &OwnCompound> {
        self.values.iter().filter_map(OwnValue::as_compound)
    }
}

impl<'a> IntoIterator for &'a OwnList {
    type Item = &'a OwnValue;
    type IntoIter = std::slice::Iter<'a, OwnValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
