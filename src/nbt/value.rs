use crate::{Index, OwnCompound, OwnList, Tag};

/// An owned node of a tagged tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OwnValue {
    #[default]
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(OwnList),
    Compound(OwnCompound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl OwnValue {
    /// Returns the tag type of this node.
    pub const fn tag_id(&self) -> Tag {
        match self {
            OwnValue::End => Tag::End,
            OwnValue::Byte(_) => Tag::Byte,
            OwnValue::Short(_) => Tag::Short,
            OwnValue::Int(_) => Tag::Int,
            OwnValue::Long(_) => Tag::Long,
            OwnValue::Float(_) => Tag::Float,
            OwnValue::Double(_) => Tag::Double,
            OwnValue::ByteArray(_) => Tag::ByteArray,
            OwnValue::String(_) => Tag::String,
            OwnValue::List(_) => Tag::List,
            OwnValue::Compound(_) => Tag::Compound,
            OwnValue::IntArray(_) => Tag::IntArray,
            OwnValue::LongArray(_) => Tag::LongArray,
        }
    }

    /// Looks a child up by list position or compound key.
    ///
    /// ```
    /// use na_via::{OwnCompound, OwnList, OwnValue};
    ///
    /// let mut root = OwnCompound::default();
    /// root.put("pages", OwnList::from_strings(["a", "b"]));
    /// let root = OwnValue::from(root);
    ///
    /// assert_eq!(root.get("pages").and_then(|p| p.get(1)).and_then(|v| v.as_str()), Some("b"));
    /// assert!(root.get(0).is_none());
    /// ```
    #[inline]
    pub fn get(&self, index: impl Index) -> Option<&OwnValue> {
        index.index_dispatch(
            self,
            |value, i| match value {
                OwnValue::List(list) => list.get(i),
                _ => None,
            },
            |value, key| match value {
                OwnValue::Compound(compound) => compound.get(key),
                _ => None,
            },
        )
    }

    #[inline]
    pub fn get_mut(&mut self, index: impl Index) -> Option<&mut OwnValue> {
        index.index_dispatch_mut(
            self,
            |value, i| match value {
                OwnValue::List(list) => list.get_mut(i),
                _ => None,
            },
            |value, key| match value {
                OwnValue::Compound(compound) => compound.get_mut(key),
                _ => None,
            },
        )
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            OwnValue::Byte(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            OwnValue::Short(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            OwnValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            OwnValue::Long(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            OwnValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            OwnValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OwnValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&OwnList> {
        match self {
            OwnValue::List(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&OwnCompound> {
        match self {
            OwnValue::Compound(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            OwnValue::IntArray(value) => Some(value),
            _ => None,
        }
    }

    /// Reads any numeric node as an `i32`, the way legacy readers coerce
    /// numeric tags. Non-numeric nodes yield `None`.
    pub fn as_number_i32(&self) -> Option<i32> {
        match *self {
            OwnValue::Byte(value) => Some(value.into()),
            OwnValue::Short(value) => Some(value.into()),
            OwnValue::Int(value) => Some(value),
            OwnValue::Long(value) => Some(value as i32),
            OwnValue::Float(value) => Some(value as i32),
            OwnValue::Double(value) => Some(value as i32),
            _ => None,
        }
    }

    /// Reads any numeric node as an `f64`.
    pub fn as_number_f64(&self) -> Option<f64> {
        match *self {
            OwnValue::Byte(value) => Some(value.into()),
            OwnValue::Short(value) => Some(value.into()),
            OwnValue::Int(value) => Some(value.into()),
            OwnValue::Long(value) => Some(value as f64),
            OwnValue::Float(value) => Some(value.into()),
            OwnValue::Double(value) => Some(value),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($type:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$type> for OwnValue {
                #[inline]
                fn from(value: $type) -> Self {
                    OwnValue::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    OwnList => List,
    OwnCompound => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
);

impl From<()> for OwnValue {
    fn from(_: ()) -> Self {
        OwnValue::End
    }
}

impl From<bool> for OwnValue {
    #[inline]
    fn from(value: bool) -> Self {
        OwnValue::Byte(value as i8)
    }
}

impl From<&str> for OwnValue {
    #[inline]
    fn from(value: &str) -> Self {
        OwnValue::String(value.to_owned())
    }
}

impl From<&[i8]> for OwnValue {
    fn from(value: &[i8]) -> Self {
        OwnValue::ByteArray(value.to_vec())
    }
}

impl From<&[i32]> for OwnValue {
    fn from(value: &[i32]) -> Self {
        OwnValue::IntArray(value.to_vec())
    }
}

impl From<&[i64]> for OwnValue {
    fn from(value: &[i64]) -> Self {
        OwnValue::LongArray(value.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for OwnValue {
    fn from(value: [i32; N]) -> Self {
        OwnValue::IntArray(value.to_vec())
    }
}
