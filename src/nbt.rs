//! The tagged tree document legacy peers expect items to be described with.
//!
//! A tree is built out of [`OwnValue`] nodes: scalar leaves, homogeneous
//! [`OwnList`]s and [`OwnCompound`]s mapping names to nodes. Every node owns
//! its children. A converter builds a subtree and hands it to its parent with
//! [`OwnCompound::put`], after which the parent owns it.

mod compound;
mod list;
mod read;
mod value;
mod write;

pub use compound::*;
pub use list::*;
pub use read::*;
pub use value::*;
pub use write::*;

use crate::{Error, Result};

/// Maximum nesting accepted by the NBT decoder.
pub const MAX_DEPTH: usize = 128;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tag {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl Tag {
    /// Decodes a tag type byte.
    pub fn from_u8(value: u8) -> Result<Self> {
        Ok(match value {
            0 => Self::End,
            1 => Self::Byte,
            2 => Self::Short,
            3 => Self::Int,
            4 => Self::Long,
            5 => Self::Float,
            6 => Self::Double,
            7 => Self::ByteArray,
            8 => Self::String,
            9 => Self::List,
            10 => Self::Compound,
            11 => Self::IntArray,
            12 => Self::LongArray,
            _ => return Err(Error::InvalidTagType(value)),
        })
    }

    /// Returns `true` if this is a primitive tag type.
    ///
    /// Primitive tags are: Byte, Short, Int, Long, Float, Double.
    ///
    /// ```
    /// use na_via::Tag;
    ///
    /// assert!(Tag::Int.is_primitive());
    /// assert!(!Tag::List.is_primitive());
    /// ```
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
        )
    }

    /// Returns `true` for ByteArray, IntArray and LongArray.
    pub const fn is_array(self) -> bool {
        matches!(self, Self::ByteArray | Self::IntArray | Self::LongArray)
    }

    /// Returns `true` for List and Compound.
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }
}

impl From<Tag> for u8 {
    #[inline]
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
