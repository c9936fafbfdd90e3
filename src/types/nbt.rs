use bytes::{Buf, BufMut};
use zerocopy::BigEndian;

use crate::{
    Error, OwnCompound, Result, Tag, Type, TypeKind, cold_path, encode_compound_root,
    read_root_compound, read_string,
};

/// A compound document as carried in packets.
///
/// An `End` tag in place of the root stands for "no document" and reads as
/// `None`. The named form (used before 1.20.2) carries a root name, which is
/// read and discarded; written documents always use the empty name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompoundTagType<const NAMED: bool>;

pub const NBT: CompoundTagType<true> = CompoundTagType;

pub const NAMELESS_NBT: CompoundTagType<false> = CompoundTagType;

impl<const NAMED: bool> Type for CompoundTagType<NAMED> {
    type Value = Option<OwnCompound>;

    const KIND: TypeKind = if NAMED { TypeKind::Nbt } else { TypeKind::NamelessNbt };

    fn read(&self, buffer: &mut impl Buf) -> Result<Option<OwnCompound>> {
        let tag = Tag::from_u8(buffer.try_get_u8()?)?;
        match tag {
            Tag::End => return Ok(None),
            Tag::Compound => {}
            other => {
                cold_path();
                return Err(Error::TagMismatch {
                    expected: Tag::Compound.into(),
                    actual: other.into(),
                });
            }
        }
        if NAMED {
            read_string::<BigEndian>(buffer)?;
        }
        read_root_compound::<BigEndian>(buffer).map(Some)
    }

    fn write(&self, buffer: &mut impl BufMut, value: &Option<OwnCompound>) -> Result<()> {
        let Some(compound) = value else {
            buffer.put_u8(Tag::End.into());
            return Ok(());
        };
        let mut out = Vec::new();
        encode_compound_root::<BigEndian>(compound, NAMED, &mut out)?;
        buffer.put_slice(&out);
        Ok(())
    }
}
