use bytes::{Buf, BufMut};
use zerocopy::BigEndian;

use crate::{Error, NBT, OwnCompound, Result, Type, TypeKind, cold_path, encode_compound_root};

/// A legacy item stack: numeric id, count, damage and optional tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataItem {
    pub identifier: i32,
    pub amount: i8,
    pub data: i16,
    pub tag: Option<OwnCompound>,
}

impl DataItem {
    pub fn new(identifier: i32, amount: i8, data: i16) -> Self {
        Self {
            identifier,
            amount,
            data,
            tag: None,
        }
    }
}

/// `i16` id (negative for an empty slot), then count, damage and named NBT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemType;

pub const ITEM: ItemType = ItemType;

impl Type for ItemType {
    type Value = Option<DataItem>;

    const KIND: TypeKind = TypeKind::Item;

    fn read(&self, buffer: &mut impl Buf) -> Result<Option<DataItem>> {
        let identifier = buffer.try_get_i16()?;
        if identifier < 0 {
            return Ok(None);
        }
        let amount = buffer.try_get_i8()?;
        let data = buffer.try_get_i16()?;
        let tag = NBT.read(buffer)?;
        Ok(Some(DataItem {
            identifier: identifier.into(),
            amount,
            data,
            tag,
        }))
    }

    fn write(&self, buffer: &mut impl BufMut, value: &Option<DataItem>) -> Result<()> {
        let Some(item) = value else {
            buffer.put_i16(-1);
            return Ok(());
        };
        let identifier = match i16::try_from(item.identifier) {
            Ok(identifier) if identifier >= 0 => identifier,
            _ => {
                cold_path();
                return Err(Error::ValueOutOfRange {
                    what: "item identifier",
                    value: item.identifier.into(),
                });
            }
        };
        let mut tag = Vec::new();
        match &item.tag {
            Some(compound) => encode_compound_root::<BigEndian>(compound, true, &mut tag)?,
            None => tag.push(0),
        }
        buffer.put_i16(identifier);
        buffer.put_i8(item.amount);
        buffer.put_i16(item.data);
        buffer.put_slice(&tag);
        Ok(())
    }
}
