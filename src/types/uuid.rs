use bytes::{Buf, BufMut};
use uuid::Uuid;

use crate::{BOOLEAN, Result, Type, TypeKind};

/// Two big-endian `u64`s, most significant half first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidType;

pub const UUID: UuidType = UuidType;

impl Type for UuidType {
    type Value = Uuid;

    const KIND: TypeKind = TypeKind::Uuid;

    fn read(&self, buffer: &mut impl Buf) -> Result<Uuid> {
        let most = buffer.try_get_u64()?;
        let least = buffer.try_get_u64()?;
        Ok(Uuid::from_u64_pair(most, least))
    }

    fn write(&self, buffer: &mut impl BufMut, value: &Uuid) -> Result<()> {
        let (most, least) = value.as_u64_pair();
        buffer.put_u64(most);
        buffer.put_u64(least);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalUuidType;

pub const OPTIONAL_UUID: OptionalUuidType = OptionalUuidType;

impl Type for OptionalUuidType {
    type Value = Option<Uuid>;

    const KIND: TypeKind = TypeKind::OptionalUuid;

    fn read(&self, buffer: &mut impl Buf) -> Result<Option<Uuid>> {
        if BOOLEAN.read(buffer)? {
            UUID.read(buffer).map(Some)
        } else {
            Ok(None)
        }
    }

    fn write(&self, buffer: &mut impl BufMut, value: &Option<Uuid>) -> Result<()> {
        BOOLEAN.write(buffer, &value.is_some())?;
        if let Some(uuid) = value {
            UUID.write(buffer, uuid)?;
        }
        Ok(())
    }
}

/// The four-int form legacy NBT uses for UUIDs.
pub fn uuid_to_int_array(uuid: &Uuid) -> [i32; 4] {
    let (most, least) = uuid.as_u64_pair();
    [
        (most >> 32) as i32,
        most as i32,
        (least >> 32) as i32,
        least as i32,
    ]
}

pub fn uuid_from_int_array(ints: [i32; 4]) -> Uuid {
    let most = ((ints[0] as u32 as u64) << 32) | ints[1] as u32 as u64;
    let least = ((ints[2] as u32 as u64) << 32) | ints[3] as u32 as u64;
    Uuid::from_u64_pair(most, least)
}
