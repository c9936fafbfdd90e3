use bytes::{Buf, BufMut};

use crate::{Error, Loose, Result, Type, TypeConverter, TypeKind, cold_path, convert_integer};

const SEGMENT_BITS: u8 = 0x7F;
const CONTINUE_BIT: u8 = 0x80;

/// Variable-length `i32`, seven bits per byte, least significant group first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VarIntType;

pub const VAR_INT: VarIntType = VarIntType;

/// Number of bytes `value` occupies as a var-int.
pub const fn var_int_len(value: i32) -> usize {
    let value = value as u32;
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0xFFF_FFFF => 4,
        _ => 5,
    }
}

impl Type for VarIntType {
    type Value = i32;

    const KIND: TypeKind = TypeKind::VarInt;

    fn read(&self, buffer: &mut impl Buf) -> Result<i32> {
        Ok(read_var(buffer, 5)? as i32)
    }

    fn write(&self, buffer: &mut impl BufMut, value: &i32) -> Result<()> {
        write_var(buffer, *value as u32 as u64);
        Ok(())
    }
}

impl TypeConverter for VarIntType {
    fn convert(&self, value: Loose<i32>) -> Result<i32> {
        convert_integer(value, "var-int")
    }
}

/// Variable-length `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VarLongType;

pub const VAR_LONG: VarLongType = VarLongType;

impl Type for VarLongType {
    type Value = i64;

    const KIND: TypeKind = TypeKind::VarLong;

    fn read(&self, buffer: &mut impl Buf) -> Result<i64> {
        Ok(read_var(buffer, 10)? as i64)
    }

    fn write(&self, buffer: &mut impl BufMut, value: &i64) -> Result<()> {
        write_var(buffer, *value as u64);
        Ok(())
    }
}

impl TypeConverter for VarLongType {
    fn convert(&self, value: Loose<i64>) -> Result<i64> {
        convert_integer(value, "var-long")
    }
}

fn read_var(buffer: &mut impl Buf, max_bytes: u32) -> Result<u64> {
    let mut value = 0u64;
    for position in 0..max_bytes {
        let byte = buffer.try_get_u8()?;
        value |= u64::from(byte & SEGMENT_BITS) << (7 * position);
        if byte & CONTINUE_BIT == 0 {
            return Ok(value);
        }
    }
    cold_path();
    Err(Error::VarIntTooBig)
}

fn write_var(buffer: &mut impl BufMut, mut value: u64) {
    loop {
        if value & !u64::from(SEGMENT_BITS) == 0 {
            buffer.put_u8(value as u8);
            return;
        }
        buffer.put_u8((value as u8 & SEGMENT_BITS) | CONTINUE_BIT);
        value >>= 7;
    }
}
