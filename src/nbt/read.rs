use bytes::Buf;
use zerocopy::byteorder;

use crate::{
    ByteOrder, Error, MAX_DEPTH, OwnCompound, OwnList, OwnValue, Result, Tag, cold_path,
};

#[inline]
fn take<const N: usize>(buf: &mut impl Buf) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    buf.try_copy_to_slice(&mut bytes)?;
    Ok(bytes)
}

#[inline]
fn read_i32<O: ByteOrder>(buf: &mut impl Buf) -> Result<i32> {
    Ok(byteorder::I32::<O>::from_bytes(take(buf)?).get())
}

/// Reads an array or list length, rejecting negative values and lengths the
/// remaining input cannot possibly hold.
fn read_len<O: ByteOrder>(buf: &mut impl Buf, element_size: usize) -> Result<usize> {
    let len = read_i32::<O>(buf)?;
    if len < 0 {
        cold_path();
        return Err(Error::ValueOutOfRange {
            what: "NBT length",
            value: len.into(),
        });
    }
    let len = len as usize;
    let requested = len.saturating_mul(element_size);
    if requested > buf.remaining() {
        cold_path();
        return Err(Error::TruncatedInput {
            requested,
            available: buf.remaining(),
        });
    }
    Ok(len)
}

pub(crate) fn read_string<O: ByteOrder>(buf: &mut impl Buf) -> Result<String> {
    let len = byteorder::U16::<O>::from_bytes(take(buf)?).get() as usize;
    if len > buf.remaining() {
        cold_path();
        return Err(Error::TruncatedInput {
            requested: len,
            available: buf.remaining(),
        });
    }
    let mut bytes = vec![0u8; len];
    buf.copy_to_slice(&mut bytes);
    Ok(simd_cesu8::mutf8::decode_lossy(&bytes).into_owned())
}

/// Reads the payload of a value whose tag type is already known.
pub fn read_payload<O: ByteOrder>(tag: Tag, buf: &mut impl Buf) -> Result<OwnValue> {
    read_value::<O>(tag, buf, 0)
}

/// Reads a root value preceded by its tag type and name.
///
/// A root tag type of `End` yields `("", OwnValue::End)`.
pub fn read_named<O: ByteOrder>(buf: &mut impl Buf) -> Result<(String, OwnValue)> {
    let tag = Tag::from_u8(buf.try_get_u8()?)?;
    if tag == Tag::End {
        return Ok((String::new(), OwnValue::End));
    }
    let name = read_string::<O>(buf)?;
    Ok((name, read_value::<O>(tag, buf, 0)?))
}

/// Reads a root value preceded by its tag type only.
pub fn read_nameless<O: ByteOrder>(buf: &mut impl Buf) -> Result<OwnValue> {
    let tag = Tag::from_u8(buf.try_get_u8()?)?;
    if tag == Tag::End {
        return Ok(OwnValue::End);
    }
    read_value::<O>(tag, buf, 0)
}

/// Reads the payload of a compound root whose tag type and name were already
/// consumed.
pub(crate) fn read_root_compound<O: ByteOrder>(buf: &mut impl Buf) -> Result<OwnCompound> {
    read_compound::<O>(buf, 1)
}

fn read_value<O: ByteOrder>(tag: Tag, buf: &mut impl Buf, depth: usize) -> Result<OwnValue> {
    if depth > MAX_DEPTH {
        cold_path();
        return Err(Error::DepthLimit(MAX_DEPTH));
    }

    Ok(match tag {
        Tag::End => OwnValue::End,
        Tag::Byte => OwnValue::Byte(buf.try_get_i8()?),
        Tag::Short => OwnValue::Short(byteorder::I16::<O>::from_bytes(take(buf)?).get()),
        Tag::Int => OwnValue::Int(read_i32::<O>(buf)?),
        Tag::Long => OwnValue::Long(byteorder::I64::<O>::from_bytes(take(buf)?).get()),
        Tag::Float => OwnValue::Float(byteorder::F32::<O>::from_bytes(take(buf)?).get()),
        Tag::Double => OwnValue::Double(byteorder::F64::<O>::from_bytes(take(buf)?).get()),
        Tag::ByteArray => OwnValue::ByteArray(read_byte_array::<O>(buf)?),
        Tag::String => OwnValue::String(read_string::<O>(buf)?),
        Tag::List => OwnValue::List(read_list::<O>(buf, depth)?),
        Tag::Compound => OwnValue::Compound(read_compound::<O>(buf, depth + 1)?),
        Tag::IntArray => OwnValue::IntArray(read_int_array::<O>(buf)?),
        Tag::LongArray => OwnValue::LongArray(read_long_array::<O>(buf)?),
    })
}

#[inline(never)]
fn read_byte_array<O: ByteOrder>(buf: &mut impl Buf) -> Result<Vec<i8>> {
    let len = read_len::<O>(buf, 1)?;
    let mut bytes = vec![0u8; len];
    buf.copy_to_slice(&mut bytes);
    Ok(bytes.into_iter().map(|b| b as i8).collect())
}

#[inline(never)]
fn read_int_array<O: ByteOrder>(buf: &mut impl Buf) -> Result<Vec<i32>> {
    let len = read_len::<O>(buf, 4)?;
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(read_i32::<O>(buf)?);
    }
    Ok(values)
}

#[inline(never)]
fn read_long_array<O: ByteOrder>(buf: &mut impl Buf) -> Result<Vec<i64>> {
    let len = read_len::<O>(buf, 8)?;
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(byteorder::I64::<O>::from_bytes(take(buf)?).get());
    }
    Ok(values)
}

#[inline(never)]
fn read_list<O: ByteOrder>(buf: &mut impl Buf, depth: usize) -> Result<OwnList> {
    let element = Tag::from_u8(buf.try_get_u8()?)?;
    let len = read_len::<O>(buf, 1)?;
    if element == Tag::End && len > 0 {
        cold_path();
        return Err(Error::InvalidTagType(Tag::End.into()));
    }
    let mut list = OwnList::new(element);
    for _ in 0..len {
        list.push(read_value::<O>(element, buf, depth + 1)?)?;
    }
    Ok(list)
}

#[inline(never)]
fn read_compound<O: ByteOrder>(buf: &mut impl Buf, depth: usize) -> Result<OwnCompound> {
    let mut compound = OwnCompound::new();
    loop {
        let tag = Tag::from_u8(buf.try_get_u8()?)?;
        if tag == Tag::End {
            return Ok(compound);
        }
        let name = read_string::<O>(buf)?;
        let value = read_value::<O>(tag, buf, depth)?;
        compound.put(&name, value);
    }
}
