use bytes::BufMut;
use zerocopy::byteorder;

use crate::{ByteOrder, Error, OwnCompound, OwnList, OwnValue, Result, Tag, cold_path};

/// Writes the payload of `value` (no tag type, no name).
///
/// The value is encoded to scratch memory first, so `buf` receives either
/// the whole payload or nothing.
pub fn write_payload<O: ByteOrder>(value: &OwnValue, buf: &mut impl BufMut) -> Result<()> {
    let mut out = Vec::new();
    encode_value::<O>(value, &mut out)?;
    buf.put_slice(&out);
    Ok(())
}

/// Writes a root value with its tag type and name.
pub fn write_named<O: ByteOrder>(
    name: &str,
    value: &OwnValue,
    buf: &mut impl BufMut,
) -> Result<()> {
    let mut out = Vec::new();
    out.push(value.tag_id().into());
    if value.tag_id() != Tag::End {
        encode_string::<O>(name, &mut out)?;
        encode_value::<O>(value, &mut out)?;
    }
    buf.put_slice(&out);
    Ok(())
}

/// Writes a root value with its tag type but without a name.
pub fn write_nameless<O: ByteOrder>(value: &OwnValue, buf: &mut impl BufMut) -> Result<()> {
    let mut out = Vec::new();
    out.push(value.tag_id().into());
    encode_value::<O>(value, &mut out)?;
    buf.put_slice(&out);
    Ok(())
}

impl OwnValue {
    /// Encodes this value as an unnamed-document root (`""`).
    pub fn write_to_vec<TARGET: ByteOrder>(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        write_named::<TARGET>("", self, &mut out)?;
        Ok(out)
    }
}

impl OwnCompound {
    /// Encodes this compound as an unnamed-document root (`""`).
    pub fn write_to_vec<TARGET: ByteOrder>(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        encode_compound_root::<TARGET>(self, true, &mut out)?;
        Ok(out)
    }
}

fn encode_len(len: usize, out: &mut Vec<u8>, order: impl Fn(i32) -> [u8; 4]) -> Result<()> {
    let Ok(len) = i32::try_from(len) else {
        cold_path();
        return Err(Error::ValueOutOfRange {
            what: "NBT length",
            value: len as i64,
        });
    };
    out.extend_from_slice(&order(len));
    Ok(())
}

fn i32_bytes<O: ByteOrder>(value: i32) -> [u8; 4] {
    byteorder::I32::<O>::new(value).to_bytes()
}

pub(crate) fn encode_string<O: ByteOrder>(value: &str, out: &mut Vec<u8>) -> Result<()> {
    let bytes = simd_cesu8::mutf8::encode(value);
    let Ok(len) = u16::try_from(bytes.len()) else {
        cold_path();
        return Err(Error::ValueOutOfRange {
            what: "NBT string length",
            value: bytes.len() as i64,
        });
    };
    out.extend_from_slice(&byteorder::U16::<O>::new(len).to_bytes());
    out.extend_from_slice(&bytes);
    Ok(())
}

fn encode_value<O: ByteOrder>(value: &OwnValue, out: &mut Vec<u8>) -> Result<()> {
    match value {
        OwnValue::End => {}
        OwnValue::Byte(value) => out.push(*value as u8),
        OwnValue::Short(value) => out.extend_from_slice(&byteorder::I16::<O>::new(*value).to_bytes()),
        OwnValue::Int(value) => out.extend_from_slice(&i32_bytes::<O>(*value)),
        OwnValue::Long(value) => out.extend_from_slice(&byteorder::I64::<O>::new(*value).to_bytes()),
        OwnValue::Float(value) => out.extend_from_slice(&byteorder::F32::<O>::new(*value).to_bytes()),
        OwnValue::Double(value) => {
            out.extend_from_slice(&byteorder::F64::<O>::new(*value).to_bytes())
        }
        OwnValue::ByteArray(values) => {
            encode_len(values.len(), out, i32_bytes::<O>)?;
            out.extend(values.iter().map(|b| *b as u8));
        }
        OwnValue::String(value) => encode_string::<O>(value, out)?,
        OwnValue::List(list) => encode_list::<O>(list, out)?,
        OwnValue::Compound(compound) => encode_compound::<O>(compound, out)?,
        OwnValue::IntArray(values) => {
            encode_len(values.len(), out, i32_bytes::<O>)?;
            for value in values {
                out.extend_from_slice(&i32_bytes::<O>(*value));
            }
        }
        OwnValue::LongArray(values) => {
            encode_len(values.len(), out, i32_bytes::<O>)?;
            for value in values {
                out.extend_from_slice(&byteorder::I64::<O>::new(*value).to_bytes());
            }
        }
    }
    Ok(())
}

fn encode_list<O: ByteOrder>(list: &OwnList, out: &mut Vec<u8>) -> Result<()> {
    out.push(list.element_tag().into());
    encode_len(list.len(), out, i32_bytes::<O>)?;
    for value in list {
        encode_value::<O>(value, out)?;
    }
    Ok(())
}

fn encode_compound<O: ByteOrder>(compound: &OwnCompound, out: &mut Vec<u8>) -> Result<()> {
    for (key, value) in compound {
        // `End` cannot be stored inside a compound; it would terminate it.
        if value.tag_id() == Tag::End {
            continue;
        }
        out.push(value.tag_id().into());
        encode_string::<O>(key, out)?;
        encode_value::<O>(value, out)?;
    }
    out.push(Tag::End.into());
    Ok(())
}

pub(crate) fn encode_compound_root<O: ByteOrder>(
    compound: &OwnCompound,
    named: bool,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.push(Tag::Compound.into());
    if named {
        encode_string::<O>("", out)?;
    }
    encode_compound::<O>(compound, out)
}
