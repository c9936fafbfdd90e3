//! The catalogue of wire value codecs.
//!
//! Each codec is a zero-sized (or near zero-sized) value implementing
//! [`Type`]; the numeric ones also implement [`TypeConverter`], which
//! normalises loosely typed input ([`Loose`]) into the codec's value type.
//!
//! ```
//! use na_via::{Loose, Type, TypeConverter, UNSIGNED_SHORT};
//!
//! let mut buffer = Vec::new();
//! UNSIGNED_SHORT.write(&mut buffer, &65535).unwrap();
//! assert_eq!(buffer, [0xFF, 0xFF]);
//! assert_eq!(UNSIGNED_SHORT.read(&mut &buffer[..]).unwrap(), 65535);
//!
//! assert_eq!(UNSIGNED_SHORT.convert(Loose::Boolean(true)).unwrap(), 1);
//! assert_eq!(UNSIGNED_SHORT.convert(Loose::Float(3.9)).unwrap(), 3);
//! ```

mod item;
mod nbt;
mod position;
mod primitive;
mod string;
mod uuid;
mod var_int;

pub use item::*;
pub use nbt::*;
pub use position::*;
pub use primitive::*;
pub use string::*;
pub use self::uuid::*;
pub use var_int::*;

use bytes::{Buf, BufMut};

use crate::{Error, Result, cold_path};

/// A wire codec for values of type [`Type::Value`].
pub trait Type {
    type Value;

    /// Stable identity of this codec within the catalogue.
    const KIND: TypeKind;

    /// Decodes one value, failing with
    /// [`TruncatedInput`](Error::TruncatedInput) if the buffer runs out.
    fn read(&self, buffer: &mut impl Buf) -> Result<Self::Value>;

    /// Encodes one value. Values the wire form cannot represent are rejected
    /// with [`ValueOutOfRange`](Error::ValueOutOfRange) before any byte is
    /// written.
    fn write(&self, buffer: &mut impl BufMut, value: &Self::Value) -> Result<()>;
}

/// Lenient normalisation of loosely typed values into a codec's value type.
pub trait TypeConverter: Type {
    fn convert(&self, value: Loose<Self::Value>) -> Result<Self::Value>;
}

/// A value arriving from a loosely typed source such as a plugin API.
#[derive(Debug, Clone, PartialEq)]
pub enum Loose<T> {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    /// Already of the target type; passed through unchanged.
    Already(T),
}

impl<T> Loose<T> {
    /// Name of the input shape, used in conversion errors.
    pub fn shape(&self) -> &'static str {
        match self {
            Loose::Integer(_) => "integer",
            Loose::Float(_) => "float",
            Loose::Boolean(_) => "boolean",
            Loose::Text(_) => "text",
            Loose::Already(_) => "value",
        }
    }

    /// Maps the `Already` payload, keeping every other shape.
    pub fn try_map<U>(self, f: impl FnOnce(T) -> Result<U>) -> Result<Loose<U>> {
        Ok(match self {
            Loose::Integer(value) => Loose::Integer(value),
            Loose::Float(value) => Loose::Float(value),
            Loose::Boolean(value) => Loose::Boolean(value),
            Loose::Text(value) => Loose::Text(value),
            Loose::Already(value) => Loose::Already(f(value)?),
        })
    }
}

/// Truncates a float toward zero into an `i64`, rejecting NaN and values
/// outside the `i64` range.
fn truncate(value: f64, what: &'static str) -> Result<i64> {
    if value.is_nan() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        cold_path();
        return Err(Error::ValueOutOfRange {
            what,
            value: value as i64,
        });
    }
    Ok(value.trunc() as i64)
}

/// Integer-target normalisation shared by every integral codec.
pub(crate) fn convert_integer<T>(value: Loose<T>, what: &'static str) -> Result<T>
where
    T: TryFrom<i64>,
{
    let wide = match value {
        Loose::Already(value) => return Ok(value),
        Loose::Integer(value) => value,
        Loose::Float(value) => truncate(value, what)?,
        Loose::Boolean(value) => value as i64,
        Loose::Text(_) => {
            cold_path();
            return Err(Error::UnsupportedConversion {
                from: "text",
                to: what,
            });
        }
    };
    T::try_from(wide).map_err(|_| Error::ValueOutOfRange { what, value: wide })
}

/// Float-target normalisation; booleans become 1/0 and text is rejected.
pub(crate) fn convert_float<T>(value: Loose<T>, what: &'static str, from_f64: fn(f64) -> T) -> Result<T> {
    match value {
        Loose::Already(value) => Ok(value),
        Loose::Integer(value) => Ok(from_f64(value as f64)),
        Loose::Float(value) => Ok(from_f64(value)),
        Loose::Boolean(value) => Ok(from_f64(if value { 1.0 } else { 0.0 })),
        other => {
            cold_path();
            Err(Error::UnsupportedConversion {
                from: other.shape(),
                to: what,
            })
        }
    }
}

/// Stable identity of each codec in the catalogue.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TypeKind {
    Byte = 0,
    Boolean = 1,
    Short = 2,
    UnsignedShort = 3,
    Int = 4,
    Long = 5,
    Float = 6,
    Double = 7,
    VarInt = 8,
    VarLong = 9,
    String = 10,
    Component = 11,
    Position = 12,
    OptionalPosition = 13,
    Rotation = 14,
    Vector = 15,
    Uuid = 16,
    OptionalUuid = 17,
    Nbt = 18,
    NamelessNbt = 19,
    Item = 20,
}

impl TypeKind {
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            TypeKind::Byte => "Byte",
            TypeKind::Boolean => "Boolean",
            TypeKind::Short => "Short",
            TypeKind::UnsignedShort => "UnsignedShort",
            TypeKind::Int => "Int",
            TypeKind::Long => "Long",
            TypeKind::Float => "Float",
            TypeKind::Double => "Double",
            TypeKind::VarInt => "VarInt",
            TypeKind::VarLong => "VarLong",
            TypeKind::String => "String",
            TypeKind::Component => "Component",
            TypeKind::Position => "Position",
            TypeKind::OptionalPosition => "OptionalPosition",
            TypeKind::Rotation => "Rotation",
            TypeKind::Vector => "Vector",
            TypeKind::Uuid => "UUID",
            TypeKind::OptionalUuid => "OptionalUUID",
            TypeKind::Nbt => "NBT",
            TypeKind::NamelessNbt => "NamelessNBT",
            TypeKind::Item => "Item",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
