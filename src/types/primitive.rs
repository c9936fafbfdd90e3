use bytes::{Buf, BufMut};

use crate::{Loose, Result, Type, TypeConverter, TypeKind, convert_float, convert_integer};

macro_rules! fixed_width_type {
    ($(
        $(#[$meta:meta])*
        $name:ident, $constant:ident, $value:ty, $kind:ident, $get:ident, $put:ident;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            pub const $constant: $name = $name;

            impl Type for $name {
                type Value = $value;

                const KIND: TypeKind = TypeKind::$kind;

                #[inline]
                fn read(&self, buffer: &mut impl Buf) -> Result<$value> {
                    Ok(buffer.$get()?)
                }

                #[inline]
                fn write(&self, buffer: &mut impl BufMut, value: &$value) -> Result<()> {
                    buffer.$put(*value);
                    Ok(())
                }
            }
        )*
    };
}

fixed_width_type! {
    /// Signed 8-bit integer.
    ByteType, BYTE, i8, Byte, try_get_i8, put_i8;
    /// Signed 16-bit big-endian integer.
    ShortType, SHORT, i16, Short, try_get_i16, put_i16;
    /// Unsigned 16-bit big-endian integer.
    UnsignedShortType, UNSIGNED_SHORT, u16, UnsignedShort, try_get_u16, put_u16;
    /// Signed 32-bit big-endian integer.
    IntType, INT, i32, Int, try_get_i32, put_i32;
    /// Signed 64-bit big-endian integer.
    LongType, LONG, i64, Long, try_get_i64, put_i64;
    FloatType, FLOAT, f32, Float, try_get_f32, put_f32;
    DoubleType, DOUBLE, f64, Double, try_get_f64, put_f64;
}

impl TypeConverter for ByteType {
    fn convert(&self, value: Loose<i8>) -> Result<i8> {
        convert_integer(value, "byte")
    }
}

impl TypeConverter for ShortType {
    fn convert(&self, value: Loose<i16>) -> Result<i16> {
        convert_integer(value, "short")
    }
}

impl TypeConverter for UnsignedShortType {
    fn convert(&self, value: Loose<u16>) -> Result<u16> {
        convert_integer(value, "unsigned short")
    }
}

impl TypeConverter for IntType {
    fn convert(&self, value: Loose<i32>) -> Result<i32> {
        convert_integer(value, "int")
    }
}

impl TypeConverter for LongType {
    fn convert(&self, value: Loose<i64>) -> Result<i64> {
        convert_integer(value, "long")
    }
}

impl TypeConverter for FloatType {
    fn convert(&self, value: Loose<f32>) -> Result<f32> {
        convert_float(value, "float", |value| value as f32)
    }
}

impl TypeConverter for DoubleType {
    fn convert(&self, value: Loose<f64>) -> Result<f64> {
        convert_float(value, "double", |value| value)
    }
}

/// One byte; any nonzero value reads as `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanType;

pub const BOOLEAN: BooleanType = BooleanType;

impl Type for BooleanType {
    type Value = bool;

    const KIND: TypeKind = TypeKind::Boolean;

    #[inline]
    fn read(&self, buffer: &mut impl Buf) -> Result<bool> {
        Ok(buffer.try_get_u8()? != 0)
    }

    #[inline]
    fn write(&self, buffer: &mut impl BufMut, value: &bool) -> Result<()> {
        buffer.put_u8(*value as u8);
        Ok(())
    }
}

impl TypeConverter for BooleanType {
    /// Numbers are `true` exactly when they equal 1.
    fn convert(&self, value: Loose<bool>) -> Result<bool> {
        match value {
            Loose::Already(value) | Loose::Boolean(value) => Ok(value),
            Loose::Integer(value) => Ok(value == 1),
            Loose::Float(value) => Ok(value.trunc() == 1.0),
            Loose::Text(_) => Err(crate::Error::UnsupportedConversion {
                from: "text",
                to: "boolean",
            }),
        }
    }
}
