use bytes::{Buf, BufMut};

use crate::{DEFAULT_MAX_STRING_LENGTH, Error, Result, Type, TypeKind, VAR_INT, cold_path};

/// Var-int byte length followed by UTF-8, limited to `max_length` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringType {
    max_length: usize,
}

pub const STRING: StringType = StringType::new(DEFAULT_MAX_STRING_LENGTH);

impl StringType {
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    #[inline]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    fn check_chars(&self, value: &str) -> Result<()> {
        let chars = value.chars().count();
        if chars > self.max_length {
            cold_path();
            return Err(Error::ValueOutOfRange {
                what: "string length",
                value: chars as i64,
            });
        }
        Ok(())
    }
}

impl Default for StringType {
    fn default() -> Self {
        STRING
    }
}

impl Type for StringType {
    type Value = String;

    const KIND: TypeKind = TypeKind::String;

    fn read(&self, buffer: &mut impl Buf) -> Result<String> {
        let len = VAR_INT.read(buffer)?;
        // Each character takes at most four bytes.
        if len < 0 || len as usize > self.max_length.saturating_mul(4) {
            cold_path();
            return Err(Error::ValueOutOfRange {
                what: "string length",
                value: len.into(),
            });
        }
        let len = len as usize;
        if len > buffer.remaining() {
            cold_path();
            return Err(Error::TruncatedInput {
                requested: len,
                available: buffer.remaining(),
            });
        }
        let mut bytes = vec![0u8; len];
        buffer.copy_to_slice(&mut bytes);
        let value = String::from_utf8(bytes).map_err(|_| Error::MalformedString)?;
        self.check_chars(&value)?;
        Ok(value)
    }

    fn write(&self, buffer: &mut impl BufMut, value: &String) -> Result<()> {
        self.check_chars(value)?;
        let Ok(len) = i32::try_from(value.len()) else {
            cold_path();
            return Err(Error::ValueOutOfRange {
                what: "string length",
                value: value.len() as i64,
            });
        };
        VAR_INT.write(buffer, &len)?;
        buffer.put_slice(value.as_bytes());
        Ok(())
    }
}

/// A JSON text component carried as a protocol string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentType {
    string: StringType,
}

pub const COMPONENT: ComponentType = ComponentType { string: STRING };

impl ComponentType {
    pub const fn new(string: StringType) -> Self {
        Self { string }
    }
}

impl Type for ComponentType {
    type Value = serde_json::Value;

    const KIND: TypeKind = TypeKind::Component;

    fn read(&self, buffer: &mut impl Buf) -> Result<serde_json::Value> {
        let text = self.string.read(buffer)?;
        serde_json::from_str(&text).map_err(Error::MalformedComponent)
    }

    fn write(&self, buffer: &mut impl BufMut, value: &serde_json::Value) -> Result<()> {
        let text = serde_json::to_string(value).map_err(Error::MalformedComponent)?;
        self.string.write(buffer, &text)
    }
}
