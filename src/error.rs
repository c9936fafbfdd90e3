//! Error types for decoding, encoding and converting protocol values.
//!
//! Every fatal condition aborts the value or packet being processed and
//! nothing else. Missing legacy identifiers and structured data keys without a
//! converter are not errors at all; the converter drops them silently.
//!
//! # Example
//!
//! ```
//! use na_via::{Error, Type, VAR_INT};
//!
//! let mut truncated: &[u8] = &[0x80];
//! match VAR_INT.read(&mut truncated) {
//!     Err(Error::TruncatedInput { .. }) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// All conditions that abort processing of the current value or packet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The buffer ended before the value was complete.
    #[error("unexpected end of input: needed {requested} bytes, {available} available")]
    TruncatedInput { requested: usize, available: usize },

    /// A numeric value (or a length) does not fit the target wire width.
    ///
    /// Raised before any byte of the value is emitted.
    #[error("{what} value {value} is out of range")]
    ValueOutOfRange { what: &'static str, value: i64 },

    /// Lenient normalisation received a value of an incompatible shape.
    #[error("cannot convert {from} to {to}")]
    UnsupportedConversion {
        from: &'static str,
        to: &'static str,
    },

    /// A metadata ordinal lies outside the version's type table.
    #[error("metadata type {index} is out of range (table has {len} types)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A metadata ordinal maps to a discontinued slot.
    #[error("metadata type {0} is discontinued")]
    UnsupportedMetadataType(i32),

    /// The protocol revision has no table for the requested kind of data.
    #[error("protocol {0} is not supported here")]
    UnsupportedVersion(i32),

    /// A var-int ran past its maximum encoded length.
    #[error("var-int is too big")]
    VarIntTooBig,

    /// NBT defines tag types 0-12. Anything else is rejected.
    #[error("invalid NBT tag type: {0:#04x}")]
    InvalidTagType(u8),

    /// An element of a list does not carry the list's element tag.
    #[error("tag in list mismatch: expected {expected:#04x}, got {actual:#04x}")]
    TagMismatch { expected: u8, actual: u8 },

    /// NBT nesting went deeper than the decoder allows.
    #[error("NBT nesting exceeds depth {0}")]
    DepthLimit(usize),

    /// A protocol string was not valid UTF-8.
    #[error("string is not valid UTF-8")]
    MalformedString,

    /// A chat component string did not hold valid JSON.
    #[error("malformed chat component: {0}")]
    MalformedComponent(serde_json::Error),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(serde_json::Error),
}

impl From<bytes::TryGetError> for Error {
    #[inline]
    fn from(error: bytes::TryGetError) -> Self {
        Error::TruncatedInput {
            requested: error.requested,
            available: error.available,
        }
    }
}

impl Error {
    /// Returns `true` for the metadata table conditions of this error set.
    #[inline]
    pub fn is_metadata_error(&self) -> bool {
        matches!(
            self,
            Error::IndexOutOfRange { .. } | Error::UnsupportedMetadataType(_)
        )
    }
}

/// What the surrounding pipeline should do with a packet that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Close the connection.
    #[default]
    Disconnect,
    /// Drop the packet and keep the connection alive.
    DropPacket,
}
