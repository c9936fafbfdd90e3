//! Runtime configuration of the conversion core.
//!
//! The defaults reproduce the behaviour legacy peers expect; a host only needs
//! a configuration document to change the error policy or the recursion cap.
//!
//! ```
//! use na_via::{Config, Disposition};
//!
//! let config = Config::from_json(r#"{
//!     "error_policy": { "discontinued_metadata": "drop_packet" },
//!     "max_item_depth": 4
//! }"#).unwrap();
//!
//! assert_eq!(config.error_policy.discontinued_metadata, Disposition::DropPacket);
//! assert_eq!(config.max_item_depth, 4);
//! assert_eq!(config.placeholder_item, "minecraft:stone");
//! ```

use serde::{Deserialize, Serialize};

use crate::{Disposition, Error, Result};

/// Default protocol string limit, in characters.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 32767;

/// Configuration shared by every conversion performed through a
/// [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How fatal conditions map onto pipeline dispositions.
    pub error_policy: ErrorPolicy,

    /// Maximum nesting of items inside items (bundles, charged projectiles).
    ///
    /// Item lists found below this depth are omitted from the legacy tree.
    pub max_item_depth: usize,

    /// Legacy identifier written for recursively converted items.
    pub placeholder_item: String,

    /// Character limit enforced by the protocol string codec.
    pub max_string_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::default(),
            max_item_depth: 16,
            placeholder_item: "minecraft:stone".to_owned(),
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
        }
    }
}

impl Config {
    /// Parses a JSON configuration document. Missing fields take their
    /// defaults; unknown fields are rejected.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(Error::InvalidConfig)
    }

    /// Maps a fatal error onto the disposition the pipeline should apply.
    pub fn disposition(&self, error: &Error) -> Disposition {
        match error {
            Error::UnsupportedMetadataType(_) => self.error_policy.discontinued_metadata,
            _ => self.error_policy.malformed_packet,
        }
    }
}

/// Dispositions for the fatal error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorPolicy {
    /// Applied when a packet carries a discontinued metadata type.
    pub discontinued_metadata: Disposition,
    /// Applied to every other fatal condition.
    pub malformed_packet: Disposition,
}
