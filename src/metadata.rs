//! Entity metadata: per-version type tables, metadata values and the
//! metadata list codec.
//!
//! ```
//! use na_via::{META_TYPES_1_12, MetadataListType, MetaValue};
//!
//! // index 0, type 0 (Byte), value 0x20, end of list
//! let bytes = [0x00, 0x00, 0x20, 0xFF];
//! let list = MetadataListType::new(&META_TYPES_1_12).read(&mut &bytes[..]).unwrap();
//!
//! assert_eq!(list.len(), 1);
//! assert_eq!(list[0].meta_type().name(), "Byte");
//! assert_eq!(list[0].value(), &MetaValue::Byte(0x20));
//! ```

mod list;
mod table;
mod value;

pub use list::*;
pub use table::*;
pub use value::*;
