//! Protocol version bridging core.
//!
//! * [`Type`] codecs read and write protocol values against [`bytes`]
//!   buffers.
//! * [`MetaTypeTable`]s resolve wire metadata type ids per revision.
//! * [`StructuredDataConverter`] turns structured item data into the legacy
//!   NBT item tag ([`OwnCompound`]).
//!
//! A [`Catalog`] bundles all of them behind one startup step.

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;
pub use zerocopy::NativeEndian;

mod catalog;
mod config;
mod convert;
mod data;
mod error;
mod index;
mod mappings;
mod metadata;
pub mod nbt;
mod text;
mod types;
mod util;
mod version;

pub use catalog::*;
pub use config::*;
pub use convert::*;
pub use data::*;
pub use error::*;
pub use index::*;
pub use mappings::*;
pub use metadata::*;
pub use nbt::*;
pub use text::*;
pub use types::*;
pub use util::*;
pub use version::*;
