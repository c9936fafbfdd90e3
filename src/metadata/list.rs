use bytes::{Buf, BufMut};

use crate::{
    Error, Loose, MetaType, MetaTypeTable, MetaValue, MetadataFormat, Result, STRING, StringType,
    cold_path,
};

const INDEXED_END: u8 = 0xFF;
const PACKED_END: u8 = 0x7F;
const PACKED_INDEX_MASK: u8 = 0x1F;

/// One entity metadata entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    id: u8,
    meta_type: &'static MetaType,
    value: MetaValue,
}

impl Metadata {
    /// Builds an entry, checking that `value` has the codec kind of
    /// `meta_type`.
    pub fn new(id: u8, meta_type: &'static MetaType, value: MetaValue) -> Result<Self> {
        let kind = meta_type.require_kind()?;
        if value.kind() != kind {
            cold_path();
            return Err(Error::UnsupportedConversion {
                from: value.kind().name(),
                to: kind.name(),
            });
        }
        Ok(Self {
            id,
            meta_type,
            value,
        })
    }

    /// Builds an entry from a loosely typed value, normalising it first.
    pub fn convert(id: u8, meta_type: &'static MetaType, value: Loose<MetaValue>) -> Result<Self> {
        let value = meta_type.require_kind()?.convert(value)?;
        Ok(Self {
            id,
            meta_type,
            value,
        })
    }

    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    #[inline]
    pub fn meta_type(&self) -> &'static MetaType {
        self.meta_type
    }

    #[inline]
    pub fn value(&self) -> &MetaValue {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> MetaValue {
        self.value
    }

    /// Replaces the value, keeping the entry unchanged if `value` has the
    /// wrong kind.
    pub fn set_value(&mut self, value: MetaValue) -> Result<()> {
        *self = Self::new(self.id, self.meta_type, value)?;
        Ok(())
    }
}

/// The entity metadata list of one protocol revision.
#[derive(Debug, Clone, Copy)]
pub struct MetadataListType {
    table: &'static MetaTypeTable,
    strings: StringType,
}

impl MetadataListType {
    pub const fn new(table: &'static MetaTypeTable) -> Self {
        Self {
            table,
            strings: STRING,
        }
    }

    /// Uses `strings` for string and component values.
    pub const fn with_strings(table: &'static MetaTypeTable, strings: StringType) -> Self {
        Self { table, strings }
    }

    #[inline]
    pub const fn table(&self) -> &'static MetaTypeTable {
        self.table
    }

    pub fn read(&self, buffer: &mut impl Buf) -> Result<Vec<Metadata>> {
        let mut list = Vec::new();
        loop {
            let (id, ordinal) = match self.table.format() {
                MetadataFormat::Indexed => {
                    let id = buffer.try_get_u8()?;
                    if id == INDEXED_END {
                        return Ok(list);
                    }
                    (id, buffer.try_get_u8()?)
                }
                MetadataFormat::Packed => {
                    let header = buffer.try_get_u8()?;
                    if header == PACKED_END {
                        return Ok(list);
                    }
                    (header & PACKED_INDEX_MASK, header >> 5)
                }
            };
            let meta_type = self.table.by_id(ordinal.into())?;
            let value = MetaValue::read(meta_type.require_kind()?, buffer, self.strings)?;
            list.push(Metadata {
                id,
                meta_type,
                value,
            });
        }
    }

    /// Writes the whole list or nothing.
    pub fn write(&self, buffer: &mut impl BufMut, list: &[Metadata]) -> Result<()> {
        let mut out = Vec::new();
        for metadata in list {
            self.write_entry(&mut out, metadata)?;
        }
        out.push(match self.table.format() {
            MetadataFormat::Indexed => INDEXED_END,
            MetadataFormat::Packed => PACKED_END,
        });
        buffer.put_slice(&out);
        Ok(())
    }

    fn write_entry(&self, out: &mut Vec<u8>, metadata: &Metadata) -> Result<()> {
        let meta_type = metadata.meta_type;
        meta_type.require_kind()?;
        if !self.table.contains(meta_type) {
            cold_path();
            return Err(Error::IndexOutOfRange {
                index: meta_type.ordinal().into(),
                len: self.table.len(),
            });
        }
        match self.table.format() {
            MetadataFormat::Indexed => {
                if metadata.id == INDEXED_END {
                    cold_path();
                    return Err(Error::ValueOutOfRange {
                        what: "metadata index",
                        value: metadata.id.into(),
                    });
                }
                out.push(metadata.id);
                out.push(meta_type.ordinal());
            }
            MetadataFormat::Packed => {
                let header = meta_type.ordinal() << 5 | metadata.id;
                // The terminator doubles as the header of (Float, 31).
                if metadata.id > PACKED_INDEX_MASK || header == PACKED_END {
                    cold_path();
                    return Err(Error::ValueOutOfRange {
                        what: "metadata index",
                        value: metadata.id.into(),
                    });
                }
                out.push(header);
            }
        }
        metadata.value.write(out, self.strings)
    }
}
