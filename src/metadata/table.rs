use crate::{Error, Result, TypeKind, cold_path};

/// `type_id` of the discontinued marker.
pub const DISCONTINUED_TYPE_ID: i32 = 99;

/// One entry of a metadata type table.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MetaType {
    ordinal: u8,
    type_id: i32,
    name: &'static str,
    kind: Option<TypeKind>,
}

impl MetaType {
    const fn new(ordinal: u8, name: &'static str, kind: TypeKind) -> Self {
        Self {
            ordinal,
            type_id: ordinal as i32,
            name,
            kind: Some(kind),
        }
    }

    const fn discontinued(ordinal: u8) -> Self {
        Self {
            ordinal,
            type_id: DISCONTINUED_TYPE_ID,
            name: "Discontinued",
            kind: None,
        }
    }

    /// Position of this entry in its table; also the value seen on the wire.
    #[inline]
    pub const fn ordinal(&self) -> u8 {
        self.ordinal
    }

    #[inline]
    pub const fn type_id(&self) -> i32 {
        self.type_id
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The codec used for values of this type; `None` if discontinued.
    #[inline]
    pub const fn kind(&self) -> Option<TypeKind> {
        self.kind
    }

    #[inline]
    pub const fn is_discontinued(&self) -> bool {
        self.kind.is_none()
    }

    /// The codec kind, or [`UnsupportedMetadataType`](Error::UnsupportedMetadataType)
    /// for a discontinued slot.
    pub fn require_kind(&self) -> Result<TypeKind> {
        match self.kind {
            Some(kind) => Ok(kind),
            None => {
                cold_path();
                Err(Error::UnsupportedMetadataType(self.type_id))
            }
        }
    }
}

/// How a metadata list frames its entries on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    /// One header byte `type << 5 | index`, terminated by `0x7F` (1.8).
    Packed,
    /// Index byte then type byte, terminated by an index of `0xFF` (1.9+).
    Indexed,
}

/// The metadata types of one protocol revision, densely indexed by ordinal.
#[derive(Debug, PartialEq, Eq)]
pub struct MetaTypeTable {
    name: &'static str,
    format: MetadataFormat,
    types: &'static [MetaType],
}

impl MetaTypeTable {
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn format(&self) -> MetadataFormat {
        self.format
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'static, MetaType> {
        self.types.iter()
    }

    /// The entry at position `id`.
    ///
    /// Discontinued entries are returned like any other; it is up to the
    /// caller to reject them through [`MetaType::require_kind`].
    pub fn by_id(&self, id: usize) -> Result<&'static MetaType> {
        match self.types.get(id) {
            Some(meta_type) => Ok(meta_type),
            None => {
                cold_path();
                Err(Error::IndexOutOfRange {
                    index: id,
                    len: self.types.len(),
                })
            }
        }
    }

    /// Whether `meta_type` is one of this table's entries.
    pub fn contains(&self, meta_type: &MetaType) -> bool {
        self.types
            .get(meta_type.ordinal as usize)
            .is_some_and(|entry| std::ptr::eq(entry, meta_type))
    }
}

const fn is_dense(types: &[MetaType]) -> bool {
    let mut i = 0;
    while i < types.len() {
        if types[i].ordinal as usize != i {
            return false;
        }
        i += 1;
    }
    true
}

static TYPES_1_8: [MetaType; 8] = [
    MetaType::new(0, "Byte", TypeKind::Byte),
    MetaType::new(1, "Short", TypeKind::Short),
    MetaType::new(2, "Int", TypeKind::Int),
    MetaType::new(3, "Float", TypeKind::Float),
    MetaType::new(4, "String", TypeKind::String),
    MetaType::new(5, "Slot", TypeKind::Item),
    MetaType::new(6, "Position", TypeKind::Vector),
    MetaType::new(7, "Rotation", TypeKind::Rotation),
];

static TYPES_1_9: [MetaType; 14] = [
    MetaType::new(0, "Byte", TypeKind::Byte),
    MetaType::new(1, "VarInt", TypeKind::VarInt),
    MetaType::new(2, "Float", TypeKind::Float),
    MetaType::new(3, "String", TypeKind::String),
    MetaType::new(4, "Chat", TypeKind::Component),
    MetaType::new(5, "Slot", TypeKind::Item),
    MetaType::new(6, "Boolean", TypeKind::Boolean),
    MetaType::new(7, "Vector3F", TypeKind::Rotation),
    MetaType::new(8, "Position", TypeKind::Position),
    MetaType::new(9, "OptPosition", TypeKind::OptionalPosition),
    MetaType::new(10, "Direction", TypeKind::VarInt),
    MetaType::new(11, "OptUUID", TypeKind::OptionalUuid),
    MetaType::new(12, "BlockID", TypeKind::VarInt),
    MetaType::discontinued(13),
];

static TYPES_1_12: [MetaType; 15] = [
    MetaType::new(0, "Byte", TypeKind::Byte),
    MetaType::new(1, "VarInt", TypeKind::VarInt),
    MetaType::new(2, "Float", TypeKind::Float),
    MetaType::new(3, "String", TypeKind::String),
    MetaType::new(4, "Chat", TypeKind::Component),
    MetaType::new(5, "Slot", TypeKind::Item),
    MetaType::new(6, "Boolean", TypeKind::Boolean),
    MetaType::new(7, "Vector3F", TypeKind::Rotation),
    MetaType::new(8, "Position", TypeKind::Position),
    MetaType::new(9, "OptPosition", TypeKind::OptionalPosition),
    MetaType::new(10, "Direction", TypeKind::VarInt),
    MetaType::new(11, "OptUUID", TypeKind::OptionalUuid),
    MetaType::new(12, "BlockID", TypeKind::VarInt),
    MetaType::new(13, "NBTTag", TypeKind::Nbt),
    MetaType::discontinued(14),
];

const _: () = assert!(is_dense(&TYPES_1_8));
const _: () = assert!(is_dense(&TYPES_1_9));
const _: () = assert!(is_dense(&TYPES_1_12));

pub static META_TYPES_1_8: MetaTypeTable = MetaTypeTable {
    name: "1.8",
    format: MetadataFormat::Packed,
    types: &TYPES_1_8,
};

/// Shared by 1.9 through 1.11.
pub static META_TYPES_1_9: MetaTypeTable = MetaTypeTable {
    name: "1.9",
    format: MetadataFormat::Indexed,
    types: &TYPES_1_9,
};

pub static META_TYPES_1_12: MetaTypeTable = MetaTypeTable {
    name: "1.12",
    format: MetadataFormat::Indexed,
    types: &TYPES_1_12,
};
