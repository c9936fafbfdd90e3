use crate::{META_TYPES_1_8, META_TYPES_1_9, META_TYPES_1_12, MetaTypeTable};

/// Protocol revisions known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtocolVersion {
    V1_8,
    V1_9,
    V1_9_4,
    V1_10,
    V1_11,
    V1_12,
    V1_12_2,
    V1_20_3,
    V1_20_5,
}

impl ProtocolVersion {
    pub const ALL: [ProtocolVersion; 9] = [
        ProtocolVersion::V1_8,
        ProtocolVersion::V1_9,
        ProtocolVersion::V1_9_4,
        ProtocolVersion::V1_10,
        ProtocolVersion::V1_11,
        ProtocolVersion::V1_12,
        ProtocolVersion::V1_12_2,
        ProtocolVersion::V1_20_3,
        ProtocolVersion::V1_20_5,
    ];

    /// The protocol number sent in the handshake.
    pub const fn protocol(self) -> i32 {
        match self {
            ProtocolVersion::V1_8 => 47,
            ProtocolVersion::V1_9 => 107,
            ProtocolVersion::V1_9_4 => 110,
            ProtocolVersion::V1_10 => 210,
            ProtocolVersion::V1_11 => 315,
            ProtocolVersion::V1_12 => 335,
            ProtocolVersion::V1_12_2 => 340,
            ProtocolVersion::V1_20_3 => 765,
            ProtocolVersion::V1_20_5 => 766,
        }
    }

    pub fn from_protocol(protocol: i32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|version| version.protocol() == protocol)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ProtocolVersion::V1_8 => "1.8",
            ProtocolVersion::V1_9 => "1.9",
            ProtocolVersion::V1_9_4 => "1.9.4",
            ProtocolVersion::V1_10 => "1.10",
            ProtocolVersion::V1_11 => "1.11",
            ProtocolVersion::V1_12 => "1.12",
            ProtocolVersion::V1_12_2 => "1.12.2",
            ProtocolVersion::V1_20_3 => "1.20.3",
            ProtocolVersion::V1_20_5 => "1.20.5",
        }
    }

    /// The metadata type table of this revision, if it has one here.
    pub fn meta_types(self) -> Option<&'static MetaTypeTable> {
        match self {
            ProtocolVersion::V1_8 => Some(&META_TYPES_1_8),
            ProtocolVersion::V1_9
            | ProtocolVersion::V1_9_4
            | ProtocolVersion::V1_10
            | ProtocolVersion::V1_11 => Some(&META_TYPES_1_9),
            ProtocolVersion::V1_12 | ProtocolVersion::V1_12_2 => Some(&META_TYPES_1_12),
            ProtocolVersion::V1_20_3 | ProtocolVersion::V1_20_5 => None,
        }
    }

    /// Whether items of this revision carry structured data components.
    pub const fn has_structured_data(self) -> bool {
        matches!(self, ProtocolVersion::V1_20_5)
    }
}

impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.protocol())
    }
}
