use bytes::{Buf, BufMut};
use tracing::{info, warn};

use crate::{
    Config, DataItem, DataKey, Disposition, Error, Item, Mappings, MetaTypeTable, Metadata,
    MetadataListType, OwnCompound, ProtocolVersion, Result, StringType,
    StructuredDataConverter, cold_path,
};

/// Everything a connection needs to translate packets, built once at startup
/// and shared read-only (typically as `Arc<Catalog>`) afterwards.
///
/// ```
/// use std::sync::Arc;
/// use na_via::{Catalog, Config, ProtocolVersion};
///
/// let catalog = Arc::new(Catalog::new(Config::default()));
/// let table = catalog.meta_types(ProtocolVersion::V1_12_2).unwrap();
/// assert_eq!(table.by_id(13).unwrap().name(), "NBTTag");
/// ```
#[derive(Debug)]
pub struct Catalog {
    config: Config,
    strings: StringType,
    converter: StructuredDataConverter,
}

impl Catalog {
    pub fn new(config: Config) -> Self {
        let converter = StructuredDataConverter::new(Mappings::v1_20_3(), &config);
        info!(
            converters = converter.converter_count(),
            keys = DataKey::COUNT,
            enchantments = converter.mappings().enchantments.len(),
            attributes = converter.mappings().attributes.len(),
            max_item_depth = config.max_item_depth,
            "conversion catalog built"
        );
        Self {
            strings: StringType::new(config.max_string_length),
            config,
            converter,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn converter(&self) -> &StructuredDataConverter {
        &self.converter
    }

    #[inline]
    pub fn mappings(&self) -> &Mappings {
        self.converter.mappings()
    }

    #[inline]
    pub fn meta_types(&self, version: ProtocolVersion) -> Option<&'static MetaTypeTable> {
        version.meta_types()
    }

    /// The metadata list codec of `version`, using the configured string limit.
    pub fn metadata_list(&self, version: ProtocolVersion) -> Result<MetadataListType> {
        match version.meta_types() {
            Some(table) => Ok(MetadataListType::with_strings(table, self.strings)),
            None => {
                cold_path();
                Err(Error::UnsupportedVersion(version.protocol()))
            }
        }
    }

    pub fn read_metadata(
        &self,
        version: ProtocolVersion,
        buffer: &mut impl Buf,
    ) -> Result<Vec<Metadata>> {
        self.metadata_list(version)?.read(buffer)
    }

    pub fn write_metadata(
        &self,
        version: ProtocolVersion,
        buffer: &mut impl BufMut,
        list: &[Metadata],
    ) -> Result<()> {
        self.metadata_list(version)?.write(buffer, list)
    }

    /// The legacy tag of `item`'s structured data.
    pub fn item_to_tag(&self, item: &Item) -> OwnCompound {
        self.converter.to_tag(&item.data)
    }

    /// `item` as a legacy stack. The tag is omitted when no entry produced
    /// any output.
    pub fn item_to_legacy(&self, item: &Item) -> Result<DataItem> {
        let Ok(amount) = i8::try_from(item.amount) else {
            cold_path();
            return Err(Error::ValueOutOfRange {
                what: "item amount",
                value: item.amount.into(),
            });
        };
        let tag = self.item_to_tag(item);
        Ok(DataItem {
            identifier: item.identifier,
            amount,
            data: 0,
            tag: (!tag.is_empty()).then_some(tag),
        })
    }

    /// Applies the error policy to the outcome of processing one packet.
    ///
    /// Successes come back as `Some`. Failures the policy maps to
    /// [`Disposition::DropPacket`] come back as `None`; the rest are returned
    /// for the pipeline to close the connection.
    pub fn resolve<T>(&self, result: Result<T>) -> Result<Option<T>> {
        let error = match result {
            Ok(value) => return Ok(Some(value)),
            Err(error) => error,
        };
        match self.config.disposition(&error) {
            Disposition::DropPacket => {
                warn!(%error, "dropping packet");
                Ok(None)
            }
            Disposition::Disconnect => {
                warn!(%error, "disconnecting");
                Err(error)
            }
        }
    }
}
