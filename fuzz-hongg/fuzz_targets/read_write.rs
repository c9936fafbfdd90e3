use bytes::Bytes;
use honggfuzz::fuzz;
use na_via::{
    BigEndian, ITEM, LittleEndian, META_TYPES_1_8, META_TYPES_1_9, META_TYPES_1_12,
    MetadataListType, NAMELESS_NBT, NBT, Type, read_named,
};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            for table in [&META_TYPES_1_8, &META_TYPES_1_9, &META_TYPES_1_12] {
                let list_type = MetadataListType::new(table);
                if let Ok(list) = list_type.read(&mut &data[..]) {
                    let mut out = Vec::new();
                    let _ = list_type.write(&mut out, &list);
                }
            }

            let bytes = Bytes::copy_from_slice(data);
            if let Ok(item) = ITEM.read(&mut bytes.clone()) {
                let mut out = Vec::new();
                let _ = ITEM.write(&mut out, &item);
            }
            if let Ok(compound) = NBT.read(&mut bytes.clone()) {
                let mut out = Vec::new();
                let _ = NAMELESS_NBT.write(&mut out, &compound);
            }
            let _ = NAMELESS_NBT.read(&mut bytes.clone());

            if let Ok((_, root)) = read_named::<BigEndian>(&mut &data[..]) {
                let _ = root.write_to_vec::<BigEndian>();
                let _ = root.write_to_vec::<LittleEndian>();
            }
            if let Ok((_, root)) = read_named::<LittleEndian>(&mut &data[..]) {
                let _ = root.write_to_vec::<LittleEndian>();
            }
        });
    }
}
