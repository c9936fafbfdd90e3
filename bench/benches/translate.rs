use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use mimalloc::MiMalloc;
use na_via::{
    Catalog, Config, Enchantments, GameProfile, Item, META_TYPES_1_12, MetaValue, Metadata,
    MetadataListType, OwnCompound, OwnValue, Position, ProtocolVersion, StructuredData, keys,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn sample_item(depth: usize) -> Item {
    let mut item = Item::new(812, 1)
        .with(StructuredData::of(keys::DAMAGE, 12))
        .with(StructuredData::of(keys::UNBREAKABLE, ()).hidden())
        .with(StructuredData::of(
            keys::ENCHANTMENTS,
            Enchantments::new().with(13, 5).with(22, 3).with(37, 1),
        ))
        .with(StructuredData::of(keys::CUSTOM_NAME, OwnValue::from("Excalibur")))
        .with(StructuredData::of(keys::PROFILE, GameProfile::named("Notch")));
    if depth > 0 {
        let nested = (0..4).map(|_| sample_item(depth - 1)).collect::<Vec<_>>();
        item.data.set(StructuredData::of(keys::BUNDLE_CONTENTS, nested));
    }
    item
}

fn sample_metadata() -> Vec<u8> {
    let table = &META_TYPES_1_12;
    let mut tag = OwnCompound::new();
    tag.put_string("id", "minecraft:zombie");
    let list = [
        Metadata::new(0, table.by_id(0).unwrap(), MetaValue::Byte(0x20)),
        Metadata::new(1, table.by_id(1).unwrap(), MetaValue::VarInt(300)),
        Metadata::new(2, table.by_id(3).unwrap(), MetaValue::String("Grumm".to_owned())),
        Metadata::new(3, table.by_id(6).unwrap(), MetaValue::Boolean(true)),
        Metadata::new(
            4,
            table.by_id(8).unwrap(),
            MetaValue::Position(Position::new(-120, 64, 3000)),
        ),
        Metadata::new(5, table.by_id(13).unwrap(), MetaValue::Nbt(Some(tag))),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .unwrap();

    let mut bytes = Vec::new();
    MetadataListType::new(table).write(&mut bytes, &list).unwrap();
    bytes
}

fn bench_item_conversion(c: &mut Criterion) {
    let catalog = Catalog::new(Config::default());
    let flat = sample_item(0);
    let nested = sample_item(2);

    let mut group = c.benchmark_group("item_to_tag");
    group.bench_function("flat", |b| b.iter(|| catalog.item_to_tag(black_box(&flat))));
    group.bench_function("nested", |b| b.iter(|| catalog.item_to_tag(black_box(&nested))));
    group.finish();
}

fn bench_metadata(c: &mut Criterion) {
    let catalog = Catalog::new(Config::default());
    let bytes = sample_metadata();
    let list = catalog
        .read_metadata(ProtocolVersion::V1_12_2, &mut &bytes[..])
        .unwrap();

    let mut group = c.benchmark_group("metadata");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("read", |b| {
        b.iter(|| catalog.read_metadata(ProtocolVersion::V1_12_2, &mut black_box(&bytes[..])))
    });
    group.bench_function("write", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(bytes.len());
            catalog
                .write_metadata(ProtocolVersion::V1_12_2, &mut out, black_box(&list))
                .map(|()| out)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_item_conversion, bench_metadata);
criterion_main!(benches);
