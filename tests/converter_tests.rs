//! Tests for structured data to legacy tag conversion

use na_via::{
    AttributeModifier, AttributeModifiers, Config, DataKey, DyedColor, Enchantments,
    FilterableComponent, FilterableString, FireworkExplosion, Fireworks, GameProfile,
    GlobalPosition, Holder, Instrument, Item, LodestoneTracker, Mappings, ModifierData,
    OwnCompound, OwnList, OwnValue, Property, StructuredData, StructuredDataContainer,
    StructuredDataConverter, WrittenBook, hide_flags, keys, uuid_to_int_array,
};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn converter_with(config: &Config) -> StructuredDataConverter {
    init_tracing();
    StructuredDataConverter::new(Mappings::v1_20_3(), config)
}

fn converter() -> StructuredDataConverter {
    converter_with(&Config::default())
}

fn convert(entries: impl IntoIterator<Item = StructuredData>) -> OwnCompound {
    let data: StructuredDataContainer = entries.into_iter().collect();
    converter().to_tag(&data)
}

fn strings(list: &OwnList) -> Vec<&str> {
    list.strings().collect()
}

#[test]
fn test_hidden_unbreakable_and_enchantments() {
    let unbreakable = StructuredData::of(keys::UNBREAKABLE, ()).hidden();
    let enchantments =
        StructuredData::of(keys::ENCHANTMENTS, Enchantments::new().with(13, 3)).hidden();

    for entries in [
        [unbreakable.clone(), enchantments.clone()],
        [enchantments, unbreakable],
    ] {
        let tag = convert(entries);
        assert_eq!(tag.get_boolean("Unbreakable"), Some(true));
        assert_eq!(tag.get_int("HideFlags"), Some(0x05));
        let list = tag.get_list("Enchantments").unwrap();
        assert_eq!(list.len(), 1);
        let sharpness = list.compounds().next().unwrap();
        assert_eq!(sharpness.get_string("id"), Some("minecraft:sharpness"));
        assert_eq!(sharpness.get("lvl"), Some(&OwnValue::Short(3)));
    }
}

#[test]
fn test_visible_entries_set_no_flags() {
    let tag = convert([
        StructuredData::of(keys::UNBREAKABLE, ()),
        StructuredData::of(keys::ENCHANTMENTS, Enchantments::new().with(13, 3)),
        StructuredData::of(keys::DYED_COLOR, DyedColor { rgb: 0x112233 }),
    ]);
    assert!(!tag.contains_key("HideFlags"));
    assert_eq!(tag.get_int("color"), Some(0x112233));
}

#[test]
fn test_unknown_enchantments_are_dropped() {
    let enchantments = Enchantments::new().with(13, 3).with(500, 1).with(0, 4).with(-1, 2);
    let tag = convert([StructuredData::of(keys::ENCHANTMENTS, enchantments)]);
    let list = tag.get_list("Enchantments").unwrap();
    let converted: Vec<_> = list
        .compounds()
        .map(|e| (e.get_string("id").unwrap(), e.get_int("lvl").unwrap()))
        .collect();
    assert_eq!(
        converted,
        [("minecraft:sharpness", 3), ("minecraft:protection", 4)]
    );
}

#[test]
fn test_enchantment_level_not_id() {
    let tag = convert([StructuredData::of(
        keys::ENCHANTMENTS,
        Enchantments::new().with(19, 2),
    )]);
    let sweeping = tag.get_list("Enchantments").unwrap().compounds().next().unwrap();
    assert_eq!(sweeping.get_string("id"), Some("minecraft:sweeping"));
    assert_eq!(sweeping.get("lvl"), Some(&OwnValue::Short(2)));
}

#[test]
fn test_stored_enchantments_share_additional_flag() {
    let tag = convert([
        StructuredData::of(keys::STORED_ENCHANTMENTS, Enchantments::new().with(1, 1)).hidden(),
        StructuredData::of(keys::HIDE_ADDITIONAL_TOOLTIP, ()),
        StructuredData::of(keys::DYED_COLOR, DyedColor { rgb: 5 }).hidden(),
    ]);
    assert_eq!(tag.get_list("StoredEnchantments").map(OwnList::len), Some(1));
    assert!(!tag.contains_key("Enchantments"));
    assert_eq!(
        tag.get_int("HideFlags"),
        Some(hide_flags::ADDITIONAL | hide_flags::DYE)
    );
}

#[test]
fn test_empty_entries_change_nothing() {
    let converter = converter();
    let mut base = OwnCompound::new();
    base.put_int("Damage", 7);
    base.put_int("HideFlags", 0x10);

    for key in DataKey::ALL {
        let mut tag = base.clone();
        converter.write_to_tag(&StructuredData::empty(key), &mut tag);
        assert_eq!(tag, base, "{key}");

        converter.write_to_tag(&StructuredData::empty(key).hidden(), &mut tag);
        assert_eq!(tag, base, "{key}");
    }
}

#[test]
fn test_unregistered_keys_change_nothing() {
    let converter = converter();
    assert!(!converter.has_converter(DataKey::Rarity));
    assert!(converter.has_converter(DataKey::Damage));

    let mut tag = OwnCompound::new();
    converter.write_to_tag(&StructuredData::of(keys::RARITY, 2), &mut tag);
    converter.write_to_tag(&StructuredData::of(keys::MAX_STACK_SIZE, 16), &mut tag);
    assert!(tag.is_empty());
}

#[test]
fn test_custom_registration() {
    init_tracing();
    let mut converter = StructuredDataConverter::empty(Mappings::v1_20_3(), &Config::default());
    assert_eq!(converter.converter_count(), 0);
    converter.register(keys::RARITY, |_, rarity, tag| {
        tag.put_int("Rarity", *rarity);
    });
    assert_eq!(converter.converter_count(), 1);

    let mut tag = OwnCompound::new();
    converter.write_to_tag(&StructuredData::of(keys::RARITY, 3), &mut tag);
    converter.write_to_tag(&StructuredData::of(keys::DAMAGE, 3), &mut tag);
    assert_eq!(tag.get_int("Rarity"), Some(3));
    assert_eq!(tag.len(), 1);
}

#[test]
fn test_scalar_rewriters() {
    let tag = convert([
        StructuredData::of(keys::DAMAGE, 12),
        StructuredData::of(keys::CUSTOM_MODEL_DATA, 4),
        StructuredData::of(keys::REPAIR_COST, 9),
        StructuredData::of(keys::MAP_COLOR, 0x46402E),
        StructuredData::of(keys::MAP_ID, 3),
        StructuredData::of(keys::BASE_COLOR, 14),
    ]);
    assert_eq!(tag.get_int("Damage"), Some(12));
    assert_eq!(tag.get_int("CustomModelData"), Some(4));
    assert_eq!(tag.get_int("RepairCost"), Some(9));
    assert_eq!(tag.get_int("MapColor"), Some(0x46402E));
    assert_eq!(tag.get_int("map"), Some(3));
    assert_eq!(tag.get_int("Base"), Some(14));
}

#[test]
fn test_custom_name_and_lore() {
    let mut styled = OwnCompound::new();
    styled.put_string("text", "line");
    styled.put_byte("italic", 0);

    let tag = convert([
        StructuredData::of(keys::CUSTOM_NAME, OwnValue::from("hi")),
        StructuredData::of(keys::LORE, vec![OwnValue::from("a"), OwnValue::from(styled)]),
    ]);
    assert_eq!(tag.get_string("CustomName"), Some(r#""hi""#));
    assert_eq!(
        strings(tag.get_list("Lore").unwrap()),
        [r#""a""#, r#"{"text":"line","italic":false}"#]
    );
}

#[test]
fn test_attribute_modifiers() {
    let modifier = |attribute| AttributeModifier {
        attribute,
        modifier: ModifierData {
            id: Uuid::nil(),
            name: "boost".to_owned(),
            amount: 4.0,
            operation: 1,
        },
        slot: 2,
    };
    let modifiers = AttributeModifiers::new(vec![modifier(11), modifier(99)]);
    let tag = convert([StructuredData::of(keys::ATTRIBUTE_MODIFIERS, modifiers).hidden()]);

    let list = tag.get_list("AttributeModifiers").unwrap();
    assert_eq!(list.len(), 1);
    let converted = list.compounds().next().unwrap();
    assert_eq!(
        converted.get_string("AttributeName"),
        Some("minecraft:generic.max_health")
    );
    assert_eq!(converted.get_string("Name"), Some("boost"));
    assert_eq!(converted.get_double("Amount"), Some(4.0));
    assert_eq!(converted.get_int("Slot"), Some(2));
    assert_eq!(converted.get_int("Operation"), Some(1));
    assert_eq!(tag.get_int("HideFlags"), Some(hide_flags::ATTRIBUTE_MODIFIERS));
}

#[test]
fn test_map_decorations() {
    let mut red_x = OwnCompound::new();
    red_x.put_string("type", "minecraft:red_x");
    red_x.put_double("x", 1.0);
    red_x.put_double("z", 2.0);
    red_x.put_float("rotation", 180.0);

    let mut unknown = OwnCompound::new();
    unknown.put_string("type", "minecraft:nonexistent");

    let mut decorations = OwnCompound::new();
    decorations.put("target", red_x);
    decorations.put("lost", unknown);
    decorations.put_int("broken", 5);

    let tag = convert([StructuredData::of(keys::MAP_DECORATIONS, decorations)]);
    let list = tag.get_list("Decorations").unwrap();
    assert_eq!(list.len(), 1);
    let decoration = list.compounds().next().unwrap();
    assert_eq!(decoration.get_string("id"), Some("target"));
    assert_eq!(decoration.get_int("type"), Some(26));
    assert_eq!(decoration.get("x"), Some(&OwnValue::Double(1.0)));
    assert_eq!(decoration.get("z"), Some(&OwnValue::Double(2.0)));
    assert_eq!(decoration.get("rot"), Some(&OwnValue::Float(180.0)));
}

#[test]
fn test_writable_book() {
    let pages = vec![
        FilterableString::new("one"),
        FilterableString::new("two").filtered("ok"),
    ];
    let tag = convert([StructuredData::of(keys::WRITABLE_BOOK_CONTENT, pages)]);
    assert_eq!(strings(tag.get_list("pages").unwrap()), ["one", "two"]);
    let filtered = tag.get_compound("filtered_pages").unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.get_string("1"), Some("ok"));
}

#[test]
fn test_written_book() {
    let book = WrittenBook {
        title: FilterableString::new("Tale").filtered("T***"),
        author: "Steve".to_owned(),
        generation: 1,
        pages: vec![
            FilterableComponent::new("p1"),
            FilterableComponent {
                raw: OwnValue::from("p2"),
                filtered: Some(OwnValue::from("x")),
            },
        ],
        resolved: true,
    };
    let tag = convert([StructuredData::of(keys::WRITTEN_BOOK_CONTENT, book)]);
    assert_eq!(strings(tag.get_list("pages").unwrap()), [r#""p1""#, r#""p2""#]);
    assert_eq!(
        tag.get_compound("filtered_pages").and_then(|f| f.get_string("1")),
        Some(r#""x""#)
    );
    assert_eq!(tag.get_string("author"), Some("Steve"));
    assert_eq!(tag.get_int("generation"), Some(1));
    assert_eq!(tag.get_boolean("resolved"), Some(true));
    assert_eq!(tag.get_string("title"), Some("Tale"));
    assert_eq!(tag.get_string("filtered_title"), Some("T***"));
}

fn enchanted(amount: i32, enchantment: i32) -> Item {
    Item::new(870, amount).with(
        StructuredData::of(keys::ENCHANTMENTS, Enchantments::new().with(enchantment, 1)).hidden(),
    )
}

#[test]
fn test_bundle_contents() {
    let items = vec![enchanted(3, 13), enchanted(1, 27)];
    let tag = convert([StructuredData::of(keys::BUNDLE_CONTENTS, items)]);

    assert!(!tag.contains_key("HideFlags"));
    let list = tag.get_list("Items").unwrap();
    assert_eq!(list.len(), 2);

    let expected = [(3, "minecraft:sharpness"), (1, "minecraft:infinity")];
    for (saved, (count, enchantment)) in list.compounds().zip(expected) {
        assert_eq!(saved.get_string("id"), Some("minecraft:stone"));
        assert_eq!(saved.get("Count"), Some(&OwnValue::Byte(count)));
        let nested = saved.get_compound("tag").unwrap();
        assert_eq!(nested.get_int("HideFlags"), Some(hide_flags::ENCHANTMENTS));
        let enchantments = nested.get_list("Enchantments").unwrap();
        assert_eq!(
            enchantments.compounds().next().and_then(|e| e.get_string("id")),
            Some(enchantment)
        );
    }
}

#[test]
fn test_charged_projectiles() {
    let arrow = Item::new(802, 1);
    let tag = convert([StructuredData::of(keys::CHARGED_PROJECTILES, vec![arrow])]);
    let saved = tag
        .get_list("ChargedProjectiles")
        .and_then(|list| list.compounds().next())
        .unwrap();
    assert_eq!(saved.get_compound("tag"), Some(&OwnCompound::new()));
}

#[test]
fn test_item_depth_cap() {
    let config = Config {
        max_item_depth: 1,
        ..Config::default()
    };
    let converter = converter_with(&config);

    let leaf = enchanted(1, 13);
    let inner = Item::new(927, 1).with(StructuredData::of(keys::BUNDLE_CONTENTS, vec![leaf]));
    let data: StructuredDataContainer =
        [StructuredData::of(keys::BUNDLE_CONTENTS, vec![inner])].into_iter().collect();

    let tag = converter.to_tag(&data);
    let inner_tag = tag
        .get_list("Items")
        .and_then(|list| list.compounds().next())
        .and_then(|saved| saved.get_compound("tag"))
        .unwrap();
    assert!(!inner_tag.contains_key("Items"));

    let config = Config {
        max_item_depth: 0,
        ..Config::default()
    };
    assert!(converter_with(&config).to_tag(&data).is_empty());
}

#[test]
fn test_placeholder_item_from_config() {
    let config = Config {
        placeholder_item: "minecraft:dirt".to_owned(),
        ..Config::default()
    };
    let data: StructuredDataContainer =
        [StructuredData::of(keys::BUNDLE_CONTENTS, vec![Item::new(1, 1)])]
            .into_iter()
            .collect();
    let tag = converter_with(&config).to_tag(&data);
    let saved = tag.get_list("Items").and_then(|l| l.compounds().next()).unwrap();
    assert_eq!(saved.get_string("id"), Some("minecraft:dirt"));
}

#[test]
fn test_lodestone_tracker() {
    let unbound = LodestoneTracker {
        pos: None,
        tracked: false,
    };
    let tag = convert([StructuredData::of(keys::LODESTONE_TRACKER, unbound)]);
    assert_eq!(tag.keys().collect::<Vec<_>>(), ["LodestoneTracked"]);
    assert_eq!(tag.get_boolean("LodestoneTracked"), Some(false));

    let bound = LodestoneTracker {
        pos: Some(GlobalPosition {
            dimension: "minecraft:the_nether".to_owned(),
            x: 1,
            y: 2,
            z: 3,
        }),
        tracked: true,
    };
    let tag = convert([StructuredData::of(keys::LODESTONE_TRACKER, bound)]);
    let pos = tag.get_compound("LodestonePos").unwrap();
    assert_eq!(
        (pos.get_int("X"), pos.get_int("Y"), pos.get_int("Z")),
        (Some(1), Some(2), Some(3))
    );
    assert_eq!(tag.get_boolean("LodestoneTracked"), Some(true));
    assert_eq!(tag.get_string("LodestoneDimension"), Some("minecraft:the_nether"));
}

#[test]
fn test_fireworks() {
    let explosion = FireworkExplosion {
        shape: 1,
        colors: vec![0xFF0000],
        fade_colors: Vec::new(),
        has_trail: true,
        has_twinkle: false,
    };
    let tag = convert([
        StructuredData::of(
            keys::FIREWORKS,
            Fireworks {
                flight_duration: 2,
                explosions: vec![explosion.clone()],
            },
        ),
        StructuredData::of(keys::FIREWORK_EXPLOSION, explosion),
    ]);

    let fireworks = tag.get_compound("Fireworks").unwrap();
    assert_eq!(fireworks.get_int("Flight"), Some(2));
    let converted = fireworks
        .get_list("Explosions")
        .and_then(|l| l.compounds().next())
        .unwrap();
    assert_eq!(converted.get_int("Type"), Some(1));
    assert_eq!(converted.get("Colors"), Some(&OwnValue::IntArray(vec![0xFF0000])));
    assert_eq!(converted.get("FadeColors"), Some(&OwnValue::IntArray(Vec::new())));
    assert_eq!(converted.get_boolean("Trail"), Some(true));
    assert_eq!(converted.get_boolean("Flicker"), Some(false));
    assert_eq!(tag.get_compound("Explosion"), Some(converted));
}

#[test]
fn test_name_only_profile() {
    let tag = convert([StructuredData::of(keys::PROFILE, GameProfile::named("Notch"))]);
    assert_eq!(tag.get_string("SkullOwner"), Some("Notch"));
}

#[test]
fn test_full_profile() {
    let id = Uuid::from_u128(0x069a79f4_44e9_4726_a5be_fca90e38aaf5);
    let property = |value: &str, signature: Option<&str>| Property {
        name: "textures".to_owned(),
        value: value.to_owned(),
        signature: signature.map(str::to_owned),
    };
    let profile = GameProfile {
        name: Some("Notch".to_owned()),
        id: Some(id),
        properties: vec![property("a", Some("sig")), property("b", None)],
    };
    let tag = convert([StructuredData::of(keys::PROFILE, profile)]);

    let owner = tag.get_compound("SkullOwner").unwrap();
    assert_eq!(owner.get_string("Name"), Some("Notch"));
    assert_eq!(
        owner.get("Id").and_then(OwnValue::as_int_array),
        Some(&uuid_to_int_array(&id)[..])
    );
    let textures = owner
        .get_compound("Properties")
        .and_then(|p| p.get_list("textures"))
        .unwrap();
    let values: Vec<_> = textures
        .compounds()
        .map(|t| (t.get_string("Value"), t.get_string("Signature")))
        .collect();
    assert_eq!(values, [(Some("a"), Some("sig")), (Some("b"), None)]);
}

#[test]
fn test_anonymous_profile() {
    let id = Uuid::from_u128(7);
    let profile = GameProfile {
        name: None,
        id: Some(id),
        properties: Vec::new(),
    };
    let tag = convert([StructuredData::of(keys::PROFILE, profile)]);
    let owner = tag.get_compound("SkullOwner").unwrap();
    assert!(!owner.contains_key("Name"));
    assert!(!owner.contains_key("Properties"));
    assert!(owner.contains_key("Id"));
}

#[test]
fn test_instrument() {
    let tag = convert([StructuredData::of(keys::INSTRUMENT, Holder::Id(2))]);
    assert_eq!(tag.get_string("instrument"), Some("minecraft:seek_goat_horn"));

    let tag = convert([StructuredData::of(keys::INSTRUMENT, Holder::Id(40))]);
    assert!(tag.is_empty());

    let inline = Holder::Direct(Instrument {
        sound_event: "minecraft:item.goat_horn.sound.0".to_owned(),
        use_duration: 140,
        range: 256.0,
    });
    let tag = convert([StructuredData::of(keys::INSTRUMENT, inline)]);
    assert!(tag.is_empty());
}

#[test]
fn test_converter_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StructuredDataConverter>();
    assert!(format!("{:?}", converter()).contains("converters"));
}
