//! Tests for the identifier remap tables

use na_via::{IdentifierTable, Mappings};

#[test]
fn test_id_to_key() {
    let mappings = Mappings::v1_20_3();
    assert_eq!(mappings.enchantments.id_to_key(0), Some("minecraft:protection"));
    assert_eq!(mappings.enchantments.id_to_key(13), Some("minecraft:sharpness"));
    assert_eq!(mappings.enchantments.id_to_key(38), Some("minecraft:vanishing_curse"));
    assert_eq!(mappings.enchantments.id_to_key(39), None);
    assert_eq!(mappings.enchantments.id_to_key(-1), None);
    assert_eq!(mappings.attributes.id_to_key(0), Some("minecraft:generic.armor"));
    assert_eq!(mappings.instruments.id_to_key(7), Some("minecraft:dream_goat_horn"));
    assert_eq!(mappings.map_decorations.id_to_key(26), Some("minecraft:red_x"));
}

#[test]
fn test_key_to_id_namespacing() {
    let mappings = Mappings::v1_20_3();
    let table = &mappings.map_decorations;
    assert_eq!(table.key_to_id("minecraft:red_x"), Some(26));
    assert_eq!(table.key_to_id("red_x"), Some(26));
    assert_eq!(table.key_to_id("banner_white"), Some(10));
    assert_eq!(table.key_to_id("minecraft:banner_black"), Some(25));
    assert_eq!(table.key_to_id("other:red_x"), None);
    assert_eq!(table.key_to_id(""), None);
}

#[test]
fn test_tables_are_bijective() {
    let mappings = Mappings::v1_20_3();
    let sizes: Vec<_> = mappings.tables().iter().map(|t| t.len()).collect();
    assert_eq!(sizes, [39, 14, 8, 34]);

    for table in mappings.tables() {
        for id in 0..table.len() as i32 {
            let key = table.id_to_key(id).unwrap();
            assert!(key.starts_with("minecraft:"), "{}: {key}", table.name());
            assert_eq!(table.key_to_id(key), Some(id), "{}: {key}", table.name());
        }
    }
}

#[test]
fn test_custom_table() {
    static KEYS: [&str; 2] = ["minecraft:a", "minecraft:b"];
    let table = IdentifierTable::new("custom", &KEYS);
    assert_eq!(table.name(), "custom");
    assert!(!table.is_empty());
    assert_eq!(table.key_to_id("b"), Some(1));
    assert_eq!(table.id_to_key(2), None);
}
