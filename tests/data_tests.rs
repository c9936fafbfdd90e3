//! Tests for structured data keys and containers

use na_via::{
    DataKey, DataValue, Enchantments, GameProfile, Item, StructuredData, StructuredDataContainer,
    keys,
};

#[test]
fn test_key_registry() {
    assert_eq!(DataKey::COUNT, 56);
    assert_eq!(DataKey::ALL.len(), DataKey::COUNT);
    for (index, key) in DataKey::ALL.into_iter().enumerate() {
        assert_eq!(key.index(), index);
        assert_eq!(DataKey::from_identifier(key.identifier()), Some(key));
    }
    assert_eq!(DataKey::ALL[0], DataKey::CustomData);
    assert_eq!(DataKey::ALL[DataKey::COUNT - 1], DataKey::ContainerLoot);
}

#[test]
fn test_key_identifiers() {
    assert_eq!(DataKey::Damage.identifier(), "minecraft:damage");
    assert_eq!(DataKey::from_identifier("bundle_contents"), Some(DataKey::BundleContents));
    assert_eq!(DataKey::from_identifier("minecraft:profile"), Some(DataKey::Profile));
    assert_eq!(DataKey::from_identifier("minecraft:nope"), None);
    assert_eq!(keys::LODESTONE_TRACKER.key(), DataKey::LodestoneTracker);
    assert_eq!(format!("{}", DataKey::HideTooltip), "minecraft:hide_tooltip");
}

#[test]
fn test_entry_payloads() {
    let entry = StructuredData::of(keys::DAMAGE, 5);
    assert_eq!(entry.key(), DataKey::Damage);
    assert!(!entry.is_empty());
    assert!(entry.show_in_tooltip());
    assert_eq!(entry.value(), Some(&DataValue::Int(5)));
    assert_eq!(entry.get::<i32>(), Some(&5));
    assert_eq!(entry.get::<bool>(), None);

    let hidden = StructuredData::of(keys::PROFILE, GameProfile::named("Alex")).hidden();
    assert!(!hidden.show_in_tooltip());
    assert!(hidden.with_tooltip(true).show_in_tooltip());

    let empty = StructuredData::empty(DataKey::Lore);
    assert!(empty.is_empty());
    assert_eq!(empty.value(), None);
}

#[test]
fn test_container() {
    let mut data = StructuredDataContainer::new();
    assert!(data.set(StructuredData::of(keys::DAMAGE, 1)).is_none());
    assert!(data.set(StructuredData::of(keys::DAMAGE, 2)).is_some());
    data.set(StructuredData::of(keys::ENCHANTMENTS, Enchantments::new().with(0, 1)));
    data.set_empty(DataKey::Lore);

    assert_eq!(data.len(), 3);
    assert_eq!(data.get(keys::DAMAGE), Some(&2));
    assert_eq!(
        data.get(keys::ENCHANTMENTS).and_then(|e| e.level(0)),
        Some(1)
    );
    assert!(data.contains(DataKey::Lore));
    assert_eq!(data.get(keys::LORE), None);

    let order: Vec<_> = data.iter().map(StructuredData::key).collect();
    assert_eq!(order, [DataKey::Damage, DataKey::Enchantments, DataKey::Lore]);

    assert!(data.remove(DataKey::Damage).is_some());
    assert!(!data.contains(DataKey::Damage));
    assert_eq!(data.len(), 2);
}

#[test]
fn test_item_builder() {
    let item = Item::new(1, 64)
        .with(StructuredData::of(keys::MAX_STACK_SIZE, 16))
        .with(StructuredData::of(keys::UNBREAKABLE, ()));
    assert_eq!(item.data.len(), 2);
    assert_eq!(item.data.get(keys::UNBREAKABLE), Some(&()));
}

#[test]
fn test_enchantments() {
    let enchantments: Enchantments = [(13, 1), (14, 2)].into_iter().collect();
    assert_eq!(enchantments.len(), 2);
    assert_eq!(enchantments.iter().collect::<Vec<_>>(), [(13, 1), (14, 2)]);

    let mut enchantments = enchantments;
    assert_eq!(enchantments.insert(13, 5), Some(1));
    assert_eq!(enchantments.level(13), Some(5));
    assert_eq!(enchantments.level(99), None);
}
