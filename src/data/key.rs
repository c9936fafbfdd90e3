use std::marker::PhantomData;

use crate::{
    AttributeModifiers, DyedColor, Enchantments, FilterableString, FireworkExplosion, Fireworks,
    GameProfile, Holder, Instrument, Item, LodestoneTracker, OwnCompound, OwnValue, WrittenBook,
    namespaced,
};

/// A structured data payload of any key.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Unit,
    Int(i32),
    Bool(bool),
    String(String),
    Ints(Vec<i32>),
    Tag(OwnValue),
    Tags(Vec<OwnValue>),
    Compound(OwnCompound),
    Enchantments(Enchantments),
    AttributeModifiers(AttributeModifiers),
    DyedColor(DyedColor),
    Items(Vec<Item>),
    WritableBook(Vec<FilterableString>),
    WrittenBook(WrittenBook),
    Instrument(Holder<Instrument>),
    LodestoneTracker(LodestoneTracker),
    FireworkExplosion(FireworkExplosion),
    Fireworks(Fireworks),
    Profile(GameProfile),
}

/// A Rust type usable as a structured data payload.
pub trait DataType: Sized + 'static {
    fn into_value(self) -> DataValue;

    fn from_value(value: &DataValue) -> Option<&Self>;
}

impl DataType for () {
    fn into_value(self) -> DataValue {
        DataValue::Unit
    }

    fn from_value(value: &DataValue) -> Option<&Self> {
        match value {
            DataValue::Unit => Some(&()),
            _ => None,
        }
    }
}

macro_rules! data_type {
    ($($type:ty => $variant:ident),* $(,)?) => {
        $(
            impl DataType for $type {
                #[inline]
                fn into_value(self) -> DataValue {
                    DataValue::$variant(self)
                }

                #[inline]
                fn from_value(value: &DataValue) -> Option<&Self> {
                    match value {
                        DataValue::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }
        )*
    };
}

data_type!(
    i32 => Int,
    bool => Bool,
    String => String,
    Vec<i32> => Ints,
    OwnValue => Tag,
    Vec<OwnValue> => Tags,
    OwnCompound => Compound,
    Enchantments => Enchantments,
    AttributeModifiers => AttributeModifiers,
    DyedColor => DyedColor,
    Vec<Item> => Items,
    Vec<FilterableString> => WritableBook,
    WrittenBook => WrittenBook,
    Holder<Instrument> => Instrument,
    LodestoneTracker => LodestoneTracker,
    FireworkExplosion => FireworkExplosion,
    Fireworks => Fireworks,
    GameProfile => Profile,
);

/// A [`DataKey`] tied to the Rust type of its payload.
pub struct StructuredDataKey<T> {
    key: DataKey,
    _type: PhantomData<fn() -> T>,
}

impl<T> StructuredDataKey<T> {
    const fn new(key: DataKey) -> Self {
        Self {
            key,
            _type: PhantomData,
        }
    }

    #[inline]
    pub const fn key(self) -> DataKey {
        self.key
    }
}

impl<T> Clone for StructuredDataKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StructuredDataKey<T> {}

impl<T> std::fmt::Debug for StructuredDataKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StructuredDataKey").field(&self.key).finish()
    }
}

impl<T> PartialEq for StructuredDataKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for StructuredDataKey<T> {}

macro_rules! data_keys {
    ($($variant:ident($type:ty) = $name:literal => $constant:ident;)*) => {
        /// Identity of one independently addressable item property.
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum DataKey {
            $($variant,)*
        }

        impl DataKey {
            pub const COUNT: usize = [$($name),*].len();

            /// Every key, in registry order.
            pub const ALL: [DataKey; Self::COUNT] = [$(DataKey::$variant),*];

            /// The namespaced registry identifier.
            pub const fn identifier(self) -> &'static str {
                match self {
                    $(DataKey::$variant => concat!("minecraft:", $name),)*
                }
            }
        }

        /// Typed handles for every [`DataKey`].
        pub mod keys {
            use super::*;

            $(
                pub const $constant: StructuredDataKey<$type> =
                    StructuredDataKey::new(DataKey::$variant);
            )*
        }
    };
}

data_keys! {
    CustomData(OwnCompound) = "custom_data" => CUSTOM_DATA;
    MaxStackSize(i32) = "max_stack_size" => MAX_STACK_SIZE;
    MaxDamage(i32) = "max_damage" => MAX_DAMAGE;
    Damage(i32) = "damage" => DAMAGE;
    Unbreakable(()) = "unbreakable" => UNBREAKABLE;
    CustomName(OwnValue) = "custom_name" => CUSTOM_NAME;
    ItemName(OwnValue) = "item_name" => ITEM_NAME;
    Lore(Vec<OwnValue>) = "lore" => LORE;
    Rarity(i32) = "rarity" => RARITY;
    Enchantments(Enchantments) = "enchantments" => ENCHANTMENTS;
    CanPlaceOn(OwnValue) = "can_place_on" => CAN_PLACE_ON;
    CanBreak(OwnValue) = "can_break" => CAN_BREAK;
    AttributeModifiers(AttributeModifiers) = "attribute_modifiers" => ATTRIBUTE_MODIFIERS;
    CustomModelData(i32) = "custom_model_data" => CUSTOM_MODEL_DATA;
    HideAdditionalTooltip(()) = "hide_additional_tooltip" => HIDE_ADDITIONAL_TOOLTIP;
    HideTooltip(()) = "hide_tooltip" => HIDE_TOOLTIP;
    RepairCost(i32) = "repair_cost" => REPAIR_COST;
    CreativeSlotLock(()) = "creative_slot_lock" => CREATIVE_SLOT_LOCK;
    EnchantmentGlintOverride(bool) = "enchantment_glint_override" => ENCHANTMENT_GLINT_OVERRIDE;
    IntangibleProjectile(()) = "intangible_projectile" => INTANGIBLE_PROJECTILE;
    Food(OwnValue) = "food" => FOOD;
    FireResistant(()) = "fire_resistant" => FIRE_RESISTANT;
    Tool(OwnValue) = "tool" => TOOL;
    StoredEnchantments(Enchantments) = "stored_enchantments" => STORED_ENCHANTMENTS;
    DyedColor(DyedColor) = "dyed_color" => DYED_COLOR;
    MapColor(i32) = "map_color" => MAP_COLOR;
    MapId(i32) = "map_id" => MAP_ID;
    MapDecorations(OwnCompound) = "map_decorations" => MAP_DECORATIONS;
    MapPostProcessing(i32) = "map_post_processing" => MAP_POST_PROCESSING;
    ChargedProjectiles(Vec<Item>) = "charged_projectiles" => CHARGED_PROJECTILES;
    BundleContents(Vec<Item>) = "bundle_contents" => BUNDLE_CONTENTS;
    PotionContents(OwnValue) = "potion_contents" => POTION_CONTENTS;
    SuspiciousStewEffects(OwnValue) = "suspicious_stew_effects" => SUSPICIOUS_STEW_EFFECTS;
    WritableBookContent(Vec<FilterableString>) = "writable_book_content" => WRITABLE_BOOK_CONTENT;
    WrittenBookContent(WrittenBook) = "written_book_content" => WRITTEN_BOOK_CONTENT;
    Trim(OwnValue) = "trim" => TRIM;
    DebugStickState(OwnCompound) = "debug_stick_state" => DEBUG_STICK_STATE;
    EntityData(OwnCompound) = "entity_data" => ENTITY_DATA;
    BucketEntityData(OwnCompound) = "bucket_entity_data" => BUCKET_ENTITY_DATA;
    BlockEntityData(OwnCompound) = "block_entity_data" => BLOCK_ENTITY_DATA;
    Instrument(Holder<Instrument>) = "instrument" => INSTRUMENT;
    OminousBottleAmplifier(i32) = "ominous_bottle_amplifier" => OMINOUS_BOTTLE_AMPLIFIER;
    Recipes(OwnValue) = "recipes" => RECIPES;
    LodestoneTracker(LodestoneTracker) = "lodestone_tracker" => LODESTONE_TRACKER;
    FireworkExplosion(FireworkExplosion) = "firework_explosion" => FIREWORK_EXPLOSION;
    Fireworks(Fireworks) = "fireworks" => FIREWORKS;
    Profile(GameProfile) = "profile" => PROFILE;
    NoteBlockSound(String) = "note_block_sound" => NOTE_BLOCK_SOUND;
    BannerPatterns(OwnValue) = "banner_patterns" => BANNER_PATTERNS;
    BaseColor(i32) = "base_color" => BASE_COLOR;
    PotDecorations(Vec<i32>) = "pot_decorations" => POT_DECORATIONS;
    Container(Vec<Item>) = "container" => CONTAINER;
    BlockState(OwnValue) = "block_state" => BLOCK_STATE;
    Bees(OwnValue) = "bees" => BEES;
    Lock(OwnValue) = "lock" => LOCK;
    ContainerLoot(OwnCompound) = "container_loot" => CONTAINER_LOOT;
}

impl DataKey {
    /// Looks a key up by identifier, with or without the `minecraft:`
    /// namespace.
    pub fn from_identifier(identifier: &str) -> Option<DataKey> {
        let identifier = namespaced(identifier);
        Self::ALL
            .into_iter()
            .find(|key| key.identifier() == identifier)
    }

    /// Position of this key in [`DataKey::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for DataKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}
