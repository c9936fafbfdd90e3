use indexmap::IndexMap;
use uuid::Uuid;

use crate::OwnValue;

/// Enchantment id to level, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Enchantments {
    levels: IndexMap<i32, i32>,
}

impl Enchantments {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: i32, level: i32) -> Self {
        self.insert(id, level);
        self
    }

    pub fn insert(&mut self, id: i32, level: i32) -> Option<i32> {
        self.levels.insert(id, level)
    }

    pub fn level(&self, id: i32) -> Option<i32> {
        self.levels.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// `(id, level)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.levels.iter().map(|(id, level)| (*id, *level))
    }
}

impl FromIterator<(i32, i32)> for Enchantments {
    fn from_iter<T: IntoIterator<Item = (i32, i32)>>(iter: T) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModifierData {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub operation: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeModifier {
    /// Attribute registry id.
    pub attribute: i32,
    pub modifier: ModifierData,
    /// Equipment slot group id.
    pub slot: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeModifiers {
    pub modifiers: Vec<AttributeModifier>,
}

impl AttributeModifiers {
    pub fn new(modifiers: Vec<AttributeModifier>) -> Self {
        Self { modifiers }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DyedColor {
    pub rgb: i32,
}

/// Book text with an optional filtered variant for chat-filtered clients.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterableString {
    pub raw: String,
    pub filtered: Option<String>,
}

impl FilterableString {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            filtered: None,
        }
    }

    #[must_use]
    pub fn filtered(mut self, filtered: impl Into<String>) -> Self {
        self.filtered = Some(filtered.into());
        self
    }
}

/// Like [`FilterableString`], for rich text trees.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterableComponent {
    pub raw: OwnValue,
    pub filtered: Option<OwnValue>,
}

impl FilterableComponent {
    pub fn new(raw: impl Into<OwnValue>) -> Self {
        Self {
            raw: raw.into(),
            filtered: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrittenBook {
    pub title: FilterableString,
    pub author: String,
    pub generation: i32,
    pub pages: Vec<FilterableComponent>,
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobalPosition {
    pub dimension: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LodestoneTracker {
    pub pos: Option<GlobalPosition>,
    pub tracked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FireworkExplosion {
    pub shape: i32,
    pub colors: Vec<i32>,
    pub fade_colors: Vec<i32>,
    pub has_trail: bool,
    pub has_twinkle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fireworks {
    pub flight_duration: i32,
    pub explosions: Vec<FireworkExplosion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
    pub signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameProfile {
    pub name: Option<String>,
    pub id: Option<Uuid>,
    pub properties: Vec<Property>,
}

impl GameProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether the name alone describes this profile.
    pub fn is_name_only(&self) -> bool {
        self.name.is_some() && self.id.is_none() && self.properties.is_empty()
    }
}

/// A registry reference: either a numeric id or an inline value.
#[derive(Debug, Clone, PartialEq)]
pub enum Holder<T> {
    Id(i32),
    Direct(T),
}

impl<T> Holder<T> {
    #[inline]
    pub fn has_id(&self) -> bool {
        matches!(self, Holder::Id(_))
    }

    #[inline]
    pub fn id(&self) -> Option<i32> {
        match self {
            Holder::Id(id) => Some(*id),
            Holder::Direct(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub sound_event: String,
    pub use_duration: i32,
    pub range: f32,
}
