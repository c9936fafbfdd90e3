use bytes::{Buf, BufMut};
use uuid::Uuid;

use crate::{
    BOOLEAN, BYTE, ComponentType, DOUBLE, DataItem, Error, FLOAT, INT, ITEM, LONG,
    Loose, NAMELESS_NBT, NBT, OPTIONAL_POSITION, OPTIONAL_UUID, OwnCompound, POSITION, Position,
    ROTATION, Result, SHORT, StringType, Type, TypeConverter, TypeKind, UNSIGNED_SHORT, UUID,
    VAR_INT, VAR_LONG, VECTOR, Vector, Vector3f, cold_path,
};

/// A decoded metadata value; one variant per [`TypeKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Byte(i8),
    Boolean(bool),
    Short(i16),
    UnsignedShort(u16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    VarInt(i32),
    VarLong(i64),
    String(String),
    Component(serde_json::Value),
    Position(Position),
    OptionalPosition(Option<Position>),
    Rotation(Vector3f),
    Vector(Vector),
    Uuid(Uuid),
    OptionalUuid(Option<Uuid>),
    Nbt(Option<OwnCompound>),
    NamelessNbt(Option<OwnCompound>),
    Item(Option<DataItem>),
}

impl MetaValue {
    pub fn kind(&self) -> TypeKind {
        match self {
            MetaValue::Byte(_) => TypeKind::Byte,
            MetaValue::Boolean(_) => TypeKind::Boolean,
            MetaValue::Short(_) => TypeKind::Short,
            MetaValue::UnsignedShort(_) => TypeKind::UnsignedShort,
            MetaValue::Int(_) => TypeKind::Int,
            MetaValue::Long(_) => TypeKind::Long,
            MetaValue::Float(_) => TypeKind::Float,
            MetaValue::Double(_) => TypeKind::Double,
            MetaValue::VarInt(_) => TypeKind::VarInt,
            MetaValue::VarLong(_) => TypeKind::VarLong,
            MetaValue::String(_) => TypeKind::String,
            MetaValue::Component(_) => TypeKind::Component,
            MetaValue::Position(_) => TypeKind::Position,
            MetaValue::OptionalPosition(_) => TypeKind::OptionalPosition,
            MetaValue::Rotation(_) => TypeKind::Rotation,
            MetaValue::Vector(_) => TypeKind::Vector,
            MetaValue::Uuid(_) => TypeKind::Uuid,
            MetaValue::OptionalUuid(_) => TypeKind::OptionalUuid,
            MetaValue::Nbt(_) => TypeKind::Nbt,
            MetaValue::NamelessNbt(_) => TypeKind::NamelessNbt,
            MetaValue::Item(_) => TypeKind::Item,
        }
    }

    /// Reads a value of `kind`. Strings and components obey `strings`.
    pub fn read(kind: TypeKind, buffer: &mut impl Buf, strings: StringType) -> Result<Self> {
        Ok(match kind {
            TypeKind::Byte => MetaValue::Byte(BYTE.read(buffer)?),
            TypeKind::Boolean => MetaValue::Boolean(BOOLEAN.read(buffer)?),
            TypeKind::Short => MetaValue::Short(SHORT.read(buffer)?),
            TypeKind::UnsignedShort => MetaValue::UnsignedShort(UNSIGNED_SHORT.read(buffer)?),
            TypeKind::Int => MetaValue::Int(INT.read(buffer)?),
            TypeKind::Long => MetaValue::Long(LONG.read(buffer)?),
            TypeKind::Float => MetaValue::Float(FLOAT.read(buffer)?),
            TypeKind::Double => MetaValue::Double(DOUBLE.read(buffer)?),
            TypeKind::VarInt => MetaValue::VarInt(VAR_INT.read(buffer)?),
            TypeKind::VarLong => MetaValue::VarLong(VAR_LONG.read(buffer)?),
            TypeKind::String => MetaValue::String(strings.read(buffer)?),
            TypeKind::Component => MetaValue::Component(ComponentType::new(strings).read(buffer)?),
            TypeKind::Position => MetaValue::Position(POSITION.read(buffer)?),
            TypeKind::OptionalPosition => {
                MetaValue::OptionalPosition(OPTIONAL_POSITION.read(buffer)?)
            }
            TypeKind::Rotation => MetaValue::Rotation(ROTATION.read(buffer)?),
            TypeKind::Vector => MetaValue::Vector(VECTOR.read(buffer)?),
            TypeKind::Uuid => MetaValue::Uuid(UUID.read(buffer)?),
            TypeKind::OptionalUuid => MetaValue::OptionalUuid(OPTIONAL_UUID.read(buffer)?),
            TypeKind::Nbt => MetaValue::Nbt(NBT.read(buffer)?),
            TypeKind::NamelessNbt => MetaValue::NamelessNbt(NAMELESS_NBT.read(buffer)?),
            TypeKind::Item => MetaValue::Item(ITEM.read(buffer)?),
        })
    }

    pub fn write(&self, buffer: &mut impl BufMut, strings: StringType) -> Result<()> {
        match self {
            MetaValue::Byte(value) => BYTE.write(buffer, value),
            MetaValue::Boolean(value) => BOOLEAN.write(buffer, value),
            MetaValue::Short(value) => SHORT.write(buffer, value),
            MetaValue::UnsignedShort(value) => UNSIGNED_SHORT.write(buffer, value),
            MetaValue::Int(value) => INT.write(buffer, value),
            MetaValue::Long(value) => LONG.write(buffer, value),
            MetaValue::Float(value) => FLOAT.write(buffer, value),
            MetaValue::Double(value) => DOUBLE.write(buffer, value),
            MetaValue::VarInt(value) => VAR_INT.write(buffer, value),
            MetaValue::VarLong(value) => VAR_LONG.write(buffer, value),
            MetaValue::String(value) => strings.write(buffer, value),
            MetaValue::Component(value) => ComponentType::new(strings).write(buffer, value),
            MetaValue::Position(value) => POSITION.write(buffer, value),
            MetaValue::OptionalPosition(value) => OPTIONAL_POSITION.write(buffer, value),
            MetaValue::Rotation(value) => ROTATION.write(buffer, value),
            MetaValue::Vector(value) => VECTOR.write(buffer, value),
            MetaValue::Uuid(value) => UUID.write(buffer, value),
            MetaValue::OptionalUuid(value) => OPTIONAL_UUID.write(buffer, value),
            MetaValue::Nbt(value) => NBT.write(buffer, value),
            MetaValue::NamelessNbt(value) => NAMELESS_NBT.write(buffer, value),
            MetaValue::Item(value) => ITEM.write(buffer, value),
        }
    }

    /// This value as a loose number, if it is numeric or boolean.
    fn loosen<T>(&self) -> Option<Loose<T>> {
        Some(match *self {
            MetaValue::Byte(value) => Loose::Integer(value.into()),
            MetaValue::Short(value) => Loose::Integer(value.into()),
            MetaValue::UnsignedShort(value) => Loose::Integer(value.into()),
            MetaValue::Int(value) | MetaValue::VarInt(value) => Loose::Integer(value.into()),
            MetaValue::Long(value) | MetaValue::VarLong(value) => Loose::Integer(value),
            MetaValue::Float(value) => Loose::Float(value.into()),
            MetaValue::Double(value) => Loose::Float(value),
            MetaValue::Boolean(value) => Loose::Boolean(value),
            _ => return None,
        })
    }
}

/// Re-types a loose metadata value for one numeric codec.
fn unsupported(value: &Loose<MetaValue>, to: TypeKind) -> Error {
    cold_path();
    let from = match value {
        Loose::Already(value) => value.kind().name(),
        other => other.shape(),
    };
    Error::UnsupportedConversion {
        from,
        to: to.name(),
    }
}

fn retarget<T>(value: Loose<MetaValue>, to: TypeKind) -> Result<Loose<T>> {
    match value {
        Loose::Already(value) => value.loosen().ok_or_else(|| {
            cold_path();
            Error::UnsupportedConversion {
                from: value.kind().name(),
                to: to.name(),
            }
        }),
        Loose::Integer(value) => Ok(Loose::Integer(value)),
        Loose::Float(value) => Ok(Loose::Float(value)),
        Loose::Boolean(value) => Ok(Loose::Boolean(value)),
        Loose::Text(value) => Ok(Loose::Text(value)),
    }
}

impl TypeKind {
    /// Normalises a loosely typed metadata value into a value of this kind.
    ///
    /// Values already of this kind pass through. Numeric kinds accept any
    /// number or boolean and `String` accepts text; every other combination
    /// fails with
    /// [`UnsupportedConversion`](Error::UnsupportedConversion).
    pub fn convert(self, value: Loose<MetaValue>) -> Result<MetaValue> {
        let value = match value {
            Loose::Already(value) if value.kind() == self => return Ok(value),
            other => other,
        };
        Ok(match self {
            TypeKind::Byte => MetaValue::Byte(BYTE.convert(retarget(value, self)?)?),
            TypeKind::Boolean => MetaValue::Boolean(BOOLEAN.convert(retarget(value, self)?)?),
            TypeKind::Short => MetaValue::Short(SHORT.convert(retarget(value, self)?)?),
            TypeKind::UnsignedShort => {
                MetaValue::UnsignedShort(UNSIGNED_SHORT.convert(retarget(value, self)?)?)
            }
            TypeKind::Int => MetaValue::Int(INT.convert(retarget(value, self)?)?),
            TypeKind::Long => MetaValue::Long(LONG.convert(retarget(value, self)?)?),
            TypeKind::Float => MetaValue::Float(FLOAT.convert(retarget(value, self)?)?),
            TypeKind::Double => MetaValue::Double(DOUBLE.convert(retarget(value, self)?)?),
            TypeKind::VarInt => MetaValue::VarInt(VAR_INT.convert(retarget(value, self)?)?),
            TypeKind::VarLong => MetaValue::VarLong(VAR_LONG.convert(retarget(value, self)?)?),
            TypeKind::String => match value {
                Loose::Text(text) => MetaValue::String(text),
                other => return Err(unsupported(&other, self)),
            },
            _ => return Err(unsupported(&value, self)),
        })
    }
}
