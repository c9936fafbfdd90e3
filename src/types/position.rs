use bytes::{Buf, BufMut};

use crate::{BOOLEAN, Error, FLOAT, INT, Result, Type, TypeKind, cold_path};

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

const HORIZONTAL_MIN: i32 = -(1 << 25);
const HORIZONTAL_MAX: i32 = (1 << 25) - 1;
const VERTICAL_MAX: i32 = (1 << 12) - 1;

fn check_axis(what: &'static str, value: i32, min: i32, max: i32) -> Result<()> {
    if value < min || value > max {
        cold_path();
        return Err(Error::ValueOutOfRange {
            what,
            value: value.into(),
        });
    }
    Ok(())
}

/// A position packed into one `i64`: 26 bits x, 12 bits y, 26 bits z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionType;

pub const POSITION: PositionType = PositionType;

impl PositionType {
    pub fn pack(position: &Position) -> Result<i64> {
        check_axis("position x", position.x, HORIZONTAL_MIN, HORIZONTAL_MAX)?;
        check_axis("position y", position.y, 0, VERTICAL_MAX)?;
        check_axis("position z", position.z, HORIZONTAL_MIN, HORIZONTAL_MAX)?;
        Ok(((position.x as i64 & 0x3FF_FFFF) << 38)
            | ((position.y as i64 & 0xFFF) << 26)
            | (position.z as i64 & 0x3FF_FFFF))
    }

    pub const fn unpack(packed: i64) -> Position {
        Position {
            x: (packed >> 38) as i32,
            y: ((packed >> 26) & 0xFFF) as i32,
            z: ((packed << 38) >> 38) as i32,
        }
    }
}

impl Type for PositionType {
    type Value = Position;

    const KIND: TypeKind = TypeKind::Position;

    fn read(&self, buffer: &mut impl Buf) -> Result<Position> {
        Ok(Self::unpack(buffer.try_get_i64()?))
    }

    fn write(&self, buffer: &mut impl BufMut, value: &Position) -> Result<()> {
        buffer.put_i64(Self::pack(value)?);
        Ok(())
    }
}

/// A presence boolean followed by a packed position when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalPositionType;

pub const OPTIONAL_POSITION: OptionalPositionType = OptionalPositionType;

impl Type for OptionalPositionType {
    type Value = Option<Position>;

    const KIND: TypeKind = TypeKind::OptionalPosition;

    fn read(&self, buffer: &mut impl Buf) -> Result<Option<Position>> {
        if BOOLEAN.read(buffer)? {
            POSITION.read(buffer).map(Some)
        } else {
            Ok(None)
        }
    }

    fn write(&self, buffer: &mut impl BufMut, value: &Option<Position>) -> Result<()> {
        match value {
            Some(position) => {
                let packed = PositionType::pack(position)?;
                buffer.put_u8(1);
                buffer.put_i64(packed);
            }
            None => buffer.put_u8(0),
        }
        Ok(())
    }
}

/// Three floats, used for rotations and other orientation triples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationType;

pub const ROTATION: RotationType = RotationType;

impl Type for RotationType {
    type Value = Vector3f;

    const KIND: TypeKind = TypeKind::Rotation;

    fn read(&self, buffer: &mut impl Buf) -> Result<Vector3f> {
        Ok(Vector3f {
            x: FLOAT.read(buffer)?,
            y: FLOAT.read(buffer)?,
            z: FLOAT.read(buffer)?,
        })
    }

    fn write(&self, buffer: &mut impl BufMut, value: &Vector3f) -> Result<()> {
        buffer.put_f32(value.x);
        buffer.put_f32(value.y);
        buffer.put_f32(value.z);
        Ok(())
    }
}

/// Three 32-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorType;

pub const VECTOR: VectorType = VectorType;

impl Type for VectorType {
    type Value = Vector;

    const KIND: TypeKind = TypeKind::Vector;

    fn read(&self, buffer: &mut impl Buf) -> Result<Vector> {
        Ok(Vector {
            x: INT.read(buffer)?,
            y: INT.read(buffer)?,
            z: INT.read(buffer)?,
        })
    }

    fn write(&self, buffer: &mut impl BufMut, value: &Vector) -> Result<()> {
        buffer.put_i32(value.x);
        buffer.put_i32(value.y);
        buffer.put_i32(value.z);
        Ok(())
    }
}
