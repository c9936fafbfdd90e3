//! Rich text trees to the JSON strings legacy items store them as.
//!
//! ```
//! use na_via::{OwnCompound, OwnValue, tag_to_json_string};
//!
//! let mut text = OwnCompound::new();
//! text.put_string("text", "Excalibur");
//! text.put_boolean("bold", true);
//!
//! let json = tag_to_json_string(&OwnValue::Compound(text));
//! assert_eq!(json, r#"{"text":"Excalibur","bold":true}"#);
//! ```

use serde_json::{Map, Number, Value};

use crate::{OwnCompound, OwnValue};

/// Text style keys stored as bytes in the tree and as booleans in JSON.
const BOOLEAN_KEYS: [&str; 6] = [
    "bold",
    "italic",
    "underlined",
    "strikethrough",
    "obfuscated",
    "interpret",
];

/// Converts a text tree to its JSON form.
pub fn tag_to_json(tag: &OwnValue) -> Value {
    match tag {
        OwnValue::End => Value::Null,
        OwnValue::Byte(value) => Value::from(*value),
        OwnValue::Short(value) => Value::from(*value),
        OwnValue::Int(value) => Value::from(*value),
        OwnValue::Long(value) => Value::from(*value),
        OwnValue::Float(value) => float(f64::from(*value)),
        OwnValue::Double(value) => float(*value),
        OwnValue::String(value) => Value::String(value.clone()),
        OwnValue::ByteArray(values) => values.iter().copied().map(Value::from).collect(),
        OwnValue::IntArray(values) => values.iter().copied().map(Value::from).collect(),
        OwnValue::LongArray(values) => values.iter().copied().map(Value::from).collect(),
        OwnValue::List(list) => list.iter().map(tag_to_json).collect(),
        OwnValue::Compound(compound) => compound_to_json(compound),
    }
}

/// [`tag_to_json`], serialized.
pub fn tag_to_json_string(tag: &OwnValue) -> String {
    tag_to_json(tag).to_string()
}

fn float(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

fn compound_to_json(compound: &OwnCompound) -> Value {
    // Mixed-type lists store plain entries wrapped as {"": entry}.
    if compound.len() == 1 {
        if let Some(inner) = compound.get("") {
            return tag_to_json(inner);
        }
    }
    let mut object = Map::with_capacity(compound.len());
    for (key, value) in compound {
        let value = match value {
            OwnValue::Byte(flag) if BOOLEAN_KEYS.contains(&key.as_str()) => Value::Bool(*flag != 0),
            other => tag_to_json(other),
        };
        object.insert(key.clone(), value);
    }
    Value::Object(object)
}
