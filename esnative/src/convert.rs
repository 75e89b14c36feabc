//! Deep conversion of native nested values into generic JSON values
//!
//! Used for document sources and stored fields, whose shape is defined by
//! the caller. No schema is assumed: maps become objects keyed by the
//! canonical key form, lists become arrays, scalars pass through.

use esnative_model::NativeValue;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

pub fn to_value(native: &NativeValue) -> Value {
    match native {
        NativeValue::Null => Value::Null,
        NativeValue::Bool(b) => Value::Bool(*b),
        NativeValue::Long(n) => Value::Number((*n).into()),
        // NaN and infinities have no JSON form
        NativeValue::Double(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        NativeValue::Text(s) => Value::String(s.clone()),
        NativeValue::List(items) => Value::Array(items.iter().map(to_value).collect()),
        NativeValue::Map(map) => Value::Object(to_map(map)),
    }
}

pub fn to_map(map: &HashMap<String, NativeValue>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), to_value(value)))
        .collect()
}

/// Absent maps convert to `null`
pub fn optional_map_to_value(map: Option<&HashMap<String, NativeValue>>) -> Value {
    map.map_or(Value::Null, |m| Value::Object(to_map(m)))
}
