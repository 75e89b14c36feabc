//! Read access to the loosely-typed options bag
//!
//! An option counts as present only when its value is truthy: `null` and
//! `false` read the same as an absent key. There is no way to explicitly
//! clear a field whose native default is on.

use crate::coerce::{shape_name, value_to_string, ToStringArray};
use crate::error::{Error, Result};
use esnative_model::TimeValue;
use serde_json::{Map, Value};

/// `null` and `false` are falsy, every other value is truthy
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Options<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Options<'a> {
    pub fn new(map: Option<&'a Map<String, Value>>) -> Self {
        Self { map }
    }

    /// Whether the caller passed an options map at all
    pub fn is_supplied(&self) -> bool {
        self.map.is_some()
    }

    /// The value under `key`, if truthy
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map?.get(key).filter(|v| is_truthy(v))
    }

    /// The first truthy value among `keys`, checked in order
    pub fn first_of(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter().find_map(|key| self.get(key))
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).map(value_to_string)
    }

    pub fn long(&self, key: &str) -> Result<Option<i64>> {
        self.get(key)
            .map(|value| match value {
                Value::Number(n) => n
                    .as_i64()
                    .ok_or_else(|| Error::invalid(key, format!("{} is not an integer", n))),
                Value::String(s) => s
                    .trim()
                    .parse()
                    .map_err(|_| Error::invalid(key, format!("{:?} is not an integer", s))),
                other => Err(mismatch(key, "an integer", other)),
            })
            .transpose()
    }

    pub fn int(&self, key: &str) -> Result<Option<i32>> {
        self.long(key)?
            .map(|n| {
                i32::try_from(n).map_err(|_| Error::invalid(key, format!("{} is out of range", n)))
            })
            .transpose()
    }

    /// Narrowed to `f32`, the width the native API uses for scores.
    /// Precision beyond `f32` is lost.
    pub fn float(&self, key: &str) -> Result<Option<f32>> {
        self.get(key)
            .map(|value| match value {
                Value::Number(n) => n
                    .as_f64()
                    .map(|f| f as f32)
                    .ok_or_else(|| Error::invalid(key, format!("{} is not a number", n))),
                Value::String(s) => s
                    .trim()
                    .parse()
                    .map_err(|_| Error::invalid(key, format!("{:?} is not a number", s))),
                other => Err(mismatch(key, "a number", other)),
            })
            .transpose()
    }

    /// A single name or collection of names
    pub fn strings(&self, key: &str) -> Result<Option<Vec<String>>> {
        self.get(key).map(ToStringArray::to_string_array).transpose()
    }

    pub fn map(&self, key: &str) -> Result<Option<&'a Map<String, Value>>> {
        self.get(key)
            .map(|value| match value {
                Value::Object(map) => Ok(map),
                other => Err(mismatch(key, "a map", other)),
            })
            .transpose()
    }

    /// A duration string (`"1m"`) or a number of milliseconds
    pub fn time_value(&self, key: &str) -> Result<Option<TimeValue>> {
        self.get(key)
            .map(|value| match value {
                Value::String(s) => Ok(s.parse::<TimeValue>()?),
                Value::Number(n) => n
                    .as_u64()
                    .map(TimeValue::from_millis)
                    .ok_or_else(|| Error::invalid(key, format!("{} is not a duration", n))),
                other => Err(mismatch(key, "a duration", other)),
            })
            .transpose()
    }
}

fn mismatch(key: &str, expected: &str, got: &Value) -> Error {
    Error::invalid(key, format!("expected {}, got {}", expected, shape_name(got)))
}
