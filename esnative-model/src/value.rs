//! Nested values as the native client hands them out
//!
//! Document sources, stored fields and other caller-defined payloads come
//! back from the transport as trees of native maps, lists and scalars.

use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Null,
    Bool(bool),
    Long(i64),
    Double(f64),
    Text(String),
    List(Vec<NativeValue>),
    Map(HashMap<String, NativeValue>),
}

impl NativeValue {
    pub fn as_map(&self) -> Option<&HashMap<String, NativeValue>> {
        match self {
            NativeValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Value> for NativeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => NativeValue::Null,
            Value::Bool(b) => NativeValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => NativeValue::Long(i),
                None => NativeValue::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => NativeValue::Text(s),
            Value::Array(items) => {
                NativeValue::List(items.into_iter().map(NativeValue::from).collect())
            }
            Value::Object(obj) => NativeValue::Map(
                obj.into_iter()
                    .map(|(k, v)| (k, NativeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        NativeValue::Text(s.to_string())
    }
}

impl From<String> for NativeValue {
    fn from(s: String) -> Self {
        NativeValue::Text(s)
    }
}

impl From<i64> for NativeValue {
    fn from(i: i64) -> Self {
        NativeValue::Long(i)
    }
}

impl From<f64> for NativeValue {
    fn from(f: f64) -> Self {
        NativeValue::Double(f)
    }
}

impl From<bool> for NativeValue {
    fn from(b: bool) -> Self {
        NativeValue::Bool(b)
    }
}
