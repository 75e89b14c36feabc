//! Scalar coercion helpers
//!
//! Index and type names arrive either as a single name or as a collection
//! of names. Native builders always want a `Vec<String>`.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// String form of a generic value, as handed to native string fields
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// A single name or a collection of names
pub trait ToStringArray {
    fn to_string_array(&self) -> Result<Vec<String>>;
}

impl ToStringArray for str {
    fn to_string_array(&self) -> Result<Vec<String>> {
        Ok(vec![self.to_string()])
    }
}

impl ToStringArray for String {
    fn to_string_array(&self) -> Result<Vec<String>> {
        self.as_str().to_string_array()
    }
}

impl<T: AsRef<str>> ToStringArray for [T] {
    fn to_string_array(&self) -> Result<Vec<String>> {
        Ok(self.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl<T: AsRef<str>, const N: usize> ToStringArray for [T; N] {
    fn to_string_array(&self) -> Result<Vec<String>> {
        self.as_slice().to_string_array()
    }
}

impl<T: AsRef<str>> ToStringArray for Vec<T> {
    fn to_string_array(&self) -> Result<Vec<String>> {
        self.as_slice().to_string_array()
    }
}

impl ToStringArray for Value {
    fn to_string_array(&self) -> Result<Vec<String>> {
        match self {
            Value::Null => Err(Error::MissingArgument(
                "expected a name or a collection of names, got null".to_string(),
            )),
            Value::Array(items) => Ok(items.iter().map(value_to_string).collect()),
            Value::Object(_) => Err(Error::invalid(
                "names",
                "expected a name or a collection of names, got a map",
            )),
            scalar => Ok(vec![value_to_string(scalar)]),
        }
    }
}

impl<T: ToStringArray + ?Sized> ToStringArray for &T {
    fn to_string_array(&self) -> Result<Vec<String>> {
        (**self).to_string_array()
    }
}

/// Serializes a document body into the string-keyed map native builders take
pub fn to_source_map<T: Serialize + ?Sized>(name: &str, document: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(document)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::invalid(
            name,
            format!("expected a map, got {}", shape_name(&other)),
        )),
    }
}

pub(crate) fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}
