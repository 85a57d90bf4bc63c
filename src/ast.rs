use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::QuillError;

/// A decoded QUILL value. Produced once by the decoder, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Array(Vec<Value>),
    Map(IndexMap<String, Value>), // insertion order preserved
}

/// The declaration table: top-level `name = value` units in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub declarations: IndexMap<String, Value>,
}

impl Document {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.declarations.get(name)
    }

    pub fn keys(&self) -> Vec<String> {
        self.declarations.keys().cloned().collect()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Value {
    /// Human-readable name of the stored variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::I8(_) => "byte",
            Value::I16(_) => "short",
            Value::I32(_) => "int",
            Value::I64(_) => "long",
            Value::F32(_) => "float",
            Value::F64(_) => "double",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    fn mismatch(&self, expected: &str) -> QuillError {
        QuillError::TypeError {
            message: format!("Expected {}, got {}", expected, self.kind()),
            hint: None,
            code: Some(401),
        }
    }

    pub fn as_bool(&self) -> Result<bool, QuillError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }

    pub fn as_char(&self) -> Result<char, QuillError> {
        match self {
            Value::Char(c) => Ok(*c),
            other => Err(other.mismatch("char")),
        }
    }

    pub fn as_i8(&self) -> Result<i8, QuillError> {
        match self {
            Value::I8(n) => Ok(*n),
            other => Err(other.mismatch("byte")),
        }
    }

    pub fn as_i16(&self) -> Result<i16, QuillError> {
        match self {
            Value::I16(n) => Ok(*n),
            other => Err(other.mismatch("short")),
        }
    }

    pub fn as_i32(&self) -> Result<i32, QuillError> {
        match self {
            Value::I32(n) => Ok(*n),
            other => Err(other.mismatch("int")),
        }
    }

    pub fn as_i64(&self) -> Result<i64, QuillError> {
        match self {
            Value::I64(n) => Ok(*n),
            other => Err(other.mismatch("long")),
        }
    }

    pub fn as_f32(&self) -> Result<f32, QuillError> {
        match self {
            Value::F32(n) => Ok(*n),
            other => Err(other.mismatch("float")),
        }
    }

    pub fn as_f64(&self) -> Result<f64, QuillError> {
        match self {
            Value::F64(n) => Ok(*n),
            other => Err(other.mismatch("double")),
        }
    }

    pub fn as_str(&self) -> Result<&str, QuillError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], QuillError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_map(&self) -> Result<&IndexMap<String, Value>, QuillError> {
        match self {
            Value::Map(entries) => Ok(entries),
            other => Err(other.mismatch("map")),
        }
    }
}

/// Canonical textual rendering. Re-decoding the rendered text reproduces an
/// equal `Value`: fixed-width kinds keep their type suffix, ints stay plain
/// (their digit count never exceeds the 32-bit routing threshold).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "'{}'", c),
            Value::I8(n) => write!(f, "{}b", n),
            Value::I16(n) => write!(f, "{}s", n),
            Value::I32(n) => write!(f, "{}", n),
            Value::I64(n) => write!(f, "{}l", n),
            Value::F32(n) => write!(f, "{}f", n),
            Value::F64(n) => write!(f, "{}d", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Char(c) => serializer.serialize_char(*c),
            Value::I8(n) => serializer.serialize_i8(*n),
            Value::I16(n) => serializer.serialize_i16(*n),
            Value::I32(n) => serializer.serialize_i32(*n),
            Value::I64(n) => serializer.serialize_i64(*n),
            Value::F32(n) => serializer.serialize_f32(*n),
            Value::F64(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (name, value) in &self.declarations {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
