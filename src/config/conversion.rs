// License: MIT

use indexmap::IndexMap;

use crate::{QuillError, Value};

/// Widen any decoded integer kind to i64 for range-checked conversions.
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::I8(n) => Some(*n as i64),
        Value::I16(n) => Some(*n as i64),
        Value::I32(n) => Some(*n as i64),
        Value::I64(n) => Some(*n),
        _ => None,
    }
}

fn expected(what: &str, value: &Value) -> QuillError {
    QuillError::TypeError {
        message: format!("Expected {}, got {}", what, value.kind()),
        hint: Some(format!("Use a {} value in your config", what)),
        code: Some(402),
    }
}

fn out_of_range(n: i64, target: &str) -> QuillError {
    QuillError::TypeError {
        message: format!("Number {} out of range for {}", n, target),
        hint: Some(format!("Use a number that fits {}", target)),
        code: Some(403),
    }
}

impl TryFrom<Value> for String {
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(expected("string", &other)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(expected("boolean", &other)),
        }
    }
}

impl TryFrom<Value> for char {
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Char(c) => Ok(c),
            other => Err(expected("char", &other)),
        }
    }
}

macro_rules! integer_conversion {
    ($target:ty, $name:literal) => {
        impl TryFrom<Value> for $target {
            type Error = QuillError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                let n = integer_value(&value).ok_or_else(|| expected("number", &value))?;
                <$target>::try_from(n).map_err(|_| out_of_range(n, $name))
            }
        }
    };
}

integer_conversion!(i8, "i8");
integer_conversion!(i16, "i16");
integer_conversion!(i32, "i32");
integer_conversion!(i64, "i64");
integer_conversion!(u8, "u8");
integer_conversion!(u16, "u16");
integer_conversion!(u32, "u32");
integer_conversion!(u64, "u64");
integer_conversion!(usize, "usize");

impl TryFrom<Value> for f64 {
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F64(n) => Ok(n),
            Value::F32(n) => Ok(n as f64),
            ref other => match integer_value(other) {
                Some(n) => Ok(n as f64),
                None => Err(expected("number", other)),
            },
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F32(n) => Ok(n),
            Value::F64(n) => Ok(n as f32),
            ref other => match integer_value(other) {
                Some(n) => Ok(n as f32),
                None => Err(expected("number", other)),
            },
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = QuillError>,
{
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(arr) => {
                let mut result = Vec::new();
                for item in arr {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            other => Err(QuillError::TypeError {
                message: format!("Expected array, got {}", other.kind()),
                hint: Some("Use an array [...] in your config".into()),
                code: Some(405),
            }),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(entries) => Ok(entries),
            other => Err(QuillError::TypeError {
                message: format!("Expected map, got {}", other.kind()),
                hint: Some("Use a map {...} in your config".into()),
                code: Some(410),
            }),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, String> {
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(entries) => {
                let mut map = IndexMap::new();
                for (key, val) in entries {
                    map.insert(key, String::try_from(val)?);
                }
                Ok(map)
            }
            other => Err(QuillError::TypeError {
                message: format!("Expected map, got {}", other.kind()),
                hint: Some("Use a map {...} with string values".into()),
                code: Some(410),
            }),
        }
    }
}
