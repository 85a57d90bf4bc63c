// License: MIT

use crate::ast::Value;
use crate::QuillError;

/// The numeric-string test: every character must be a digit, `.`, or `,`,
/// except that the final character may additionally be a single-letter type
/// suffix (`b/s/i/l/f/d`, case-insensitive).
pub(super) fn is_numeric_literal(text: &str) -> bool {
    let last = text.chars().count().checked_sub(1);

    for (i, c) in text.chars().enumerate() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            continue;
        }
        if Some(i) == last && suffix_kind(c).is_some() {
            continue;
        }
        return false;
    }

    true
}

/// Decode a text that already passed the numeric-string test.
///
/// With a type suffix the digits parse as the indicated fixed-width kind and
/// any overflow propagates as a malformed-value failure. Without one, a `.`
/// or `,` routes to 64-bit float; otherwise the digit-count decides the
/// integer width. That is a textual length heuristic, not a magnitude check:
/// ten characters always take the 32-bit path, eleven always take the 64-bit
/// path, leading zeros included.
pub(super) fn decode_number(text: &str) -> Result<Value, QuillError> {
    if let Some(last) = text.chars().last() {
        if let Some(kind) = suffix_kind(last) {
            let digits = &text[..text.len() - last.len_utf8()];
            return decode_suffixed(digits, kind, text);
        }
    }

    if text.contains('.') || text.contains(',') {
        return text
            .parse::<f64>()
            .map(Value::F64)
            .map_err(|_| QuillError::malformed(text));
    }

    if text.chars().count() > 10 {
        text.parse::<i64>()
            .map(Value::I64)
            .map_err(|_| QuillError::malformed(text))
    } else {
        text.parse::<i32>()
            .map(Value::I32)
            .map_err(|_| QuillError::malformed(text))
    }
}

#[derive(Clone, Copy)]
enum SuffixKind {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

fn suffix_kind(c: char) -> Option<SuffixKind> {
    match c {
        'b' | 'B' => Some(SuffixKind::Byte),
        's' | 'S' => Some(SuffixKind::Short),
        'i' | 'I' => Some(SuffixKind::Int),
        'l' | 'L' => Some(SuffixKind::Long),
        'f' | 'F' => Some(SuffixKind::Float),
        'd' | 'D' => Some(SuffixKind::Double),
        _ => None,
    }
}

fn decode_suffixed(digits: &str, kind: SuffixKind, original: &str) -> Result<Value, QuillError> {
    let value = match kind {
        SuffixKind::Byte => digits.parse::<i8>().map(Value::I8).ok(),
        SuffixKind::Short => digits.parse::<i16>().map(Value::I16).ok(),
        SuffixKind::Int => digits.parse::<i32>().map(Value::I32).ok(),
        SuffixKind::Long => digits.parse::<i64>().map(Value::I64).ok(),
        SuffixKind::Float => digits.parse::<f32>().map(Value::F32).ok(),
        SuffixKind::Double => digits.parse::<f64>().map(Value::F64).ok(),
    };

    value.ok_or_else(|| QuillError::MalformedValue {
        text: original.to_string(),
        hint: Some("Digits do not fit the width named by the type suffix".into()),
        code: Some(103),
    })
}
