// License: MIT

use indexmap::IndexMap;

use crate::ast::Value;
use crate::QuillError;

use super::number;
use super::unterminated;

/// Decode one delimiter-stripped value substring into exactly one `Value`,
/// dispatching on its leading sigil. Array and map literals recurse back in
/// through here for their elements.
pub(super) fn decode_value(text: &str) -> Result<Value, QuillError> {
    if text.starts_with('[') && text.ends_with(']') {
        return decode_array(&text[1..text.len() - 1]);
    }

    if text.starts_with('{') && text.ends_with('}') {
        return decode_map(&text[1..text.len() - 1]);
    }

    if text.starts_with('"') {
        return Ok(Value::String(strip_quotes(text)));
    }

    // Strictly 'c': the character at index 1 is the value.
    if text.starts_with('\'') {
        let c = text.chars().nth(1).ok_or_else(|| QuillError::MalformedValue {
            text: text.to_string(),
            hint: Some("Character literals use the form 'c'".into()),
            code: Some(102),
        })?;
        return Ok(Value::Char(c));
    }

    match text {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if number::is_numeric_literal(text) {
        return number::decode_number(text);
    }

    Err(QuillError::malformed(text))
}

/// Walk an array literal's interior, splitting elements on commas that sit
/// outside strings and outside nested brackets, and decoding each element
/// recursively. The final element is flushed at end-of-text, uniform with the
/// scanner's end-of-input rule.
fn decode_array(interior: &str) -> Result<Value, QuillError> {
    let mut items = Vec::new();
    let mut element = String::new();
    let mut inside_string = false;
    let mut depth: u32 = 0;

    for c in interior.chars() {
        if c == ' ' && !inside_string {
            continue;
        }

        if c == ',' && !inside_string && depth == 0 {
            items.push(decode_value(&element)?);
            element.clear();
            continue;
        }

        match c {
            '"' => inside_string = !inside_string,
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }

        element.push(c);
    }

    if inside_string {
        return Err(unterminated('"'));
    }
    if depth > 0 {
        return Err(unterminated('['));
    }

    if !element.is_empty() {
        items.push(decode_value(&element)?);
    }

    Ok(Value::Array(items))
}

/// Walk a map literal's interior, mirroring the scanner's name/value split
/// without the comment or line-break handling. Keys keep their raw
/// accumulated text; values are decoded recursively. Brace nesting is not
/// tracked here: a nested map is recognized only once it becomes a complete
/// element value at the enclosing dispatch.
fn decode_map(interior: &str) -> Result<Value, QuillError> {
    let mut entries = IndexMap::new();
    let mut key = String::new();
    let mut value = String::new();
    let mut inside_string = false;
    let mut depth: u32 = 0;
    let mut value_parse = false;

    for c in interior.chars() {
        if c == ' ' && !inside_string {
            continue;
        }

        if c == '=' && !inside_string && depth == 0 {
            value_parse = true;
            continue;
        }

        if c == ',' && !inside_string && depth == 0 {
            entries.insert(std::mem::take(&mut key), decode_value(&value)?);
            value.clear();
            value_parse = false;
            continue;
        }

        match c {
            '"' => inside_string = !inside_string,
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }

        if value_parse {
            value.push(c);
        } else {
            key.push(c);
        }
    }

    if inside_string {
        return Err(unterminated('"'));
    }
    if depth > 0 {
        return Err(unterminated('['));
    }

    if !key.is_empty() || !value.is_empty() {
        entries.insert(key, decode_value(&value)?);
    }

    Ok(Value::Map(entries))
}

/// Strip the surrounding quotes off a string literal. No escape processing:
/// the content passes through exactly as written.
fn strip_quotes(text: &str) -> String {
    let inner = &text[1..];
    inner.strip_suffix('"').unwrap_or(inner).to_string()
}
