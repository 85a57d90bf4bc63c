// License: MIT

use std::fs;
use std::path::Path;

use crate::ast::Document;
use crate::scanner::Scanner;
use crate::QuillError;

/// Render a document back to canonical QUILL text.
///
/// Declarations come out one per line, comma-separated, in insertion order.
/// Re-parsing the rendered text reproduces an equal document: fixed-width
/// numeric kinds keep their type suffixes and plain ints stay on the 32-bit
/// decode path.
pub fn export_document_to_text(doc: &Document) -> String {
    doc.iter()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect::<Vec<_>>()
        .join(",\r\n")
}

/// Export a QUILL document to pretty-printed JSON.
///
/// Scalars map directly; arrays and maps become nested JSON structures in
/// declaration order. The six numeric widths collapse to JSON numbers.
pub fn export_document_to_json(doc: &Document) -> Result<String, QuillError> {
    serde_json::to_string_pretty(doc).map_err(|e| QuillError::TypeError {
        message: format!("Failed to serialize document to JSON: {}", e),
        hint: None,
        code: Some(500),
    })
}

/// Export a QUILL file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Errors
/// Returns error if the file doesn't exist or contains invalid QUILL syntax.
pub fn export_quill_file<P: AsRef<Path>>(path: P) -> Result<String, QuillError> {
    let input = fs::read_to_string(&path).map_err(|e| {
        QuillError::file_error(
            format!("Failed to read file: {}", e),
            path.as_ref().to_string_lossy().to_string(),
        )
    })?;

    let doc = Scanner::new(&input).parse()?;
    export_document_to_json(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Value;

    #[test]
    fn test_text_round_trip_is_idempotent() {
        let input = "name = \"Quill\", initial = 'q', on = true, tiny = 5b, short = 7s, \
                     n = 42, wide = 10L, ratio = 2.5f, precise = 3.0d, \
                     nums = [1,2,3], nested = [[1,2],[3,4]], kv = {a=1,b=\"two\"}";
        let doc = Scanner::new(input).parse().expect("Failed to parse input");

        let rendered = export_document_to_text(&doc);
        let reparsed = Scanner::new(&rendered)
            .parse()
            .expect("Failed to re-parse rendered text");

        assert_eq!(doc, reparsed);
    }

    #[test]
    fn test_canonical_scalar_rendering() {
        assert_eq!(Value::I8(5).to_string(), "5b");
        assert_eq!(Value::I16(7).to_string(), "7s");
        assert_eq!(Value::I32(42).to_string(), "42");
        assert_eq!(Value::I64(10).to_string(), "10l");
        assert_eq!(Value::F32(2.5).to_string(), "2.5f");
        assert_eq!(Value::F64(3.0).to_string(), "3d");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Char('q').to_string(), "'q'");
        assert_eq!(Value::String("hi".into()).to_string(), "\"hi\"");
        assert_eq!(
            Value::Array(vec![Value::I32(1), Value::I32(2)]).to_string(),
            "[1,2]"
        );
    }

    #[test]
    fn test_export_to_json() {
        let input = "port = 8080, hosts = [\"a\",\"b\"], flags = {debug=true}";
        let doc = Scanner::new(input).parse().expect("Failed to parse input");

        let json_output = export_document_to_json(&doc).expect("Failed to export to JSON");
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["port"], 8080);
        assert_eq!(v["hosts"][1], "b");
        assert_eq!(v["flags"]["debug"], true);
    }

    #[test]
    fn test_export_missing_file() {
        let result = export_quill_file("/definitely/not/here.quill");
        assert!(matches!(result, Err(QuillError::FileError { .. })));
    }
}
