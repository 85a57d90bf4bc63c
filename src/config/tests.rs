// License: MIT

#[cfg(test)]
use super::*;

use std::io::Write;

use indexmap::IndexMap;

#[test]
fn test_config_from_string() {
    // Line breaks in this format are CRLF pairs; a bare LF is not special.
    let content = "# service settings\r\n\
        app_name = \"TestApp\",\r\n\
        debug = true,\r\n\
        server = {host=\"localhost\",port=8080},\r\n\
        features = [\"auth\",\"logging\"]";

    let config = QuillConfig::from_str(content).expect("Failed to parse config");

    let app_name: String = config.get("app_name").expect("Failed to get app_name");
    assert_eq!(app_name, "TestApp");

    let debug: bool = config.get("debug").expect("Failed to get debug");
    assert_eq!(debug, true);

    let host: String = config.get("server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = config.get("server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let features: Vec<String> = config.get("features").expect("Failed to get features");
    assert_eq!(features, vec!["auth", "logging"]);

    assert!(config.has("server.host"));
    assert!(!config.has("server.nonexistent"));
}

#[test]
fn test_dotted_declaration_name_fast_path() {
    // Names are whatever precedes the '=' so a dot is legal inside one.
    let config = QuillConfig::from_str(r#"app.title = "Quill""#).unwrap();
    let title: String = config.get("app.title").unwrap();
    assert_eq!(title, "Quill");
}

#[test]
fn test_get_keys_order() {
    let config = QuillConfig::from_str("first = 1, second = 2, third = 3").unwrap();
    assert_eq!(config.get_keys("").unwrap(), vec!["first", "second", "third"]);

    let config = QuillConfig::from_str("kv = {alpha=1,beta=2,gamma=3}").unwrap();
    assert_eq!(config.get_keys("kv").unwrap(), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_get_keys_on_scalar_is_type_error() {
    let config = QuillConfig::from_str("n = 1").unwrap();
    assert!(matches!(
        config.get_keys("n"),
        Err(QuillError::TypeError { .. })
    ));
}

#[test]
fn test_get_or_and_get_optional() {
    let config = QuillConfig::from_str("timeout = 30").unwrap();

    let timeout: u64 = config.get_or("timeout", 5u64);
    assert_eq!(timeout, 30);

    let missing: u64 = config.get_or("nope", 5u64);
    assert_eq!(missing, 5);

    let opt: Option<u64> = config.get_optional("nope").unwrap();
    assert_eq!(opt, None);

    let opt: Option<u64> = config.get_optional("timeout").unwrap();
    assert_eq!(opt, Some(30));
}

#[test]
fn test_get_optional_propagates_type_errors() {
    let config = QuillConfig::from_str(r#"name = "text""#).unwrap();
    let result: Result<Option<u64>, _> = config.get_optional("name");
    assert!(matches!(result, Err(QuillError::TypeError { .. })));
}

#[test]
fn test_missing_path_is_key_not_found() {
    let config = QuillConfig::from_str("a = 1").unwrap();
    assert!(matches!(
        config.get_value("b"),
        Err(QuillError::KeyNotFound { .. })
    ));
    assert!(matches!(
        config.get_value("a.b"),
        Err(QuillError::TypeError { .. })
    ));
}

#[test]
fn test_numeric_conversions_with_range_checks() {
    let config = QuillConfig::from_str("small = 5b, wide = 10L, ratio = 2.5").unwrap();

    // Widening an i8 declaration into larger targets works.
    let n: i64 = config.get("small").unwrap();
    assert_eq!(n, 5);
    let n: u8 = config.get("small").unwrap();
    assert_eq!(n, 5);

    // Narrowing is range-checked, not truncated.
    let config2 = QuillConfig::from_str("big = 70000").unwrap();
    let result: Result<u16, _> = config2.get("big");
    assert!(matches!(result, Err(QuillError::TypeError { .. })));

    let n: u64 = config.get("wide").unwrap();
    assert_eq!(n, 10);

    let ratio: f64 = config.get("ratio").unwrap();
    assert_eq!(ratio, 2.5);
}

#[test]
fn test_map_conversions() {
    let config = QuillConfig::from_str(r#"env = {TERM="xterm",SHELL="sh"}"#).unwrap();

    let raw: IndexMap<String, Value> = config.get("env").unwrap();
    assert_eq!(raw.len(), 2);

    let strings: IndexMap<String, String> = config.get("env").unwrap();
    assert_eq!(strings["TERM"], "xterm");
    assert_eq!(strings["SHELL"], "sh");
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "name = \"FromFile\",\r\nport = 9090").expect("Failed to write temp file");

    let config = QuillConfig::from_file(file.path()).expect("Failed to load config");
    let name: String = config.get("name").unwrap();
    assert_eq!(name, "FromFile");
    let port: u16 = config.get("port").unwrap();
    assert_eq!(port, 9090);
}

#[test]
fn test_config_from_missing_file() {
    let result = QuillConfig::from_file("/definitely/not/here.quill");
    assert!(matches!(result, Err(QuillError::FileError { .. })));
}

#[test]
fn test_config_from_file_with_fallback() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "a = 1").expect("Failed to write temp file");

    let config =
        QuillConfig::from_file_with_fallback(std::path::Path::new("/missing.quill"), file.path())
            .expect("Fallback should load");
    assert_eq!(config.get_or("a", 0i32), 1);

    let result = QuillConfig::from_file_with_fallback("/missing.quill", "/also/missing.quill");
    assert!(matches!(result, Err(QuillError::FileError { .. })));
}

#[test]
fn test_document_access() {
    let config = QuillConfig::from_str("a = 1, b = 2").unwrap();
    let doc = config.document();

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("a"), Some(&Value::I32(1)));
    assert!(!doc.is_empty());
}
