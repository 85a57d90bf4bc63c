use std::fmt;

/// The main error type for QUILL parsing and value access.
#[derive(Debug, Clone, PartialEq)]
pub enum QuillError {
    /// Raised when a value substring matches none of the recognized literal
    /// forms, or a numeric literal fails its fixed-width parse.
    MalformedValue {
        text: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a string, array, or map literal is still open at
    /// end-of-input.
    UnterminatedLiteral {
        delimiter: char,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a typed accessor or conversion meets a different variant.
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    KeyNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for QuillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuillError::MalformedValue { text, hint, code } =>
                write!(f, "[QUILL] Malformed value '{}'{}{}",
                    text,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            QuillError::UnterminatedLiteral { delimiter, hint, code } =>
                write!(f, "[QUILL] Unterminated literal opened with '{}'{}{}",
                    delimiter,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            QuillError::TypeError { message, hint, code } =>
                write!(f, "[QUILL] Type Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            QuillError::KeyNotFound { path, hint, code } =>
                write!(f, "[QUILL] Key '{}' not found{}{}",
                    path,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            QuillError::FileError { message, path, hint, code } =>
                write!(f, "[QUILL] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for QuillError {}

impl QuillError {
    /// Helper for decode failures on a specific value substring.
    ///
    /// Keeps a consistent error code and a friendly default hint.
    pub fn malformed(text: &str) -> Self {
        QuillError::MalformedValue {
            text: text.to_string(),
            hint: Some("Expected a string, char, bool, number, array, or map literal".into()),
            code: Some(101),
        }
    }

    /// Helper for file-related errors when loading configs.
    pub fn file_error(message: String, path: String) -> Self {
        QuillError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(300),
        }
    }
}
