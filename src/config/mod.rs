// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::{Document, Value};
use crate::scanner::Scanner;
use crate::QuillError;

mod access;
mod conversion;

/// Main configuration struct holding one parsed QUILL document.
pub struct QuillConfig {
    document: Document,
}

impl QuillConfig {
    /// Load a QUILL config file.
    ///
    /// The whole file is read up front; the scanner operates on the fully
    /// materialized text, never on a stream.
    ///
    /// # Example
    /// ```ignore
    /// let config = QuillConfig::from_file("config.quill")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, QuillError> {
        let path = expand_home(path.as_ref());

        let content = fs::read_to_string(&path).map_err(|e| QuillError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        Self::from_str(&content)
    }

    /// Load a QUILL config file with fallback support.
    ///
    /// Tries to load from the primary path first. If that fails (file not
    /// found), attempts to load from the fallback path.
    pub fn from_file_with_fallback<P: AsRef<Path>>(
        primary: P,
        fallback: P,
    ) -> Result<Self, QuillError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(QuillError::FileError { .. }) => {
                // Primary file not found, try fallback
                Self::from_file(&fallback).map_err(|e| match e {
                    QuillError::FileError { message, .. } => QuillError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other), // Pass through non-file errors
        }
    }

    /// Parse a QUILL config from a string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, QuillError> {
        let document = Scanner::new(content).parse()?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Expand "~/" against the home directory.
fn expand_home(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|p| p.strip_prefix("~/")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests;
