use super::*;

impl QuillConfig {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use quill_cfg::QuillConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = QuillConfig::from_file("config.quill")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// let debug: bool = config.get("debug")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, QuillError>
    where
        T: TryFrom<Value, Error = QuillError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value)
    }

    /// Get an optional typed value - returns `None` if the key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, QuillError>
    where
        T: TryFrom<Value, Error = QuillError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(QuillError::KeyNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use quill_cfg::QuillConfig;
    /// # let config = QuillConfig::from_file("config.quill").unwrap();
    /// let timeout = config.get_or("server.timeout", 30u64);
    /// let debug = config.get_or("debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = QuillError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` from the configuration.
    pub fn get_value(&self, path: &str) -> Result<Value, QuillError> {
        self.lookup(path).cloned()
    }

    /// Get all keys at a given path level. An empty path lists the top-level
    /// declaration names.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, QuillError> {
        if path.trim().is_empty() {
            return Ok(self.document.keys());
        }
        match self.lookup(path)? {
            Value::Map(entries) => Ok(entries.keys().cloned().collect()),
            other => Err(QuillError::TypeError {
                message: format!("Path '{}' is not a map, got {}", path, other.kind()),
                hint: Some("Only maps have keys".into()),
                code: Some(306),
            }),
        }
    }

    /// Check if a configuration path exists.
    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    fn lookup(&self, path: &str) -> Result<&Value, QuillError> {
        // Fast path: declaration names are not validated against any
        // identifier grammar, so a name may itself contain dots.
        if let Some(value) = self.document.get(path) {
            return Ok(value);
        }

        let mut segments = path.split('.');
        let first = segments
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| not_found(path))?;
        let mut current = self.document.get(first).ok_or_else(|| not_found(path))?;

        for segment in segments {
            match current {
                Value::Map(entries) => {
                    current = entries.get(segment).ok_or_else(|| not_found(path))?;
                }
                other => {
                    return Err(QuillError::TypeError {
                        message: format!(
                            "Path '{}' walks through a {}, not a map",
                            path,
                            other.kind()
                        ),
                        hint: Some("Only map values have nested keys".into()),
                        code: Some(305),
                    });
                }
            }
        }

        Ok(current)
    }
}

fn not_found(path: &str) -> QuillError {
    QuillError::KeyNotFound {
        path: path.to_string(),
        hint: Some("Check that the path exists in your config file".into()),
        code: Some(304),
    }
}
