//! Pluggable JSON document loading.
//!
//! The config loader reads `site.json` through a [`JsonLoader`] so that the
//! file inclusion mechanism stays behind an interface. The default
//! [`IncludeLoader`] inlines documents referenced by `{"$include": "path"}`
//! objects; tests (or future loaders) can substitute their own.

use super::error::ConfigError;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Key marking an object as a reference to another JSON file.
const INCLUDE_KEY: &str = "$include";

/// Maximum include nesting before the loader gives up.
///
/// Guards against include cycles without tracking visited paths.
const MAX_INCLUDE_DEPTH: usize = 16;

/// Loads a JSON document from a path.
pub trait JsonLoader {
    fn load(&self, path: &Path) -> Result<Value, ConfigError>;
}

/// Default loader with transitive file inclusion.
///
/// Any object of the exact shape `{"$include": "relative/path.json"}` is
/// replaced by the parsed content of that file, resolved relative to the
/// including file's directory. Inclusion applies recursively, both to
/// included files and to nested values.
pub struct IncludeLoader;

impl JsonLoader for IncludeLoader {
    fn load(&self, path: &Path) -> Result<Value, ConfigError> {
        self.load_at_depth(path, 0)
    }
}

impl IncludeLoader {
    fn load_at_depth(&self, path: &Path, depth: usize) -> Result<Value, ConfigError> {
        if depth > MAX_INCLUDE_DEPTH {
            return Err(ConfigError::IncludeDepth(path.to_path_buf()));
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let value: Value = serde_json::from_str(&content)?;

        let base = path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        self.expand(value, &base, depth)
    }

    /// Recursively replace include objects with the referenced documents.
    fn expand(&self, value: Value, base: &Path, depth: usize) -> Result<Value, ConfigError> {
        match value {
            Value::Object(map) => {
                if let Some(target) = include_target(&map) {
                    return self.load_at_depth(&base.join(target), depth + 1);
                }

                let expanded = map
                    .into_iter()
                    .map(|(key, val)| Ok((key, self.expand(val, base, depth)?)))
                    .collect::<Result<serde_json::Map<_, _>, ConfigError>>()?;
                Ok(Value::Object(expanded))
            }
            Value::Array(items) => {
                let expanded = items
                    .into_iter()
                    .map(|val| self.expand(val, base, depth))
                    .collect::<Result<Vec<_>, ConfigError>>()?;
                Ok(Value::Array(expanded))
            }
            other => Ok(other),
        }
    }
}

/// Return the include path if the object is exactly `{"$include": "..."}`.
fn include_target(map: &serde_json::Map<String, Value>) -> Option<&str> {
    if map.len() != 1 {
        return None;
    }
    map.get(INCLUDE_KEY).and_then(Value::as_str)
}
