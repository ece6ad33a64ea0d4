//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("Missing required `title` field in `{0}`")]
    MissingTitle(PathBuf),

    #[error("Include depth limit exceeded while loading `{0}`")]
    IncludeDepth(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.json"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.json"));

        let title_err = ConfigError::MissingTitle(PathBuf::from("site.json"));
        let display = format!("{title_err}");
        assert!(display.contains("title"));
    }
}
