//! Site configuration loaded from `site.json`.
//!
//! # Example
//!
//! ```json
//! {
//!     "title": "My Site",
//!     "header": "My Site, But Fancier",
//!     "favicon": "🐱",
//!     "navbar": "[Home](/)",
//!     "footer": "Built with cat"
//! }
//! ```
//!
//! Only `title` is required; every other field has a default. Values may
//! reference other JSON files through the loader's include mechanism, see
//! [`IncludeLoader`].

pub mod defaults;
mod error;
mod loader;

pub use error::ConfigError;
pub use loader::{IncludeLoader, JsonLoader};

use educe::Educe;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file name expected at the site source root.
pub const CONFIG_FILE: &str = "site.json";

/// Site-wide metadata, loaded once per build and immutable afterwards.
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
pub struct Site {
    /// Site title, shown in the browser tab and as the default header.
    #[serde(default)]
    pub title: String,

    /// Header text, falls back to `title` when absent.
    #[serde(default)]
    pub header: Option<String>,

    /// Favicon glyph, rendered into an inline SVG data URI.
    #[serde(default = "defaults::favicon")]
    #[educe(Default = defaults::favicon())]
    pub favicon: String,

    /// Navbar content (Markdown source).
    #[serde(default)]
    pub navbar: String,

    /// Footer content (Markdown source).
    #[serde(default)]
    pub footer: String,

    /// Path the configuration was loaded from (set after load).
    #[serde(skip)]
    pub source_path: PathBuf,
}

impl Site {
    /// Load `site.json` from the site source directory through the given loader.
    pub fn load(site_dir: &Path, loader: &dyn JsonLoader) -> Result<Self, ConfigError> {
        let path = site_dir.join(CONFIG_FILE);
        let value = loader.load(&path)?;

        let mut site: Site = serde_json::from_value(value)?;
        if site.title.trim().is_empty() {
            return Err(ConfigError::MissingTitle(path));
        }

        site.source_path = path;
        Ok(site)
    }

    /// Load with the default include-aware loader.
    pub fn load_default(site_dir: &Path) -> Result<Self, ConfigError> {
        Self::load(site_dir, &IncludeLoader)
    }

    /// Header text shown at the top of every page.
    pub fn header_text(&self) -> &str {
        self.header
            .as_deref()
            .filter(|header| !header.is_empty())
            .unwrap_or(&self.title)
    }
}
