//! Site initialization.
//!
//! Scaffolds the site source directory with a starter config and home page.
//! Existing files are never overwritten: re-running `init` on a customized
//! site skips them with a warning.

use crate::{config::CONFIG_FILE, log};
use anyhow::{Context, Result};
use std::{fs, path::Path};

const STARTER_CONFIG: &str = r#"{
    "title": "Cat",
    "header": "<span style=\"white-space: nowrap;\">ᓚ₍ ^. .^₎</span>",
    "favicon": "🐱",
    "navbar": "[Home](/)",
    "footer": "Built with [ᓚ₍ ^. .^₎](https://github.com/cute-engineering/cat)"
}
"#;

const STARTER_INDEX: &str = "\
This is the home page of the site. You can edit this file to change the content of the home page.
";

/// Create the site source directory and write starter files.
pub fn init_site(site_dir: &Path) -> Result<()> {
    fs::create_dir_all(site_dir)
        .with_context(|| format!("Failed to create {}", site_dir.display()))?;

    write_starter(site_dir, CONFIG_FILE, STARTER_CONFIG)?;
    write_starter(site_dir, "index.md", STARTER_INDEX)?;

    log!("init"; "site initialized at {}", site_dir.display());
    Ok(())
}

/// Write a starter file unless it already exists.
fn write_starter(site_dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = site_dir.join(name);
    if path.exists() {
        log!("warn"; "{} already exists, skipping", path.display());
        return Ok(());
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Site;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_starter_files() {
        let dir = tempdir().unwrap();
        let site_dir = dir.path().join("site");

        init_site(&site_dir).unwrap();

        assert!(site_dir.join(CONFIG_FILE).is_file());
        assert!(site_dir.join("index.md").is_file());
    }

    #[test]
    fn test_starter_config_is_loadable() {
        let dir = tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let site = Site::load_default(dir.path()).unwrap();
        assert_eq!(site.title, "Cat");
        assert_eq!(site.favicon, "🐱");
        assert_eq!(site.navbar, "[Home](/)");
    }

    #[test]
    fn test_init_does_not_overwrite_existing_files() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        fs::write(&config_path, r#"{"title": "Customized"}"#).unwrap();

        init_site(dir.path()).unwrap();

        let kept = fs::read_to_string(&config_path).unwrap();
        assert!(kept.contains("Customized"));
        // The missing starter is still created
        assert!(dir.path().join("index.md").is_file());
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempdir().unwrap();
        init_site(dir.path()).unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join(CONFIG_FILE).is_file());
    }
}
