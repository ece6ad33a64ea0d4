//! Site building orchestration.
//!
//! Walks the site source tree and mirrors it into the output directory:
//! `site.json` and the `style.css` override are skipped, `.md` files are
//! rendered to `.html` at the same relative path, everything else is
//! byte-copied. Every build starts from an empty output directory, so no
//! stale files survive between builds.

use crate::{
    config::{CONFIG_FILE, Site},
    log,
    render::render_page,
};
use anyhow::{Context, Result, bail};
use std::{fs, io, path::Path};
use walkdir::WalkDir;

/// Optional per-site style sheet, merged on top of the theme.
const STYLE_OVERRIDE: &str = "style.css";

/// Bundled theme style sheets (embedded at compile time).
const THEMES: &[(&str, &str)] = &[
    ("default", include_str!("embed/themes/default.css")),
    ("dark", include_str!("embed/themes/dark.css")),
];

/// What to do with a source tree entry, decided once per entry.
#[derive(Debug, PartialEq, Eq)]
enum EntryKind {
    /// `site.json` at the site root, consumed by the config loader.
    Config,
    /// `style.css` at the site root, merged into rendered pages.
    StyleOverride,
    /// A Markdown document, rendered to `.html`.
    Page,
    /// Anything else, copied byte-for-byte.
    Asset,
}

/// Classify a source entry by its path relative to the site root.
fn classify(rel_path: &Path) -> EntryKind {
    if rel_path == Path::new(CONFIG_FILE) {
        EntryKind::Config
    } else if rel_path == Path::new(STYLE_OVERRIDE) {
        EntryKind::StyleOverride
    } else if rel_path.extension().is_some_and(|ext| ext == "md") {
        EntryKind::Page
    } else {
        EntryKind::Asset
    }
}

/// Build the entire site into `output`.
///
/// The output directory is deleted and recreated first. Any I/O failure
/// aborts the build; partial output is left on disk.
pub fn build_site(site: &Site, site_dir: &Path, output: &Path, theme: &str) -> Result<()> {
    let style = resolve_style(site_dir, theme)?;

    reset_dir(output)?;

    for entry in WalkDir::new(site_dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", site_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel_path = path.strip_prefix(site_dir)?;

        match classify(rel_path) {
            EntryKind::Config | EntryKind::StyleOverride => {}
            EntryKind::Page => render_one(path, rel_path, site, &style, output)?,
            EntryKind::Asset => copy_one(path, rel_path, output)?,
        }
    }

    Ok(())
}

/// Remove the output directory. Succeeds when it does not exist.
pub fn clean_site(output: &Path) -> Result<()> {
    match fs::remove_dir_all(output) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("Failed to remove {}", output.display()))
        }
    }
}

/// Render a Markdown page to its `.html` counterpart in the output tree.
fn render_one(path: &Path, rel_path: &Path, site: &Site, style: &str, output: &Path) -> Result<()> {
    let rel_html = rel_path.with_extension("html");
    log!("build"; "rendering {}", rel_path.display());

    let markdown =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let page = render_page(&markdown, site, style, &rel_html);

    let dest = output.join(&rel_html);
    write_output(&dest, page.as_bytes())
}

/// Copy an asset verbatim to the same relative path in the output tree.
fn copy_one(path: &Path, rel_path: &Path, output: &Path) -> Result<()> {
    log!("build"; "copying {}", rel_path.display());

    let dest = output.join(rel_path);
    ensure_parent(&dest)?;
    fs::copy(path, &dest)
        .with_context(|| format!("Failed to copy {}", path.display()))?;
    Ok(())
}

/// Resolve the effective style sheet: bundled theme, then site override.
fn resolve_style(site_dir: &Path, theme: &str) -> Result<String> {
    let mut style = theme_css(theme)?.to_string();

    let override_path = site_dir.join(STYLE_OVERRIDE);
    if override_path.exists() {
        let site_style = fs::read_to_string(&override_path)
            .with_context(|| format!("Failed to read {}", override_path.display()))?;
        style.push_str("\n\n");
        style.push_str(&site_style);
    }

    Ok(style)
}

/// Look up a bundled theme by name.
fn theme_css(name: &str) -> Result<&'static str> {
    match THEMES.iter().find(|(theme, _)| *theme == name) {
        Some((_, css)) => Ok(css),
        None => {
            let available: Vec<_> = THEMES.iter().map(|(theme, _)| *theme).collect();
            bail!(
                "Unknown theme `{name}`, available themes: {}",
                available.join(", ")
            )
        }
    }
}

/// Delete and recreate a directory, guaranteeing it exists and is empty.
fn reset_dir(dir: &Path) -> Result<()> {
    clean_site(dir)?;
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(())
}

/// Create the parent directory of an output file if needed.
fn ensure_parent(dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

fn write_output(dest: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent(dest)?;
    fs::write(dest, bytes).with_context(|| format!("Failed to write {}", dest.display()))?;
    Ok(())
}
