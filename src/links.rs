//! Intra-site link rewriting.
//!
//! Markdown sources link to `.md` siblings and to root-absolute paths that
//! only make sense when served by a URL-rewriting server. The build output
//! is a plain static tree, so rendered documents get a textual fixup pass:
//! `.md` targets become `.html`, and root-absolute targets become relative
//! to the page's own directory.
//!
//! This is pure literal substitution with no HTML awareness. Only
//! double-quoted targets in the exact produced form are rewritten;
//! alternatively quoted or malformed links pass through untouched.

use std::path::{Component, Path};

/// Rewrite link targets in a rendered document.
///
/// `rel_path` is the page's output path relative to the build root
/// (e.g. `notes/page.html`); it determines how far up a root-absolute
/// link has to climb.
pub fn fixup_links(html: &str, rel_path: &Path) -> String {
    let root = root_prefix(rel_path);
    html.replace(".md\"", ".html\"")
        .replace(".md#", ".html#")
        .replace("\"/", &format!("\"{root}/"))
}

/// Relative path from `rel_path`'s parent directory back to the build root.
///
/// `page.html` → `.`, `sub/page.html` → `..`, `a/b/page.html` → `../..`
fn root_prefix(rel_path: &Path) -> String {
    let depth = rel_path
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count()
        })
        .unwrap_or(0);

    if depth == 0 {
        ".".to_string()
    } else {
        vec![".."; depth].join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md_extension_rewritten() {
        assert_eq!(
            fixup_links(r#"<a href="foo.md">"#, Path::new("sub/page.html")),
            r#"<a href="foo.html">"#
        );
    }

    #[test]
    fn test_md_anchor_rewritten() {
        assert_eq!(
            fixup_links(r#"<a href="foo.md#intro">"#, Path::new("page.html")),
            r#"<a href="foo.html#intro">"#
        );
    }

    #[test]
    fn test_absolute_link_from_subdirectory() {
        assert_eq!(
            fixup_links(r#"<a href="/about">"#, Path::new("sub/page.html")),
            r#"<a href="../about">"#
        );
    }

    #[test]
    fn test_absolute_link_from_root() {
        assert_eq!(
            fixup_links(r#"<a href="/about">"#, Path::new("page.html")),
            r#"<a href="./about">"#
        );
    }

    #[test]
    fn test_absolute_link_two_levels_deep() {
        assert_eq!(
            fixup_links(r#"<a href="/style.css">"#, Path::new("a/b/page.html")),
            r#"<a href="../../style.css">"#
        );
    }

    #[test]
    fn test_root_link_itself() {
        assert_eq!(
            fixup_links(r#"<a href="/">"#, Path::new("sub/page.html")),
            r#"<a href="../">"#
        );
    }

    #[test]
    fn test_single_quoted_links_untouched() {
        // Documented limitation: only double-quoted targets are matched
        let html = "<a href='/about'>";
        assert_eq!(fixup_links(html, Path::new("sub/page.html")), html);
    }

    #[test]
    fn test_unrelated_text_untouched() {
        let html = "<p>read the docs</p>";
        assert_eq!(fixup_links(html, Path::new("page.html")), html);
    }

    #[test]
    fn test_root_prefix_depths() {
        assert_eq!(root_prefix(Path::new("index.html")), ".");
        assert_eq!(root_prefix(Path::new("sub/index.html")), "..");
        assert_eq!(root_prefix(Path::new("a/b/c/index.html")), "../../..");
    }
}
