//! Page rendering: one Markdown source in, one complete HTML document out.
//!
//! The renderer owns the fixed page skeleton (head, header, nav, main,
//! footer), the favicon data URI, and the metadata extraction that feeds
//! the page title. Writing the result to disk is the builder's job.

use crate::{config::Site, links::fixup_links};
use pulldown_cmark::{Options, Parser, html};
use std::{collections::BTreeMap, path::Path};

/// Render a Markdown document into a complete HTML page.
///
/// `rel_path` is the page's output path relative to the build root; it is
/// forwarded to the link fixup pass.
pub fn render_page(markdown: &str, site: &Site, style: &str, rel_path: &Path) -> String {
    let (meta, body) = extract_metadata(markdown);
    let body_html = convert_markdown(body, extended_options());

    let title = page_title(meta.get("title").map(String::as_str), &site.title);
    let favicon = render_favicon(&site.favicon);
    let header = site.header_text();
    let navbar = convert_markdown(&site.navbar, Options::empty());
    let footer = convert_markdown(&site.footer, Options::empty());

    let document = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="icon" href="{favicon}">
    <style>{style}</style>
</head>
<body>
    <header>
        <a href="/"><h1>{header}</h1></a>
        <nav>{navbar}</nav>
    </header>
    <main>
    {body_html}
    </main>
    <footer>
        {footer}
    </footer>
</body>
</html>
"#
    );

    fixup_links(&document, rel_path)
}

/// Option set for page bodies: tables, footnotes, strikethrough, task lists.
fn extended_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Convert Markdown to HTML. Best-effort: malformed input still renders.
fn convert_markdown(markdown: &str, options: Options) -> String {
    let parser = Parser::new_ext(markdown, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Compose the page `<title>` from optional page metadata and the site title.
fn page_title(page_title: Option<&str>, site_title: &str) -> String {
    match page_title {
        Some(title) if !title.is_empty() => format!("{title} - {site_title}"),
        _ => site_title.to_string(),
    }
}

/// Extract leading `key: value` metadata lines from a document.
///
/// Metadata ends at the first blank or non-matching line; the remainder is
/// the Markdown body. Keys are lowercased. A document whose first line is
/// not a metadata line has no metadata at all.
fn extract_metadata(content: &str) -> (BTreeMap<String, String>, &str) {
    let mut meta = BTreeMap::new();
    let mut rest = content;

    loop {
        let (line, tail) = rest.split_once('\n').unwrap_or((rest, ""));
        match parse_meta_line(line) {
            Some((key, value)) => {
                meta.insert(key, value);
                rest = tail;
            }
            None => break,
        }
        if rest.is_empty() {
            break;
        }
    }

    (meta, rest.trim_start_matches(['\r', '\n']))
}

/// Parse a single `key: value` line. Keys are `[A-Za-z0-9_-]+` at column zero.
fn parse_meta_line(line: &str) -> Option<(String, String)> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some((key.to_ascii_lowercase(), value.trim().to_string()))
}

/// Render the favicon glyph as an inline SVG data URI.
///
/// Only `#`, `<` and `>` need percent-escaping inside a data URI.
fn render_favicon(glyph: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'>\
         <text y='.9em' font-size='90'>{glyph}</text></svg>"
    );
    let escaped = svg
        .replace('#', "%23")
        .replace('<', "%3C")
        .replace('>', "%3E");
    format!("data:image/svg+xml,{escaped}")
}
