//! Rich-text rendering for blog post bodies.
//!
//! The content store delivers post bodies as a flat array of block nodes.
//! This module renders them to HTML through a fixed mapping:
//!
//! | style        | element        |
//! |--------------|----------------|
//! | `h1`..`h4`   | `<h1>`..`<h4>` |
//! | `normal`     | `<p>`          |
//! | `blockquote` | `<blockquote>` |
//!
//! List items arrive as individual blocks with a `listItem` of `bullet` or
//! `number`; adjacent items of the same kind are grouped into one `<ul>` or
//! `<ol>`. Span decorators `strong` and `em` map to their elements; link
//! annotations open in a new browsing context. Everything else (unknown
//! styles fall back to paragraphs, non-text nodes are skipped) degrades
//! rather than erroring, since editors evolve the schema ahead of the site.

use std::fmt::Write as _;

use super::types::{Block, MarkDef, Span};

/// The kind of list currently being emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn from_item(list_item: &str) -> Option<Self> {
        match list_item {
            "bullet" => Some(Self::Bullet),
            "number" => Some(Self::Number),
            _ => None,
        }
    }

    const fn open_tag(self) -> &'static str {
        match self {
            Self::Bullet => "<ul>",
            Self::Number => "<ol>",
        }
    }

    const fn close_tag(self) -> &'static str {
        match self {
            Self::Bullet => "</ul>",
            Self::Number => "</ol>",
        }
    }
}

/// Render a rich-text body to HTML.
#[must_use]
pub fn render(blocks: &[Block]) -> String {
    let mut html = String::new();
    let mut open_list: Option<ListKind> = None;

    for block in blocks {
        // Only text blocks render; embedded images etc. are skipped
        if block.kind != "block" {
            continue;
        }

        let item_kind = block.list_item.as_deref().and_then(ListKind::from_item);

        // Close the current list when leaving it or switching kinds
        if let Some(open) = open_list
            && item_kind != Some(open)
        {
            html.push_str(open.close_tag());
            open_list = None;
        }

        if let Some(kind) = item_kind {
            if open_list.is_none() {
                html.push_str(kind.open_tag());
                open_list = Some(kind);
            }
            let _ = write!(html, "<li>{}</li>", render_children(block));
            continue;
        }

        let children = render_children(block);
        let tag = match block.style.as_deref() {
            Some("h1") => "h1",
            Some("h2") => "h2",
            Some("h3") => "h3",
            Some("h4") => "h4",
            Some("blockquote") => "blockquote",
            // "normal" and anything unrecognized render as paragraphs
            _ => "p",
        };
        let _ = write!(html, "<{tag}>{children}</{tag}>");
    }

    if let Some(open) = open_list {
        html.push_str(open.close_tag());
    }

    html
}

/// Render a block's spans, applying decorator and annotation marks.
fn render_children(block: &Block) -> String {
    block
        .children
        .iter()
        .filter(|span| span.kind == "span")
        .map(|span| render_span(span, &block.mark_defs))
        .collect()
}

fn render_span(span: &Span, mark_defs: &[MarkDef]) -> String {
    let mut rendered = escape_html(&span.text);

    // Wrap innermost-first so the first mark ends up outermost
    for mark in span.marks.iter().rev() {
        rendered = match mark.as_str() {
            "strong" => format!("<strong>{rendered}</strong>"),
            "em" => format!("<em>{rendered}</em>"),
            key => match resolve_link(key, mark_defs) {
                Some(href) => format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{rendered}</a>"#,
                    escape_html(&href)
                ),
                // Unknown decorators pass through unstyled
                None => rendered,
            },
        };
    }

    rendered
}

/// Look up a link annotation by its mark key.
fn resolve_link(key: &str, mark_defs: &[MarkDef]) -> Option<String> {
    mark_defs
        .iter()
        .find(|def| def.key == key && def.kind == "link")
        .and_then(|def| def.href.clone())
}

/// Escape text for safe embedding in HTML element and attribute content.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
