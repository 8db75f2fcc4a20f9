//! HTML sanitization for catalog-provided markup
//!
//! Show summaries arrive as HTML fragments. They are rebuilt from an
//! allow-list of formatting tags before they reach a page; everything else is
//! escaped or dropped.

use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Formatting tags kept in summaries. Their attributes are always dropped.
const ALLOWED_TAGS: &[&str] = &["p", "br", "b", "strong", "i", "em", "u", "ul", "ol", "li"];

/// Tags removed together with their content.
const STRIPPED_TAGS: &[&str] = &["script", "style", "iframe", "object", "embed", "noscript"];

/// Escape HTML special characters for text and attribute values.
///
/// # Examples
/// ```
/// use tvmaze_core::sanitize::escape_html;
///
/// assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
/// ```
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Rebuild an HTML fragment keeping only allow-listed formatting tags.
///
/// Unknown tags are unwrapped (their text survives), script-like tags are
/// removed with their content, and all attributes are discarded.
///
/// # Examples
/// ```
/// use tvmaze_core::sanitize::sanitize_summary;
///
/// assert_eq!(
///     sanitize_summary(r#"<p onclick="x()"><b>Girls</b><script>alert(1)</script></p>"#),
///     "<p><b>Girls</b></p>"
/// );
/// ```
pub fn sanitize_summary(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    write_children(fragment.root_element(), &mut out);
    out
}

fn write_children(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    write_element(child_el, out);
                }
            }
            _ => {}
        }
    }
}

fn write_element(element: ElementRef, out: &mut String) {
    let name = element.value().name();

    if STRIPPED_TAGS.contains(&name) {
        return;
    }

    if !ALLOWED_TAGS.contains(&name) {
        write_children(element, out);
        return;
    }

    if name == "br" {
        out.push_str("<br>");
        return;
    }

    out.push('<');
    out.push_str(name);
    out.push('>');
    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
