//! Visible text extraction
//!
//! Strips non-rendering markup from HTML and flattens the remaining
//! text nodes into line-delimited output.

use ego_tree::NodeRef;
use scraper::{node::Node, Html};

/// Elements whose entire subtree is non-rendering
const SKIPPED_ELEMENTS: &[&str] = &["script", "style"];

/// Extract the visible text of an HTML document
///
/// Removes all `<script>` and `<style>` subtrees, collects the remaining
/// text nodes in document order, trims each line, drops blank lines, and
/// joins the survivors with newlines.
///
/// # Arguments
/// * `html` - Raw HTML string
///
/// # Returns
/// Cleaned text with no blank lines and no per-line leading/trailing
/// whitespace
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut raw = String::new();
    collect_text(document.tree.root(), &mut raw);

    clean_lines(&raw)
}

/// Append the text content of a node, skipping non-rendering subtrees
fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) if SKIPPED_ELEMENTS.contains(&element.name()) => return,
        Node::Text(text) => out.push_str(text),
        _ => {}
    }

    for child in node.children() {
        collect_text(child, out);
    }
}

/// Trim every line, drop blank ones, rejoin with newlines
fn clean_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
