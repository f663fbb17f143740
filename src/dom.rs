//! DOM Access Layer
//!
//! Thin helpers over `dom_query` for the few tree operations the extractors
//! need: parsing normalised markup, tag and attribute access, a replayable
//! pre-order element walk, and visible-text collection.
//!
//! Every walk here uses an explicit stack, so deeply nested or adversarial
//! markup cannot exhaust the call stack.

use regex::Regex;

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};
pub use tendril::StrTendril;

use crate::normalize::normalize_html;

/// Elements whose text is never rendered.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

// === Parsing ===

/// Normalise and parse an HTML document.
///
/// Parsing is lenient: unclosed tags and stray markup are repaired by
/// html5ever, and an empty string still yields `<html><head></head><body>`.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(normalize_html(html).as_str())
}

/// The `<html>` element of a parsed document.
#[must_use]
pub fn document_element(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("html").nodes().first().copied()
}

/// The `<body>` element, falling back to the document element.
#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body")
        .nodes()
        .first()
        .copied()
        .or_else(|| document_element(doc))
}

// === Tag/Node Information ===

/// Lowercase tag name of an element, empty for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> String {
    node.node_name()
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Whether `node` is an element with the given (lowercase) tag name.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Whether the text below this element is never rendered.
#[must_use]
pub fn is_invisible(node: &NodeRef) -> bool {
    node.is_element() && INVISIBLE_TAGS.iter().any(|t| is_tag(node, t))
}

/// All child nodes in document order, text and comments included.
#[must_use]
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut child = node.first_child();
    while let Some(c) = child {
        child = c.next_sibling();
        out.push(c);
    }
    out
}

/// Parent element, `None` at the top of the tree.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

// === Traversal ===

/// Depth-first, pre-order walk over the element nodes of a subtree.
///
/// Yields the starting node first, then every element descendant in document
/// order. Text, comment and doctype nodes are skipped. Each call to
/// [`iterate`] starts a fresh walk; there is no shared cursor.
pub struct Descendants<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let mut children: Vec<NodeRef<'a>> = child_nodes(&node)
            .into_iter()
            .filter(NodeRef::is_element)
            .collect();
        children.reverse();
        self.stack.extend(children);
        Some(node)
    }
}

/// Walk `node` and all its element descendants in pre-order.
#[must_use]
pub fn iterate<'a>(node: NodeRef<'a>) -> Descendants<'a> {
    let stack = if node.is_element() { vec![node] } else { Vec::new() };
    Descendants { stack }
}

// === Text Content ===

/// Visit every visible text node below `node` in document order.
pub fn for_each_text<F>(node: &NodeRef, mut f: F)
where
    F: FnMut(&str),
{
    let mut stack = child_nodes(node);
    stack.reverse();

    while let Some(n) = stack.pop() {
        if n.is_text() {
            let text: StrTendril = n.text();
            f(&text);
        } else if n.is_element() && !is_invisible(&n) {
            let mut children = child_nodes(&n);
            children.reverse();
            stack.extend(children);
        }
    }
}

/// Raw visible text of a subtree, concatenated without separators.
#[must_use]
pub fn raw_text(node: &NodeRef) -> String {
    let mut out = String::new();
    for_each_text(node, |text| out.push_str(text));
    out
}

/// Trim a text fragment and collapse whitespace runs matched by `collapse`.
///
/// Returns `None` for fragments that are empty after trimming.
#[must_use]
pub fn clean_fragment(text: &str, collapse: &Regex) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(collapse.replace_all(trimmed, " ").into_owned())
}

/// Cleaned, non-empty visible text fragments of a subtree in document order.
#[must_use]
pub fn text_fragments(node: &NodeRef, collapse: &Regex) -> Vec<String> {
    let mut out = Vec::new();
    for_each_text(node, |text| {
        if let Some(fragment) = clean_fragment(text, collapse) {
            out.push(fragment);
        }
    });
    out
}
