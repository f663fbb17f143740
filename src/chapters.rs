//! Chapter List Locator
//!
//! Catalogue pages list their chapters as `<ul><li><a>` runs. The `<ul>` with
//! the largest list weight (descendant `<li>` elements plus the `<ul>`'s own
//! direct text nodes) is taken as the chapter list, provided the weight
//! reaches twice the configured minimum chapter count.

use crate::dom::{self, NodeRef};
use crate::error::Result;
use crate::options::Options;
use crate::patterns::WHITESPACE_NORMALIZE;
use crate::result::ChapterEntry;
use crate::url_utils::Resolver;

/// List weight of a `<ul>`.
#[must_use]
pub fn list_weight(ul: &NodeRef) -> usize {
    let items = dom::iterate(*ul).skip(1).filter(|n| dom::is_tag(n, "li")).count();
    let direct_text = dom::child_nodes(ul).iter().filter(|n| n.is_text()).count();
    items + direct_text
}

/// The heaviest `<ul>` under `root` and its weight; the first wins ties.
#[must_use]
pub fn find_chapter_list<'a>(root: NodeRef<'a>) -> Option<(NodeRef<'a>, usize)> {
    let mut best: Option<(NodeRef<'a>, usize)> = None;
    for ul in dom::iterate(root).filter(|n| dom::is_tag(n, "ul")) {
        let weight = list_weight(&ul);
        if best.as_ref().is_none_or(|(_, w)| weight > *w) {
            best = Some((ul, weight));
        }
    }
    best
}

/// `(title, href)` of every `li > a` inside `ul`, in document order.
///
/// Anchors without an `href` are skipped.
fn list_links(ul: &NodeRef) -> Vec<(String, String)> {
    dom::iterate(*ul)
        .skip(1)
        .filter(|n| dom::is_tag(n, "a"))
        .filter(|a| dom::parent_element(a).is_some_and(|p| dom::is_tag(&p, "li")))
        .filter_map(|a| {
            let href = dom::get_attribute(&a, "href")?;
            let title = dom::text_fragments(&a, &WHITESPACE_NORMALIZE).join(" ");
            Some((title, href))
        })
        .collect()
}

/// Extract the chapter list of a catalogue page.
///
/// Returns an empty list when no `<ul>` is heavy enough. Links that cannot
/// be joined onto the page URL are left out.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidBaseUrl`] when a relative chapter href has
/// to be resolved without an absolute base URL.
pub fn extract_chapters(html: &str, current_url: Option<&str>, options: &Options) -> Result<Vec<ChapterEntry>> {
    let doc = dom::parse(html);
    let Some(root) = dom::document_element(&doc) else {
        return Ok(Vec::new());
    };

    let min_weight = options.min_list_weight();
    let Some((ul, weight)) = find_chapter_list(root) else {
        tracing::debug!("no <ul> in document");
        return Ok(Vec::new());
    };
    if weight < min_weight {
        tracing::debug!(weight, min_weight, "largest list below chapter threshold");
        return Ok(Vec::new());
    }

    let resolver = Resolver::new(current_url, options.base_url.as_deref());
    let mut chapters = Vec::new();
    for (title, href) in list_links(&ul) {
        if let Some(url) = resolver.resolve_link(&href)? {
            chapters.push(ChapterEntry { title, url });
        }
    }

    tracing::debug!(weight, chapters = chapters.len(), "chapter list found");
    Ok(chapters)
}
