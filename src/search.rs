//! Search Result Matcher
//!
//! Search pages differ per site but nearly all render one row per book with
//! the title as a link:
//!
//! ```html
//! <tr>
//!     <td><a href="target.html">name</a></td>
//!     <td>author</td>
//!     <td>update-time</td>
//! </tr>
//! ```
//!
//! Every anchor whose text contains the searched title is a hit. The text of
//! the anchor's grandparent (the row) is split into name, date and other
//! columns.

use crate::dom::{self, NodeRef};
use crate::error::Result;
use crate::normalize::normalize_text;
use crate::options::Options;
use crate::patterns::{DATETIME_PATTERNS, WHITESPACE_NORMALIZE};
use crate::result::{SearchFields, SearchHit};
use crate::url_utils::Resolver;

/// First date in `text`, by pattern priority, with the text left around it.
fn match_date(text: &str) -> Option<(String, String)> {
    DATETIME_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let m = caps.get(1)?;
        let rest = format!("{} {}", &text[..m.start()], &text[m.end()..]);
        let rest = WHITESPACE_NORMALIZE.replace_all(rest.trim(), " ").into_owned();
        Some((m.as_str().to_string(), rest))
    })
}

/// Split row fragments into name / date / other columns.
///
/// - a fragment containing `name` becomes the name column (the last such
///   fragment wins)
/// - the first other fragment that matches a date pattern gives the date; the
///   text around the date stays in the other column, and later fragments are
///   not searched for dates
/// - everything else is joined into the other column with commas
#[must_use]
pub fn split_row(fragments: &[String], name: &str) -> SearchFields {
    let mut fields = SearchFields::default();
    let mut other: Vec<String> = Vec::new();

    for fragment in fragments {
        if fragment.contains(name) {
            fields.name.clone_from(fragment);
            continue;
        }
        if fields.date.is_empty() {
            if let Some((date, rest)) = match_date(fragment) {
                fields.date = date;
                if !rest.is_empty() {
                    other.push(rest);
                }
                continue;
            }
        }
        other.push(fragment.clone());
    }

    fields.other = other.join(",");
    fields
}

/// The row around a matched anchor: its grandparent, or the nearest ancestor
/// that exists.
fn row_of<'a>(anchor: &NodeRef<'a>) -> NodeRef<'a> {
    let parent = dom::parent_element(anchor);
    parent
        .and_then(|p| dom::parent_element(&p))
        .or(parent)
        .unwrap_or(*anchor)
}

/// Extract search hits for `name` from a search result page.
///
/// An empty `name` matches nothing.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidBaseUrl`] when a relative href has to be
/// resolved without an absolute base URL.
pub fn extract_search(
    html: &str,
    name: &str,
    current_url: Option<&str>,
    options: &Options,
) -> Result<Vec<SearchHit>> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(Vec::new());
    }

    let doc = dom::parse(html);
    let Some(root) = dom::document_element(&doc) else {
        return Ok(Vec::new());
    };
    // Titles in the page went through NFKC, so the query must too.
    let name = normalize_text(name);
    let resolver = Resolver::new(current_url, options.base_url.as_deref());

    let mut hits = Vec::new();
    for anchor in dom::iterate(root).filter(|n| dom::is_tag(n, "a")) {
        if !dom::raw_text(&anchor).contains(&*name) {
            continue;
        }
        let Some(href) = dom::get_attribute(&anchor, "href") else {
            continue;
        };

        let Some(url) = resolver.resolve_link(&href)? else {
            continue;
        };

        let fragments = dom::text_fragments(&row_of(&anchor), &WHITESPACE_NORMALIZE);
        let fields = split_row(&fragments, &name);
        hits.push(SearchHit::new(&fields, url));
    }

    tracing::debug!(name = %name, hits = hits.len(), "search page scanned");
    Ok(hits)
}
