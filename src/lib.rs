//! # noval
//!
//! Rule-free extraction for web fiction sites.
//!
//! Instead of per-site selectors, every page type is handled by a structural
//! heuristic that works across most sites:
//!
//! - **Search pages**: links whose text contains the book title, with the
//!   surrounding row split into name, date and other columns
//! - **Book pages**: the link leading to the full table of contents
//! - **Catalogue pages**: the longest `<ul>` list of links
//! - **Chapter pages**: the element with the best text density score
//!
//! ## Quick Start
//!
//! ```rust
//! use noval::{extract_content, extract_search};
//!
//! let html = r#"<html><body><div>
//!     <p><a href="/book/1/">大主宰</a> 2023-05-01 玄幻</p>
//! </div></body></html>"#;
//!
//! let hits = extract_search(html, "大主宰", Some("https://www.example.com/search"))?;
//! assert_eq!(hits[0].text, "大主宰|2023-05-01|玄幻");
//! assert_eq!(hits[0].url, "https://www.example.com/book/1/");
//!
//! assert_eq!(extract_content(""), "");
//! # Ok::<(), noval::Error>(())
//! ```
//!
//! ## Base URLs
//!
//! Every href is resolved against the `current_url` passed to a call, or the
//! configured [`Options::base_url`]. Resolving a relative href with neither
//! is a caller error and returns [`Error::InvalidBaseUrl`]; everything else,
//! including malformed markup, degrades to empty results.

mod error;
mod extract;
mod options;
mod result;

/// Shared compiled patterns and keyword tables.
pub mod patterns;

/// Unicode and `<br>` normalisation of raw markup.
pub mod normalize;

/// DOM operations over `dom_query` nodes.
pub mod dom;

/// Per-node text statistics.
pub mod stats;

/// Text density scoring and content extraction.
pub mod density;

/// Chapter list location.
pub mod chapters;

/// Search result matching.
pub mod search;

/// Detail link lookup.
pub mod detail;

/// URL utilities for href resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::Extractor;
pub use options::{Options, LINK_SKIP_RATIO, MIN_CHAPTER_COUNT};
pub use result::{ChapterEntry, ChapterLookup, SearchFields, SearchHit};

/// Search hits for `name` on a search result page, with default options.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when a relative link is found and
/// `current_url` is missing or not absolute.
pub fn extract_search(html: &str, name: &str, current_url: Option<&str>) -> Result<Vec<SearchHit>> {
    search::extract_search(html, name, current_url, &Options::default())
}

/// Link to the chapter list page of a book page, with default options.
///
/// # Errors
///
/// See [`extract_search`].
pub fn extract_detail(html: &str, current_url: Option<&str>) -> Result<Option<String>> {
    detail::extract_detail(html, current_url, &Options::default())
}

/// Chapter list of a catalogue page, with default options.
///
/// # Example
///
/// ```rust
/// let items: String = (1..=40)
///     .map(|i| format!("<li><a href='{i}.html'>第{i}章</a></li>"))
///     .collect();
/// let html = format!("<ul>{items}</ul>");
///
/// let chapters = noval::extract_chapters(&html, Some("https://a.com/book/"))?;
/// assert_eq!(chapters.len(), 40);
/// assert_eq!(chapters[39].url, "https://a.com/book/40.html");
/// # Ok::<(), noval::Error>(())
/// ```
///
/// # Errors
///
/// See [`extract_search`].
pub fn extract_chapters(html: &str, current_url: Option<&str>) -> Result<Vec<ChapterEntry>> {
    chapters::extract_chapters(html, current_url, &Options::default())
}

/// Main text of a chapter page, with default options.
#[must_use]
pub fn extract_content(html: &str) -> String {
    density::extract_content(html, &Options::default())
}
