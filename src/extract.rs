//! The `Extractor` facade.
//!
//! Holds one set of [`Options`] and runs the four page extractors with it.
//! An extractor is immutable while extracting, so a shared reference can be
//! used from any number of threads.

use crate::chapters;
use crate::density;
use crate::detail;
use crate::encoding;
use crate::error::Result;
use crate::options::Options;
use crate::result::{ChapterEntry, ChapterLookup, SearchHit};
use crate::search;

/// Rule-free extractor for fiction site pages.
///
/// # Example
///
/// ```rust
/// use noval::{ChapterLookup, Extractor};
///
/// let extractor = Extractor::default().with_base_url("https://www.example.com/book/1/");
/// let html = r#"<div><a href="list.html">全部章节</a></div>"#;
///
/// match extractor.chapters_or_detail(html, None)? {
///     ChapterLookup::DetailPage(url) => assert_eq!(url, "https://www.example.com/book/1/list.html"),
///     other => panic!("unexpected {other:?}"),
/// }
/// # Ok::<(), noval::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: Options,
}

impl Extractor {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Use `base_url` whenever a call passes no page URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.set_base_url(base_url);
        self
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.options.base_url = Some(base_url.into());
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Search hits for the book `name` on a search result page.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBaseUrl`] when a relative link has to
    /// be resolved without an absolute page or base URL.
    pub fn search(&self, html: &str, name: &str, current_url: Option<&str>) -> Result<Vec<SearchHit>> {
        search::extract_search(html, name, current_url, &self.options)
    }

    /// Link to the chapter list page, if the page has one.
    ///
    /// # Errors
    ///
    /// Same as [`Extractor::search`].
    pub fn detail(&self, html: &str, current_url: Option<&str>) -> Result<Option<String>> {
        detail::extract_detail(html, current_url, &self.options)
    }

    /// Chapter list of a catalogue page, empty when there is none.
    ///
    /// # Errors
    ///
    /// Same as [`Extractor::search`].
    pub fn chapters(&self, html: &str, current_url: Option<&str>) -> Result<Vec<ChapterEntry>> {
        chapters::extract_chapters(html, current_url, &self.options)
    }

    /// Main text of a chapter page, empty when nothing scores.
    #[must_use]
    pub fn content(&self, html: &str) -> String {
        density::extract_content(html, &self.options)
    }

    /// Chapters of a book page, or the link to where they are.
    ///
    /// A page without a chapter list is checked for a detail link; the caller
    /// fetches that page and calls [`Extractor::chapters`] on it.
    ///
    /// # Errors
    ///
    /// Same as [`Extractor::search`].
    pub fn chapters_or_detail(&self, html: &str, current_url: Option<&str>) -> Result<ChapterLookup> {
        let chapters = self.chapters(html, current_url)?;
        if !chapters.is_empty() {
            return Ok(ChapterLookup::Chapters(chapters));
        }
        Ok(match self.detail(html, current_url)? {
            Some(url) => ChapterLookup::DetailPage(url),
            None => ChapterLookup::NotFound,
        })
    }

    /// Decode page bytes using the declared charset or
    /// [`Options::default_encoding`].
    #[must_use]
    pub fn decode(&self, html: &[u8]) -> String {
        encoding::decode_html(html, &self.options.default_encoding)
    }
}
