//! Configuration options for extraction.
//!
//! The `Options` struct carries the fallback base URL and the heuristic
//! constants of the density scorer and list locator. The heuristics were
//! tuned against a handful of fiction sites, so they stay overridable for
//! callers that need to retune them against a different corpus.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum number of chapters a list must plausibly hold.
///
/// The list locator requires a weight of twice this value.
pub const MIN_CHAPTER_COUNT: usize = 20;

/// Non-link to link text ratio above which an all-link node is still prose.
pub const LINK_SKIP_RATIO: usize = 10;

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use noval::Options;
///
/// let options = Options {
///     base_url: Some("https://www.example.com/".to_string()),
///     min_chapter_count: 10,
///     ..Options::default()
/// };
/// assert!(options.boost_high_weight);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Base URL used when a call does not say which page the HTML came from.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Validity threshold for the chapter list.
    ///
    /// A `<ul>` is only accepted when its list weight reaches
    /// `2 * min_chapter_count`.
    ///
    /// Default: `20`
    pub min_chapter_count: usize,

    /// Boost the text length of nodes whose tag or class looks like a
    /// content container (`content`, `article`, `正文`, ...) by half.
    ///
    /// Default: `true`
    pub boost_high_weight: bool,

    /// Ratio used when every descendant of a node is a link.
    ///
    /// If `ti / (lti + 1)` exceeds this value, the links are ignored in the
    /// density denominator instead of zeroing the density.
    ///
    /// Default: `10`
    pub link_skip_ratio: usize,

    /// Charset label used for byte input without a `<meta charset>`.
    ///
    /// Default: `"utf-8"`
    pub default_encoding: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: None,
            min_chapter_count: MIN_CHAPTER_COUNT,
            boost_high_weight: true,
            link_skip_ratio: LINK_SKIP_RATIO,
            default_encoding: "utf-8".to_string(),
        }
    }
}

impl Options {
    /// Load options from a JSON document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the JSON is malformed or a field has the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Smallest list weight the chapter locator accepts.
    #[must_use]
    pub fn min_list_weight(&self) -> usize {
        self.min_chapter_count.saturating_mul(2)
    }
}
