//! Result types for extraction output.
//!
//! Plain values: nothing here refers back to the parsed tree, which is dropped
//! before an extraction call returns.

use serde::{Deserialize, Serialize};

/// One search result row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// `"name|date|other"`, joined by a literal pipe.
    pub text: String,

    /// Book page URL, resolved against the search page URL.
    pub url: String,
}

/// The columns of a [`SearchHit`] text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFields {
    /// Row fragment containing the searched title.
    pub name: String,

    /// Update date or time, empty when the row has none.
    pub date: String,

    /// Remaining row fragments joined with commas (author, genre, ...).
    pub other: String,
}

impl SearchHit {
    /// Build a hit from its three columns.
    #[must_use]
    pub fn new(fields: &SearchFields, url: String) -> Self {
        Self {
            text: format!("{}|{}|{}", fields.name, fields.date, fields.other),
            url,
        }
    }

    /// Split the pipe-joined text back into its columns.
    ///
    /// Extra pipes (from a title that itself contains `|`) stay in `other`.
    #[must_use]
    pub fn fields(&self) -> SearchFields {
        let mut parts = self.text.splitn(3, '|');
        SearchFields {
            name: parts.next().unwrap_or_default().to_string(),
            date: parts.next().unwrap_or_default().to_string(),
            other: parts.next().unwrap_or_default().to_string(),
        }
    }
}

/// One entry of a chapter list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntry {
    /// Chapter title as shown in the list.
    pub title: String,

    /// Chapter page URL, resolved against the list page URL.
    pub url: String,
}

/// Outcome of looking for chapters on a book page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterLookup {
    /// The page holds the chapter list itself.
    Chapters(Vec<ChapterEntry>),

    /// No list here, but this link leads to the table of contents.
    DetailPage(String),

    /// Neither a list nor a detail link.
    NotFound,
}
