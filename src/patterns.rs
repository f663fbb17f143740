//! Compiled regex patterns and keyword tables for extraction.
//!
//! All patterns are compiled once at first use using `LazyLock` and are
//! read-only afterwards, so extraction calls on different threads share them
//! without locking.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Keyword Vocabularies
// =============================================================================

/// Tag names or classes that usually wrap the body text of a chapter.
pub const HIGH_WEIGHT_KEYWORDS: &[&str] = &["content", "article", "正文", "txt", "chapter"];

/// Anchor texts that lead from a book page to its table of contents.
pub const DETAIL_KEYWORDS: &[&str] = &[
    "目录",
    "章节列表",
    "全部章节",
    "catalogue",
    "catalog",
    "chapter list",
    "chapters",
    "table of contents",
];

/// Punctuation marks counted by the symbol density.
///
/// Full-width forms that NFKC folds to ASCII are listed anyway so the set is
/// also correct for text that never went through normalisation.
pub const PUNCTUATION: &str = "！，。？、；：“”‘’《》「」【】%（）,.?:;'\"!%()";

fn keyword_pattern(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alternation}")).expect("keyword alternation regex")
}

/// Case-insensitive alternation over [`HIGH_WEIGHT_KEYWORDS`].
pub static HIGH_WEIGHT_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| keyword_pattern(HIGH_WEIGHT_KEYWORDS));

/// Case-insensitive alternation over [`DETAIL_KEYWORDS`].
pub static DETAIL_KEYWORD: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(DETAIL_KEYWORDS));

// =============================================================================
// Search Row Patterns
// =============================================================================

/// Date and time shapes found in search result rows, highest priority first.
///
/// Every pattern captures the date itself in group 1. Short forms are fenced
/// by non-digits so they do not fire inside longer numbers.
pub static DATETIME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 2023-05-01 12:30 / 2023/05/01 12:30:59
        r"(\d{4}[-/.]\d{1,2}[-/.]\d{1,2}\s+\d{1,2}:\d{1,2}(?::\d{1,2})?)",
        // 2023-05-01
        r"(\d{4}[-/.]\d{1,2}[-/.]\d{1,2})",
        // 2023年5月1日
        r"(\d{4}年\d{1,2}月\d{1,2}日)",
        // 23-05-01
        r"(?:^|\D)(\d{2}-\d{1,2}-\d{1,2})(?:\D|$)",
        // 05-01 12:30
        r"(?:^|\D)(\d{1,2}-\d{1,2}\s+\d{1,2}:\d{2})",
        // 05-01
        r"(?:^|[^\d-])(\d{1,2}-\d{1,2})(?:[^\d-]|$)",
        // 12:30 / 12:30:59
        r"(?:^|[^\d:])(\d{1,2}:\d{2}(?::\d{2})?)(?:[^\d:]|$)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("DATETIME_PATTERNS regex"))
    .collect()
});

// =============================================================================
// Normalisation and Text Cleaning Patterns
// =============================================================================

/// Matches `<br>`, `<br/>`, `<br />` and stray `</br>` tags.
pub static BR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?br\b[^>]*>").expect("BR_TAG regex"));

/// Matches whitespace runs that contain no newline.
pub static INLINE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+").expect("INLINE_WHITESPACE regex"));

/// Matches any whitespace run, newlines included.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// URL Patterns
// =============================================================================

/// Matches an absolute `scheme://host...` URL.
pub static ABSOLUTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^/?#\s]+").expect("ABSOLUTE_URL regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    fn first_date(text: &str) -> Option<String> {
        DATETIME_PATTERNS
            .iter()
            .find_map(|re| re.captures(text))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }

    #[test]
    fn high_weight_keyword_is_case_insensitive() {
        assert!(HIGH_WEIGHT_KEYWORD.is_match("ChapterContent"));
        assert!(HIGH_WEIGHT_KEYWORD.is_match("正文"));
        assert!(!HIGH_WEIGHT_KEYWORD.is_match("sidebar"));
    }

    #[test]
    fn detail_keyword_matches_catalogue_links() {
        assert!(DETAIL_KEYWORD.is_match("查看目录"));
        assert!(DETAIL_KEYWORD.is_match("Table of Contents"));
        assert!(DETAIL_KEYWORD.is_match("All Chapters"));
        assert!(!DETAIL_KEYWORD.is_match("首页"));
    }

    #[test]
    fn full_timestamp_beats_bare_date() {
        assert_eq!(first_date("更新 2023-05-01 12:30").as_deref(), Some("2023-05-01 12:30"));
    }

    #[test]
    fn bare_dates_are_found() {
        assert_eq!(first_date("2023-05-01 玄幻").as_deref(), Some("2023-05-01"));
        assert_eq!(first_date("2023年5月1日").as_deref(), Some("2023年5月1日"));
        assert_eq!(first_date("23-05-01").as_deref(), Some("23-05-01"));
        assert_eq!(first_date("更新于05-01").as_deref(), Some("05-01"));
    }

    #[test]
    fn plain_text_has_no_date() {
        assert_eq!(first_date("天蚕土豆"), None);
        assert_eq!(first_date("第12345章"), None);
    }

    #[test]
    fn br_tag_variants() {
        let out = BR_TAG.replace_all("a<br>b<BR/>c<br />d</br>e<brand>", "\n");
        assert_eq!(out, "a\nb\nc\nd\ne<brand>");
    }

    #[test]
    fn absolute_url_requires_scheme_and_host() {
        assert!(ABSOLUTE_URL.is_match("https://a.com/x"));
        assert!(ABSOLUTE_URL.is_match("ftp://files.example.org"));
        assert!(!ABSOLUTE_URL.is_match("/fs/2.html"));
        assert!(!ABSOLUTE_URL.is_match("2.html"));
        assert!(!ABSOLUTE_URL.is_match("a.com/x"));
    }
}
