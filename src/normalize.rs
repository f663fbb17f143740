//! HTML normalisation applied before parsing.
//!
//! Two rewrites happen on the raw markup:
//!
//! - Unicode compatibility normalisation (NFKC), so full-width punctuation,
//!   digits and compatibility ideographs compare equal to their plain forms.
//! - `<br>` tags become literal newlines, so line breaks survive text
//!   extraction instead of being lost between adjacent text nodes.

use std::borrow::Cow;

use unicode_normalization::{is_nfkc_quick, IsNormalized, UnicodeNormalization};

use crate::patterns::BR_TAG;

/// Normalise raw HTML into the form every extraction operation parses.
///
/// Never fails; markup errors are left for the lenient parser to repair.
///
/// # Example
///
/// ```
/// use noval::normalize::normalize_html;
///
/// let html = normalize_html("<p>第一行<br/>第二行，完</p>");
/// assert_eq!(html, "<p>第一行\n第二行,完</p>");
/// ```
#[must_use]
pub fn normalize_html(html: &str) -> String {
    BR_TAG.replace_all(&normalize_text(html), "\n").into_owned()
}

/// NFKC-normalise a piece of text, borrowing when it is already normal.
#[must_use]
pub fn normalize_text(text: &str) -> Cow<'_, str> {
    match is_nfkc_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        _ => Cow::Owned(text.nfkc().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_width_forms_are_folded() {
        assert_eq!(normalize_html("ＡＢＣ１２３！"), "ABC123!");
    }

    #[test]
    fn br_tags_become_newlines() {
        assert_eq!(normalize_html("a<br>b<br/>c<BR />d"), "a\nb\nc\nd");
    }

    #[test]
    fn plain_ascii_is_untouched() {
        let html = "<html><body><p>Hello</p></body></html>";
        assert_eq!(normalize_html(html), html);
    }

    #[test]
    fn normalize_text_borrows_normal_input() {
        assert!(matches!(normalize_text("plain 文本"), Cow::Borrowed(_)));
        assert_eq!(normalize_text("（注）"), "(注)");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_html(""), "");
    }
}
