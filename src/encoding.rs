//! Character encoding detection and transcoding.
//!
//! Fiction sites still serve a lot of GBK and Big5. Bytes are decoded using
//! the charset the page declares, or a caller supplied fallback.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex")
});

/// Bytes examined for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Charset label declared in the head of the document, if any.
///
/// Covers both `<meta charset=...>` and the `http-equiv` form, since the
/// latter also contains `charset=` inside its `content` attribute.
fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pick the encoding for an HTML byte buffer.
///
/// Order: a byte order mark, the declared charset, `fallback_label`, UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8], fallback_label: &str) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    declared_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| Encoding::for_label(fallback_label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD; decoding never fails.
///
/// # Examples
///
/// ```
/// use noval::encoding::decode_html;
///
/// // "第一章" in GBK, no charset declaration
/// let gbk = b"<p>\xb5\xda\xd2\xbb\xd5\xc2</p>";
/// assert_eq!(decode_html(gbk, "gbk"), "<p>第一章</p>");
/// ```
#[must_use]
pub fn decode_html(html: &[u8], fallback_label: &str) -> String {
    let encoding = detect_encoding(html, fallback_label);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}
