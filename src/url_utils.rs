//! URL Utility Functions
//!
//! Resolution of the hrefs found in search, catalogue and book pages against
//! the URL the page was fetched from.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::ABSOLUTE_URL;

/// Check if a string is an absolute `scheme://host...` URL.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    ABSOLUTE_URL.is_match(s.trim())
}

/// Parse a base URL, requiring it to be absolute.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] for empty, relative or unparsable bases.
pub fn parse_base(base: &str) -> Result<Url> {
    let base = base.trim();
    if !is_absolute_url(base) {
        return Err(Error::InvalidBaseUrl(base.to_string()));
    }
    Url::parse(base).map_err(|_| Error::InvalidBaseUrl(base.to_string()))
}

/// Resolve `part` against `base`.
///
/// Absolute parts are returned unchanged, whatever the base. Everything else
/// goes through RFC 3986 reference resolution: absolute paths replace the
/// base path, relative paths are merged with it and `.`/`..` segments are
/// removed.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `part` is relative and `base` is not
/// an absolute URL, and [`Error::UrlJoin`] when the join itself fails.
///
/// # Example
///
/// ```
/// use noval::url_utils::resolve;
///
/// assert_eq!(resolve("https://a.com/fs/1.html", "2.html")?, "https://a.com/fs/2.html");
/// assert_eq!(resolve("https://a.com/fs/1.html", "/fs/2.html")?, "https://a.com/fs/2.html");
/// assert!(resolve("", "2.html").is_err());
/// # Ok::<(), noval::Error>(())
/// ```
pub fn resolve(base: &str, part: &str) -> Result<String> {
    let part = part.trim();
    if is_absolute_url(part) {
        return Ok(part.to_string());
    }

    let base_url = parse_base(base)?;
    base_url
        .join(part)
        .map(String::from)
        .map_err(|source| Error::UrlJoin {
            base: base.to_string(),
            part: part.to_string(),
            source,
        })
}

/// A resolver bound to one page URL.
///
/// The base is only validated when a relative href actually needs it, so a
/// page whose links are all absolute resolves fine without any base.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    base: &'a str,
}

impl<'a> Resolver<'a> {
    /// Resolve against `current_url`, falling back to `base_url`, then to no
    /// base at all.
    #[must_use]
    pub fn new(current_url: Option<&'a str>, base_url: Option<&'a str>) -> Self {
        let base = current_url
            .filter(|u| !u.trim().is_empty())
            .or(base_url)
            .unwrap_or("");
        Self { base }
    }

    /// The base this resolver joins onto.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base
    }

    /// Resolve one href.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self, href: &str) -> Result<String> {
        resolve(self.base, href)
    }

    /// Resolve an href taken from page markup.
    ///
    /// A link the `url` crate cannot join (bad port, bad host) is page data,
    /// so it yields `None` and the caller skips it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] when `href` is relative and the base
    /// is not absolute.
    pub fn resolve_link(&self, href: &str) -> Result<Option<String>> {
        match self.resolve(href) {
            Ok(url) => Ok(Some(url)),
            Err(Error::UrlJoin { part, source, .. }) => {
                tracing::debug!(href = part.as_str(), error = %source, "skipping unresolvable link");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_replaces_base_path() {
        assert_eq!(
            resolve("https://a.com/fs/1.html", "/fs/2.html").unwrap(),
            "https://a.com/fs/2.html"
        );
        assert_eq!(
            resolve("https://www.feishanzw.com/fs/50413.html", "/fs/50413/88177067.html").unwrap(),
            "https://www.feishanzw.com/fs/50413/88177067.html"
        );
    }

    #[test]
    fn relative_path_joins_base_directory() {
        assert_eq!(resolve("https://a.com/fs/1.html", "2.html").unwrap(), "https://a.com/fs/2.html");
        assert_eq!(
            resolve("https://www.shuquge.com/txt/72275/index.html", "11220127.html").unwrap(),
            "https://www.shuquge.com/txt/72275/11220127.html"
        );
    }

    #[test]
    fn dot_segments_are_removed() {
        assert_eq!(resolve("https://a.com/a/b/c.html", "../d.html").unwrap(), "https://a.com/a/d.html");
        assert_eq!(resolve("https://a.com/a/b/c.html", "./d.html").unwrap(), "https://a.com/a/b/d.html");
    }

    #[test]
    fn absolute_part_is_returned_unchanged() {
        assert_eq!(resolve("https://a.com", "https://b.com/x").unwrap(), "https://b.com/x");
        // Even without a usable base
        assert_eq!(resolve("", "https://b.com/x").unwrap(), "https://b.com/x");
    }

    #[test]
    fn host_only_base() {
        assert_eq!(resolve("https://a.com", "x.html").unwrap(), "https://a.com/x.html");
    }

    #[test]
    fn relative_base_is_a_configuration_error() {
        assert!(matches!(resolve("", "2.html"), Err(Error::InvalidBaseUrl(_))));
        assert!(matches!(resolve("a.com/fs/1.html", "2.html"), Err(Error::InvalidBaseUrl(_))));
        assert!(matches!(resolve("/fs/1.html", "/fs/2.html"), Err(Error::InvalidBaseUrl(_))));
    }

    #[test]
    fn resolver_prefers_current_url() {
        let r = Resolver::new(Some("https://a.com/x/"), Some("https://b.com/"));
        assert_eq!(r.resolve("1.html").unwrap(), "https://a.com/x/1.html");

        let r = Resolver::new(None, Some("https://b.com/"));
        assert_eq!(r.resolve("1.html").unwrap(), "https://b.com/1.html");

        let r = Resolver::new(Some(""), None);
        assert_eq!(r.base(), "");
        assert!(r.resolve("1.html").is_err());
    }

    #[test]
    fn bad_link_is_skipped_but_missing_base_is_not() {
        let r = Resolver::new(Some("https://a.com/b/"), None);
        assert_eq!(r.resolve_link("//a.com:99999/x.html").unwrap(), None);
        assert_eq!(r.resolve_link("1.html").unwrap().as_deref(), Some("https://a.com/b/1.html"));

        let r = Resolver::new(None, None);
        assert!(matches!(r.resolve_link("1.html"), Err(Error::InvalidBaseUrl(_))));
    }
}
