//! Detail Link Finder
//!
//! Some book pages only show a synopsis and link to a separate catalogue
//! page. The first anchor whose text matches the table-of-contents
//! vocabulary is that link.

use crate::dom;
use crate::error::Result;
use crate::options::Options;
use crate::patterns::DETAIL_KEYWORD;
use crate::url_utils::Resolver;

/// Find the "go to the chapter list" link of a book page.
///
/// The first matching anchor in document order decides: if it has no
/// `href`, there is no detail link.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidBaseUrl`] when the href is relative and no
/// absolute base URL is available.
pub fn extract_detail(html: &str, current_url: Option<&str>, options: &Options) -> Result<Option<String>> {
    let doc = dom::parse(html);
    let Some(root) = dom::document_element(&doc) else {
        return Ok(None);
    };

    let Some(anchor) = dom::iterate(root)
        .filter(|n| dom::is_tag(n, "a"))
        .find(|a| DETAIL_KEYWORD.is_match(&dom::raw_text(a)))
    else {
        tracing::debug!("no detail link");
        return Ok(None);
    };

    let Some(href) = dom::get_attribute(&anchor, "href") else {
        return Ok(None);
    };
    let resolver = Resolver::new(current_url, options.base_url.as_deref());
    let url = resolver.resolve_link(&href)?;
    if let Some(url) = &url {
        tracing::debug!(url = url.as_str(), "detail link found");
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_catalogue_link_wins() {
        let html = r#"<div>
            <a href="/">首页</a>
            <a href="/book/1/list.html">查看目录</a>
            <a href="/book/1/all.html">全部章节</a>
        </div>"#;
        let url = extract_detail(html, Some("https://a.com/book/1/"), &Options::default()).unwrap();
        assert_eq!(url.as_deref(), Some("https://a.com/book/1/list.html"));
    }

    #[test]
    fn keyword_match_ignores_case() {
        let html = "<p><a href='toc.html'>TABLE OF CONTENTS</a></p>";
        let url = extract_detail(html, Some("https://a.com/b/"), &Options::default()).unwrap();
        assert_eq!(url.as_deref(), Some("https://a.com/b/toc.html"));
    }

    #[test]
    fn matching_anchor_without_href_ends_search() {
        let html = "<p><a>目录</a><a href='/list'>章节列表</a></p>";
        let url = extract_detail(html, Some("https://a.com/"), &Options::default()).unwrap();
        assert!(url.is_none());
    }

    #[test]
    fn unjoinable_href_is_no_link() {
        let html = "<p><a href='//a.com:99999/list'>目录</a></p>";
        let url = extract_detail(html, Some("https://a.com/"), &Options::default()).unwrap();
        assert!(url.is_none());
    }

    #[test]
    fn no_keyword_no_link() {
        let html = "<p><a href='/'>首页</a><a href='/rank'>排行榜</a></p>";
        assert!(extract_detail(html, None, &Options::default()).unwrap().is_none());
    }

    #[test]
    fn base_url_option_is_the_fallback() {
        let html = "<p><a href='list.html'>目录</a></p>";
        let options = Options {
            base_url: Some("https://b.com/x/".to_string()),
            ..Options::default()
        };
        let url = extract_detail(html, None, &options).unwrap();
        assert_eq!(url.as_deref(), Some("https://b.com/x/list.html"));
    }
}
