use noval::url_utils::{is_absolute_url, resolve, Resolver};
use noval::Error;

#[test]
fn resolution_round_trips() {
    assert_eq!(
        resolve("https://a.com/fs/1.html", "/fs/2.html").expect("resolve failed"),
        "https://a.com/fs/2.html"
    );
    assert_eq!(
        resolve("https://a.com/fs/1.html", "2.html").expect("resolve failed"),
        "https://a.com/fs/2.html"
    );
    assert_eq!(
        resolve("https://a.com", "https://b.com/x").expect("resolve failed"),
        "https://b.com/x"
    );
}

#[test]
fn query_and_fragment_parts() {
    assert_eq!(
        resolve("https://a.com/s.php?q=1", "?q=2").expect("resolve failed"),
        "https://a.com/s.php?q=2"
    );
    assert_eq!(
        resolve("https://a.com/b/1.html", "#top").expect("resolve failed"),
        "https://a.com/b/1.html#top"
    );
}

#[test]
fn scheme_relative_href_takes_base_scheme() {
    assert_eq!(
        resolve("https://a.com/b/", "//cdn.a.com/1.html").expect("resolve failed"),
        "https://cdn.a.com/1.html"
    );
}

#[test]
fn absolute_detection() {
    assert!(is_absolute_url("https://a.com"));
    assert!(is_absolute_url("  http://a.com/x "));
    assert!(!is_absolute_url("/x"));
    assert!(!is_absolute_url("a.com/x"));
    assert!(!is_absolute_url("//a.com/x"));
    assert!(!is_absolute_url(""));
}

#[test]
fn missing_base_fails_loudly() {
    let err = Resolver::new(None, None).resolve("2.html").unwrap_err();
    assert!(matches!(err, Error::InvalidBaseUrl(ref base) if base.is_empty()));
    assert!(err.to_string().contains("base"));
}
