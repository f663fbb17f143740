use noval::{Error, Extractor, Options, LINK_SKIP_RATIO, MIN_CHAPTER_COUNT};

#[test]
fn defaults_match_constants() {
    let opts = Options::default();
    assert_eq!(opts.min_chapter_count, MIN_CHAPTER_COUNT);
    assert_eq!(opts.link_skip_ratio, LINK_SKIP_RATIO);
    assert_eq!(opts.min_list_weight(), 2 * MIN_CHAPTER_COUNT);
}

#[test]
fn options_load_from_json_file_contents() {
    let json = r#"{
        "base_url": "https://www.example.com/",
        "min_chapter_count": 10,
        "boost_high_weight": false,
        "link_skip_ratio": 5,
        "default_encoding": "gbk"
    }"#;

    let opts = Options::from_json(json).expect("valid options");
    assert_eq!(opts.base_url.as_deref(), Some("https://www.example.com/"));
    assert_eq!(opts.min_chapter_count, 10);
    assert!(!opts.boost_high_weight);
    assert_eq!(opts.link_skip_ratio, 5);
    assert_eq!(opts.default_encoding, "gbk");
}

#[test]
fn empty_json_object_is_the_default() {
    assert_eq!(Options::from_json("{}").expect("valid options"), Options::default());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = Options::from_json("{ not json").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn options_round_trip_through_serde() {
    let opts = Options {
        base_url: Some("https://a.com/".to_string()),
        ..Options::default()
    };
    let json = serde_json::to_string(&opts).expect("serialize");
    assert_eq!(Options::from_json(&json).expect("valid options"), opts);
}

#[test]
fn extractor_exposes_its_options() {
    let opts = Options {
        min_chapter_count: 3,
        ..Options::default()
    };
    let extractor = Extractor::new(opts.clone());
    assert_eq!(extractor.options(), &opts);
}
