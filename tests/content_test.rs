use noval::{extract_content, Extractor, Options};

fn prose_paragraph() -> String {
    // 160 characters, 15 punctuation marks
    "少年站在山崖之上,望着远处翻涌的云海,心中默念着师父留下的口诀。".repeat(5)
}

fn sidebar() -> String {
    let links: String = (1..=30)
        .map(|i| format!("<li><a href=\"/cat/{i}.html\">热门{i:02}</a></li>"))
        .collect();
    format!("<ul class=\"sidebar\">{links}</ul>")
}

#[test]
fn prose_block_beats_navigation_sidebar() {
    let p = prose_paragraph();
    let html = format!(
        "<html><body>{}<div><p>{p}</p><p>{p}</p><p>{p}</p></div></body></html>",
        sidebar()
    );

    let text = extract_content(&html);

    assert!(text.contains("心中默念着师父留下的口诀"));
    assert!(!text.contains("热门01"));
}

#[test]
fn br_line_breaks_are_preserved() {
    let html = "<html><body><div id=\"content\">\
        第一行文字,他抬起头。<br>第二行文字,风停了。<br/>第三行文字,天亮了。\
        </div><div class=\"nav\"><a href=\"/\">首页</a></div></body></html>";

    let text = extract_content(html);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines, vec!["第一行文字,他抬起头。", "第二行文字,风停了。", "第三行文字,天亮了。"]);
}

#[test]
fn full_width_punctuation_is_normalised() {
    let html = "<html><body><div><p>他说：“走吧，ＡＢＣ。”然后转身离开了这座城市，再也没有回来。</p></div></body></html>";
    let text = extract_content(html);
    assert!(text.contains("他说:“走吧,ABC。”"));
}

#[test]
fn intra_line_whitespace_is_collapsed() {
    let html = "<html><body><div><p>天色    渐暗,\t\t众人散去。</p></div></body></html>";
    assert_eq!(extract_content(html), "天色 渐暗, 众人散去。");
}

#[test]
fn script_text_is_not_content() {
    let p = prose_paragraph();
    let html = format!(
        "<html><body><div><script>var ads = \"{}\";</script><p>{p}</p></div></body></html>",
        "x".repeat(2000)
    );
    let text = extract_content(&html);
    assert!(text.contains("师父"));
    assert!(!text.contains("var ads"));
}

#[test]
fn prose_with_one_inline_link_still_scores() {
    let p = prose_paragraph();
    let html = format!("<html><body><div><a href=\"/n\">下一章</a>{p}{p}</div>{}</body></html>", sidebar());
    let text = extract_content(&html);
    assert!(text.contains("师父留下的口诀"));
}

#[test]
fn content_class_boost_can_be_disabled() {
    let p = prose_paragraph();
    let html = format!("<html><body><div class=\"content\"><p>{p}</p></div></body></html>");
    let with_boost = extract_content(&html);
    let without = Extractor::new(Options {
        boost_high_weight: false,
        ..Options::default()
    })
    .content(&html);
    assert_eq!(with_boost, without);
    assert!(with_boost.contains("云海"));
}
