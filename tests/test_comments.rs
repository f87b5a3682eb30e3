use wxss_fix::comments::{segments, SegmentKind};

fn rebuild(text: &str) -> String {
    segments(text).iter().map(|s| s.text).collect()
}

#[test]
fn plain_code_is_one_segment() {
    let segs = segments(".a { color: red; }");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].kind, SegmentKind::Code);
    assert!(segs[0].line_start);
}

#[test]
fn empty_text_has_no_segments() {
    assert!(segments("").is_empty());
}

#[test]
fn unterminated_comment_runs_to_end() {
    let segs = segments("a /* open\nb: c;");
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[1].kind, SegmentKind::Comment);
    assert_eq!(segs[1].text, "/* open\nb: c;");
}

#[test]
fn adjacent_comments_have_no_empty_code_between() {
    let segs = segments("/* a *//* b */");
    assert_eq!(segs.len(), 2);
    assert!(segs.iter().all(|s| s.kind == SegmentKind::Comment));
}

#[test]
fn code_after_comment_on_same_line_is_not_line_start() {
    let segs = segments("/* x */ gap: 1px;\ngap: 2px;");
    assert_eq!(segs[1].text, " gap: 1px;\ngap: 2px;");
    assert!(!segs[1].line_start);
}

#[test]
fn comment_after_newline_is_line_start() {
    let segs = segments("a\n/* x */");
    assert_eq!(segs[1].kind, SegmentKind::Comment);
    assert!(segs[1].line_start);
}

#[test]
fn slash_star_slash_does_not_close() {
    let segs = segments("/*/ still comment */ code");
    assert_eq!(segs[0].text, "/*/ still comment */");
    assert_eq!(segs[1].text, " code");
}

#[test]
fn segments_concatenate_to_input() {
    for text in [
        "",
        "a",
        "/**/",
        "x /* y */ z /* w",
        "  /* gap: removed for compatibility */ /* gap: 8px;\n}\n",
        "多字节 /* 注释 */ 文本",
    ] {
        assert_eq!(rebuild(text), text);
    }
}
