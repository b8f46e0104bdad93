//! Tests for stray-quote classification and repair

use crate::app::services::line_sanitizer::clean;
use std::borrow::Cow;

#[test]
fn test_line_without_quotes_is_borrowed_unchanged() {
    let line = "1,John,Doe,123 Main St";
    let cleaned = clean(line);
    assert!(matches!(cleaned, Cow::Borrowed(_)));
    assert_eq!(cleaned, line);
}

#[test]
fn test_empty_line_unchanged() {
    assert_eq!(clean(""), "");
}

#[test]
fn test_correctly_quoted_field_unchanged() {
    let line = r#"2,"O""Brien",Smith,"1 A St, Apt 2""#;
    let cleaned = clean(line);
    assert!(matches!(cleaned, Cow::Borrowed(_)));
    assert_eq!(cleaned, line);
}

#[test]
fn test_single_quoted_line_unchanged() {
    // A lone fully quoted field: opening quote at line start, closing at end
    assert_eq!(clean(r#""John Doe""#), r#""John Doe""#);
}

#[test]
fn test_stray_quote_mid_field_is_escaped() {
    assert_eq!(clean(r#"ab"cd"#), r#"ab""cd"#);
}

#[test]
fn test_stray_quote_before_closing_quote() {
    // The quote after "line2 " is stray; the rest are delimiter-legal
    let line = r#"line2 "data1",""Data2""#;
    assert_eq!(clean(line), r#"line2 ""data1",""Data2""#);
}

#[test]
fn test_consecutive_strays_each_escaped_independently() {
    assert_eq!(clean(r#"a"b"c"#), r#"a""b""c"#);
}

#[test]
fn test_quote_before_separator_is_legal() {
    assert_eq!(clean(r#"ab",cd,e,f"#), r#"ab",cd,e,f"#);
}

#[test]
fn test_quote_after_separator_is_legal() {
    assert_eq!(clean(r#"a,"bc,d,e"#), r#"a,"bc,d,e"#);
}

#[test]
fn test_quote_before_trailing_whitespace_is_legal() {
    assert_eq!(clean("1,Jo,Doe,\"5 Elm\"  "), "1,Jo,Doe,\"5 Elm\"  ");
}

#[test]
fn test_quote_followed_by_space_then_text_is_stray() {
    assert_eq!(clean(r#"1,Jo" x,Doe,5 Elm"#), r#"1,Jo"" x,Doe,5 Elm"#);
}

#[test]
fn test_escape_pairs_not_reescaped() {
    // Both quotes of a pair are adjacent to another quote, hence legal
    assert_eq!(clean(r#"a""b,c,d,e"#), r#"a""b,c,d,e"#);
}

#[test]
fn test_idempotence_on_repaired_lines() {
    let cases = [
        "",
        "1,John,Doe,123 Main St",
        r#"2,"O""Brien",Smith,"1 A St, Apt 2""#,
        r#"ab"cd"#,
        r#"line2 "data1",""Data2""#,
        r#"a"b"c"#,
        r#"a"""b"#,
        "only whitespace   ",
    ];
    for case in cases {
        let once = clean(case).into_owned();
        let twice = clean(&once).into_owned();
        assert_eq!(once, twice, "sanitizer not idempotent for {case:?}");
    }
}

#[test]
fn test_quote_count_even_after_repair() {
    let cases = [r#"ab"cd"#, r#"a"b"c"#, r#"line2 "data1",""Data2""#];
    for case in cases {
        let cleaned = clean(case);
        let quotes = cleaned.chars().filter(|&c| c == '"').count();
        assert_eq!(quotes % 2, 0, "odd quote count after repair for {case:?}");
    }
}

#[test]
fn test_multibyte_content_preserved() {
    let line = "3,Søren,Kierkegård,\"Nytorv 2, København\"";
    assert_eq!(clean(line), line);
}
