//! Tests for the quote-state tokenizer

use crate::app::services::record_parser::tokenizer::{TokenizeError, tokenize};

#[test]
fn test_plain_fields() {
    let fields = tokenize("1,John,Doe,123 Main St").unwrap();
    assert_eq!(fields, vec!["1", "John", "Doe", "123 Main St"]);
}

#[test]
fn test_fields_are_trimmed() {
    let fields = tokenize(" 1 , John ,Doe ,  123 Main St  ").unwrap();
    assert_eq!(fields, vec!["1", "John", "Doe", "123 Main St"]);
}

#[test]
fn test_separator_inside_quotes_is_literal() {
    let fields = tokenize(r#"2,Jane,Smith,"1 A St, Apt 2""#).unwrap();
    assert_eq!(fields, vec!["2", "Jane", "Smith", "1 A St, Apt 2"]);
}

#[test]
fn test_doubled_quote_inside_quotes_collapses() {
    let fields = tokenize(r#"2,"O""Brien",Smith,addr"#).unwrap();
    assert_eq!(fields[1], r#"O"Brien"#);
}

#[test]
fn test_doubled_quote_in_unquoted_field_collapses() {
    // This is the shape the sanitizer produces for a stray quote
    let fields = tokenize(r#"ab""cd,x,y,z"#).unwrap();
    assert_eq!(fields[0], r#"ab"cd"#);
}

#[test]
fn test_empty_quoted_field() {
    let fields = tokenize(r#"1,"",Doe,addr"#).unwrap();
    assert_eq!(fields, vec!["1", "", "Doe", "addr"]);
}

#[test]
fn test_quoted_field_with_leading_whitespace_before_quote() {
    let fields = tokenize(r#"1, "John" ,Doe,addr"#).unwrap();
    assert_eq!(fields[1], "John");
}

#[test]
fn test_bare_line_yields_single_empty_field() {
    assert_eq!(tokenize("").unwrap(), vec![""]);
}

#[test]
fn test_trailing_separator_yields_trailing_empty_field() {
    assert_eq!(tokenize("a,b,c,").unwrap(), vec!["a", "b", "c", ""]);
}

#[test]
fn test_unterminated_quote_is_a_fault() {
    let err = tokenize(r#""John Doe"#).unwrap_err();
    assert_eq!(err, TokenizeError::UnterminatedQuote { column: 1 });
}

#[test]
fn test_unterminated_quote_reports_opening_column() {
    let err = tokenize(r#"1,"John"#).unwrap_err();
    assert_eq!(err, TokenizeError::UnterminatedQuote { column: 3 });
}

#[test]
fn test_lone_mid_field_quote_kept_verbatim() {
    let fields = tokenize(r#"ab"cd,x,y,z"#).unwrap();
    assert_eq!(fields[0], r#"ab"cd"#);
}

#[test]
fn test_quote_only_field_is_literal_quote() {
    let fields = tokenize(r#"1,"""",Doe,addr"#).unwrap();
    assert_eq!(fields[1], r#"""#);
}
