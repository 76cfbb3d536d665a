mod common;
use common::{create_lenient_substvar, create_substvar, replace};
use std::borrow::Cow;
use substvar::Error;

#[test]
fn test_lone_dollar_followed_by_text() {
    let substvar = create_substvar();
    let result = substvar.replace_line("Price: $5 (cheap)").unwrap();
    assert_eq!(result.text, "Price: $5 (cheap)");
    assert!(matches!(result.text, Cow::Borrowed(_)));
}

#[test]
fn test_literal_dollar_followed_by_space() {
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "$ NotVar"), "$ NotVar");
}

#[test]
fn test_literal_dollar_end_of_line() {
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "Value: $"), "Value: $");
}

#[test]
fn test_unclosed_brace_is_literal() {
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "a ${NAME"), "a ${NAME");
    assert_eq!(replace(&substvar, "${NAME} ${NAME"), "World ${NAME");
}

#[test]
fn test_unclosed_brace_without_key() {
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "a ${"), "a ${");
}

#[test]
fn test_unclosed_escaped_brace() {
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "a $${NAME"), "a ${NAME");
    assert_eq!(replace(&substvar, "a $${"), "a ${");
}

#[test]
fn test_empty_key() {
    let mut substvar = create_substvar();
    substvar.add_variable("", "empty_key_val");
    assert_eq!(replace(&substvar, "${}"), "empty_key_val");
}

#[test]
fn test_numeric_start_key() {
    let mut substvar = create_substvar();
    substvar.add_variable("1VAR", "numeric");
    assert_eq!(replace(&substvar, "${1VAR}"), "numeric");
}

#[test]
fn test_closing_brace_outside_placeholder() {
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "a } b }"), "a } b }");
    assert_eq!(replace(&substvar, "${NAME}}"), "World}");
}

#[test]
fn test_opening_brace_inside_key() {
    let substvar = create_substvar();
    match substvar.replace_line("${A{B}") {
        Err(Error::MissingVar { key, .. }) => assert_eq!(key, "A{B"),
        other => panic!("Expected MissingVar error, got {:?}", other),
    }
}

#[test]
fn test_no_nested_placeholders() {
    let substvar = create_lenient_substvar();
    let result = substvar.replace_line("${${NAME}}").unwrap();
    assert_eq!(result.text, "${${NAME}}");
    assert_eq!(result.missing, vec!["${NAME"]);
}
