mod common;
use common::{create_substvar, create_substvar_with_config, replace};
use substvar::Config;

#[test]
fn test_escaped_placeholder() {
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "$${NAME}"), "${NAME}");
}

#[test]
fn test_escaped_next_to_real_placeholder() {
    let mut substvar = create_substvar();
    substvar.add_variable("key_a", "1");
    let result = replace(&substvar, "a ${key_a} $${key_a} b");
    assert_eq!(result, "a 1 ${key_a} b");
}

#[test]
fn test_escaped_missing_key_is_not_looked_up() {
    // strict mode, yet no failure
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "$${MISSING}"), "${MISSING}");
}

#[test]
fn test_triple_dollar_drops_one() {
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "$$${NAME}"), "$${NAME}");
}

#[test]
fn test_double_dollar_before_other_text() {
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "pid $$5 here"), "pid $$5 here");
    assert_eq!(replace(&substvar, "cost: $$"), "cost: $$");
}

#[test]
fn test_scan_resumes_after_escape() {
    let substvar = create_substvar();
    assert_eq!(replace(&substvar, "$$x ${NAME}"), "$$x World");
    assert_eq!(replace(&substvar, "$${NAME} ${NAME}"), "${NAME} World");
}

#[test]
fn test_escapes_disabled() {
    let config = Config {
        escapes: false,
        ..Config::default()
    };
    let substvar = create_substvar_with_config(config);
    assert_eq!(replace(&substvar, "$${NAME}"), "$World");
    assert_eq!(replace(&substvar, "$$$"), "$$$");
}
