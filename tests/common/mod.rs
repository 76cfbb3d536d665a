use substvar::{Config, Substvar};

#[allow(dead_code)]
pub fn create_substvar() -> Substvar {
    create_substvar_with_config(Config::default())
}

#[allow(dead_code)]
pub fn create_lenient_substvar() -> Substvar {
    create_substvar_with_config(Config::lenient())
}

#[allow(dead_code)]
pub fn create_substvar_with_config(config: Config) -> Substvar {
    let mut substvar = Substvar::with_config(config);
    substvar.add_variable("NAME", "World");
    substvar.add_variable("EMPTY", "");
    substvar.add_variable("TEST_VAR", "test_value");
    substvar
}

/// Substituted text of a line that is expected to succeed.
#[allow(dead_code)]
pub fn replace(substvar: &Substvar, line: &str) -> String {
    substvar.replace_line(line).unwrap().text.into_owned()
}
