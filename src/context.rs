use std::collections::HashMap;
use std::env;

/// A trait for providing variable values during substitution.
pub trait VariableProvider {
    /// Retrieve the value of a variable by name.
    fn get_value(&self, key: &str) -> Option<&str>;
}

impl VariableProvider for HashMap<String, String> {
    fn get_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(|s| s.as_str())
    }
}

/// A simple in-memory context.
#[derive(Debug, Clone, Default)]
pub struct SimpleContext {
    vars: HashMap<String, String>,
}

impl SimpleContext {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Snapshot of the process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Self {
        let vars = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl VariableProvider for SimpleContext {
    fn get_value(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }
}

/// Looks keys up in `overlay` first, then falls back to `base`.
pub struct OverlayProvider<'a, P: VariableProvider + ?Sized> {
    base: &'a P,
    overlay: &'a HashMap<String, String>,
}

impl<'a, P: VariableProvider + ?Sized> OverlayProvider<'a, P> {
    pub fn new(base: &'a P, overlay: &'a HashMap<String, String>) -> Self {
        Self { base, overlay }
    }
}

impl<'a, P: VariableProvider + ?Sized> VariableProvider for OverlayProvider<'a, P> {
    fn get_value(&self, key: &str) -> Option<&str> {
        self.overlay
            .get(key)
            .map(|s| s.as_str())
            .or_else(|| self.base.get_value(key))
    }
}
