mod config;
mod context;
mod error;
pub mod key_value;
mod replacer;
pub mod scanner;
mod stream;

use std::collections::{BTreeSet, HashMap};
use std::io::{BufRead, Write};

pub use config::Config;
pub use context::{OverlayProvider, SimpleContext, VariableProvider};
pub use error::{Error, Warning};
pub use replacer::{Replacer, Substitution};
pub use stream::{list_keys_in_stream, replace_in_stream, StreamSummary};

/// Main entry point for the substitution engine.
#[derive(Debug, Clone)]
pub struct Substvar {
    config: Config,
    context: SimpleContext,
}

impl Default for Substvar {
    fn default() -> Self {
        Self::new()
    }
}

impl Substvar {
    /// An engine with no variables and the default (strict) configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            context: SimpleContext::new(),
        }
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            context: SimpleContext::new(),
        }
    }

    /// An engine whose variables are seeded from the process environment.
    pub fn from_env(config: Config) -> Self {
        Self {
            config,
            context: SimpleContext::from_env(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Add a variable to the internal context, replacing any previous value.
    pub fn add_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.context.insert(key, value);
    }

    /// Add several variables at once; later pairs win over earlier ones and
    /// over existing values.
    pub fn add_variables<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.context.extend(pairs);
    }

    pub fn replacer(&self) -> Replacer<'_> {
        Replacer::new(&self.context, &self.config)
    }

    /// Substitute one line using variables from the context.
    pub fn replace_line<'b>(&self, line: &'b str) -> Result<Substitution<'b>, Error> {
        self.replacer().replace_line(line)
    }

    /// Substitute one line using temporary additional variables.
    pub fn replace_line_with<'b>(
        &self,
        line: &'b str,
        extra_vars: &HashMap<String, String>,
    ) -> Result<Substitution<'b>, Error> {
        self.replacer().replace_line_with(line, extra_vars)
    }

    /// Substitute every line of `reader` into `writer`, stopping at the first failure.
    pub fn replace_stream<R, W, D>(
        &self,
        reader: R,
        writer: &mut W,
        diagnostics: &mut D,
    ) -> Result<StreamSummary, Error>
    where
        R: BufRead,
        W: Write + ?Sized,
        D: Write + ?Sized,
    {
        replace_in_stream(&self.replacer(), reader, writer, diagnostics)
    }
}

/// Keys referenced by `${KEY}` placeholders anywhere in `input`, sorted and de-duplicated.
pub fn find_variable_references(input: &str) -> Vec<String> {
    let variables: BTreeSet<String> = input
        .lines()
        .flat_map(|line| scanner::Scanner::new(line).keys())
        .collect();
    variables.into_iter().collect()
}
