use std::borrow::Cow;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::Config;
use crate::context::{OverlayProvider, VariableProvider};
use crate::error::Error;
use crate::scanner::{may_contain_placeholder, LookupResult, Scanner};

/// Result of substituting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution<'b> {
    pub text: Cow<'b, str>,
    /// Keys left in place because they had no value (lenient mode only).
    pub missing: Vec<String>,
}

impl<'b> Substitution<'b> {
    fn unchanged(line: &'b str) -> Self {
        Self {
            text: Cow::Borrowed(line),
            missing: Vec::new(),
        }
    }
}

pub struct Replacer<'a> {
    context: &'a dyn VariableProvider,
    config: &'a Config,
}

impl<'a> Replacer<'a> {
    pub fn new(context: &'a dyn VariableProvider, config: &'a Config) -> Self {
        Self { context, config }
    }

    /// Replace all `${KEY}` placeholders in a single line.
    ///
    /// Returns `Cow::Borrowed` if the line came out unchanged.
    ///
    /// # Errors
    ///
    /// `Error::MissingVar` if a key has no value and `fail_on_missing` is set.
    /// The error carries the output produced up to the failing placeholder.
    pub fn replace_line<'b>(&self, line: &'b str) -> Result<Substitution<'b>, Error> {
        if !may_contain_placeholder(line) {
            return Ok(Substitution::unchanged(line));
        }

        let mut missing = Vec::new();
        let out = Scanner::new(line)
            .escapes(self.config.escapes)
            .scan(|key| self.lookup_key(key, &mut missing))?;

        let text = if out == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(out)
        };
        Ok(Substitution { text, missing })
    }

    /// Replace with additional temporary variables, which take precedence.
    pub fn replace_line_with<'b>(
        &self,
        line: &'b str,
        extra_vars: &HashMap<String, String>,
    ) -> Result<Substitution<'b>, Error> {
        let overlay = OverlayProvider::new(self.context, extra_vars);
        let temp_replacer = Replacer {
            context: &overlay,
            config: self.config,
        };
        temp_replacer.replace_line(line)
    }

    fn lookup_key(&self, key: &str, missing: &mut Vec<String>) -> LookupResult<'a> {
        match self.context.get_value(key) {
            Some(value) => {
                trace!(key, "resolved");
                LookupResult::Found(Cow::Borrowed(value))
            }
            None => {
                debug!(key, strict = self.config.fail_on_missing, "no value supplied");
                if self.config.fail_on_missing {
                    LookupResult::Missing(key.to_owned())
                } else {
                    missing.push(key.to_owned());
                    LookupResult::Found(Cow::Owned(format!("${{{}}}", key)))
                }
            }
        }
    }
}
