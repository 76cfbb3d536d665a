use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;

fn pair_regex() -> &'static Regex {
    static PAIR: OnceLock<Regex> = OnceLock::new();
    PAIR.get_or_init(|| {
        Regex::new(r"^(?P<key>[^=\x00]+)=(?P<value>[^\x00]*)$").expect("pair regex is valid")
    })
}

/// A `KEY=VALUE` pair as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    /// Split at the first `=`. The key must not be empty; the value may be.
    pub fn parse(blob: &str) -> Result<Self, Error> {
        let caps = pair_regex().captures(blob).ok_or_else(|| {
            Error::InvalidPair(format!(
                "'{}'; expected KEY=VALUE with a non-empty KEY and no NUL characters",
                blob
            ))
        })?;
        Ok(Self {
            key: caps["key"].to_owned(),
            value: caps["value"].to_owned(),
        })
    }

    pub fn into_tuple(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl FromStr for Pair {
    type Err = Error;

    fn from_str(blob: &str) -> Result<Self, Self::Err> {
        Self::parse(blob)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'='{}'", self.key, self.value)
    }
}
