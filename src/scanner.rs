use std::borrow::Cow;
use std::mem;

use crate::error::Error;

/// Position of the scanner relative to a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Outside any placeholder
    #[default]
    Text,
    /// Just saw `$`
    SawDollar,
    /// Saw a run of two or more `$`
    SawDoubleDollar,
    /// Accumulating the key after `${`
    InKey,
}

/// Outcome of resolving one placeholder key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult<'v> {
    Found(Cow<'v, str>),
    /// Aborts the scan of the current line.
    Missing(String),
}

/// Returns true if `line` contains a `$`, i.e. may need substitution at all.
pub fn may_contain_placeholder(line: &str) -> bool {
    memchr::memchr(b'$', line.as_bytes()).is_some()
}

/// Character-by-character `${KEY}` scanner for a single line.
#[derive(Debug)]
pub struct Scanner<'a> {
    line: &'a str,
    escapes: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, escapes: true }
    }

    /// Enable or disable `$${` as an escaped `${`.
    pub fn escapes(mut self, enabled: bool) -> Self {
        self.escapes = enabled;
        self
    }

    /// Scan the whole line, calling `resolve` for every closed placeholder.
    ///
    /// Returns the assembled line, or `Error::MissingVar` carrying the output
    /// produced so far as soon as `resolve` reports a missing key.
    pub fn scan<'v, F>(&self, mut resolve: F) -> Result<String, Error>
    where
        F: FnMut(&str) -> LookupResult<'v>,
    {
        let mut scan = LineScan::new(self.line.len(), self.escapes);
        for c in self.line.chars() {
            scan.step(c, &mut resolve)?;
        }
        Ok(scan.finish())
    }

    /// Keys of all closed placeholders, in order of appearance, duplicates included.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if !may_contain_placeholder(self.line) {
            return keys;
        }
        // The recorder never reports a missing key, so the scan cannot abort.
        // Unclosed placeholders never reach the resolver and are not listed.
        self.scan(|key| {
            keys.push(key.to_owned());
            LookupResult::Found(Cow::Borrowed(""))
        })
        .ok();
        keys
    }
}

/// Accumulators of one line scan.
struct LineScan {
    state: ScanState,
    escapes: bool,
    plain: String,
    pending: String,
    key: String,
    out: String,
}

impl LineScan {
    fn new(capacity: usize, escapes: bool) -> Self {
        Self {
            state: ScanState::default(),
            escapes,
            plain: String::with_capacity(capacity),
            pending: String::with_capacity(4),
            key: String::with_capacity(32),
            out: String::with_capacity(capacity + capacity / 2),
        }
    }

    fn flush_pending(&mut self) {
        self.out.push_str(&self.pending);
        self.pending.clear();
    }

    fn step<'v, F>(&mut self, c: char, resolve: &mut F) -> Result<(), Error>
    where
        F: FnMut(&str) -> LookupResult<'v>,
    {
        self.state = match (self.state, c) {
            (ScanState::Text, '$') => {
                self.out.push_str(&self.plain);
                self.plain.clear();
                self.pending.push(c);
                ScanState::SawDollar
            }
            (ScanState::Text, _) => {
                self.plain.push(c);
                ScanState::Text
            }
            (ScanState::SawDollar, '$') if self.escapes => {
                self.pending.push(c);
                ScanState::SawDoubleDollar
            }
            (ScanState::SawDollar, '$') => {
                // First `$` is literal, the second one starts over.
                self.flush_pending();
                self.pending.push(c);
                ScanState::SawDollar
            }
            (ScanState::SawDollar, '{') => {
                self.pending.clear();
                ScanState::InKey
            }
            (ScanState::SawDollar, _) => {
                self.flush_pending();
                self.plain.push(c);
                ScanState::Text
            }
            (ScanState::SawDoubleDollar, '$') => {
                self.pending.push(c);
                ScanState::SawDoubleDollar
            }
            (ScanState::SawDoubleDollar, _) => {
                if c == '{' {
                    // "$${" -> "${", "$$${" -> "$${"
                    self.pending.pop();
                }
                self.pending.push(c);
                self.flush_pending();
                ScanState::Text
            }
            (ScanState::InKey, '}') => {
                match resolve(&self.key) {
                    LookupResult::Found(value) => self.out.push_str(&value),
                    LookupResult::Missing(key) => {
                        return Err(Error::MissingVar {
                            key,
                            partial: mem::take(&mut self.out),
                        });
                    }
                }
                self.key.clear();
                ScanState::Text
            }
            (ScanState::InKey, _) => {
                self.key.push(c);
                ScanState::InKey
            }
        };
        Ok(())
    }

    fn finish(mut self) -> String {
        self.out.push_str(&self.plain);
        self.out.push_str(&self.pending);
        if self.state == ScanState::InKey {
            // Unclosed placeholder stays literal.
            self.out.push_str("${");
            self.out.push_str(&self.key);
        }
        self.out
    }
}
