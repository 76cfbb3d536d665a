#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Abort on a key without value (strict). When false the placeholder
    /// is left in the output unchanged (lenient).
    pub fail_on_missing: bool,
    /// Treat `$${` as an escaped, literal `${`
    pub escapes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fail_on_missing: true,
            escapes: true,
        }
    }
}

impl Config {
    pub fn lenient() -> Self {
        Self {
            fail_on_missing: false,
            ..Self::default()
        }
    }
}
