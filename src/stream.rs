use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Error, Warning};
use crate::replacer::Replacer;
use crate::scanner::Scanner;

/// Totals of one stream run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Lines written to the output
    pub lines: usize,
    /// Warnings written to the diagnostics channel
    pub warnings: usize,
}

/// Replaces all `${KEY}` placeholders in an input stream, line by line.
///
/// Every substituted line is written with a trailing `\n`. One warning line per
/// missing key goes to `diagnostics`.
///
/// # Errors
///
/// Stops at the first line with a missing key if the replacer fails on missing
/// values; that line is not written. The warning for the failing key is still
/// written to `diagnostics`, but no `StreamSummary` is returned to count it.
/// Also fails if reading or writing fails.
pub fn replace_in_stream<R, W, D>(
    replacer: &Replacer<'_>,
    reader: R,
    writer: &mut W,
    diagnostics: &mut D,
) -> Result<StreamSummary, Error>
where
    R: BufRead,
    W: Write + ?Sized,
    D: Write + ?Sized,
{
    let mut summary = StreamSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let substitution = match replacer.replace_line(&line) {
            Ok(substitution) => substitution,
            Err(Error::MissingVar { key, partial }) => {
                writeln!(diagnostics, "{}", Warning::missing(&key))?;
                debug!(line = idx + 1, key = %key, "aborting on missing value");
                return Err(Error::MissingVar { key, partial });
            }
            Err(e) => return Err(e),
        };

        for key in &substitution.missing {
            writeln!(diagnostics, "{}", Warning::missing(key))?;
            summary.warnings += 1;
        }

        writer.write_all(substitution.text.as_bytes())?;
        writer.write_all(b"\n")?;
        summary.lines += 1;
    }

    writer.flush()?;
    debug!(lines = summary.lines, warnings = summary.warnings, "stream done");
    Ok(summary)
}

/// Writes the key of every placeholder in the input, one per line,
/// in order of appearance and with duplicates.
pub fn list_keys_in_stream<R, W>(reader: R, writer: &mut W, escapes: bool) -> Result<usize, Error>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        for key in Scanner::new(&line).escapes(escapes).keys() {
            writeln!(writer, "{}", key)?;
            count += 1;
        }
    }
    writer.flush()?;
    Ok(count)
}
